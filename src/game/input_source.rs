use std::io::{self, BufRead, StdinLock};

use crate::board::Color;
use crate::input_handler::{read_move_input, InputError, MoveInput};

pub trait InputSource {
    fn get_move(&mut self, current_turn: Color) -> Result<MoveInput, InputError>;
}

/// Reads one request per line from any buffered reader.
pub struct ReaderInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for ReaderInput<R> {
    fn get_move(&mut self, _current_turn: Color) -> Result<MoveInput, InputError> {
        read_move_input(&mut self.reader)
    }
}

/// Both players type their moves into the same terminal.
pub type HumanInput = ReaderInput<StdinLock<'static>>;

impl HumanInput {
    pub fn stdin() -> Self {
        ReaderInput::new(io::stdin().lock())
    }
}
