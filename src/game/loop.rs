use log::{info, warn};

use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::input_handler::{InputError, MoveInput};

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    ui: GameDisplay,
    input_source: I,
    renderer: R,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input_source: I, renderer: R, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui: GameDisplay::new(),
            input_source,
            renderer,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Runs until the players quit or the input is closed. A side without
    /// legal moves can still take moves back.
    pub fn run(&mut self) {
        let mut message: Option<String> = None;

        loop {
            let status = self.status(message.take());
            self.renderer
                .render(&mut self.ui, &self.engine, status.as_deref());

            match self.input_source.get_move(self.engine.turn()) {
                Ok(MoveInput::Coordinate { from, to }) => {
                    if let Err(error) = self.engine.make_move_by_squares(from, to) {
                        message = Some(format!("error: {}", error));
                    }
                }
                Ok(MoveInput::Undo) => {
                    if self.engine.undo_move().is_none() {
                        message = Some("nothing to undo".to_string());
                    }
                }
                Ok(MoveInput::Exit) | Err(InputError::EndOfInput) => break,
                Err(InputError::InvalidInput { input }) => {
                    message = Some(format!(
                        "invalid input {:?}, expected a move like e2e4, undo or quit",
                        input
                    ));
                }
                Err(error @ InputError::IOError { .. }) => {
                    warn!("{}", error);
                    break;
                }
            }
        }

        info!(
            "game ended after {} moves",
            self.engine.state().move_log().len()
        );
    }

    fn status(&self, message: Option<String>) -> Option<String> {
        if self.engine.has_valid_moves() {
            return message;
        }

        let no_moves = format!("No legal moves for {}.", self.engine.turn());
        Some(match message {
            Some(message) => format!("{}\n{}", message, no_moves),
            None => no_moves,
        })
    }
}
