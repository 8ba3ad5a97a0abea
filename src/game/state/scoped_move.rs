use std::ops::Deref;

use crate::chess_move::ChessMove;

use super::GameState;

/// Keeps a move applied to a `GameState` for as long as the guard lives.
/// Dropping the guard undoes the move, so the state is restored on every
/// exit path including an early return or unwind.
pub(super) struct ScopedMove<'a> {
    state: &'a mut GameState,
}

impl<'a> ScopedMove<'a> {
    pub(super) fn apply(state: &'a mut GameState, chess_move: ChessMove) -> Self {
        state.apply_move(chess_move);
        Self { state }
    }
}

impl Deref for ScopedMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.state
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.state.undo_move();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::{E2, E4};

    #[test]
    fn test_move_is_undone_when_guard_drops() {
        let mut state = GameState::new();
        let original = state.clone();
        let chess_move = ChessMove::new(E2, E4, state.board());

        {
            let applied = ScopedMove::apply(&mut state, chess_move);
            assert!(!applied.white_to_move());
            assert_eq!(1, applied.move_log().len());
            assert!(applied.board().is_occupied(E4));
        }

        assert_eq!(original, state);
    }
}
