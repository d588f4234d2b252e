//! Fixed move sequences for tests and demos.

use std::collections::VecDeque;

use holdem_engine::player::PlayerAction;
use holdem_engine::strategy::{GameStateSnapshot, Strategy};

/// Plays the queued moves in order, then calls (a check when nothing is
/// open) for the rest of the game.
#[derive(Debug, Clone)]
pub struct Scripted {
    name: String,
    moves: VecDeque<PlayerAction>,
}

impl Scripted {
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves still queued.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Strategy for Scripted {
    fn name(&self) -> &str {
        &self.name
    }

    fn play_turn(&mut self, _state: &GameStateSnapshot<'_>) -> PlayerAction {
        self.moves.pop_front().unwrap_or(PlayerAction::Call)
    }
}
