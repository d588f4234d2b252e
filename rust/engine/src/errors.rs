use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Illegal move from seat {seat}: {reason}")]
    IllegalMove { seat: usize, reason: String },
    #[error("Invalid hand input: {0}")]
    InvalidHandInput(String),
    #[error("Not enough players: {found} seated, at least 2 required")]
    NotEnoughPlayers { found: usize },
    #[error("Deck exhausted: requested {requested}, remaining {remaining}")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("Invalid card notation: {0}")]
    InvalidCard(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    pub(crate) fn illegal(seat: usize, reason: impl Into<String>) -> Self {
        GameError::IllegalMove {
            seat,
            reason: reason.into(),
        }
    }
}

/// Returned by [`crate::player::Player::remove_amount`] when a stack cannot
/// cover the request. The betting engine turns it into an all-in.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Insufficient chips: requested {requested}, available {available}")]
pub struct InsufficientChips {
    pub requested: u32,
    pub available: u32,
}
