use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::Hand;

/// Represents a betting street in Texas Hold'em poker.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

/// The move that was actually applied, after any all-in degradation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Move {
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

/// One accepted move in the round's action history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Seat index of the acting player
    pub seat: usize,
    /// Name of the acting player
    pub player: String,
    /// The betting street when this action occurred
    pub street: Street,
    pub kind: Move,
    /// Chips moved into the pot by this action
    pub amount: u32,
}

/// A forced bet posted at the start of a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BlindPost {
    pub seat: usize,
    pub player: String,
    pub amount: u32,
    /// Short stack: the post took the whole stack
    pub all_in: bool,
}

/// A contender's evaluated hand at showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownEntry {
    pub seat: usize,
    pub player: String,
    pub hole: Vec<Card>,
    pub hand: Hand,
}

/// Chips paid to one winner.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub seat: usize,
    pub player: String,
    pub amount: u32,
}

/// Complete record of one round: blinds, actions, board and outcome.
/// Kept in memory only.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number
    pub round: u32,
    /// Seat holding the dealer button for this round
    pub button: usize,
    pub blinds: Vec<BlindPost>,
    /// Chronological list of all player actions
    pub actions: Vec<Action>,
    /// Community cards revealed before the round ended
    pub board: Vec<Card>,
    pub pot: u32,
    /// Empty when the round ended before showdown
    pub showdown: Vec<ShowdownEntry>,
    pub payouts: Vec<Payout>,
}

impl RoundRecord {
    pub fn is_split(&self) -> bool {
        self.payouts.len() > 1
    }

    pub fn went_to_showdown(&self) -> bool {
        !self.showdown.is_empty()
    }
}

/// Final stacks after a game of several rounds.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub rounds_played: u32,
    pub button: usize,
    /// (player name, final stack) in seat order
    pub stacks: Vec<(String, u32)>,
    pub rounds: Vec<RoundRecord>,
    /// Rounds abandoned on an illegal move, chips refunded
    pub aborted: Vec<u32>,
}
