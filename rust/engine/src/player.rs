use crate::cards::Card;
use crate::errors::InsufficientChips;
use serde::{Deserialize, Serialize};

/// A move declared by a decision source. The engine may degrade it (a call
/// or raise the stack cannot cover becomes an all-in) before recording it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the round
    Fold,
    /// Check (no bet, only valid if no bet is open)
    Check,
    /// Pay the current bet
    Call,
    /// Raise the current bet to the given amount
    Raise(u32),
    /// Commit all remaining chips
    AllIn,
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 200;

/// A seated player: chip stack, pocket cards and per-round status flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Unique name used as the player's identity
    name: String,
    /// Current chip stack
    stack: u32,
    /// Pocket cards (empty or 2 cards)
    hole: Vec<Card>,
    /// Still contesting the pot this round
    is_active: bool,
    /// Whole stack committed this round
    is_all_in: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: u32) -> Self {
        Self {
            name: name.into(),
            stack,
            hole: Vec::with_capacity(2),
            is_active: true,
            is_all_in: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn is_active(&self) -> bool {
        self.is_active
    }
    pub fn is_all_in(&self) -> bool {
        self.is_all_in
    }

    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }

    pub fn give_cards(&mut self, cards: [Card; 2]) {
        self.hole.clear();
        self.hole.extend_from_slice(&cards);
    }

    /// Clears the hand and the per-round flags. Stack is kept.
    pub fn reset_for_round(&mut self) {
        self.hole.clear();
        self.is_active = true;
        self.is_all_in = false;
    }

    pub fn fold(&mut self) {
        self.is_active = false;
    }

    /// Never saturates in play: tables are capped by [`crate::table::chips_on_table`].
    pub fn add_amount(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Takes `amount` chips from the stack. The stack is left untouched when
    /// it cannot cover the amount.
    pub fn remove_amount(&mut self, amount: u32) -> Result<(), InsufficientChips> {
        if amount > self.stack {
            return Err(InsufficientChips {
                requested: amount,
                available: self.stack,
            });
        }
        self.stack -= amount;
        Ok(())
    }

    /// Commits the whole stack and flags the player all-in. Returns the chips
    /// moved.
    pub fn commit_all_in(&mut self) -> u32 {
        let amount = self.stack;
        self.stack = 0;
        self.is_all_in = true;
        amount
    }
}
