//! The decision-source seam between the engine and whatever picks moves.

use crate::cards::Card;
use crate::history::Action;
use crate::player::PlayerAction;

/// Read-only view of the table handed to a strategy on its turn.
#[derive(Debug, Clone, Copy)]
pub struct GameStateSnapshot<'a> {
    pub pot: u32,
    /// Amount a call must pay on this street
    pub current_bet: u32,
    pub community_cards: &'a [Card],
    pub action_history: &'a [Action],
}

/// Decides moves for one seat.
///
/// `play_turn` is a blocking call: the engine waits for it before the next
/// seat acts. Private knowledge such as the pocket cards arrives through
/// [`Strategy::on_deal`], never through the snapshot.
///
/// # Example Implementation
///
/// ```rust
/// use holdem_engine::player::PlayerAction;
/// use holdem_engine::strategy::{GameStateSnapshot, Strategy};
///
/// struct AlwaysCall;
///
/// impl Strategy for AlwaysCall {
///     fn name(&self) -> &str {
///         "AlwaysCall"
///     }
///
///     fn play_turn(&mut self, _state: &GameStateSnapshot<'_>) -> PlayerAction {
///         PlayerAction::Call
///     }
/// }
/// ```
pub trait Strategy {
    fn name(&self) -> &str;

    /// Receives this seat's pocket cards at the start of each round.
    fn on_deal(&mut self, _hole: [Card; 2]) {}

    fn play_turn(&mut self, state: &GameStateSnapshot<'_>) -> PlayerAction;
}
