//! # holdem-ai: Seat Strategies for Texas Hold'em
//!
//! Ready-made implementations of [`holdem_engine::strategy::Strategy`] for
//! filling a table.
//!
//! ## Core Components
//!
//! - [`CallingStation`] - Calls (or checks) every turn
//! - [`baseline`] - Rule-based play driven by hand strength and pot odds
//! - [`random`] - Seeded random play for fuzzing tables
//! - [`scripted`] - Replays a fixed queue of moves
//! - [`create_ai`] - Factory that builds a strategy from its kind name
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::create_ai;
//! use holdem_engine::game::{Game, GameConfig};
//!
//! let entrants = (0..3).map(|i| {
//!     let ai = create_ai("baseline", i).expect("known kind");
//!     (format!("bot{i}"), ai)
//! });
//! let config = GameConfig { total_rounds: 5, seed: Some(7), ..GameConfig::default() };
//! let mut game = Game::with_strategies(config, entrants).unwrap();
//! let summary = game.play().unwrap();
//! assert_eq!(summary.rounds_played, 5);
//! ```

use holdem_engine::player::PlayerAction;
use holdem_engine::strategy::{GameStateSnapshot, Strategy};

pub mod baseline;
pub mod random;
pub mod scripted;

pub use baseline::BaselineAI;
pub use random::RandomAI;
pub use scripted::Scripted;

/// Kind names accepted by [`create_ai`].
pub const AI_KINDS: &[&str] = &["baseline", "calling", "random"];

/// Never folds and never raises.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingStation;

impl Strategy for CallingStation {
    fn name(&self) -> &str {
        "CallingStation"
    }

    fn play_turn(&mut self, _state: &GameStateSnapshot<'_>) -> PlayerAction {
        PlayerAction::Call
    }
}

/// Builds a strategy by kind name.
///
/// `seed` only matters for strategies with randomness; give each seat its own
/// seed so random players do not mirror each other. Returns `None` for an
/// unknown kind.
///
/// # Example
///
/// ```rust
/// use holdem_ai::create_ai;
///
/// let ai = create_ai("baseline", 0).unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("telepathic", 0).is_none());
/// ```
pub fn create_ai(kind: &str, seed: u64) -> Option<Box<dyn Strategy>> {
    match kind {
        "baseline" => Some(Box::new(BaselineAI::new())),
        "calling" => Some(Box::new(CallingStation)),
        "random" => Some(Box::new(RandomAI::new(seed))),
        _ => None,
    }
}
