//! Seeded random play.

use holdem_engine::player::PlayerAction;
use holdem_engine::strategy::{GameStateSnapshot, Strategy};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Picks a legal-looking move at random. The same seed replays the same
/// choices for the same sequence of snapshots.
#[derive(Debug, Clone)]
pub struct RandomAI {
    rng: ChaCha20Rng,
}

impl RandomAI {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomAI {
    fn name(&self) -> &str {
        "RandomAI"
    }

    fn play_turn(&mut self, state: &GameStateSnapshot<'_>) -> PlayerAction {
        let roll: u32 = self.rng.random_range(0..100);
        let facing_bet = state.current_bet > 0;
        match roll {
            0..=9 if facing_bet => PlayerAction::Fold,
            0..=59 if !facing_bet => PlayerAction::Check,
            0..=74 => PlayerAction::Call,
            75..=96 => {
                let step = self.rng.random_range(1..=state.pot.max(2));
                PlayerAction::Raise(state.current_bet.saturating_add(step))
            }
            _ => PlayerAction::AllIn,
        }
    }
}
