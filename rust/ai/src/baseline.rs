//! Rule-based strategy driven by hand strength.
//!
//! Preflop strength comes from a lookup over the two pocket cards; postflop
//! strength from the evaluator over pocket plus board.

use holdem_engine::cards::Card;
use holdem_engine::hand::{evaluate_hole_and_board, Category};
use holdem_engine::player::PlayerAction;
use holdem_engine::strategy::{GameStateSnapshot, Strategy};

/// Deterministic baseline opponent.
///
/// **Preflop:**
/// - Strong hands (high pairs 77+, AK, AQ): raise or call
/// - Medium hands (suited connectors, Ax, small pairs): call if cheap
/// - Weak hands: fold to a bet, check if free
///
/// **Postflop:**
/// - Strong hands (two pair and better): bet or call
/// - Medium hands (one pair): check or call small bets
/// - Weak hands: fold unless the price is right
///
/// # Example
///
/// ```rust
/// use holdem_ai::baseline::BaselineAI;
/// use holdem_engine::strategy::Strategy;
///
/// let ai = BaselineAI::new();
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI {
    hole: Option<[Card; 2]>,
}

impl BaselineAI {
    pub fn new() -> Self {
        Self { hole: None }
    }

    /// Preflop hand strength on a 0-10 scale.
    ///
    /// - 9-10: premium hands (AA, KK, QQ, JJ, AKs)
    /// - 7-8: strong hands (TT-99, AK, AQ, KQs)
    /// - 5-6: medium hands (88-77, AJ, suited connectors)
    /// - 3-4: marginal hands (66-22, Ax, broadway)
    /// - 0-2: weak offsuit cards
    fn preflop_strength(hole: [Card; 2]) -> u8 {
        let r1 = hole[0].rank().value();
        let r2 = hole[1].rank().value();
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let suited = hole[0].suit() == hole[1].suit();
        let pick = |s: u8, o: u8| if suited { s } else { o };

        if r1 == r2 {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => pick(10, 8),
            (14, 12) => pick(8, 7),
            (14, 11) => pick(7, 6),
            (14, 10) => pick(6, 5),
            (14, _) => pick(5, 4),
            (13, 12) => pick(7, 6),
            (13, 11) => pick(6, 5),
            (13, 10) => pick(5, 4),
            (12, 11) => pick(6, 5),
            (12, 10) => pick(5, 4),
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Postflop strength on the same 0-10 scale, `None` before the flop.
    fn postflop_strength(hole: [Card; 2], board: &[Card]) -> Option<u8> {
        if board.len() < 3 {
            return None;
        }
        let hand = evaluate_hole_and_board(&hole, board).ok()?;
        let base = match hand.category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush | Category::RoyalFlush => 10,
        };
        // high kicker within the category
        let boost = u8::from(hand.tiebreak[0] >= 12);
        Some((base + boost).min(10))
    }

    /// Share of the pot after calling, 1.0 when the call is free.
    fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (pot + to_call) as f32
    }

    /// Smallest legal raise above `current_bet`, scaled up with the pot.
    fn raise_target(current_bet: u32, pot: u32, fraction: u32) -> u32 {
        let step = (pot / fraction).max(current_bet).max(1);
        current_bet.saturating_add(step)
    }

    fn decide(strength: u8, current_bet: u32, pot: u32) -> PlayerAction {
        if current_bet == 0 {
            return match strength {
                9..=10 => PlayerAction::Raise(Self::raise_target(0, pot.saturating_mul(2), 3)),
                7..=8 => PlayerAction::Raise(Self::raise_target(0, pot, 2)),
                _ => PlayerAction::Check,
            };
        }

        let odds = Self::pot_odds(pot, current_bet);
        match strength {
            9..=10 => PlayerAction::Raise(Self::raise_target(current_bet, pot, 2)),
            7..=8 => PlayerAction::Call,
            5..=6 if odds >= 0.3 || current_bet <= pot / 4 => PlayerAction::Call,
            3..=4 if odds >= 0.4 || current_bet <= pot / 6 => PlayerAction::Call,
            _ => PlayerAction::Fold,
        }
    }
}

impl Strategy for BaselineAI {
    fn name(&self) -> &str {
        "BaselineAI"
    }

    fn on_deal(&mut self, hole: [Card; 2]) {
        self.hole = Some(hole);
    }

    fn play_turn(&mut self, state: &GameStateSnapshot<'_>) -> PlayerAction {
        let Some(hole) = self.hole else {
            return if state.current_bet == 0 {
                PlayerAction::Check
            } else {
                PlayerAction::Fold
            };
        };
        let strength = Self::postflop_strength(hole, state.community_cards)
            .unwrap_or_else(|| Self::preflop_strength(hole));
        Self::decide(strength, state.current_bet, state.pot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::parse_cards;

    fn pocket(s: &str) -> [Card; 2] {
        let cards = parse_cards(s).unwrap();
        [cards[0], cards[1]]
    }

    #[test]
    fn premium_pairs_rate_highest() {
        assert_eq!(BaselineAI::preflop_strength(pocket("Ah As")), 10);
        assert_eq!(BaselineAI::preflop_strength(pocket("Kh Ks")), 10);
    }

    #[test]
    fn ace_king_suited_beats_offsuit() {
        assert_eq!(BaselineAI::preflop_strength(pocket("Ah Kh")), 10);
        assert_eq!(BaselineAI::preflop_strength(pocket("Ah Ks")), 8);
    }

    #[test]
    fn weak_offsuit_rates_low() {
        assert!(BaselineAI::preflop_strength(pocket("7h 2s")) <= 3);
    }

    #[test]
    fn suited_connectors_are_medium() {
        let s = BaselineAI::preflop_strength(pocket("9h 8h"));
        assert!((4..=6).contains(&s));
    }

    #[test]
    fn pot_odds_ratio() {
        assert!((BaselineAI::pot_odds(100, 50) - 0.667).abs() < 0.01);
        assert_eq!(BaselineAI::pot_odds(100, 0), 1.0);
    }

    #[test]
    fn postflop_uses_board() {
        let board = parse_cards("Ad Kc Qh Js Td").unwrap();
        let s = BaselineAI::postflop_strength(pocket("Ah As"), &board).unwrap();
        assert!(s >= 6);
        assert_eq!(BaselineAI::postflop_strength(pocket("Ah As"), &board[..2]), None);
    }

    #[test]
    fn raises_always_exceed_the_open_bet() {
        for bet in [0, 1, 20, 500] {
            for pot in [0, 3, 40, 1000] {
                match BaselineAI::decide(10, bet, pot) {
                    PlayerAction::Raise(n) => assert!(n > bet, "raise {n} vs bet {bet}"),
                    other => panic!("expected raise, got {other:?}"),
                }
            }
        }
    }

    #[test]
    fn weak_hand_checks_when_free_and_folds_to_a_bet() {
        assert_eq!(BaselineAI::decide(1, 0, 30), PlayerAction::Check);
        assert_eq!(BaselineAI::decide(1, 20, 30), PlayerAction::Fold);
    }
}
