#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use holdem_engine::cards::{parse_cards, Card};
use holdem_engine::player::{Player, PlayerAction};
use holdem_engine::strategy::{GameStateSnapshot, Strategy};
use holdem_engine::table::Seat;

pub fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("valid card notation")
}

/// What a strategy saw on one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seen {
    pub pot: u32,
    pub current_bet: u32,
    pub board_len: usize,
    pub history_len: usize,
}

/// Plays queued moves in order, then falls back to `fallback` forever.
pub struct Scripted {
    name: String,
    moves: VecDeque<PlayerAction>,
    fallback: PlayerAction,
    pub seen: Rc<RefCell<Vec<Seen>>>,
    pub dealt: Rc<RefCell<Vec<[Card; 2]>>>,
}

impl Scripted {
    pub fn new(name: &str, moves: &[PlayerAction], fallback: PlayerAction) -> Self {
        Self {
            name: name.to_string(),
            moves: moves.iter().copied().collect(),
            fallback,
            seen: Rc::default(),
            dealt: Rc::default(),
        }
    }

    pub fn always(name: &str, action: PlayerAction) -> Self {
        Self::new(name, &[], action)
    }
}

impl Strategy for Scripted {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_deal(&mut self, hole: [Card; 2]) {
        self.dealt.borrow_mut().push(hole);
    }

    fn play_turn(&mut self, state: &GameStateSnapshot<'_>) -> PlayerAction {
        self.seen.borrow_mut().push(Seen {
            pot: state.pot,
            current_bet: state.current_bet,
            board_len: state.community_cards.len(),
            history_len: state.action_history.len(),
        });
        self.moves.pop_front().unwrap_or(self.fallback)
    }
}

pub fn seat(name: &str, stack: u32, strategy: Scripted) -> Seat {
    Seat::new(Player::new(name, stack), Box::new(strategy))
}

/// `n` seats named p0..pN that always call.
pub fn calling_table(n: usize, stack: u32) -> Vec<Seat> {
    (0..n)
        .map(|i| {
            let name = format!("p{i}");
            seat(&name, stack, Scripted::always(&name, PlayerAction::Call))
        })
        .collect()
}

pub fn total_chips(seats: &[Seat]) -> u32 {
    seats.iter().map(|s| s.player.stack()).sum()
}
