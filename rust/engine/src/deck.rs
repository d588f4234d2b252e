use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A 52-card deck driven by a seeded ChaCha RNG.
///
/// Drawing removes cards from the deck, so a card is only ever held by one
/// collection at a time. The top of the deck is the end of the vector.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Reorders the cards still in the deck. Cards already drawn are not
    /// brought back.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Rebuilds all 52 cards in factory order. The RNG stream continues, so
    /// a reset followed by a shuffle yields a fresh order every round.
    pub fn reset(&mut self) {
        self.cards = full_deck();
    }

    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::DeckExhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        let at = self.cards.len() - n;
        let mut drawn = self.cards.split_off(at);
        // top card first
        drawn.reverse();
        Ok(drawn)
    }

    pub fn draw_one(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted {
            requested: 1,
            remaining: 0,
        })
    }

    /// Puts cards back on the bottom of the deck.
    pub fn return_cards(&mut self, cards: &[Card]) -> Result<(), GameError> {
        let mut seen: HashSet<Card> = self.cards.iter().copied().collect();
        for &c in cards {
            if !seen.insert(c) {
                return Err(GameError::DuplicateCard(c));
            }
        }
        let mut bottom = cards.to_vec();
        bottom.extend(self.cards.drain(..));
        self.cards = bottom;
        Ok(())
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
