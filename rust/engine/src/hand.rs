use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };
        f.write_str(name)
    }
}

/// Result of evaluating the best five cards out of a set.
///
/// Field order matters: the derived `Ord` compares `category` first and then
/// `tiebreak` lexicographically.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Hand {
    pub category: Category,
    // ranks ordered high -> low by significance, zero padded
    pub tiebreak: [u8; 5],
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key: Vec<String> = self
            .tiebreak
            .iter()
            .take_while(|r| **r != 0)
            .map(|r| r.to_string())
            .collect();
        write!(f, "{} [{}]", self.category, key.join(" "))
    }
}

/// Evaluates the best 5-card poker hand among 5 to 7 cards.
///
/// Every 5-card subset is classified and the strongest kept, so hands whose
/// best combination is not contiguous in rank order are still found.
///
/// # Errors
///
/// [`GameError::InvalidHandInput`] for fewer than 5 or more than 7 cards, or
/// when the same card appears twice.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::hand::{evaluate_hand, Category};
///
/// let cards = parse_cards("Ac 2d 3h 4c 5d 9s Kh").unwrap();
/// let hand = evaluate_hand(&cards).unwrap();
/// assert_eq!(hand.category, Category::Straight);
/// assert_eq!(hand.tiebreak[0], 5);
/// ```
pub fn evaluate_hand(cards: &[Card]) -> Result<Hand, GameError> {
    let n = cards.len();
    if !(5..=7).contains(&n) {
        return Err(GameError::InvalidHandInput(format!(
            "expected 5 to 7 cards, got {n}"
        )));
    }
    let mut seen = HashSet::with_capacity(n);
    for c in cards {
        if !seen.insert(*c) {
            return Err(GameError::InvalidHandInput(format!("duplicate card {c}")));
        }
    }

    let mut best: Option<Hand> = None;
    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let h = classify_five(&five);
                        if best.map_or(true, |cur| h > cur) {
                            best = Some(h);
                        }
                    }
                }
            }
        }
    }
    // n >= 5 guarantees at least one subset
    best.ok_or_else(|| GameError::InvalidHandInput("no 5-card subset".into()))
}

/// Evaluates two pocket cards together with the board.
pub fn evaluate_hole_and_board(hole: &[Card], board: &[Card]) -> Result<Hand, GameError> {
    let mut all = Vec::with_capacity(hole.len() + board.len());
    all.extend_from_slice(hole);
    all.extend_from_slice(board);
    evaluate_hand(&all)
}

pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tiebreak.cmp(&b.tiebreak),
        ord => ord,
    }
}

/// Classifies exactly five cards.
pub fn classify_five(cards: &[Card; 5]) -> Hand {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut rank_mask: u16 = 0;
    for c in cards {
        let r = c.rank().value();
        rank_counts[r as usize] += 1;
        rank_mask |= 1 << r;
    }
    let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight = straight_high_from_mask(rank_mask);

    // (count, rank) pairs, biggest group first, then higher rank first
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    let mut key = [0u8; 5];
    for (slot, &(_, r)) in key.iter_mut().zip(groups.iter()) {
        *slot = r;
    }

    let category = match (flush, straight) {
        (true, Some(14)) => Category::RoyalFlush,
        (true, Some(_)) => Category::StraightFlush,
        _ if groups[0].0 == 4 => Category::FourOfAKind,
        _ if groups[0].0 == 3 && groups[1].0 == 2 => Category::FullHouse,
        (true, None) => Category::Flush,
        (false, Some(_)) => Category::Straight,
        _ if groups[0].0 == 3 => Category::ThreeOfAKind,
        _ if groups[0].0 == 2 && groups[1].0 == 2 => Category::TwoPair,
        _ if groups[0].0 == 2 => Category::OnePair,
        _ => Category::HighCard,
    };

    let tiebreak = match (category, straight) {
        (Category::Straight | Category::StraightFlush | Category::RoyalFlush, Some(high)) => {
            [high, 0, 0, 0, 0]
        }
        _ => key,
    };
    Hand { category, tiebreak }
}

fn straight_high_from_mask(mask: u16) -> Option<u8> {
    // Treat Ace as 14 and, for the wheel only, as 1
    let mut m = mask;
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    // Sliding 5-bit window from Ace(14) down to 5
    for high in (5..=14u8).rev() {
        let window = 0b1_1111u16 << (high - 4);
        if (m & window) == window {
            return Some(high);
        }
    }
    None
}
