//! # holdem-engine: Texas Hold'em Table Engine
//!
//! A deterministic multi-seat Texas Hold'em engine. Deals from a seeded deck,
//! runs the four betting streets, resolves showdowns (splitting tied pots) and
//! rotates the dealer button across rounds.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and notation parsing
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Best-of-seven hand evaluation and comparison
//! - [`rules`] - Move legality and all-in degradation
//! - [`betting`] - Pot, open bet and action history for one round
//! - [`engine`] - Single-round state machine from blinds to showdown
//! - [`game`] - Multi-round play and button rotation
//! - [`strategy`] - The decision-source trait and table snapshot
//! - [`history`] - Action and round records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{evaluate_hand, Category};
//!
//! let cards = parse_cards("Ts Js Qs Ks As 2c 3d").unwrap();
//! let hand = evaluate_hand(&cards).unwrap();
//! assert_eq!(hand.category, Category::RoyalFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All outcomes are reproducible from the seed:
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! deck1.shuffle();
//! deck2.shuffle();
//! assert_eq!(deck1.draw(5).unwrap(), deck2.draw(5).unwrap());
//! ```

pub mod betting;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod history;
pub mod player;
pub mod pot;
pub mod rules;
pub mod strategy;
pub mod table;
