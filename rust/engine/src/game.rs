use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::errors::GameError;
use crate::history::{GameSummary, RoundRecord};
use crate::player::{Player, STARTING_STACK};
use crate::strategy::Strategy;
use crate::table::{chips_on_table, Seat};

/// Seed used when none is configured, so unseeded runs stay reproducible.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Hole cards for every seat plus the five board cards must fit in one deck.
pub const MAX_SEATS: usize = (52 - 5) / 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub small_blind: u32,
    pub total_rounds: u32,
    pub starting_stack: u32,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            small_blind: 10,
            total_rounds: 20,
            starting_stack: STARTING_STACK,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.small_blind == 0 {
            return Err(GameError::InvalidConfig("small_blind must be >0".into()));
        }
        if self.total_rounds == 0 {
            return Err(GameError::InvalidConfig("total_rounds must be >0".into()));
        }
        if self.starting_stack == 0 {
            return Err(GameError::InvalidConfig("starting_stack must be >0".into()));
        }
        Ok(())
    }
}

/// A fixed table playing a configured number of rounds, moving the dealer
/// button one seat after each.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    seats: Vec<Seat>,
    engine: Engine,
    /// Index of the seat holding the dealer button
    button_index: usize,
    rounds_played: u32,
    records: Vec<RoundRecord>,
    aborted: Vec<u32>,
    stop: Option<Arc<AtomicBool>>,
}

impl Game {
    pub fn new(config: GameConfig, seats: Vec<Seat>) -> Result<Self, GameError> {
        config.validate()?;
        if seats.len() < 2 {
            return Err(GameError::NotEnoughPlayers { found: seats.len() });
        }
        if seats.len() > MAX_SEATS {
            return Err(GameError::InvalidConfig(format!(
                "{} seats exceed the deck's capacity of {MAX_SEATS}",
                seats.len()
            )));
        }
        if chips_on_table(&seats).is_none() {
            return Err(GameError::InvalidConfig(
                "total chips on the table overflow u32".into(),
            ));
        }
        let mut names = HashSet::new();
        for s in &seats {
            if !names.insert(s.player.name()) {
                return Err(GameError::InvalidConfig(format!(
                    "duplicate player name {}",
                    s.player.name()
                )));
            }
        }
        let engine = Engine::new(config.seed.unwrap_or(DEFAULT_SEED), config.small_blind);
        Ok(Self {
            config,
            seats,
            engine,
            button_index: 0,
            rounds_played: 0,
            records: Vec::new(),
            aborted: Vec::new(),
            stop: None,
        })
    }

    /// Seats one player per strategy, each with the configured starting stack.
    pub fn with_strategies<I, N>(config: GameConfig, entrants: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = (N, Box<dyn Strategy>)>,
        N: Into<String>,
    {
        let stack = config.starting_stack;
        let seats = entrants
            .into_iter()
            .map(|(name, strategy)| Seat::new(Player::new(name, stack), strategy))
            .collect();
        Self::new(config, seats)
    }

    /// Checked between rounds; once set, [`Game::play`] stops early.
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn button_index(&self) -> usize {
        self.button_index
    }
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }
    /// Numbers of the rounds abandoned on an illegal move.
    pub fn aborted_rounds(&self) -> &[u32] {
        &self.aborted
    }
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn rotate_button(&mut self) {
        self.button_index = (self.button_index + 1) % self.seats.len();
    }

    /// Plays the next round and advances the button.
    ///
    /// A round aborted by [`GameError::IllegalMove`] still counts as played
    /// and still moves the button; its chips have already been refunded.
    pub fn play_round(&mut self) -> Result<&RoundRecord, GameError> {
        let round = self.rounds_played + 1;
        let result = self
            .engine
            .play_round(round, &mut self.seats, self.button_index);
        if let Err(e @ GameError::IllegalMove { .. }) = &result {
            tracing::warn!(round, error = %e, "round aborted");
            self.aborted.push(round);
            self.rounds_played = round;
            self.rotate_button();
        }
        let record = result?;
        self.rounds_played = round;
        self.rotate_button();
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Plays the remaining configured rounds, or fewer if the stop flag is
    /// raised.
    pub fn play(&mut self) -> Result<GameSummary, GameError> {
        while self.rounds_played < self.config.total_rounds {
            if self.stop_requested() {
                tracing::info!(rounds = self.rounds_played, "game stopped externally");
                break;
            }
            match self.play_round() {
                Ok(_) | Err(GameError::IllegalMove { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        let summary = self.summary();
        tracing::info!(
            rounds = summary.rounds_played,
            button = summary.button,
            "all rounds completed"
        );
        Ok(summary)
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            rounds_played: self.rounds_played,
            button: self.button_index,
            stacks: self
                .seats
                .iter()
                .map(|s| (s.player.name().to_string(), s.player.stack()))
                .collect(),
            rounds: self.records.clone(),
            aborted: self.aborted.clone(),
        }
    }

    fn stop_requested(&self) -> bool {
        self.stop
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}
