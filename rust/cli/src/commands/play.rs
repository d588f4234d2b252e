//! # Play Command
//!
//! Seats a table of AI players and plays the configured number of rounds,
//! printing every round's outcome followed by the final stacks.
//!
//! Settings come from [`crate::config`] with the command-line flags applied
//! last. Seat `i` gets strategy seed `seed + i`, so one seed reproduces the
//! whole table.
//!
//! ## Environment
//!
//! - `HOLDEM_BREAK_AFTER`: stop after N rounds and report an interruption

use std::io::Write;

use holdem_ai::create_ai;
use holdem_engine::errors::GameError;
use holdem_engine::game::{DEFAULT_SEED, Game};
use holdem_engine::history::{GameSummary, RoundRecord};

use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;

/// Command-line overrides for `play`; `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct PlayArgs {
    pub players: Option<u32>,
    pub rounds: Option<u32>,
    pub small_blind: Option<u32>,
    pub stack: Option<u32>,
    pub seed: Option<u64>,
    pub ai: Option<String>,
    pub json: bool,
}

impl PlayArgs {
    fn apply(self, cfg: &mut Config) {
        if let Some(v) = self.players {
            cfg.players = v;
        }
        if let Some(v) = self.rounds {
            cfg.rounds = v;
        }
        if let Some(v) = self.small_blind {
            cfg.small_blind = v;
        }
        if let Some(v) = self.stack {
            cfg.starting_stack = v;
        }
        if let Some(v) = self.seed {
            cfg.seed = Some(v);
        }
        if let Some(v) = self.ai {
            cfg.ai = v;
        }
    }
}

/// Handle the play command.
///
/// # Errors
///
/// * `CliError::Config` when the merged settings are invalid
/// * `CliError::Engine` when the engine fails for any reason other than an
///   illegal move; an illegal move only aborts its own round
/// * `CliError::Interrupted` when `HOLDEM_BREAK_AFTER` stops the game early
pub fn handle_play_command(
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let json = args.json;
    let mut cfg = config::resolve_with_sources()
        .map_err(|e| CliError::Config(e.to_string()))?
        .config;
    args.apply(&mut cfg);
    config::validate(&cfg).map_err(|e| CliError::Config(e.to_string()))?;

    let seed = cfg.seed.unwrap_or(DEFAULT_SEED);
    let mut game_config = cfg.game_config();
    game_config.seed = Some(seed);

    let entrants = (1..=cfg.players)
        .map(|i| {
            create_ai(&cfg.ai, seed.wrapping_add(u64::from(i)))
                .map(|ai| (format!("player{}", i), ai))
                .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", cfg.ai)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let mut game = Game::with_strategies(game_config, entrants)?;

    let break_after = break_after(err)?;

    if !json {
        writeln!(
            out,
            "play: players={} rounds={} small_blind={} stack={} seed={} ai={}",
            cfg.players, cfg.rounds, cfg.small_blind, cfg.starting_stack, seed, cfg.ai
        )?;
    }

    while game.rounds_played() < cfg.rounds {
        if break_after.is_some_and(|b| game.rounds_played() >= b) {
            let msg = format!("played {}/{} rounds", game.rounds_played(), cfg.rounds);
            writeln!(out, "Interrupted: {}", msg)?;
            return Err(CliError::Interrupted(msg));
        }
        let round = game.rounds_played() + 1;
        let record = match game.play_round() {
            Ok(record) => record.clone(),
            Err(e @ GameError::IllegalMove { .. }) => {
                write_aborted(out, round, &e, json)?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if json {
            let line = serde_json::to_string(&record).map_err(std::io::Error::other)?;
            writeln!(out, "{}", line)?;
        } else {
            let button = game.seats()[record.button].player.name();
            write_round(out, &record, button)?;
        }
    }

    let summary = game.summary();
    if json {
        write_summary_json(out, &summary)?;
    } else {
        write_summary(out, &summary)?;
    }
    Ok(())
}

fn write_aborted(
    out: &mut dyn Write,
    round: u32,
    e: &GameError,
    json: bool,
) -> Result<(), CliError> {
    if json {
        let line = serde_json::json!({ "round": round, "aborted": e.to_string() });
        writeln!(out, "{}", line)?;
    } else {
        writeln!(out, "Round {} aborted: {}", round, e)?;
    }
    Ok(())
}

fn break_after(err: &mut dyn Write) -> Result<Option<u32>, CliError> {
    match std::env::var("HOLDEM_BREAK_AFTER") {
        Ok(v) if !v.is_empty() => match v.parse() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                ui::display_warning(err, &format!("ignoring HOLDEM_BREAK_AFTER={}", v))?;
                Ok(None)
            }
        },
        _ => Ok(None),
    }
}

fn write_round(out: &mut dyn Write, record: &RoundRecord, button: &str) -> Result<(), CliError> {
    writeln!(out, "Round {} (button: {})", record.round, button)?;
    writeln!(out, "  Board: {}", ui::format_cards(&record.board))?;
    if record.is_split() {
        writeln!(out, "  Split pot of {}", record.pot)?;
    }
    for p in &record.payouts {
        let hand = record
            .showdown
            .iter()
            .find(|e| e.seat == p.seat)
            .map(|e| e.hand);
        match hand {
            Some(hand) => writeln!(out, "  {} wins {} with {}", p.player, p.amount, hand.category)?,
            None => writeln!(out, "  {} wins {} uncontested", p.player, p.amount)?,
        }
    }
    Ok(())
}

fn write_summary(out: &mut dyn Write, summary: &GameSummary) -> Result<(), CliError> {
    writeln!(out, "Rounds played: {}", summary.rounds_played)?;
    if !summary.aborted.is_empty() {
        let rounds: Vec<String> = summary.aborted.iter().map(u32::to_string).collect();
        writeln!(out, "Aborted rounds: {}", rounds.join(", "))?;
    }
    writeln!(out, "Final stacks:")?;
    for (name, stack) in &summary.stacks {
        writeln!(out, "  {}: {}", name, stack)?;
    }
    Ok(())
}

fn write_summary_json(out: &mut dyn Write, summary: &GameSummary) -> Result<(), CliError> {
    let stacks: Vec<_> = summary
        .stacks
        .iter()
        .map(|(name, stack)| serde_json::json!({ "player": name, "stack": stack }))
        .collect();
    let line = serde_json::json!({
        "rounds_played": summary.rounds_played,
        "button": summary.button,
        "aborted": summary.aborted,
        "stacks": stacks,
    });
    writeln!(out, "{}", line)?;
    Ok(())
}
