//! Command-line definitions parsed with clap.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Texas Hold'em table simulator",
    long_about = None
)]
pub struct HoldemCli {
    /// Log round progress to stderr (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seat a table of AI players and play a number of rounds
    Play {
        #[arg(long, value_parser = clap::value_parser!(u32).range(2..=10))]
        players: Option<u32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,
        #[arg(long = "small-blind", value_parser = clap::value_parser!(u32).range(1..))]
        small_blind: Option<u32>,
        /// Starting stack for every seat
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        stack: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Strategy for every seat: baseline, calling or random
        #[arg(long)]
        ai: Option<String>,
        /// Print one JSON record per round instead of text
        #[arg(long)]
        json: bool,
    },
    /// Evaluate the best hand among 5 to 7 cards, e.g. `As Kd Qh Jc Tc`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
