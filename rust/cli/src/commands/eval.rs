//! Hand evaluation command.

use std::io::Write;

use holdem_engine::cards::parse_cards;
use holdem_engine::hand::evaluate_hand;

use crate::error::CliError;
use crate::ui;

/// Evaluates the best five-card hand among the given cards.
///
/// Cards may be passed as separate arguments or as one quoted string.
///
/// # Errors
///
/// `CliError::InvalidInput` for bad notation, duplicates, or a card count
/// outside 5..=7.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let parsed = parse_cards(&cards.join(" "))?;
    let hand = evaluate_hand(&parsed)?;

    let key: Vec<String> = hand.tiebreak.iter().map(|r| r.to_string()).collect();
    writeln!(out, "Cards: {}", ui::format_cards(&parsed))?;
    writeln!(out, "Hand: {}", hand.category)?;
    writeln!(out, "Tiebreak: {}", key.join(" "))?;
    Ok(())
}
