//! Error types for the CLI application.

use std::fmt;

use holdem_engine::errors::GameError;

/// Custom error type for CLI operations.
///
/// Every variant maps to exit code 2 except [`CliError::Interrupted`].
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, config file reads)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),

    /// Stopped before every configured round was played
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::InvalidCard(_)
            | GameError::InvalidHandInput(_)
            | GameError::DuplicateCard(_) => CliError::InvalidInput(error.to_string()),
            GameError::InvalidConfig(_) | GameError::NotEnoughPlayers { .. } => {
                CliError::Config(error.to_string())
            }
            _ => CliError::Engine(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_errors_are_user_input() {
        let e = CliError::from(GameError::InvalidCard("Zz".into()));
        assert!(matches!(e, CliError::InvalidInput(_)));
        assert!(e.to_string().contains("Zz"));
    }

    #[test]
    fn illegal_moves_are_engine_errors() {
        let e = CliError::from(GameError::IllegalMove {
            seat: 3,
            reason: "check facing a bet".into(),
        });
        assert!(matches!(e, CliError::Engine(_)));
    }
}
