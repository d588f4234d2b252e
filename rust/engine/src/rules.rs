use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// A move after legality checks, carrying the chips it will move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Raise(u32),
    AllIn(u32),
}

/// Validates a player action against the open bet and the player's stack.
///
/// Converts a [`crate::player::PlayerAction`] into a [`ValidatedAction`].
/// A call or raise the stack cannot fully cover is degraded to an all-in for
/// the whole stack instead of failing. A call when nothing is owed is a check.
///
/// # Arguments
///
/// * `seat` - Seat of the acting player, used in error reports
/// * `stack` - Player's remaining chip stack
/// * `current_bet` - Amount a call pays on this street
/// * `is_all_in` - Whether the player has already committed their stack
/// * `action` - The action the player wishes to perform
///
/// # Errors
///
/// Returns [`GameError::IllegalMove`] when:
/// - checking while a bet is open
/// - raising to an amount at or below the current bet
/// - an all-in player tries anything other than fold or call
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::{validate_action, ValidatedAction};
/// use holdem_engine::player::PlayerAction;
///
/// // Short call becomes all-in
/// let result = validate_action(0, 30, 50, false, PlayerAction::Call);
/// assert_eq!(result, Ok(ValidatedAction::AllIn(30)));
///
/// // Raise must exceed the current bet
/// let result = validate_action(0, 1000, 50, false, PlayerAction::Raise(50));
/// assert!(result.is_err());
/// ```
pub fn validate_action(
    seat: usize,
    stack: u32,
    current_bet: u32,
    is_all_in: bool,
    action: A,
) -> Result<ValidatedAction, GameError> {
    if is_all_in {
        return match action {
            A::Fold => Ok(ValidatedAction::Fold),
            // nothing left to post
            A::Call => Ok(ValidatedAction::Call(0)),
            other => Err(GameError::illegal(
                seat,
                format!("{other:?} from a player who is already all-in"),
            )),
        };
    }

    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if current_bet == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::illegal(
                    seat,
                    format!("cannot check facing a bet of {current_bet}"),
                ))
            }
        }
        A::Call => {
            if current_bet == 0 {
                Ok(ValidatedAction::Check)
            } else if stack <= current_bet {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Call(current_bet))
            }
        }
        A::Raise(amount) => {
            if amount <= current_bet {
                Err(GameError::illegal(
                    seat,
                    format!("raise to {amount} does not exceed current bet {current_bet}"),
                ))
            } else if amount >= stack {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Raise(amount))
            }
        }
        A::AllIn => Ok(ValidatedAction::AllIn(stack)),
    }
}
