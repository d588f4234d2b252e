use crate::cards::Card;
use crate::errors::GameError;
use crate::history::{Action, BlindPost, Move, Street};
use crate::player::{Player, PlayerAction};
use crate::pot::Pot;
use crate::rules::{validate_action, ValidatedAction};
use crate::strategy::GameStateSnapshot;
use crate::table::{active_count, seats_from, Seat};

/// Betting state for one round: the pot, the bet open on the current street
/// and the append-only action history.
#[derive(Debug, Clone)]
pub struct BettingRound {
    pot: Pot,
    current_bet: u32,
    street: Street,
    history: Vec<Action>,
    // chips each seat has put in this round, indexed by seat
    committed: Vec<u32>,
}

impl Default for BettingRound {
    fn default() -> Self {
        Self::new()
    }
}

impl BettingRound {
    pub fn new() -> Self {
        Self {
            pot: Pot::new(),
            current_bet: 0,
            street: Street::Preflop,
            history: Vec::new(),
            committed: Vec::new(),
        }
    }

    pub fn pot(&self) -> u32 {
        self.pot.total()
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn history(&self) -> &[Action] {
        &self.history
    }
    /// Chips `seat` has put into the pot this round.
    pub fn committed(&self, seat: usize) -> u32 {
        self.committed.get(seat).copied().unwrap_or(0)
    }

    /// Moves to `street` and clears the open bet.
    pub fn start_street(&mut self, street: Street) {
        self.street = street;
        self.current_bet = 0;
    }

    pub fn snapshot<'a>(&'a self, board: &'a [Card]) -> GameStateSnapshot<'a> {
        GameStateSnapshot {
            pot: self.pot.total(),
            current_bet: self.current_bet,
            community_cards: board,
            action_history: &self.history,
        }
    }

    /// Posts a forced bet. A stack that cannot cover the blind posts what it
    /// has and goes all-in.
    pub fn post_blind(&mut self, seat: usize, player: &mut Player, amount: u32) -> BlindPost {
        let (paid, all_in) = match player.remove_amount(amount) {
            Ok(()) if player.stack() == 0 => {
                player.commit_all_in();
                (amount, true)
            }
            Ok(()) => (amount, false),
            Err(short) => {
                tracing::warn!(
                    seat,
                    player = player.name(),
                    blind = amount,
                    available = short.available,
                    "short blind posted all-in"
                );
                (player.commit_all_in(), true)
            }
        };
        self.commit(seat, paid);
        BlindPost {
            seat,
            player: player.name().to_string(),
            amount: paid,
            all_in,
        }
    }

    /// Validates and applies one move for the player at `seat`.
    ///
    /// On success exactly one [`Action`] is appended and returned. On error
    /// nothing changes: pot, stack, open bet and history are left as they
    /// were.
    pub fn apply(
        &mut self,
        seat: usize,
        player: &mut Player,
        action: PlayerAction,
    ) -> Result<&Action, GameError> {
        let validated = validate_action(
            seat,
            player.stack(),
            self.current_bet,
            player.is_all_in(),
            action,
        )?;

        let (kind, amount) = match validated {
            ValidatedAction::Fold => {
                player.fold();
                (Move::Fold, 0)
            }
            ValidatedAction::Check => (Move::Check, 0),
            ValidatedAction::Call(amount) => self.pay(seat, player, amount, Move::Call),
            ValidatedAction::Raise(amount) => self.pay(seat, player, amount, Move::Raise),
            ValidatedAction::AllIn(_) => self.pay_all_in(seat, player),
        };
        if kind == Move::Raise {
            self.current_bet = amount;
        }

        tracing::debug!(
            seat,
            player = player.name(),
            street = ?self.street,
            kind = ?kind,
            amount,
            pot = self.pot.total(),
            "action applied"
        );
        self.history.push(Action {
            seat,
            player: player.name().to_string(),
            street: self.street,
            kind,
            amount,
        });
        Ok(&self.history[self.history.len() - 1])
    }

    /// Runs one pass over the table starting at `start`, asking every active
    /// player who is not all-in for exactly one move.
    ///
    /// The pass stops once a single active player is left, since nobody
    /// remains to contest the pot.
    pub fn run_street(
        &mut self,
        seats: &mut [Seat],
        start: usize,
        board: &[Card],
    ) -> Result<(), GameError> {
        let n = seats.len();
        for seat in seats_from(start, n) {
            if active_count(seats) <= 1 {
                break;
            }
            let Seat { player, strategy } = &mut seats[seat];
            if !player.is_active() || player.is_all_in() {
                continue;
            }
            let decision = strategy.play_turn(&self.snapshot(board));
            self.apply(seat, player, decision)?;
        }
        Ok(())
    }

    /// Empties the pot for payout.
    pub fn take_pot(&mut self) -> u32 {
        self.pot.take()
    }

    pub fn take_history(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.history)
    }

    /// Empties the pot back into per-seat refunds, one `(seat, amount)` per
    /// seat that committed chips. Used when a round is abandoned.
    pub fn refund(&mut self) -> Vec<(usize, u32)> {
        self.pot.take();
        std::mem::take(&mut self.committed)
            .into_iter()
            .enumerate()
            .filter(|(_, amount)| *amount > 0)
            .collect()
    }

    fn commit(&mut self, seat: usize, amount: u32) {
        if self.committed.len() <= seat {
            self.committed.resize(seat + 1, 0);
        }
        self.committed[seat] += amount;
        self.pot.add(amount);
    }

    fn pay(&mut self, seat: usize, player: &mut Player, amount: u32, kind: Move) -> (Move, u32) {
        match player.remove_amount(amount) {
            Ok(()) => {
                self.commit(seat, amount);
                (kind, amount)
            }
            Err(short) => {
                tracing::warn!(
                    seat,
                    player = player.name(),
                    requested = short.requested,
                    available = short.available,
                    "stack short, degrading to all-in"
                );
                self.pay_all_in(seat, player)
            }
        }
    }

    fn pay_all_in(&mut self, seat: usize, player: &mut Player) -> (Move, u32) {
        let amount = player.commit_all_in();
        self.commit(seat, amount);
        // an all-in above the open bet raises it
        self.current_bet = self.current_bet.max(amount);
        (Move::AllIn, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blind_equal_to_stack_marks_all_in() {
        let mut round = BettingRound::new();
        let mut p = Player::new("ann", 20);
        let post = round.post_blind(1, &mut p, 20);
        assert!(post.all_in);
        assert!(p.is_all_in());
        assert_eq!(round.pot(), 20);
    }

    #[test]
    fn short_blind_posts_whole_stack() {
        let mut round = BettingRound::new();
        let mut p = Player::new("bob", 7);
        let post = round.post_blind(0, &mut p, 10);
        assert_eq!(post.amount, 7);
        assert!(post.all_in);
        assert_eq!(p.stack(), 0);
        assert_eq!(round.pot(), 7);
        assert!(round.history().is_empty());
    }

    #[test]
    fn start_street_clears_open_bet_but_not_pot() {
        let mut round = BettingRound::new();
        let mut p = Player::new("cy", 100);
        round.apply(0, &mut p, PlayerAction::Raise(40)).unwrap();
        assert_eq!(round.current_bet(), 40);
        round.start_street(Street::Flop);
        assert_eq!(round.current_bet(), 0);
        assert_eq!(round.pot(), 40);
        assert_eq!(round.street(), Street::Flop);
    }

    #[test]
    fn refund_returns_each_seats_commitment() {
        let mut round = BettingRound::new();
        let mut a = Player::new("ann", 100);
        let mut b = Player::new("bob", 100);
        round.post_blind(0, &mut a, 10);
        round.post_blind(2, &mut b, 20);
        round.apply(0, &mut a, PlayerAction::Raise(40)).unwrap();
        assert_eq!(round.committed(0), 50);
        assert_eq!(round.committed(1), 0);
        assert_eq!(round.refund(), vec![(0, 50), (2, 20)]);
        assert_eq!(round.pot(), 0);
        assert_eq!(round.committed(0), 0);
    }
}
