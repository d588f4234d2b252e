use crate::betting::BettingRound;
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::evaluate_hole_and_board;
use crate::history::{Action, BlindPost, Payout, RoundRecord, ShowdownEntry, Street};
use crate::pot::split_evenly;
use crate::table::{active_count, chips_on_table, seat_after, seats_from, Seat};

/// Stages of a single round, in the order they run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    PostBlinds,
    PreflopBetting,
    Flop,
    FlopBetting,
    Turn,
    TurnBetting,
    River,
    RiverBetting,
    Showdown,
    Done,
}

impl Phase {
    pub fn next(self) -> Phase {
        match self {
            Phase::PostBlinds => Phase::PreflopBetting,
            Phase::PreflopBetting => Phase::Flop,
            Phase::Flop => Phase::FlopBetting,
            Phase::FlopBetting => Phase::Turn,
            Phase::Turn => Phase::TurnBetting,
            Phase::TurnBetting => Phase::River,
            Phase::River => Phase::RiverBetting,
            Phase::RiverBetting => Phase::Showdown,
            Phase::Showdown | Phase::Done => Phase::Done,
        }
    }

    /// The street a betting phase belongs to, `None` for non-betting phases.
    pub fn betting_street(self) -> Option<Street> {
        match self {
            Phase::PreflopBetting => Some(Street::Preflop),
            Phase::FlopBetting => Some(Street::Flop),
            Phase::TurnBetting => Some(Street::Turn),
            Phase::RiverBetting => Some(Street::River),
            _ => None,
        }
    }
}

/// What a finished round produced besides the betting history.
#[derive(Debug, Default)]
struct Outcome {
    blinds: Vec<BlindPost>,
    pot: u32,
    showdown: Vec<ShowdownEntry>,
    payouts: Vec<Payout>,
}

/// Seats holding the strongest hand, in the order the entries were given.
/// More than one seat means a split pot.
pub fn showdown_winners(entries: &[ShowdownEntry]) -> Vec<usize> {
    let Some(best) = entries.iter().map(|e| e.hand).max() else {
        return Vec::new();
    };
    entries
        .iter()
        .filter(|e| e.hand == best)
        .map(|e| e.seat)
        .collect()
}

/// Runs one round of Hold'em at a time: blinds, pocket deal, four betting
/// streets with their reveals, and showdown.
///
/// # Examples
///
/// ```
/// use holdem_engine::engine::{Engine, Phase};
///
/// let engine = Engine::new(12345, 10);
/// assert_eq!(engine.big_blind(), 20);
/// assert_eq!(engine.phase(), Phase::Done);
/// ```
#[derive(Debug)]
pub struct Engine {
    /// The deck used for dealing cards
    deck: Deck,
    small_blind: u32,
    /// Community cards on the board (up to 5 cards: flop, turn, river)
    board: Vec<Card>,
    betting: BettingRound,
    phase: Phase,
}

impl Engine {
    pub fn new(seed: u64, small_blind: u32) -> Self {
        Self {
            deck: Deck::new_with_seed(seed),
            small_blind,
            board: Vec::with_capacity(5),
            betting: BettingRound::new(),
            phase: Phase::Done,
        }
    }

    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }
    pub fn big_blind(&self) -> u32 {
        self.small_blind.saturating_mul(2)
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn pot(&self) -> u32 {
        self.betting.pot()
    }
    pub fn history(&self) -> &[Action] {
        self.betting.history()
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Plays one full round with `button` holding the dealer button.
    ///
    /// The round ends early, without further reveals, as soon as a betting
    /// phase leaves a single active player. Otherwise the best hands at
    /// showdown share the pot.
    ///
    /// # Errors
    ///
    /// [`GameError::NotEnoughPlayers`] for fewer than 2 seats and
    /// [`GameError::InvalidConfig`] when the chips on the table do not fit a
    /// `u32`. An illegal move from a strategy aborts the round with
    /// [`GameError::IllegalMove`]; every chip committed so far is handed
    /// back to the seat that put it in.
    pub fn play_round(
        &mut self,
        round: u32,
        seats: &mut [Seat],
        button: usize,
    ) -> Result<RoundRecord, GameError> {
        let n = seats.len();
        if n < 2 {
            return Err(GameError::NotEnoughPlayers { found: n });
        }
        if chips_on_table(seats).is_none() {
            return Err(GameError::InvalidConfig(
                "chips on the table overflow u32".into(),
            ));
        }
        let button = button % n;
        self.start_round(seats);
        tracing::info!(round, button, seats = n, "round started");

        let mut outcome = Outcome::default();
        if let Err(e) = self.run_phases(round, seats, button, &mut outcome) {
            for (seat, amount) in self.betting.refund() {
                seats[seat].player.add_amount(amount);
            }
            self.phase = Phase::Done;
            tracing::warn!(round, error = %e, "round aborted, commitments refunded");
            return Err(e);
        }

        for p in &outcome.payouts {
            tracing::info!(round, seat = p.seat, player = %p.player, amount = p.amount, "pot awarded");
        }
        Ok(RoundRecord {
            round,
            button,
            blinds: outcome.blinds,
            actions: self.betting.take_history(),
            board: self.board.clone(),
            pot: outcome.pot,
            showdown: outcome.showdown,
            payouts: outcome.payouts,
        })
    }

    fn run_phases(
        &mut self,
        round: u32,
        seats: &mut [Seat],
        button: usize,
        outcome: &mut Outcome,
    ) -> Result<(), GameError> {
        let n = seats.len();
        self.phase = Phase::PostBlinds;
        while self.phase != Phase::Done {
            match self.phase {
                Phase::PostBlinds => {
                    outcome.blinds = self.post_blinds(seats, button);
                    self.deal_pockets(seats)?;
                }
                Phase::Flop => self.reveal(3)?,
                Phase::Turn | Phase::River => self.reveal(1)?,
                Phase::Showdown => {
                    outcome.pot = self.betting.pot();
                    let (entries, paid) = self.showdown(seats, button)?;
                    outcome.showdown = entries;
                    outcome.payouts = paid;
                }
                betting => {
                    if let Some(street) = betting.betting_street() {
                        self.betting.start_street(street);
                        let start = seat_after(button, 1, n);
                        tracing::debug!(round, street = ?street, start, "betting street");
                        self.betting.run_street(seats, start, &self.board)?;

                        if active_count(seats) == 1 {
                            outcome.pot = self.betting.pot();
                            outcome.payouts = self.award_uncontested(seats);
                            self.phase = Phase::Done;
                            continue;
                        }
                    }
                }
            }
            self.phase = self.phase.next();
        }
        Ok(())
    }

    fn start_round(&mut self, seats: &mut [Seat]) {
        self.deck.reset();
        self.deck.shuffle();
        self.board.clear();
        self.betting = BettingRound::new();
        for s in seats.iter_mut() {
            s.player.reset_for_round();
        }
    }

    fn post_blinds(&mut self, seats: &mut [Seat], button: usize) -> Vec<BlindPost> {
        let n = seats.len();
        let sb_seat = button;
        let bb_seat = seat_after(button, 1, n);
        let (small, big) = (self.small_blind, self.big_blind());
        let sb = self
            .betting
            .post_blind(sb_seat, &mut seats[sb_seat].player, small);
        let bb = self
            .betting
            .post_blind(bb_seat, &mut seats[bb_seat].player, big);
        vec![sb, bb]
    }

    fn deal_pockets(&mut self, seats: &mut [Seat]) -> Result<(), GameError> {
        for s in seats.iter_mut() {
            let drawn = self.deck.draw(2)?;
            let hole = [drawn[0], drawn[1]];
            s.player.give_cards(hole);
            s.strategy.on_deal(hole);
        }
        Ok(())
    }

    fn reveal(&mut self, n: usize) -> Result<(), GameError> {
        let cards = self.deck.draw(n)?;
        self.board.extend(cards);
        tracing::debug!(board = ?self.board, "community cards revealed");
        Ok(())
    }

    fn award_uncontested(&mut self, seats: &mut [Seat]) -> Vec<Payout> {
        let amount = self.betting.take_pot();
        seats
            .iter_mut()
            .enumerate()
            .filter(|(_, s)| s.player.is_active())
            .map(|(seat, s)| {
                s.player.add_amount(amount);
                Payout {
                    seat,
                    player: s.player.name().to_string(),
                    amount,
                }
            })
            .collect()
    }

    fn showdown(
        &mut self,
        seats: &mut [Seat],
        button: usize,
    ) -> Result<(Vec<ShowdownEntry>, Vec<Payout>), GameError> {
        let n = seats.len();
        let mut entries = Vec::new();
        // payout order: left of the button first
        for seat in seats_from(seat_after(button, 1, n), n) {
            let player = &seats[seat].player;
            if !player.is_active() {
                continue;
            }
            let hand = evaluate_hole_and_board(player.hole_cards(), &self.board)?;
            entries.push(ShowdownEntry {
                seat,
                player: player.name().to_string(),
                hole: player.hole_cards().to_vec(),
                hand,
            });
        }

        let winners = showdown_winners(&entries);
        let amount = self.betting.take_pot();
        let payouts = split_evenly(amount, &winners)
            .into_iter()
            .map(|(seat, share)| {
                let player = &mut seats[seat].player;
                player.add_amount(share);
                Payout {
                    seat,
                    player: player.name().to_string(),
                    amount: share,
                }
            })
            .collect();
        tracing::debug!(winners = ?winners, "showdown resolved");
        Ok((entries, payouts))
    }
}
