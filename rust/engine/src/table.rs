use crate::player::Player;
use crate::strategy::Strategy;

/// A player together with the strategy that decides for them.
pub struct Seat {
    pub player: Player,
    pub strategy: Box<dyn Strategy>,
}

impl Seat {
    pub fn new(player: Player, strategy: Box<dyn Strategy>) -> Self {
        Self { player, strategy }
    }
}

impl std::fmt::Debug for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seat")
            .field("player", &self.player)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

/// Seat `offset` places to the left of `from`, wrapping around the table.
pub fn seat_after(from: usize, offset: usize, seat_count: usize) -> usize {
    (from + offset) % seat_count
}

/// Every seat index once, in table order starting at `start`.
pub fn seats_from(start: usize, seat_count: usize) -> impl Iterator<Item = usize> {
    (0..seat_count).map(move |i| (start + i) % seat_count)
}

pub fn active_count(seats: &[Seat]) -> usize {
    seats.iter().filter(|s| s.player.is_active()).count()
}

/// Sum of every stack, `None` if it does not fit a `u32`. Chips only move
/// between stacks and the pot, so no stack or pot can exceed this total.
pub fn chips_on_table(seats: &[Seat]) -> Option<u32> {
    seats
        .iter()
        .try_fold(0u32, |total, s| total.checked_add(s.player.stack()))
}
