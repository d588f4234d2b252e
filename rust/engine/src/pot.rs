/// The single main pot of a round.
///
/// There are no side pots: every chip committed during the round goes to the
/// winner(s) of the showdown, whatever their stack depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pot {
    total: u32,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Never saturates in play: tables are capped by [`crate::table::chips_on_table`].
    pub fn add(&mut self, amount: u32) {
        self.total = self.total.saturating_add(amount);
    }

    /// Empties the pot, returning what it held.
    pub fn take(&mut self) -> u32 {
        std::mem::take(&mut self.total)
    }
}

/// Splits `amount` evenly between `winners`.
///
/// `winners` must already be in payout order (seat order starting left of the
/// button); leftover chips go one each to the first winners in that order.
/// The returned shares always sum to `amount`.
pub fn split_evenly(amount: u32, winners: &[usize]) -> Vec<(usize, u32)> {
    if winners.is_empty() {
        return Vec::new();
    }
    let n = winners.len() as u32;
    let share = amount / n;
    let odd = (amount % n) as usize;
    winners
        .iter()
        .enumerate()
        .map(|(i, &seat)| (seat, share + u32::from(i < odd)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_empties_the_pot() {
        let mut pot = Pot::new();
        pot.add(30);
        pot.add(20);
        assert_eq!(pot.take(), 50);
        assert_eq!(pot.total(), 0);
    }

    #[test]
    fn odd_chip_goes_to_first_winner() {
        assert_eq!(split_evenly(101, &[3, 0]), vec![(3, 51), (0, 50)]);
        assert_eq!(split_evenly(100, &[1, 2]), vec![(1, 50), (2, 50)]);
    }

    #[test]
    fn three_way_split_conserves_chips() {
        let shares = split_evenly(100, &[0, 1, 2]);
        assert_eq!(shares.iter().map(|(_, a)| a).sum::<u32>(), 100);
        assert_eq!(shares, vec![(0, 34), (1, 33), (2, 33)]);
    }
}
