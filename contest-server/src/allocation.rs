//! Book allocation and winner draw
//!
//! Both decisions are pure functions of the current counts and a caller
//! supplied RNG. Counts are recomputed from the `Members` table on every
//! request; nothing here is cached.

use rand::Rng;
use shared::{BookId, WinnerStatus};

/// Quota and prize limits for one contest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContestPolicy {
    /// Soft cap of members per book SKU before overflow is forced
    pub book_soft_cap: i64,
    /// Maximum number of winners
    pub winner_budget: i64,
    /// Expected total number of participants
    pub participant_cap: i64,
}

impl Default for ContestPolicy {
    fn default() -> Self {
        Self {
            book_soft_cap: 60,
            winner_budget: 110,
            participant_cap: 120,
        }
    }
}

/// Members currently assigned to each book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookCounts {
    pub first: i64,
    pub second: i64,
}

impl BookCounts {
    pub fn get(&self, book: BookId) -> i64 {
        match book {
            BookId::First => self.first,
            BookId::Second => self.second,
        }
    }
}

/// Pick the book for a new member.
///
/// Both under the cap: fair coin. Book 1 saturated: book 2, even when book 2
/// is saturated as well. Otherwise book 1. There is no sold-out outcome; the
/// stock check downstream is what turns registrants away.
pub fn allocate_book<R: Rng + ?Sized>(
    policy: &ContestPolicy,
    counts: BookCounts,
    rng: &mut R,
) -> BookId {
    let cap = policy.book_soft_cap;
    if counts.first < cap && counts.second < cap {
        if rng.gen_bool(0.5) {
            BookId::First
        } else {
            BookId::Second
        }
    } else if counts.first >= cap {
        BookId::Second
    } else {
        BookId::First
    }
}

/// Chance that the next member wins, or `None` once the budget is spent.
///
/// Not clamped: the value exceeds 1 (or is infinite) when registrations
/// reach the participant cap, and is negative past it.
pub fn winning_probability(policy: &ContestPolicy, winners: i64, registered: i64) -> Option<f64> {
    if winners >= policy.winner_budget {
        return None;
    }
    let remaining_spots = (policy.winner_budget - winners) as f64;
    let remaining_participants = (policy.participant_cap - registered) as f64;
    Some(remaining_spots / remaining_participants)
}

/// Draw the winner status for a new member.
///
/// Wins when a uniform draw in `[0, 1)` falls below the probability, so an
/// out-of-range probability saturates instead of panicking.
pub fn decide_winner<R: Rng + ?Sized>(
    policy: &ContestPolicy,
    winners: i64,
    registered: i64,
    rng: &mut R,
) -> WinnerStatus {
    match winning_probability(policy, winners, registered) {
        Some(p) if rng.gen_range(0.0..1.0) < p => WinnerStatus::Winner,
        _ => WinnerStatus::NotWinner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TRIALS: usize = 10_000;

    fn counts(first: i64, second: i64) -> BookCounts {
        BookCounts { first, second }
    }

    #[test]
    fn test_allocation_is_uniform_below_cap() {
        let policy = ContestPolicy::default();
        let mut rng = StdRng::seed_from_u64(0xB00C);

        let mut first = 0usize;
        for _ in 0..TRIALS {
            if allocate_book(&policy, counts(59, 59), &mut rng) == BookId::First {
                first += 1;
            }
        }
        let second = TRIALS - first;

        // Chi-square with 1 degree of freedom; 10.83 is the p = 0.001 critical value
        let expected = TRIALS as f64 / 2.0;
        let chi_square = ((first as f64 - expected).powi(2)
            + (second as f64 - expected).powi(2))
            / expected;
        assert!(chi_square < 10.83, "chi-square {chi_square} ({first}/{second})");
    }

    #[test]
    fn test_allocation_forces_overflow_to_open_book() {
        let policy = ContestPolicy::default();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..1000 {
            assert_eq!(allocate_book(&policy, counts(60, 10), &mut rng), BookId::Second);
            assert_eq!(allocate_book(&policy, counts(75, 59), &mut rng), BookId::Second);
            assert_eq!(allocate_book(&policy, counts(3, 60), &mut rng), BookId::First);
        }
    }

    #[test]
    fn test_allocation_both_saturated_picks_second_book() {
        let policy = ContestPolicy::default();
        let mut rng = StdRng::seed_from_u64(2);

        // Book 1 at the cap wins the first overflow check
        assert_eq!(allocate_book(&policy, counts(60, 60), &mut rng), BookId::Second);
        assert_eq!(allocate_book(&policy, counts(61, 90), &mut rng), BookId::Second);
    }

    #[test]
    fn test_no_winner_once_budget_spent() {
        let policy = ContestPolicy::default();
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(winning_probability(&policy, 110, 50), None);
        for _ in 0..1000 {
            assert_eq!(decide_winner(&policy, 110, 50, &mut rng), WinnerStatus::NotWinner);
            assert_eq!(decide_winner(&policy, 200, 119, &mut rng), WinnerStatus::NotWinner);
        }
    }

    #[test]
    fn test_probability_formula() {
        let policy = ContestPolicy::default();
        assert_eq!(winning_probability(&policy, 0, 0), Some(110.0 / 120.0));
        assert_eq!(winning_probability(&policy, 100, 100), Some(10.0 / 20.0));
        assert_eq!(winning_probability(&policy, 109, 119), Some(1.0));
    }

    #[test]
    fn test_empirical_win_rate_matches_probability() {
        let policy = ContestPolicy::default();
        let mut rng = StdRng::seed_from_u64(0x5EED);

        for (winners, registered) in [(100, 100), (80, 70), (0, 0)] {
            let p = winning_probability(&policy, winners, registered).unwrap();
            let wins = (0..TRIALS)
                .filter(|_| {
                    decide_winner(&policy, winners, registered, &mut rng) == WinnerStatus::Winner
                })
                .count();
            let rate = wins as f64 / TRIALS as f64;

            // Four standard deviations of a binomial proportion
            let tolerance = 4.0 * (p * (1.0 - p) / TRIALS as f64).sqrt();
            assert!(
                (rate - p).abs() <= tolerance,
                "rate {rate} vs p {p} (winners {winners}, registered {registered})"
            );
        }
    }

    #[test]
    fn test_out_of_range_probability_does_not_panic() {
        let policy = ContestPolicy::default();
        let mut rng = StdRng::seed_from_u64(4);

        // registered == cap: positive / 0 is +inf, always wins
        assert_eq!(winning_probability(&policy, 10, 120), Some(f64::INFINITY));
        assert_eq!(decide_winner(&policy, 10, 120, &mut rng), WinnerStatus::Winner);

        // registered past the cap: negative probability, never wins
        let p = winning_probability(&policy, 10, 130).unwrap();
        assert!(p < 0.0);
        for _ in 0..100 {
            assert_eq!(decide_winner(&policy, 10, 130, &mut rng), WinnerStatus::NotWinner);
        }

        // more spots than remaining participants: p > 1, always wins
        for _ in 0..100 {
            assert_eq!(decide_winner(&policy, 0, 115, &mut rng), WinnerStatus::Winner);
        }
    }
}
