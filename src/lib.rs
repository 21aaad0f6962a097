//! # Lottery Ticket Core
//!
//! The ticket model and win evaluator behind the `play` terminal game, plus the
//! pieces the widget is built from:
//!
//! - [`audio`]: tone synthesis and the click / victory cues
//! - [`drag`]: pointer-drag state machine for the winning ticket
//! - [`widget`]: the `TicketWidget` that ties ticket, sound and drag together
//!
//! A ticket is three digits in `0..=9`. It wins when the digits add up to
//! [`WIN_TARGET`].

pub mod audio;
pub mod drag;
pub mod error;
pub mod widget;

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fmt;
use std::ops::RangeInclusive;

pub use error::{LotteryError, Result};

/// Number of digits on every ticket.
pub const TICKET_LEN: usize = 3;

/// Range every digit is drawn from.
pub const DIGIT_RANGE: RangeInclusive<u8> = 0..=9;

/// The sum a ticket must hit to win.
pub const WIN_TARGET: u32 = 10;

/// Three digits shown to the player.
///
/// Tickets are immutable; regeneration replaces the whole value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket([u8; TICKET_LEN]);

impl Ticket {
    /// Builds a ticket from explicit digits.
    ///
    /// # Errors
    /// Returns [`LotteryError::DigitOutOfRange`] if any digit is above 9.
    pub fn new(digits: [u8; TICKET_LEN]) -> Result<Self> {
        if let Some(&digit) = digits.iter().find(|&&d| !DIGIT_RANGE.contains(&d)) {
            return Err(LotteryError::DigitOutOfRange { digit });
        }
        Ok(Self(digits))
    }

    /// Draws a fresh ticket, each digit independent and uniform over [`DIGIT_RANGE`].
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut digits = [0u8; TICKET_LEN];
        for digit in &mut digits {
            *digit = rng.random_range(DIGIT_RANGE);
        }
        Self(digits)
    }

    pub fn digits(&self) -> &[u8; TICKET_LEN] {
        &self.0
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&d| u32::from(d)).sum()
    }

    /// Shorthand for [`is_winning`].
    pub fn is_winning(&self) -> bool {
        is_winning(self)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{} {} {}", a, b, c)
    }
}

/// Returns true when the ticket's digits sum to [`WIN_TARGET`].
pub fn is_winning(ticket: &Ticket) -> bool {
    ticket.sum() == WIN_TARGET
}

/// Anything that can hand out tickets.
///
/// The widget only ever asks for the next ticket, so tests can script the
/// sequence while the game uses [`TicketGenerator`].
pub trait TicketSource {
    /// Returns the next ticket.
    fn draw(&mut self) -> Ticket;
}

/// Random ticket source backed by a seedable xoshiro generator.
#[derive(Debug, Clone)]
pub struct TicketGenerator<R = Xoshiro256PlusPlus> {
    rng: R,
}

impl TicketGenerator<Xoshiro256PlusPlus> {
    /// Creates a generator with a reproducible draw sequence.
    ///
    /// # Arguments
    /// * `seed` - Seed for the underlying xoshiro256++ generator
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> TicketGenerator<R> {
    /// Wraps an existing generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TicketSource for TicketGenerator<R> {
    fn draw(&mut self) -> Ticket {
        Ticket::generate(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ticket(digits: [u8; 3]) -> Ticket {
        Ticket::new(digits).unwrap()
    }

    #[test]
    fn test_three_three_four_wins() {
        assert!(is_winning(&ticket([3, 3, 4])));
    }

    #[test]
    fn test_one_two_three_loses() {
        assert!(!is_winning(&ticket([1, 2, 3])));
    }

    #[test]
    fn test_sum_above_target_loses() {
        assert!(!ticket([9, 9, 9]).is_winning());
        assert!(!ticket([5, 5, 1]).is_winning());
    }

    #[test]
    fn test_new_rejects_out_of_range_digit() {
        match Ticket::new([1, 12, 3]) {
            Err(LotteryError::DigitOutOfRange { digit }) => assert_eq!(digit, 12),
            other => panic!("expected DigitOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_display_spaces_digits() {
        assert_eq!(ticket([7, 0, 3]).to_string(), "7 0 3");
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = TicketGenerator::seeded(42);
        let mut b = TicketGenerator::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn test_generator_covers_every_digit() {
        let mut generator = TicketGenerator::seeded(7);
        let mut seen = [false; 10];
        for _ in 0..500 {
            for &d in generator.draw().digits() {
                seen[d as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    proptest! {
        #[test]
        fn generated_tickets_stay_in_range(seed in any::<u64>()) {
            let mut generator = TicketGenerator::seeded(seed);
            for _ in 0..16 {
                let drawn = generator.draw();
                prop_assert_eq!(drawn.digits().len(), TICKET_LEN);
                prop_assert!(drawn.digits().iter().all(|d| DIGIT_RANGE.contains(d)));
            }
        }

        #[test]
        fn winning_iff_sum_is_target(a in 0u8..=9, b in 0u8..=9, c in 0u8..=9) {
            let t = ticket([a, b, c]);
            let sum = u32::from(a) + u32::from(b) + u32::from(c);
            prop_assert_eq!(is_winning(&t), sum == WIN_TARGET);
        }
    }
}
