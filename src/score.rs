//! Hand scoring with the single-ace reduction rule.

use crate::card::Card;

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

/// Value removed from an ace when it is reduced from 11 to 1.
const ACE_REDUCTION: u8 = 10;

/// Result of scoring a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// The hand total.
    pub total: u8,
    /// Index of the ace counted as 1, if any.
    pub reduced_ace: Option<usize>,
}

/// Sums the base values of `cards`, counting the ace at `reduced_ace` as 1.
fn sum(cards: &[Card], reduced_ace: Option<usize>) -> u8 {
    cards.iter().enumerate().fold(0u8, |total, (index, card)| {
        let value = if Some(index) == reduced_ace {
            card.base_value() - ACE_REDUCTION
        } else {
            card.base_value()
        };
        total.saturating_add(value)
    })
}

/// Computes the score of `cards` given the ace already reduced, if any.
///
/// When the total exceeds 21 and no ace has been reduced yet, the first ace
/// in hand order is counted as 1 and the total recomputed once. A hand that
/// already reduced an ace never reduces a second one, even if it still busts.
#[must_use]
pub fn compute_score(cards: &[Card], reduced_ace: Option<usize>) -> Score {
    debug_assert!(
        reduced_ace.is_none_or(|index| cards.get(index).is_some_and(|card| card.is_ace())),
        "reduced ace must point at an ace in the hand"
    );

    let total = sum(cards, reduced_ace);
    if total <= BLACKJACK || reduced_ace.is_some() {
        return Score { total, reduced_ace };
    }

    match cards.iter().position(|card| card.is_ace()) {
        Some(index) => Score {
            total: total - ACE_REDUCTION,
            reduced_ace: Some(index),
        },
        None => Score { total, reduced_ace },
    }
}

/// Returns whether `score` is a bust.
#[must_use]
pub const fn is_bust(score: u8) -> bool {
    score > BLACKJACK
}
