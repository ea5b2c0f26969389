//! Round outcome evaluation.

use alloc::format;
use alloc::string::String;

use crate::score::BLACKJACK;

/// Result of a finished round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher score).
    Win,
    /// Player loses (player busts or dealer has the higher score).
    Lose,
    /// Push (tie).
    Push,
}

impl Outcome {
    /// Compares two final scores.
    ///
    /// A player bust loses before the dealer score is even looked at, so a
    /// bust ends the round without waiting for the dealer.
    #[must_use]
    pub const fn evaluate(player_score: u8, dealer_score: u8) -> Self {
        if player_score > BLACKJACK {
            Self::Lose
        } else if dealer_score > BLACKJACK {
            Self::Win
        } else if dealer_score > player_score {
            Self::Lose
        } else if player_score > dealer_score {
            Self::Win
        } else {
            Self::Push
        }
    }

    /// Returns the message shown to the player at the end of the round.
    #[must_use]
    pub fn message(self, player_score: u8, dealer_score: u8) -> String {
        match self {
            Self::Win => format!("You won! Your score: {player_score} | Dealer: {dealer_score}"),
            Self::Lose => format!("You lost! Your score: {player_score} | Dealer: {dealer_score}"),
            Self::Push => format!("Push! It's a tie at {player_score}"),
        }
    }
}

/// Result of the round passed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome for the player.
    pub outcome: Outcome,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
}

impl RoundResult {
    /// Evaluates two final scores into a round result.
    #[must_use]
    pub const fn new(player_score: u8, dealer_score: u8) -> Self {
        Self {
            outcome: Outcome::evaluate(player_score, dealer_score),
            player_score,
            dealer_score,
        }
    }

    /// Returns the message shown to the player.
    #[must_use]
    pub fn message(&self) -> String {
        self.outcome.message(self.player_score, self.dealer_score)
    }
}
