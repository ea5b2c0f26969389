//! Game state types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{Hand, Seat};
use crate::outcome::RoundResult;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Before the first round has started.
    Initial,
    /// Initial cards are being dealt.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer draws on its own.
    DealerTurn,
    /// Round finished; only reset is accepted.
    GameOver,
}

impl GameState {
    /// Returns the upper-case name of the state.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Initial => "INITIAL",
            Self::Dealing => "DEALING",
            Self::PlayerTurn => "PLAYER_TURN",
            Self::DealerTurn => "DEALER_TURN",
            Self::GameOver => "GAME_OVER",
        }
    }
}

/// A copy of a hand for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandSnapshot {
    /// Owner of the hand.
    pub seat: Seat,
    /// Cards in deal order.
    pub cards: Vec<Card>,
    /// Current score.
    pub score: u8,
    /// Whether the hand may still take cards.
    pub active: bool,
}

impl From<&Hand> for HandSnapshot {
    fn from(hand: &Hand) -> Self {
        Self {
            seat: hand.seat(),
            cards: hand.cards().to_vec(),
            score: hand.score(),
            active: hand.is_active(),
        }
    }
}

/// A copy of the whole table for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    /// Current game state.
    pub state: GameState,
    /// The player's hand.
    pub player: HandSnapshot,
    /// The dealer's hand.
    pub dealer: HandSnapshot,
    /// Whether hit and stand are currently accepted.
    pub input_enabled: bool,
    /// Cards left in the shoe.
    pub shoe_remaining: usize,
    /// The result, once the round is over.
    pub result: Option<RoundResult>,
}
