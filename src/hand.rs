//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::score::{self, BLACKJACK};

/// The party a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer (bank).
    Dealer,
}

impl Seat {
    /// Returns a lowercase name for logs and display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Dealer => "dealer",
        }
    }
}

/// A hand of cards held by the player or the dealer.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Owner of the hand.
    seat: Seat,
    /// Cards in deal order.
    cards: Vec<Card>,
    /// Index of the ace counted as 1, if any.
    reduced_ace: Option<usize>,
    /// Score recomputed after every card.
    score: u8,
    /// Whether the hand may still take cards.
    active: bool,
}

impl Hand {
    /// Creates a new empty, active hand.
    #[must_use]
    pub const fn new(seat: Seat) -> Self {
        Self {
            seat,
            cards: Vec::new(),
            reduced_ace: None,
            score: 0,
            active: true,
        }
    }

    /// Adds a card to the hand and recomputes the score.
    ///
    /// Returns the slot index the card occupies.
    pub fn add_card(&mut self, card: Card) -> usize {
        self.cards.push(card);

        let score = score::compute_score(&self.cards, self.reduced_ace);
        self.score = score.total;
        self.reduced_ace = score.reduced_ace;

        self.cards.len() - 1
    }

    /// Returns the owner of the hand.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Returns whether the hand may still take cards.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Marks the hand as finished (stood, bust, or round over).
    pub const fn deactivate(&mut self) {
        self.active = false;
    }

    /// Returns the index of the ace counted as 1, if any.
    #[must_use]
    pub const fn reduced_ace(&self) -> Option<usize> {
        self.reduced_ace
    }

    /// Returns the value the card at `index` currently counts for.
    #[must_use]
    pub fn effective_value(&self, index: usize) -> Option<u8> {
        let card = self.cards.get(index)?;
        if self.reduced_ace == Some(index) {
            Some(1)
        } else {
            Some(card.base_value())
        }
    }

    /// Returns whether the hand holds an ace still counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.cards
            .iter()
            .enumerate()
            .any(|(index, card)| card.is_ace() && self.reduced_ace != Some(index))
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        score::is_bust(self.score)
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.reduced_ace = None;
        self.score = 0;
        self.active = true;
    }
}
