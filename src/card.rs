//! Card types and shoe constants.

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of distinct ranks per deck.
pub const RANKS: u8 = 13;

/// Rank of an ace.
pub const ACE: u8 = 1;

/// A playing card.
///
/// Blackjack scoring only depends on rank, so cards carry no suit. A card is
/// never mutated once drawn: an ace counted as 1 is tracked by the [`Hand`]
/// holding it, not by the card.
///
/// [`Hand`]: crate::hand::Hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted and score as zero.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self { rank }
    }

    /// Returns the value of the card before any ace reduction.
    ///
    /// Aces count 11, face cards count 10, everything else counts its rank.
    #[must_use]
    pub const fn base_value(self) -> u8 {
        match self.rank {
            ACE => 11,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank == ACE
    }

    /// Returns the short label printed on the card face.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}
