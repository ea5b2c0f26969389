//! The multi-deck shoe cards are dealt from.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, RANKS};

/// A shuffled multi-deck pool of ranks with a cursor to the next card.
///
/// The shoe never runs dry: drawing past the last card regenerates and
/// reshuffles every deck before dealing.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Ranks in deal order.
    ranks: Vec<u8>,
    /// Index of the next card to deal.
    cursor: usize,
    /// Number of decks regenerated on reshuffle.
    decks: u8,
    /// Number of reshuffles performed so far.
    reshuffles: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a freshly shuffled shoe of `decks` decks.
    ///
    /// A shoe always holds at least one deck; `decks == 0` is treated as 1.
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let decks = decks.max(1);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let ranks = Self::create_ranks(decks, &mut rng);

        Self {
            ranks,
            cursor: 0,
            decks,
            reshuffles: 0,
            rng,
        }
    }

    /// Creates a stacked shoe whose next draws are exactly `ranks`, in order.
    ///
    /// Once the stacked cards are used up the shoe regenerates `decks` full
    /// decks (at least one) like any other shoe.
    #[must_use]
    pub fn from_ranks(decks: u8, seed: u64, ranks: &[u8]) -> Self {
        Self {
            ranks: ranks.to_vec(),
            cursor: 0,
            decks: decks.max(1),
            reshuffles: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates and shuffles the ranks of `num_decks` full decks.
    fn create_ranks(num_decks: u8, rng: &mut ChaCha8Rng) -> Vec<u8> {
        let mut ranks = Vec::with_capacity(Self::capacity(num_decks));

        for _ in 0..num_decks {
            for rank in 1..=RANKS {
                // one per suit
                ranks.extend_from_slice(&[rank; 4]);
            }
        }

        ranks.shuffle(rng);
        ranks
    }

    /// Number of cards in a full shoe of `decks` decks.
    #[must_use]
    pub const fn capacity(decks: u8) -> usize {
        decks as usize * DECK_SIZE
    }

    /// Draws the next card, reshuffling first if the shoe is exhausted.
    pub fn draw(&mut self) -> Card {
        if self.cursor >= self.ranks.len() {
            debug!(dealt = self.cursor, "shoe exhausted, reshuffling");
            self.reshuffle();
        }

        debug_assert!(self.cursor < self.ranks.len(), "reshuffled shoe is empty");
        let card = Card::new(self.ranks[self.cursor]);
        self.cursor += 1;
        card
    }

    /// Regenerates every deck, shuffles, and resets the cursor.
    pub fn reshuffle(&mut self) {
        self.ranks = Self::create_ranks(self.decks, &mut self.rng);
        self.cursor = 0;
        self.reshuffles += 1;
        debug!(cards = self.ranks.len(), "shoe reshuffled");
    }

    /// Returns the number of cards left before the shoe is exhausted.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.ranks.len().saturating_sub(self.cursor)
    }

    /// Returns the total number of cards in the current sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Returns whether the current sequence holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Returns the number of decks the shoe regenerates.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns how many times the shoe has been reshuffled.
    #[must_use]
    pub const fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    /// Returns whether fewer than `threshold` cards remain.
    #[must_use]
    pub fn needs_reshuffle(&self, threshold: usize) -> bool {
        self.remaining() < threshold
    }

    /// Reshuffles if fewer than `threshold` cards remain.
    ///
    /// This should be called at round boundaries only. Returns `true` if a
    /// reshuffle was performed.
    pub fn check_and_reshuffle(&mut self, threshold: usize) -> bool {
        if self.needs_reshuffle(threshold) {
            self.reshuffle();
            true
        } else {
            false
        }
    }
}
