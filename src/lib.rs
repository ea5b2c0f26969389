//! A single-table blackjack engine with timed, animated dealing and optional
//! `no_std` support.
//!
//! The crate provides a [`Table`] type that runs the round state machine
//! (`INITIAL → DEALING → PLAYER_TURN → DEALER_TURN → GAME_OVER`), deals from
//! a six-deck [`Shoe`], scores hands, and paces every deal on an injectable
//! [`Clock`] so the presentation layer can animate cards as they land.
//!
//! # Example
//!
//! ```
//! use bjtable::{GameState, ManualClock, Table, TableOptions};
//!
//! let clock = ManualClock::new();
//! let mut table = Table::new(TableOptions::default(), 42, clock.clone());
//!
//! table.start_round().unwrap();
//! assert_eq!(table.state(), GameState::Dealing);
//!
//! // Let the initial deal and its settle delay play out.
//! clock.advance(5_000);
//! table.advance();
//! assert_eq!(table.player().len(), 2);
//! assert_eq!(table.dealer().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod animation;
pub mod card;
pub mod clock;
pub mod error;
pub mod game;
pub mod hand;
pub mod observer;
pub mod options;
pub mod outcome;
pub mod score;
pub mod sequencer;
pub mod shoe;

// Re-export main types
pub use animation::{CardAnimation, Easing};
pub use card::{Card, DECK_SIZE};
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, ManualClock, Millis};
pub use error::ActionError;
pub use game::{GameState, HandSnapshot, Round, Table, TableSnapshot};
pub use hand::{Hand, Seat};
pub use observer::{CardDealt, EventLog, NoopObserver, TableEvent, TableObserver};
pub use options::TableOptions;
pub use outcome::{Outcome, RoundResult};
pub use score::{Score, compute_score};
pub use sequencer::{DealEvent, DealSequencer};
pub use shoe::Shoe;
