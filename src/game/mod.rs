//! Round state machine and table driver.

use tracing::debug;

use crate::clock::Clock;
use crate::hand::{Hand, Seat};
use crate::observer::{NoopObserver, TableObserver};
use crate::options::TableOptions;
use crate::outcome::RoundResult;
use crate::sequencer::DealSequencer;
use crate::shoe::Shoe;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::{GameState, HandSnapshot, TableSnapshot};

/// Everything that makes up the live round: the shoe, both hands, the
/// current state and, once finished, the result.
#[derive(Debug, Clone)]
pub struct Round {
    /// The shoe, carried over from round to round.
    pub shoe: Shoe,
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand.
    pub dealer: Hand,
    /// Current game state.
    pub state: GameState,
    /// The result, once the round is over.
    pub result: Option<RoundResult>,
}

impl Round {
    /// Creates a round in the initial state around `shoe`.
    #[must_use]
    pub const fn new(shoe: Shoe) -> Self {
        Self {
            shoe,
            player: Hand::new(Seat::Player),
            dealer: Hand::new(Seat::Dealer),
            state: GameState::Initial,
            result: None,
        }
    }

    /// Returns the hand belonging to `seat`.
    #[must_use]
    pub const fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::Player => &self.player,
            Seat::Dealer => &self.dealer,
        }
    }

    /// Borrows the shoe together with the hand belonging to `seat`.
    const fn shoe_and_hand(&mut self, seat: Seat) -> (&mut Shoe, &mut Hand) {
        match seat {
            Seat::Player => (&mut self.shoe, &mut self.player),
            Seat::Dealer => (&mut self.shoe, &mut self.dealer),
        }
    }

    /// Empties both hands and drops the result, keeping the shoe.
    ///
    /// The shoe is reshuffled first if fewer than `threshold` cards remain.
    /// Returns `true` if it was.
    fn clear(&mut self, threshold: usize) -> bool {
        self.player.clear();
        self.dealer.clear();
        self.result = None;
        self.shoe.check_and_reshuffle(threshold)
    }
}

/// A single blackjack table: one player against the dealer, with timed
/// dealing.
///
/// The table owns the [`Round`], a [`DealSequencer`] of pending events, a
/// [`Clock`] and a [`TableObserver`]. Actions ([`start_round`], [`hit`],
/// [`stand`], [`reset`]) take effect immediately; everything timed happens
/// in [`advance`], which the host calls whenever it gets the chance (every
/// frame, or after sleeping until [`next_due`]).
///
/// [`start_round`]: Table::start_round
/// [`hit`]: Table::hit
/// [`stand`]: Table::stand
/// [`reset`]: Table::reset
/// [`advance`]: Table::advance
/// [`next_due`]: Table::next_due
pub struct Table<C: Clock, O: TableObserver = NoopObserver> {
    /// Table options.
    options: TableOptions,
    /// The live round.
    round: Round,
    /// Pending timed events.
    sequencer: DealSequencer,
    /// Time source.
    clock: C,
    /// Presentation callbacks.
    observer: O,
    /// Whether hit and stand are accepted.
    input_enabled: bool,
}

impl<C: Clock> Table<C> {
    /// Creates a table with a freshly shuffled shoe and no observer.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameState, ManualClock, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42, ManualClock::new());
    /// assert_eq!(table.state(), GameState::Initial);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64, clock: C) -> Self {
        Self::with_observer(options, seed, clock, NoopObserver)
    }
}

impl<C: Clock, O: TableObserver> Table<C, O> {
    /// Creates a table with a freshly shuffled shoe reporting to `observer`.
    #[must_use]
    pub fn with_observer(options: TableOptions, seed: u64, clock: C, observer: O) -> Self {
        let shoe = Shoe::new(options.decks, seed);
        Self::with_shoe(options, shoe, clock, observer)
    }

    /// Creates a table around an existing shoe.
    #[must_use]
    pub const fn with_shoe(options: TableOptions, shoe: Shoe, clock: C, observer: O) -> Self {
        Self {
            options,
            round: Round::new(shoe),
            sequencer: DealSequencer::new(),
            clock,
            observer,
            input_enabled: false,
        }
    }

    /// Dispatches every event that has come due, in order.
    ///
    /// Each event runs with its own due time as the current time, so a late
    /// call does not shift the rest of the schedule. Returns the number of
    /// events dispatched.
    pub fn advance(&mut self) -> usize {
        let now = self.clock.now();
        let mut dispatched = 0;
        while let Some(next) = self.sequencer.pop_due(now) {
            self.dispatch(next);
            dispatched += 1;
        }
        dispatched
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.round.state
    }

    /// Returns the live round.
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.round.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.round.dealer
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.round.shoe
    }

    /// Returns the result of the round, once it is over.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.round.result
    }

    /// Returns whether hit and stand are currently accepted.
    #[must_use]
    pub const fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Returns whether a timed sequence still has events pending.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.sequencer.in_flight()
    }

    /// Returns the time the next pending event comes due.
    #[must_use]
    pub fn next_due(&self) -> Option<crate::clock::Millis> {
        self.sequencer.next_due()
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the observer.
    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub const fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Returns a copy of the table for rendering.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            state: self.round.state,
            player: HandSnapshot::from(&self.round.player),
            dealer: HandSnapshot::from(&self.round.dealer),
            input_enabled: self.input_enabled,
            shoe_remaining: self.round.shoe.remaining(),
            result: self.round.result,
        }
    }

    fn set_state(&mut self, state: GameState) {
        if self.round.state == state {
            return;
        }
        debug!(from = self.round.state.name(), to = state.name(), "state changed");
        self.round.state = state;
        self.observer.on_state_changed(state);
    }

    fn set_input(&mut self, enabled: bool) {
        if self.input_enabled == enabled {
            return;
        }
        self.input_enabled = enabled;
        self.observer.on_input_changed(enabled);
    }
}
