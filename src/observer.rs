//! Callbacks from the engine to the presentation layer.

use alloc::vec::Vec;

use crate::animation::CardAnimation;
use crate::card::Card;
use crate::game::GameState;
use crate::hand::Seat;
use crate::outcome::RoundResult;

/// A card that has just been added to a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDealt {
    /// The hand that received the card.
    pub seat: Seat,
    /// The fan slot the card occupies.
    pub card_index: usize,
    /// Number of cards in the hand, including this one.
    pub total_cards: usize,
    /// The card.
    pub card: Card,
    /// The hand's score after the card.
    pub score: u8,
    /// When the card leaves the shoe and how long it travels.
    pub animation: CardAnimation,
}

/// Receives engine notifications. Every method defaults to doing nothing.
pub trait TableObserver {
    /// A card was dealt and should be animated into its slot.
    fn on_card_dealt(&mut self, _dealt: &CardDealt) {}

    /// The round finished.
    fn on_round_over(&mut self, _result: &RoundResult) {}

    /// The game state changed.
    fn on_state_changed(&mut self, _state: GameState) {}

    /// Player input was enabled or disabled.
    fn on_input_changed(&mut self, _enabled: bool) {}

    /// The shoe was reshuffled and now holds `remaining` cards.
    fn on_shoe_reshuffled(&mut self, _remaining: usize) {}
}

/// An observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TableObserver for NoopObserver {}

/// A recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// See [`TableObserver::on_card_dealt`].
    CardDealt(CardDealt),
    /// See [`TableObserver::on_round_over`].
    RoundOver(RoundResult),
    /// See [`TableObserver::on_state_changed`].
    StateChanged(GameState),
    /// See [`TableObserver::on_input_changed`].
    InputChanged(bool),
    /// See [`TableObserver::on_shoe_reshuffled`].
    ShoeReshuffled(usize),
}

/// An observer that records every notification in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<TableEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[TableEvent] {
        &self.events
    }

    /// Removes and returns the recorded events.
    pub fn drain(&mut self) -> Vec<TableEvent> {
        core::mem::take(&mut self.events)
    }

    /// Returns every dealt card in order.
    pub fn dealt(&self) -> impl Iterator<Item = &CardDealt> {
        self.events.iter().filter_map(|event| match event {
            TableEvent::CardDealt(dealt) => Some(dealt),
            _ => None,
        })
    }

    /// Returns the last round result, if any.
    #[must_use]
    pub fn last_result(&self) -> Option<RoundResult> {
        self.events.iter().rev().find_map(|event| match event {
            TableEvent::RoundOver(result) => Some(*result),
            _ => None,
        })
    }
}

impl TableObserver for EventLog {
    fn on_card_dealt(&mut self, dealt: &CardDealt) {
        self.events.push(TableEvent::CardDealt(*dealt));
    }

    fn on_round_over(&mut self, result: &RoundResult) {
        self.events.push(TableEvent::RoundOver(*result));
    }

    fn on_state_changed(&mut self, state: GameState) {
        self.events.push(TableEvent::StateChanged(state));
    }

    fn on_input_changed(&mut self, enabled: bool) {
        self.events.push(TableEvent::InputChanged(enabled));
    }

    fn on_shoe_reshuffled(&mut self, remaining: usize) {
        self.events.push(TableEvent::ShoeReshuffled(remaining));
    }
}
