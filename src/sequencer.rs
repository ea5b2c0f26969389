//! Ordered, timed dispatch of deal events.
//!
//! The sequencer is a FIFO of [`DealEvent`]s, each due a fixed delay after
//! its predecessor. Nothing blocks: the owner polls with the current time and
//! dispatches whatever has come due, one event at a time and in order.

use alloc::collections::VecDeque;
use tracing::trace;

use crate::animation::CardAnimation;
use crate::clock::Millis;
use crate::hand::{Hand, Seat};
use crate::observer::CardDealt;
use crate::options::TableOptions;
use crate::shoe::Shoe;

/// A scheduled unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealEvent {
    /// Deal one card of the initial deal.
    Deal(Seat),
    /// The initial deal has visually settled; decide who plays.
    InitialSettle,
    /// A hit card has visually settled; reopen input.
    HitSettle,
    /// The dealer's turn to draw or stand.
    DealerDraw,
}

/// A [`DealEvent`] with the time it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    /// When the event may be dispatched.
    pub due: Millis,
    /// The event.
    pub event: DealEvent,
}

/// Interleaved order of the initial deal.
pub const INITIAL_DEAL: [Seat; 4] = [Seat::Player, Seat::Dealer, Seat::Player, Seat::Dealer];

/// Queue of pending deal events.
#[derive(Debug, Clone, Default)]
pub struct DealSequencer {
    queue: VecDeque<Scheduled>,
}

impl DealSequencer {
    /// Creates an empty sequencer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Schedules `event` to run `delay` after the last pending event, or
    /// after `now` when nothing is pending.
    ///
    /// Returns the time the event comes due.
    pub fn after(&mut self, now: Millis, delay: Millis, event: DealEvent) -> Millis {
        let base = self.queue.back().map_or(now, |last| last.due.max(now));
        let due = base.saturating_add(delay);
        trace!(?event, due, "scheduled");
        self.queue.push_back(Scheduled { due, event });
        due
    }

    /// Schedules the four initial deal cards followed by the settle check.
    pub fn schedule_initial_deal(&mut self, now: Millis, options: &TableOptions) {
        for seat in INITIAL_DEAL {
            self.after(now, options.deal_delay, DealEvent::Deal(seat));
        }
        self.after(now, options.settle_delay(), DealEvent::InitialSettle);
    }

    /// Removes and returns the next event if it is due at `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<Scheduled> {
        if self.queue.front()?.due > now {
            return None;
        }
        let next = self.queue.pop_front()?;
        trace!(event = ?next.event, due = next.due, now, "dispatching");
        Some(next)
    }

    /// Drops every pending event. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.queue.len();
        self.queue.clear();
        if cancelled > 0 {
            trace!(cancelled, "cancelled pending events");
        }
        cancelled
    }

    /// Returns whether any event is still waiting to be dispatched.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Returns the number of pending events.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Returns the time the next event comes due.
    #[must_use]
    pub fn next_due(&self) -> Option<Millis> {
        self.queue.front().map(|next| next.due)
    }

    /// Returns whether a deal targeting `seat` is still pending.
    #[must_use]
    pub fn has_pending_deal_for(&self, seat: Seat) -> bool {
        self.queue.iter().any(|scheduled| match scheduled.event {
            DealEvent::Deal(target) => target == seat,
            DealEvent::DealerDraw => seat == Seat::Dealer,
            DealEvent::InitialSettle | DealEvent::HitSettle => false,
        })
    }

    /// Draws one card from `shoe` into `hand` and describes it for the
    /// presentation layer.
    ///
    /// The hand is updated immediately; the returned animation only tells the
    /// renderer how long to take catching up.
    pub fn deal_one(
        &self,
        shoe: &mut Shoe,
        hand: &mut Hand,
        now: Millis,
        options: &TableOptions,
    ) -> CardDealt {
        let card = shoe.draw();
        let card_index = hand.add_card(card);

        CardDealt {
            seat: hand.seat(),
            card_index,
            total_cards: hand.len(),
            card,
            score: hand.score(),
            animation: CardAnimation::new(now, options.animation_duration, options.easing),
        }
    }
}
