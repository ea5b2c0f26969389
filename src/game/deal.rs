use tracing::{debug, info};

use crate::clock::{Clock, Millis};
use crate::hand::Seat;
use crate::observer::{CardDealt, TableObserver};
use crate::score::BLACKJACK;
use crate::sequencer::{DealEvent, Scheduled};

use super::{GameState, Table};

impl<C: Clock, O: TableObserver> Table<C, O> {
    /// Runs one due event.
    pub(super) fn dispatch(&mut self, scheduled: Scheduled) {
        let now = scheduled.due;
        match scheduled.event {
            DealEvent::Deal(seat) => {
                if self.round.state == GameState::Dealing {
                    self.deal_to(seat, now);
                } else {
                    debug!(state = self.round.state.name(), "dropping stale deal event");
                }
            }
            DealEvent::InitialSettle => self.initial_settle(),
            DealEvent::HitSettle => self.hit_settle(),
            DealEvent::DealerDraw => self.dealer_draw(now),
        }
    }

    /// Enters the dealing state and schedules the initial deal.
    pub(super) fn begin_dealing(&mut self) {
        let now = self.clock.now();

        self.set_input(false);
        self.set_state(GameState::Dealing);
        self.sequencer.schedule_initial_deal(now, &self.options);

        info!(shoe_remaining = self.round.shoe.remaining(), "round started");
    }

    /// Deals one card to `seat` and notifies the observer.
    pub(super) fn deal_to(&mut self, seat: Seat, now: Millis) -> CardDealt {
        let reshuffles = self.round.shoe.reshuffles();
        let (shoe, hand) = self.round.shoe_and_hand(seat);
        let dealt = self.sequencer.deal_one(shoe, hand, now, &self.options);

        debug!(
            seat = seat.name(),
            rank = dealt.card.rank,
            slot = dealt.card_index,
            score = dealt.score,
            "card dealt"
        );

        if self.round.shoe.reshuffles() != reshuffles {
            self.observer.on_shoe_reshuffled(self.round.shoe.remaining());
        }
        self.observer.on_card_dealt(&dealt);
        dealt
    }

    /// Decides how the round continues once the initial deal has landed.
    fn initial_settle(&mut self) {
        if self.round.state != GameState::Dealing {
            return;
        }

        if self.round.player.score() == BLACKJACK || self.round.dealer.score() == BLACKJACK {
            debug!(
                player = self.round.player.score(),
                dealer = self.round.dealer.score(),
                "twenty-one on the initial deal"
            );
            self.finish_round();
        } else {
            self.set_state(GameState::PlayerTurn);
            self.set_input(true);
        }
    }

    /// Reopens input once a hit card has landed.
    fn hit_settle(&mut self) {
        if self.round.state == GameState::PlayerTurn && !self.round.player.is_bust() {
            self.set_input(true);
        }
    }
}
