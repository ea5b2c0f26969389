use tracing::{debug, info};

use crate::clock::Clock;
use crate::error::ActionError;
use crate::hand::Seat;
use crate::observer::TableObserver;
use crate::sequencer::DealEvent;

use super::{GameState, Table, TableSnapshot};

impl<C: Clock, O: TableObserver> Table<C, O> {
    fn ensure_player_turn(&self, action: &'static str) -> Result<(), ActionError> {
        if self.round.state != GameState::PlayerTurn {
            debug!(action, state = self.round.state.name(), "ignoring action");
            return Err(ActionError::InvalidState);
        }

        if !self.input_enabled || self.sequencer.has_pending_deal_for(Seat::Player) {
            debug!(action, "ignoring action while input is locked");
            return Err(ActionError::InputLocked);
        }

        Ok(())
    }

    /// Starts the first round.
    ///
    /// # Errors
    ///
    /// Returns an error if a round has already been started; use
    /// [`reset`](Self::reset) to deal again.
    pub fn start_round(&mut self) -> Result<TableSnapshot, ActionError> {
        if self.round.state != GameState::Initial {
            debug!(state = self.round.state.name(), "ignoring start");
            return Err(ActionError::InvalidState);
        }

        self.begin_dealing();
        Ok(self.snapshot())
    }

    /// Player action: Hit (draw a card).
    ///
    /// The card is added and scored right away. A bust ends the round on the
    /// spot; otherwise input stays locked until the card has landed.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or input is
    /// locked. Nothing changes in that case.
    pub fn hit(&mut self) -> Result<TableSnapshot, ActionError> {
        self.ensure_player_turn("hit")?;

        let now = self.clock.now();
        self.deal_to(Seat::Player, now);

        if self.round.player.is_bust() {
            self.finish_round();
        } else {
            self.set_input(false);
            self.sequencer
                .after(now, self.options.hit_settle_delay(), DealEvent::HitSettle);
        }

        Ok(self.snapshot())
    }

    /// Player action: Stand (keep current hand) and let the dealer play.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or input is
    /// locked. Nothing changes in that case.
    pub fn stand(&mut self) -> Result<TableSnapshot, ActionError> {
        self.ensure_player_turn("stand")?;

        let now = self.clock.now();
        self.round.player.deactivate();
        self.set_input(false);
        self.set_state(GameState::DealerTurn);
        self.sequencer
            .after(now, self.options.dealer_draw_delay(), DealEvent::DealerDraw);

        Ok(self.snapshot())
    }

    /// Abandons the current round and deals a new one.
    ///
    /// Every pending event of the old round is cancelled first, so nothing
    /// scheduled for it can touch the new one. The shoe carries over and is
    /// reshuffled when it runs low.
    ///
    /// # Errors
    ///
    /// Never fails today; the `Result` matches the other actions.
    pub fn reset(&mut self) -> Result<TableSnapshot, ActionError> {
        let cancelled = self.sequencer.cancel_all();
        info!(from = self.round.state.name(), cancelled, "resetting table");

        if self.round.clear(self.options.reshuffle_threshold) {
            self.observer.on_shoe_reshuffled(self.round.shoe.remaining());
        }
        self.begin_dealing();
        Ok(self.snapshot())
    }
}
