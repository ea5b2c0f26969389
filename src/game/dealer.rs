use tracing::{debug, info};

use crate::clock::{Clock, Millis};
use crate::hand::Seat;
use crate::observer::TableObserver;
use crate::outcome::RoundResult;
use crate::sequencer::DealEvent;

use super::{GameState, Table};

impl<C: Clock, O: TableObserver> Table<C, O> {
    /// One step of the dealer's turn.
    ///
    /// The dealer draws while its score is below
    /// [`TableOptions::dealer_stands_on`], one card per step, each step
    /// spaced so the previous card has landed. The first step that finds the
    /// dealer standing (or bust) ends the round.
    ///
    /// [`TableOptions::dealer_stands_on`]: crate::TableOptions::dealer_stands_on
    pub(super) fn dealer_draw(&mut self, now: Millis) {
        if self.round.state != GameState::DealerTurn {
            return;
        }

        if self.round.dealer.score() < self.options.dealer_stands_on {
            self.deal_to(Seat::Dealer, now);
            self.sequencer
                .after(now, self.options.dealer_draw_delay(), DealEvent::DealerDraw);
        } else {
            debug!(score = self.round.dealer.score(), "dealer stands");
            self.finish_round();
        }
    }

    /// Deactivates both hands, evaluates the outcome and ends the round.
    pub(super) fn finish_round(&mut self) -> RoundResult {
        self.round.player.deactivate();
        self.round.dealer.deactivate();

        let result = RoundResult::new(self.round.player.score(), self.round.dealer.score());
        self.round.result = Some(result);

        self.set_input(false);
        self.set_state(GameState::GameOver);

        info!(
            outcome = ?result.outcome,
            player = result.player_score,
            dealer = result.dealer_score,
            "round over"
        );
        self.observer.on_round_over(&result);
        result
    }
}
