//! Table configuration options.

use crate::animation::Easing;
use crate::clock::Millis;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(8)
///     .with_deal_delay(250)
///     .with_dealer_stands_on(17);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of decks in the shoe. The shoe never holds fewer than one.
    pub decks: u8,
    /// Reshuffle at round boundaries when fewer cards than this remain.
    pub reshuffle_threshold: usize,
    /// Delay between initial deal events, and part of the dealer draw pace.
    pub deal_delay: Millis,
    /// How long each card takes to travel to its slot.
    pub animation_duration: Millis,
    /// Extra wait after the last initial card before play starts.
    pub settle_buffer: Millis,
    /// Extra wait after a hit card before input reopens.
    pub hit_settle_buffer: Millis,
    /// Dealer draws while its score is below this value.
    pub dealer_stands_on: u8,
    /// Progress curve reported with every card animation.
    pub easing: Easing,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            reshuffle_threshold: 20,
            deal_delay: 400,
            animation_duration: 500,
            settle_buffer: 100,
            hit_settle_buffer: 50,
            dealer_stands_on: 16,
            easing: Easing::EaseOutCubic,
        }
    }
}

impl TableOptions {
    /// Returns the wait between the last initial card and the settle check.
    #[must_use]
    pub const fn settle_delay(&self) -> Millis {
        self.animation_duration + self.settle_buffer
    }

    /// Returns the wait between a hit and input reopening.
    #[must_use]
    pub const fn hit_settle_delay(&self) -> Millis {
        self.animation_duration + self.hit_settle_buffer
    }

    /// Returns the spacing between dealer draws.
    #[must_use]
    pub const fn dealer_draw_delay(&self) -> Millis {
        self.deal_delay + self.animation_duration
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_reshuffle_threshold(52);
    /// assert_eq!(options.reshuffle_threshold, 52);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the delay between deal events.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_deal_delay(0);
    /// assert_eq!(options.deal_delay, 0);
    /// ```
    #[must_use]
    pub const fn with_deal_delay(mut self, delay: Millis) -> Self {
        self.deal_delay = delay;
        self
    }

    /// Sets the card animation duration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_animation_duration(300);
    /// assert_eq!(options.animation_duration, 300);
    /// assert_eq!(options.settle_delay(), 400);
    /// ```
    #[must_use]
    pub const fn with_animation_duration(mut self, duration: Millis) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Sets the extra wait before play starts after the initial deal.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_settle_buffer(0);
    /// assert_eq!(options.settle_delay(), options.animation_duration);
    /// ```
    #[must_use]
    pub const fn with_settle_buffer(mut self, buffer: Millis) -> Self {
        self.settle_buffer = buffer;
        self
    }

    /// Sets the extra wait before input reopens after a hit.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_hit_settle_buffer(10);
    /// assert_eq!(options.hit_settle_delay(), 510);
    /// ```
    #[must_use]
    pub const fn with_hit_settle_buffer(mut self, buffer: Millis) -> Self {
        self.hit_settle_buffer = buffer;
        self
    }

    /// Sets the score the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_on(17);
    /// assert_eq!(options.dealer_stands_on, 17);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, score: u8) -> Self {
        self.dealer_stands_on = score;
        self
    }

    /// Sets the animation progress curve.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Easing, TableOptions};
    ///
    /// let options = TableOptions::default().with_easing(Easing::Linear);
    /// assert_eq!(options.easing, Easing::Linear);
    /// ```
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}
