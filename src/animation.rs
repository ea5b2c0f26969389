//! Card deal animation timing.
//!
//! The engine decides *when* a card moves and for how long; where it moves
//! and how it is drawn belong to the presentation layer. A [`CardAnimation`]
//! turns a point in time into a progress value the renderer can use to
//! interpolate position and angle between the shoe and the card's fan slot.

use crate::clock::Millis;

/// Animation progress curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Starts fast and decelerates, like a card sliding into place.
    #[default]
    EaseOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

/// Timing of a single card travelling from the shoe to its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardAnimation {
    /// Time the card left the shoe.
    pub started_at: Millis,
    /// How long the card takes to arrive.
    pub duration: Millis,
    /// Progress curve.
    pub easing: Easing,
}

impl CardAnimation {
    /// Creates an animation starting at `started_at`.
    #[must_use]
    pub const fn new(started_at: Millis, duration: Millis, easing: Easing) -> Self {
        Self {
            started_at,
            duration,
            easing,
        }
    }

    /// Returns the time the card arrives in its slot.
    #[must_use]
    pub const fn ends_at(&self) -> Millis {
        self.started_at.saturating_add(self.duration)
    }

    /// Returns linear progress in `[0, 1]` at `now`.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "animation durations are far below f64 precision limits"
    )]
    pub fn progress(&self, now: Millis) -> f64 {
        if self.duration == 0 || now >= self.ends_at() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        elapsed as f64 / self.duration as f64
    }

    /// Returns progress at `now` mapped through the animation's easing.
    #[must_use]
    pub fn eased_progress(&self, now: Millis) -> f64 {
        self.easing.apply(self.progress(now))
    }

    /// Returns progress at `now` mapped through a caller-supplied curve.
    pub fn progress_with<F>(&self, now: Millis, curve: F) -> f64
    where
        F: FnOnce(f64) -> f64,
    {
        curve(self.progress(now))
    }

    /// Interpolates between `from` and `to` at `now`.
    ///
    /// Works for any scalar the renderer tracks: x, y or rotation angle.
    #[must_use]
    #[expect(
        clippy::suboptimal_flops,
        reason = "mul_add is not available without std"
    )]
    pub fn interpolate(&self, from: f64, to: f64, now: Millis) -> f64 {
        from + (to - from) * self.eased_progress(now)
    }

    /// Returns whether the card has arrived at `now`.
    #[must_use]
    pub const fn is_complete(&self, now: Millis) -> bool {
        now >= self.ends_at()
    }
}
