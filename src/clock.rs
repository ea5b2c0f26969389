//! Time sources driving the deal schedule.

use alloc::rc::Rc;
use core::cell::Cell;

/// Milliseconds on a [`Clock`].
pub type Millis = u64;

/// A monotonic millisecond time source.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> Millis;
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep a handle while the table
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Millis>>,
}

impl ManualClock {
    /// Creates a clock starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current time.
    ///
    /// Moving backwards is ignored.
    pub fn set(&self, now: Millis) {
        if now > self.now.get() {
            self.now.set(now);
        }
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: Millis) {
        self.now.set(self.now.get().saturating_add(delta));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        self.now.get()
    }
}

/// Wall-clock time in milliseconds since the clock was created.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Creates a clock reading zero now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }
}
