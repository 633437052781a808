//! Time source abstraction
//!
//! Every rule that depends on "now" (birth and death validation, age
//! derivation, life-stage predicates) reads the current instant through a
//! [`Clock`]. Production code uses [`SystemClock`]; tests substitute a
//! [`FixedClock`] and move it around explicitly.

use std::fmt;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};

/// Source of the current instant.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// A clock shared between the entities that read it.
pub type SharedClock = Arc<dyn Clock>;

/// Returns a shared handle to the real system clock.
pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock)
}

/// System clock - uses real time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a caller-chosen instant.
///
/// The instant can be moved with [`FixedClock::set`] and
/// [`FixedClock::advance`], which lets tests simulate the passage of time
/// for entities already holding a handle to this clock.
#[derive(Debug)]
pub struct FixedClock {
    instant: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: RwLock::new(instant),
        }
    }

    /// Creates a fixed clock wrapped for sharing
    pub fn shared(instant: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self::new(instant))
    }

    /// Moves the clock to the given instant
    pub fn set(&self, instant: DateTime<Utc>) {
        match self.instant.write() {
            Ok(mut guard) => *guard = instant,
            Err(poisoned) => *poisoned.into_inner() = instant,
        }
    }

    /// Moves the clock forward (or backward, for a negative duration)
    pub fn advance(&self, duration: Duration) {
        let next = self.now() + duration;
        self.set(next);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        match self.instant.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
