use chrono::{DateTime, Duration, Utc};

/// Clock abstraction so services and tests agree on "now".
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// A clock that follows the system time.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// A clock pinned to the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Current time according to this clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Advance a fixed clock by `delta`. No effect on `Clock::Default`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }
}

/// Deterministic timestamp for tests (2025-06-15T06:13:20Z).
pub const TEST_EPOCH: i64 = 1_749_968_000;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(TEST_EPOCH, 0).expect("test epoch should be representable")
}
