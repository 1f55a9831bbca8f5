use chrono::{DateTime, Duration, Utc};

/// Where session timestamps come from.
///
/// `Fixed` keeps `started_at`/`completed_at` deterministic in tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Current time, but never earlier than `floor`.
    ///
    /// System time is not monotonic; a completion stamp taken after an NTP
    /// step back would otherwise land before the session start.
    #[must_use]
    pub fn now_not_before(&self, floor: DateTime<Utc>) -> DateTime<Utc> {
        self.now().max(floor)
    }

    /// Shifts a fixed clock by `delta`, which may be negative.
    /// `Clock::System` is unaffected.
    pub fn shift(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }
}

/// 2023-11-14T22:13:20Z.
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
