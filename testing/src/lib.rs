//! # Varaamo Testing
//!
//! Testing utilities and helpers for the Varaamo reducer architecture.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits (`FixedClock`)
//! - The [`ReducerTest`] Given-When-Then harness
//! - Assertion helpers for reducer effects
//!
//! ## Example
//!
//! ```ignore
//! use varaamo_testing::{ReducerTest, assertions, test_clock};
//!
//! ReducerTest::new(AvailabilityReducer::new())
//!     .with_env(AvailabilityEnvironment::new(AvailabilityConfig::default()))
//!     .given_state(AvailabilityState::today(&test_clock()))
//!     .when_action(AvailabilityAction::Cancel)
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use varaamo_core::environment::Clock;


/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use varaamo_testing::mocks::FixedClock;
    /// use varaamo_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2024-01-01 08:00:00 UTC)
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2024-01-01T08:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
        assert_eq!(time1.year(), 2024);
    }
}
