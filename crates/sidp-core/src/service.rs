//! Injectable identifier and time services.
//!
//! Assertion generation never reads the clock or a random source directly.
//! Both are reached through these traits so callers can substitute
//! deterministic implementations.

use chrono::{DateTime, Utc};

/// Produces unique identifiers for SAML objects.
///
/// Identifiers are used as XML `ID` attributes and must therefore be valid
/// NCNames (start with a letter or underscore).
pub trait IdService: Send + Sync {
    /// Generates a new identifier. Every call must return a distinct value.
    fn generate_id(&self) -> String;
}

/// Supplies the current instant.
pub trait TimeService: Send + Sync {
    /// Returns the current date and time in UTC.
    fn current_date_time(&self) -> DateTime<Utc>;
}

/// Identifier service backed by random (v4) UUIDs.
///
/// Identifiers have the form `_` followed by 32 lowercase hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdService;

impl RandomIdService {
    /// Creates a new random identifier service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdService for RandomIdService {
    fn generate_id(&self) -> String {
        format!("_{}", uuid::Uuid::new_v4().simple())
    }
}

/// Time service reading the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeService;

impl SystemTimeService {
    /// Creates a new system time service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TimeService for SystemTimeService {
    fn current_date_time(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Time service pinned to a single instant.
///
/// Used for reproducible output and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimeService {
    instant: DateTime<Utc>,
}

impl FixedTimeService {
    /// Creates a time service that always returns `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Returns the pinned instant.
    #[must_use]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl TimeService for FixedTimeService {
    fn current_date_time(&self) -> DateTime<Utc> {
        self.instant
    }
}
