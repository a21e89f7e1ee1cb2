//! Monthly index naming
//!
//! Indexes are kept per calendar month: `202212-ErcotSPP`. The prefix
//! is applied at request time so long-running callers roll over
//! automatically.

use chrono::{DateTime, Utc};

/// Prefix `name` with the year-month of `at`, e.g. `202212-ErcotSPP`.
pub fn monthly_index(name: &str, at: DateTime<Utc>) -> String {
    format!("{}-{}", at.format("%Y%m"), name)
}

/// Prefix `name` with the current year-month.
pub fn monthly_index_now(name: &str) -> String {
    monthly_index(name, Utc::now())
}
