//! Timestamp precision shared by every persisted entity.

use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;

/// Fractional-second digits kept by `TIMESTAMPTZ` columns.
const STORED_SUBSEC_DIGITS: u16 = 6;

/// Truncates a timestamp to the microsecond precision of the store.
#[must_use]
pub fn to_stored_precision(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp.trunc_subsecs(STORED_SUBSEC_DIGITS)
}

/// Reads the clock at the microsecond precision of the store.
pub(super) fn stored_now(clock: &impl Clock) -> DateTime<Utc> {
    to_stored_precision(clock.utc())
}
