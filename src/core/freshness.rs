use std::time::{Duration, SystemTime};

/// Whether a cache artifact written at `last_written` is still fresh under
/// `max_age`. A write time in the future (clock stepped backwards since the
/// write) counts as fresh; a missing artifact has no write time and is
/// always stale.
pub fn is_fresh(last_written: SystemTime, max_age: Duration) -> bool {
    match last_written.elapsed() {
        Ok(age) => age < max_age,
        Err(_) => true,
    }
}
