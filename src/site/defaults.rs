use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

/// Default politeness delay between two fetches (milliseconds)
pub const DEFAULT_SLEEP_TIME_MS: i64 = 3000;

/// Default number of immediate re-fetch attempts
pub const DEFAULT_RETRY_TIMES: i32 = 0;

/// Default number of re-enqueue attempts
pub const DEFAULT_CYCLE_RETRY_TIMES: i32 = 0;

/// Default transport timeout (milliseconds)
pub const DEFAULT_TIME_OUT_MS: i64 = 2000;

/// The only status code accepted when none are configured
pub const DEFAULT_ACCEPT_STATUS_CODE: u16 = 200;

/// Header names with a well-known meaning for the downloader
pub mod header {
    pub const REFERER: &str = "Referer";
}

// Shared by every site that never replaces its accept set.
static DEFAULT_ACCEPT_STATUS_CODES: LazyLock<Arc<HashSet<u16>>> =
    LazyLock::new(|| Arc::new(HashSet::from([DEFAULT_ACCEPT_STATUS_CODE])));

/// Returns a handle to the process-wide default accept set (`{200}`)
pub fn default_accept_status_codes() -> Arc<HashSet<u16>> {
    Arc::clone(&DEFAULT_ACCEPT_STATUS_CODES)
}
