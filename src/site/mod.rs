//! Site module for Crawl-Site
//!
//! This module holds the per-site crawl settings and the views handed to a scheduler.
//!
//! # Components
//!
//! - `Site`: Chainable settings for one crawl target (domain, seeds, headers, cookies, timings)
//! - `SiteIdentity`: The subset of fields that makes two sites the same target
//! - `Task`, `SiteTask`, `SharedSiteTask`: Identity plus settings, as seen by a scheduler
//!
//! # Example
//!
//! ```
//! use crawl_site::site::{Site, Task};
//!
//! let mut site = Site::me();
//! site.add_start_url("https://example.com/a")?
//!     .add_start_url("https://example.com/b")?
//!     .add_cookie("sid", "1")
//!     .set_time_out(5000);
//!
//! let task = site.to_task()?;
//! assert_eq!(task.uuid(), "example.com");
//! # Ok::<(), crawl_site::SiteError>(())
//! ```

mod defaults;
mod identity;
mod settings;
mod task;

// Re-export main types
pub use defaults::{
    default_accept_status_codes, header, DEFAULT_ACCEPT_STATUS_CODE, DEFAULT_CYCLE_RETRY_TIMES,
    DEFAULT_RETRY_TIMES, DEFAULT_SLEEP_TIME_MS, DEFAULT_TIME_OUT_MS,
};
pub use identity::SiteIdentity;
pub use settings::Site;
pub use task::{SharedSiteTask, SiteTask, Task};
