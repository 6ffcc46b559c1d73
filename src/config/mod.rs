//! Configuration module for Crawl-Site
//!
//! This module loads sets of sites from TOML files. Each `[[site]]` table becomes
//! one [`Site`](crate::Site), built through the same setters a caller would use.
//!
//! # Example
//!
//! ```no_run
//! use crawl_site::config::load_sites;
//! use std::path::Path;
//!
//! let sites = load_sites(Path::new("sites.toml")).unwrap();
//! println!("Loaded {} sites", sites.len());
//! ```
//!
//! # File format
//!
//! ```toml
//! [[site]]
//! user-agent = "MyCrawler/1.0"
//! sleep-time = 1000
//! accept-status-codes = [200, 301]
//! start-urls = ["https://example.com/"]
//! cookies = { sid = "1" }
//! headers = { Referer = "https://example.com/" }
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{SiteEntry, SitesFile};

// Re-export parser functions
pub use parser::{compute_config_hash, load_sites, load_sites_with_hash, parse_sites};
