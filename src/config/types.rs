use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;

/// Top-level layout of a site file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SitesFile {
    /// One entry per crawl target
    #[serde(default, rename = "site")]
    pub sites: Vec<SiteEntry>,
}

/// A single `[[site]]` table
///
/// Every field is optional; absent ones keep the defaults of
/// [`Site::new`](crate::Site::new).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SiteEntry {
    /// Explicit domain; inferred from the first start URL when absent
    pub domain: Option<String>,

    pub user_agent: Option<String>,

    /// Charset override, auto-detected when absent
    pub charset: Option<String>,

    /// Interval between two fetches (milliseconds)
    pub sleep_time: Option<i64>,

    pub retry_times: Option<i32>,

    pub cycle_retry_times: Option<i32>,

    /// Downloader timeout (milliseconds)
    pub time_out: Option<i64>,

    pub accept_status_codes: Option<Vec<u16>>,

    #[serde(default)]
    pub start_urls: Vec<String>,

    /// Cookies, in file order
    #[serde(default)]
    pub cookies: IndexMap<String, String>,

    #[serde(default)]
    pub headers: HashMap<String, String>,
}
