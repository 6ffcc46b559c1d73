use crate::site::defaults::{
    default_accept_status_codes, DEFAULT_CYCLE_RETRY_TIMES, DEFAULT_RETRY_TIMES,
    DEFAULT_SLEEP_TIME_MS, DEFAULT_TIME_OUT_MS,
};
use crate::url::extract_host;
use crate::UrlError;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

/// Crawl settings for a single target site
///
/// A `Site` is built once through its chainable setters and then handed, read-only,
/// to whatever downloads and schedules pages for it. No value is range checked:
/// negative or zero timings are stored as given and left to the consumer.
///
/// # Example
///
/// ```
/// use crawl_site::Site;
///
/// let mut site = Site::new();
/// site.add_start_url("https://example.com/a")?
///     .add_cookie("sid", "1")
///     .set_time_out(5000);
///
/// assert_eq!(site.domain(), Some("example.com"));
/// assert_eq!(site.sleep_time(), 3000);
/// # Ok::<(), crawl_site::UrlError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Site {
    domain: Option<String>,
    user_agent: Option<String>,
    cookies: IndexMap<String, String>,
    headers: HashMap<String, String>,
    charset: Option<String>,
    start_urls: Vec<String>,
    sleep_time: i64,
    retry_times: i32,
    cycle_retry_times: i32,
    time_out: i64,
    accept_status_codes: Arc<HashSet<u16>>,
}

impl Site {
    /// Creates a site with default politeness settings and no seeds
    pub fn new() -> Self {
        Self {
            domain: None,
            user_agent: None,
            cookies: IndexMap::new(),
            headers: HashMap::new(),
            charset: None,
            start_urls: Vec::new(),
            sleep_time: DEFAULT_SLEEP_TIME_MS,
            retry_times: DEFAULT_RETRY_TIMES,
            cycle_retry_times: DEFAULT_CYCLE_RETRY_TIMES,
            time_out: DEFAULT_TIME_OUT_MS,
            accept_status_codes: default_accept_status_codes(),
        }
    }

    /// Alias of [`Site::new`] that reads well at the head of a chain
    pub fn me() -> Self {
        Self::new()
    }

    /// Adds a cookie sent with every request to this site
    ///
    /// Re-adding a name overwrites its value but keeps its original position.
    pub fn add_cookie(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Adds an HTTP header for the downloader, overwriting any previous value
    ///
    /// Cookies and the user agent have their own setters. See
    /// [`header`](crate::site::header) for well-known names.
    pub fn add_header(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the user agent sent by the downloader
    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) -> &mut Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Drops the user agent so the downloader falls back to its own
    pub fn clear_user_agent(&mut self) -> &mut Self {
        self.user_agent = None;
        self
    }

    /// Forces the charset used to decode pages
    ///
    /// Without it the charset is detected from the HTTP response.
    pub fn set_charset(&mut self, charset: impl Into<String>) -> &mut Self {
        self.charset = Some(charset.into());
        self
    }

    /// Drops the charset override, going back to detection from the response
    pub fn clear_charset(&mut self) -> &mut Self {
        self.charset = None;
        self
    }

    /// Sets the downloader timeout in milliseconds
    pub fn set_time_out(&mut self, time_out: i64) -> &mut Self {
        self.time_out = time_out;
        self
    }

    /// Sets the interval between two fetches in milliseconds
    pub fn set_sleep_time(&mut self, sleep_time: i64) -> &mut Self {
        self.sleep_time = sleep_time;
        self
    }

    /// Sets how often a failed download is retried immediately
    pub fn set_retry_times(&mut self, retry_times: i32) -> &mut Self {
        self.retry_times = retry_times;
        self
    }

    /// Sets how often a failed download goes back to the scheduler
    ///
    /// Only schedulers that can re-queue requests honour this.
    pub fn set_cycle_retry_times(&mut self, cycle_retry_times: i32) -> &mut Self {
        self.cycle_retry_times = cycle_retry_times;
        self
    }

    /// Replaces the set of status codes whose responses get processed
    pub fn set_accept_status_codes(&mut self, codes: HashSet<u16>) -> &mut Self {
        self.accept_status_codes = Arc::new(codes);
        self
    }

    /// Sets the domain explicitly; seeds added later never override it
    pub fn set_domain(&mut self, domain: impl Into<String>) -> &mut Self {
        self.domain = Some(domain.into());
        self
    }

    /// Appends a seed URL
    ///
    /// While no domain is known, the host of `url` becomes the domain. If that host
    /// cannot be extracted the error is returned and the site is left untouched.
    /// Once a domain exists, URLs are appended as given without being parsed.
    ///
    /// # Errors
    ///
    /// Returns a [`UrlError`] when the domain has to be inferred from `url` and
    /// `url` has no parseable host.
    pub fn add_start_url(&mut self, url: impl Into<String>) -> Result<&mut Self, UrlError> {
        let url = url.into();

        if self.domain.is_none() {
            let domain = extract_host(&url)?;
            tracing::debug!("Inferred domain {} from start URL {}", domain, url);
            self.domain = Some(domain);
        }

        tracing::trace!("Adding start URL: {}", url);
        self.start_urls.push(url);
        Ok(self)
    }

    /// The explicit or inferred domain, `None` until one is known
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// The configured user agent, if any
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Cookies in the order they were first added
    pub fn cookies(&self) -> &IndexMap<String, String> {
        &self.cookies
    }

    /// Extra HTTP headers for the downloader
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// The manually set charset, if any
    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    /// Seed URLs in the order they were added
    pub fn start_urls(&self) -> &[String] {
        &self.start_urls
    }

    /// Interval between two fetches in milliseconds
    pub fn sleep_time(&self) -> i64 {
        self.sleep_time
    }

    /// Immediate re-fetch attempts after a failed download
    pub fn retry_times(&self) -> i32 {
        self.retry_times
    }

    /// Re-enqueue attempts once immediate retries are used up
    pub fn cycle_retry_times(&self) -> i32 {
        self.cycle_retry_times
    }

    /// Downloader timeout in milliseconds
    pub fn time_out(&self) -> i64 {
        self.time_out
    }

    /// Status codes treated as a successful fetch
    pub fn accept_status_codes(&self) -> &HashSet<u16> {
        &self.accept_status_codes
    }

    /// Returns true while the site still shares the process-wide `{200}` set
    pub fn uses_default_accept_status_codes(&self) -> bool {
        Arc::ptr_eq(&self.accept_status_codes, &default_accept_status_codes())
    }

    /// Returns true if a response with `status_code` should be processed
    pub fn is_accepted_status(&self, status_code: u16) -> bool {
        self.accept_status_codes.contains(&status_code)
    }

    /// The sleep time as a `Duration`, negative values read as zero
    pub fn sleep_duration(&self) -> Duration {
        millis_to_duration(self.sleep_time)
    }

    /// The timeout as a `Duration`, negative values read as zero
    pub fn timeout(&self) -> Duration {
        millis_to_duration(self.time_out)
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new()
    }
}

fn millis_to_duration(millis: i64) -> Duration {
    Duration::from_millis(u64::try_from(millis).unwrap_or(0))
}
