use crate::config::types::{SiteEntry, SitesFile};
use crate::url::extract_host;
use crate::ConfigError;
use std::collections::HashSet;

/// Validates an entire site file
pub fn validate(file: &SitesFile) -> Result<(), ConfigError> {
    let mut seen_domains = HashSet::new();

    for (index, entry) in file.sites.iter().enumerate() {
        let domain = validate_site_entry(index, entry)?;

        if !seen_domains.insert(domain.to_ascii_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "Site #{} duplicates domain '{}'",
                index + 1,
                domain
            )));
        }
    }

    Ok(())
}

/// Validates one entry and returns the domain it will end up with
fn validate_site_entry(index: usize, entry: &SiteEntry) -> Result<String, ConfigError> {
    let domain = match (&entry.domain, entry.start_urls.first()) {
        (Some(domain), _) => {
            if domain.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Site #{} has an empty domain",
                    index + 1
                )));
            }
            domain.clone()
        }
        (None, Some(first)) => extract_host(first).map_err(|e| {
            ConfigError::InvalidUrl(format!("Site #{}: start URL '{}': {}", index + 1, first, e))
        })?,
        (None, None) => {
            return Err(ConfigError::Validation(format!(
                "Site #{} needs a domain or at least one start URL",
                index + 1
            )));
        }
    };

    if let Some(codes) = &entry.accept_status_codes {
        validate_status_codes(&domain, codes)?;
    }

    warn_on_suspicious_timings(&domain, entry);

    Ok(domain)
}

/// Validates accepted status codes
fn validate_status_codes(domain: &str, codes: &[u16]) -> Result<(), ConfigError> {
    if codes.is_empty() {
        return Err(ConfigError::Validation(format!(
            "Site '{}': accept-status-codes cannot be empty",
            domain
        )));
    }

    if let Some(code) = codes.iter().find(|c| !(100..=599).contains(*c)) {
        return Err(ConfigError::Validation(format!(
            "Site '{}': {} is not an HTTP status code",
            domain, code
        )));
    }

    Ok(())
}

// Sites accept any value; the file loader only points out odd ones.
fn warn_on_suspicious_timings(domain: &str, entry: &SiteEntry) {
    if let Some(time_out) = entry.time_out.filter(|t| *t <= 0) {
        tracing::warn!("Site '{}': time-out is {}ms", domain, time_out);
    }
    if let Some(sleep_time) = entry.sleep_time.filter(|t| *t < 0) {
        tracing::warn!("Site '{}': negative sleep-time {}ms", domain, sleep_time);
    }
    if let Some(retry_times) = entry.retry_times.filter(|r| *r < 0) {
        tracing::warn!("Site '{}': negative retry-times {}", domain, retry_times);
    }
    if let Some(cycle) = entry.cycle_retry_times.filter(|r| *r < 0) {
        tracing::warn!("Site '{}': negative cycle-retry-times {}", domain, cycle);
    }
}
