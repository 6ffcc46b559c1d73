use crate::config::types::{SiteEntry, SitesFile};
use crate::config::validation::validate;
use crate::site::Site;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads the sites described by a TOML file
///
/// # Arguments
///
/// * `path` - Path to the TOML site file
///
/// # Returns
///
/// * `Ok(Vec<Site>)` - One site per `[[site]]` table, in file order
/// * `Err(ConfigError)` - Failed to read, parse, or validate the file
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use crawl_site::config::load_sites;
///
/// let sites = load_sites(Path::new("sites.toml")).unwrap();
/// for site in &sites {
///     println!("{:?}: {} seeds", site.domain(), site.start_urls().len());
/// }
/// ```
pub fn load_sites(path: &Path) -> Result<Vec<Site>, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let sites = parse_sites(&content)?;
    tracing::debug!("Loaded {} sites from {}", sites.len(), path.display());
    Ok(sites)
}

/// Parses and validates site definitions from TOML text
pub fn parse_sites(content: &str) -> Result<Vec<Site>, ConfigError> {
    let file: SitesFile = toml::from_str(content)?;

    validate(&file)?;

    file.sites.into_iter().map(build_site).collect()
}

/// Builds a site from a file entry through the regular setters
fn build_site(entry: SiteEntry) -> Result<Site, ConfigError> {
    let mut site = Site::new();

    if let Some(domain) = entry.domain {
        site.set_domain(domain);
    }
    if let Some(user_agent) = entry.user_agent {
        site.set_user_agent(user_agent);
    }
    if let Some(charset) = entry.charset {
        site.set_charset(charset);
    }
    if let Some(sleep_time) = entry.sleep_time {
        site.set_sleep_time(sleep_time);
    }
    if let Some(retry_times) = entry.retry_times {
        site.set_retry_times(retry_times);
    }
    if let Some(cycle_retry_times) = entry.cycle_retry_times {
        site.set_cycle_retry_times(cycle_retry_times);
    }
    if let Some(time_out) = entry.time_out {
        site.set_time_out(time_out);
    }
    if let Some(codes) = entry.accept_status_codes {
        site.set_accept_status_codes(codes.into_iter().collect());
    }

    for url in entry.start_urls {
        site.add_start_url(url)
            .map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;
    }
    for (name, value) in entry.cookies {
        site.add_cookie(name, value);
    }
    for (key, value) in entry.headers {
        site.add_header(key, value);
    }

    Ok(site)
}

/// Computes a SHA-256 hash of the site file content
///
/// This is used to detect if the site definitions changed between crawl runs.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file content
/// * `Err(ConfigError)` - Failed to read the file
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads the sites of a file and returns them together with the file hash
pub fn load_sites_with_hash(path: &Path) -> Result<(Vec<Site>, String), ConfigError> {
    let sites = load_sites(path)?;
    let hash = compute_config_hash(path)?;
    Ok((sites, hash))
}
