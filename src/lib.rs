//! Crawl-Site: per-site crawl settings for a polite web crawler
//!
//! This crate holds everything a downloader and scheduler need to know about one
//! crawl target: its identity (domain), request shaping (headers, cookies, user
//! agent, charset), politeness and retry policy, accepted status codes and seed URLs.
//! A [`Site`] can be projected into a [`Task`] for a scheduler, and whole sets of
//! sites can be loaded from a TOML file through [`config`].

pub mod config;
pub mod site;
pub mod url;

use thiserror::Error;

/// Main error type for Crawl-Site operations
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Site has no domain: set one or add a start URL first")]
    MissingDomain,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL '{url}': {source}")]
    Parse {
        url: String,
        source: ::url::ParseError,
    },

    #[error("URL has no host: {0}")]
    MissingHost(String),
}

/// Result type alias for Crawl-Site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{load_sites, SitesFile};
pub use site::{header, SharedSiteTask, Site, SiteIdentity, SiteTask, Task};
pub use crate::url::{extract_domain, extract_host};
