//! URL handling module for Crawl-Site
//!
//! Host extraction used to infer a site's domain from its seed URLs.

mod domain;

pub use domain::{extract_domain, extract_host};
