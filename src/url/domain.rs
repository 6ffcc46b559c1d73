use crate::{UrlError, UrlResult};
use url::{ParseError, Url};

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host (e.g. `mailto:` URLs), it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use crawl_site::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("https://sub.example.com:8080/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("sub.example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Extracts the host of a raw URL string
///
/// Seeds are frequently written without a scheme (`example.com/news`,
/// `localhost:8080`). Those either fail to parse as absolute URLs or parse with
/// the host taken for a scheme, so they get one more attempt with an `http://`
/// prefix before the error is reported. Every other parse failure is returned
/// unchanged.
///
/// # Arguments
///
/// * `raw` - The URL to take the host from
///
/// # Returns
///
/// * `Ok(String)` - The lowercase host, without port
/// * `Err(UrlError)` - The URL could not be parsed or has no host
///
/// # Examples
///
/// ```
/// use crawl_site::url::extract_host;
///
/// assert_eq!(extract_host("https://example.com/a").unwrap(), "example.com");
/// assert_eq!(extract_host("example.com/a").unwrap(), "example.com");
/// assert_eq!(extract_host("example.com:8080/a").unwrap(), "example.com");
/// assert!(extract_host("mailto:someone@example.com").is_err());
/// ```
pub fn extract_host(raw: &str) -> UrlResult<String> {
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("http://{}", raw))
            .map_err(|source| UrlError::Parse {
                url: raw.to_string(),
                source,
            })?,
        Err(source) => {
            return Err(UrlError::Parse {
                url: raw.to_string(),
                source,
            })
        }
    };

    // `example.com:8080/a` parses with `example.com` as its scheme and no host
    if url.host().is_none() && is_host_with_port(raw) {
        if let Some(host) = Url::parse(&format!("http://{}", raw))
            .ok()
            .as_ref()
            .and_then(extract_domain)
        {
            return Ok(host);
        }
    }

    extract_domain(&url).ok_or_else(|| UrlError::MissingHost(raw.to_string()))
}

/// Returns true for scheme-less `host:port[/path]` strings
fn is_host_with_port(raw: &str) -> bool {
    if raw.contains("://") {
        return false;
    }
    raw.split_once(':')
        .is_some_and(|(_, rest)| rest.starts_with(|c: char| c.is_ascii_digit()))
}
