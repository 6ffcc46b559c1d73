use crate::site::Site;
use crate::SiteError;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// The fields that decide whether two sites are the same crawl target
///
/// Only what is crawled counts: domain, seeds, user agent, charset and the
/// accepted status codes. Cookies, headers and all timing or retry values are
/// operational tuning and take no part in equality or hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteIdentity<'a> {
    pub domain: &'a str,
    pub start_urls: &'a [String],
    pub user_agent: Option<&'a str>,
    pub charset: Option<&'a str>,
    pub accept_status_codes: &'a HashSet<u16>,
}

impl Hash for SiteIdentity<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.domain.hash(state);
        self.start_urls.hash(state);
        self.user_agent.hash(state);
        self.charset.hash(state);

        // HashSet iteration order is arbitrary
        let mut codes: Vec<u16> = self.accept_status_codes.iter().copied().collect();
        codes.sort_unstable();
        codes.hash(state);
    }
}

impl Site {
    /// Borrows the identity fields of this site
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::MissingDomain`] if neither a domain was set nor a
    /// start URL added.
    pub fn identity(&self) -> Result<SiteIdentity<'_>, SiteError> {
        let domain = self.domain().ok_or(SiteError::MissingDomain)?;
        Ok(SiteIdentity {
            domain,
            start_urls: self.start_urls(),
            user_agent: self.user_agent(),
            charset: self.charset(),
            accept_status_codes: self.accept_status_codes(),
        })
    }

    fn identity_or_panic(&self) -> SiteIdentity<'_> {
        match self.identity() {
            Ok(identity) => identity,
            Err(e) => panic!("cannot compare or hash a site: {}", e),
        }
    }
}

/// # Panics
///
/// Panics if either site has no domain. Use [`Site::identity`] to compare sites
/// whose domain may still be unknown.
impl PartialEq for Site {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.identity_or_panic() == other.identity_or_panic()
    }
}

impl Eq for Site {}

/// # Panics
///
/// Panics if the site has no domain.
impl Hash for Site {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity_or_panic().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn example_site() -> Site {
        let mut site = Site::new();
        site.add_start_url("https://example.com/a")
            .unwrap()
            .set_user_agent("TestBot/1.0");
        site
    }

    #[test]
    fn test_operational_fields_do_not_affect_identity() {
        let a = example_site();
        let mut b = example_site();
        b.add_cookie("sid", "1")
            .add_header("Accept-Language", "en")
            .set_sleep_time(10)
            .set_retry_times(5)
            .set_cycle_retry_times(2)
            .set_time_out(9000);

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_accept_status_codes_affect_identity() {
        let a = example_site();
        let mut b = example_site();
        b.set_accept_status_codes(HashSet::from([200, 301]));
        assert_ne!(a, b);
    }

    #[test]
    fn test_equal_accept_sets_hash_equal() {
        let mut a = example_site();
        let mut b = example_site();
        a.set_accept_status_codes((200..210).collect());
        b.set_accept_status_codes((200..210).rev().collect());

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_replaced_default_set_equals_default() {
        let a = example_site();
        let mut b = example_site();
        b.set_accept_status_codes(HashSet::from([200]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_identity_fields_affect_equality() {
        let base = example_site();

        let mut other_seed = example_site();
        other_seed.add_start_url("https://example.com/b").unwrap();
        assert_ne!(base, other_seed);

        let mut other_agent = example_site();
        other_agent.set_user_agent("OtherBot/2.0");
        assert_ne!(base, other_agent);

        let mut with_charset = example_site();
        with_charset.set_charset("utf-8");
        assert_ne!(base, with_charset);

        let mut other_domain = example_site();
        other_domain.set_domain("example.org");
        assert_ne!(base, other_domain);
    }

    #[test]
    fn test_identity_requires_domain() {
        let site = Site::new();
        assert!(matches!(site.identity(), Err(SiteError::MissingDomain)));
    }

    #[test]
    fn test_identity_borrows_fields() {
        let site = example_site();
        let identity = site.identity().unwrap();
        assert_eq!(identity.domain, "example.com");
        assert_eq!(identity.start_urls, ["https://example.com/a"]);
        assert_eq!(identity.user_agent, Some("TestBot/1.0"));
        assert_eq!(identity.charset, None);
    }

    #[test]
    #[should_panic(expected = "cannot compare or hash a site")]
    fn test_eq_without_domain_panics() {
        let a = Site::new();
        let b = Site::new();
        let _ = a == b;
    }

    #[test]
    #[should_panic(expected = "cannot compare or hash a site")]
    fn test_hash_without_domain_panics() {
        hash_of(&Site::new());
    }
}
