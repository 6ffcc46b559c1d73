//! Integration tests for site settings
//!
//! These tests drive the public API the way a crawler would: build sites,
//! compare and hash them, and hand them to a scheduler as tasks.

use crawl_site::config::parse_sites;
use crawl_site::site::header;
use crawl_site::{Site, SiteError, Task};
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::thread;

fn hash_of(site: &Site) -> u64 {
    let mut hasher = DefaultHasher::new();
    site.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_build_site_end_to_end() {
    let mut site = Site::new();
    site.add_start_url("https://example.com/a")
        .unwrap()
        .add_start_url("https://example.com/b")
        .unwrap()
        .add_cookie("sid", "1")
        .set_time_out(5000);

    assert_eq!(site.domain(), Some("example.com"));
    assert_eq!(
        site.start_urls(),
        ["https://example.com/a", "https://example.com/b"]
    );
    assert_eq!(site.cookies().len(), 1);
    assert_eq!(site.cookies().get("sid").map(String::as_str), Some("1"));
    assert_eq!(site.time_out(), 5000);
    assert_eq!(site.sleep_time(), 3000);
}

#[test]
fn test_domain_inferred_only_once() {
    let mut site = Site::new();
    site.add_start_url("https://first.example.com/").unwrap();
    assert_eq!(site.domain(), Some("first.example.com"));

    for url in ["https://second.example.com/", "https://example.org/x"] {
        site.add_start_url(url).unwrap();
        assert_eq!(site.domain(), Some("first.example.com"));
    }
}

#[test]
fn test_set_domain_before_seeds_sticks() {
    let mut site = Site::new();
    site.set_domain("crawl-target")
        .add_start_url("https://example.com/")
        .unwrap()
        .add_start_url("https://example.org/")
        .unwrap();

    assert_eq!(site.domain(), Some("crawl-target"));
    assert_eq!(site.start_urls().len(), 2);
}

#[test]
fn test_repeated_keys_overwrite() {
    let mut site = Site::new();
    site.add_cookie("sid", "1")
        .add_cookie("sid", "2")
        .add_header(header::REFERER, "https://a.example.com/")
        .add_header(header::REFERER, "https://b.example.com/");

    assert_eq!(site.cookies().len(), 1);
    assert_eq!(site.cookies()["sid"], "2");
    assert_eq!(site.headers().len(), 1);
    assert_eq!(site.headers()["Referer"], "https://b.example.com/");
}

#[test]
fn test_tuning_differences_compare_equal() {
    let mut a = Site::new();
    a.add_start_url("https://example.com/")
        .unwrap()
        .set_user_agent("Bot/1.0")
        .set_charset("utf-8");

    let mut b = a.clone();
    b.add_cookie("sid", "1")
        .add_header("X-Token", "abc")
        .set_sleep_time(100)
        .set_retry_times(3)
        .set_cycle_retry_times(2)
        .set_time_out(10_000);

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    // Sites deduplicate by identity in hashed collections
    let set: HashSet<Site> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_accept_status_codes_distinguish_sites() {
    let mut a = Site::new();
    a.add_start_url("https://example.com/").unwrap();
    let mut b = a.clone();
    b.set_accept_status_codes(HashSet::from([200, 301]));

    assert_ne!(a, b);
}

#[test]
fn test_task_exposes_domain_and_same_site() {
    let mut site = Site::new();
    site.add_start_url("https://example.com/").unwrap();

    {
        let task = site.to_task().unwrap();
        assert_eq!(task.uuid(), "example.com");
        assert!(std::ptr::eq(task.site(), &site));
    }

    site.set_sleep_time(42);
    let task = site.to_task().unwrap();
    assert_eq!(task.site().sleep_time(), 42);
}

#[test]
fn test_default_accept_codes_shared_between_sites() {
    let a = Site::new();
    let b = Site::new();

    assert!(std::ptr::eq(a.accept_status_codes(), b.accept_status_codes()));
    assert_eq!(a.accept_status_codes(), &HashSet::from([200]));
}

#[test]
fn test_site_without_domain_has_no_task() {
    let site = Site::new();
    assert!(matches!(site.to_task(), Err(SiteError::MissingDomain)));
    assert!(matches!(site.identity(), Err(SiteError::MissingDomain)));
}

#[test]
fn test_invalid_first_seed_is_reported() {
    let mut site = Site::new();
    assert!(site.add_start_url("http://exa mple.com/").is_err());
    assert!(site.domain().is_none());
    assert!(site.start_urls().is_empty());

    site.add_start_url("https://example.com/").unwrap();
    assert_eq!(site.domain(), Some("example.com"));
}

#[test]
fn test_shared_tasks_across_threads() {
    let mut site = Site::new();
    site.add_start_url("https://example.com/")
        .unwrap()
        .set_retry_times(2);
    let task = site.into_shared_task().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let task = task.clone();
            thread::spawn(move || (task.uuid().to_string(), task.site().retry_times()))
        })
        .collect();

    for handle in handles {
        let (uuid, retries) = handle.join().unwrap();
        assert_eq!(uuid, "example.com");
        assert_eq!(retries, 2);
    }

    assert!(std::ptr::eq(task.site(), Arc::as_ptr(&task.shared_site())));
}

#[test]
fn test_loaded_sites_match_built_sites() {
    let loaded = parse_sites(
        r#"
[[site]]
user-agent = "Bot/1.0"
start-urls = ["https://example.com/a", "https://example.com/b"]
sleep-time = 500

[[site]]
start-urls = ["https://example.org/"]
accept-status-codes = [200, 404]
"#,
    )
    .unwrap();

    let mut first = Site::new();
    first
        .add_start_url("https://example.com/a")
        .unwrap()
        .add_start_url("https://example.com/b")
        .unwrap()
        .set_user_agent("Bot/1.0");

    let mut second = Site::new();
    second
        .add_start_url("https://example.org/")
        .unwrap()
        .set_accept_status_codes(HashSet::from([404, 200]));

    assert_eq!(loaded, vec![first, second]);

    let by_uuid: HashMap<String, &Site> = loaded
        .iter()
        .map(|site| (site.to_task().unwrap().uuid().to_string(), site))
        .collect();
    assert_eq!(by_uuid["example.com"].sleep_time(), 500);
    assert!(by_uuid["example.org"].is_accepted_status(404));
}
