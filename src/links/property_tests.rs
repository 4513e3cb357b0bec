//! Property-Based Tests for the Link Window and Cache Keys
//!
//! Uses proptest to verify the windowing invariants and cache-key
//! uniqueness across randomized pagination geometries.

use proptest::prelude::*;
use std::time::Duration;

use crate::links::{page_links, LinkConfig, PageLink, QueryParams};
use crate::paginator::page_key;

// == Strategies ==
/// Generates a (current_page, num_pages) pair with current in range.
fn page_position_strategy() -> impl Strategy<Value = (u64, u64)> {
    (1u64..=200).prop_flat_map(|num_pages| (1u64..=num_pages, Just(num_pages)))
}

/// Cache-key namespaces restricted to delimiter-free characters.
fn namespace_strategy() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}".prop_map(|s| s)
}

fn numbered(links: &[PageLink]) -> Vec<u64> {
    links
        .iter()
        .filter(|l| l.label.parse::<u64>().is_ok())
        .map(|l| l.number)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // The numbered window is contiguous, contains the current page, and is
    // exactly window_size wide once enough pages exist; it never exceeds
    // the available pages.
    #[test]
    fn prop_window_shape((current, num_pages) in page_position_strategy()) {
        let cfg = LinkConfig::default();
        let links = page_links(current, num_pages, &QueryParams::new(), &cfg);
        let window = numbered(&links);

        let expected_len = cfg.window_size.min(num_pages) as usize;
        prop_assert_eq!(window.len(), expected_len, "window width");

        for pair in window.windows(2) {
            prop_assert_eq!(pair[1], pair[0] + 1, "window must be contiguous");
        }

        prop_assert!(window.contains(&current), "current page must be in window");
        prop_assert!(*window.first().unwrap() >= 1);
        prop_assert!(*window.last().unwrap() <= num_pages);
    }

    // Exactly one numbered link carries the active class, and it targets
    // the current page.
    #[test]
    fn prop_single_active_link((current, num_pages) in page_position_strategy()) {
        let links = page_links(current, num_pages, &QueryParams::new(), &LinkConfig::default());

        let active: Vec<_> = links.iter().filter(|l| l.css_class == "active").collect();
        prop_assert_eq!(active.len(), 1);
        prop_assert_eq!(active[0].number, current);
    }

    // First/Previous appear exactly when a page precedes the current one;
    // Next/Last appear exactly when pages exist past the window's edge.
    #[test]
    fn prop_edge_links((current, num_pages) in page_position_strategy()) {
        let cfg = LinkConfig::default();
        let links = page_links(current, num_pages, &QueryParams::new(), &cfg);

        let has = |label: &str| links.iter().any(|l| l.label == label);

        prop_assert_eq!(has(&cfg.first_label), current > 1);
        prop_assert_eq!(has(&cfg.previous_label), current > 1);

        let window_max = *numbered(&links).last().unwrap();
        prop_assert_eq!(has(&cfg.next_label), window_max < num_pages);
        prop_assert_eq!(has(&cfg.last_label), window_max < num_pages);
    }

    // Every link's href re-encodes the query with the page parameter set
    // to that link's target.
    #[test]
    fn prop_hrefs_target_link_number(
        (current, num_pages) in page_position_strategy(),
        extra in "[a-z]{1,8}"
    ) {
        let cfg = LinkConfig::default();
        let query = QueryParams::parse(&format!("q={extra}"));
        let links = page_links(current, num_pages, &query, &cfg);

        for link in &links {
            let parsed = QueryParams::parse(&link.href);
            let number = link.number.to_string();
            prop_assert_eq!(parsed.get(&cfg.page_param), Some(number.as_str()));
            prop_assert_eq!(parsed.get("q"), Some(extra.as_str()));
        }
    }

    // Cache keys are injective over namespace, page size, page number, and
    // TTLs (whitespace aside, which the namespace strategy excludes).
    #[test]
    fn prop_page_keys_unique(
        ns_a in namespace_strategy(),
        ns_b in namespace_strategy(),
        per_page_a in 1u64..100,
        per_page_b in 1u64..100,
        number_a in 1u64..1000,
        number_b in 1u64..1000,
        ttl_a in 1u64..100_000,
        ttl_b in 1u64..100_000,
    ) {
        let key_a = page_key(
            &ns_a,
            per_page_a,
            number_a,
            Duration::from_secs(ttl_a),
            Duration::from_secs(ttl_a),
        );
        let key_b = page_key(
            &ns_b,
            per_page_b,
            number_b,
            Duration::from_secs(ttl_b),
            Duration::from_secs(ttl_b),
        );

        let same_inputs = ns_a == ns_b
            && per_page_a == per_page_b
            && number_a == number_b
            && ttl_a == ttl_b;
        prop_assert_eq!(key_a == key_b, same_inputs);
    }
}
