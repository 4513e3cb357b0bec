//! Cache Key Construction
//!
//! Deterministic, delimiter-joined keys derived from the caller-supplied
//! namespace, pagination geometry, and both TTLs. Including the TTLs in the
//! key means a paginator reconfigured with different timeouts never reads
//! stale entries written under the old configuration.

use std::time::Duration;

/// Fixed tag used in place of a page number for the total-count entry.
const COUNT_KEY_TAG: &str = "total_number";

// == Namespace Sanitizer ==
/// Replaces every whitespace character in the namespace with an underscore
/// so keys stay safe for text-protocol cache servers.
///
/// Known quirk: two namespaces that differ only in whitespace collapse to
/// the same key (`"user list"` and `"user\tlist"` collide). Callers that
/// need distinct result sets must pick namespaces that differ in more than
/// whitespace.
pub fn sanitize_namespace(namespace: &str) -> String {
    namespace.replace(char::is_whitespace, "_")
}

// == Page Key ==
/// Builds the cache key for one page of results.
///
/// `namespace` is expected to be already sanitized.
pub fn page_key(
    namespace: &str,
    per_page: u64,
    number: u64,
    page_ttl: Duration,
    count_ttl: Duration,
) -> String {
    format!(
        "{}:{}:{}:{}:{}",
        namespace,
        per_page,
        number,
        page_ttl.as_secs(),
        count_ttl.as_secs()
    )
}

// == Count Key ==
/// Builds the cache key for the total item count.
///
/// Independent of any page number, so the count survives page-cache churn
/// and can carry its own (typically longer) TTL.
pub fn count_key(namespace: &str, page_ttl: Duration, count_ttl: Duration) -> String {
    format!(
        "{}:{}:{}:{}",
        namespace,
        COUNT_KEY_TAG,
        page_ttl.as_secs(),
        count_ttl.as_secs()
    )
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_whitespace() {
        assert_eq!(sanitize_namespace("user list"), "user_list");
        assert_eq!(sanitize_namespace("user\tlist\n"), "user_list_");
        assert_eq!(sanitize_namespace("clean"), "clean");
    }

    #[test]
    fn test_whitespace_namespaces_collide() {
        // Documented collision policy: whitespace-only differences collapse
        assert_eq!(sanitize_namespace("a b"), sanitize_namespace("a\tb"));
    }

    #[test]
    fn test_page_key_contains_all_parts() {
        let key = page_key(
            "test_name",
            10,
            1,
            Duration::from_secs(666),
            Duration::from_secs(777),
        );
        assert_eq!(key, "test_name:10:1:666:777");
    }

    #[test]
    fn test_count_key_format() {
        let key = count_key("test_name", Duration::from_secs(60), Duration::from_secs(3600));
        assert_eq!(key, "test_name:total_number:60:3600");
    }

    #[test]
    fn test_page_and_count_keys_never_collide() {
        // The count tag is not a valid page number, so the two key shapes
        // stay disjoint for the same namespace and TTLs
        let pk = page_key("ns", 10, 2, Duration::from_secs(60), Duration::from_secs(60));
        let ck = count_key("ns", Duration::from_secs(60), Duration::from_secs(60));
        assert_ne!(pk, ck);
    }
}
