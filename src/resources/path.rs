//! URL building for resource pools.
//!
//! Every pool endpoint is an absolute URL rooted at the client's base URL,
//! and child endpoints are always the parent endpoint joined with a path
//! segment. [`urljoin`] is the single place that join happens.

/// Joins path segments into a URL with a single `/` between segments.
///
/// Leading and trailing slash characters are stripped from each segment
/// before joining. Internal slashes are kept as-is, nothing is
/// percent-encoded, and segment content is not validated. Empty segments
/// pass through and produce an empty joined component.
///
/// # Example
///
/// ```rust
/// use faire_api::urljoin;
///
/// assert_eq!(urljoin(["a/", "/b/", "c"]), "a/b/c");
/// assert_eq!(
///     urljoin(["https://www.faire.com/external-api", "v2", "orders"]),
///     "https://www.faire.com/external-api/v2/orders"
/// );
/// ```
pub fn urljoin<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .map(|segment| segment.as_ref().trim_matches('/').to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urljoin_strips_leading_and_trailing_slashes() {
        assert_eq!(urljoin(["a/", "/b/", "c"]), "a/b/c");
        assert_eq!(urljoin(["/a/", "//b//", "/c/"]), "a/b/c");
    }

    #[test]
    fn test_urljoin_single_segment() {
        assert_eq!(urljoin(["orders"]), "orders");
        assert_eq!(urljoin(["/orders/"]), "orders");
    }

    #[test]
    fn test_urljoin_preserves_scheme_separator_inside_segment() {
        // Internal slashes are not normalized.
        assert_eq!(
            urljoin(["https://www.faire.com/external-api", "v2"]),
            "https://www.faire.com/external-api/v2"
        );
    }

    #[test]
    fn test_urljoin_empty_segment_passes_through() {
        assert_eq!(urljoin(["a", "", "b"]), "a//b");
    }

    #[test]
    fn test_urljoin_no_segments() {
        let segments: [&str; 0] = [];
        assert_eq!(urljoin(segments), "");
    }

    #[test]
    fn test_urljoin_accepts_owned_strings() {
        let segments = vec!["a".to_string(), "b".to_string()];
        assert_eq!(urljoin(segments), "a/b");
    }
}
