//! Query string helpers for NetBox API requests

/// Build query string from filters
pub fn build_query_string(filters: &[(String, String)]) -> String {
    filters
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Append encoded filters to a URL that may already carry a query string
pub fn append_query(url: &str, filters: &[(String, String)]) -> String {
    if filters.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, build_query_string(filters))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn test_build_query_string_encodes_values() {
        let query = build_query_string(&pairs(&[("site", "dc 1"), ("tag", "a&b")]));
        assert_eq!(query, "site=dc%201&tag=a%26b");
    }

    #[test]
    fn test_append_query_without_filters_is_identity() {
        assert_eq!(append_query("/api/dcim/devices/", &[]), "/api/dcim/devices/");
    }

    #[test]
    fn test_append_query_respects_existing_query() {
        let filters = pairs(&[("status", "active")]);
        assert_eq!(
            append_query("/api/dcim/devices/", &filters),
            "/api/dcim/devices/?status=active"
        );
        assert_eq!(
            append_query("/api/dcim/devices/?limit=50", &filters),
            "/api/dcim/devices/?limit=50&status=active"
        );
    }

    #[test]
    fn test_repeated_keys_are_kept() {
        let query = build_query_string(&pairs(&[("role", "leaf"), ("role", "spine")]));
        assert_eq!(query, "role=leaf&role=spine");
    }
}
