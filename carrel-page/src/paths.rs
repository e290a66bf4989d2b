//! Helpers for comparing link targets against the current page URL.

/// Path portion of a URL-ish string: everything before the first `?`.
#[must_use]
pub fn path_portion(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

/// Whether the current page URL points at `href`.
///
/// Query strings are stripped from both sides, then the current URL must
/// end with the link's path. Sidebar hrefs are site-absolute paths, so the
/// suffix match tolerates any scheme/host prefix on the document URL.
#[must_use]
pub fn is_current_page(current_url: &str, href: &str) -> bool {
    path_portion(current_url).ends_with(path_portion(href))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::{is_current_page, path_portion};

    #[test]
    fn strips_query_string() {
        assert_eq!(path_portion("/catalog/books/?page=2"), "/catalog/books/");
        assert_eq!(path_portion("/catalog/books/"), "/catalog/books/");
        assert_eq!(path_portion("?page=2"), "");
    }

    #[test]
    fn matches_on_path_suffix() {
        assert!(is_current_page(
            "http://localhost:8000/catalog/books/",
            "/catalog/books/"
        ));
        assert!(is_current_page(
            "http://localhost:8000/catalog/books/?page=2",
            "/catalog/books/?sort=title"
        ));
        assert!(!is_current_page(
            "http://localhost:8000/catalog/authors/",
            "/catalog/books/"
        ));
    }

    #[test]
    fn query_only_href_matches_nothing_extra() {
        // `?page=2` reduces to the empty path, which every URL ends with
        assert!(is_current_page("http://localhost:8000/catalog/", "?page=2"));
    }
}
