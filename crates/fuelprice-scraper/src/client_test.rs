use super::*;

#[test]
fn nocache_url_appends_timestamp() {
    let url = nocache_url("https://www.reflex.com.pl/opolskie-wojewodztwo", 1_741_046_400).unwrap();
    assert_eq!(
        url.as_str(),
        "https://www.reflex.com.pl/opolskie-wojewodztwo?_nocache=1741046400"
    );
}

#[test]
fn nocache_url_keeps_existing_query() {
    let url = nocache_url("https://example.com/ceny?typ=miasta", 5).unwrap();
    assert_eq!(url.as_str(), "https://example.com/ceny?typ=miasta&_nocache=5");
}

#[test]
fn nocache_url_keeps_trailing_slash() {
    let url = nocache_url("https://www.wnp.pl/rynki/gielda-i-notowania/ceny-paliw/", 1).unwrap();
    assert_eq!(url.path(), "/rynki/gielda-i-notowania/ceny-paliw/");
    assert_eq!(url.query(), Some("_nocache=1"));
}

#[test]
fn nocache_url_rejects_relative_url() {
    let err = nocache_url("opolskie-wojewodztwo", 1).unwrap_err();
    assert!(
        matches!(err, ScraperError::InvalidUrl { ref url, .. } if url == "opolskie-wojewodztwo"),
        "expected InvalidUrl, got: {err:?}"
    );
}

#[test]
fn new_builds_client() {
    assert!(PageClient::new(5, "fuelprice-test/0.1", 0, 0).is_ok());
}
