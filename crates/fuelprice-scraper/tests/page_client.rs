//! Integration tests for `PageClient::fetch_page`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no
//! real network traffic is made.

use wiremock::matchers::{header, method, path, query_param_is_missing};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use fuelprice_scraper::{PageClient, ScraperError};

/// Builds a `PageClient` suitable for tests: 5-second timeout, no retries.
fn test_client() -> PageClient {
    PageClient::new(5, "fuelprice-test/0.1", 0, 0).expect("failed to build test PageClient")
}

fn test_client_with_retries(max_retries: u32) -> PageClient {
    PageClient::new(5, "fuelprice-test/0.1", max_retries, 0)
        .expect("failed to build test PageClient")
}

const REGION_PAGE: &str = "<html><body><table><tr><td><img src=\"pb95.png\"></td>\
                           <td>6,55</td></tr></table></body></html>";

#[tokio::test]
async fn fetch_page_returns_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/opolskie-wojewodztwo"))
        .respond_with(ResponseTemplate::new(200).set_body_string(REGION_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client();
    let body = client
        .fetch_page(&format!("{}/opolskie-wojewodztwo", server.uri()))
        .await
        .expect("fetch should succeed");

    assert_eq!(body, REGION_PAGE);
}

#[tokio::test]
async fn fetch_page_sends_cache_busting_headers_and_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ceny-paliw/"))
        .and(header("cache-control", "no-cache"))
        .and(header("pragma", "no-cache"))
        .and(header("user-agent", "fuelprice-test/0.1"))
        .and(|req: &Request| {
            req.url
                .query_pairs()
                .any(|(k, v)| k == "_nocache" && v.parse::<i64>().is_ok())
        })
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    // Anything without the parameter falls through to this 500.
    Mock::given(method("GET"))
        .and(query_param_is_missing("_nocache"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client();
    let body = client
        .fetch_page(&format!("{}/ceny-paliw/", server.uri()))
        .await
        .expect("fetch should succeed");
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn fetch_page_returns_not_found_without_retrying() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client_with_retries(3);
    let url = format!("{}/brak-wojewodztwo", server.uri());
    let err = client.fetch_page(&url).await.unwrap_err();

    assert!(
        matches!(err, ScraperError::NotFound { url: ref u } if *u == url),
        "expected NotFound, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_page_retries_server_error_then_succeeds() {
    let server = MockServer::start().await;

    // First request answers 503; the mock is exhausted after one hit.
    Mock::given(method("GET"))
        .and(path("/slaskie-wojewodztwo"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/slaskie-wojewodztwo"))
        .respond_with(ResponseTemplate::new(200).set_body_string(REGION_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client_with_retries(2);
    let body = client
        .fetch_page(&format!("{}/slaskie-wojewodztwo", server.uri()))
        .await
        .expect("second attempt should succeed");
    assert_eq!(body, REGION_PAGE);
}

#[tokio::test]
async fn fetch_page_returns_last_status_after_exhausting_retries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .expect(3)
        .mount(&server)
        .await;

    let client = test_client_with_retries(2);
    let err = client
        .fetch_page(&format!("{}/lubuskie-wojewodztwo", server.uri()))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScraperError::UnexpectedStatus { status: 502, .. }),
        "expected UnexpectedStatus(502), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_page_rejects_relative_url() {
    let client = test_client();
    let err = client.fetch_page("lubuskie-wojewodztwo").await.unwrap_err();
    assert!(
        matches!(err, ScraperError::InvalidUrl { .. }),
        "expected InvalidUrl, got: {err:?}"
    );
}
