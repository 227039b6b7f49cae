use std::time::Duration;

use pretty_assertions::assert_eq;
use scalescope_core::{ErrorState, StartupEntry};
use scalescope_engine::{FailureKind, FetchSettings, ListingSource, ReqwestFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING: &str = r#"[
  {"name":"Acme","category":"Dev","votes":10,"tagline":"Build faster","logo_url":"https://img/acme.png","product_url":"https://acme.dev"},
  {"name":"Zeta","category":"AI","votes":4,"tagline":"Think","logo_url":"","product_url":"https://zeta.ai"}
]"#;

async fn serve(route: &str, response: ResponseTemplate) -> (MockServer, String) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(&server)
        .await;
    let url = format!("{}{}", server.uri(), route);
    (server, url)
}

#[tokio::test]
async fn fetcher_decodes_listing_array() {
    let (_server, url) = serve(
        "/api/fetch-startups/",
        ResponseTemplate::new(200).set_body_raw(LISTING, "application/json"),
    )
    .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let entries = fetcher.fetch_listing(&url).await.expect("fetch ok");

    assert_eq!(
        entries[0],
        StartupEntry::new("Acme", "Dev", 10)
            .with_tagline("Build faster")
            .with_product_url("https://acme.dev")
            .with_logo_url("https://img/acme.png")
    );
    assert_eq!(entries[1].name, "Zeta");
    assert_eq!(entries.len(), 2);
}

#[tokio::test]
async fn rate_limit_is_reported_as_http_429() {
    let (_server, url) = serve("/api/fetch-startups/", ResponseTemplate::new(429)).await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher.fetch_listing(&url).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(429));
    assert_eq!(ErrorState::classify(err.http_status()), ErrorState::RateLimited);
}

#[tokio::test]
async fn server_error_classifies_as_fetch_failed() {
    let (_server, url) = serve("/api/fetch-startups/", ResponseTemplate::new(500)).await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher.fetch_listing(&url).await.unwrap_err();

    assert_eq!(err.http_status(), Some(500));
    assert_eq!(ErrorState::classify(err.http_status()), ErrorState::FetchFailed);
}

#[tokio::test]
async fn non_array_body_is_a_decode_failure() {
    let (_server, url) = serve(
        "/api/fetch-startups/",
        ResponseTemplate::new(200).set_body_raw(r#"{"detail":"oops"}"#, "application/json"),
    )
    .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher.fetch_listing(&url).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Decode);
    assert_eq!(err.http_status(), None);
}

#[tokio::test]
async fn slow_response_times_out() {
    let (_server, url) = serve(
        "/slow",
        ResponseTemplate::new(200)
            .set_delay(Duration::from_millis(250))
            .set_body_raw("[]", "application/json"),
    )
    .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let err = ReqwestFetcher::new(settings)
        .fetch_listing(&url)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_listing_is_rejected() {
    let (_server, url) = serve(
        "/large",
        ResponseTemplate::new(200).set_body_raw(LISTING, "application/json"),
    )
    .await;

    let settings = FetchSettings {
        max_bytes: 16,
        ..FetchSettings::default()
    };
    let err = ReqwestFetcher::new(settings)
        .fetch_listing(&url)
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 16, .. }
    ));
}

#[tokio::test]
async fn malformed_url_is_rejected_before_any_request() {
    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher.fetch_listing("not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
