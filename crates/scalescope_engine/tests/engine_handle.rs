use std::sync::{mpsc, Arc};
use std::time::Duration;

use scalescope_core::StartupEntry;
use scalescope_engine::{
    ChannelEventSink, EngineEvent, EngineHandle, FailureKind, FetchError, FetchSettings,
    ListingSource,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct FixedListing(Vec<StartupEntry>);

#[async_trait::async_trait]
impl ListingSource for FixedListing {
    async fn fetch_listing(&self, _url: &str) -> Result<Vec<StartupEntry>, FetchError> {
        Ok(self.0.clone())
    }
}

#[test]
fn handle_reports_listing_through_sink() {
    let (tx, rx) = mpsc::channel();
    let listing = vec![StartupEntry::new("A", "Dev", 1)];
    let engine = EngineHandle::with_source(
        Arc::new(FixedListing(listing.clone())),
        Arc::new(ChannelEventSink::new(tx)),
    );

    engine.fetch_listing("memory://listing");

    let event = rx.recv_timeout(Duration::from_secs(5)).expect("event");
    assert_eq!(event, EngineEvent::ListingFetched { result: Ok(listing) });
}

#[test]
fn handle_reports_http_failure_from_real_fetcher() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/fetch-startups/"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;
        server
    });

    let (tx, rx) = mpsc::channel();
    let engine = EngineHandle::new(
        FetchSettings::default(),
        Arc::new(ChannelEventSink::new(tx)),
    );
    engine.fetch_listing(format!("{}/api/fetch-startups/", server.uri()));

    let event = rx.recv_timeout(Duration::from_secs(10)).expect("event");
    match event {
        EngineEvent::ListingFetched { result: Err(err) } => {
            assert_eq!(err.kind, FailureKind::HttpStatus(429));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
