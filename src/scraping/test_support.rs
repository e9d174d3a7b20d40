//! Local stand-in for the external lottery page.
//!
//! `/hot-numbers` serves a small well-formed page, `/broken` answers 500 and
//! `/redesigned` serves a page with none of the expected markup.

use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::ScraperConfig;

pub(crate) const SAMPLE_JACKPOT: &str = "R 42 Million";

pub(crate) const SAMPLE_PAGE: &str = r#"<html><body>
<div class="jackpot">Estimated <span class="jackpotAmount">R 42
    Million</span></div>
<div class="table">
  <div class="tableCell centred fluid"><div class="ball lotto ball">7</div><span>Drawn <strong>301</strong> times</span></div>
  <div class="tableCell centred fluid"><div class="ball lotto ball">12</div><span>Drawn <strong>288</strong> times</span></div>
  <div class="tableCell centred fluid"><div class="ball lotto ball">33</div><span>Drawn <strong>275</strong> times</span></div>
  <div class="tableCell centred fluid"><div class="ball lotto ball">x</div><span>Drawn <strong>12</strong> times</span></div>
  <div class="tableCell centred fluid"><div class="ball lotto ball">49</div><span>Drawn <strong>250</strong> times</span></div>
</div>
</body></html>"#;

/// Number of well-formed cells in [`SAMPLE_PAGE`]
pub(crate) const SAMPLE_ENTRIES: usize = 4;

pub(crate) struct PageServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl PageServer {
    /// Requests served on any route so far
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Scraper config pointed at `path` on this server
    pub fn scraper_config(&self, path: &str) -> ScraperConfig {
        ScraperConfig {
            url: format!("{}{}", self.base_url, path),
            timeout_seconds: 2,
            jackpot_timeout_seconds: 2,
            ..Default::default()
        }
    }
}

pub(crate) async fn spawn_page_server() -> PageServer {
    let hits = Arc::new(AtomicUsize::new(0));

    let page_hits = hits.clone();
    let broken_hits = hits.clone();
    let redesigned_hits = hits.clone();
    let app = Router::new()
        .route(
            "/hot-numbers",
            get(move || {
                page_hits.fetch_add(1, Ordering::SeqCst);
                async { Html(SAMPLE_PAGE) }
            }),
        )
        .route(
            "/broken",
            get(move || {
                broken_hits.fetch_add(1, Ordering::SeqCst);
                async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }
            }),
        )
        .route(
            "/redesigned",
            get(move || {
                redesigned_hits.fetch_add(1, Ordering::SeqCst);
                async { Html("<html><body><p>New look</p></body></html>") }
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test page server");
    let address = listener.local_addr().expect("local address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    PageServer {
        base_url: format!("http://{}", address),
        hits,
    }
}
