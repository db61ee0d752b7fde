//! Page fetching
//!
//! Every page change issues exactly one request. Requests are tagged with an id and
//! the page they were issued for so the UI loop can drop responses it no longer wants.

use super::core::EventSender;
use crate::catalog::error::CatalogError;
use crate::catalog::{ArtworkPage, Catalog};
use crate::consts::cli_consts::PAGE_SIZE;
use crate::error_classifier::ErrorClassifier;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::pagination::record_range;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Catalog(#[from] CatalogError),
}

/// One page fetch, identified by a per-session sequence number.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub id: u64,
    /// 1-based page number.
    pub page: u32,
}

#[derive(Debug)]
pub struct FetchResponse {
    pub request: PageRequest,
    pub result: Result<ArtworkPage, FetchError>,
}

/// Runs page requests against the catalog and reports back over a channel.
#[derive(Clone)]
pub struct PageFetcher {
    catalog: Arc<dyn Catalog>,
    event_sender: EventSender,
    response_sender: mpsc::Sender<FetchResponse>,
    classifier: ErrorClassifier,
}

impl PageFetcher {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        event_sender: EventSender,
        response_sender: mpsc::Sender<FetchResponse>,
    ) -> Self {
        Self {
            catalog,
            event_sender,
            response_sender,
            classifier: ErrorClassifier::new(),
        }
    }

    /// Fetch a single page and log the outcome.
    pub async fn fetch_page(&self, request: PageRequest) -> FetchResponse {
        let range = record_range(request.page, PAGE_SIZE);
        self.event_sender
            .send_fetch_event(
                format!(
                    "Fetching page {} (records {}-{})...",
                    request.page,
                    range.start(),
                    range.end()
                ),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        let result = match self.catalog.get_artworks_page(request.page).await {
            Ok(page) => {
                self.event_sender
                    .send_fetch_event(
                        format!(
                            "Loaded {} artworks for page {} ({} total)",
                            page.data.len(),
                            request.page,
                            page.pagination.total
                        ),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                Ok(page)
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                self.event_sender
                    .send_fetch_event(
                        format!("Failed to fetch page {}: {}", request.page, e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
                Err(FetchError::Catalog(e))
            }
        };

        FetchResponse { request, result }
    }

    /// Runs [`PageFetcher::fetch_page`] in the background and forwards the response.
    pub fn spawn(&self, request: PageRequest) -> JoinHandle<()> {
        let fetcher = self.clone();
        tokio::spawn(async move {
            let response = fetcher.fetch_page(request).await;
            let _ = fetcher.response_sender.send(response).await;
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalog;
    use crate::catalog::types::PaginationInfo;
    use crate::events::Event;
    use crate::selection::tests::artworks;
    use mockall::predicate::eq;

    fn page_of(ids: std::ops::RangeInclusive<u64>, total: u64) -> ArtworkPage {
        ArtworkPage {
            pagination: PaginationInfo {
                total,
                limit: PAGE_SIZE as u32,
                ..PaginationInfo::default()
            },
            data: artworks(ids),
        }
    }

    fn fetcher_with(
        catalog: MockCatalog,
    ) -> (
        PageFetcher,
        mpsc::Receiver<Event>,
        mpsc::Receiver<FetchResponse>,
    ) {
        let (event_tx, event_rx) = mpsc::channel(16);
        let (response_tx, response_rx) = mpsc::channel(4);
        let fetcher = PageFetcher::new(Arc::new(catalog), EventSender::new(event_tx), response_tx);
        (fetcher, event_rx, response_rx)
    }

    #[tokio::test]
    async fn test_spawned_fetch_reports_page_for_request() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_artworks_page()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(page_of(49..=60, 5000)));

        let (fetcher, mut events, mut responses) = fetcher_with(catalog);
        let request = PageRequest { id: 3, page: 5 };
        fetcher.spawn(request).await.unwrap();

        let response = responses.recv().await.unwrap();
        assert_eq!(response.request, request);
        let page = response.result.unwrap();
        assert_eq!(page.pagination.total, 5000);
        assert_eq!(page.data.first().map(|a| a.id), Some(49));

        let first = events.recv().await.unwrap();
        assert_eq!(first.event_type, EventType::Refresh);
        assert!(first.msg.contains("records 49-60"));
        let second = events.recv().await.unwrap();
        assert_eq!(second.event_type, EventType::Success);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_logged_with_classified_level() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_artworks_page()
            .times(1)
            .returning(|_| {
                Err(CatalogError::Http {
                    status: 503,
                    message: "unavailable".to_string(),
                })
            });

        let (fetcher, mut events, _responses) = fetcher_with(catalog);
        let response = fetcher.fetch_page(PageRequest { id: 1, page: 2 }).await;
        assert!(matches!(
            response.result,
            Err(FetchError::Catalog(CatalogError::Http { status: 503, .. }))
        ));

        let _refresh = events.recv().await.unwrap();
        let error = events.recv().await.unwrap();
        assert_eq!(error.event_type, EventType::Error);
        assert_eq!(error.log_level, LogLevel::Warn);
        assert!(error.msg.contains("page 2"));
    }
}
