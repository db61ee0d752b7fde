//! Session setup and initialization

use crate::catalog::{Catalog, CatalogClient};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::environment::Environment;
use crate::events::Event;
use crate::workers::{EventSender, FetchResponse, PageFetcher};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Where catalog requests go
    pub environment: Environment,
    /// Runs page requests in the background
    pub fetcher: PageFetcher,
    /// Event receiver for fetcher activity
    pub event_receiver: mpsc::Receiver<Event>,
    /// Receiver for finished page fetches
    pub response_receiver: mpsc::Receiver<FetchResponse>,
}

/// Wires a catalog into a fetcher and its channels.
pub fn session_with_catalog(catalog: Arc<dyn Catalog>) -> SessionData {
    let environment = catalog.environment().clone();
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (response_sender, response_receiver) = mpsc::channel::<FetchResponse>(EVENT_QUEUE_SIZE);
    let fetcher = PageFetcher::new(catalog, EventSender::new(event_sender), response_sender);

    SessionData {
        environment,
        fetcher,
        event_receiver,
        response_receiver,
    }
}

/// Sets up a session against the real catalog API
///
/// # Arguments
/// * `env` - Environment to connect to
/// * `request_timeout` - Connect and request timeout for catalog calls
pub fn setup_session(
    env: Environment,
    request_timeout: Duration,
) -> Result<SessionData, Box<dyn Error>> {
    let client = CatalogClient::new(env, request_timeout)?;
    Ok(session_with_catalog(Arc::new(client)))
}
