//! Art catalog client
//!
//! A JSON client for the artworks listing endpoint of the Art Institute of Chicago API.

use crate::catalog::Catalog;
use crate::catalog::error::CatalogError;
use crate::catalog::types::ArtworkPage;
use crate::consts::cli_consts::{ARTWORK_FIELDS, PAGE_SIZE};
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("artic-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    environment: Environment,
}

impl CatalogClient {
    pub fn new(environment: Environment, timeout: Duration) -> Result<Self, CatalogError> {
        let client = ClientBuilder::new()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        let target = format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        self.environment.request_url(&target)
    }

    fn artworks_endpoint(page: u32) -> String {
        format!(
            "artworks?page={}&limit={}&fields={}",
            page, PAGE_SIZE, ARTWORK_FIELDS
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CatalogError> {
        serde_json::from_slice(bytes).map_err(CatalogError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, CatalogError> {
        if !response.status().is_success() {
            return Err(CatalogError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, CatalogError> {
        let url = self.build_url(endpoint);
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl Catalog for CatalogClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_artworks_page(&self, page: u32) -> Result<ArtworkPage, CatalogError> {
        self.get_request(&Self::artworks_endpoint(page)).await
    }
}
