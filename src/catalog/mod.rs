use crate::catalog::error::CatalogError;
use crate::environment::Environment;

pub(crate) mod client;
pub use client::CatalogClient;
pub mod error;
pub mod types;

pub use types::{Artwork, ArtworkId, ArtworkPage};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetches one 1-based page of artworks together with the pagination summary.
    async fn get_artworks_page(&self, page: u32) -> Result<ArtworkPage, CatalogError>;
}
