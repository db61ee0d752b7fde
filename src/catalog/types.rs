//! Wire types for the artworks listing endpoint.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Stable integer identity of a catalog record.
pub type ArtworkId = u64;

/// One catalog item. Every display attribute may be null on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

impl Display for Artwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let years = match (self.date_start, self.date_end) {
            (Some(start), Some(end)) if start == end => start.to_string(),
            (Some(start), Some(end)) => format!("{}-{}", start, end),
            (Some(year), None) | (None, Some(year)) => year.to_string(),
            (None, None) => "n.d.".to_string(),
        };
        write!(
            f,
            "#{} {} | {} | {} | {}",
            self.id,
            self.title_or_empty(),
            self.place_of_origin.as_deref().unwrap_or_default(),
            self.artist_display
                .as_deref()
                .unwrap_or_default()
                .replace('\n', " "),
            years
        )
    }
}

/// Pagination summary returned alongside each page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub total: u64,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub current_page: u32,
}

/// A decoded `GET /artworks` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkPage {
    pub pagination: PaginationInfo,
    pub data: Vec<Artwork>,
}
