//! Cross-page row selection.
//!
//! The selection holds artwork ids for the whole catalog, not only for the page on
//! screen. The table only ever reports what is checked on the displayed page, so
//! every update is merged against that page's rows and leaves all other ids alone.

use crate::catalog::{Artwork, ArtworkId};
use crate::consts::cli_consts::INVALID_COUNT_MESSAGE;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The "select first N" input is not a positive integer.
    #[error("{}", INVALID_COUNT_MESSAGE)]
    InvalidCount(String),
}

/// Parses the "select first N" input. Accepts positive integers, including
/// integral decimals such as `3.0`; rejects empty input, zero, negatives and fractions.
pub fn parse_select_count(input: &str) -> Result<usize, SelectionError> {
    let trimmed = input.trim();
    let invalid = || SelectionError::InvalidCount(input.to_string());

    if let Ok(n) = trimmed.parse::<u64>() {
        return match n {
            0 => Err(invalid()),
            n => Ok(usize::try_from(n).unwrap_or(usize::MAX)),
        };
    }

    let value = trimmed.parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value.fract() != 0.0 || value <= 0.0 {
        return Err(invalid());
    }
    // Saturating float-to-int cast
    Ok(value as usize)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<ArtworkId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids of the displayed rows that are currently selected, in display order.
    pub fn checked_on(&self, displayed: &[Artwork]) -> Vec<ArtworkId> {
        displayed
            .iter()
            .map(|artwork| artwork.id)
            .filter(|id| self.ids.contains(id))
            .collect()
    }

    /// Merges a selection-change event from the displayed page.
    ///
    /// Displayed rows end up selected exactly when they are in `checked`; ids of rows
    /// on other pages are kept as they are.
    pub fn reconcile(&mut self, displayed: &[Artwork], checked: &[ArtworkId]) {
        for artwork in displayed {
            if !checked.contains(&artwork.id) {
                self.ids.remove(&artwork.id);
            }
        }
        self.ids.extend(checked.iter().copied());
    }

    /// Adds the first `min(n, displayed.len())` displayed rows. Never removes anything.
    ///
    /// Returns how many rows were covered.
    pub fn select_first(&mut self, displayed: &[Artwork], n: usize) -> usize {
        let limit = n.min(displayed.len());
        self.ids
            .extend(displayed.iter().take(limit).map(|artwork| artwork.id));
        limit
    }

    /// Validates `input` and applies [`SelectionSet::select_first`]. On error nothing changes.
    pub fn select_first_from_input(
        &mut self,
        displayed: &[Artwork],
        input: &str,
    ) -> Result<usize, SelectionError> {
        let n = parse_select_count(input)?;
        Ok(self.select_first(displayed, n))
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
