//! Page numbering for the artworks table.
//!
//! The table's page control works with zero-based page indices while the catalog
//! API numbers pages from 1. Everything that crosses that boundary goes through
//! [`page_from_index`] and [`index_from_page`].

use std::ops::RangeInclusive;

/// Navigation requests emitted by the paginator bar.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PageControl {
    First,
    Previous,
    Next,
    Last,
}

/// Converts a zero-based paginator index into a 1-based API page number.
pub fn page_from_index(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_add(1))
}

/// Converts a 1-based API page number into a zero-based paginator index.
pub fn index_from_page(page: u32) -> usize {
    page.saturating_sub(1) as usize
}

/// Number of pages needed for `total_records` rows.
pub fn total_pages(total_records: u64, page_size: usize) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_records.div_ceil(page_size as u64)
}

/// 1-based positions of the records a page covers, e.g. page 5 of 12 covers 49..=60.
pub fn record_range(page: u32, page_size: usize) -> RangeInclusive<u64> {
    let size = page_size as u64;
    let first = u64::from(page.max(1) - 1) * size + 1;
    first..=first + size.saturating_sub(1)
}

/// Paginator bar state: which page is shown and how many exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    pub page_size: usize,
    pub total_records: u64,
    /// Zero-based index of the requested page.
    pub page_index: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            total_records: 0,
            page_index: 0,
        }
    }

    pub fn page_count(&self) -> u64 {
        total_pages(self.total_records, self.page_size)
    }

    /// 1-based page number matching `page_index`.
    pub fn current_page(&self) -> u32 {
        page_from_index(self.page_index)
    }

    /// Index the control would move to, or `None` when it would not change page.
    pub fn target_index(&self, control: PageControl) -> Option<usize> {
        let count = self.page_count();
        if count == 0 {
            return None;
        }
        let last = usize::try_from(count - 1).unwrap_or(usize::MAX);
        let target = match control {
            PageControl::First => 0,
            PageControl::Previous => self.page_index.checked_sub(1)?,
            PageControl::Next => self.page_index.checked_add(1).filter(|i| *i <= last)?,
            PageControl::Last => last,
        };
        (target != self.page_index).then_some(target)
    }

    /// Text for the paginator bar, e.g. `Page 5 of 417 (records 49-60 of 5000)`.
    pub fn summary(&self) -> String {
        let count = self.page_count();
        if count == 0 {
            return "Page 0 of 0".to_string();
        }
        let range = record_range(self.current_page(), self.page_size);
        let last = (*range.end()).min(self.total_records);
        format!(
            "Page {} of {} (records {}-{} of {})",
            self.current_page(),
            count,
            range.start(),
            last,
            self.total_records
        )
    }
}
