//! Headless mode execution

use super::{
    SessionData,
    messages::{SessionMessage, print_session_starting},
};
use crate::consts::cli_consts::{FETCH_FAILED_MESSAGE, PAGE_SIZE};
use crate::pagination::{Paginator, index_from_page};
use crate::selection::{SelectionSet, parse_select_count};
use crate::workers::PageRequest;
use std::error::Error;

/// Runs the application in headless mode
///
/// Fetches a single page, prints the fetcher activity followed by the paginator
/// summary and one line per row. When `select_first` is given, the first N rows
/// are marked as selected. An invalid N is reported before anything is fetched.
///
/// # Arguments
/// * `session` - Session data from setup
/// * `page` - 1-based page to list
/// * `select_first` - Raw "select first N" input, validated like the dashboard field
pub async fn run_headless_mode(
    mut session: SessionData,
    page: u32,
    select_first: Option<String>,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);

    // Validate before any request goes out
    let select_count = match select_first.as_deref().map(parse_select_count).transpose() {
        Ok(count) => count,
        Err(e) => {
            SessionMessage::error(e.to_string()).print();
            return Err(Box::new(e));
        }
    };

    let response = session
        .fetcher
        .fetch_page(PageRequest { id: 1, page })
        .await;

    // Flush fetcher activity before printing the page
    while let Ok(event) = session.event_receiver.try_recv() {
        if event.should_display() {
            println!("{}", event);
        }
    }

    let artwork_page = match response.result {
        Ok(artwork_page) => artwork_page,
        Err(e) => {
            SessionMessage::error(FETCH_FAILED_MESSAGE).print();
            return Err(Box::new(e));
        }
    };

    let mut selection = SelectionSet::new();
    if let Some(count) = select_count {
        selection.select_first(&artwork_page.data, count);
    }

    let paginator = Paginator {
        page_size: PAGE_SIZE,
        total_records: artwork_page.pagination.total,
        page_index: index_from_page(page),
    };
    println!("{}", paginator.summary());

    if artwork_page.data.is_empty() {
        println!("No artworks found.");
    }
    for artwork in &artwork_page.data {
        let mark = if selection.contains(artwork.id) { "[x]" } else { "[ ]" };
        println!("{} {}", mark, artwork);
    }

    if !selection.is_empty() {
        SessionMessage::success(format!("{} rows selected", selection.len())).print();
    }

    Ok(())
}
