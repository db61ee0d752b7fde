//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from fetch responses,
//! user actions and key presses

use super::state::{DashboardState, InputMode};

use crate::consts::cli_consts::FETCH_FAILED_MESSAGE;
use crate::events::{Event as WorkerEvent, EventType};
use crate::logging::LogLevel;
use crate::pagination::{PageControl, index_from_page, page_from_index};
use crate::workers::{FetchResponse, PageRequest};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the app loop has to do after a key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DashboardCommand {
    /// Start the given page request.
    Fetch(PageRequest),
    Quit,
}

impl DashboardState {
    /// Update the dashboard state with a new tick and queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }

    /// Issues the request for a 1-based page regardless of the loading flag.
    pub fn start_page(&mut self, page: u32) -> PageRequest {
        self.begin_request(index_from_page(page))
    }

    /// Page-change event from the paginator with a zero-based index.
    ///
    /// Ignored while a request is in flight.
    pub fn request_page_index(&mut self, index: usize) -> Option<PageRequest> {
        if self.loading {
            return None;
        }
        Some(self.begin_request(index))
    }

    /// Moves the paginator; `None` when the move is disabled or would not change page.
    ///
    /// While the requested page is not the one on screen (nothing loaded yet, or its
    /// fetch failed), a control that cannot move re-requests the current page instead.
    pub fn navigate(&mut self, control: PageControl) -> Option<PageRequest> {
        if self.loading {
            return None;
        }
        let target = match self.paginator.target_index(control) {
            Some(target) => target,
            None if self.displayed_page != Some(self.paginator.current_page()) => {
                self.paginator.page_index
            }
            None => return None,
        };
        self.request_page_index(target)
    }

    fn begin_request(&mut self, index: usize) -> PageRequest {
        let request = PageRequest {
            id: self.next_request_id(),
            page: page_from_index(index),
        };
        self.paginator.page_index = index;
        self.loading = true;
        self.error = None;
        self.set_in_flight(Some(request));
        request
    }

    /// Applies a finished fetch. Returns false when the response was stale and dropped.
    ///
    /// Success replaces the rows and total count; failure keeps both and raises the
    /// banner. The selection is never touched here.
    pub fn apply_fetch_response(&mut self, response: FetchResponse) -> bool {
        if self.in_flight() != Some(response.request) {
            self.add_event(WorkerEvent::fetcher_with_level(
                format!(
                    "Discarded stale response for page {} (request {})",
                    response.request.page, response.request.id
                ),
                EventType::Stale,
                LogLevel::Debug,
            ));
            return false;
        }

        self.set_in_flight(None);
        self.loading = false;
        match response.result {
            Ok(page) => {
                self.artworks = page.data;
                self.paginator.total_records = page.pagination.total;
                self.displayed_page = Some(response.request.page);
                self.cursor = self.cursor.min(self.artworks.len().saturating_sub(1));
            }
            Err(_) => {
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    /// Ids checked on the displayed page after flipping the row under the cursor.
    fn checked_after_toggle(&self) -> Option<Vec<u64>> {
        let target = self.cursor_artwork()?.id;
        let mut checked = self.selection.checked_on(&self.artworks);
        match checked.iter().position(|id| *id == target) {
            Some(pos) => {
                checked.remove(pos);
            }
            None => checked.push(target),
        }
        Some(checked)
    }

    /// Checkbox click on the row under the cursor.
    pub fn toggle_cursor_row(&mut self) {
        if let Some(checked) = self.checked_after_toggle() {
            self.selection.reconcile(&self.artworks, &checked);
        }
    }

    /// Header checkbox: check every displayed row, or uncheck them all if they already are.
    pub fn toggle_page(&mut self) {
        let all_checked = !self.artworks.is_empty()
            && self.artworks.iter().all(|a| self.selection.contains(a.id));
        let checked: Vec<u64> = if all_checked {
            Vec::new()
        } else {
            self.artworks.iter().map(|a| a.id).collect()
        };
        self.selection.reconcile(&self.artworks, &checked);
    }

    /// Applies the "select first N" field to the displayed page.
    pub fn apply_select_count(&mut self) {
        match self
            .selection
            .select_first_from_input(&self.artworks, &self.select_count_input)
        {
            Ok(count) => {
                self.add_event(WorkerEvent::dashboard(
                    format!(
                        "Selected first {} rows ({} selected in total)",
                        count,
                        self.selection.len()
                    ),
                    EventType::Success,
                ));
            }
            Err(e) => self.alert = Some(e.to_string()),
        }
    }

    /// Empties the selection. The page window and fetch state stay as they are.
    pub fn clear_selection(&mut self) {
        let cleared = self.selection.len();
        self.selection.clear();
        self.add_event(WorkerEvent::dashboard(
            format!("Cleared {} selected rows", cleared),
            EventType::Success,
        ));
    }

    pub fn move_cursor(&mut self, down: bool) {
        if self.artworks.is_empty() {
            self.cursor = 0;
        } else if down {
            self.cursor = (self.cursor + 1).min(self.artworks.len() - 1);
        } else {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    /// Routes a key press to the alert, the count field or the table.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DashboardCommand> {
        if self.alert.is_some() {
            self.alert = None;
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(DashboardCommand::Quit);
        }

        match self.input_mode {
            InputMode::EditingCount => {
                match key.code {
                    KeyCode::Enter => self.apply_select_count(),
                    KeyCode::Esc | KeyCode::Tab => self.input_mode = InputMode::Table,
                    KeyCode::Backspace => {
                        self.select_count_input.pop();
                    }
                    KeyCode::Char(c) if !c.is_control() => self.select_count_input.push(c),
                    _ => {}
                }
                None
            }
            InputMode::Table => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(DashboardCommand::Quit),
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_cursor(false);
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_cursor(true);
                    None
                }
                KeyCode::Char(' ') => {
                    self.toggle_cursor_row();
                    None
                }
                KeyCode::Char('a') => {
                    self.toggle_page();
                    None
                }
                KeyCode::Char('n') | KeyCode::Tab => {
                    self.input_mode = InputMode::EditingCount;
                    None
                }
                KeyCode::Enter => {
                    self.apply_select_count();
                    None
                }
                KeyCode::Char('c') => {
                    self.clear_selection();
                    None
                }
                KeyCode::Left | KeyCode::Char('h') => self
                    .navigate(PageControl::Previous)
                    .map(DashboardCommand::Fetch),
                KeyCode::Right | KeyCode::Char('l') => {
                    self.navigate(PageControl::Next).map(DashboardCommand::Fetch)
                }
                KeyCode::Home => self.navigate(PageControl::First).map(DashboardCommand::Fetch),
                KeyCode::End => self.navigate(PageControl::Last).map(DashboardCommand::Fetch),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::error::CatalogError;
    use crate::catalog::types::PaginationInfo;
    use crate::catalog::{ArtworkId, ArtworkPage};
    use crate::consts::cli_consts::INVALID_COUNT_MESSAGE;
    use crate::environment::Environment;
    use crate::selection::tests::artworks;
    use crate::ui::app::UIConfig;
    use crate::workers::fetcher::FetchError;

    fn new_state() -> DashboardState {
        DashboardState::new(Environment::Direct, UIConfig::new(false))
    }

    fn ok(request: PageRequest, ids: Vec<ArtworkId>, total: u64) -> FetchResponse {
        FetchResponse {
            request,
            result: Ok(ArtworkPage {
                pagination: PaginationInfo {
                    total,
                    limit: 12,
                    ..PaginationInfo::default()
                },
                data: artworks(ids),
            }),
        }
    }

    fn failed(request: PageRequest) -> FetchResponse {
        FetchResponse {
            request,
            result: Err(FetchError::Catalog(CatalogError::Http {
                status: 500,
                message: "boom".to_string(),
            })),
        }
    }

    /// Ids a catalog with sequential ids would return for a page.
    fn page_ids(page: u32) -> Vec<ArtworkId> {
        let start = (page as u64 - 1) * 12 + 1;
        (start..start + 12).collect()
    }

    /// Navigates to a zero-based index and completes the fetch successfully.
    fn visit(state: &mut DashboardState, index: usize, total: u64) {
        let request = state.request_page_index(index).expect("not loading");
        assert!(state.apply_fetch_response(ok(request, page_ids(request.page), total)));
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn checked_ids(state: &DashboardState) -> Vec<ArtworkId> {
        state.selection.checked_on(&state.artworks)
    }

    #[test]
    fn test_zero_based_index_requests_one_based_page() {
        let mut state = new_state();
        let request = state.request_page_index(4).unwrap();
        assert_eq!(request.page, 5);
        assert!(state.loading);
        assert_eq!(state.paginator.current_page(), 5);
    }

    #[test]
    fn test_successful_fetch_replaces_rows_and_total() {
        let mut state = new_state();
        let request = state.start_page(5);
        assert!(state.apply_fetch_response(ok(request, page_ids(5), 5000)));

        assert!(!state.loading);
        assert_eq!(state.paginator.total_records, 5000);
        assert_eq!(state.displayed_page, Some(5));
        assert_eq!(state.artworks.first().map(|a| a.id), Some(49));
        assert_eq!(state.artworks.last().map(|a| a.id), Some(60));
    }

    #[test]
    fn test_selection_survives_navigation() {
        let mut state = new_state();
        let request = state.start_page(5);
        let mut ids = page_ids(5);
        ids[0] = 101;
        ids[1] = 102;
        state.apply_fetch_response(ok(request, ids.clone(), 5000));

        state.toggle_cursor_row();
        state.move_cursor(true);
        state.toggle_cursor_row();
        assert_eq!(checked_ids(&state), vec![101, 102]);

        visit(&mut state, 0, 5000);
        assert!(checked_ids(&state).is_empty());
        assert_eq!(state.selection.len(), 2);

        let request = state.request_page_index(4).unwrap();
        state.apply_fetch_response(ok(request, ids, 5000));
        assert_eq!(checked_ids(&state), vec![101, 102]);
    }

    #[test]
    fn test_select_all_on_page_a_is_restored_after_visiting_b() {
        let mut state = new_state();
        let request = state.start_page(1);
        state.apply_fetch_response(ok(request, page_ids(1), 120));

        state.toggle_page();
        assert_eq!(checked_ids(&state), page_ids(1));

        visit(&mut state, 1, 120);
        state.toggle_cursor_row();
        visit(&mut state, 0, 120);

        assert_eq!(checked_ids(&state), page_ids(1));
        assert_eq!(state.selection.len(), 13);
    }

    #[test]
    fn test_toggle_page_twice_unchecks_only_this_page() {
        let mut state = new_state();
        let request = state.start_page(1);
        state.apply_fetch_response(ok(request, page_ids(1), 120));
        state.toggle_page();
        visit(&mut state, 1, 120);
        state.toggle_page();
        state.toggle_page();
        assert!(checked_ids(&state).is_empty());
        assert_eq!(state.selection.len(), 12);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_rows() {
        let mut state = new_state();
        let request = state.start_page(1);
        state.apply_fetch_response(ok(request, page_ids(1), 5000));

        let request = state.request_page_index(1).unwrap();
        assert!(state.apply_fetch_response(failed(request)));

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(state.artworks.len(), 12);
        assert_eq!(state.artworks[0].id, 1);
        assert_eq!(state.paginator.total_records, 5000);
        assert_eq!(state.displayed_page, Some(1));
    }

    #[test]
    fn test_next_fetch_clears_error() {
        let mut state = new_state();
        let request = state.start_page(1);
        state.apply_fetch_response(failed(request));
        assert!(state.error.is_some());

        state.start_page(1);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_navigation_disabled_while_loading() {
        let mut state = new_state();
        let request = state.start_page(1);
        state.apply_fetch_response(ok(request, page_ids(1), 5000));

        let first = state.navigate(PageControl::Next).unwrap();
        assert_eq!(first.page, 2);
        assert_eq!(state.navigate(PageControl::Next), None);
        assert_eq!(state.request_page_index(7), None);
        assert_eq!(state.handle_key(key(KeyCode::Right)), None);
        assert_eq!(state.in_flight(), Some(first));
    }

    #[test]
    fn test_every_control_retries_after_first_fetch_fails() {
        for control in [
            PageControl::First,
            PageControl::Previous,
            PageControl::Next,
            PageControl::Last,
        ] {
            let mut state = new_state();
            let request = state.start_page(1);
            state.apply_fetch_response(failed(request));
            assert_eq!(state.paginator.page_count(), 0);

            let retry = state.navigate(control).expect("control should retry");
            assert_eq!(retry.page, 1);
            assert!(retry.id > request.id);
            assert!(state.loading);
            assert!(state.error.is_none());

            assert!(state.apply_fetch_response(ok(retry, page_ids(1), 5000)));
            assert_eq!(state.displayed_page, Some(1));
        }
    }

    #[test]
    fn test_failed_start_page_can_be_retried_with_keys() {
        let mut state = new_state();
        let request = state.start_page(7);
        state.apply_fetch_response(failed(request));

        // The total is still unknown, so Home re-requests page 7.
        match state.handle_key(key(KeyCode::Home)) {
            Some(DashboardCommand::Fetch(retry)) => assert_eq!(retry.page, 7),
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_page_change_retried_in_place() {
        let mut state = new_state();
        let request = state.start_page(1);
        state.apply_fetch_response(ok(request, page_ids(1), 24));

        let request = state.navigate(PageControl::Last).unwrap();
        assert_eq!(request.page, 2);
        state.apply_fetch_response(failed(request));
        assert_eq!(state.displayed_page, Some(1));

        // Next and Last cannot move past page 2, so they retry it.
        let retry = state.navigate(PageControl::Next).unwrap();
        assert_eq!(retry.page, 2);
        state.apply_fetch_response(ok(retry, page_ids(2), 24));

        // Once page 2 is on screen the same control is a no-op again.
        assert_eq!(state.navigate(PageControl::Next), None);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = new_state();
        let stale = state.start_page(1);
        let current = state.start_page(3);

        assert!(!state.apply_fetch_response(ok(stale, page_ids(1), 5000)));
        assert!(state.loading);
        assert!(state.artworks.is_empty());

        assert!(state.apply_fetch_response(ok(current, page_ids(3), 5000)));
        assert_eq!(state.artworks[0].id, 25);

        // A duplicate of an already applied response is stale too.
        assert!(!state.apply_fetch_response(ok(current, page_ids(1), 1)));
        assert_eq!(state.paginator.total_records, 5000);
    }

    #[test]
    fn test_select_first_n_larger_than_page() {
        let mut state = new_state();
        let request = state.start_page(2);
        state.apply_fetch_response(ok(request, page_ids(2), 5000));

        state.select_count_input = "40".to_string();
        state.apply_select_count();
        assert_eq!(checked_ids(&state), page_ids(2));
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_invalid_select_count_raises_alert_only() {
        let mut state = new_state();
        let request = state.start_page(1);
        state.apply_fetch_response(ok(request, page_ids(1), 5000));
        state.toggle_cursor_row();

        for input in ["0", "2.5", ""] {
            state.select_count_input = input.to_string();
            state.apply_select_count();
            assert_eq!(state.alert.as_deref(), Some(INVALID_COUNT_MESSAGE));
            assert!(state.error.is_none());
            assert_eq!(state.selection.len(), 1);
            // Any key dismisses the alert without doing anything else.
            assert_eq!(state.handle_key(key(KeyCode::Char('q'))), None);
            assert!(state.alert.is_none());
        }
    }

    #[test]
    fn test_clear_then_fetch() {
        let mut state = new_state();
        let request = state.start_page(1);
        state.apply_fetch_response(ok(request, page_ids(1), 5000));
        state.toggle_page();

        state.clear_selection();
        assert!(state.selection.is_empty());
        assert!(!state.loading);
        assert_eq!(state.displayed_page, Some(1));

        visit(&mut state, 3, 5000);
        assert!(state.selection.is_empty());
        assert_eq!(state.artworks.len(), 12);
        assert_eq!(state.artworks[0].id, 37);
    }

    #[test]
    fn test_count_field_editing_via_keys() {
        let mut state = new_state();
        let request = state.start_page(1);
        state.apply_fetch_response(ok(request, page_ids(1), 5000));

        state.handle_key(key(KeyCode::Char('n')));
        assert_eq!(state.input_mode, InputMode::EditingCount);
        for c in ['3', '0', 'x'] {
            state.handle_key(key(KeyCode::Char(c)));
        }
        state.handle_key(key(KeyCode::Backspace));
        state.handle_key(key(KeyCode::Backspace));
        assert_eq!(state.select_count_input, "3");

        // 'q' is text while editing, not quit.
        state.handle_key(key(KeyCode::Char('q')));
        state.handle_key(key(KeyCode::Backspace));
        state.handle_key(key(KeyCode::Enter));
        assert_eq!(checked_ids(&state), vec![1, 2, 3]);

        state.handle_key(key(KeyCode::Esc));
        assert_eq!(state.input_mode, InputMode::Table);
        assert_eq!(
            state.handle_key(key(KeyCode::Char('q'))),
            Some(DashboardCommand::Quit)
        );
    }

    #[test]
    fn test_arrow_keys_issue_fetch_commands() {
        let mut state = new_state();
        let request = state.start_page(1);
        state.apply_fetch_response(ok(request, page_ids(1), 30));

        assert_eq!(state.handle_key(key(KeyCode::Left)), None);
        match state.handle_key(key(KeyCode::End)) {
            Some(DashboardCommand::Fetch(request)) => assert_eq!(request.page, 3),
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_update_moves_events_to_activity_log() {
        let mut state = new_state();
        state.clear_selection();
        assert_eq!(state.pending_events.len(), 1);
        state.update();
        assert!(state.pending_events.is_empty());
        assert_eq!(state.activity_logs.len(), 1);
        assert_eq!(state.tick, 1);
    }
}
