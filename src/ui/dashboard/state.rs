//! Dashboard state management
//!
//! Contains the dashboard state struct: the page window, the cross-page selection
//! and the bookkeeping for the single in-flight page request.

use crate::catalog::Artwork;
use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, PAGE_SIZE};
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::pagination::Paginator;
use crate::selection::SelectionSet;
use crate::ui::app::UIConfig;
use crate::workers::PageRequest;

use std::collections::VecDeque;

/// Where key presses go.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Keys drive the table and the paginator.
    Table,
    /// Keys edit the "select first N" field.
    EditingCount,
}

#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// Whether to enable background colors
    pub with_background_color: bool,

    /// Requested page and total count for the paginator bar.
    pub paginator: Paginator,
    /// Rows of the last successfully fetched page.
    pub artworks: Vec<Artwork>,
    /// 1-based page the displayed rows belong to.
    pub displayed_page: Option<u32>,
    /// Selected artwork ids across all pages.
    pub selection: SelectionSet,
    /// True while a page request is in flight; paginator keys are ignored meanwhile.
    pub loading: bool,
    /// Banner shown after a failed fetch.
    pub error: Option<String>,

    /// Raw text of the "select first N" field.
    pub select_count_input: String,
    pub input_mode: InputMode,
    /// Blocking validation message; any key dismisses it.
    pub alert: Option<String>,
    /// Row under the cursor, an index into `artworks`.
    pub cursor: usize,

    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Animation tick counter
    pub tick: usize,

    /// The only request whose response may update the page window.
    in_flight: Option<PageRequest>,
    next_request_id: u64,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, ui_config: UIConfig) -> Self {
        Self {
            environment,
            with_background_color: ui_config.with_background_color,

            paginator: Paginator::new(PAGE_SIZE),
            artworks: Vec::new(),
            displayed_page: None,
            selection: SelectionSet::new(),
            loading: false,
            error: None,

            select_count_input: String::new(),
            input_mode: InputMode::Table,
            alert: None,
            cursor: 0,

            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,

            in_flight: None,
            next_request_id: 0,
        }
    }

    pub fn in_flight(&self) -> Option<PageRequest> {
        self.in_flight
    }

    pub fn set_in_flight(&mut self, request: Option<PageRequest>) {
        self.in_flight = request;
    }

    /// Hands out the next request id.
    pub fn next_request_id(&mut self) -> u64 {
        self.next_request_id += 1;
        self.next_request_id
    }

    /// The artwork under the cursor, if the page has any rows.
    pub fn cursor_artwork(&self) -> Option<&Artwork> {
        self.artworks.get(self.cursor)
    }

    /// Whether the row is drawn as checked.
    pub fn is_checked(&self, artwork: &Artwork) -> bool {
        self.selection.contains(artwork.id)
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
