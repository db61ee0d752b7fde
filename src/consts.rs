pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the configuration constants for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events from the fetch workers.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // CATALOG CONFIGURATION
    // =============================================================================

    /// Rows shown per table page. Also sent as the `limit` query parameter.
    pub const PAGE_SIZE: usize = 12;

    /// Fields requested from the artworks endpoint.
    pub const ARTWORK_FIELDS: &str =
        "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

    /// Connect and request timeout for catalog calls, unless configured otherwise.
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

    // =============================================================================
    // MESSAGES
    // =============================================================================

    /// Banner text for any failed page fetch.
    pub const FETCH_FAILED_MESSAGE: &str = "Failed to load artworks. Please try again.";

    /// Modal text for a rejected "select first N" input.
    pub const INVALID_COUNT_MESSAGE: &str = "Please enter a valid positive number.";
}
