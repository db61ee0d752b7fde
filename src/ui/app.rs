//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::dashboard::{DashboardCommand, DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::{FetchResponse, PageFetcher};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The artworks dashboard.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// 1-based page fetched when the dashboard opens.
    initial_page: u32,

    /// Starts page requests in the background.
    fetcher: PageFetcher,

    /// Receives activity events from the fetcher.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Receives finished page fetches.
    response_receiver: mpsc::Receiver<FetchResponse>,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        initial_page: u32,
        fetcher: PageFetcher,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        response_receiver: mpsc::Receiver<FetchResponse>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            environment,
            current_screen: Screen::Splash,
            initial_page,
            fetcher,
            event_receiver,
            response_receiver,
            ui_config,
        }
    }

    /// Switches to the dashboard and requests the initial page.
    fn open_dashboard(&mut self) {
        let mut state = DashboardState::new(self.environment.clone(), self.ui_config.clone());
        let request = state.start_page(self.initial_page);
        self.fetcher.spawn(request);
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(1500);

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Apply finished fetches; stale ones are dropped by the state
        while let Ok(response) = app.response_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.apply_fetch_response(response);
            }
        }

        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.open_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            return Ok(());
                        }
                        // Any other key skips the splash screen
                        app.open_dashboard();
                    }
                    Screen::Dashboard(state) => match state.handle_key(key) {
                        Some(DashboardCommand::Quit) => return Ok(()),
                        Some(DashboardCommand::Fetch(request)) => {
                            app.fetcher.spawn(request);
                        }
                        None => {}
                    },
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
