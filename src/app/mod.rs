//! The exercise widget application
//!
//! Owns the event loop: drain settled submissions, poll input, route keys,
//! and redraw. The terminal stays responsive while a submission is in
//! flight.

use crate::controller::SubmissionController;
use crate::editor::{EditorConfig, EventResult, QueryEditor};
use crate::error::{AppError, ErrorKind, Result};
use crate::jobs::SubmitRunner;
use crate::key::Key;
use crate::notification::NotificationManager;
use crate::render;
use crate::screen::Screen;
use crate::status;
use crate::term::TerminalBackend;
use crate::transport::{resolve_handler_url, HttpTransport};
use std::sync::Arc;
use std::time::Duration;

/// Input poll timeout; also the cadence for draining settled submissions
const POLL_TIMEOUT_MS: u64 = 33;

/// Launch options resolved by the host binary
pub struct WidgetOptions {
    /// Grading endpoint base URL
    pub endpoint: String,
    /// Initial editor content
    pub initial_query: String,
    /// Exercise prompt shown above the editor
    pub prompt: Option<String>,
}

/// The widget application
pub struct App<T: TerminalBackend> {
    term: T,
    screen: Screen,
    editor: QueryEditor,
    controller: SubmissionController,
    jobs: SubmitRunner,
    notifications: NotificationManager,
    prompt: Option<String>,
    endpoint_host: String,
    should_quit: bool,
}

impl<T: TerminalBackend> App<T> {
    /// Create the widget, initializing the terminal
    pub fn new(mut term: T, options: WidgetOptions) -> Result<Self> {
        term.init()
            .map_err(|e| AppError::new(ErrorKind::Term, "TERM_INIT", e))?;

        let size = term
            .get_size()
            .map_err(|e| AppError::new(ErrorKind::Term, "TERM_SIZE", e))?;
        let screen = Screen::new(size.rows as usize, size.cols as usize);

        // The handler URL is resolved exactly once, here
        let url = resolve_handler_url(&options.endpoint);
        let endpoint_host = host_of(&options.endpoint);
        let transport = Arc::new(HttpTransport::new(url));

        let editor = QueryEditor::new(&options.initial_query, EditorConfig::default());

        Ok(Self {
            term,
            screen,
            editor,
            controller: SubmissionController::new(transport),
            jobs: SubmitRunner::new(),
            notifications: NotificationManager::new(),
            prompt: options.prompt,
            endpoint_host,
            should_quit: false,
        })
    }

    /// Run the event loop until quit
    pub fn run(&mut self) -> Result<()> {
        self.render()?;

        while !self.should_quit {
            let mut needs_redraw = false;

            // Drain settled submissions
            while let Some(outcome) = self.jobs.try_settle() {
                needs_redraw |= self
                    .controller
                    .on_result(outcome, &mut self.notifications);
            }

            // Poll for input
            let has_input = self
                .term
                .poll(Duration::from_millis(POLL_TIMEOUT_MS))
                .map_err(|e| AppError::new(ErrorKind::Term, "POLL_FAILED", e))?;
            if has_input {
                let key = self
                    .term
                    .read_key()
                    .map_err(|e| AppError::new(ErrorKind::Term, "READ_FAILED", e))?;
                if let Some(key) = key {
                    needs_redraw |= self.handle_key(key);
                }
            }

            needs_redraw |= self.notifications.prune_expired();

            if needs_redraw {
                self.render()?;
            }
        }

        Ok(())
    }

    /// Route one keypress; returns whether a redraw is needed
    fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Ctrl('q') => {
                self.should_quit = true;
                false
            }
            // The submit control; consuming the key here is the terminal
            // analog of suppressing the default form action
            Key::CtrlEnter | Key::F(5) => {
                let query = self.editor.value();
                self.controller.submit(query, &mut self.jobs);
                true
            }
            Key::Resize(cols, rows) => {
                self.screen.resize(rows as usize, cols as usize);
                true
            }
            _ => matches!(self.editor.handle_key(key), EventResult::Consumed),
        }
    }

    /// Draw and flush a frame
    fn render(&mut self) -> Result<()> {
        let revealed = self.controller.results().revealed;
        let layout = render::compute_layout(
            self.screen.rows(),
            self.screen.cols(),
            revealed,
            self.prompt.is_some(),
        );
        self.editor.scroll_to_cursor(layout.editor.rows);

        let status_line = status::status_line(
            self.controller.phase(),
            &self.endpoint_host,
            self.screen.cols(),
        );

        let frame = render::draw(
            &mut self.screen,
            &layout,
            &self.editor,
            self.controller.results(),
            &status_line,
            &self.notifications,
            self.prompt.as_deref(),
        );

        self.screen
            .flush(&mut self.term)
            .map_err(|e| AppError::new(ErrorKind::Term, "RENDER_FAILED", e))?;

        match frame.cursor {
            Some((row, col)) => {
                self.term
                    .move_cursor(row, col)
                    .map_err(|e| AppError::new(ErrorKind::Term, "RENDER_FAILED", e))?;
                self.term
                    .show_cursor()
                    .map_err(|e| AppError::new(ErrorKind::Term, "RENDER_FAILED", e))?;
            }
            None => {
                self.term
                    .hide_cursor()
                    .map_err(|e| AppError::new(ErrorKind::Term, "RENDER_FAILED", e))?;
            }
        }

        Ok(())
    }
}

impl<T: TerminalBackend> Drop for App<T> {
    fn drop(&mut self) {
        self.term.deinit();
    }
}

/// Display host of an endpoint URL, for the status bar
fn host_of(url: &str) -> String {
    let without_scheme = url.split("://").nth(1).unwrap_or(url);
    without_scheme
        .split('/')
        .next()
        .unwrap_or(without_scheme)
        .to_string()
}
