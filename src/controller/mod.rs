//! Submission controller
//!
//! Owns the submit action, the round-trip, result interpretation, and the
//! render model the screen draws from. Constructed with an injected
//! transport so it can be exercised without a network or a terminal.
//!
//! ## controller/ Invariants
//!
//! - The verdict decision is made once, from the tagged `Verdict`.
//! - The render model is fully overwritten per settled response.
//! - Only the newest submission generation may settle (last-issued-wins).
//! - Transport failures return the controller to Idle; panels are kept.

use crate::constants::ui;
use crate::jobs::{SubmitOutcome, SubmitRunner};
use crate::notification::NotificationManager;
use crate::protocol::{cell_text, Row, SubmissionRequest, SubmissionResponse, Verdict};
use crate::transport::Transport;
use std::sync::Arc;

/// Where the controller sits between submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Waiting for user action
    Idle,
    /// A submission is in flight
    Pending,
}

/// One rendered result panel: rows of cell text, or a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelModel {
    /// Panel title
    pub title: &'static str,
    /// Table rows; one inner vector per Row, one string per cell
    pub rows: Vec<Vec<String>>,
    /// Message shown instead of a table (set iff rows is empty)
    pub message: Option<String>,
}

impl PanelModel {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            rows: Vec::new(),
            message: None,
        }
    }

    /// Replace the panel contents from a wire result set
    fn load(&mut self, rows: &[Row]) {
        self.rows = rows
            .iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect();
        self.message = if self.rows.is_empty() {
            Some(ui::EMPTY_RESULT.to_string())
        } else {
            None
        };
    }
}

/// Everything the renderer needs to draw the verdict and panels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsModel {
    /// The grading outcome of the last settled submission
    pub verdict: Option<Verdict>,
    /// The reference result set panel
    pub expected: PanelModel,
    /// The submitted query's result set panel
    pub actual: PanelModel,
    /// Panels stay hidden until the first settled response
    pub revealed: bool,
}

impl ResultsModel {
    fn new() -> Self {
        Self {
            verdict: None,
            expected: PanelModel::new(ui::EXPECTED_TITLE),
            actual: PanelModel::new(ui::RESULT_TITLE),
            revealed: false,
        }
    }
}

/// The submission controller
pub struct SubmissionController {
    transport: Arc<dyn Transport>,
    phase: SubmitPhase,
    /// Bumped per submit; only the newest generation may settle
    generation: u64,
    results: ResultsModel,
}

impl SubmissionController {
    /// Create a controller aimed at the given transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            phase: SubmitPhase::Idle,
            generation: 0,
            results: ResultsModel::new(),
        }
    }

    /// Current phase
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// The render model
    pub fn results(&self) -> &ResultsModel {
        &self.results
    }

    /// Submit the given query
    ///
    /// Hands the runner one round-trip. A submit while another is pending
    /// is allowed: the runner silences the older worker, and its outcome,
    /// should it still arrive, is discarded here as stale.
    pub fn submit(&mut self, query: String, jobs: &mut SubmitRunner) {
        self.generation += 1;
        let request = SubmissionRequest::new(query);
        jobs.start(self.generation, request, self.transport.clone());
        self.phase = SubmitPhase::Pending;
    }

    /// Handle a settled submission outcome
    ///
    /// Returns true when the render model changed.
    pub fn on_result(
        &mut self,
        payload: SubmitOutcome,
        notifications: &mut NotificationManager,
    ) -> bool {
        if payload.generation != self.generation {
            // A newer submit superseded this one
            return false;
        }

        self.phase = SubmitPhase::Idle;

        match payload.outcome {
            Ok(response) => {
                self.apply_response(&response);
                true
            }
            Err(_) => {
                notifications.error(ui::SUBMIT_FAILED);
                true
            }
        }
    }

    /// Apply a grading response to the render model
    ///
    /// Pure function of the response into the model: applying the same
    /// response twice leaves the model identical.
    fn apply_response(&mut self, response: &SubmissionResponse) {
        self.results.verdict = Some(Verdict::resolve(response));
        self.results.expected.load(&response.expected);
        self.results.actual.load(&response.result);
        self.results.revealed = true;
    }
}
