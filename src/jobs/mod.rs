//! Background submission runner
//!
//! The widget only ever listens to one round-trip at a time: a new submit
//! supersedes the previous one. The runner owns that single slot, hands
//! each round-trip to a worker thread, and reports settled outcomes over a
//! channel the event loop drains between input polls.

use crate::protocol::{SubmissionRequest, SubmissionResponse};
use crate::transport::{Transport, TransportError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// A settled submission round-trip
#[derive(Debug)]
pub struct SubmitOutcome {
    /// Generation of the submit that started this round-trip
    pub generation: u64,
    /// The round-trip result
    pub outcome: Result<SubmissionResponse, TransportError>,
}

/// The worker currently occupying the slot
struct Worker {
    /// Set once a newer submit takes the slot
    superseded: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

/// Runs at most one submission round-trip at a time
///
/// # Invariants
/// * Workers never touch widget state; they report through the channel.
/// * A superseded worker suppresses its outcome instead of reporting.
pub struct SubmitRunner {
    sender: Sender<SubmitOutcome>,
    outcomes: Receiver<SubmitOutcome>,
    slot: Option<Worker>,
}

impl SubmitRunner {
    pub fn new() -> Self {
        let (sender, outcomes) = mpsc::channel();
        Self {
            sender,
            outcomes,
            slot: None,
        }
    }

    /// Start a round-trip for `generation`, superseding any previous one
    ///
    /// One transport attempt per call; no timeout, no retry. The outcome
    /// arrives through `try_settle` tagged with the generation.
    pub fn start(
        &mut self,
        generation: u64,
        request: SubmissionRequest,
        transport: Arc<dyn Transport>,
    ) {
        self.silence_slot();

        let superseded = Arc::new(AtomicBool::new(false));
        let silenced = superseded.clone();
        let report = self.sender.clone();
        let handle = thread::spawn(move || {
            let outcome = transport.submit(&request);
            // A superseded round-trip stays quiet; the newer one owns the screen
            if !silenced.load(Ordering::Relaxed) {
                let _ = report.send(SubmitOutcome {
                    generation,
                    outcome,
                });
            }
        });

        self.slot = Some(Worker {
            superseded,
            handle,
        });
    }

    /// Non-blocking check for a settled outcome
    pub fn try_settle(&mut self) -> Option<SubmitOutcome> {
        let outcome = self.outcomes.try_recv().ok()?;
        self.reap();
        Some(outcome)
    }

    /// Flag the slotted worker as superseded
    ///
    /// A finished worker is joined here; an unfinished one is left to run
    /// out on its own, muted by the flag. The blocking HTTP call cannot be
    /// interrupted anyway.
    fn silence_slot(&mut self) {
        if let Some(worker) = self.slot.take() {
            worker.superseded.store(true, Ordering::Relaxed);
            if worker.handle.is_finished() {
                let _ = worker.handle.join();
            }
        }
    }

    /// Join the slotted worker once its thread has exited
    fn reap(&mut self) {
        let done = self
            .slot
            .as_ref()
            .is_some_and(|worker| worker.handle.is_finished());
        if done {
            if let Some(worker) = self.slot.take() {
                let _ = worker.handle.join();
            }
        }
    }
}

impl Default for SubmitRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SubmitRunner {
    fn drop(&mut self) {
        self.silence_slot();
    }
}
