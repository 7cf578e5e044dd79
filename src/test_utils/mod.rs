//! Test utilities
//! Shared testing helpers and mocks

use crate::key::Key;
use crate::protocol::{Row, SubmissionRequest, SubmissionResponse};
use crate::term::{Size, TerminalBackend};
use crate::transport::{Transport, TransportError};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Mock terminal backend for testing
/// Records all operations and feeds a scripted key sequence
pub struct MockTerminal {
    pub writes: Vec<Vec<u8>>,
    pub cursor_moves: Vec<(u16, u16)>,
    pub clear_screen_calls: usize,
    pub size: (u16, u16),
    pub keys: VecDeque<Key>,
}

impl MockTerminal {
    /// Create a new mock terminal with specified dimensions
    pub fn new(rows: u16, cols: u16) -> Self {
        MockTerminal {
            writes: Vec::new(),
            cursor_moves: Vec::new(),
            clear_screen_calls: 0,
            size: (rows, cols),
            keys: VecDeque::new(),
        }
    }

    /// Queue keys for `read_key` to deliver
    pub fn with_keys(mut self, keys: &[Key]) -> Self {
        self.keys = keys.iter().copied().collect();
        self
    }

    /// Get all written bytes as a string (lossy UTF-8 conversion)
    pub fn written_string(&self) -> String {
        let bytes: Vec<u8> = self.writes.iter().flatten().copied().collect();
        String::from_utf8_lossy(&bytes).to_string()
    }
}

impl TerminalBackend for MockTerminal {
    fn init(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn deinit(&mut self) {}

    fn poll(&mut self, _timeout: Duration) -> Result<bool, String> {
        Ok(!self.keys.is_empty())
    }

    fn read_key(&mut self) -> Result<Option<Key>, String> {
        Ok(self.keys.pop_front())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), String> {
        self.writes.push(bytes.to_vec());
        Ok(())
    }

    fn get_size(&self) -> Result<Size, String> {
        Ok(Size {
            rows: self.size.0,
            cols: self.size.1,
        })
    }

    fn clear_screen(&mut self) -> Result<(), String> {
        self.clear_screen_calls += 1;
        Ok(())
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<(), String> {
        self.cursor_moves.push((row, col));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<(), String> {
        Ok(())
    }
}

/// Stub transport with scripted outcomes
///
/// Pops one scripted outcome per submit; defaults to an empty successful
/// response when the script runs dry.
pub struct StubTransport {
    outcomes: Mutex<VecDeque<Result<SubmissionResponse, TransportError>>>,
    /// Queries seen, in submission order
    pub requests: Mutex<Vec<String>>,
    /// Simulated round-trip time
    delay: Option<Duration>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// Make every submit take at least `delay`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Script a successful response
    pub fn push_response(&self, response: SubmissionResponse) {
        self.outcomes.lock().unwrap().push_back(Ok(response));
    }

    /// Script a transport failure
    pub fn push_error(&self, error: TransportError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }
}

impl Default for StubTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for StubTransport {
    fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionResponse, TransportError> {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        self.requests.lock().unwrap().push(request.query.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(SubmissionResponse::default()))
    }
}

/// Build wire rows from string cells
pub fn rows(data: &[&[&str]]) -> Vec<Row> {
    data.iter()
        .map(|row| {
            row.iter()
                .map(|cell| serde_json::Value::String((*cell).to_string()))
                .collect()
        })
        .collect()
}

/// A graded response with no execution error
pub fn graded_response(
    correct: bool,
    expected: &[&[&str]],
    result: &[&[&str]],
) -> SubmissionResponse {
    SubmissionResponse {
        comparison: correct,
        error: None,
        expected: rows(expected),
        result: rows(result),
    }
}

/// A response carrying an execution error
pub fn error_response(message: &str) -> SubmissionResponse {
    SubmissionResponse {
        comparison: false,
        error: Some(message.to_string()),
        expected: Vec::new(),
        result: Vec::new(),
    }
}
