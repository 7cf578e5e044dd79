//! Status bar content
//! Derived entirely from widget state; rendering happens in `render`

use crate::controller::SubmitPhase;
use unicode_width::UnicodeWidthStr;

/// Key hints shown on the right side of the status bar
const HINTS: &str = "Ctrl-Enter submit | Ctrl-Space complete | Ctrl-Q quit";

/// Build the status line, padded to `cols` display columns
pub fn status_line(phase: SubmitPhase, endpoint_host: &str, cols: usize) -> String {
    let phase_text = match phase {
        SubmitPhase::Idle => "Ready",
        SubmitPhase::Pending => "Submitting...",
    };

    let left = format!(" {phase_text} @ {endpoint_host}");
    let right = format!("{HINTS} ");

    let left_width = left.width();
    let right_width = right.width();

    if left_width + right_width + 1 <= cols {
        let padding = cols - left_width - right_width;
        format!("{left}{}{right}", " ".repeat(padding))
    } else {
        // Narrow terminal: drop the hints before dropping the phase
        let mut line = left;
        while line.width() > cols {
            line.pop();
        }
        let padding = cols - line.width();
        format!("{line}{}", " ".repeat(padding))
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
