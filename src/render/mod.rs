//! Widget rendering
//!
//! Draws the whole widget into the screen grid: prompt, editor pane with
//! gutter, verdict line, the two result panels, notifications, the
//! completion popup, and the status bar. Drawing reads the render model
//! and never mutates it.
//!
//! ## render/ Invariants
//!
//! - Rendering is a pure function of widget state into the grid.
//! - Cell values reach the grid as plain text; nothing re-interprets them.
//! - The verdict/panel block is absent until the first settled response.

use crate::color::{Color, Style};
use crate::controller::{PanelModel, ResultsModel};
use crate::editor::QueryEditor;
use crate::notification::{NotificationManager, NotificationType};
use crate::screen::Screen;
use crate::textarea::display_col;
use unicode_width::UnicodeWidthStr;

/// A rectangular screen region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Rect {
    pub fn new(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self {
            row,
            col,
            rows,
            cols,
        }
    }

    /// First column past the region
    pub fn right(&self) -> usize {
        self.col + self.cols
    }

    /// First row past the region
    pub fn bottom(&self) -> usize {
        self.row + self.rows
    }
}

/// Where each widget region lands for the current frame
#[derive(Debug, Clone)]
pub struct Layout {
    /// Optional prompt row at the top
    pub prompt_row: Option<usize>,
    /// The editor pane
    pub editor: Rect,
    /// Verdict line (present once results are revealed)
    pub verdict_row: Option<usize>,
    /// Expected-results panel
    pub expected: Option<Rect>,
    /// Actual-results panel
    pub actual: Option<Rect>,
    /// Status bar row
    pub status_row: usize,
}

/// Rows reserved for the verdict plus the panels once revealed
const RESULTS_ROWS: usize = 12;
/// Minimum rows kept for the editor pane
const MIN_EDITOR_ROWS: usize = 3;
/// Maximum completion items shown at once
const POPUP_ITEMS: usize = 8;

/// Compute the frame layout
pub fn compute_layout(rows: usize, cols: usize, revealed: bool, has_prompt: bool) -> Layout {
    let rows = rows.max(MIN_EDITOR_ROWS + 2);
    let prompt_row = if has_prompt { Some(0) } else { None };
    let content_top = if has_prompt { 1 } else { 0 };
    let status_row = rows - 1;

    let mut results_rows = if revealed {
        RESULTS_ROWS.min(rows.saturating_sub(content_top + MIN_EDITOR_ROWS + 1))
    } else {
        0
    };
    // Too small to show a verdict plus at least one table row
    if results_rows < 3 {
        results_rows = 0;
    }

    let editor_rows = rows - 1 - content_top - results_rows;
    let editor = Rect::new(content_top, 0, editor_rows, cols);

    let (verdict_row, expected, actual) = if results_rows > 0 {
        let verdict_row = editor.bottom();
        let panel_top = verdict_row + 1;
        let panel_rows = status_row - panel_top;
        let half = cols / 2;
        let expected = Rect::new(panel_top, 0, panel_rows, half.saturating_sub(1));
        let actual = Rect::new(panel_top, half, panel_rows, cols - half);
        (Some(verdict_row), Some(expected), Some(actual))
    } else {
        (None, None, None)
    };

    Layout {
        prompt_row,
        editor,
        verdict_row,
        expected,
        actual,
        status_row,
    }
}

/// Result of drawing a frame
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Terminal cursor position (inside the editor pane), if visible
    pub cursor: Option<(u16, u16)>,
}

/// Draw the whole widget into the grid
#[allow(clippy::too_many_arguments)]
pub fn draw(
    screen: &mut Screen,
    layout: &Layout,
    editor: &QueryEditor,
    results: &ResultsModel,
    status_line: &str,
    notifications: &NotificationManager,
    prompt: Option<&str>,
) -> Frame {
    screen.clear();

    if let (Some(row), Some(text)) = (layout.prompt_row, prompt) {
        screen.put_str(row, 0, text, Style::fg(Color::Cyan).bold());
    }

    let cursor = draw_editor(screen, &layout.editor, editor);

    if let Some(row) = layout.verdict_row {
        draw_verdict(screen, row, results);
    }
    if let Some(rect) = layout.expected {
        draw_panel(screen, &rect, &results.expected);
    }
    if let Some(rect) = layout.actual {
        draw_panel(screen, &rect, &results.actual);
    }

    draw_status(screen, layout.status_row, status_line);
    draw_notifications(screen, notifications);
    draw_completion(screen, editor, cursor);

    Frame { cursor }
}

/// Gutter width for the given line count (digits plus one space)
fn gutter_width(line_count: usize, line_numbers: bool) -> usize {
    if !line_numbers {
        return 0;
    }
    line_count.to_string().len() + 1
}

/// Draw the editor pane; returns the terminal cursor position
fn draw_editor(screen: &mut Screen, rect: &Rect, editor: &QueryEditor) -> Option<(u16, u16)> {
    let area = editor.area();
    let config = editor.config();
    let gutter = gutter_width(area.line_count(), config.line_numbers);
    let text_col = rect.col + gutter;
    let tab_width = config.indent_unit;

    let bracket = editor.bracket_match();
    let spans = editor.highlight_spans();

    // Byte offset of each line start, for highlight span lookup
    let mut line_starts = Vec::with_capacity(area.line_count());
    let mut offset = 0usize;
    for idx in 0..area.line_count() {
        line_starts.push(offset);
        offset += area.line(idx).map(|l| l.len()).unwrap_or(0) + 1;
    }

    let first = area.scroll_row();
    for visual_row in 0..rect.rows {
        let line_idx = first + visual_row;
        let row = rect.row + visual_row;
        let Some(line) = area.line(line_idx) else { break };

        if gutter > 0 {
            let number = format!("{:>width$} ", line_idx + 1, width = gutter - 1);
            screen.put_str_clipped(row, rect.col, &number, Style::fg(Color::DarkGrey), rect.right());
        }

        draw_code_line(
            screen,
            row,
            text_col,
            rect.right(),
            line,
            line_starts[line_idx],
            spans,
            tab_width,
            line_idx,
            bracket,
        );
    }

    // Cursor position in screen coordinates
    let (cursor_row, cursor_col) = area.cursor();
    if cursor_row >= first && cursor_row < first + rect.rows {
        let line = area.line(cursor_row).unwrap_or("");
        let visual_col = text_col + display_col(line, cursor_col, tab_width);
        if visual_col < rect.right() {
            return Some(((rect.row + cursor_row - first) as u16, visual_col as u16));
        }
    }
    None
}

/// Draw one line of code with tab expansion and highlight styling
#[allow(clippy::too_many_arguments)]
fn draw_code_line(
    screen: &mut Screen,
    row: usize,
    start_col: usize,
    max_col: usize,
    line: &str,
    line_start_byte: usize,
    spans: &[(std::ops::Range<usize>, String)],
    tab_width: usize,
    line_idx: usize,
    bracket: Option<((usize, usize), (usize, usize))>,
) {
    let mut at = start_col;
    for (char_idx, (byte_idx, ch)) in line.char_indices().enumerate() {
        if at >= max_col {
            break;
        }
        if ch == '\t' {
            let tw = tab_width.max(1);
            let rel = at - start_col;
            let next = (rel / tw + 1) * tw;
            at = (start_col + next).min(max_col);
            continue;
        }

        let mut style = span_style(line_start_byte + byte_idx, spans);
        if is_bracket_cell(line_idx, char_idx, bracket) {
            style = Style {
                bg: Some(Color::DarkGrey),
                bold: true,
                ..style
            };
        }

        at = screen.put_str_clipped(row, at, &ch.to_string(), style, max_col);
    }
}

/// Style for the capture covering the given byte offset, if any
fn span_style(byte_offset: usize, spans: &[(std::ops::Range<usize>, String)]) -> Style {
    for (range, name) in spans {
        if range.contains(&byte_offset) {
            if let Some(color) = capture_color(name) {
                return Style::fg(color);
            }
        }
    }
    Style::default()
}

/// Map a highlight capture name to a color
fn capture_color(name: &str) -> Option<Color> {
    let base = name.split('.').next().unwrap_or(name);
    match base {
        "keyword" => Some(Color::Yellow),
        "string" => Some(Color::Green),
        "number" => Some(Color::Magenta),
        "comment" => Some(Color::DarkGrey),
        "function" => Some(Color::Cyan),
        "type" => Some(Color::Cyan),
        "operator" => Some(Color::White),
        _ => None,
    }
}

/// Whether (line, char) is one end of the matched bracket pair
fn is_bracket_cell(
    line_idx: usize,
    char_idx: usize,
    bracket: Option<((usize, usize), (usize, usize))>,
) -> bool {
    match bracket {
        Some((a, b)) => a == (line_idx, char_idx) || b == (line_idx, char_idx),
        None => false,
    }
}

/// Draw the verdict line
fn draw_verdict(screen: &mut Screen, row: usize, results: &ResultsModel) {
    let Some(verdict) = results.verdict.as_ref() else {
        return;
    };
    let style = if verdict.is_error() {
        Style::fg(Color::Red).bold()
    } else if matches!(
        verdict,
        crate::protocol::Verdict::Graded { correct: true }
    ) {
        Style::fg(Color::Green).bold()
    } else {
        Style::fg(Color::Yellow).bold()
    };
    screen.put_str(row, 0, &verdict.text(), style);
}

/// Draw one result panel: title, then the table or its message
fn draw_panel(screen: &mut Screen, rect: &Rect, panel: &PanelModel) {
    if rect.rows == 0 || rect.cols == 0 {
        return;
    }

    screen.put_str_clipped(
        rect.row,
        rect.col,
        panel.title,
        Style::fg(Color::Cyan).bold(),
        rect.right(),
    );

    if let Some(message) = panel.message.as_deref() {
        if rect.rows > 1 {
            screen.put_str_clipped(
                rect.row + 1,
                rect.col,
                message,
                Style::fg(Color::DarkGrey),
                rect.right(),
            );
        }
        return;
    }

    let widths = column_widths(&panel.rows);
    for (row_idx, cells) in panel.rows.iter().enumerate() {
        let row = rect.row + 1 + row_idx;
        if row >= rect.bottom() {
            break;
        }
        let mut at = rect.col;
        for (col_idx, cell) in cells.iter().enumerate() {
            if at >= rect.right() {
                break;
            }
            screen.put_str_clipped(row, at, cell, Style::default(), rect.right());
            at += widths.get(col_idx).copied().unwrap_or(cell.width()) + 2;
        }
    }
}

/// Display width of each column across all rows
fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            let width = cell.width();
            if idx >= widths.len() {
                widths.push(width);
            } else if widths[idx] < width {
                widths[idx] = width;
            }
        }
    }
    widths
}

/// Draw the status bar in reverse video
fn draw_status(screen: &mut Screen, row: usize, line: &str) {
    let style = Style::new(Color::Black, Color::Grey);
    screen.fill_row(row, style);
    screen.put_str(row, 0, line, style);
}

/// Draw notifications, right-aligned from the top row
fn draw_notifications(screen: &mut Screen, notifications: &NotificationManager) {
    for (idx, notification) in notifications.iter().enumerate() {
        if idx >= 3 {
            break;
        }
        let style = match notification.kind {
            NotificationType::Info => Style::new(Color::Black, Color::Cyan),
            NotificationType::Warning => Style::new(Color::Black, Color::Yellow),
            NotificationType::Error => Style::new(Color::White, Color::DarkRed).bold(),
        };
        let text = format!(" {} ", notification.message);
        let width = text.width();
        let col = screen.cols().saturating_sub(width);
        screen.put_str(idx, col, &text, style);
    }
}

/// Draw the completion popup just under the editor cursor
fn draw_completion(screen: &mut Screen, editor: &QueryEditor, cursor: Option<(u16, u16)>) {
    let Some(menu) = editor.completion() else {
        return;
    };
    let Some((cursor_row, cursor_col)) = cursor else {
        return;
    };

    let items = menu.items();
    let visible = items.len().min(POPUP_ITEMS);
    let width = items
        .iter()
        .take(visible)
        .map(|item| item.width())
        .max()
        .unwrap_or(0)
        + 2;

    // Keep the selected item in the visible window
    let first = if menu.selected() >= visible {
        menu.selected() + 1 - visible
    } else {
        0
    };

    for (slot, idx) in (first..first + visible).enumerate() {
        let Some(item) = items.get(idx) else { break };
        let row = cursor_row as usize + 1 + slot;
        if row >= screen.rows() {
            break;
        }
        let style = if idx == menu.selected() {
            Style::new(Color::Black, Color::White)
        } else {
            Style::new(Color::White, Color::DarkGrey)
        };
        let padded = format!(" {item:<width$}", width = width - 1);
        screen.put_str(row, cursor_col as usize, &padded, style);
    }
}
