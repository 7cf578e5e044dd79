//! Multi-line text area
//!
//! The editing surface under the editor adapter: line storage, cursor
//! motion, deletion, indentation, and bracket matching. Rendering and key
//! bindings live elsewhere; this type only mutates text and cursor state.

use crate::input::{Direction, Granularity};
use unicode_width::UnicodeWidthChar;

/// Characters treated as word separators for word motion
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Find the char index of the previous word boundary in `line`
fn prev_word(line: &str, from: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let mut idx = from.min(chars.len());
    // Skip separators, then the word itself
    while idx > 0 && !is_word_char(chars[idx - 1]) {
        idx -= 1;
    }
    while idx > 0 && is_word_char(chars[idx - 1]) {
        idx -= 1;
    }
    idx
}

/// Find the char index of the next word boundary in `line`
fn next_word(line: &str, from: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let mut idx = from.min(chars.len());
    while idx < chars.len() && is_word_char(chars[idx]) {
        idx += 1;
    }
    while idx < chars.len() && !is_word_char(chars[idx]) {
        idx += 1;
    }
    idx
}

/// Display column of char index `col` in `line`, accounting for tab stops
/// and wide characters
pub fn display_col(line: &str, col: usize, tab_width: usize) -> usize {
    let mut width = 0;
    for ch in line.chars().take(col) {
        if ch == '\t' {
            let tw = tab_width.max(1);
            width = (width / tw + 1) * tw;
        } else {
            width += ch.width().unwrap_or(1).max(1);
        }
    }
    width
}

/// Multi-line text area with a cursor
///
/// Lines never contain newline characters; there is always at least one
/// line. Cursor columns are char indices into the cursor line.
pub struct TextArea {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
    /// First visible line (vertical scroll)
    scroll_row: usize,
    /// Sticky column for vertical motion
    desired_col: usize,
}

impl TextArea {
    /// Create an empty text area
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Create a text area seeded with the given text
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text.split('\n').map(|l| l.to_string()).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            cursor_row: 0,
            cursor_col: 0,
            scroll_row: 0,
            desired_col: 0,
        }
    }

    /// Current content as a single string
    pub fn value(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the whole content, resetting the cursor to the start
    pub fn set_value(&mut self, text: &str) {
        *self = Self::from_text(text);
    }

    /// Number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// A single line by index
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(|l| l.as_str())
    }

    /// Cursor position as (row, char column)
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// First visible line after the last scroll adjustment
    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map(|l| l.chars().count()).unwrap_or(0)
    }

    fn current_line(&self) -> &str {
        &self.lines[self.cursor_row]
    }

    /// The word prefix immediately before the cursor (used for completion)
    pub fn word_before_cursor(&self) -> String {
        let line = self.current_line();
        let chars: Vec<char> = line.chars().collect();
        let mut start = self.cursor_col.min(chars.len());
        while start > 0 && is_word_char(chars[start - 1]) {
            start -= 1;
        }
        chars[start..self.cursor_col.min(chars.len())].iter().collect()
    }

    /// Replace a single line's content, clamping the cursor if it sat on it
    pub fn replace_line(&mut self, row: usize, text: String) {
        if let Some(line) = self.lines.get_mut(row) {
            *line = text;
            if self.cursor_row == row {
                self.cursor_col = self.cursor_col.min(self.line_len(row));
            }
        }
    }

    /// Place the cursor, clamping to valid positions
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor_row = row.min(self.lines.len() - 1);
        self.cursor_col = col.min(self.line_len(self.cursor_row));
        self.desired_col = self.cursor_col;
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, ch: char) {
        let col = self.cursor_col;
        let line = &mut self.lines[self.cursor_row];
        let byte_idx = char_to_byte(line, col);
        line.insert(byte_idx, ch);
        self.cursor_col += 1;
        self.desired_col = self.cursor_col;
    }

    /// Insert a string at the cursor; newlines split lines
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '\n' => self.insert_newline(""),
                '\r' => {}
                _ => self.insert_char(ch),
            }
        }
    }

    /// Split the current line at the cursor, carrying `indent` onto the new
    /// line (smart indent is decided by the caller)
    pub fn insert_newline(&mut self, indent: &str) {
        let col = self.cursor_col;
        let line = &mut self.lines[self.cursor_row];
        let byte_idx = char_to_byte(line, col);
        let rest = line.split_off(byte_idx);
        let new_line = format!("{indent}{rest}");
        self.lines.insert(self.cursor_row + 1, new_line);
        self.cursor_row += 1;
        self.cursor_col = indent.chars().count();
        self.desired_col = self.cursor_col;
    }

    /// Leading whitespace of the cursor line
    pub fn current_indent(&self) -> String {
        self.current_line()
            .chars()
            .take_while(|c| *c == ' ' || *c == '\t')
            .collect()
    }

    /// The character immediately before the cursor, if any (same line)
    pub fn char_before_cursor(&self) -> Option<char> {
        if self.cursor_col == 0 {
            return None;
        }
        self.current_line().chars().nth(self.cursor_col - 1)
    }

    /// Delete one unit in the given direction
    pub fn delete(&mut self, dir: Direction, granularity: Granularity) {
        match (dir, granularity) {
            (Direction::Left, Granularity::Character) => self.delete_left(),
            (Direction::Right, Granularity::Character) => self.delete_right(),
            (Direction::Left, Granularity::Word) => {
                let target = prev_word(self.current_line(), self.cursor_col);
                while self.cursor_col > target {
                    self.delete_left();
                }
            }
            _ => {}
        }
        self.desired_col = self.cursor_col;
    }

    fn delete_left(&mut self) {
        if self.cursor_col > 0 {
            let col = self.cursor_col;
            let line = &mut self.lines[self.cursor_row];
            let byte_idx = char_to_byte(line, col - 1);
            line.remove(byte_idx);
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            // Join with the previous line
            let removed = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.line_len(self.cursor_row);
            self.lines[self.cursor_row].push_str(&removed);
        }
    }

    fn delete_right(&mut self) {
        let len = self.line_len(self.cursor_row);
        if self.cursor_col < len {
            let col = self.cursor_col;
            let line = &mut self.lines[self.cursor_row];
            let byte_idx = char_to_byte(line, col);
            line.remove(byte_idx);
        } else if self.cursor_row + 1 < self.lines.len() {
            let removed = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&removed);
        }
    }

    /// Move the cursor one unit in the given direction
    pub fn move_cursor(&mut self, dir: Direction, granularity: Granularity, page_rows: usize) {
        match (dir, granularity) {
            (Direction::Left, Granularity::Character) => {
                if self.cursor_col > 0 {
                    self.cursor_col -= 1;
                } else if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.cursor_col = self.line_len(self.cursor_row);
                }
                self.desired_col = self.cursor_col;
            }
            (Direction::Right, Granularity::Character) => {
                if self.cursor_col < self.line_len(self.cursor_row) {
                    self.cursor_col += 1;
                } else if self.cursor_row + 1 < self.lines.len() {
                    self.cursor_row += 1;
                    self.cursor_col = 0;
                }
                self.desired_col = self.cursor_col;
            }
            (Direction::Up, Granularity::Character) => {
                if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.cursor_col = self.desired_col.min(self.line_len(self.cursor_row));
                }
            }
            (Direction::Down, Granularity::Character) => {
                if self.cursor_row + 1 < self.lines.len() {
                    self.cursor_row += 1;
                    self.cursor_col = self.desired_col.min(self.line_len(self.cursor_row));
                }
            }
            (Direction::Left, Granularity::Word) => {
                if self.cursor_col == 0 && self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.cursor_col = self.line_len(self.cursor_row);
                } else {
                    self.cursor_col = prev_word(self.current_line(), self.cursor_col);
                }
                self.desired_col = self.cursor_col;
            }
            (Direction::Right, Granularity::Word) => {
                if self.cursor_col >= self.line_len(self.cursor_row)
                    && self.cursor_row + 1 < self.lines.len()
                {
                    self.cursor_row += 1;
                    self.cursor_col = 0;
                } else {
                    self.cursor_col = next_word(self.current_line(), self.cursor_col);
                }
                self.desired_col = self.cursor_col;
            }
            (Direction::Left, Granularity::Line) => {
                self.cursor_col = 0;
                self.desired_col = 0;
            }
            (Direction::Right, Granularity::Line) => {
                self.cursor_col = self.line_len(self.cursor_row);
                self.desired_col = self.cursor_col;
            }
            (Direction::Up, Granularity::Page) => {
                self.cursor_row = self.cursor_row.saturating_sub(page_rows.max(1));
                self.cursor_col = self.desired_col.min(self.line_len(self.cursor_row));
            }
            (Direction::Down, Granularity::Page) => {
                self.cursor_row =
                    (self.cursor_row + page_rows.max(1)).min(self.lines.len() - 1);
                self.cursor_col = self.desired_col.min(self.line_len(self.cursor_row));
            }
            (Direction::Left, Granularity::Document) => {
                self.cursor_row = 0;
                self.cursor_col = 0;
                self.desired_col = 0;
            }
            (Direction::Right, Granularity::Document) => {
                self.cursor_row = self.lines.len() - 1;
                self.cursor_col = self.line_len(self.cursor_row);
                self.desired_col = self.cursor_col;
            }
            _ => {}
        }
    }

    /// Adjust the vertical scroll so the cursor stays visible
    pub fn scroll_to_cursor(&mut self, visible_rows: usize) {
        let visible_rows = visible_rows.max(1);
        if self.cursor_row < self.scroll_row {
            self.scroll_row = self.cursor_row;
        } else if self.cursor_row >= self.scroll_row + visible_rows {
            self.scroll_row = self.cursor_row + 1 - visible_rows;
        }
    }

    /// Find the bracket pair under or just before the cursor
    ///
    /// Returns the positions of the bracket and its match as
    /// ((row, col), (row, col)) in char coordinates.
    pub fn matching_bracket(&self) -> Option<((usize, usize), (usize, usize))> {
        const OPEN: &str = "([{";
        const CLOSE: &str = ")]}";

        // Prefer the char under the cursor, then the one before it
        let here = self
            .char_at(self.cursor_row, self.cursor_col)
            .filter(|c| OPEN.contains(*c) || CLOSE.contains(*c))
            .map(|c| (self.cursor_row, self.cursor_col, c));
        let before = if self.cursor_col > 0 {
            self.char_at(self.cursor_row, self.cursor_col - 1)
                .filter(|c| OPEN.contains(*c) || CLOSE.contains(*c))
                .map(|c| (self.cursor_row, self.cursor_col - 1, c))
        } else {
            None
        };
        let (row, col, bracket) = here.or(before)?;

        let pairs = [('(', ')'), ('[', ']'), ('{', '}')];
        if let Some(&(open, close)) = pairs.iter().find(|(o, _)| *o == bracket) {
            self.scan_forward(row, col, open, close)
                .map(|pos| ((row, col), pos))
        } else {
            let &(open, close) = pairs.iter().find(|(_, c)| *c == bracket)?;
            self.scan_backward(row, col, open, close)
                .map(|pos| ((row, col), pos))
        }
    }

    fn char_at(&self, row: usize, col: usize) -> Option<char> {
        self.lines.get(row).and_then(|l| l.chars().nth(col))
    }

    fn scan_forward(
        &self,
        row: usize,
        col: usize,
        open: char,
        close: char,
    ) -> Option<(usize, usize)> {
        let mut depth = 0usize;
        for r in row..self.lines.len() {
            let start = if r == row { col } else { 0 };
            for (c, ch) in self.lines[r].chars().enumerate().skip(start) {
                if ch == open {
                    depth += 1;
                } else if ch == close {
                    depth -= 1;
                    if depth == 0 {
                        return Some((r, c));
                    }
                }
            }
        }
        None
    }

    fn scan_backward(
        &self,
        row: usize,
        col: usize,
        open: char,
        close: char,
    ) -> Option<(usize, usize)> {
        let mut depth = 0usize;
        for r in (0..=row).rev() {
            let chars: Vec<char> = self.lines[r].chars().collect();
            let start = if r == row { col } else { chars.len().saturating_sub(1) };
            if chars.is_empty() {
                continue;
            }
            let mut c = start.min(chars.len() - 1);
            loop {
                let ch = chars[c];
                if ch == close {
                    depth += 1;
                } else if ch == open {
                    depth -= 1;
                    if depth == 0 {
                        return Some((r, c));
                    }
                }
                if c == 0 {
                    break;
                }
                c -= 1;
            }
        }
        None
    }
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte index of char index `col` in `line`
fn char_to_byte(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}
