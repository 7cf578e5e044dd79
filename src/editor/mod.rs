//! Editor adapter
//!
//! Wraps the text area with the code-editing behavior the exercise needs:
//! SQL mode, tab indentation, smart indent, bracket matching, and a
//! keyword-completion trigger. The widget only ever reads `value()` from
//! here; everything else is editing machinery.

pub mod completion;

use crate::input::{self, Direction, Granularity, InputIntent};
use crate::key::Key;
use crate::syntax::Syntax;
use crate::textarea::TextArea;
use completion::CompletionMenu;

/// Result of offering a key to a component
pub enum EventResult {
    /// Event was not handled
    Ignored,
    /// Event was handled
    Consumed,
}

/// Fixed editor configuration, decided at construction
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Language mode (drives syntax highlighting)
    pub language: &'static str,
    /// Indent unit in columns
    pub indent_unit: usize,
    /// Indent with tab characters instead of spaces
    pub indent_with_tabs: bool,
    /// Show line numbers in the gutter
    pub line_numbers: bool,
    /// Highlight the bracket pair at the cursor
    pub match_brackets: bool,
    /// Carry indentation onto new lines
    pub smart_indent: bool,
    /// Key that opens the completion popup
    pub completion_key: Key,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            language: "sql",
            indent_unit: 4,
            indent_with_tabs: true,
            line_numbers: true,
            match_brackets: true,
            smart_indent: true,
            completion_key: Key::Ctrl(' '),
        }
    }
}

/// The query editing surface
pub struct QueryEditor {
    area: TextArea,
    config: EditorConfig,
    syntax: Option<Syntax>,
    completion: Option<CompletionMenu>,
    highlights: Vec<(std::ops::Range<usize>, String)>,
}

impl QueryEditor {
    /// Create an editor seeded with `initial` under the given configuration
    pub fn new(initial: &str, config: EditorConfig) -> Self {
        let syntax = if config.language == "sql" {
            Syntax::sql()
        } else {
            None
        };
        let mut editor = Self {
            area: TextArea::from_text(initial),
            config,
            syntax,
            completion: None,
            highlights: Vec::new(),
        };
        editor.refresh_syntax();
        editor
    }

    /// Current editor content
    pub fn value(&self) -> String {
        self.area.value()
    }

    /// Replace the editor content
    pub fn set_value(&mut self, text: &str) {
        self.area.set_value(text);
        self.completion = None;
        self.refresh_syntax();
    }

    /// The underlying text area (for rendering)
    pub fn area(&self) -> &TextArea {
        &self.area
    }

    /// The editor configuration
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Cached highlight capture spans over the full text, in byte offsets
    pub fn highlight_spans(&self) -> &[(std::ops::Range<usize>, String)] {
        &self.highlights
    }

    /// The bracket pair at the cursor, if bracket matching is enabled
    pub fn bracket_match(&self) -> Option<((usize, usize), (usize, usize))> {
        if self.config.match_brackets {
            self.area.matching_bracket()
        } else {
            None
        }
    }

    /// The open completion popup, if any
    pub fn completion(&self) -> Option<&CompletionMenu> {
        self.completion.as_ref()
    }

    /// Keep the cursor inside the visible editor rows
    pub fn scroll_to_cursor(&mut self, visible_rows: usize) {
        self.area.scroll_to_cursor(visible_rows);
    }

    /// Offer a key to the editor
    pub fn handle_key(&mut self, key: Key) -> EventResult {
        if self.completion.is_some() {
            return self.handle_completion_key(key);
        }

        if key == self.config.completion_key {
            self.completion = CompletionMenu::open(&self.area.word_before_cursor());
            return EventResult::Consumed;
        }

        match key {
            Key::Tab => {
                self.insert_indent();
                self.after_edit();
                EventResult::Consumed
            }
            Key::BackTab => {
                self.dedent_line();
                self.after_edit();
                EventResult::Consumed
            }
            Key::Enter => {
                self.insert_newline();
                self.after_edit();
                EventResult::Consumed
            }
            Key::Ctrl('v') => {
                if let Some(text) = read_clipboard() {
                    self.area.insert_str(&text);
                    self.after_edit();
                }
                EventResult::Consumed
            }
            _ => match input::resolve_input(key) {
                Some(InputIntent::Type(ch)) => {
                    self.area.insert_char(ch);
                    self.after_edit();
                    EventResult::Consumed
                }
                Some(InputIntent::Delete(dir, granularity)) => {
                    self.area.delete(dir, granularity);
                    self.after_edit();
                    EventResult::Consumed
                }
                Some(InputIntent::Move(dir, granularity)) => {
                    // Page motion uses a nominal page until render clamps it
                    self.area.move_cursor(dir, granularity, 10);
                    EventResult::Consumed
                }
                Some(InputIntent::Accept) => {
                    self.insert_newline();
                    self.after_edit();
                    EventResult::Consumed
                }
                Some(InputIntent::Cancel) | None => EventResult::Ignored,
            },
        }
    }

    /// Key routing while the completion popup is open
    fn handle_completion_key(&mut self, key: Key) -> EventResult {
        let Some(menu) = self.completion.as_mut() else {
            return EventResult::Ignored;
        };
        match key {
            Key::ArrowUp => {
                menu.move_up();
                EventResult::Consumed
            }
            Key::ArrowDown => {
                menu.move_down();
                EventResult::Consumed
            }
            Key::Enter | Key::Tab => {
                let insert = menu.accepted_suffix();
                self.completion = None;
                self.area.insert_str(&insert);
                self.after_edit();
                EventResult::Consumed
            }
            Key::Escape => {
                self.completion = None;
                EventResult::Consumed
            }
            Key::Backspace => {
                self.area.delete(Direction::Left, Granularity::Character);
                self.refilter_completion();
                self.after_edit();
                EventResult::Consumed
            }
            Key::Char(ch) if !ch.is_control() => {
                self.area.insert_char(ch);
                self.refilter_completion();
                self.after_edit();
                EventResult::Consumed
            }
            _ => {
                // Any other key dismisses the popup and is processed normally
                self.completion = None;
                self.handle_key(key)
            }
        }
    }

    fn refilter_completion(&mut self) {
        self.completion = CompletionMenu::open(&self.area.word_before_cursor());
    }

    /// Insert one indent unit at the cursor
    fn insert_indent(&mut self) {
        if self.config.indent_with_tabs {
            self.area.insert_char('\t');
        } else {
            for _ in 0..self.config.indent_unit {
                self.area.insert_char(' ');
            }
        }
    }

    /// Remove one indent unit from the start of the cursor line
    fn dedent_line(&mut self) {
        let (row, col) = self.area.cursor();
        let line = self.area.line(row).unwrap_or("").to_string();
        let (removed, rest) = if let Some(stripped) = line.strip_prefix('\t') {
            (1, stripped.to_string())
        } else {
            let spaces = line
                .chars()
                .take(self.config.indent_unit)
                .take_while(|c| *c == ' ')
                .count();
            (spaces, line[spaces..].to_string())
        };
        if removed == 0 {
            return;
        }
        self.area.replace_line(row, rest);
        self.area.set_cursor(row, col.saturating_sub(removed));
    }

    /// Split the line, carrying indentation when smart indent is on
    fn insert_newline(&mut self) {
        let indent = if self.config.smart_indent {
            let mut indent = self.area.current_indent();
            // Opening a parenthesized block indents one more unit
            if self.area.char_before_cursor() == Some('(') {
                if self.config.indent_with_tabs {
                    indent.push('\t');
                } else {
                    indent.push_str(&" ".repeat(self.config.indent_unit));
                }
            }
            indent
        } else {
            String::new()
        };
        self.area.insert_newline(&indent);
    }

    /// Re-parse syntax and refresh the highlight cache after a mutation
    fn after_edit(&mut self) {
        self.refresh_syntax();
    }

    fn refresh_syntax(&mut self) {
        let text = self.area.value();
        if let Some(syntax) = self.syntax.as_mut() {
            syntax.refresh(&text);
            self.highlights = syntax.highlights(&text);
        }
    }
}

/// Read text from the system clipboard, if available
fn read_clipboard() -> Option<String> {
    arboard::Clipboard::new()
        .ok()
        .and_then(|mut clipboard| clipboard.get_text().ok())
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
