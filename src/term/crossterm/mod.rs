//! Crossterm-based terminal backend
//! Cross-platform terminal operations using crossterm

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use std::time::Duration;

use crate::key::Key;
use crate::term::{Size, TerminalBackend};

/// Format a failed terminal operation
fn fail(op: &str, err: impl std::fmt::Display) -> String {
    format!("terminal {op} failed: {err}")
}

/// Crossterm-based terminal backend implementation
pub struct CrosstermBackend {
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl CrosstermBackend {
    pub fn new() -> Result<Self, String> {
        Ok(CrosstermBackend {
            raw_mode_enabled: false,
            alternate_screen_enabled: false,
        })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn init(&mut self) -> Result<(), String> {
        // Alternate screen keeps the user's scrollback intact
        execute!(stdout(), terminal::EnterAlternateScreen)
            .map_err(|e| fail("alternate screen", e))?;
        self.alternate_screen_enabled = true;

        terminal::enable_raw_mode().map_err(|e| fail("raw mode", e))?;
        self.raw_mode_enabled = true;

        execute!(stdout(), cursor::Hide).map_err(|e| fail("cursor hide", e))?;

        Ok(())
    }

    fn deinit(&mut self) {
        let _ = execute!(stdout(), cursor::Show);

        if std::mem::take(&mut self.raw_mode_enabled) {
            let _ = terminal::disable_raw_mode();
        }
        if std::mem::take(&mut self.alternate_screen_enabled) {
            let _ = execute!(stdout(), terminal::LeaveAlternateScreen);
        }
    }

    fn poll(&mut self, timeout: Duration) -> Result<bool, String> {
        event::poll(timeout).map_err(|e| fail("event poll", e))
    }

    fn read_key(&mut self) -> Result<Option<Key>, String> {
        match event::read().map_err(|e| fail("event read", e))? {
            Event::Key(key_event) => {
                if key_event.kind == event::KeyEventKind::Press {
                    Ok(translate_key_event(key_event))
                } else {
                    // Ignore key releases
                    Ok(None)
                }
            }
            Event::Resize(cols, rows) => Ok(Some(Key::Resize(cols, rows))),
            _ => Ok(None),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), String> {
        stdout()
            .write_all(bytes)
            .and_then(|()| stdout().flush())
            .map_err(|e| fail("write", e))
    }

    fn get_size(&self) -> Result<Size, String> {
        terminal::size()
            .map(|(cols, rows)| Size { rows, cols })
            .map_err(|e| fail("size query", e))
    }

    fn clear_screen(&mut self) -> Result<(), String> {
        execute!(stdout(), terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
            .map_err(|e| fail("clear", e))
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<(), String> {
        execute!(stdout(), cursor::MoveTo(col, row)).map_err(|e| fail("cursor move", e))
    }

    fn hide_cursor(&mut self) -> Result<(), String> {
        execute!(stdout(), cursor::Hide).map_err(|e| fail("cursor hide", e))
    }

    fn show_cursor(&mut self) -> Result<(), String> {
        execute!(stdout(), cursor::Show).map_err(|e| fail("cursor show", e))
    }
}

/// Translate crossterm `KeyEvent` to our Key enum
/// Returns None for keys the widget has no use for
pub(crate) fn translate_key_event(key_event: KeyEvent) -> Option<Key> {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    let key = match key_event.code {
        KeyCode::Char(ch) => {
            // Some terminals deliver Enter as a character
            if ch == '\r' || ch == '\n' {
                if ctrl {
                    Key::CtrlEnter
                } else {
                    Key::Enter
                }
            } else if ctrl {
                Key::Ctrl(ch.to_ascii_lowercase())
            } else {
                Key::Char(ch)
            }
        }
        KeyCode::F(n) => Key::F(n),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => {
            if ctrl {
                Key::CtrlEnter
            } else {
                Key::Enter
            }
        }
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Left => {
            if ctrl {
                Key::CtrlArrowLeft
            } else {
                Key::ArrowLeft
            }
        }
        KeyCode::Right => {
            if ctrl {
                Key::CtrlArrowRight
            } else {
                Key::ArrowRight
            }
        }
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Delete => Key::Delete,
        _ => return None,
    };

    Some(key)
}
