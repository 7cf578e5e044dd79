//! Shared input handling logic
//! Translates raw keys into abstract editing intents (Type, Move, Delete, ...)

use crate::key::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Logical unit used to describe cursor movement and edit scope.
///
/// A `Granularity` represents *how much* content an operation applies to,
/// independent of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// A single Unicode scalar value (code point).
    Character,
    /// A contiguous sequence of non-separator characters.
    Word,
    /// A logical line of text.
    Line,
    /// A viewport-sized vertical region.
    Page,
    /// The entire text.
    Document,
}

/// Abstract intent for text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIntent {
    /// Type a character
    Type(char),
    /// Move cursor
    Move(Direction, Granularity),
    /// Delete content
    Delete(Direction, Granularity),
    /// Accept input (Enter)
    Accept,
    /// Cancel/Exit (Escape)
    Cancel,
}

/// Resolve a key into an input intent
pub fn resolve_input(key: Key) -> Option<InputIntent> {
    match key {
        Key::Char(ch) => {
            if ch.is_control() {
                None
            } else {
                Some(InputIntent::Type(ch))
            }
        }

        Key::Enter => Some(InputIntent::Accept),
        Key::Escape => Some(InputIntent::Cancel),

        // Deletion
        Key::Backspace => Some(InputIntent::Delete(Direction::Left, Granularity::Character)),
        Key::Delete => Some(InputIntent::Delete(
            Direction::Right,
            Granularity::Character,
        )),

        // Navigation
        Key::ArrowLeft => Some(InputIntent::Move(Direction::Left, Granularity::Character)),
        Key::ArrowRight => Some(InputIntent::Move(Direction::Right, Granularity::Character)),
        Key::ArrowUp => Some(InputIntent::Move(Direction::Up, Granularity::Character)),
        Key::ArrowDown => Some(InputIntent::Move(Direction::Down, Granularity::Character)),

        Key::CtrlArrowLeft => Some(InputIntent::Move(Direction::Left, Granularity::Word)),
        Key::CtrlArrowRight => Some(InputIntent::Move(Direction::Right, Granularity::Word)),

        Key::Home => Some(InputIntent::Move(Direction::Left, Granularity::Line)),
        Key::End => Some(InputIntent::Move(Direction::Right, Granularity::Line)),
        Key::PageUp => Some(InputIntent::Move(Direction::Up, Granularity::Page)),
        Key::PageDown => Some(InputIntent::Move(Direction::Down, Granularity::Page)),

        _ => None,
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
