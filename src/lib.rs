//! Querypad - a terminal SQL exercise widget
//!
//! A student edits a query, submits it to a grading endpoint, and the
//! widget renders the verdict next to the expected and actual result sets.

pub mod app;
pub mod color;
pub mod constants;
pub mod controller;
pub mod editor;
pub mod error;
pub mod input;
pub mod jobs;
pub mod key;
pub mod notification;
pub mod protocol;
pub mod render;
pub mod screen;
pub mod status;
pub mod syntax;
pub mod term;
pub mod textarea;
pub mod transport;

#[cfg(test)]
pub mod test_utils;
