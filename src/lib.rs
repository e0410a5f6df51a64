//! A terminal page picker: a "select all" header, a scrollable list of
//! checkable rows and a Done button that reports the chosen ids.
//!
//! The selection logic lives in [`picker`] and has no terminal dependency;
//! [`app`] and [`ui`] drive it from crossterm input and draw it with ratatui.

pub mod app;
pub mod config;
pub mod logging;
pub mod picker;
pub mod ui;
