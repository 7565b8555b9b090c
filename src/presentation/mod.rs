//! Presentation layer handling the terminal dashboard and user input.
//!
//! This module lays out the three panes, paints them cell by cell into the
//! ratatui buffer, maps keys to navigation actions, and runs the event loop.

pub mod event_loop;
pub mod grid;
pub mod input;
pub mod layout;
pub mod terminal;
pub mod theme;
pub mod ui;

pub use event_loop::*;
pub use input::*;
pub use layout::*;
pub use theme::*;
pub use ui::*;
