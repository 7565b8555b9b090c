//! Keeper - Terminal Note Organizer Library
//!
//! Folders of named, aliased text sheets, persisted to a local store and
//! browsed through a command-line surface or a three-pane terminal dashboard.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;
pub mod cli;

pub use domain::*;
pub use application::*;
