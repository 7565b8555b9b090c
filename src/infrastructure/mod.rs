//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns like
//! the on-disk store, the external editor, configuration and logging.

pub mod config;
pub mod editor;
pub mod logging;
pub mod persistence;

pub use config::*;
pub use persistence::*;
