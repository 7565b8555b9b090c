//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer:
//! the dashboard's navigation state machine and the operations behind the
//! command-line surface.

pub mod commands;
pub mod state;

pub use state::*;
