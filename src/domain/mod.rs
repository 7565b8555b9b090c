pub mod models;
pub mod store;
pub mod errors;

pub use models::*;
pub use store::*;
pub use errors::*;
