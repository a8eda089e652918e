//! food-board/crates/domains/src/lib.rs
//!
//! Entity types and interface definitions for the food-sharing board.

pub mod errors;
pub mod models;
pub mod ports;

// Re-exporting for easier access in other crates
pub use errors::*;
pub use models::*;
pub use ports::*;
