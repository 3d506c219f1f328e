//! Input/output helpers.
//!
//! - per-hour result exports (CSV) (`export`)
//! - model JSON read/write (`model`)

pub mod export;
pub mod model;

pub use export::*;
pub use model::*;
