//! `ews-sim` library crate.
//!
//! The binary (`ews`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the generator/scorer pair is reusable from other front-ends
//! - presentation (tables, plots, exports) stays out of the core modules

pub mod app;
pub mod cli;
pub mod data;
pub mod debug;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
pub mod score;
