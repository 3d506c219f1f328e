//! Risk scoring.
//!
//! - weighted-threshold rule scorer (`rule`)
//! - logistic scorer fit on synthetic data (`logistic`)
//! - per-trajectory assessment (`assess`)

pub mod assess;
pub mod logistic;
pub mod rule;

pub use assess::*;
pub use logistic::*;
pub use rule::*;
