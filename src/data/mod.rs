//! Synthetic data generation.
//!
//! - vital-sign trajectories (`trajectory`)
//! - logistic training sets (`training`)

pub mod training;
pub mod trajectory;

pub use training::*;
pub use trajectory::*;
