//! Small numeric helpers shared by the scorers.

pub mod solve;
pub mod standardize;

pub use solve::*;
pub use standardize::*;
