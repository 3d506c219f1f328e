//! Linear system solver for the logistic Newton step.
//!
//! Each IRLS iteration solves a tiny (5x5) symmetric system
//!
//! ```text
//! (X^T W X + lambda R) delta = gradient
//! ```
//!
//! We use SVD rather than a Cholesky factorization: the ridge term keeps the
//! system positive definite for sane inputs, but SVD degrades gracefully if a
//! feature column collapses (zero variance after standardization).

use nalgebra::{DMatrix, DVector};

/// Solve a linear system using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_linear_system(a: &DMatrix<f64>, b: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = a.clone().svd(true, true);

    // Try progressively looser tolerances if the strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(x) = svd.solve(b, tol) {
            if x.iter().all(|v| v.is_finite()) {
                return Some(x);
            }
        }
    }

    None
}
