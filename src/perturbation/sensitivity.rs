//! perturbation::sensitivity — sensitivity and elasticity of λ.
//!
//! Purpose
//! -------
//! Quantify how the asymptotic growth rate λ responds to each entry of the
//! transition matrix. For a matrix P with dominant eigenvalue λ, stable
//! stage distribution v, and reproductive values u normalized so u·v = 1:
//!
//! - Sensitivity S[i][j] = u[i] · v[j] — the partial derivative ∂λ/∂P[i][j].
//! - Elasticity E[i][j] = (P[i][j] / λ) · S[i][j] — the proportional
//!   (log-log) sensitivity.
//!
//! Key behaviors
//! -------------
//! - Compute both matrices in one pass over all nine positions.
//! - Preserve the sensitivity/elasticity distinction at structural zeros:
//!   sensitivity is defined at every position (it measures hypothetical
//!   responsiveness, independent of the entry's current value), while
//!   elasticity at a zero entry is exactly 0 (no part of λ is attributable
//!   to a transition that does not occur).
//!
//! Invariants & assumptions
//! ------------------------
//! - The supplied [`EigenOutcome`] belongs to the supplied matrix; the
//!   u·v = 1 normalization it guarantees is what makes S a derivative.
//! - For a primitive P with simple λ the elasticities sum to 1 across all
//!   positions (λ is degree-1 homogeneous in P). The sum is exposed as a
//!   diagnostic, not re-normalized.
//!
//! Conventions
//! -----------
//! - Sensitivity is a linear approximation at the current point; the
//!   perturbation sweep (`perturbation::sweep`) recomputes λ by direct
//!   re-analysis precisely because large perturbations leave the linear
//!   regime. Use S/E to rank transitions, the sweep to trace λ curves.
//!
//! Downstream usage
//! ----------------
//! - Reporting reads the ranking of diagonal sensitivities (adult >
//!   subadult > juvenile in the reference regime) and the elasticity
//!   breakdown; the sweep uses the ranking to pick targets.
//!
//! Testing notes
//! -------------
//! - Unit tests verify the reference sensitivity values and their ranking,
//!   exact zeros of E at structural-zero positions, and the
//!   elasticity-sum identity.

use crate::eigen::analysis::EigenOutcome;
use crate::model::matrix::StageMatrix;
use nalgebra::Matrix3;

/// Sensitivity and elasticity matrices of λ with respect to each entry of
/// a transition matrix.
///
/// Fields
/// ------
/// - `sensitivity`: S[i][j] = u[i]·v[j] at all nine positions.
/// - `elasticity`: E[i][j] = (P[i][j]/λ)·S[i][j]; exactly 0 wherever
///   P[i][j] = 0, in particular at the structural zeros.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityOutcome {
    sensitivity: Matrix3<f64>,
    elasticity: Matrix3<f64>,
}

impl SensitivityOutcome {
    /// Compute sensitivity and elasticity from a matrix and its
    /// eigen-analysis.
    ///
    /// Parameters
    /// ----------
    /// - `matrix`: `&StageMatrix`
    ///   The transition matrix P.
    /// - `eigen`: `&EigenOutcome`
    ///   The eigen-analysis of that same matrix (λ, v, u with u·v = 1).
    ///   Pairing an outcome with a different matrix produces meaningless
    ///   values; the types cannot enforce the pairing, so callers own it.
    ///
    /// Returns
    /// -------
    /// `SensitivityOutcome`
    ///   Both 3×3 matrices. No failure modes of its own: the inputs were
    ///   validated where they were produced, and λ > 0 is an
    ///   [`EigenOutcome`] invariant.
    pub fn from_eigen(matrix: &StageMatrix, eigen: &EigenOutcome) -> Self {
        let u = eigen.reproductive_value();
        let v = eigen.stable_distribution();
        let lambda = eigen.lambda();

        let mut sensitivity = Matrix3::zeros();
        let mut elasticity = Matrix3::zeros();
        for i in 0..3 {
            for j in 0..3 {
                let s = u[i] * v[j];
                sensitivity[(i, j)] = s;
                // Exactly zero when the entry is zero, structural or not.
                elasticity[(i, j)] = matrix.entry(i, j) / lambda * s;
            }
        }
        SensitivityOutcome { sensitivity, elasticity }
    }

    /// Sensitivity matrix S (∂λ/∂P[i][j] at every position).
    #[inline]
    pub fn sensitivity(&self) -> &Matrix3<f64> {
        &self.sensitivity
    }

    /// Elasticity matrix E (proportional contributions to λ).
    #[inline]
    pub fn elasticity(&self) -> &Matrix3<f64> {
        &self.elasticity
    }

    /// Sum of all elasticities. Equals 1 (up to roundoff) for a primitive
    /// matrix with simple λ; exposed as a diagnostic of that identity.
    pub fn elasticity_sum(&self) -> f64 {
        self.elasticity.iter().sum()
    }
}
