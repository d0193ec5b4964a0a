//! eigen::analysis — dominant eigenvalue, stable stage distribution, and
//! reproductive value.
//!
//! Purpose
//! -------
//! Implement the domain contract of eigen-analysis for the stage-transition
//! matrix: select the dominant eigenvalue λ (asymptotic yearly growth
//! rate), verify it is real, strictly positive, and simple, and produce the
//! two normalized eigenvectors — the right eigenvector v (stable stage
//! distribution, components summing to 1) and the left eigenvector u
//! (reproductive values, scaled so u·v = 1). The u·v = 1 normalization is
//! what makes the sensitivity formula S[i][j] = u[i]·v[j] dimensionally
//! correct downstream.
//!
//! Key behaviors
//! -------------
//! - Query an [`EigenBackend`] for the full spectrum and select the
//!   largest-modulus eigenvalue.
//! - Reject complex-dominant, non-positive, and non-simple dominant
//!   eigenvalues with the corresponding [`EigenError`] instead of silently
//!   returning a coerced value.
//! - Extract v and u as null vectors of P − λI and (P − λI)ᵀ, fix their
//!   signs (a Perron vector is non-negative), and apply the two
//!   normalizations.
//! - Retain the sub-dominant modulus for the damping-ratio diagnostic
//!   λ / |λ₂| (rate of decay of transient dynamics).
//!
//! Invariants & assumptions
//! ------------------------
//! - Input matrices come from [`StageMatrix`], so they are non-negative
//!   with the fixed life-cycle sparsity pattern; primitivity is *checked*
//!   indirectly (a reducible or periodic cycle surfaces as a modulus tie),
//!   never assumed.
//! - Realness and simplicity decisions use the relative tolerance
//!   [`EIGEN_EPS`] against the dominant modulus.
//! - Analysis is a pure function of the matrix: re-running it on the same
//!   matrix yields identical results.
//!
//! Conventions
//! -----------
//! - The selection rule and normalizations live here, outside the backend,
//!   so the domain behavior cannot vary with the numerical method
//!   (see `eigen::backend`).
//!
//! Downstream usage
//! ----------------
//! - [`SensitivityOutcome`](crate::perturbation::sensitivity::SensitivityOutcome)
//!   consumes (λ, u, v); the perturbation sweep re-runs
//!   [`EigenOutcome::analyze`] per derived matrix.
//!
//! Testing notes
//! -------------
//! - Unit tests verify the reference parameter set (λ ≈ 0.92737, stable
//!   distribution ≈ (0.512, 0.225, 0.262)), both normalizations, the
//!   residual equations Pv = λv and uᵀP = λuᵀ, idempotence, and rejection
//!   of a periodic life cycle.

use crate::eigen::backend::{EIGEN_EPS, EigenBackend, SchurBackend};
use crate::eigen::errors::{EigenError, EigenResult};
use crate::model::matrix::StageMatrix;
use nalgebra::{Matrix3, Vector3};

/// Outcome of dominant-eigenvalue analysis of a stage-transition matrix.
///
/// Fields
/// ------
/// - `lambda`: dominant eigenvalue λ — the asymptotic per-year growth rate.
/// - `stable_distribution`: right eigenvector v, normalized to sum to 1;
///   the long-run proportional breakdown of the population across stages.
/// - `reproductive_value`: left eigenvector u, scaled so u·v = 1; the
///   relative contribution of one individual in each stage to future
///   growth.
/// - `subdominant_modulus`: |λ₂|, kept for the damping-ratio diagnostic.
///
/// Invariants
/// ----------
/// - `lambda` is real, strictly positive, and simple for every constructed
///   value; degenerate spectra never reach this type.
/// - `stable_distribution` components are non-negative and sum to 1.
/// - `reproductive_value · stable_distribution = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenOutcome {
    lambda: f64,
    stable_distribution: Vector3<f64>,
    reproductive_value: Vector3<f64>,
    subdominant_modulus: f64,
}

impl EigenOutcome {
    /// Analyze a stage-transition matrix with the default
    /// [`SchurBackend`].
    ///
    /// See [`EigenOutcome::analyze_with`] for the full contract.
    pub fn analyze(matrix: &StageMatrix) -> EigenResult<Self> {
        Self::analyze_with(matrix, &SchurBackend)
    }

    /// Analyze a stage-transition matrix with an explicit backend.
    ///
    /// Parameters
    /// ----------
    /// - `matrix`: `&StageMatrix`
    ///   The transition matrix P to analyze.
    /// - `backend`: `&B`
    ///   Numerical backend supplying raw spectra and null vectors; the
    ///   selection rule and normalizations applied here are backend-
    ///   independent.
    ///
    /// Returns
    /// -------
    /// `EigenResult<EigenOutcome>`
    ///   λ with both normalized eigenvectors on success.
    ///
    /// Errors
    /// ------
    /// - [`EigenError::ComplexDominant`]
    ///   The largest-modulus eigenvalue has an imaginary part exceeding
    ///   `EIGEN_EPS` relative to its modulus.
    /// - [`EigenError::NonPositiveDominant`]
    ///   λ is real but ≤ 0 (including the all-zero matrix).
    /// - [`EigenError::RepeatedDominant`]
    ///   Another eigenvalue matches the dominant modulus within tolerance
    ///   (reducible or periodic life cycle; λ not simple).
    /// - [`EigenError::EigenvectorFailure`]
    ///   The eigenvector could not be extracted, has mixed signs, or
    ///   u·v is numerically zero.
    ///
    /// Notes
    /// -----
    /// - v and u are computed as null vectors of P − λI and its transpose;
    ///   sign is fixed so the dominant vectors are non-negative, then v is
    ///   scaled to sum to 1 and u is scaled so u·v = 1.
    pub fn analyze_with<B: EigenBackend>(matrix: &StageMatrix, backend: &B) -> EigenResult<Self> {
        let eigenvalues = backend.eigenvalues(matrix.matrix());
        let (lambda, subdominant_modulus) = select_dominant(&eigenvalues)?;

        let shifted = matrix.matrix() - Matrix3::identity() * lambda;

        let right = backend.null_vector(&shifted)?;
        let stable_distribution = normalize_to_sum(right)?;

        let left = backend.null_vector(&shifted.transpose())?;
        let reproductive_value = normalize_against(left, &stable_distribution)?;

        Ok(EigenOutcome { lambda, stable_distribution, reproductive_value, subdominant_modulus })
    }

    /// Dominant eigenvalue λ: the asymptotic per-year growth rate.
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Stable stage distribution v (components sum to 1).
    #[inline]
    pub fn stable_distribution(&self) -> &Vector3<f64> {
        &self.stable_distribution
    }

    /// Reproductive values u (scaled so u·v = 1).
    #[inline]
    pub fn reproductive_value(&self) -> &Vector3<f64> {
        &self.reproductive_value
    }

    /// Damping ratio λ / |λ₂|: how fast transient dynamics decay relative
    /// to the asymptotic growth. `None` when the sub-dominant modulus is
    /// numerically zero.
    pub fn damping_ratio(&self) -> Option<f64> {
        if self.subdominant_modulus <= EIGEN_EPS * self.lambda {
            None
        } else {
            Some(self.lambda / self.subdominant_modulus)
        }
    }
}

//
// ---------- Private helpers (compact docs) ----------
//

/// Select the dominant eigenvalue from a full spectrum.
///
/// Returns (λ, |λ₂|) where λ is the largest-modulus eigenvalue, certified
/// real (|im| ≤ EIGEN_EPS·|λ|), strictly positive, and simple (every other
/// modulus smaller by more than EIGEN_EPS·|λ|), and |λ₂| is the largest
/// remaining modulus.
fn select_dominant(eigenvalues: &[nalgebra::Complex<f64>; 3]) -> EigenResult<(f64, f64)> {
    let mut dominant_index = 0;
    for i in 1..3 {
        if eigenvalues[i].norm() > eigenvalues[dominant_index].norm() {
            dominant_index = i;
        }
    }
    let dominant = eigenvalues[dominant_index];
    let dominant_modulus = dominant.norm();

    if dominant_modulus == 0.0 {
        return Err(EigenError::NonPositiveDominant { value: 0.0 });
    }
    if dominant.im.abs() > EIGEN_EPS * dominant_modulus {
        return Err(EigenError::ComplexDominant { re: dominant.re, im: dominant.im });
    }
    if dominant.re <= 0.0 {
        return Err(EigenError::NonPositiveDominant { value: dominant.re });
    }

    let mut subdominant_modulus = 0.0_f64;
    for (i, eig) in eigenvalues.iter().enumerate() {
        if i == dominant_index {
            continue;
        }
        let modulus = eig.norm();
        if dominant_modulus - modulus <= EIGEN_EPS * dominant_modulus {
            return Err(EigenError::RepeatedDominant { modulus: dominant_modulus });
        }
        subdominant_modulus = subdominant_modulus.max(modulus);
    }
    Ok((dominant.re, subdominant_modulus))
}

/// Fix the sign of a raw null vector so the dominant eigenvector is
/// non-negative.
///
/// The backend's null vector has arbitrary sign; a Perron vector does not.
/// Flips by the component sum, then rejects genuinely mixed-sign vectors
/// (which indicate the matrix is not primitive after all).
fn orient_nonnegative(raw: Vector3<f64>, mixed_sign_reason: &'static str) -> EigenResult<Vector3<f64>> {
    let oriented = if raw.sum() < 0.0 { -raw } else { raw };
    // Unit-norm input, so an absolute floor is a relative one too.
    if oriented.iter().any(|&c| c < -1e-8) {
        return Err(EigenError::EigenvectorFailure { reason: mixed_sign_reason });
    }
    Ok(oriented)
}

/// Scale the right eigenvector so its components sum to 1.
fn normalize_to_sum(raw: Vector3<f64>) -> EigenResult<Vector3<f64>> {
    let oriented = orient_nonnegative(raw, "stable stage distribution has mixed signs")?;
    let sum = oriented.sum();
    if sum <= EIGEN_EPS {
        return Err(EigenError::EigenvectorFailure {
            reason: "stable stage distribution sums to zero",
        });
    }
    Ok(oriented / sum)
}

/// Scale the left eigenvector so u·v = 1 against the already-normalized
/// stable distribution.
fn normalize_against(raw: Vector3<f64>, stable: &Vector3<f64>) -> EigenResult<Vector3<f64>> {
    let oriented = orient_nonnegative(raw, "reproductive value has mixed signs")?;
    let inner = oriented.dot(stable);
    if inner <= EIGEN_EPS {
        return Err(EigenError::EigenvectorFailure { reason: "u·v is numerically zero" });
    }
    Ok(oriented / inner)
}
