//! eigen::backend — numerical eigen-decomposition behind a trait.
//!
//! Purpose
//! -------
//! Separate the *numerical* linear-algebra backend from the *domain*
//! contract of eigen-analysis. The domain logic (dominant-eigenvalue
//! selection, realness/positivity/simplicity checks, and the two
//! normalizations) lives in [`analysis`](crate::eigen::analysis) and only
//! asks a backend two questions: "what are the eigenvalues of this real
//! 3×3 matrix?" and "give me a vector spanning the null space of this
//! (singular) real 3×3 matrix". Swapping the numerical method — QR, power
//! iteration with deflation, a different library — cannot change the
//! domain behavior.
//!
//! Key behaviors
//! -------------
//! - Define the [`EigenBackend`] capability trait.
//! - Provide [`SchurBackend`], the default implementation: eigenvalues via
//!   nalgebra's Schur-based `complex_eigenvalues`, null vectors via SVD
//!   (right singular vector of the smallest singular value).
//!
//! Invariants & assumptions
//! ------------------------
//! - `eigenvalues` returns all three eigenvalues (with multiplicity), in
//!   no particular order, as complex numbers.
//! - `null_vector` is only called with matrices of the form P − λI where λ
//!   is an eigenvalue of P, so the matrix is singular up to roundoff; the
//!   smallest singular value is then numerically zero and its right
//!   singular vector spans the eigenspace.
//! - Returned null vectors have unit Euclidean norm but arbitrary sign;
//!   sign and scale conventions are the caller's responsibility.
//!
//! Conventions
//! -----------
//! - Tolerances for interpreting near-zero imaginary parts or modulus ties
//!   belong to the analysis layer ([`EIGEN_EPS`]), not to backends.
//!
//! Testing notes
//! -------------
//! - Unit tests check the Schur backend against matrices with known
//!   spectra (diagonal and rotation-like) and verify the null-vector
//!   extraction on a rank-deficient matrix.

use crate::eigen::errors::{EigenError, EigenResult};
use nalgebra::{Complex, Matrix3, Vector3};

/// Relative tolerance for eigen-analysis decisions: an imaginary part or a
/// modulus gap at most `EIGEN_EPS` times the dominant modulus is treated as
/// numerically zero.
pub const EIGEN_EPS: f64 = 1e-9;

/// Capability trait: numerical eigen-decomposition of a real 3×3 matrix.
///
/// Implementations provide raw spectra and null vectors; the dominant-
/// eigenvalue selection rule and the stable-distribution/reproductive-value
/// normalizations are deliberately kept out of this trait so they cannot
/// vary between backends.
pub trait EigenBackend {
    /// All eigenvalues of `matrix`, with multiplicity, in no particular
    /// order.
    fn eigenvalues(&self, matrix: &Matrix3<f64>) -> [Complex<f64>; 3];

    /// A unit-norm vector spanning the numerical null space of a singular
    /// real matrix (the right singular vector of its smallest singular
    /// value). Sign is arbitrary.
    ///
    /// # Errors
    /// - [`EigenError::EigenvectorFailure`] if the decomposition cannot
    ///   produce a basis.
    fn null_vector(&self, matrix: &Matrix3<f64>) -> EigenResult<Vector3<f64>>;
}

/// Default backend: nalgebra Schur decomposition for eigenvalues and SVD
/// for null-space extraction.
///
/// Stateless; a shared instance can be reused across analyses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchurBackend;

impl EigenBackend for SchurBackend {
    fn eigenvalues(&self, matrix: &Matrix3<f64>) -> [Complex<f64>; 3] {
        let eigs = matrix.complex_eigenvalues();
        [eigs[0], eigs[1], eigs[2]]
    }

    fn null_vector(&self, matrix: &Matrix3<f64>) -> EigenResult<Vector3<f64>> {
        let svd = (*matrix).svd(true, true);
        let v_t = svd.v_t.ok_or(EigenError::EigenvectorFailure {
            reason: "SVD did not produce right singular vectors",
        })?;

        // Smallest singular value located explicitly; nalgebra's ordering
        // guarantee is not relied upon.
        let mut min_index = 0;
        for i in 1..3 {
            if svd.singular_values[i] < svd.singular_values[min_index] {
                min_index = i;
            }
        }
        Ok(v_t.row(min_index).transpose())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Schur-backend eigenvalues for a diagonal matrix (known real
    //   spectrum) and a block-rotation matrix (known complex pair).
    // - Null-vector extraction for a rank-2 matrix with a known kernel.
    //
    // They intentionally DO NOT cover:
    // - Dominance selection or normalization, which live in
    //   eigen::analysis.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that the Schur backend recovers the spectrum of a diagonal
    // matrix.
    //
    // Given
    // -----
    // - diag(3, -1, 0.5).
    //
    // Expect
    // ------
    // - Eigenvalues {3, -1, 0.5}, all with zero imaginary part.
    fn schur_backend_recovers_diagonal_spectrum() {
        // Arrange
        let m = Matrix3::from_diagonal(&Vector3::new(3.0, -1.0, 0.5));

        // Act
        let mut eigs = SchurBackend.eigenvalues(&m);

        // Assert
        eigs.sort_by(|a, b| a.re.partial_cmp(&b.re).expect("finite eigenvalues"));
        let expected = [-1.0, 0.5, 3.0];
        for (eig, want) in eigs.iter().zip(expected) {
            assert_relative_eq!(eig.re, want, max_relative = 1e-12);
            assert_relative_eq!(eig.im, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a rotation block produces a complex-conjugate pair, so
    // the backend reports genuinely complex spectra faithfully.
    //
    // Given
    // -----
    // - A matrix with a 2×2 rotation block (cos θ = 0, sin θ = 1) and a
    //   third diagonal entry 2.
    //
    // Expect
    // ------
    // - Eigenvalues {±i, 2}.
    fn schur_backend_reports_complex_pair_for_rotation_block() {
        // Arrange
        let m = Matrix3::new(
            0.0, -1.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 0.0, 2.0,
        );

        // Act
        let eigs = SchurBackend.eigenvalues(&m);

        // Assert
        let real_count = eigs.iter().filter(|e| e.im.abs() < 1e-12).count();
        assert_eq!(real_count, 1, "exactly one real eigenvalue expected, got {eigs:?}");
        let complex: Vec<_> = eigs.iter().filter(|e| e.im.abs() >= 1e-12).collect();
        assert_eq!(complex.len(), 2);
        for eig in complex {
            assert_relative_eq!(eig.norm(), 1.0, max_relative = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify null-vector extraction on a singular matrix with a known
    // kernel.
    //
    // Given
    // -----
    // - diag(1, 1, 0), whose kernel is spanned by e₃.
    //
    // Expect
    // ------
    // - A unit vector parallel to (0, 0, 1), up to sign.
    fn schur_backend_null_vector_spans_known_kernel() {
        // Arrange
        let m = Matrix3::from_diagonal(&Vector3::new(1.0, 1.0, 0.0));

        // Act
        let v = SchurBackend.null_vector(&m).expect("SVD should produce a basis");

        // Assert
        assert_relative_eq!(v.norm(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(v[2].abs(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(v[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(v[1], 0.0, epsilon = 1e-12);
    }
}
