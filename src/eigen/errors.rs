//! eigen::errors — error types for dominant-eigenvalue analysis.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the eigen-analysis subtree,
//! together with a conversion layer to Python exceptions for PyO3-based
//! bindings. For the biologically valid non-negative primitive matrices
//! this crate targets, the dominant eigenvalue is real, positive, and
//! simple; every variant here describes a way a supplied matrix can fail
//! that expectation.
//!
//! Key behaviors
//! -------------
//! - Define [`EigenResult`] and [`EigenError`] as the canonical result and
//!   error types for eigen-analysis and its consumers.
//! - Attach `Display` messages phrased in terms of the domain contract
//!   (realness, positivity, simplicity of λ) rather than backend details.
//! - Implement `From<EigenError> for PyErr` to surface degenerate matrices
//!   as `ValueError` to Python callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - A degenerate dominant eigenvalue indicates either a malformed matrix
//!   or a reducible/periodic life cycle; it is reported, never silently
//!   coerced to a real or positive value.
//! - Error values are small and cheap to clone.
//!
//! Conventions
//! -----------
//! - Model-construction errors live in `model::errors`; sweep errors in
//!   `perturbation::errors`. This module covers only the eigen contract.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for eigen-analysis paths that may produce [`EigenError`].
pub type EigenResult<T> = Result<T, EigenError>;

/// Error conditions for dominant-eigenvalue analysis.
///
/// All variants correspond to the spec's "degenerate matrix" failure mode:
/// the analysis cannot certify a unique, real, positive dominant
/// eigenvalue, or cannot extract well-formed eigenvectors for it.
#[derive(Debug, Clone, PartialEq)]
pub enum EigenError {
    //------ Dominant-eigenvalue selection ------
    /// The largest-modulus eigenvalue has a non-negligible imaginary part.
    ComplexDominant { re: f64, im: f64 },

    /// The dominant eigenvalue is real but not strictly positive.
    NonPositiveDominant { value: f64 },

    /// Another eigenvalue matches the dominant modulus within tolerance,
    /// so the dominant eigenvalue is not simple (reducible or periodic
    /// life cycle).
    RepeatedDominant { modulus: f64 },

    //------ Eigenvector extraction ------
    /// The eigenvector for λ could not be extracted or normalized
    /// (missing decomposition basis, sign-indefinite components, or a
    /// near-zero u·v inner product).
    EigenvectorFailure { reason: &'static str },
}

impl std::error::Error for EigenError {}

impl std::fmt::Display for EigenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EigenError::ComplexDominant { re, im } => {
                write!(f, "Dominant eigenvalue {re} + {im}i is not real.")
            }
            EigenError::NonPositiveDominant { value } => {
                write!(f, "Dominant eigenvalue {value} is not strictly positive.")
            }
            EigenError::RepeatedDominant { modulus } => {
                write!(f, "Dominant eigenvalue modulus {modulus} is not simple.")
            }
            EigenError::EigenvectorFailure { reason } => {
                write!(f, "Failed to extract dominant eigenvector: {reason}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<EigenError> for PyErr {
    fn from(err: EigenError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
