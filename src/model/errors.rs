//! Errors for stage-structured model construction and projection
//! (vital-rate validation, initial-abundance checks, horizon checks).
//!
//! This module defines the model error type, [`ModelError`], used by the
//! matrix builder, the derived-matrix constructors, and the projector. It
//! implements `Display`/`Error` and converts to `PyErr` for PyO3.
//!
//! ## Conventions
//! - **Stages are 0-based** (Juvenile = 0, Subadult = 1, Adult = 2), matching
//!   the matrix row/column indexing.
//! - Survival probabilities must be **finite and within [0, 1]**; fertility
//!   must be **finite and non-negative**. Out-of-domain values are rejected,
//!   never clamped.
//! - Rate names in error payloads are the literature parameter labels
//!   (`S_JJ`, `S_SJ`, `S_SS`, `S_AS`, `S_AA`, `b`) so that diagnostics read
//!   in the same vocabulary as the parameter tables supplied at the call
//!   site.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for model-construction and projection paths that may produce
/// [`ModelError`].
pub type ModelResult<T> = Result<T, ModelError>;

/// Unified error type for matrix construction and projection.
///
/// Covers vital-rate validation, initial-abundance validation, and horizon
/// checks. Implements `Display`/`Error` and converts to a Python
/// `ValueError` at PyO3 boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    // ---- Vital-rate validation ----
    /// A survival or fertility rate is NaN/±inf.
    NonFiniteRate { name: &'static str, value: f64 },

    /// A survival probability lies outside [0, 1].
    SurvivalOutOfRange { name: &'static str, value: f64 },

    /// The sex-adjusted fertility rate is negative.
    NegativeFertility { value: f64 },

    // ---- Initial-abundance validation ----
    /// An initial stage abundance is NaN/±inf.
    NonFiniteAbundance { stage: usize, value: f64 },

    /// An initial stage abundance is negative.
    NegativeAbundance { stage: usize, value: f64 },

    // ---- Projection configuration ----
    /// Projection horizon must be at least 1 (T = 1 returns only N(0)).
    InvalidHorizon { horizon: usize },
}

impl std::error::Error for ModelError {}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::NonFiniteRate { name, value } => {
                write!(f, "Rate {name} = {value} is not finite.")
            }
            ModelError::SurvivalOutOfRange { name, value } => {
                write!(f, "Survival {name} = {value} must lie in [0, 1].")
            }
            ModelError::NegativeFertility { value } => {
                write!(f, "Fertility b = {value} must be non-negative.")
            }
            ModelError::NonFiniteAbundance { stage, value } => {
                write!(f, "Initial abundance for stage {stage} is not finite: {value}.")
            }
            ModelError::NegativeAbundance { stage, value } => {
                write!(f, "Initial abundance for stage {stage} is negative: {value}.")
            }
            ModelError::InvalidHorizon { horizon } => {
                write!(f, "Invalid projection horizon: {horizon}. Must be at least 1.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ModelError> for PyErr {
    fn from(err: ModelError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
