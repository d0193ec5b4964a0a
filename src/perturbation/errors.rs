//! perturbation::errors — error types for sweeps and sensitivity analysis.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the perturbation subtree:
//! sweep configuration failures plus wrapped model and eigen errors from
//! the re-projection pipeline each sweep step runs.
//!
//! Conventions
//! -----------
//! - A sweep step that would push the target survival outside [0, 1] is
//!   **not** an error: the sweep halts and reports the truncated prefix
//!   with a flag. Only malformed configuration (zero steps, non-finite or
//!   zero δ) and genuinely degenerate derived matrices produce
//!   [`PerturbError`] values.
//! - `From` conversions adapt subtree errors
//!   ([`ModelError`](crate::model::errors::ModelError),
//!   [`EigenError`](crate::eigen::errors::EigenError)) so sweep internals
//!   can propagate with `?`.

use crate::eigen::errors::EigenError;
use crate::model::errors::ModelError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for perturbation paths that may produce [`PerturbError`].
pub type PerturbResult<T> = Result<T, PerturbError>;

/// Error conditions for perturbation sweeps.
#[derive(Debug, Clone, PartialEq)]
pub enum PerturbError {
    //------ Sweep configuration ------
    /// Step count must be at least 1.
    InvalidStepCount { steps: usize },

    /// The per-step increment must be finite and non-zero.
    InvalidDelta { value: f64 },

    //------ Wrapped subtree errors ------
    /// A derived matrix failed model validation.
    Model(ModelError),

    /// Eigen-analysis of a derived matrix failed.
    Eigen(EigenError),
}

impl std::error::Error for PerturbError {}

impl std::fmt::Display for PerturbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PerturbError::InvalidStepCount { steps } => {
                write!(f, "Invalid sweep step count: {steps}. Must be at least 1.")
            }
            PerturbError::InvalidDelta { value } => {
                write!(f, "Invalid sweep increment: {value}. Must be finite and non-zero.")
            }
            PerturbError::Model(err) => write!(f, "Sweep model error: {err}"),
            PerturbError::Eigen(err) => write!(f, "Sweep eigen error: {err}"),
        }
    }
}

impl From<ModelError> for PerturbError {
    fn from(err: ModelError) -> Self {
        PerturbError::Model(err)
    }
}

impl From<EigenError> for PerturbError {
    fn from(err: EigenError) -> Self {
        PerturbError::Eigen(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<PerturbError> for PyErr {
    fn from(err: PerturbError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` payload embedding for the configuration variants.
    // - `From` conversions preserving the wrapped error.
    //
    // They intentionally DO NOT cover:
    // - The `From<PerturbError> for PyErr` conversion (Python-level tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify payload embedding for `InvalidStepCount` and `InvalidDelta`.
    //
    // Given
    // -----
    // - One value of each variant.
    //
    // Expect
    // ------
    // - Each `Display` message embeds the payload.
    fn perturb_error_configuration_variants_include_payloads() {
        // Arrange & Act & Assert
        let msg = PerturbError::InvalidStepCount { steps: 0 }.to_string();
        assert!(msg.contains('0'), "Got: {msg}");

        let msg = PerturbError::InvalidDelta { value: 0.0 }.to_string();
        assert!(msg.contains('0'), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that wrapped subtree errors round-trip through the `From`
    // conversions and render their inner message.
    //
    // Given
    // -----
    // - A `ModelError::InvalidHorizon` and an
    //   `EigenError::NonPositiveDominant`.
    //
    // Expect
    // ------
    // - The converted `PerturbError` matches the wrapping variant and its
    //   message contains the inner message.
    fn perturb_error_from_conversions_preserve_inner_error() {
        // Arrange
        let model_err = ModelError::InvalidHorizon { horizon: 0 };
        let eigen_err = EigenError::NonPositiveDominant { value: -0.5 };

        // Act
        let wrapped_model: PerturbError = model_err.clone().into();
        let wrapped_eigen: PerturbError = eigen_err.clone().into();

        // Assert
        assert_eq!(wrapped_model, PerturbError::Model(model_err.clone()));
        assert!(wrapped_model.to_string().contains(&model_err.to_string()));
        assert_eq!(wrapped_eigen, PerturbError::Eigen(eigen_err.clone()));
        assert!(wrapped_eigen.to_string().contains(&eigen_err.to_string()));
    }
}
