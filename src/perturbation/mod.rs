//! perturbation — sensitivity, elasticity, and survival-sweep analyses.
//!
//! Purpose
//! -------
//! Quantify how the asymptotic growth rate λ responds to changes in the
//! stage-transition matrix, two ways: the local linearization
//! (sensitivity S[i][j] = u[i]·v[j] and elasticity
//! E[i][j] = (P[i][j]/λ)·S[i][j]) in [`sensitivity`], and the exact
//! nonlinear response along one own-survival entry in [`sweep`].
//!
//! Key behaviors
//! -------------
//! - [`sensitivity`]: full 3×3 sensitivity and elasticity matrices from a
//!   completed eigen-analysis; elasticities over realized transitions sum
//!   to 1.
//! - [`sweep`]: K derived matrices with one diagonal entry shifted by
//!   k·δ, each re-analyzed independently; halts without clamping at the
//!   [0, 1] survival bound and locates λ-threshold crossings.
//! - [`errors`]: the subtree's error taxonomy, wrapping model and eigen
//!   failures raised by derived-matrix construction and re-analysis.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both analyses take the eigen quantities as given; all conditions on
//!   λ, v, and u are enforced upstream in `eigen::analysis`.
//!
//! Conventions
//! -----------
//! - Matrix indices follow the stage ordering of [`crate::model::Stage`];
//!   sweep steps are 1-based.
//!
//! Downstream usage
//! ----------------
//! - The crate root re-exports [`SensitivityOutcome`] and
//!   [`SweepOutcome`]; the Python bindings expose both through
//!   `PopulationModel`.
//!
//! Testing notes
//! -------------
//! - Each submodule carries its own unit tests; the cross-method check
//!   (sweep crossings ordered like the sensitivity ranking) lives in the
//!   integration test.

pub mod errors;
pub mod sensitivity;
pub mod sweep;

pub use errors::{PerturbError, PerturbResult};
pub use sensitivity::SensitivityOutcome;
pub use sweep::{SweepOutcome, SWEEP_BOUND_SLACK};
