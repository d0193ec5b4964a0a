//! model — stage-transition matrix construction and population projection.
//!
//! Purpose
//! -------
//! Collect the data model of the stage-structured population analysis: the
//! life stages, the validated vital-rate set, the immutable 3×3 transition
//! matrix with its fixed sparsity pattern, and the deterministic projector
//! that iterates `N(t) = P · N(t-1)` over a configurable horizon.
//!
//! Key behaviors
//! -------------
//! - Build a [`StageMatrix`] from a validated [`VitalRates`] set and derive
//!   perturbed matrices without in-place mutation
//!   ([`StageMatrix::with_survival`]).
//! - Project an initial [`PopulationVector`] forward and retain the full
//!   trajectory as a [`ProjectionSeries`].
//! - Centralize domain guards in [`validation`] so every public entry point
//!   validates once, consistently.
//!
//! Invariants & assumptions
//! ------------------------
//! - Matrices are immutable once constructed; scenarios and sweeps create
//!   derived matrices, never edit existing ones.
//! - The structural zeros of the life cycle are exactly 0.0 in every matrix
//!   this subtree can produce.
//! - All failures surface as [`ModelError`] through [`ModelResult`]; no
//!   public entry point panics on user-facing invalid input.
//!
//! Conventions
//! -----------
//! - Stage ordering is fixed (Juvenile = 0, Subadult = 1, Adult = 2) and
//!   shared by every stage-indexed container in the crate.
//! - Eigen-analysis and sensitivity/elasticity live in their own subtrees
//!   (`crate::eigen`, `crate::perturbation`) and consume this one.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use stagepop::model::{ProjectionSeries, StageMatrix, VitalRates};
//!
//!   # fn run() -> Result<(), stagepop::model::ModelError> {
//!   let rates = VitalRates::new(0.63, 0.10, 0.70, 0.09, 0.85, 0.58125)?;
//!   let p = StageMatrix::from_rates(&rates);
//!   let series =
//!       ProjectionSeries::project(&p, &nalgebra::Vector3::new(1000.0, 200.0, 100.0), 50)?;
//!   # let _ = series;
//!   # Ok(())
//!   # }
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module; the end-to-end pipeline on the
//!   reference parameter set is exercised in
//!   `tests/integration_projection_pipeline.rs`.

pub mod errors;
pub mod matrix;
pub mod projection;
pub mod rates;
pub mod stage;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{ModelError, ModelResult};
pub use self::matrix::StageMatrix;
pub use self::projection::{PopulationVector, ProjectionSeries};
pub use self::rates::VitalRates;
pub use self::stage::Stage;
