//! eigen — dominant-eigenvalue analysis of the transition matrix.
//!
//! Purpose
//! -------
//! Compute the asymptotic growth rate λ of a stage-transition matrix along
//! with its two normalized dominant eigenvectors: the stable stage
//! distribution (right) and the reproductive values (left). The subtree
//! separates the domain contract — largest-modulus selection, the
//! real/positive/simple certification, the sum-to-one and u·v = 1
//! normalizations — from the numerical backend that produces raw spectra.
//!
//! Key behaviors
//! -------------
//! - [`EigenOutcome::analyze`] runs the full analysis with the default
//!   nalgebra-based [`SchurBackend`];
//!   [`EigenOutcome::analyze_with`](analysis::EigenOutcome::analyze_with)
//!   accepts any [`EigenBackend`].
//! - Degenerate spectra (complex-dominant, non-positive, or repeated
//!   dominant eigenvalues) surface as [`EigenError`] values rather than
//!   silently coerced results.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every constructed [`EigenOutcome`] carries a real, strictly positive,
//!   simple λ, a non-negative stable distribution summing to 1, and
//!   reproductive values with u·v = 1.
//! - Tolerance decisions use [`EIGEN_EPS`] relative to the dominant
//!   modulus.
//!
//! Downstream usage
//! ----------------
//! - The sensitivity/elasticity engine and the perturbation sweep
//!   (`crate::perturbation`) consume [`EigenOutcome`] values.
//!
//! Testing notes
//! -------------
//! - Backend correctness is unit-tested in [`backend`]; the domain
//!   contract (reference values, normalizations, degenerate rejection) in
//!   [`analysis`].

pub mod analysis;
pub mod backend;
pub mod errors;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::analysis::EigenOutcome;
pub use self::backend::{EIGEN_EPS, EigenBackend, SchurBackend};
pub use self::errors::{EigenError, EigenResult};
