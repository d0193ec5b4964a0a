//! model::matrix — the stage-transition matrix and its derived variants.
//!
//! Purpose
//! -------
//! Provide [`StageMatrix`], an immutable 3×3 transition matrix with the
//! fixed sparsity pattern of the three-stage life cycle:
//!
//! ```text
//! P = [ S_JJ   0      b    ]
//!     [ S_SJ   S_SS   0    ]
//!     [ 0      S_AS   S_AA ]
//! ```
//!
//! Entry P[i][j] is the expected contribution to stage i next year from one
//! individual in stage j this year.
//!
//! Key behaviors
//! -------------
//! - Build P from a validated [`VitalRates`] set
//!   ([`StageMatrix::from_rates`]); construction is pure and infallible
//!   once the rates have validated.
//! - Derive perturbed matrices for scenarios and sweeps
//!   ([`StageMatrix::with_survival`]) without ever mutating an existing
//!   matrix in place.
//! - Expose entry access for sensitivity/elasticity computations and the
//!   structural-zero predicate shared by the whole crate.
//!
//! Invariants & assumptions
//! ------------------------
//! - The three structural zeros (no subadult→juvenile recruitment, no
//!   adult→subadult regression, no juvenile reproduction) are exactly 0.0
//!   in every matrix this type can represent: each constructor writes the
//!   full sparsity pattern and there is no entry-level mutation.
//! - All entries are non-negative; survival entries are ≤ 1. Both follow
//!   from [`VitalRates`] validation.
//!
//! Conventions
//! -----------
//! - Row/column indices follow [`Stage`] ordering (Juvenile = 0,
//!   Subadult = 1, Adult = 2).
//! - Scenario comparisons construct a fresh `StageMatrix` per scenario;
//!   the base matrix is never reused mutably across scenarios.
//!
//! Downstream usage
//! ----------------
//! - The projector multiplies P against population vectors.
//! - The eigen-analyzer consumes `matrix()`; the sensitivity engine reads
//!   individual entries and the structural-zero predicate.
//! - The perturbation sweep derives one matrix per step via
//!   [`StageMatrix::with_survival`].
//!
//! Testing notes
//! -------------
//! - Unit tests verify the sparsity pattern, payload placement, derived-
//!   matrix independence from the base, and re-validation of replacement
//!   survivals.

use crate::model::errors::ModelResult;
use crate::model::rates::VitalRates;
use crate::model::stage::Stage;
use nalgebra::Matrix3;

/// Immutable stage-transition matrix with the fixed three-stage sparsity
/// pattern.
///
/// Holds both the matrix and the vital rates it was built from, so derived
/// matrices (scenarios, sweep steps) can replace one rate and rebuild the
/// full pattern rather than editing entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageMatrix {
    rates: VitalRates,
    matrix: Matrix3<f64>,
}

impl StageMatrix {
    /// Build the transition matrix from a validated rate set.
    ///
    /// Pure construction with no side effects; the sparsity pattern is
    /// written in full, including the structural zeros.
    pub fn from_rates(rates: &VitalRates) -> Self {
        let matrix = Matrix3::new(
            rates.s_jj, 0.0,        rates.fertility,
            rates.s_sj, rates.s_ss, 0.0,
            0.0,        rates.s_as, rates.s_aa,
        );
        StageMatrix { rates: *rates, matrix }
    }

    /// Derive a new matrix with one diagonal survival replaced.
    ///
    /// # Arguments
    /// - `stage`: which own-survival entry to replace (`S_JJ`, `S_SS`, or
    ///   `S_AA`; the diagonal of P).
    /// - `value`: the replacement survival probability.
    ///
    /// # Errors
    /// - [`ModelError::NonFiniteRate`](crate::model::errors::ModelError::NonFiniteRate) /
    ///   [`ModelError::SurvivalOutOfRange`](crate::model::errors::ModelError::SurvivalOutOfRange)
    ///   if `value` is not a valid survival probability. The receiver is
    ///   left untouched either way.
    ///
    /// # Rationale
    /// Perturbation sweeps and management scenarios each need "the base
    /// matrix with one rate changed". Deriving a fresh matrix keeps every
    /// scenario independently parameterized and makes it impossible for one
    /// scenario to observe another's perturbation.
    pub fn with_survival(&self, stage: Stage, value: f64) -> ModelResult<Self> {
        crate::model::validation::validate_survival(stage.survival_label(), value)?;
        let mut rates = self.rates;
        match stage {
            Stage::Juvenile => rates.s_jj = value,
            Stage::Subadult => rates.s_ss = value,
            Stage::Adult => rates.s_aa = value,
        }
        Ok(StageMatrix::from_rates(&rates))
    }

    /// The underlying 3×3 matrix.
    #[inline]
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// The rate set this matrix was built from.
    #[inline]
    pub fn rates(&self) -> &VitalRates {
        &self.rates
    }

    /// Entry P[row][col].
    #[inline]
    pub fn entry(&self, row: usize, col: usize) -> f64 {
        self.matrix[(row, col)]
    }

    /// Own-survival (diagonal) entry for a stage.
    #[inline]
    pub fn survival(&self, stage: Stage) -> f64 {
        self.matrix[(stage.index(), stage.index())]
    }

    /// Whether (row, col) is one of the structural zeros of the life cycle.
    ///
    /// Structural zeros are fixed by the sparsity pattern, independent of
    /// the current rate values: subadults do not recruit to juvenile,
    /// adults do not regress to subadult, and juveniles/subadults do not
    /// reproduce.
    #[inline]
    pub fn is_structural_zero(row: usize, col: usize) -> bool {
        matches!((row, col), (0, 1) | (1, 2) | (2, 0))
    }
}
