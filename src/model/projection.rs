//! model::projection — deterministic population projection.
//!
//! Purpose
//! -------
//! Iterate the stage-structured recurrence `N(t) = P · N(t-1)` over a fixed
//! horizon and retain the full trajectory as a [`ProjectionSeries`]. The
//! series is the input to reporting (per-stage trajectories, totals) and to
//! scenario comparison, which re-projects under derived matrices.
//!
//! Key behaviors
//! -------------
//! - Validate the initial vector (finite, non-negative) and the horizon
//!   (≥ 1) before any arithmetic.
//! - Produce one population vector per year for t = 0..horizon-1, with
//!   row t of the trajectory equal to N(t); a horizon of 1 yields only the
//!   initial vector.
//! - Keep abundances as continuous real quantities; no rounding to integer
//!   counts, consistent with the deterministic-matrix convention of the
//!   source literature.
//!
//! Invariants & assumptions
//! ------------------------
//! - The projection is deterministic: identical inputs produce bit-identical
//!   trajectories (a fixed sequence of IEEE-754 operations with no
//!   randomness or threading).
//! - Since P is non-negative and N(0) is non-negative, every projected
//!   vector is non-negative; only the initial vector needs validation.
//! - The full series is retained: downstream reporting needs trajectories,
//!   not just the final state.
//!
//! Conventions
//! -----------
//! - Trajectory storage is an `ndarray::Array2<f64>` of shape
//!   (horizon, 3); per-stage access returns owned `Array1` columns.
//! - The matrix-vector product itself runs on `nalgebra` types; rows are
//!   copied into the trajectory as they are produced.
//!
//! Downstream usage
//! ----------------
//! - Call [`ProjectionSeries::project`] with a base or derived
//!   [`StageMatrix`], an initial vector, and a horizon; read back per-step
//!   vectors, per-stage series, per-step totals, or the final vector.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the hand-checked first projection step, the
//!   horizon-1 edge case, horizon/initial-vector rejection, determinism,
//!   and per-stage/total accessors.

use crate::model::errors::ModelResult;
use crate::model::matrix::StageMatrix;
use crate::model::validation::{validate_horizon, validate_initial};
use nalgebra::Vector3;
use ndarray::{Array1, Array2};

/// Stage abundance vector (N_J, N_S, N_A) at one point in time.
pub type PopulationVector = Vector3<f64>;

/// Full projected trajectory of a single deterministic run.
///
/// Row t of the trajectory is N(t); row 0 is the initial vector. Owned by
/// the caller for the duration of a scenario and never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionSeries {
    trajectory: Array2<f64>,
}

impl ProjectionSeries {
    /// Project an initial population vector forward under a transition
    /// matrix.
    ///
    /// Parameters
    /// ----------
    /// - `matrix`: `&StageMatrix`
    ///   The transition matrix P; P[i][j] is the contribution to stage i
    ///   next year from one individual in stage j this year.
    /// - `initial`: `&PopulationVector`
    ///   N(0); each component must be finite and non-negative. Fractional
    ///   abundances are valid.
    /// - `horizon`: `usize`
    ///   Number of time steps covered, including t = 0. Must be ≥ 1;
    ///   `horizon == 1` returns a series containing only N(0).
    ///
    /// Returns
    /// -------
    /// `ModelResult<ProjectionSeries>`
    ///   The trajectory N(0), N(1) = P·N(0), …, N(horizon-1).
    ///
    /// Errors
    /// ------
    /// - [`ModelError::InvalidHorizon`](crate::model::errors::ModelError::InvalidHorizon)
    ///   when `horizon == 0`.
    /// - [`ModelError::NonFiniteAbundance`](crate::model::errors::ModelError::NonFiniteAbundance) /
    ///   [`ModelError::NegativeAbundance`](crate::model::errors::ModelError::NegativeAbundance)
    ///   when the initial vector is malformed.
    ///
    /// Notes
    /// -----
    /// - Each step computes a fresh vector; nothing is mutated in place, so
    ///   the caller's `initial` is untouched and the full history is kept.
    pub fn project(
        matrix: &StageMatrix, initial: &PopulationVector, horizon: usize,
    ) -> ModelResult<Self> {
        validate_horizon(horizon)?;
        validate_initial(initial)?;

        let mut trajectory = Array2::zeros((horizon, 3));
        let mut current = *initial;
        for t in 0..horizon {
            if t > 0 {
                current = matrix.matrix() * current;
            }
            for stage in 0..3 {
                trajectory[(t, stage)] = current[stage];
            }
        }
        Ok(ProjectionSeries { trajectory })
    }

    /// Number of time steps in the series (equal to the requested horizon).
    #[inline]
    pub fn len(&self) -> usize {
        self.trajectory.nrows()
    }

    /// Whether the series is empty. Always false for a constructed series;
    /// present for container-API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trajectory.nrows() == 0
    }

    /// Population vector N(t).
    ///
    /// Panics if `t >= len()`; the series length equals the horizon the
    /// caller supplied.
    #[inline]
    pub fn vector_at(&self, t: usize) -> PopulationVector {
        Vector3::new(self.trajectory[(t, 0)], self.trajectory[(t, 1)], self.trajectory[(t, 2)])
    }

    /// Final vector N(horizon-1).
    #[inline]
    pub fn final_vector(&self) -> PopulationVector {
        self.vector_at(self.len() - 1)
    }

    /// The trajectory of one stage across all time steps.
    pub fn stage_series(&self, stage: crate::model::stage::Stage) -> Array1<f64> {
        self.trajectory.column(stage.index()).to_owned()
    }

    /// Total abundance (sum across stages) per time step.
    pub fn totals(&self) -> Array1<f64> {
        self.trajectory.sum_axis(ndarray::Axis(1))
    }

    /// The full (horizon × 3) trajectory.
    #[inline]
    pub fn as_array(&self) -> &Array2<f64> {
        &self.trajectory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::errors::ModelError;
    use crate::model::rates::VitalRates;
    use crate::model::stage::Stage;
    use approx::assert_relative_eq;

    fn reference_matrix() -> StageMatrix {
        let rates = VitalRates::new(0.63, 0.10, 0.70, 0.09, 0.85, 0.58125)
            .expect("reference parameters should validate");
        StageMatrix::from_rates(&rates)
    }

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - A hand-checked first projection step under the reference matrix.
    // - The horizon-1 edge case and rejection of horizon 0 and malformed
    //   initial vectors.
    // - Determinism of repeated projection.
    // - Per-stage and total accessors.
    //
    // They intentionally DO NOT cover:
    // - Long-run convergence toward the stable stage distribution, which is
    //   exercised in the integration suite together with eigen-analysis.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify one projection step against hand-computed values.
    //
    // Given
    // -----
    // - The reference matrix and N(0) = (1000, 200, 100).
    //
    // Expect
    // ------
    // - N(1) = (0.63·1000 + 0.58125·100,
    //           0.10·1000 + 0.70·200,
    //           0.09·200  + 0.85·100)
    //        = (688.125, 240, 103).
    fn project_first_step_matches_hand_computation() {
        // Arrange
        let p = reference_matrix();
        let initial = Vector3::new(1000.0, 200.0, 100.0);

        // Act
        let series = ProjectionSeries::project(&p, &initial, 2)
            .expect("projection should succeed for valid inputs");

        // Assert
        let n1 = series.vector_at(1);
        assert_relative_eq!(n1[0], 688.125, max_relative = 1e-12);
        assert_relative_eq!(n1[1], 240.0, max_relative = 1e-12);
        assert_relative_eq!(n1[2], 103.0, max_relative = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a horizon of 1 returns only the initial vector,
    // unchanged.
    //
    // Given
    // -----
    // - The reference matrix and N(0) = (10.5, 2.25, 1.0).
    //
    // Expect
    // ------
    // - `len() == 1` and row 0 equals N(0) exactly.
    fn project_horizon_one_returns_only_initial_vector() {
        // Arrange
        let p = reference_matrix();
        let initial = Vector3::new(10.5, 2.25, 1.0);

        // Act
        let series = ProjectionSeries::project(&p, &initial, 1)
            .expect("horizon 1 is valid");

        // Assert
        assert_eq!(series.len(), 1);
        assert_eq!(series.vector_at(0), initial);
        assert_eq!(series.final_vector(), initial);
    }

    #[test]
    // Purpose
    // -------
    // Ensure that horizon 0 and malformed initial vectors are rejected
    // before any arithmetic.
    //
    // Given
    // -----
    // - The reference matrix; horizon 0 with a valid vector; horizon 10
    //   with a negative component.
    //
    // Expect
    // ------
    // - `InvalidHorizon` for the first; `NegativeAbundance` for the second.
    fn project_rejects_zero_horizon_and_bad_initial_vector() {
        // Arrange
        let p = reference_matrix();
        let valid = Vector3::new(1.0, 1.0, 1.0);
        let negative = Vector3::new(1.0, -2.0, 1.0);

        // Act & Assert
        match ProjectionSeries::project(&p, &valid, 0) {
            Err(ModelError::InvalidHorizon { horizon }) => assert_eq!(horizon, 0),
            other => panic!("expected InvalidHorizon, got {other:?}"),
        }
        match ProjectionSeries::project(&p, &negative, 10) {
            Err(ModelError::NegativeAbundance { stage, .. }) => assert_eq!(stage, 1),
            other => panic!("expected NegativeAbundance, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that projection is deterministic: two runs with identical
    // inputs produce identical trajectories.
    //
    // Given
    // -----
    // - The reference matrix, N(0) = (1000, 200, 100), horizon 100.
    //
    // Expect
    // ------
    // - Both series compare equal (bit-identical trajectories).
    fn project_is_deterministic_across_repeated_calls() {
        // Arrange
        let p = reference_matrix();
        let initial = Vector3::new(1000.0, 200.0, 100.0);

        // Act
        let first = ProjectionSeries::project(&p, &initial, 100).expect("projection should succeed");
        let second = ProjectionSeries::project(&p, &initial, 100).expect("projection should succeed");

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    // Purpose
    // -------
    // Verify the per-stage and total accessors on a short series.
    //
    // Given
    // -----
    // - The reference matrix, N(0) = (1000, 200, 100), horizon 3.
    //
    // Expect
    // ------
    // - `stage_series(Juvenile)` starts at 1000 and has length 3.
    // - `totals()[0]` equals 1300 and `totals()[1]` equals the component
    //   sum of N(1).
    fn stage_series_and_totals_expose_trajectory_views() {
        // Arrange
        let p = reference_matrix();
        let initial = Vector3::new(1000.0, 200.0, 100.0);

        // Act
        let series = ProjectionSeries::project(&p, &initial, 3).expect("projection should succeed");
        let juveniles = series.stage_series(Stage::Juvenile);
        let totals = series.totals();

        // Assert
        assert_eq!(juveniles.len(), 3);
        assert_eq!(juveniles[0], 1000.0);
        assert_relative_eq!(totals[0], 1300.0, max_relative = 1e-12);
        let n1 = series.vector_at(1);
        assert_relative_eq!(totals[1], n1[0] + n1[1] + n1[2], max_relative = 1e-12);
    }
}
