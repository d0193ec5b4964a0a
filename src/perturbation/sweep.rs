//! perturbation::sweep — one-parameter survival sweeps over λ.
//!
//! Purpose
//! -------
//! Trace the functional relationship between one own-survival (diagonal)
//! entry and the asymptotic growth rate λ. Starting from a base matrix,
//! step k (k = 1..=K) derives a fresh matrix with the target entry shifted
//! by k·δ and re-runs eigen-analysis on it. Running the sweep for each of
//! the three diagonal entries, holding everything else fixed, reproduces
//! the "changing survival of different life stages" curves of the source
//! analysis and locates the survival value at which λ crosses 1.
//!
//! Key behaviors
//! -------------
//! - Derive one matrix per step via
//!   [`StageMatrix::with_survival`]; the base matrix and earlier steps are
//!   never mutated.
//! - Compute λ per derived matrix by direct re-analysis, not from the
//!   sensitivity linearization: the sweep spans a large range where the
//!   true response is nonlinear.
//! - Halt — without clamping — before any step that would push the
//!   survival outside [0, 1]; the truncated prefix is returned together
//!   with a `truncated` flag so callers know the requested K was not
//!   reached. Hitting the bound is normal termination, not an error.
//!
//! Invariants & assumptions
//! ------------------------
//! - δ must be finite and non-zero (positive or negative sweeps are both
//!   valid); K must be at least 1.
//! - A perturbed value within [`SWEEP_BOUND_SLACK`] of a closed bound is
//!   snapped to the bound: accumulated floating-point error must not
//!   truncate a sweep whose value is mathematically within [0, 1].
//!
//! Conventions
//! -----------
//! - Steps are 1-based: step k carries perturbation k·δ. The unperturbed
//!   base matrix is not re-analyzed here; callers already hold its
//!   [`EigenOutcome`].
//!
//! Downstream usage
//! ----------------
//! - Management-scenario reporting runs three sweeps (one per diagonal)
//!   and reads [`SweepOutcome::first_crossing`] at threshold 1 to find the
//!   survival improvement needed for a non-declining population.
//!
//! Testing notes
//! -------------
//! - Unit tests verify the adult-sweep crossing at step 11, truncation of
//!   a 30-step adult sweep at 15 computed steps, later crossings for the
//!   subadult and juvenile sweeps, decreasing sweeps, and configuration
//!   rejection.

use crate::eigen::analysis::EigenOutcome;
use crate::model::matrix::StageMatrix;
use crate::model::stage::Stage;
use crate::perturbation::errors::{PerturbError, PerturbResult};

/// Absolute slack on the [0, 1] bound check. Covers accumulated
/// floating-point error in `base + k·δ` for values mathematically on the
/// bound; genuine violations exceed it by orders of magnitude.
pub const SWEEP_BOUND_SLACK: f64 = 1e-12;

/// Result of a one-parameter survival sweep.
///
/// Fields
/// ------
/// - `target` / `base_value` / `delta` / `requested_steps`: the sweep
///   configuration, kept for reporting.
/// - `values[k-1]` / `lambdas[k-1]`: the perturbed survival and its λ at
///   step k. Both sequences have the same length, at most
///   `requested_steps`.
/// - `truncated`: true when the sweep halted at the [0, 1] bound before
///   reaching `requested_steps`.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepOutcome {
    target: Stage,
    base_value: f64,
    delta: f64,
    requested_steps: usize,
    values: Vec<f64>,
    lambdas: Vec<f64>,
    truncated: bool,
}

impl SweepOutcome {
    /// Run a survival sweep against a base matrix.
    ///
    /// Parameters
    /// ----------
    /// - `base`: `&StageMatrix`
    ///   The unperturbed matrix; all non-target entries are held at its
    ///   values throughout the sweep.
    /// - `target`: `Stage`
    ///   Which own-survival (diagonal) entry to sweep: `S_JJ`, `S_SS`, or
    ///   `S_AA`.
    /// - `delta`: `f64`
    ///   Per-step increment; finite and non-zero, negative for decreasing
    ///   sweeps.
    /// - `steps`: `usize`
    ///   Requested step count K ≥ 1; step k perturbs by k·δ.
    ///
    /// Returns
    /// -------
    /// `PerturbResult<SweepOutcome>`
    ///   The per-step survivals and λ values, truncated at the [0, 1]
    ///   bound when necessary.
    ///
    /// Errors
    /// ------
    /// - [`PerturbError::InvalidStepCount`] when `steps == 0`.
    /// - [`PerturbError::InvalidDelta`] when `delta` is non-finite or zero.
    /// - [`PerturbError::Eigen`] when a derived matrix has a degenerate
    ///   dominant eigenvalue (e.g. a sweep drives the life cycle to a
    ///   spectrum with no simple positive dominant root).
    ///
    /// Notes
    /// -----
    /// - Reaching the bound is not an error: the truncated prefix is
    ///   returned with `truncated = true`.
    pub fn run(
        base: &StageMatrix, target: Stage, delta: f64, steps: usize,
    ) -> PerturbResult<Self> {
        if steps == 0 {
            return Err(PerturbError::InvalidStepCount { steps });
        }
        if !delta.is_finite() || delta == 0.0 {
            return Err(PerturbError::InvalidDelta { value: delta });
        }

        let base_value = base.survival(target);
        let mut values = Vec::with_capacity(steps);
        let mut lambdas = Vec::with_capacity(steps);
        let mut truncated = false;

        for k in 1..=steps {
            let value = base_value + (k as f64) * delta;
            if !(-SWEEP_BOUND_SLACK..=1.0 + SWEEP_BOUND_SLACK).contains(&value) {
                truncated = true;
                break;
            }
            // Snap float slack onto the closed bound; in-domain values are
            // unchanged.
            let value = value.clamp(0.0, 1.0);
            let derived = base.with_survival(target, value)?;
            let lambda = EigenOutcome::analyze(&derived)?.lambda();
            values.push(value);
            lambdas.push(lambda);
        }

        Ok(SweepOutcome {
            target,
            base_value,
            delta,
            requested_steps: steps,
            values,
            lambdas,
            truncated,
        })
    }

    /// The swept stage.
    #[inline]
    pub fn target(&self) -> Stage {
        self.target
    }

    /// The unperturbed survival the sweep started from.
    #[inline]
    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    /// Per-step increment δ.
    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Requested step count K.
    #[inline]
    pub fn requested_steps(&self) -> usize {
        self.requested_steps
    }

    /// Number of steps actually computed (equals K unless truncated).
    #[inline]
    pub fn computed_steps(&self) -> usize {
        self.lambdas.len()
    }

    /// Perturbed survival value at each computed step.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// λ at each computed step.
    #[inline]
    pub fn lambdas(&self) -> &[f64] {
        &self.lambdas
    }

    /// Whether the sweep halted at the [0, 1] bound before reaching K.
    #[inline]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// First 1-based step whose λ reaches `threshold`: λ ≥ threshold for
    /// increasing sweeps, λ ≤ threshold for decreasing ones. `None` when
    /// the computed prefix never reaches it.
    ///
    /// `first_crossing(1.0)` reads off the survival improvement (or
    /// decline) at which the population stops shrinking (or growing).
    pub fn first_crossing(&self, threshold: f64) -> Option<usize> {
        let crossed: fn(f64, f64) -> bool =
            if self.delta > 0.0 { |l, t| l >= t } else { |l, t| l <= t };
        self.lambdas.iter().position(|&l| crossed(l, threshold)).map(|i| i + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::rates::VitalRates;
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
    // - The adult-survival sweep: crossing at step 11 and truncation at
    //   the survival = 1 bound after 15 computed steps.
    // - Later λ = 1 crossings for the subadult and juvenile sweeps.
    // - Decreasing sweeps halting at the lower bound.
    // - Rejection of zero step counts and degenerate increments.
    // - Independence of the base matrix from all sweep steps.
    //
    // They intentionally DO NOT cover:
    // - Eigen-analysis internals; each step's λ is trusted to
    //   eigen::analysis and spot-checked only at the crossing.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the source scenario: raising adult survival from 0.85 in
    // steps of 0.01 first reaches λ ≥ 1 at step 11 (survival 0.96).
    //
    // Given
    // -----
    // - The reference matrix; target Adult, δ = 0.01, K = 30.
    //
    // Expect
    // ------
    // - `first_crossing(1.0) == Some(11)` with λ just below 1 at step 10.
    // - The sweep truncates at survival 1.00: 15 computed steps,
    //   `truncated == true`.
    fn adult_sweep_crosses_lambda_one_at_step_eleven_then_truncates() {
        // Arrange
        let base = reference_matrix();

        // Act
        let sweep = SweepOutcome::run(&base, Stage::Adult, 0.01, 30)
            .expect("sweep configuration is valid");

        // Assert
        assert_eq!(sweep.first_crossing(1.0), Some(11));
        assert!(sweep.lambdas()[9] < 1.0, "λ at step 10 should still be below 1");
        assert!(sweep.lambdas()[10] >= 1.0, "λ at step 11 should reach 1");
        assert_relative_eq!(sweep.values()[10], 0.96, max_relative = 1e-12);
        assert_eq!(sweep.computed_steps(), 15, "sweep should stop at survival 1.00");
        assert_relative_eq!(sweep.values()[14], 1.0, max_relative = 1e-12);
        assert!(sweep.truncated());
    }

    #[test]
    // Purpose
    // -------
    // Verify that subadult and juvenile sweeps need more steps than the
    // adult sweep to reach λ = 1, matching the sensitivity ranking.
    //
    // Given
    // -----
    // - The reference matrix; δ = 0.01, K = 30, targets Subadult and
    //   Juvenile.
    //
    // Expect
    // ------
    // - Subadult crossing at step 21, juvenile at step 26; both after the
    //   adult crossing at step 11.
    fn subadult_and_juvenile_sweeps_cross_later_than_adult() {
        // Arrange
        let base = reference_matrix();

        // Act
        let subadult = SweepOutcome::run(&base, Stage::Subadult, 0.01, 30)
            .expect("sweep configuration is valid");
        let juvenile = SweepOutcome::run(&base, Stage::Juvenile, 0.01, 30)
            .expect("sweep configuration is valid");

        // Assert
        assert_eq!(subadult.first_crossing(1.0), Some(21));
        assert_eq!(juvenile.first_crossing(1.0), Some(26));
        assert!(subadult.first_crossing(1.0) > Some(11));
        assert!(juvenile.first_crossing(1.0) > subadult.first_crossing(1.0));
    }

    #[test]
    // Purpose
    // -------
    // Verify that a decreasing sweep halts at the lower bound and reports
    // truncation, and that λ decreases along it.
    //
    // Given
    // -----
    // - The reference matrix; target Adult, δ = -0.1, K = 10
    //   (0.85 − 9·0.1 < 0).
    //
    // Expect
    // ------
    // - 8 computed steps (last survival 0.05), `truncated == true`, and
    //   strictly decreasing λ.
    fn decreasing_sweep_halts_at_lower_bound() {
        // Arrange
        let base = reference_matrix();

        // Act
        let sweep = SweepOutcome::run(&base, Stage::Adult, -0.1, 10)
            .expect("sweep configuration is valid");

        // Assert
        assert_eq!(sweep.computed_steps(), 8);
        assert_relative_eq!(sweep.values()[7], 0.05, max_relative = 1e-9);
        assert!(sweep.truncated());
        for window in sweep.lambdas().windows(2) {
            assert!(window[1] < window[0], "λ should fall as adult survival falls");
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure configuration errors are rejected: zero steps, zero δ, and
    // non-finite δ.
    //
    // Given
    // -----
    // - The reference matrix with each invalid configuration.
    //
    // Expect
    // ------
    // - `InvalidStepCount` for K = 0; `InvalidDelta` for δ = 0 and
    //   δ = NaN.
    fn run_rejects_degenerate_configuration() {
        // Arrange
        let base = reference_matrix();

        // Act & Assert
        match SweepOutcome::run(&base, Stage::Adult, 0.01, 0) {
            Err(PerturbError::InvalidStepCount { steps }) => assert_eq!(steps, 0),
            other => panic!("expected InvalidStepCount, got {other:?}"),
        }
        match SweepOutcome::run(&base, Stage::Adult, 0.0, 10) {
            Err(PerturbError::InvalidDelta { value }) => assert_eq!(value, 0.0),
            other => panic!("expected InvalidDelta, got {other:?}"),
        }
        match SweepOutcome::run(&base, Stage::Adult, f64::NAN, 10) {
            Err(PerturbError::InvalidDelta { .. }) => (),
            other => panic!("expected InvalidDelta, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that sweeping never mutates the base matrix: every step
    // derives a fresh matrix.
    //
    // Given
    // -----
    // - The reference matrix, swept over all three diagonals.
    //
    // Expect
    // ------
    // - The base matrix compares equal to a freshly built reference matrix
    //   after all sweeps.
    fn run_leaves_base_matrix_untouched() {
        // Arrange
        let base = reference_matrix();

        // Act
        for target in Stage::ALL {
            SweepOutcome::run(&base, target, 0.01, 10).expect("sweep should succeed");
        }

        // Assert
        assert_eq!(base, reference_matrix());
    }
}
