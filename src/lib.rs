//! stagepop — stage-structured population projection with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the stage-structured matrix population model to Python via the `_stagepop`
//! extension module. When the `python-bindings` feature is enabled, this module
//! defines the Python-facing classes and submodules used by the `stagepop`
//! package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`model`, `eigen`, and `perturbation`)
//!   as the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_stagepop` Python extension.
//! - Create and register Python submodules (`models`, `perturbation`) under
//!   `stagepop` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror the
//!   invariants and signatures of their Rust counterparts (e.g.
//!   `PopulationModel` over [`StageMatrix`], `SurvivalSweep` over
//!   [`SweepOutcome`]).
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_stagepop.<submodule>` and are
//!   typically wrapped by thin pure-Python facades in the top-level `stagepop`
//!   package.
//! - Stage ordering, step numbering, and normalization conventions follow the
//!   documentation of the underlying Rust modules (`model`, `eigen::analysis`,
//!   `perturbation::sweep`).
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_stagepop` module defined here
//!   and wraps its classes in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by the projection-pipeline integration test.
//! - Smoke tests for the PyO3 bindings verify that classes can be constructed,
//!   called, and round-tripped correctly from Python.

pub mod eigen;
pub mod model;
pub mod perturbation;

#[cfg(feature = "python-bindings")]
use std::str::FromStr;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

#[cfg(feature = "python-bindings")]
use crate::{
    eigen::EigenOutcome,
    model::{PopulationVector, ProjectionSeries, Stage, StageMatrix, VitalRates},
    perturbation::{SensitivityOutcome, SweepOutcome},
};

#[cfg(feature = "python-bindings")]
fn matrix3_rows(m: &nalgebra::Matrix3<f64>) -> Vec<Vec<f64>> {
    (0..3).map(|i| (0..3).map(|j| m[(i, j)]).collect()).collect()
}

#[cfg(feature = "python-bindings")]
fn vector3_tuple(v: &nalgebra::Vector3<f64>) -> (f64, f64, f64) {
    (v[0], v[1], v[2])
}

/// PopulationModel — Python-facing wrapper for the stage-structured model.
///
/// Purpose
/// -------
/// Expose the [`StageMatrix`] API and its downstream analyses to Python
/// callers while preserving the core Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Validate the six vital rates at construction via [`VitalRates::new`];
///   invalid rates raise `ValueError` before any analysis runs.
/// - Provide `project`, `sensitivity`, `elasticity`, and `sweep_survival`
///   methods that delegate to the core implementation and return plain
///   Python containers (tuples and nested lists).
/// - Run eigen-analysis lazily on each accessor call; the model itself holds
///   only the matrix.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `PopulationModel(s_jj, s_sj, s_ss, s_as, s_aa, fertility)`:
/// - `s_jj`, `s_ss`, `s_aa`: `f64`
///   Own-stage survival probabilities, each in [0, 1].
/// - `s_sj`, `s_as`: `f64`
///   Advancement probabilities (juvenile→subadult, subadult→adult), each in
///   [0, 1].
/// - `fertility`: `f64`
///   Per-adult recruitment into the juvenile stage; finite and non-negative.
///
/// Fields
/// ------
/// - `inner`: [`StageMatrix`]
///   Validated matrix holding both the rates and the assembled 3×3 array.
///
/// Invariants
/// ----------
/// - `inner` always satisfies the rate constraints documented on
///   [`VitalRates`]; derived matrices built by `sweep_survival` are
///   re-validated independently.
///
/// Performance
/// -----------
/// - The matrix is 3×3; every method is effectively O(1) apart from
///   `project` (O(horizon)) and `sweep_survival` (O(steps)).
///
/// Notes
/// -----
/// - This type is primarily intended to be used from Python; native Rust
///   code should prefer [`StageMatrix`] and its companions directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "stagepop.models")]
pub struct PopulationModel {
    /// Underlying validated stage matrix.
    inner: StageMatrix,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PopulationModel {
    #[new]
    #[pyo3(text_signature = "(s_jj, s_sj, s_ss, s_as, s_aa, fertility, /)")]
    pub fn new(
        s_jj: f64, s_sj: f64, s_ss: f64, s_as: f64, s_aa: f64, fertility: f64,
    ) -> PyResult<Self> {
        let rates = VitalRates::new(s_jj, s_sj, s_ss, s_as, s_aa, fertility)?;
        Ok(PopulationModel { inner: StageMatrix::from_rates(&rates) })
    }

    /// The assembled 3×3 stage-transition matrix as nested lists (row-major).
    #[getter]
    pub fn matrix(&self) -> Vec<Vec<f64>> {
        matrix3_rows(self.inner.matrix())
    }

    /// Project the population forward and return the trajectory as a list of
    /// `(juveniles, subadults, adults)` tuples, index 0 being the initial
    /// vector.
    #[pyo3(text_signature = "(self, initial, horizon, /)")]
    pub fn project(
        &self, initial: (f64, f64, f64), horizon: usize,
    ) -> PyResult<Vec<(f64, f64, f64)>> {
        let n0 = PopulationVector::new(initial.0, initial.1, initial.2);
        let series = ProjectionSeries::project(&self.inner, &n0, horizon)?;
        Ok((0..series.len()).map(|t| vector3_tuple(&series.vector_at(t))).collect())
    }

    /// The asymptotic growth rate λ (dominant eigenvalue).
    #[getter]
    pub fn growth_rate(&self) -> PyResult<f64> {
        Ok(EigenOutcome::analyze(&self.inner)?.lambda())
    }

    /// The stable stage distribution `v`, normalized to sum to 1.
    #[getter]
    pub fn stable_distribution(&self) -> PyResult<(f64, f64, f64)> {
        Ok(vector3_tuple(EigenOutcome::analyze(&self.inner)?.stable_distribution()))
    }

    /// The reproductive-value vector `u`, scaled so that `u · v = 1`.
    #[getter]
    pub fn reproductive_value(&self) -> PyResult<(f64, f64, f64)> {
        Ok(vector3_tuple(EigenOutcome::analyze(&self.inner)?.reproductive_value()))
    }

    /// The damping ratio λ / |λ₂|, or `None` when the subdominant modulus is
    /// numerically zero.
    #[getter]
    pub fn damping_ratio(&self) -> PyResult<Option<f64>> {
        Ok(EigenOutcome::analyze(&self.inner)?.damping_ratio())
    }

    /// The 3×3 sensitivity matrix S[i][j] = u[i]·v[j] as nested lists.
    #[pyo3(text_signature = "(self, /)")]
    pub fn sensitivity(&self) -> PyResult<Vec<Vec<f64>>> {
        let eigen = EigenOutcome::analyze(&self.inner)?;
        Ok(matrix3_rows(SensitivityOutcome::from_eigen(&self.inner, &eigen).sensitivity()))
    }

    /// The 3×3 elasticity matrix E[i][j] = (P[i][j]/λ)·S[i][j] as nested
    /// lists; entries over structural zeros are exactly 0.
    #[pyo3(text_signature = "(self, /)")]
    pub fn elasticity(&self) -> PyResult<Vec<Vec<f64>>> {
        let eigen = EigenOutcome::analyze(&self.inner)?;
        Ok(matrix3_rows(SensitivityOutcome::from_eigen(&self.inner, &eigen).elasticity()))
    }

    /// Sweep one own-survival entry (`"juvenile"`, `"subadult"`, or
    /// `"adult"`) in steps of `delta` and return the per-step λ curve.
    #[pyo3(text_signature = "(self, stage, delta, steps, /)")]
    pub fn sweep_survival(&self, stage: &str, delta: f64, steps: usize) -> PyResult<SurvivalSweep> {
        let target = Stage::from_str(stage).map_err(PyValueError::new_err)?;
        let outcome = SweepOutcome::run(&self.inner, target, delta, steps)?;
        Ok(SurvivalSweep { inner: outcome })
    }
}

/// SurvivalSweep — survival-sweep outcome exposed to Python.
///
/// Purpose
/// -------
/// Present the per-step survival values and λ curve from [`SweepOutcome`] to
/// Python code in a lightweight, read-only wrapper.
///
/// Key behaviors
/// -------------
/// - Hold the sweep configuration (target stage, base value, δ, requested
///   step count) and the computed `values`/`lambdas` sequences.
/// - Expose `first_crossing` so Python callers can locate the survival value
///   at which λ reaches a threshold.
///
/// Parameters
/// ----------
/// Instances are constructed internally by `PopulationModel.sweep_survival`
/// and are not created directly by user code.
///
/// Fields
/// ------
/// - `inner`: [`SweepOutcome`]
///   Full sweep result from the perturbation subtree.
///
/// Invariants
/// ----------
/// - `inner` satisfies the invariants documented on [`SweepOutcome`]:
///   `values` and `lambdas` have equal length, at most the requested step
///   count, and every value lies in [0, 1].
///
/// Performance
/// -----------
/// - Accessors are O(n) only in the number of computed steps when cloning
///   into Python; other fields are scalar copies.
///
/// Notes
/// -----
/// - This type is part of the Python FFI surface; Rust code should prefer
///   using [`SweepOutcome`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "stagepop.perturbation")]
pub struct SurvivalSweep {
    /// Underlying Rust sweep outcome.
    pub inner: SweepOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SurvivalSweep {
    #[getter]
    pub fn stage(&self) -> String {
        self.inner.target().to_string()
    }

    #[getter]
    pub fn base_value(&self) -> f64 {
        self.inner.base_value()
    }

    #[getter]
    pub fn delta(&self) -> f64 {
        self.inner.delta()
    }

    #[getter]
    pub fn requested_steps(&self) -> usize {
        self.inner.requested_steps()
    }

    #[getter]
    pub fn computed_steps(&self) -> usize {
        self.inner.computed_steps()
    }

    #[getter]
    pub fn values(&self) -> Vec<f64> {
        self.inner.values().to_vec()
    }

    #[getter]
    pub fn lambdas(&self) -> Vec<f64> {
        self.inner.lambdas().to_vec()
    }

    #[getter]
    pub fn truncated(&self) -> bool {
        self.inner.truncated()
    }

    /// First 1-based step whose λ reaches `threshold`, or `None`.
    #[pyo3(text_signature = "(self, threshold, /)")]
    pub fn first_crossing(&self, threshold: f64) -> Option<usize> {
        self.inner.first_crossing(threshold)
    }
}

/// _stagepop — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_stagepop` Python module and register its submodules used by
/// the public `stagepop` package.
///
/// Key behaviors
/// -------------
/// - Create `models` and `perturbation` submodules.
/// - Attach those submodules to the parent `_stagepop` module.
/// - Register the submodules in `sys.modules` so they are importable via
///   dotted paths from Python.
///
/// Parameters
/// ----------
/// - `_py`: [`Python`]
///   GIL token provided by PyO3 during module initialization.
/// - `m`: `&Bound<PyModule>`
///   Module object representing `_stagepop`.
///
/// Returns
/// -------
/// `PyResult<()>`
///   `Ok(())` on success, or a Python exception if registration fails.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating submodules or manipulating `sys.modules` fails.
///
/// Panics
/// ------
/// - Never panics under normal operation; all failures are mapped into
///   `PyErr`.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _stagepop<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let models_mod = PyModule::new(_py, "models")?;
    let perturbation_mod = PyModule::new(_py, "perturbation")?;
    models(_py, m, &models_mod)?;
    perturbation(_py, m, &perturbation_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("stagepop.models", models_mod)?;

    _py.import("sys")?
        .getattr("modules")?
        .set_item("stagepop.perturbation", perturbation_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn models<'py>(
    _py: Python, stagepop: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PopulationModel>()?;
    stagepop.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn perturbation<'py>(
    _py: Python, stagepop: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<SurvivalSweep>()?;
    stagepop.add_submodule(m)?;
    Ok(())
}
