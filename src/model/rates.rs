//! Vital rates of the three-stage life cycle.
//!
//! The life cycle has five survival/transition probabilities and one
//! fertility term, all on a per-year basis:
//! - `s_jj`: juvenile stays juvenile (survives without maturing),
//! - `s_sj`: juvenile survives and matures into the subadult stage,
//! - `s_ss`: subadult stays subadult,
//! - `s_as`: subadult survives and matures into the adult stage,
//! - `s_aa`: adult survives,
//! - `fertility`: expected female recruits per adult female (`b`, already
//!   sex-adjusted at the call site).
//!
//! Rates are literature-supplied constants, validated at construction and
//! immutable afterwards; a new scenario builds a new [`VitalRates`].

use crate::model::errors::ModelResult;
use crate::model::validation::{validate_fertility, validate_survival};

/// Validated vital-rate set for the three-stage model.
///
/// Invariants (enforced by [`VitalRates::new`]):
/// - All five survival probabilities are finite and in [0, 1].
/// - Fertility is finite and non-negative (unbounded above).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalRates {
    pub s_jj: f64,
    pub s_sj: f64,
    pub s_ss: f64,
    pub s_as: f64,
    pub s_aa: f64,
    pub fertility: f64,
}

impl VitalRates {
    /// Construct a [`VitalRates`] set, validating every rate.
    ///
    /// # Arguments
    /// - `s_jj`, `s_sj`, `s_ss`, `s_as`, `s_aa`: survival/transition
    ///   probabilities, each in [0, 1].
    /// - `fertility`: sex-adjusted per-adult recruit rate `b`, ≥ 0.
    ///
    /// # Errors
    /// - [`ModelError::NonFiniteRate`](crate::model::errors::ModelError::NonFiniteRate)
    ///   if any rate is NaN/±inf.
    /// - [`ModelError::SurvivalOutOfRange`](crate::model::errors::ModelError::SurvivalOutOfRange)
    ///   if a survival probability is outside [0, 1].
    /// - [`ModelError::NegativeFertility`](crate::model::errors::ModelError::NegativeFertility)
    ///   if `fertility < 0`.
    ///
    /// # Rationale
    /// Guarding here fails fast on biologically meaningless parameter sets
    /// so that matrix construction, projection, and eigen-analysis can
    /// assume a well-formed non-negative matrix. Out-of-domain values are
    /// rejected, never clamped.
    pub fn new(
        s_jj: f64, s_sj: f64, s_ss: f64, s_as: f64, s_aa: f64, fertility: f64,
    ) -> ModelResult<Self> {
        validate_survival("S_JJ", s_jj)?;
        validate_survival("S_SJ", s_sj)?;
        validate_survival("S_SS", s_ss)?;
        validate_survival("S_AS", s_as)?;
        validate_survival("S_AA", s_aa)?;
        validate_fertility(fertility)?;
        Ok(VitalRates { s_jj, s_sj, s_ss, s_as, s_aa, fertility })
    }
}
