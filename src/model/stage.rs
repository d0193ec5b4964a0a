//! Life stages of the three-stage model.
//!
//! Stages partition the female population into Juvenile, Subadult, and
//! Adult classes. The enum discriminants double as the row/column indices
//! of the transition matrix, the population vector, and the
//! sensitivity/elasticity matrices, so all stage-indexed containers agree
//! on ordering by construction.

/// One of the three life stages, in matrix-index order.
///
/// Invariant: `stage as usize` is the index of the stage's row/column in
/// every stage-indexed container in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Juvenile = 0,
    Subadult = 1,
    Adult = 2,
}

impl Stage {
    /// All stages in matrix-index order.
    pub const ALL: [Stage; 3] = [Stage::Juvenile, Stage::Subadult, Stage::Adult];

    /// Matrix row/column index of this stage.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Literature label for the stage's own-survival (diagonal) rate.
    ///
    /// Used in error payloads and diagnostics so that messages read in the
    /// same vocabulary as the parameter tables (`S_JJ`, `S_SS`, `S_AA`).
    #[inline]
    pub fn survival_label(self) -> &'static str {
        match self {
            Stage::Juvenile => "S_JJ",
            Stage::Subadult => "S_SS",
            Stage::Adult => "S_AA",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Juvenile => write!(f, "juvenile"),
            Stage::Subadult => write!(f, "subadult"),
            Stage::Adult => write!(f, "adult"),
        }
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    /// Parse a stage name (case-insensitive). Accepts the full names used
    /// by boundary layers: "juvenile", "subadult", "adult".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "juvenile" => Ok(Stage::Juvenile),
            "subadult" => Ok(Stage::Subadult),
            "adult" => Ok(Stage::Adult),
            other => Err(format!("unknown stage: {other:?} (expected juvenile, subadult, or adult)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The stage-to-index mapping used by all stage-indexed containers.
    // - Round-tripping through `Display` and `FromStr`.
    //
    // They intentionally DO NOT cover:
    // - Any matrix or projection behavior; those live with StageMatrix and
    //   ProjectionSeries.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that stage discriminants match the documented matrix ordering
    // Juvenile = 0, Subadult = 1, Adult = 2.
    //
    // Given
    // -----
    // - The three Stage variants.
    //
    // Expect
    // ------
    // - `index()` returns 0, 1, 2 respectively, and `Stage::ALL` lists the
    //   stages in that order.
    fn stage_index_matches_matrix_ordering() {
        // Arrange & Act & Assert
        assert_eq!(Stage::Juvenile.index(), 0);
        assert_eq!(Stage::Subadult.index(), 1);
        assert_eq!(Stage::Adult.index(), 2);
        for (i, stage) in Stage::ALL.iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that every stage's `Display` name parses back to the same
    // stage, and that unknown names are rejected.
    //
    // Given
    // -----
    // - The three Stage variants and one bogus name.
    //
    // Expect
    // ------
    // - `Stage::from_str(stage.to_string())` round-trips.
    // - Parsing "hatchling" returns an error.
    fn stage_display_round_trips_through_from_str() {
        // Arrange & Act & Assert
        for stage in Stage::ALL {
            let parsed = Stage::from_str(&stage.to_string())
                .expect("display name should parse back to a stage");
            assert_eq!(parsed, stage);
        }
        assert!(Stage::from_str("hatchling").is_err());
    }
}
