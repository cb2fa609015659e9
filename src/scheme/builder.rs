use tracing::debug;

use crate::core::contingency::ContingencySet;
use crate::core::types::{CallState, TruthState};
use crate::scheme::store::{Cells, ConcordanceScheme};
use crate::scheme::SchemeError;

/// Assembles a concordance scheme one call-state row at a time
#[derive(Debug, Clone)]
pub struct SchemeBuilder {
    name: String,
    cells: Cells,
    validated: bool,
}

impl SchemeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: [[None; TruthState::COUNT]; CallState::COUNT],
            validated: false,
        }
    }

    /// Add the row for `call_state`, one cell per truth state in
    /// [`TruthState::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns an error if the row does not have exactly one cell per truth
    /// state, if the row was already added, or if a cell mixes NA with other
    /// states. Nothing is recorded when an error is returned.
    pub fn add_row(
        &mut self,
        call_state: CallState,
        cells: &[ContingencySet],
    ) -> Result<&mut Self, SchemeError> {
        if cells.len() != TruthState::COUNT {
            return Err(SchemeError::RowLength {
                call_state,
                expected: TruthState::COUNT,
                found: cells.len(),
            });
        }

        let row = &mut self.cells[call_state.index()];
        if row.iter().any(Option::is_some) {
            return Err(SchemeError::DuplicateRow { call_state });
        }

        if let Some((truth_state, _)) = TruthState::ALL
            .iter()
            .zip(cells)
            .find(|(_, set)| !set.is_well_formed())
        {
            return Err(SchemeError::NaCombined {
                truth_state: *truth_state,
                call_state,
            });
        }

        for (slot, set) in row.iter_mut().zip(cells) {
            *slot = Some(*set);
        }
        self.validated = false;
        Ok(self)
    }

    /// Check that every (truth, call) pair has been registered.
    ///
    /// The full scan only runs once; later calls return immediately until
    /// another row is added.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::MissingCell`] naming the first missing pair,
    /// scanning truth states in the outer loop.
    pub fn validate(&mut self) -> Result<(), SchemeError> {
        if self.validated {
            return Ok(());
        }

        for truth_state in TruthState::ALL {
            for call_state in CallState::ALL {
                let cell = self
                    .cells
                    .get(call_state.index())
                    .and_then(|row| row.get(truth_state.index()))
                    .copied()
                    .flatten();
                if cell.is_none() {
                    return Err(SchemeError::MissingCell {
                        truth_state,
                        call_state,
                    });
                }
            }
        }

        debug!(
            "Validated concordance scheme '{}': {} cells",
            self.name,
            TruthState::COUNT * CallState::COUNT
        );
        self.validated = true;
        Ok(())
    }

    /// Validate and freeze the scheme
    ///
    /// # Errors
    ///
    /// Returns an error if any pair is missing.
    pub fn build(mut self) -> Result<ConcordanceScheme, SchemeError> {
        self.validate()?;
        Ok(ConcordanceScheme::from_validated(self.name, self.cells))
    }

    #[cfg(test)]
    pub(crate) fn is_validated(&self) -> bool {
        self.validated
    }

    /// Remove a single cell; only used to exercise validation
    #[cfg(test)]
    pub(crate) fn clear_cell(&mut self, truth_state: TruthState, call_state: CallState) {
        self.cells[call_state.index()][truth_state.index()] = None;
        self.validated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contingency::{EMPTY, FP_ONLY, NA, TP_ONLY};
    use crate::core::types::ContingencyState;

    fn full_builder() -> SchemeBuilder {
        let mut builder = SchemeBuilder::new("test");
        for call_state in CallState::ALL {
            builder
                .add_row(call_state, &[EMPTY; TruthState::COUNT])
                .unwrap();
        }
        builder
    }

    #[test]
    fn test_add_row_binds_truth_states_in_order() {
        let mut row = [EMPTY; TruthState::COUNT];
        row[TruthState::HomVar1.index()] = TP_ONLY;
        row[TruthState::IsMixed.index()] = FP_ONLY;

        let mut builder = SchemeBuilder::new("test");
        builder.add_row(CallState::HomVar1, &row).unwrap();
        for call_state in CallState::ALL {
            if call_state != CallState::HomVar1 {
                builder
                    .add_row(call_state, &[EMPTY; TruthState::COUNT])
                    .unwrap();
            }
        }
        let scheme = builder.build().unwrap();

        assert_eq!(scheme.lookup(TruthState::HomVar1, CallState::HomVar1), Some(TP_ONLY));
        assert_eq!(scheme.lookup(TruthState::IsMixed, CallState::HomVar1), Some(FP_ONLY));
        assert_eq!(scheme.lookup(TruthState::HomRef, CallState::HomVar1), Some(EMPTY));
    }

    #[test]
    fn test_row_length_mismatch() {
        let mut builder = SchemeBuilder::new("test");
        let err = builder
            .add_row(CallState::HomRef, &[EMPTY; TruthState::COUNT - 1])
            .unwrap_err();
        assert!(matches!(
            err,
            SchemeError::RowLength {
                call_state: CallState::HomRef,
                expected: 9,
                found: 8
            }
        ));

        let err = builder
            .add_row(CallState::HomRef, &[EMPTY; TruthState::COUNT + 1])
            .unwrap_err();
        assert!(err.to_string().contains("HOM_REF"));

        // Rejected rows leave nothing behind
        assert!(builder
            .add_row(CallState::HomRef, &[EMPTY; TruthState::COUNT])
            .is_ok());
    }

    #[test]
    fn test_duplicate_row() {
        let mut builder = SchemeBuilder::new("test");
        builder
            .add_row(CallState::NoCall, &[EMPTY; TruthState::COUNT])
            .unwrap();
        let err = builder
            .add_row(CallState::NoCall, &[EMPTY; TruthState::COUNT])
            .unwrap_err();
        assert!(matches!(
            err,
            SchemeError::DuplicateRow {
                call_state: CallState::NoCall
            }
        ));
    }

    #[test]
    fn test_na_cannot_be_combined() {
        let mut row = [NA; TruthState::COUNT];
        row[TruthState::LowDp.index()] = ContingencySet::of(&[ContingencyState::NA, ContingencyState::FN]);

        let mut builder = SchemeBuilder::new("test");
        let err = builder.add_row(CallState::HomVar3, &row).unwrap_err();
        assert!(matches!(
            err,
            SchemeError::NaCombined {
                truth_state: TruthState::LowDp,
                call_state: CallState::HomVar3
            }
        ));
    }

    #[test]
    fn test_validate_reports_missing_pair() {
        let mut builder = full_builder();
        builder.clear_cell(TruthState::HetVar1Var2, CallState::HetVar1Var3);

        let err = builder.validate().unwrap_err();
        assert!(matches!(
            err,
            SchemeError::MissingCell {
                truth_state: TruthState::HetVar1Var2,
                call_state: CallState::HetVar1Var3
            }
        ));
        assert_eq!(
            err.to_string(),
            "Missing scheme tuple: [HET_VAR1_VAR2, HET_VAR1_VAR3]"
        );
        assert!(builder.build().is_err());
    }

    #[test]
    fn test_validate_reports_first_missing_pair_truth_major() {
        let mut builder = SchemeBuilder::new("test");
        builder
            .add_row(CallState::HomRef, &[EMPTY; TruthState::COUNT])
            .unwrap();

        let err = builder.validate().unwrap_err();
        assert!(matches!(
            err,
            SchemeError::MissingCell {
                truth_state: TruthState::HomRef,
                call_state: CallState::HetRefVar1
            }
        ));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut builder = full_builder();
        assert!(!builder.is_validated());
        builder.validate().unwrap();
        assert!(builder.is_validated());
        builder.validate().unwrap();
        assert!(builder.is_validated());

        builder.clear_cell(TruthState::HomRef, CallState::HomRef);
        assert!(!builder.is_validated());
        assert!(builder.validate().is_err());
    }

    #[test]
    fn test_empty_builder_fails() {
        let err = SchemeBuilder::new("empty").build().unwrap_err();
        assert!(matches!(err, SchemeError::MissingCell { .. }));
    }
}
