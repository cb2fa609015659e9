use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::contingency::ContingencySet;
use crate::core::types::{CallState, TruthAndCallStates, TruthState};
use crate::scheme::builder::SchemeBuilder;
use crate::scheme::SchemeError;

/// Scheme file version for compatibility checking
pub const SCHEME_VERSION: &str = "1.0.0";

/// Table storage indexed by `[call_state.index()][truth_state.index()]`
pub(crate) type Cells = [[Option<ContingencySet>; TruthState::COUNT]; CallState::COUNT];

/// Serializable scheme format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeData {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub name: String,
    /// Column header; must list the truth states in table order
    pub truth_states: Vec<TruthState>,
    pub rows: Vec<SchemeRow>,
}

/// One call-state row of a serialized scheme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeRow {
    pub call_state: CallState,
    pub cells: Vec<ContingencySet>,
}

/// A complete, validated concordance scheme.
///
/// Only [`SchemeBuilder::build`] creates one, so every (truth, call) pair is
/// present and the table never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcordanceScheme {
    name: String,
    cells: Cells,
}

impl ConcordanceScheme {
    pub(crate) fn from_validated(name: String, cells: Cells) -> Self {
        Self { name, cells }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the contingency states the given truth and call state pair
    /// contributes to.
    ///
    /// Returns `None` only for a pair that was never registered, which a
    /// validated scheme does not have. An empty set is a recorded decision
    /// that the pair contributes nothing.
    #[must_use]
    pub fn lookup(&self, truth_state: TruthState, call_state: CallState) -> Option<ContingencySet> {
        self.cells
            .get(call_state.index())
            .and_then(|row| row.get(truth_state.index()))
            .copied()
            .flatten()
    }

    #[must_use]
    pub fn lookup_pair(&self, states: TruthAndCallStates) -> Option<ContingencySet> {
        self.lookup(states.truth_state, states.call_state)
    }

    /// Cells of one call-state row, in truth state order
    pub fn row(
        &self,
        call_state: CallState,
    ) -> impl Iterator<Item = (TruthState, Option<ContingencySet>)> + '_ {
        TruthState::ALL
            .into_iter()
            .map(move |truth_state| (truth_state, self.lookup(truth_state, call_state)))
    }

    /// Every registered cell, call-major and truth-minor
    pub fn cells(&self) -> impl Iterator<Item = (TruthAndCallStates, ContingencySet)> + '_ {
        CallState::ALL.into_iter().flat_map(move |call_state| {
            self.row(call_state).filter_map(move |(truth_state, set)| {
                set.map(|set| (TruthAndCallStates::new(truth_state, call_state), set))
            })
        })
    }

    /// Load a scheme from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not describe a
    /// complete, well-formed scheme.
    pub fn load_from_file(path: &Path) -> Result<Self, SchemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a scheme from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error on invalid JSON, out-of-order truth state columns, or
    /// any row or completeness error raised by [`SchemeBuilder`].
    pub fn from_json(json: &str) -> Result<Self, SchemeError> {
        let data: SchemeData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != SCHEME_VERSION {
            warn!(
                "Scheme version mismatch (expected {}, found {})",
                SCHEME_VERSION, data.version
            );
        }

        if data.truth_states.as_slice() != TruthState::ALL.as_slice() {
            return Err(SchemeError::ColumnOrder {
                expected: join_names(TruthState::ALL.iter().map(|s| s.name())),
                found: join_names(data.truth_states.iter().map(|s| s.name())),
            });
        }

        let mut builder = SchemeBuilder::new(data.name);
        for row in &data.rows {
            builder.add_row(row.call_state, &row.cells)?;
        }
        builder.build()
    }

    /// Export the scheme to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, SchemeError> {
        let rows = CallState::ALL
            .into_iter()
            .map(|call_state| SchemeRow {
                call_state,
                cells: self.row(call_state).filter_map(|(_, set)| set).collect(),
            })
            .collect();

        let data = SchemeData {
            version: SCHEME_VERSION.to_string(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            name: self.name.clone(),
            truth_states: TruthState::ALL.to_vec(),
            rows,
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
