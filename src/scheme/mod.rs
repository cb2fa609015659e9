//! Genotype concordance schemes.
//!
//! A scheme maps every (truth state, call state) pair to the set of
//! contingency table entries the comparison contributes to. Schemes are
//! assembled row by row with a [`builder::SchemeBuilder`] and only become a
//! usable [`store::ConcordanceScheme`] once every pair of the domain has been
//! registered.
//!
//! ## Default Scheme
//!
//! The built-in scheme follows the GA4GH Benchmarking Work Group's proposed
//! evaluation conventions:
//!
//! ```rust
//! use concordance_scheme::scheme::default_scheme;
//! use concordance_scheme::core::types::{CallState, ContingencyState, TruthState};
//!
//! let scheme = default_scheme();
//! let set = scheme
//!     .lookup(TruthState::HomRef, CallState::HetRefVar1)
//!     .expect("every pair is mapped");
//! assert!(set.contains(ContingencyState::FP));
//! assert!(set.contains(ContingencyState::TN));
//! ```
//!
//! ## Custom Schemes
//!
//! Schemes can be exported to JSON, edited, and loaded back. A loaded scheme
//! goes through the same row and completeness checks as the built-in one:
//!
//! ```rust,no_run
//! use concordance_scheme::ConcordanceScheme;
//! use std::path::Path;
//!
//! let json = ConcordanceScheme::ga4gh().unwrap().to_json().unwrap();
//! let custom = ConcordanceScheme::load_from_file(Path::new("my_scheme.json")).unwrap();
//! ```

use thiserror::Error;

use crate::core::types::{CallState, TruthState};

pub mod builder;
pub mod ga4gh;
pub mod store;

pub use ga4gh::default_scheme;

#[derive(Error, Debug)]
pub enum SchemeError {
    #[error("Row {call_state} has {found} cells, expected one per truth state ({expected})")]
    RowLength {
        call_state: CallState,
        expected: usize,
        found: usize,
    },

    #[error("Row {call_state} was added more than once")]
    DuplicateRow { call_state: CallState },

    #[error("NA combined with other contingency states at [{truth_state}, {call_state}]")]
    NaCombined {
        truth_state: TruthState,
        call_state: CallState,
    },

    #[error("Missing scheme tuple: [{truth_state}, {call_state}]")]
    MissingCell {
        truth_state: TruthState,
        call_state: CallState,
    },

    #[error("Truth state columns out of order (expected {expected}, found {found})")]
    ColumnOrder { expected: String, found: String },

    #[error("Failed to read scheme: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse scheme: {0}")]
    Parse(#[from] serde_json::Error),
}
