//! # concordance-scheme
//!
//! Genotype concordance classification for benchmarking variant calls
//! against a truth set.
//!
//! Comparing a called genotype with the truth genotype at the same site
//! contributes to zero or more entries of a contingency table (true positive,
//! false positive, true negative, false negative). This crate defines which
//! entries each (truth, call) category pair contributes to, and guarantees
//! that every pair of the domain is mapped before the table can be used.
//!
//! ## Features
//!
//! - **GA4GH default scheme**: The benchmarking conventions of the GA4GH
//!   Benchmarking Work Group, built and validated once per process
//! - **Exhaustiveness**: A scheme cannot be constructed with a missing pair
//! - **NA marker**: Unreachable pairs are recorded explicitly, distinct from
//!   pairs that contribute nothing
//! - **Custom schemes**: Export to and load from JSON with the same checks
//!
//! ## Example
//!
//! ```rust
//! use concordance_scheme::{default_scheme, CallState, ContingencyState, TruthState};
//!
//! let scheme = default_scheme();
//!
//! // Truth is 1/2, call is 1/3: one shared alternate, one novel, one missed
//! let set = scheme
//!     .lookup(TruthState::HetVar1Var2, CallState::HetVar1Var3)
//!     .unwrap();
//! assert!(set.contains(ContingencyState::TP));
//! assert!(set.contains(ContingencyState::FP));
//! assert!(set.contains(ContingencyState::FN));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Genotype categories, contingency states and sets
//! - [`scheme`]: Scheme builder, validation, lookup and the GA4GH table
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod scheme;

// Re-export commonly used types for convenience
pub use crate::core::contingency::ContingencySet;
pub use crate::core::types::*;
pub use crate::scheme::builder::SchemeBuilder;
pub use crate::scheme::store::ConcordanceScheme;
pub use crate::scheme::{default_scheme, SchemeError};
