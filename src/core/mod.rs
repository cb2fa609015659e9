//! Core data types for genotype concordance classification.
//!
//! - [`TruthState`], [`CallState`]: genotype categories on each side of a site comparison
//! - [`ContingencyState`]: one entry of the TP/FP/TN/FN contingency table, plus NA
//! - [`TruthAndCallStates`]: the (truth, call) key of a scheme
//! - [`ContingencySet`]: the entries one comparison contributes to
//!
//! ## Symbolic Alleles
//!
//! `VAR1`, `VAR2` and `VAR3` name the first, second and third distinct
//! non-reference allele seen at a site. Only their relative novelty matters:
//!
//! | Truth | Call | Meaning |
//! |-------|------|---------|
//! | `HET_REF_VAR1` | `HET_REF_VAR1` | same alternate allele |
//! | `HET_REF_VAR1` | `HET_REF_VAR2` | call carries an alternate the truth lacks |
//! | `HET_VAR1_VAR2` | `HET_VAR1_VAR3` | one shared alternate, one novel |
//!
//! [`TruthState`]: types::TruthState
//! [`CallState`]: types::CallState
//! [`ContingencyState`]: types::ContingencyState
//! [`TruthAndCallStates`]: types::TruthAndCallStates
//! [`ContingencySet`]: contingency::ContingencySet

pub mod contingency;
pub mod types;
