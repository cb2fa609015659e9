//! The default scheme, derived from the GA4GH Benchmarking Work Group's
//! proposed evaluation scheme.
//!
//! Each comparison is between two sets of alleles, so one comparison can add
//! to zero or more contingency table entries. A truth `HET_VAR1_VAR2` against
//! a call `HET_VAR1_VAR3` shares one alternate allele (TP), has a called
//! alternate missing from the truth (FP), and a truth alternate missing from
//! the call (FN). A TN is added whenever both sides carry the reference
//! allele.
//!
//! There is no `HET_VAR2_VAR3` call state: the VAR labels are symbolic, so
//! that case is the same as `HET_VAR3_VAR4`.
//!
//! NA cells are tuples the upstream state assignment never produces.

use std::sync::OnceLock;

use crate::core::contingency::{
    ContingencySet, EMPTY, FN_ONLY, FP_FN, FP_ONLY, FP_TN, FP_TN_FN, NA, TN_FN, TN_ONLY, TP_FN,
    TP_FP, TP_FP_FN, TP_ONLY, TP_TN,
};
use crate::core::types::{CallState, TruthState};
use crate::scheme::builder::SchemeBuilder;
use crate::scheme::store::ConcordanceScheme;
use crate::scheme::SchemeError;

pub const GA4GH_SCHEME_NAME: &str = "ga4gh";

/// Rows of the GA4GH table: one per call state, one cell per truth state
#[rustfmt::skip]
const GA4GH_ROWS: [(CallState, [ContingencySet; TruthState::COUNT]); CallState::COUNT] = [
    //                          HOM_REF  HET_REF_VAR1 HET_VAR1_VAR2 HOM_VAR1  NO_CALL LOW_GQ LOW_DP FILTERED IS_MIXED
    (CallState::HomRef,      [TN_ONLY, TN_FN,       FN_ONLY,      FN_ONLY,  EMPTY,  EMPTY, EMPTY, EMPTY,   EMPTY]),
    (CallState::HetRefVar1,  [FP_TN,   TP_TN,       TP_FN,        TP_FN,    EMPTY,  EMPTY, EMPTY, EMPTY,   EMPTY]),
    (CallState::HetRefVar2,  [NA,      FP_TN_FN,    NA,           FP_FN,    NA,     NA,    NA,    NA,      NA]),
    (CallState::HetRefVar3,  [NA,      NA,          FP_FN,        NA,       NA,     NA,    NA,    NA,      NA]),
    (CallState::HetVar1Var2, [FP_ONLY, TP_FP,       TP_ONLY,      TP_FP_FN, EMPTY,  EMPTY, EMPTY, EMPTY,   EMPTY]),
    (CallState::HetVar1Var3, [NA,      NA,          TP_FP_FN,     NA,       NA,     NA,    NA,    NA,      NA]),
    (CallState::HetVar3Var4, [FP_ONLY, FP_FN,       FP_FN,        FP_FN,    NA,     NA,    NA,    NA,      NA]),
    (CallState::HomVar1,     [FP_ONLY, TP_FP,       TP_FN,        TP_ONLY,  EMPTY,  EMPTY, EMPTY, EMPTY,   EMPTY]),
    (CallState::HomVar2,     [NA,      FP_FN,       TP_FN,        FP_FN,    NA,     NA,    NA,    NA,      NA]),
    (CallState::HomVar3,     [NA,      NA,          FP_FN,        NA,       NA,     NA,    NA,    NA,      NA]),
    (CallState::NoCall,      [EMPTY,   EMPTY,       EMPTY,        EMPTY,    EMPTY,  EMPTY, EMPTY, EMPTY,   EMPTY]),
    (CallState::Filtered,    [EMPTY,   EMPTY,       EMPTY,        EMPTY,    EMPTY,  EMPTY, EMPTY, EMPTY,   EMPTY]),
    (CallState::LowGq,       [EMPTY,   EMPTY,       EMPTY,        EMPTY,    EMPTY,  EMPTY, EMPTY, EMPTY,   EMPTY]),
    (CallState::LowDp,       [EMPTY,   EMPTY,       EMPTY,        EMPTY,    EMPTY,  EMPTY, EMPTY, EMPTY,   EMPTY]),
    (CallState::IsMixed,     [EMPTY,   EMPTY,       EMPTY,        EMPTY,    EMPTY,  EMPTY, EMPTY, EMPTY,   EMPTY]),
];

impl ConcordanceScheme {
    /// Build and validate the GA4GH scheme
    ///
    /// # Errors
    ///
    /// Returns an error if the table above is malformed or incomplete.
    pub fn ga4gh() -> Result<Self, SchemeError> {
        let mut builder = SchemeBuilder::new(GA4GH_SCHEME_NAME);
        for (call_state, cells) in &GA4GH_ROWS {
            builder.add_row(*call_state, cells)?;
        }
        builder.build()
    }
}

static DEFAULT_SCHEME: OnceLock<ConcordanceScheme> = OnceLock::new();

/// The process-wide GA4GH scheme, built and validated on first use.
///
/// # Panics
///
/// Panics if the built-in table is malformed or incomplete. That is a defect
/// in this crate, never a property of the input being scored.
pub fn default_scheme() -> &'static ConcordanceScheme {
    DEFAULT_SCHEME.get_or_init(|| {
        ConcordanceScheme::ga4gh()
            .unwrap_or_else(|e| panic!("Built-in GA4GH concordance scheme is invalid: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ContingencyState, TruthAndCallStates};

    fn lookup(truth_state: TruthState, call_state: CallState) -> ContingencySet {
        default_scheme()
            .lookup(truth_state, call_state)
            .expect("validated scheme has every pair")
    }

    #[test]
    fn test_ga4gh_builds() {
        let scheme = ConcordanceScheme::ga4gh().unwrap();
        assert_eq!(scheme.name(), GA4GH_SCHEME_NAME);
        assert_eq!(&scheme, default_scheme());
    }

    #[test]
    fn test_completeness() {
        let scheme = default_scheme();
        for pair in TruthAndCallStates::all() {
            assert!(scheme.lookup_pair(pair).is_some(), "missing {pair}");
        }
    }

    #[test]
    fn test_na_cells_are_singletons() {
        for (pair, set) in default_scheme().cells() {
            if set.contains(ContingencyState::NA) {
                assert_eq!(set, NA, "NA combined with other states at {pair}");
            }
        }
    }

    #[test]
    fn test_literal_scenarios() {
        use ContingencyState::{FN, FP, TN, TP};

        assert_eq!(
            lookup(TruthState::HomRef, CallState::HomRef),
            ContingencySet::of(&[TN])
        );
        assert_eq!(
            lookup(TruthState::HomRef, CallState::HetRefVar1),
            ContingencySet::of(&[FP, TN])
        );
        assert_eq!(
            lookup(TruthState::HetRefVar1, CallState::HetVar1Var2),
            ContingencySet::of(&[TP, FP])
        );
        assert_eq!(
            lookup(TruthState::HetVar1Var2, CallState::HetVar1Var3),
            ContingencySet::of(&[TP, FP, FN])
        );
        assert_eq!(lookup(TruthState::HomRef, CallState::HetRefVar2), NA);
    }

    #[test]
    fn test_no_call_is_empty_not_absent() {
        let set = default_scheme().lookup(TruthState::HomRef, CallState::NoCall);
        assert_eq!(set, Some(EMPTY));
        assert!(!set.unwrap().is_na());
    }

    #[test]
    fn test_missed_variant_is_false_negative() {
        assert_eq!(lookup(TruthState::HetRefVar1, CallState::HomRef), TN_FN);
        assert_eq!(lookup(TruthState::HomVar1, CallState::HomRef), FN_ONLY);
        assert_eq!(lookup(TruthState::HetVar1Var2, CallState::HomVar2), TP_FN);
    }

    #[test]
    fn test_filtered_truth_contributes_nothing() {
        for call_state in [CallState::HomRef, CallState::HetRefVar1, CallState::HomVar1] {
            assert_eq!(lookup(TruthState::Filtered, call_state), EMPTY);
            assert_eq!(lookup(TruthState::LowGq, call_state), EMPTY);
        }
    }

    #[test]
    fn test_determinism() {
        for pair in TruthAndCallStates::all() {
            let first = default_scheme().lookup_pair(pair);
            let second = ConcordanceScheme::ga4gh().unwrap().lookup_pair(pair);
            assert_eq!(first, second);
            assert_eq!(first, default_scheme().lookup_pair(pair));
        }
    }

    #[test]
    fn test_concurrent_readers() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    default_scheme()
                        .cells()
                        .filter(|(_, set)| set.is_empty())
                        .count()
                })
            })
            .collect();

        let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(counts.windows(2).all(|w| w[0] == w[1]));
        assert!(counts[0] > 0);
    }

    #[test]
    fn test_omitting_a_pair_fails_validation() {
        let mut builder = SchemeBuilder::new("broken");
        for (call_state, cells) in &GA4GH_ROWS {
            builder.add_row(*call_state, cells).unwrap();
        }
        builder.clear_cell(TruthState::HomVar1, CallState::HomVar2);

        let err = builder.build().unwrap_err();
        assert!(matches!(
            err,
            SchemeError::MissingCell {
                truth_state: TruthState::HomVar1,
                call_state: CallState::HomVar2
            }
        ));
    }

    #[test]
    fn test_omitting_a_row_fails_validation() {
        let mut builder = SchemeBuilder::new("broken");
        for (call_state, cells) in GA4GH_ROWS.iter().filter(|(c, _)| *c != CallState::IsMixed) {
            builder.add_row(*call_state, cells).unwrap();
        }

        let err = builder.build().unwrap_err();
        assert_eq!(err.to_string(), "Missing scheme tuple: [HOM_REF, IS_MIXED]");
    }
}
