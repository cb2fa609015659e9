use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, FromRepr};
use thiserror::Error;

/// Every variant of a state enum in declaration order, taken from the derived
/// `EnumCount` and `FromRepr` so it always matches the variant list.
macro_rules! all_variants {
    ($ty:ident, $first:ident) => {{
        let mut all = [$ty::$first; $ty::COUNT];
        let mut i = 0;
        while i < $ty::COUNT {
            all[i] = match $ty::from_repr(i) {
                Some(state) => state,
                None => panic!(concat!(stringify!($ty), " discriminants are not contiguous")),
            };
            i += 1;
        }
        all
    }};
}

/// Error returned when a state name cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{name}' (expected one of: {expected})")]
pub struct ParseStateError {
    pub kind: &'static str,
    pub name: String,
    pub expected: String,
}

/// Normalize a user-supplied state name: upper case, `-` treated as `_`
fn normalize_name(s: &str) -> String {
    s.trim().to_ascii_uppercase().replace('-', "_")
}

fn parse_named<T: Copy>(
    s: &str,
    all: &[T],
    name_of: fn(T) -> &'static str,
    kind: &'static str,
) -> Result<T, ParseStateError> {
    let normalized = normalize_name(s);
    all.iter()
        .copied()
        .find(|state| name_of(*state) == normalized)
        .ok_or_else(|| ParseStateError {
            kind,
            name: s.to_string(),
            expected: all
                .iter()
                .map(|state| name_of(*state))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Genotype category observed on the truth side of a site comparison.
///
/// Declaration order is the column order of the concordance table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumCount, EnumIter, FromRepr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TruthState {
    /// 0/0
    HomRef,
    /// 0/1
    HetRefVar1,
    /// 1/2, both alleles non-reference
    HetVar1Var2,
    /// 1/1
    HomVar1,
    /// ./.
    NoCall,
    /// Genotype quality below threshold
    LowGq,
    /// Read depth below threshold
    LowDp,
    /// Site or genotype filtered
    Filtered,
    /// Mixed variant types at the site
    IsMixed,
}

impl TruthState {
    pub const COUNT: usize = <Self as EnumCount>::COUNT;

    pub const ALL: [TruthState; Self::COUNT] = all_variants!(TruthState, HomRef);

    /// Ordinal position in [`TruthState::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HomRef => "HOM_REF",
            Self::HetRefVar1 => "HET_REF_VAR1",
            Self::HetVar1Var2 => "HET_VAR1_VAR2",
            Self::HomVar1 => "HOM_VAR1",
            Self::NoCall => "NO_CALL",
            Self::LowGq => "LOW_GQ",
            Self::LowDp => "LOW_DP",
            Self::Filtered => "FILTERED",
            Self::IsMixed => "IS_MIXED",
        }
    }
}

impl std::fmt::Display for TruthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TruthState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(s, &Self::ALL, Self::name, "truth state")
    }
}

/// Genotype category observed on the call side of a site comparison.
///
/// Calls may introduce alleles the truth did not carry, so the het and hom
/// categories are split by which symbolic alternate allele slot they use.
/// Declaration order is the row order of the concordance table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumCount, EnumIter, FromRepr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallState {
    HomRef,
    HetRefVar1,
    HetRefVar2,
    HetRefVar3,
    HetVar1Var2,
    HetVar1Var3,
    HetVar3Var4,
    HomVar1,
    HomVar2,
    HomVar3,
    NoCall,
    LowGq,
    LowDp,
    Filtered,
    IsMixed,
}

impl CallState {
    pub const COUNT: usize = <Self as EnumCount>::COUNT;

    pub const ALL: [CallState; Self::COUNT] = all_variants!(CallState, HomRef);

    /// Ordinal position in [`CallState::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HomRef => "HOM_REF",
            Self::HetRefVar1 => "HET_REF_VAR1",
            Self::HetRefVar2 => "HET_REF_VAR2",
            Self::HetRefVar3 => "HET_REF_VAR3",
            Self::HetVar1Var2 => "HET_VAR1_VAR2",
            Self::HetVar1Var3 => "HET_VAR1_VAR3",
            Self::HetVar3Var4 => "HET_VAR3_VAR4",
            Self::HomVar1 => "HOM_VAR1",
            Self::HomVar2 => "HOM_VAR2",
            Self::HomVar3 => "HOM_VAR3",
            Self::NoCall => "NO_CALL",
            Self::LowGq => "LOW_GQ",
            Self::LowDp => "LOW_DP",
            Self::Filtered => "FILTERED",
            Self::IsMixed => "IS_MIXED",
        }
    }
}

impl std::fmt::Display for CallState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CallState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(s, &Self::ALL, Self::name, "call state")
    }
}

/// One cell of a binary classification contingency table
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumCount, EnumIter, FromRepr,
)]
pub enum ContingencyState {
    /// True positive
    TP,
    /// False positive
    FP,
    /// True negative
    TN,
    /// False negative
    FN,
    /// The (truth, call) combination can never be produced by the comparison
    NA,
}

impl ContingencyState {
    pub const COUNT: usize = <Self as EnumCount>::COUNT;

    pub const ALL: [ContingencyState; Self::COUNT] = all_variants!(ContingencyState, TP);

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TP => "TP",
            Self::FP => "FP",
            Self::TN => "TN",
            Self::FN => "FN",
            Self::NA => "NA",
        }
    }
}

impl std::fmt::Display for ContingencyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContingencyState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(s, &Self::ALL, Self::name, "contingency state")
    }
}

/// A (truth, call) pair; the key of the concordance scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TruthAndCallStates {
    pub truth_state: TruthState,
    pub call_state: CallState,
}

impl TruthAndCallStates {
    #[must_use]
    pub const fn new(truth_state: TruthState, call_state: CallState) -> Self {
        Self {
            truth_state,
            call_state,
        }
    }

    /// Every pair of the domain, truth-major
    pub fn all() -> impl Iterator<Item = Self> {
        TruthState::ALL.into_iter().flat_map(|truth_state| {
            CallState::ALL
                .into_iter()
                .map(move |call_state| Self::new(truth_state, call_state))
        })
    }
}

impl std::fmt::Display for TruthAndCallStates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.truth_state, self.call_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_arrays_match_ordinals() {
        for (i, state) in TruthState::ALL.iter().enumerate() {
            assert_eq!(state.index(), i);
        }
        for (i, state) in CallState::ALL.iter().enumerate() {
            assert_eq!(state.index(), i);
        }
        for (i, state) in ContingencyState::ALL.iter().enumerate() {
            assert_eq!(state.index(), i);
        }
    }

    #[test]
    fn test_all_arrays_list_every_variant() {
        assert_eq!(TruthState::ALL.to_vec(), TruthState::iter().collect::<Vec<_>>());
        assert_eq!(CallState::ALL.to_vec(), CallState::iter().collect::<Vec<_>>());
        assert_eq!(
            ContingencyState::ALL.to_vec(),
            ContingencyState::iter().collect::<Vec<_>>()
        );

        assert_eq!(TruthState::COUNT, 9);
        assert_eq!(CallState::COUNT, 15);
        assert_eq!(ContingencyState::COUNT, 5);
    }

    #[test]
    fn test_every_variant_has_a_name() {
        for state in TruthState::iter() {
            assert_eq!(state.name().parse::<TruthState>(), Ok(state));
        }
        for state in CallState::iter() {
            assert_eq!(state.name().parse::<CallState>(), Ok(state));
        }
    }

    #[test]
    fn test_parse_state_names() {
        assert_eq!("HOM_REF".parse::<TruthState>(), Ok(TruthState::HomRef));
        assert_eq!("het-var1-var2".parse::<TruthState>(), Ok(TruthState::HetVar1Var2));
        assert_eq!("Het_Var3_Var4".parse::<CallState>(), Ok(CallState::HetVar3Var4));
        assert_eq!("na".parse::<ContingencyState>(), Ok(ContingencyState::NA));

        // Call-only categories are not truth states
        let err = "HET_REF_VAR2".parse::<TruthState>().unwrap_err();
        assert_eq!(err.kind, "truth state");
        assert_eq!(err.name, "HET_REF_VAR2");
        assert!(err.to_string().contains("HOM_REF"));
    }

    #[test]
    fn test_display_matches_serde_names() {
        for state in TruthState::ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{state}\""));
        }
        for state in CallState::ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{state}\""));
        }
    }

    #[test]
    fn test_pair_structural_equality() {
        let a = TruthAndCallStates::new(TruthState::HomRef, CallState::HetRefVar1);
        let b = TruthAndCallStates::new(TruthState::HomRef, CallState::HetRefVar1);
        assert_eq!(a, b);

        let set: HashSet<TruthAndCallStates> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_eq!(a.to_string(), "[HOM_REF, HET_REF_VAR1]");
    }

    #[test]
    fn test_all_pairs_cover_domain() {
        let pairs: HashSet<TruthAndCallStates> = TruthAndCallStates::all().collect();
        assert_eq!(pairs.len(), TruthState::COUNT * CallState::COUNT);
    }
}
