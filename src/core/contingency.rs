use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::core::types::ContingencyState;

bitflags! {
    /// One bit per [`ContingencyState`], declared in the same order
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    struct Flags: u8 {
        const TP = 1 << 0;
        const FP = 1 << 1;
        const TN = 1 << 2;
        const FN = 1 << 3;
        const NA = 1 << 4;
    }
}

const fn flag(state: ContingencyState) -> Flags {
    match state {
        ContingencyState::TP => Flags::TP,
        ContingencyState::FP => Flags::FP,
        ContingencyState::TN => Flags::TN,
        ContingencyState::FN => Flags::FN,
        ContingencyState::NA => Flags::NA,
    }
}

/// The set of contingency table entries a single (truth, call) comparison
/// contributes to.
///
/// Iteration follows the declaration order TP, FP, TN, FN, NA.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<ContingencyState>", from = "Vec<ContingencyState>")]
pub struct ContingencySet(Flags);

impl ContingencySet {
    /// Build a set from a list of states. Duplicates collapse.
    #[must_use]
    pub const fn of(states: &[ContingencyState]) -> Self {
        let mut flags = Flags::empty();
        let mut i = 0;
        while i < states.len() {
            flags = flags.union(flag(states[i]));
            i += 1;
        }
        Self(flags)
    }

    #[must_use]
    pub const fn contains(self, state: ContingencyState) -> bool {
        self.0.contains(flag(state))
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.bits().count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// True if the set marks an unreachable comparison
    #[must_use]
    pub const fn is_na(self) -> bool {
        self.contains(ContingencyState::NA)
    }

    /// NA may only appear on its own
    #[must_use]
    pub const fn is_well_formed(self) -> bool {
        !self.is_na() || self.len() == 1
    }

    #[must_use]
    pub const fn with(self, state: ContingencyState) -> Self {
        Self(self.0.union(flag(state)))
    }

    pub fn iter(self) -> Iter {
        Iter(self.0.iter())
    }
}

/// Iterator over the states of a [`ContingencySet`]
pub struct Iter(bitflags::iter::Iter<Flags>);

impl Iterator for Iter {
    type Item = ContingencyState;

    fn next(&mut self) -> Option<Self::Item> {
        let single = self.0.next()?;
        ContingencyState::ALL
            .into_iter()
            .find(|state| flag(*state) == single)
    }
}

impl std::fmt::Debug for ContingencySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Comma separated states, `-` for the empty set
impl std::fmt::Display for ContingencySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let names: Vec<&str> = self.iter().map(ContingencyState::name).collect();
        f.write_str(&names.join(","))
    }
}

impl From<Vec<ContingencyState>> for ContingencySet {
    fn from(states: Vec<ContingencyState>) -> Self {
        states.into_iter().collect()
    }
}

impl From<ContingencySet> for Vec<ContingencyState> {
    fn from(set: ContingencySet) -> Self {
        set.iter().collect()
    }
}

impl FromIterator<ContingencyState> for ContingencySet {
    fn from_iter<I: IntoIterator<Item = ContingencyState>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::with)
    }
}

impl IntoIterator for ContingencySet {
    type Item = ContingencyState;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Shorthand sets used to keep the scheme tables readable.
// NA means the tuple should never be observed.

pub const NA: ContingencySet = ContingencySet::of(&[ContingencyState::NA]);
pub const EMPTY: ContingencySet = ContingencySet::of(&[]);
pub const TP_ONLY: ContingencySet = ContingencySet::of(&[ContingencyState::TP]);
pub const FP_ONLY: ContingencySet = ContingencySet::of(&[ContingencyState::FP]);
pub const TN_ONLY: ContingencySet = ContingencySet::of(&[ContingencyState::TN]);
pub const FN_ONLY: ContingencySet = ContingencySet::of(&[ContingencyState::FN]);
pub const TP_FN: ContingencySet = ContingencySet::of(&[ContingencyState::TP, ContingencyState::FN]);
pub const TP_FP: ContingencySet = ContingencySet::of(&[ContingencyState::TP, ContingencyState::FP]);
pub const TP_TN: ContingencySet = ContingencySet::of(&[ContingencyState::TP, ContingencyState::TN]);
pub const FP_FN: ContingencySet = ContingencySet::of(&[ContingencyState::FP, ContingencyState::FN]);
pub const FP_TN: ContingencySet = ContingencySet::of(&[ContingencyState::FP, ContingencyState::TN]);
pub const FP_TN_FN: ContingencySet = ContingencySet::of(&[
    ContingencyState::FP,
    ContingencyState::TN,
    ContingencyState::FN,
]);
pub const TP_FP_FN: ContingencySet = ContingencySet::of(&[
    ContingencyState::TP,
    ContingencyState::FP,
    ContingencyState::FN,
]);
pub const TN_FN: ContingencySet = ContingencySet::of(&[ContingencyState::TN, ContingencyState::FN]);
