use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::team::{GroupLetter, TeamId};

/// Final standing of one group as picked by a participant.
///
/// Filled progressively while the participant works through the group stage:
/// `first` and `second` must be present before Round-of-32 slots that
/// reference them can resolve; `third` only feeds best-third pools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPlacement {
    #[serde(default)]
    pub first: Option<TeamId>,
    #[serde(default)]
    pub second: Option<TeamId>,
    #[serde(default)]
    pub third: Option<TeamId>,
    #[serde(default)]
    pub fourth: Option<TeamId>,
}

impl GroupPlacement {
    /// Team at a 1-based group position. Only positions 1..=3 are ever
    /// referenced by knockout slots; anything else is unfilled.
    pub fn position(&self, position: u8) -> Option<&TeamId> {
        match position {
            1 => self.first.as_ref(),
            2 => self.second.as_ref(),
            3 => self.third.as_ref(),
            _ => None,
        }
    }
}

/// Per-participant group standings, keyed by group letter.
pub type GroupPositions = BTreeMap<GroupLetter, GroupPlacement>;

/// One entry of the best-third ranking (best first, up to eight entries).
///
/// The ranking order is supplied by the caller and never recomputed here;
/// at most one entry per group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestThirdEntry {
    pub team: TeamId,
    pub group: GroupLetter,
}

impl BestThirdEntry {
    pub fn new(team: impl Into<TeamId>, group: GroupLetter) -> Self {
        Self { team: team.into(), group }
    }
}
