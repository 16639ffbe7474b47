use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{BestThirdEntry, GroupPositions, MatchCode, TeamId};

/// A participant's pick of who advances from one knockout match.
///
/// `winner: None` is a stored-but-undecided pick and resolves the same as no
/// pick at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancePick {
    pub winner: Option<TeamId>,
}

impl AdvancePick {
    pub fn of(winner: impl Into<TeamId>) -> Self {
        Self { winner: Some(winner.into()) }
    }
}

/// Knockout picks made so far, keyed by match code.
pub type PredictionsMap = BTreeMap<MatchCode, AdvancePick>;

/// Everything one participant has decided so far: group standings, the
/// best-third ranking, and any knockout picks already made.
///
/// All of it may be partially filled; unresolvable slots come out as `None`
/// in the bracket rather than as errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBracketContext {
    pub group_positions: GroupPositions,
    pub best_third_ranking: Vec<BestThirdEntry>,
    #[serde(default)]
    pub predictions: PredictionsMap,
}

impl UserBracketContext {
    /// Picked winner for a match, if the participant has decided one.
    pub(crate) fn picked_winner(&self, code: &MatchCode) -> Option<&TeamId> {
        self.predictions.get(code).and_then(|pick| pick.winner.as_ref())
    }
}
