use serde::{Deserialize, Serialize};
use std::fmt;

use super::team::{GroupLetter, TeamId};

/// Match code within a knockout template (`M73`..`M104` for the 2026
/// template). Opaque to the resolver, so synthetic templates can use any
/// codes they like.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchCode(String);

impl MatchCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MatchCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

/// Knockout rounds, Round-of-32 through the final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KnockoutStage {
    #[serde(rename = "ROUND_OF_32")]
    RoundOf32,
    #[serde(rename = "ROUND_OF_16")]
    RoundOf16,
    QuarterFinal,
    SemiFinal,
    ThirdPlace,
    Final,
}

/// Where a knockout slot's occupant comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotSource {
    /// Direct lookup of a group's final position (1-based, 1..=3).
    GroupPosition { group: GroupLetter, position: u8 },
    /// Next unclaimed team from the best-third ranking whose group is in
    /// `groups`. A team is claimed by at most one slot per resolution.
    BestThirdPool { groups: Vec<GroupLetter> },
    /// The side the participant picked to advance from another match.
    MatchWinner { match_code: MatchCode },
    /// The side the participant did NOT pick (third-place match feeds).
    MatchLoser { match_code: MatchCode },
}

impl SlotSource {
    /// Code of the upstream match this slot depends on, if any.
    pub fn depends_on(&self) -> Option<&MatchCode> {
        match self {
            SlotSource::MatchWinner { match_code } | SlotSource::MatchLoser { match_code } => {
                Some(match_code)
            }
            _ => None,
        }
    }
}

/// One row of the immutable knockout template, shared by every bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockoutTemplateMatch {
    pub code: MatchCode,
    pub stage: KnockoutStage,
    pub home: SlotSource,
    pub away: SlotSource,
}

/// One knockout match resolved for a single participant's bracket.
///
/// `None` sides mean "cannot be known yet from this participant's picks";
/// callers render those as pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBracketMatch {
    pub code: MatchCode,
    pub stage: KnockoutStage,
    pub home_team: Option<TeamId>,
    pub away_team: Option<TeamId>,
}

impl UserBracketMatch {
    /// Both sides known.
    pub fn is_resolved(&self) -> bool {
        self.home_team.is_some() && self.away_team.is_some()
    }
}
