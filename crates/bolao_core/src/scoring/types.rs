use serde::{Deserialize, Serialize};

use crate::models::TeamId;

/// Points for a bit-exact scoreline.
pub const EXACT_SCORE_POINTS: u32 = 3;
/// Points for the right 1X2 tendency with a different scoreline.
pub const TENDENCY_POINTS: u32 = 1;
/// Knockout bonus for the right advancing team AND the right method.
pub const METHOD_POINTS: u32 = 1;

/// Group-stage or knockout match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchKind {
    Group,
    Knockout,
}

/// How a knockout match was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VictoryMethod {
    Regulation,
    ExtraTime,
    Penalties,
}

/// A 90-minute scoreline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub home: u32,
    pub away: u32,
}

impl ScoreLine {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// 1X2 reading of the scoreline.
    pub fn tendency(self) -> Tendency {
        if self.home > self.away {
            Tendency::HomeWin
        } else if self.home < self.away {
            Tendency::AwayWin
        } else {
            Tendency::Draw
        }
    }
}

/// Home win / draw / away win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tendency {
    HomeWin,
    Draw,
    AwayWin,
}

/// What actually happened in one match.
///
/// `winner` and `method` are only meaningful for knockout matches: the team
/// that advanced and how the tie was decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub kind: MatchKind,
    pub score: ScoreLine,
    #[serde(default)]
    pub winner: Option<TeamId>,
    #[serde(default)]
    pub method: Option<VictoryMethod>,
}

impl MatchOutcome {
    pub fn group(score: ScoreLine) -> Self {
        Self { kind: MatchKind::Group, score, winner: None, method: None }
    }

    pub fn knockout(score: ScoreLine, winner: impl Into<TeamId>, method: VictoryMethod) -> Self {
        Self {
            kind: MatchKind::Knockout,
            score,
            winner: Some(winner.into()),
            method: Some(method),
        }
    }
}

/// One participant's guess for one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchGuess {
    pub score: ScoreLine,
    #[serde(default)]
    pub winner: Option<TeamId>,
    #[serde(default)]
    pub method: Option<VictoryMethod>,
}

impl MatchGuess {
    pub fn score_only(score: ScoreLine) -> Self {
        Self { score, winner: None, method: None }
    }

    pub fn knockout(score: ScoreLine, winner: impl Into<TeamId>, method: VictoryMethod) -> Self {
        Self { score, winner: Some(winner.into()), method: Some(method) }
    }
}

/// Points awarded for one match, with the full per-criterion breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPoints {
    pub total: u32,

    pub exact_score_points: u32,
    pub tendency_points: u32,
    pub method_points: u32,

    /// Scoreline matched exactly.
    pub exact_score: bool,
    /// Got the outcome broadly right: exact score or right tendency.
    pub correct_tendency: bool,
    /// Knockout only: right advancing team and right method.
    pub correct_method: bool,
}
