//! Match scoring rules.
//!
//! One fixed rule table applied to (real outcome, guess) pairs; leaderboard
//! aggregation over entries and matches belongs to the caller.

mod calculator;
mod types;

pub use calculator::score_match;
pub use types::{
    MatchGuess, MatchKind, MatchOutcome, MatchPoints, ScoreLine, Tendency, VictoryMethod,
    EXACT_SCORE_POINTS, METHOD_POINTS, TENDENCY_POINTS,
};
