use crate::scoring::types::{
    MatchGuess, MatchKind, MatchOutcome, MatchPoints, EXACT_SCORE_POINTS, METHOD_POINTS,
    TENDENCY_POINTS,
};

/// Score one guess against one real outcome.
///
/// Rule table:
/// - exact scoreline: 3 points (the tendency criterion is skipped);
/// - right 1X2 tendency with a different scoreline: 1 point;
/// - knockout only: right advancing team AND right method: +1 point,
///   independent of the scoreline criteria.
///
/// Pure and total: no input is rejected, a malformed guess simply fails to
/// match.
pub fn score_match(outcome: &MatchOutcome, guess: &MatchGuess) -> MatchPoints {
    let mut exact_score_points = 0;
    let mut tendency_points = 0;
    let mut method_points = 0;

    let exact_score =
        outcome.score.home == guess.score.home && outcome.score.away == guess.score.away;

    if exact_score {
        exact_score_points = EXACT_SCORE_POINTS;
    } else if outcome.score.tendency() == guess.score.tendency() {
        tendency_points = TENDENCY_POINTS;
    }

    // Knockout bonus: advancing team and method must BOTH match, and both
    // sides must have supplied them. Not gated on the scoreline criteria.
    let correct_method = outcome.kind == MatchKind::Knockout
        && outcome.winner.is_some()
        && outcome.winner == guess.winner
        && outcome.method.is_some()
        && outcome.method == guess.method;
    if correct_method {
        method_points = METHOD_POINTS;
    }

    MatchPoints {
        total: exact_score_points + tendency_points + method_points,
        exact_score_points,
        tendency_points,
        method_points,
        exact_score,
        correct_tendency: exact_score_points > 0 || tendency_points > 0,
        correct_method,
    }
}
