use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a pool is in its lifecycle, as seen by pick submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolPhase {
    /// Picks are open.
    AwaitingPicks,
    /// Picks are closed but play has not started.
    PicksClosed,
    /// The tournament window is running.
    InProgress,
    /// Finished or cancelled.
    Finished,
}

/// Administrative pool status, as stored by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolStatus {
    Draft,
    Active,
    Finished,
    Cancelled,
}

/// Match status from the results feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    Live,
    InProgress,
    Finished,
}

/// Timing fields of a pool. Everything is optional; partially configured
/// pools are the norm while an organizer is still setting things up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolTiming {
    #[serde(default)]
    pub status: Option<PoolStatus>,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
}

/// Timing fields of one match inside a pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTiming {
    #[serde(default)]
    pub status: Option<MatchStatus>,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
}

/// Derive the pool phase from its timing fields.
///
/// `now` is passed in so the derivation stays pure; callers supply the
/// clock.
pub fn derive_pool_phase(pool: Option<&PoolTiming>, now: DateTime<Utc>) -> PoolPhase {
    let Some(pool) = pool else {
        return PoolPhase::AwaitingPicks;
    };

    if matches!(pool.status, Some(PoolStatus::Finished) | Some(PoolStatus::Cancelled)) {
        return PoolPhase::Finished;
    }
    if pool.ends_at.is_some_and(|ends| now >= ends) {
        return PoolPhase::Finished;
    }
    if pool.starts_at.is_some_and(|starts| now >= starts) {
        return PoolPhase::InProgress;
    }
    if pool.status == Some(PoolStatus::Active) {
        return PoolPhase::AwaitingPicks;
    }
    PoolPhase::PicksClosed
}

/// Whether picks for one match are locked.
///
/// Locked when the pool phase forbids picks, kickoff has passed, or the
/// feed already reports the match as live.
pub fn is_match_locked(
    timing: Option<&MatchTiming>,
    phase: PoolPhase,
    now: DateTime<Utc>,
) -> bool {
    if matches!(phase, PoolPhase::PicksClosed | PoolPhase::Finished) {
        return true;
    }
    let Some(timing) = timing else {
        return false;
    };

    if timing.starts_at.is_some_and(|starts| now >= starts) {
        return true;
    }
    matches!(timing.status, Some(MatchStatus::Live) | Some(MatchStatus::InProgress))
}

/// Compact countdown label to a deadline: "2d 5h", "5h 12min", "43min",
/// or "ended" once the deadline has passed. `None` without a target.
pub fn format_countdown(target: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<String> {
    let target = target?;
    let remaining = target - now;

    if remaining.num_milliseconds() <= 0 {
        return Some("ended".to_string());
    }

    let total_minutes = remaining.num_minutes();
    let days = total_minutes / (60 * 24);
    let hours = (total_minutes - days * 24 * 60) / 60;
    let minutes = total_minutes % 60;

    let label = if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}min")
    } else {
        format!("{minutes}min")
    };
    Some(label)
}
