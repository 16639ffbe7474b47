//! Pool lifecycle derivations: when picks open, lock, and close.

mod phase;

pub use phase::{
    derive_pool_phase, format_countdown, is_match_locked, MatchStatus, MatchTiming, PoolPhase,
    PoolStatus, PoolTiming,
};
