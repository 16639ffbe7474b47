//! # bolao_core - Deterministic Pool Prediction Engine
//!
//! Computation core for recreational football prediction pools: resolves a
//! knockout template against one participant's picks, and scores guesses
//! against real results.
//!
//! ## Features
//! - 100% deterministic: same context, same bracket, every time
//! - Total functions: incomplete picks come back as pending slots, never
//!   as errors
//! - Template-driven: the knockout format is a validated YAML asset, the
//!   resolver works on any single-elimination template
//! - No I/O and no clock reads; callers own persistence and time

pub mod bracket;
pub mod data;
pub mod error;
pub mod models;
pub mod pool;
pub mod scoring;

pub use bracket::{
    build_user_bracket, resolve_bracket, AdvancePick, BracketDiagnostics, BracketResolution,
    PredictionsMap, UserBracketContext,
};
pub use data::{parse_template, worldcup2026_knockout_template};
pub use error::TemplateError;
pub use models::{
    BestThirdEntry, GroupLetter, GroupPlacement, GroupPositions, KnockoutStage,
    KnockoutTemplateMatch, MatchCode, SlotSource, TeamId, UserBracketMatch,
};
pub use pool::{derive_pool_phase, is_match_locked, PoolPhase};
pub use scoring::{
    score_match, MatchGuess, MatchKind, MatchOutcome, MatchPoints, ScoreLine, VictoryMethod,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const TEMPLATE_SCHEMA_VERSION: u8 = 1;
