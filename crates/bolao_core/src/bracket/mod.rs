//! Knockout bracket resolution.
//!
//! Turns the shared knockout template plus one participant's picks (group
//! standings, best-third ranking, advance picks) into the concrete matches
//! of that participant's bracket. Pure and total: incomplete picks surface
//! as `None` slots, never as errors.

mod context;
mod resolver;
mod validate;


pub use context::{AdvancePick, PredictionsMap, UserBracketContext};
pub use resolver::{build_user_bracket, resolve_bracket, BracketDiagnostics, BracketResolution};
pub use validate::validate_template;
