use thiserror::Error;

use crate::models::MatchCode;

/// Structural problems in a knockout template.
///
/// Resolution and scoring never fail; the only fallible surface is loading
/// and validating a template.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Duplicate match code: {0}")]
    DuplicateCode(MatchCode),

    #[error("Match {code} references {references}, which is not defined earlier in the template")]
    UnresolvedReference { code: MatchCode, references: MatchCode },

    #[error("Match {code} references group position {position} (expected 1..=3)")]
    InvalidPosition { code: MatchCode, position: u8 },

    #[error("Match {code} has a best-third pool with no groups")]
    EmptyThirdPool { code: MatchCode },
}
