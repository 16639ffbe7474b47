//! Domain vocabulary shared by the bracket resolver and the scoring rules.

pub mod group;
pub mod knockout;
pub mod team;

pub use group::{BestThirdEntry, GroupPlacement, GroupPositions};
pub use knockout::{KnockoutStage, KnockoutTemplateMatch, MatchCode, SlotSource, UserBracketMatch};
pub use team::{GroupLetter, TeamId};
