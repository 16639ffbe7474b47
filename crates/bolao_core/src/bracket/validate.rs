use std::collections::HashSet;

use crate::error::TemplateError;
use crate::models::{KnockoutTemplateMatch, SlotSource};

/// Structural validation of a knockout template.
///
/// The resolver walks the template in row order and trusts that order to be
/// topological. That assumption is checked here, once, at load time:
/// a `MATCH_WINNER`/`MATCH_LOSER` slot may only reference a match defined in
/// an earlier row (which also rules out unknown codes and cycles).
pub fn validate_template(template: &[KnockoutTemplateMatch]) -> Result<(), TemplateError> {
    let mut seen = HashSet::new();

    for tmpl in template {
        for slot in [&tmpl.home, &tmpl.away] {
            match slot {
                SlotSource::GroupPosition { position, .. } => {
                    if !(1..=3).contains(position) {
                        return Err(TemplateError::InvalidPosition {
                            code: tmpl.code.clone(),
                            position: *position,
                        });
                    }
                }
                SlotSource::BestThirdPool { groups } => {
                    if groups.is_empty() {
                        return Err(TemplateError::EmptyThirdPool { code: tmpl.code.clone() });
                    }
                }
                SlotSource::MatchWinner { match_code } | SlotSource::MatchLoser { match_code } => {
                    if !seen.contains(match_code) {
                        return Err(TemplateError::UnresolvedReference {
                            code: tmpl.code.clone(),
                            references: match_code.clone(),
                        });
                    }
                }
            }
        }

        if !seen.insert(tmpl.code.clone()) {
            return Err(TemplateError::DuplicateCode(tmpl.code.clone()));
        }
    }

    Ok(())
}
