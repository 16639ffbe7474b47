//! Knockout template loading.
//!
//! Templates are declarative YAML assets under the workspace `data/`
//! directory, embedded at compile time. The resolver itself is
//! format-agnostic; everything tournament-specific lives in the asset.

use std::sync::OnceLock;

use crate::bracket::validate_template;
use crate::error::TemplateError;
use crate::models::KnockoutTemplateMatch;

/// FIFA World Cup 2026 knockout template (M73..M104), embedded at compile
/// time.
pub const WORLD_CUP_2026_KNOCKOUT_YAML: &str =
    include_str!("../../../../data/templates/worldcup2026_knockout.yaml");

static WORLD_CUP_2026_KNOCKOUT: OnceLock<Vec<KnockoutTemplateMatch>> = OnceLock::new();

/// The 2026 knockout template: 32 matches in resolution order.
///
/// Parsed and validated on first call, cached afterwards.
///
/// # Panics
///
/// Panics if the embedded YAML is corrupt. The asset is compiled into the
/// binary, so this cannot happen in a build that passed its tests.
pub fn worldcup2026_knockout_template() -> &'static [KnockoutTemplateMatch] {
    WORLD_CUP_2026_KNOCKOUT.get_or_init(|| {
        parse_template(WORLD_CUP_2026_KNOCKOUT_YAML)
            .expect("Failed to parse worldcup2026_knockout.yaml")
    })
}

/// Parse and validate a knockout template from YAML.
///
/// Use this for templates shipped outside the binary; the embedded 2026
/// template is already available through [`worldcup2026_knockout_template`].
pub fn parse_template(yaml: &str) -> Result<Vec<KnockoutTemplateMatch>, TemplateError> {
    let template: Vec<KnockoutTemplateMatch> = serde_yaml::from_str(yaml)?;
    validate_template(&template)?;
    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KnockoutStage, SlotSource};

    #[test]
    fn embedded_template_parses_and_validates() {
        let template = worldcup2026_knockout_template();
        assert_eq!(template.len(), 32);
    }

    #[test]
    fn stage_counts_match_the_format() {
        let template = worldcup2026_knockout_template();
        let count = |stage: KnockoutStage| {
            template.iter().filter(|m| m.stage == stage).count()
        };

        assert_eq!(count(KnockoutStage::RoundOf32), 16);
        assert_eq!(count(KnockoutStage::RoundOf16), 8);
        assert_eq!(count(KnockoutStage::QuarterFinal), 4);
        assert_eq!(count(KnockoutStage::SemiFinal), 2);
        assert_eq!(count(KnockoutStage::ThirdPlace), 1);
        assert_eq!(count(KnockoutStage::Final), 1);
    }

    #[test]
    fn eight_slots_draw_from_best_third_pools() {
        let template = worldcup2026_knockout_template();
        let pools = template
            .iter()
            .flat_map(|m| [&m.home, &m.away])
            .filter(|s| matches!(s, SlotSource::BestThirdPool { .. }))
            .count();
        assert_eq!(pools, 8);
    }

    #[test]
    fn third_place_match_takes_both_semifinal_losers() {
        let template = worldcup2026_knockout_template();
        let third = template
            .iter()
            .find(|m| m.stage == KnockoutStage::ThirdPlace)
            .unwrap();
        assert!(matches!(third.home, SlotSource::MatchLoser { .. }));
        assert!(matches!(third.away, SlotSource::MatchLoser { .. }));
    }
}
