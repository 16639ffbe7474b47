use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::bracket::context::UserBracketContext;
use crate::models::{KnockoutTemplateMatch, MatchCode, SlotSource, TeamId, UserBracketMatch};

/// Data-inconsistency findings from one resolution pass.
///
/// A picked winner that matches neither side of its match is not the same
/// thing as a slot that is simply undecided; callers that persist picks can
/// use this to catch stale ids after a team swap or an edited pick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BracketDiagnostics {
    /// Matches whose picked winner matched neither resolved side.
    pub mismatched_winners: Vec<MatchCode>,
}

impl BracketDiagnostics {
    pub fn is_clean(&self) -> bool {
        self.mismatched_winners.is_empty()
    }
}

/// Output of [`resolve_bracket`]: every template match resolved for one
/// participant, plus diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketResolution {
    pub matches: Vec<UserBracketMatch>,
    pub diagnostics: BracketDiagnostics,
}

/// Resolve a whole knockout template against one participant's picks.
///
/// Walks the template in row order (validated to be topological at load
/// time) and resolves both slots of every match. The output always has
/// exactly one entry per template row, in template order; slots that cannot
/// be known yet are `None`. Never fails: re-run with a more complete context
/// to recompute from scratch.
pub fn resolve_bracket(
    template: &[KnockoutTemplateMatch],
    context: &UserBracketContext,
) -> BracketResolution {
    let mut resolver = SlotResolver::new(context);
    let mut matches = Vec::with_capacity(template.len());

    for tmpl in template {
        let home_team = resolver.resolve(&tmpl.home);
        let away_team = resolver.resolve(&tmpl.away);

        let resolved = UserBracketMatch {
            code: tmpl.code.clone(),
            stage: tmpl.stage,
            home_team,
            away_team,
        };

        // Later rows reach earlier ones through the running map.
        resolver.record(resolved.clone());
        matches.push(resolved);
    }

    BracketResolution { matches, diagnostics: resolver.diagnostics }
}

/// [`resolve_bracket`] without the diagnostics: just the resolved matches.
pub fn build_user_bracket(
    template: &[KnockoutTemplateMatch],
    context: &UserBracketContext,
) -> Vec<UserBracketMatch> {
    resolve_bracket(template, context).matches
}

/// Slot resolution state for a single bracket build.
///
/// The used-thirds set and the resolved-match map live exactly as long as
/// one resolution pass; nothing is shared between calls.
struct SlotResolver<'a> {
    context: &'a UserBracketContext,
    used_thirds: HashSet<&'a TeamId>,
    resolved: HashMap<MatchCode, UserBracketMatch>,
    diagnostics: BracketDiagnostics,
}

impl<'a> SlotResolver<'a> {
    fn new(context: &'a UserBracketContext) -> Self {
        Self {
            context,
            used_thirds: HashSet::new(),
            resolved: HashMap::new(),
            diagnostics: BracketDiagnostics::default(),
        }
    }

    fn record(&mut self, resolved: UserBracketMatch) {
        self.resolved.insert(resolved.code.clone(), resolved);
    }

    fn resolve(&mut self, source: &SlotSource) -> Option<TeamId> {
        match source {
            SlotSource::GroupPosition { group, position } => self
                .context
                .group_positions
                .get(group)?
                .position(*position)
                .cloned(),

            SlotSource::BestThirdPool { groups } => {
                // Best available third from the pool, in ranking order.
                // Claimed teams stay claimed for the rest of this build.
                let candidate = self
                    .context
                    .best_third_ranking
                    .iter()
                    .find(|entry| {
                        groups.contains(&entry.group) && !self.used_thirds.contains(&entry.team)
                    })?;
                self.used_thirds.insert(&candidate.team);
                Some(candidate.team.clone())
            }

            SlotSource::MatchWinner { match_code } => {
                self.context.picked_winner(match_code).cloned()
            }

            SlotSource::MatchLoser { match_code } => self.resolve_loser(match_code),
        }
    }

    fn resolve_loser(&mut self, match_code: &MatchCode) -> Option<TeamId> {
        let base = self.resolved.get(match_code)?;
        let winner = self.context.picked_winner(match_code)?;

        let home = base.home_team.as_ref()?;
        let away = base.away_team.as_ref()?;

        if winner == home {
            Some(away.clone())
        } else if winner == away {
            Some(home.clone())
        } else {
            // Winner matches neither side: stale or edited pick. Degrade to
            // "undecided" but keep the signal separate from the legitimate
            // not-yet-picked case.
            warn!(
                match_code = %match_code,
                winner = %winner,
                "picked winner matches neither side of the match"
            );
            if !self.diagnostics.mismatched_winners.contains(match_code) {
                self.diagnostics.mismatched_winners.push(match_code.clone());
            }
            None
        }
    }
}
