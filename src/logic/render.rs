//! Stage orchestration: classify each stage, split its matches into groups and rounds, and
//! drive naming, origin hints, connectors and rankings for each of them.

use crate::config::{OriginPlacement, ViewerConfig};
use crate::lang::Lang;
use crate::logic::final_group::displayed_final_rounds;
use crate::logic::grouping::split_by;
use crate::logic::highlight::HighlightIndex;
use crate::logic::naming::{round_name, RoundNameContext};
use crate::logic::origin::{origin_hint, HintContext, OriginHint};
use crate::logic::plan::{
    BracketPlan, MatchPlan, RoundPlan, RoundRobinGroupPlan, SlotPlan, StageBody, StagePlan,
};
use crate::logic::ranking::{compute_ranking, RANKING_COLUMNS};
use crate::logic::topology::{connection, Connection, ConnectionContext};
use crate::models::{
    BracketKind, FinalType, GrandFinalType, Match, MatchResult, Slot, Stage, StageType,
    TournamentData, ViewerError,
};

/// Owns the output and the hover index of one render call at a time.
#[derive(Debug, Default)]
pub struct RenderSession {
    config: ViewerConfig,
    lang: Lang,
    stages: Vec<StagePlan>,
    highlights: HighlightIndex,
}

impl RenderSession {
    pub fn new(config: ViewerConfig, lang: Lang) -> Self {
        Self {
            config,
            lang,
            stages: Vec::new(),
            highlights: HighlightIndex::default(),
        }
    }

    /// Plan every stage of `data`, in order.
    ///
    /// Previous output is discarded first. If a stage fails, the error is returned and the
    /// stages planned before it stay available through [`RenderSession::stages`].
    pub fn render(&mut self, data: &TournamentData) -> Result<(), ViewerError> {
        self.stages.clear();
        self.highlights = HighlightIndex::from_roster(&data.participants);

        for stage in &data.stages {
            let mut planner = StagePlanner {
                config: &self.config,
                lang: &self.lang,
                data,
                highlights: &mut self.highlights,
            };
            let plan = planner.plan_stage(stage)?;
            self.stages.push(plan);
        }
        Ok(())
    }

    pub fn stages(&self) -> &[StagePlan] {
        &self.stages
    }

    pub fn into_stages(self) -> Vec<StagePlan> {
        self.stages
    }

    pub fn highlights(&self) -> &HighlightIndex {
        &self.highlights
    }

    pub fn lang(&self) -> &Lang {
        &self.lang
    }
}

/// Plan all stages of `data` in one call.
pub fn plan_view(
    data: &TournamentData,
    config: ViewerConfig,
    lang: Lang,
) -> Result<Vec<StagePlan>, ViewerError> {
    let mut session = RenderSession::new(config, lang);
    session.render(data)?;
    Ok(session.into_stages())
}

/// Borrowed view of the session while one stage is planned.
struct StagePlanner<'a> {
    config: &'a ViewerConfig,
    lang: &'a Lang,
    data: &'a TournamentData,
    highlights: &'a mut HighlightIndex,
}

/// Per-round inputs shared by every match of the round.
#[derive(Clone, Copy)]
struct RoundContext {
    bracket: BracketKind,
    round_number: u32,
    hint: Option<OriginHint>,
    connection: Connection,
}

impl<'a> StagePlanner<'a> {
    fn plan_stage(&mut self, stage: &Stage) -> Result<StagePlan, ViewerError> {
        let matches = self.data.stage_matches(stage.id);
        if matches.is_empty() {
            return Err(ViewerError::EmptyStage(stage.id));
        }
        log::debug!(
            "Planning stage {} ({:?}, {} matches)",
            stage.id,
            stage.stage_type,
            matches.len()
        );

        let body = match stage.stage_type {
            StageType::RoundRobin => self.plan_round_robin(matches)?,
            StageType::SingleElimination | StageType::DoubleElimination => {
                self.plan_elimination(stage, matches)?
            }
        };
        Ok(StagePlan {
            stage_id: stage.id,
            name: stage.name.clone(),
            stage_type: stage.stage_type,
            body,
        })
    }

    fn plan_round_robin(&mut self, matches: Vec<&'a Match>) -> Result<StageBody, ViewerError> {
        let header: Vec<String> = RANKING_COLUMNS
            .iter()
            .map(|c| self.lang.ranking_header(*c).to_string())
            .collect();

        let mut groups = Vec::new();
        for (i, group) in split_by(matches, |m| m.group_id).into_iter().enumerate() {
            let number = i as u32 + 1;
            let group_id = group[0].group_id;
            let ranking = compute_ranking(group.iter().copied(), &self.config.scoring);
            let rounds = split_by(group, |m| m.round_id);
            let rounds = self.plan_rounds(BracketKind::RoundRobin, rounds, false, false)?;
            groups.push(RoundRobinGroupPlan {
                group_id,
                number,
                title: self.lang.group_title(BracketKind::RoundRobin, number),
                rounds,
                columns: RANKING_COLUMNS.to_vec(),
                header: header.clone(),
                ranking,
            });
        }
        Ok(StageBody::RoundRobin { groups })
    }

    fn plan_elimination(
        &mut self,
        stage: &Stage,
        matches: Vec<&'a Match>,
    ) -> Result<StageBody, ViewerError> {
        let groups = split_by(matches, |m| m.group_id);
        let max_groups = match stage.stage_type {
            StageType::DoubleElimination => 3,
            _ => 2,
        };
        let has_final_group = groups.len() == max_groups;
        let expects_final_group = stage.settings.expects_final_group(stage.stage_type);
        if groups.len() > max_groups || (expects_final_group == Some(false) && has_final_group) {
            return Err(ViewerError::UnexpectedGroup {
                stage: stage.id,
                groups: groups.len(),
            });
        }
        if expects_final_group == Some(true) && !has_final_group {
            return Err(ViewerError::MissingFinalGroup(stage.id));
        }

        let skip = stage.settings.skip_first_round;
        let mut groups = groups.into_iter();
        // split_by never yields empty partitions and `matches` is non-empty.
        let winner_matches = groups.next().unwrap_or_default();

        match stage.stage_type {
            StageType::DoubleElimination => {
                let loser_matches = groups.next();
                let final_matches = groups.next();
                let winner = self.plan_bracket(
                    BracketKind::WinnerBracket,
                    winner_matches,
                    skip,
                    final_matches.is_some(),
                )?;
                let loser = loser_matches
                    .map(|m| self.plan_bracket(BracketKind::LoserBracket, m, skip, false))
                    .transpose()?;
                let with_reset = stage.settings.grand_final != Some(GrandFinalType::Simple);
                let final_group = final_matches
                    .map(|m| self.plan_final_group(FinalType::GrandFinal, m, with_reset))
                    .transpose()?;
                Ok(StageBody::Elimination {
                    winner,
                    loser,
                    final_group,
                })
            }
            _ => {
                let winner =
                    self.plan_bracket(BracketKind::SingleBracket, winner_matches, skip, false)?;
                let final_group = groups
                    .next()
                    .map(|m| self.plan_final_group(FinalType::ConsolationFinal, m, false))
                    .transpose()?;
                Ok(StageBody::Elimination {
                    winner,
                    loser: None,
                    final_group,
                })
            }
        }
    }

    fn plan_bracket(
        &mut self,
        kind: BracketKind,
        matches: Vec<&'a Match>,
        skip_first_round: bool,
        connect_to_final: bool,
    ) -> Result<BracketPlan, ViewerError> {
        let group_id = matches.first().map(|m| m.group_id).unwrap_or_default();
        let rounds = split_by(matches, |m| m.round_id);
        log::debug!("Planning {:?} with {} rounds", kind, rounds.len());
        Ok(BracketPlan {
            group_id,
            kind,
            title: self.lang.group_title(kind, 0),
            rounds: self.plan_rounds(kind, rounds, skip_first_round, connect_to_final)?,
        })
    }

    fn plan_final_group(
        &mut self,
        final_type: FinalType,
        matches: Vec<&'a Match>,
        with_reset: bool,
    ) -> Result<BracketPlan, ViewerError> {
        let kind = BracketKind::FinalGroup(final_type);
        let group_id = matches.first().map(|m| m.group_id).unwrap_or_default();
        let mut rounds = split_by(matches, |m| m.round_id);
        let first = rounds.first().and_then(|r| r.first().copied());
        let mut shown = displayed_final_rounds(final_type, first, rounds.len());
        // A simple grand final is a single match, whatever its result.
        if !with_reset {
            shown = shown.min(1);
        }
        rounds.truncate(shown);
        Ok(BracketPlan {
            group_id,
            kind,
            title: self.lang.group_title(kind, 0),
            rounds: self.plan_rounds(kind, rounds, false, false)?,
        })
    }

    fn plan_rounds(
        &mut self,
        bracket: BracketKind,
        rounds: Vec<Vec<&'a Match>>,
        skip_first_round: bool,
        connect_to_final: bool,
    ) -> Result<Vec<RoundPlan>, ViewerError> {
        let round_count = rounds.len() as u32;
        let mut plans = Vec::with_capacity(rounds.len());

        for (i, round) in rounds.into_iter().enumerate() {
            let round_number = i as u32 + 1;
            let name = round_name(&RoundNameContext {
                round_number,
                round_count,
                bracket,
                skip_first_round,
            });
            let hint = if self.hints_enabled(bracket) {
                origin_hint(HintContext {
                    round_number,
                    round_count,
                    skip_first_round,
                    bracket,
                })
            } else {
                None
            };
            let ctx = RoundContext {
                bracket,
                round_number,
                hint,
                connection: connection(&ConnectionContext {
                    round_number,
                    round_count,
                    bracket,
                    connect_to_final,
                }),
            };

            let matches = round
                .iter()
                .map(|m| self.plan_match(m, ctx))
                .collect::<Result<Vec<_>, _>>()?;
            plans.push(RoundPlan {
                group_id: round[0].group_id,
                round_id: round[0].round_id,
                number: round_number,
                name,
                label: self.lang.round_name(bracket, name),
                matches,
            });
        }
        Ok(plans)
    }

    fn hints_enabled(&self, bracket: BracketKind) -> bool {
        self.config.show_slots_origin
            && (bracket != BracketKind::LoserBracket || self.config.show_lower_bracket_slots_origin)
    }

    fn plan_match(&mut self, m: &Match, ctx: RoundContext) -> Result<MatchPlan, ViewerError> {
        let label = self.lang.match_label(ctx.bracket, ctx.round_number, m.number);
        let best_of = (m.child_count > 0).then(|| self.lang.best_of(m.child_count));
        let (label, child_count_label) = match best_of {
            Some(b) if !self.config.separated_child_count_label => {
                (format!("{}, {}", label, b), None)
            }
            other => (label, other),
        };

        Ok(MatchPlan {
            match_id: m.id,
            number: m.number,
            status: m.status,
            label,
            child_count_label,
            connection: ctx.connection,
            opponents: [
                self.plan_slot(m, Slot::One, ctx.hint)?,
                self.plan_slot(m, Slot::Two, ctx.hint)?,
            ],
        })
    }

    fn plan_slot(
        &mut self,
        m: &Match,
        slot: Slot,
        hint: Option<OriginHint>,
    ) -> Result<SlotPlan, ViewerError> {
        let placement = self.config.participant_origin_placement;
        let Some(opponent) = m.opponent(slot) else {
            return Ok(SlotPlan {
                participant_id: None,
                name: self.lang.bye.clone(),
                bye: true,
                origin: None,
                origin_placement: placement,
                outcome: None,
                score: None,
            });
        };

        if let Some(id) = opponent.id {
            if self.config.highlight_participant_on_hover {
                self.highlights.register(id, m.id)?;
            }
        }

        let origin = hint.and_then(|h| h.resolve(slot, m.number, opponent.position));
        let participant = opponent.id.and_then(|id| self.data.participant(id));

        let (name, annotation) = match participant {
            Some(p) => {
                let annotation = match placement {
                    OriginPlacement::None => None,
                    _ => origin.map(|o| self.lang.origin_annotation(&o)),
                };
                (p.name.clone(), annotation)
            }
            None => {
                if let Some(id) = opponent.id {
                    log::warn!("Match {} references unknown participant {}", m.id, id);
                }
                let name = origin
                    .map(|o| self.lang.origin_phrase(&o))
                    .unwrap_or_else(|| self.lang.tbd.clone());
                (name, None)
            }
        };

        let outcome = match opponent.result {
            Some(MatchResult::Win) => Some(MatchResult::Win),
            Some(MatchResult::Loss) => Some(MatchResult::Loss),
            _ => None,
        };

        Ok(SlotPlan {
            participant_id: opponent.id,
            name,
            bye: false,
            origin: annotation,
            origin_placement: placement,
            outcome,
            score: opponent.score,
        })
    }
}
