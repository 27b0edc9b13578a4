//! User-visible strings. English by default; any field can be overridden from JSON.
//!
//! Templates use `{name}` placeholders, filled by [`fill`].

use crate::logic::{RankingColumn, RoundName, SlotOrigin};
use crate::models::{BracketKind, FinalType};
use serde::{Deserialize, Serialize};

/// Ranking table header labels.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingHeaders {
    pub rank: String,
    pub id: String,
    pub played: String,
    pub wins: String,
    pub draws: String,
    pub losses: String,
    pub forfeits: String,
    pub score_for: String,
    pub score_against: String,
    pub score_difference: String,
    pub points: String,
}

impl Default for RankingHeaders {
    fn default() -> Self {
        Self {
            rank: "#".into(),
            id: "Name".into(),
            played: "P".into(),
            wins: "W".into(),
            draws: "D".into(),
            losses: "L".into(),
            forfeits: "F".into(),
            score_for: "SF".into(),
            score_against: "SA".into(),
            score_difference: "+/-".into(),
            points: "Pts".into(),
        }
    }
}

/// Label table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lang {
    pub round: String,
    pub preliminary_round: String,
    pub quarter_final: String,
    pub semi_final: String,
    pub final_round: String,
    pub consolation_final: String,
    pub grand_final: String,
    pub grand_final_reset: String,
    pub winner_bracket: String,
    pub loser_bracket: String,
    pub group: String,
    pub match_prefix: String,
    pub winner_bracket_prefix: String,
    pub loser_bracket_prefix: String,
    pub grand_final_prefix: String,
    pub best_of: String,
    pub seed: String,
    pub seed_short: String,
    pub winner_of: String,
    pub loser_of: String,
    pub bye: String,
    pub tbd: String,
    pub ranking: RankingHeaders,
}

impl Default for Lang {
    fn default() -> Self {
        Self {
            round: "Round {number}".into(),
            preliminary_round: "Preliminary Round".into(),
            quarter_final: "Quarter Final".into(),
            semi_final: "Semi Final".into(),
            final_round: "Final".into(),
            consolation_final: "Consolation Final".into(),
            grand_final: "Grand Final".into(),
            grand_final_reset: "Grand Final Reset".into(),
            winner_bracket: "Winner Bracket".into(),
            loser_bracket: "Loser Bracket".into(),
            group: "Group {number}".into(),
            match_prefix: "M".into(),
            winner_bracket_prefix: "WB".into(),
            loser_bracket_prefix: "LB".into(),
            grand_final_prefix: "GF".into(),
            best_of: "Bo{count}".into(),
            seed: "Seed #{position}".into(),
            seed_short: "#{position}".into(),
            winner_of: "Winner of {match}".into(),
            loser_of: "Loser of {match}".into(),
            bye: "BYE".into(),
            tbd: "TBD".into(),
            ranking: RankingHeaders::default(),
        }
    }
}

/// Replace each `{key}` in `template` with its value.
pub fn fill(template: &str, values: &[(&str, String)]) -> String {
    values.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{}}}", key), value)
    })
}

impl Lang {
    /// "WB " / "LB " in front of bracket-scoped names; nothing for a lone bracket.
    fn bracket_prefix(&self, bracket: BracketKind) -> String {
        match bracket {
            BracketKind::WinnerBracket => format!("{} ", self.winner_bracket_prefix),
            BracketKind::LoserBracket => format!("{} ", self.loser_bracket_prefix),
            _ => String::new(),
        }
    }

    pub fn round_name(&self, bracket: BracketKind, name: RoundName) -> String {
        let prefix = self.bracket_prefix(bracket);
        match name {
            RoundName::Round(n) => {
                format!("{}{}", prefix, fill(&self.round, &[("number", n.to_string())]))
            }
            RoundName::Preliminary => format!("{}{}", prefix, self.preliminary_round),
            RoundName::QuarterFinal => format!("{}{}", prefix, self.quarter_final),
            RoundName::SemiFinal => format!("{}{}", prefix, self.semi_final),
            RoundName::Final => format!("{}{}", prefix, self.final_round),
            RoundName::ConsolationFinal => self.consolation_final.clone(),
            RoundName::GrandFinal => self.grand_final.clone(),
            RoundName::GrandFinalReset => self.grand_final_reset.clone(),
        }
    }

    /// Title of a bracket or round-robin group.
    pub fn group_title(&self, bracket: BracketKind, group_number: u32) -> String {
        match bracket {
            BracketKind::RoundRobin => fill(&self.group, &[("number", group_number.to_string())]),
            BracketKind::WinnerBracket => self.winner_bracket.clone(),
            BracketKind::LoserBracket => self.loser_bracket.clone(),
            BracketKind::SingleBracket => String::new(),
            BracketKind::FinalGroup(FinalType::ConsolationFinal) => self.consolation_final.clone(),
            BracketKind::FinalGroup(FinalType::GrandFinal) => self.grand_final.clone(),
        }
    }

    /// Short match reference, e.g. "M 1.2", "WB 3.1", "GF 1".
    pub fn match_label(&self, bracket: BracketKind, round: u32, number: u32) -> String {
        match bracket {
            BracketKind::RoundRobin | BracketKind::SingleBracket => {
                format!("{} {}.{}", self.match_prefix, round, number)
            }
            BracketKind::WinnerBracket => {
                format!("{} {}.{}", self.winner_bracket_prefix, round, number)
            }
            BracketKind::LoserBracket => {
                format!("{} {}.{}", self.loser_bracket_prefix, round, number)
            }
            BracketKind::FinalGroup(FinalType::GrandFinal) => {
                format!("{} {}", self.grand_final_prefix, round)
            }
            BracketKind::FinalGroup(FinalType::ConsolationFinal) => self.consolation_final.clone(),
        }
    }

    pub fn best_of(&self, child_count: u32) -> String {
        fill(&self.best_of, &[("count", child_count.to_string())])
    }

    /// The upstream match an origin refers to, e.g. "WB 2.1", "WB Semi Final 2".
    fn origin_ref(&self, origin: &SlotOrigin) -> String {
        match *origin {
            SlotOrigin::Seed { position } => {
                fill(&self.seed_short, &[("position", position.to_string())])
            }
            SlotOrigin::Winner {
                bracket,
                round,
                match_number,
            } => self.match_label(bracket, round, match_number),
            SlotOrigin::Loser {
                bracket,
                round: RoundName::Round(round),
                match_number,
            } => self.match_label(bracket, round, match_number.unwrap_or(1)),
            SlotOrigin::Loser {
                bracket,
                round,
                match_number: Some(number),
            } => format!("{} {}", self.round_name(bracket, round), number),
            SlotOrigin::Loser { bracket, round, .. } => self.round_name(bracket, round),
            SlotOrigin::Champion { bracket } => self.round_name(bracket, RoundName::Final),
        }
    }

    /// Phrase standing in for an unknown participant, e.g. "Loser of WB 2.1".
    pub fn origin_phrase(&self, origin: &SlotOrigin) -> String {
        let reference = self.origin_ref(origin);
        match origin {
            SlotOrigin::Seed { position } => {
                fill(&self.seed, &[("position", position.to_string())])
            }
            SlotOrigin::Winner { .. } | SlotOrigin::Champion { .. } => {
                fill(&self.winner_of, &[("match", reference)])
            }
            SlotOrigin::Loser { .. } => fill(&self.loser_of, &[("match", reference)]),
        }
    }

    /// Annotation shown next to a known participant's name.
    pub fn origin_annotation(&self, origin: &SlotOrigin) -> String {
        self.origin_ref(origin)
    }

    pub fn ranking_header(&self, column: RankingColumn) -> &str {
        let h = &self.ranking;
        match column {
            RankingColumn::Rank => &h.rank,
            RankingColumn::Id => &h.id,
            RankingColumn::Played => &h.played,
            RankingColumn::Wins => &h.wins,
            RankingColumn::Draws => &h.draws,
            RankingColumn::Losses => &h.losses,
            RankingColumn::Forfeits => &h.forfeits,
            RankingColumn::ScoreFor => &h.score_for,
            RankingColumn::ScoreAgainst => &h.score_against,
            RankingColumn::ScoreDifference => &h.score_difference,
            RankingColumn::Points => &h.points,
        }
    }
}
