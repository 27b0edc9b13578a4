//! Round names inferred from a round's position in its bracket.

use crate::models::{BracketKind, FinalType};
use serde::{Deserialize, Serialize};

/// Semantic name of a round. Turned into text by [`crate::Lang`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "name", content = "number")]
pub enum RoundName {
    /// Generic numbered round.
    Round(u32),
    /// Round 1 of a bracket whose true first round was skipped.
    Preliminary,
    QuarterFinal,
    SemiFinal,
    Final,
    ConsolationFinal,
    GrandFinal,
    /// Second grand final match, played after the loser bracket champion wins the first.
    GrandFinalReset,
}

/// Position of a round within its bracket.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RoundNameContext {
    /// 1-based.
    pub round_number: u32,
    /// Rounds in this bracket (not in the whole stage).
    pub round_count: u32,
    pub bracket: BracketKind,
    pub skip_first_round: bool,
}

/// Name a round from its position alone.
///
/// Elimination brackets count backward from their own last round: Final, Semi Final,
/// Quarter Final, then numbered rounds.
pub fn round_name(ctx: &RoundNameContext) -> RoundName {
    let n = ctx.round_number;
    match ctx.bracket {
        BracketKind::RoundRobin => RoundName::Round(n),
        BracketKind::FinalGroup(FinalType::ConsolationFinal) => RoundName::ConsolationFinal,
        BracketKind::FinalGroup(FinalType::GrandFinal) => {
            if n <= 1 {
                RoundName::GrandFinal
            } else {
                RoundName::GrandFinalReset
            }
        }
        BracketKind::SingleBracket | BracketKind::WinnerBracket | BracketKind::LoserBracket => {
            let from_end = ctx.round_count.saturating_sub(n);
            match from_end {
                0 => RoundName::Final,
                1 => RoundName::SemiFinal,
                2 => RoundName::QuarterFinal,
                _ if ctx.skip_first_round && n == 1 => RoundName::Preliminary,
                _ if ctx.skip_first_round => RoundName::Round(n - 1),
                _ => RoundName::Round(n),
            }
        }
    }
}
