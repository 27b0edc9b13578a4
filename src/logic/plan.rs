//! Structural plan handed to a rendering backend: stages, brackets, rounds, matches, slots.

use crate::config::OriginPlacement;
use crate::logic::naming::RoundName;
use crate::logic::ranking::{RankingColumn, RankingItem};
use crate::logic::topology::Connection;
use crate::models::{
    BracketKind, GroupId, MatchId, MatchResult, MatchStatus, ParticipantId, RoundId, StageId,
    StageType,
};
use serde::Serialize;

/// One opponent slot, ready to paint.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SlotPlan {
    pub participant_id: Option<ParticipantId>,
    /// Participant name, origin phrase, "TBD", or "BYE".
    pub name: String,
    /// The slot will never be filled.
    pub bye: bool,
    /// Origin annotation for a known participant, placed per `origin_placement`.
    pub origin: Option<String>,
    pub origin_placement: OriginPlacement,
    /// Win or loss styling; `None` while undecided or on a draw.
    pub outcome: Option<MatchResult>,
    pub score: Option<u32>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchPlan {
    pub match_id: MatchId,
    pub number: u32,
    pub status: MatchStatus,
    /// e.g. "WB 2.1", with ", Bo3" appended unless the best-of label is separated.
    pub label: String,
    /// Best-of label when shown on its own.
    pub child_count_label: Option<String>,
    pub connection: Connection,
    pub opponents: [SlotPlan; 2],
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RoundPlan {
    pub group_id: GroupId,
    pub round_id: RoundId,
    /// 1-based position in the group.
    pub number: u32,
    pub name: RoundName,
    pub label: String,
    pub matches: Vec<MatchPlan>,
}

/// A bracket or final group of an elimination stage.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BracketPlan {
    pub group_id: GroupId,
    pub kind: BracketKind,
    pub title: String,
    pub rounds: Vec<RoundPlan>,
}

/// A round-robin pool with its standings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RoundRobinGroupPlan {
    pub group_id: GroupId,
    pub number: u32,
    pub title: String,
    pub rounds: Vec<RoundPlan>,
    pub columns: Vec<RankingColumn>,
    pub header: Vec<String>,
    pub ranking: Vec<RankingItem>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "layout")]
pub enum StageBody {
    RoundRobin {
        groups: Vec<RoundRobinGroupPlan>,
    },
    Elimination {
        /// Winner bracket, or the only bracket of a single elimination stage.
        winner: BracketPlan,
        loser: Option<BracketPlan>,
        /// Grand final, or the consolation final shown below the last round of a single
        /// elimination bracket.
        final_group: Option<BracketPlan>,
    },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StagePlan {
    pub stage_id: StageId,
    pub name: String,
    pub stage_type: StageType,
    pub body: StageBody,
}
