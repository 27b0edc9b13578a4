//! Bracket view planner: library with the tournament data model and the layout logic.
//!
//! Turns flat stage/match/participant data into rounds and brackets with names, connector
//! topology, origin hints and round-robin rankings, ready for a rendering backend.

pub mod config;
pub mod lang;
pub mod logic;
pub mod models;

pub use config::{OriginPlacement, ViewerConfig};
pub use lang::Lang;
pub use logic::{
    compute_ranking, connection, displayed_final_rounds, loser_bracket_drop_slots, origin_hint,
    plan_view, ranking_to_csv, round_name, split_by, BracketPlan, Connection, ConnectionContext,
    ConnectorShape, HighlightIndex, HintContext, MatchPlan, OriginHint, RankingColumn,
    RankingItem, RankingStats, RenderSession, RoundName, RoundNameContext, RoundPlan,
    RoundRobinGroupPlan, Scoring, SlotOrigin, SlotPlan, StageBody, StagePlan, RANKING_COLUMNS,
};
pub use models::{
    BracketKind, FinalType, GrandFinalType, GroupId, Match, MatchId, MatchResult, MatchStatus,
    Participant, ParticipantId, ParticipantResult, RoundId, Slot, Stage, StageId, StageSettings,
    StageType, TournamentData, ViewerError,
};
