//! Bracket view logic: grouping, ranking, naming, origin hints, connectors, orchestration.

mod final_group;
mod grouping;
mod highlight;
mod naming;
mod origin;
mod plan;
mod ranking;
mod render;
mod topology;

pub use final_group::displayed_final_rounds;
pub use grouping::split_by;
pub use highlight::HighlightIndex;
pub use naming::{round_name, RoundName, RoundNameContext};
pub use origin::{loser_bracket_drop_slots, origin_hint, HintContext, OriginHint, SlotOrigin};
pub use plan::{
    BracketPlan, MatchPlan, RoundPlan, RoundRobinGroupPlan, SlotPlan, StageBody, StagePlan,
};
pub use ranking::{
    compute_ranking, ranking_to_csv, RankingColumn, RankingItem, RankingStats, Scoring,
    RANKING_COLUMNS,
};
pub use render::{plan_view, RenderSession};
pub use topology::{connection, Connection, ConnectionContext, ConnectorShape};
