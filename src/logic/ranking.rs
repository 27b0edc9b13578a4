//! Round-robin standings: per-participant counters accumulated from match results.

use crate::lang::Lang;
use crate::models::{
    Match, MatchResult, Participant, ParticipantId, ParticipantResult, ViewerError,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Points awarded per outcome.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoring {
    pub win: i32,
    pub draw: i32,
    pub loss: i32,
    /// Added on top of the outcome when the participant forfeited.
    pub forfeit: i32,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            win: 3,
            draw: 1,
            loss: 0,
            forfeit: 0,
        }
    }
}

/// Counters of one participant within one group.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RankingStats {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub forfeits: u32,
    pub score_for: u32,
    pub score_against: u32,
    pub score_difference: i64,
    pub points: i32,
}

/// One row of a ranking table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RankingItem {
    /// 1-based, best first.
    pub rank: u32,
    pub id: ParticipantId,
    pub stats: RankingStats,
}

/// Columns of a ranking table, in display order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingColumn {
    Rank,
    Id,
    Played,
    Wins,
    Draws,
    Losses,
    Forfeits,
    ScoreFor,
    ScoreAgainst,
    ScoreDifference,
    Points,
}

/// Header and row order shared by every ranking table.
pub const RANKING_COLUMNS: [RankingColumn; 11] = [
    RankingColumn::Rank,
    RankingColumn::Id,
    RankingColumn::Played,
    RankingColumn::Wins,
    RankingColumn::Draws,
    RankingColumn::Losses,
    RankingColumn::Forfeits,
    RankingColumn::ScoreFor,
    RankingColumn::ScoreAgainst,
    RankingColumn::ScoreDifference,
    RankingColumn::Points,
];

impl RankingItem {
    /// Numeric value of a column. `Id` gives the participant id.
    pub fn value(&self, column: RankingColumn) -> i64 {
        let s = &self.stats;
        match column {
            RankingColumn::Rank => self.rank.into(),
            RankingColumn::Id => self.id.into(),
            RankingColumn::Played => s.played.into(),
            RankingColumn::Wins => s.wins.into(),
            RankingColumn::Draws => s.draws.into(),
            RankingColumn::Losses => s.losses.into(),
            RankingColumn::Forfeits => s.forfeits.into(),
            RankingColumn::ScoreFor => s.score_for.into(),
            RankingColumn::ScoreAgainst => s.score_against.into(),
            RankingColumn::ScoreDifference => s.score_difference,
            RankingColumn::Points => s.points.into(),
        }
    }
}

/// Rank every participant seen in `matches` (all matches of one round-robin group).
///
/// Sorted by points, then wins; remaining ties keep the order in which participants first
/// appear in `matches`.
pub fn compute_ranking<'a>(
    matches: impl IntoIterator<Item = &'a Match>,
    scoring: &Scoring,
) -> Vec<RankingItem> {
    let mut order: Vec<ParticipantId> = Vec::new();
    let mut table: HashMap<ParticipantId, RankingStats> = HashMap::new();

    for m in matches {
        let (o1, o2) = (m.opponent1.as_ref(), m.opponent2.as_ref());
        apply_slot(&mut table, &mut order, o1, o2, scoring);
        apply_slot(&mut table, &mut order, o2, o1, scoring);
    }

    let mut items: Vec<RankingItem> = order
        .into_iter()
        .map(|id| RankingItem {
            rank: 0,
            id,
            stats: table.remove(&id).unwrap_or_default(),
        })
        .collect();
    // Stable: ties stay in first-appearance order.
    items.sort_by(|a, b| {
        b.stats
            .points
            .cmp(&a.stats.points)
            .then(b.stats.wins.cmp(&a.stats.wins))
    });
    for (i, item) in items.iter_mut().enumerate() {
        item.rank = i as u32 + 1;
    }
    items
}

/// Add one opponent's outcome to its row. Slots without a participant are skipped.
fn apply_slot(
    table: &mut HashMap<ParticipantId, RankingStats>,
    order: &mut Vec<ParticipantId>,
    current: Option<&ParticipantResult>,
    other: Option<&ParticipantResult>,
    scoring: &Scoring,
) {
    let Some(current) = current else { return };
    let Some(id) = current.id else { return };

    let stats = table.entry(id).or_insert_with(|| {
        order.push(id);
        RankingStats::default()
    });

    if current.result.is_none() && !current.forfeit {
        return;
    }

    stats.played += 1;
    match current.result {
        Some(MatchResult::Win) => {
            stats.wins += 1;
            stats.points = stats.points.saturating_add(scoring.win);
        }
        Some(MatchResult::Draw) => {
            stats.draws += 1;
            stats.points = stats.points.saturating_add(scoring.draw);
        }
        Some(MatchResult::Loss) => {
            stats.losses += 1;
            stats.points = stats.points.saturating_add(scoring.loss);
        }
        None => {}
    }
    if current.forfeit {
        stats.forfeits += 1;
        stats.points = stats.points.saturating_add(scoring.forfeit);
    }
    stats.score_for = stats.score_for.saturating_add(current.score.unwrap_or(0));
    stats.score_against = stats
        .score_against
        .saturating_add(other.and_then(|o| o.score).unwrap_or(0));
    stats.score_difference = i64::from(stats.score_for) - i64::from(stats.score_against);
}

/// Write a ranking table as CSV: header from [`RANKING_COLUMNS`], names from `participants`.
///
/// Participants missing from the roster are written by id.
pub fn ranking_to_csv(
    items: &[RankingItem],
    participants: &[Participant],
    lang: &Lang,
) -> Result<String, ViewerError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(RANKING_COLUMNS.iter().map(|c| lang.ranking_header(*c)))?;
    for item in items {
        let row = RANKING_COLUMNS.iter().map(|&column| match column {
            RankingColumn::Id => participants
                .iter()
                .find(|p| p.id == item.id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| item.id.to_string()),
            _ => item.value(column).to_string(),
        });
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ViewerError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ViewerError::Csv(e.to_string()))
}
