//! Match, opponent slot, and result types.

use crate::models::participant::ParticipantId;
use crate::models::stage::{GroupId, RoundId, StageId};
use serde::{Deserialize, Serialize};

/// Unique identifier for a match.
pub type MatchId = u32;

/// Declared result of one opponent.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

/// Progress of a match, as recorded by the tournament manager.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Both opponents are still unknown.
    #[default]
    Locked,
    /// One opponent is known.
    Waiting,
    Ready,
    Running,
    Completed,
    /// Completed and no longer editable upstream.
    Archived,
}

/// Which of the two opponent slots of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    One,
    Two,
}

impl Slot {
    pub const BOTH: [Slot; 2] = [Slot::One, Slot::Two];

    /// 1 or 2.
    pub fn number(self) -> u32 {
        match self {
            Slot::One => 1,
            Slot::Two => 2,
        }
    }
}

/// Occupant of an opponent slot.
///
/// The slot itself being `None` on [`Match`] means a permanent BYE. Here, `id: None` means the
/// participant is not known yet.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ParticipantResult {
    #[serde(default)]
    pub id: Option<ParticipantId>,
    /// 1-based origin position (seed or upstream match number), used for origin hints.
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub forfeit: bool,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub result: Option<MatchResult>,
}

impl ParticipantResult {
    /// Known participant with no result yet.
    pub fn participant(id: ParticipantId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Unknown participant expected from the given origin position.
    pub fn pending(position: u32) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn with_result(mut self, result: MatchResult) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_score(mut self, score: u32) -> Self {
        self.score = Some(score);
        self
    }

    pub fn is_win(&self) -> bool {
        self.result == Some(MatchResult::Win)
    }

    pub fn is_loss(&self) -> bool {
        self.result == Some(MatchResult::Loss)
    }
}

/// A single match between two opponent slots.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub stage_id: StageId,
    pub group_id: GroupId,
    pub round_id: RoundId,
    /// 1-based number within its round.
    pub number: u32,
    /// Best-of-N games; 0 when the match is a single game.
    #[serde(default)]
    pub child_count: u32,
    #[serde(default)]
    pub status: MatchStatus,
    /// `None` is a BYE.
    pub opponent1: Option<ParticipantResult>,
    pub opponent2: Option<ParticipantResult>,
}

impl Match {
    pub fn opponent(&self, slot: Slot) -> Option<&ParticipantResult> {
        match slot {
            Slot::One => self.opponent1.as_ref(),
            Slot::Two => self.opponent2.as_ref(),
        }
    }
}
