//! Tournament data supplied for one render pass, and the error type.

use crate::models::game::Match;
use crate::models::participant::{Participant, ParticipantId};
use crate::models::stage::{Stage, StageId};
use serde::{Deserialize, Serialize};

/// Errors that can occur while planning the view.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ViewerError {
    /// Stage type string is not one of the known formats.
    UnknownStageType(String),
    /// A stage has no matches, so no group or round can be derived.
    EmptyStage(StageId),
    /// More groups than the stage type has roles for.
    UnexpectedGroup { stage: StageId, groups: usize },
    /// The stage settings call for a final group that the match data does not contain.
    MissingFinalGroup(StageId),
    /// A match references a participant missing from the roster (hover highlighting on).
    UnknownParticipant(ParticipantId),
    /// Writing a ranking table as CSV failed.
    Csv(String),
}

impl std::fmt::Display for ViewerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewerError::UnknownStageType(kind) => write!(f, "Unknown stage type: {}", kind),
            ViewerError::EmptyStage(id) => write!(f, "Stage {} has no matches", id),
            ViewerError::UnexpectedGroup { stage, groups } => {
                write!(f, "Stage {} has {} groups, more than its type allows", stage, groups)
            }
            ViewerError::MissingFinalGroup(id) => {
                write!(f, "Stage {} expects a final group but has none", id)
            }
            ViewerError::UnknownParticipant(id) => {
                write!(f, "Participant {} is not in the participant list", id)
            }
            ViewerError::Csv(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl std::error::Error for ViewerError {}

impl From<csv::Error> for ViewerError {
    fn from(error: csv::Error) -> Self {
        ViewerError::Csv(error.to_string())
    }
}

/// Everything needed for one render pass.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TournamentData {
    pub stages: Vec<Stage>,
    pub matches: Vec<Match>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl TournamentData {
    /// Matches of one stage, in input order.
    pub fn stage_matches(&self, stage_id: StageId) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.stage_id == stage_id).collect()
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }
}
