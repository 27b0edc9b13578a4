//! Data structures for the bracket view: stages, matches, participants, and the render input.

mod game;
mod participant;
mod stage;
mod tournament;

pub use game::{Match, MatchId, MatchResult, MatchStatus, ParticipantResult, Slot};
pub use participant::{Participant, ParticipantId};
pub use stage::{
    BracketKind, FinalType, GrandFinalType, GroupId, RoundId, Stage, StageId, StageSettings,
    StageType,
};
pub use tournament::{TournamentData, ViewerError};
