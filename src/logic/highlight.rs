//! Participant to matches index used for hover highlighting.

use crate::models::{MatchId, Participant, ParticipantId, ViewerError};
use serde::Serialize;
use std::collections::BTreeMap;

/// Matches of each roster participant, rebuilt at the start of every render.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct HighlightIndex {
    by_participant: BTreeMap<ParticipantId, Vec<MatchId>>,
}

impl HighlightIndex {
    /// Empty entry for every participant of the roster.
    pub fn from_roster(participants: &[Participant]) -> Self {
        Self {
            by_participant: participants.iter().map(|p| (p.id, Vec::new())).collect(),
        }
    }

    /// Record that `participant` plays in `match_id`.
    ///
    /// Fails for an id missing from the roster: the match data references a participant that
    /// was never declared.
    pub fn register(
        &mut self,
        participant: ParticipantId,
        match_id: MatchId,
    ) -> Result<(), ViewerError> {
        let entry = self
            .by_participant
            .get_mut(&participant)
            .ok_or(ViewerError::UnknownParticipant(participant))?;
        if !entry.contains(&match_id) {
            entry.push(match_id);
        }
        Ok(())
    }

    /// Matches to highlight when hovering `participant`, in planning order.
    pub fn matches_of(&self, participant: ParticipantId) -> &[MatchId] {
        self.by_participant
            .get(&participant)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
