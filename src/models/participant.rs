//! Participant data structure.

use serde::{Deserialize, Serialize};

/// Unique identifier for a participant (used in opponent slots and lookups).
pub type ParticipantId = u32;

/// A participant in the tournament, independent of any stage or match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    #[serde(default)]
    pub tournament_id: u32,
    pub name: String,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            tournament_id: 0,
            name: name.into(),
        }
    }
}
