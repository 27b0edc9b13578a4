//! Stage, stage settings, and the structural roles of groups.

use crate::models::tournament::ViewerError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique identifier for a stage.
pub type StageId = u32;
/// Unique identifier for a group (bracket or round-robin pool).
pub type GroupId = u32;
/// Unique identifier for a round.
pub type RoundId = u32;

/// Format of a stage. Deserialized through [`FromStr`] so an unknown kind is reported as
/// [`ViewerError::UnknownStageType`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum StageType {
    RoundRobin,
    SingleElimination,
    DoubleElimination,
}

impl FromStr for StageType {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "round_robin" => Ok(StageType::RoundRobin),
            "single_elimination" => Ok(StageType::SingleElimination),
            "double_elimination" => Ok(StageType::DoubleElimination),
            other => Err(ViewerError::UnknownStageType(other.to_string())),
        }
    }
}

impl TryFrom<String> for StageType {
    type Error = ViewerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// How the grand final of a double elimination stage is played.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrandFinalType {
    /// No grand final group.
    None,
    /// One match.
    Simple,
    /// Up to two matches: the second is only played after an upset.
    Double,
}

/// Stage settings relevant to the layout.
///
/// The final group settings are optional. When one is given, the groups found in the match
/// data must agree with it; when it is absent, the groups alone decide the layout.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StageSettings {
    /// The true first round was not materialized (it only contained byes).
    #[serde(default)]
    pub skip_first_round: bool,
    #[serde(default)]
    pub grand_final: Option<GrandFinalType>,
    #[serde(default)]
    pub consolation_final: Option<bool>,
}

impl StageSettings {
    /// Whether the settings call for a final group, or `None` when they do not say.
    pub fn expects_final_group(&self, stage_type: StageType) -> Option<bool> {
        match stage_type {
            StageType::RoundRobin => Some(false),
            StageType::SingleElimination => self.consolation_final,
            StageType::DoubleElimination => self.grand_final.map(|g| g != GrandFinalType::None),
        }
    }
}

/// A stage of the tournament. Each stage is planned independently.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    #[serde(default)]
    pub tournament_id: u32,
    pub name: String,
    #[serde(default)]
    pub number: u32,
    #[serde(rename = "type")]
    pub stage_type: StageType,
    #[serde(default)]
    pub settings: StageSettings,
}

impl Stage {
    pub fn new(id: StageId, name: impl Into<String>, stage_type: StageType) -> Self {
        Self {
            id,
            tournament_id: 0,
            name: name.into(),
            number: id + 1,
            stage_type,
            settings: StageSettings::default(),
        }
    }
}

/// Which final a final group holds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalType {
    /// Match for third place, below the last round of a single elimination bracket.
    ConsolationFinal,
    /// Winner bracket champion against loser bracket champion.
    GrandFinal,
}

/// Structural role of a group, derived from stage type and group position.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketKind {
    RoundRobin,
    /// The only bracket of a single elimination stage.
    SingleBracket,
    WinnerBracket,
    LoserBracket,
    FinalGroup(FinalType),
}
