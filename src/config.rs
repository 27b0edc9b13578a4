//! Viewer options. Every field has a default, so a partial JSON object is a valid config.

use crate::logic::Scoring;
use serde::{Deserialize, Serialize};

/// Where the origin annotation goes relative to a known participant's name.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginPlacement {
    #[default]
    Before,
    After,
    None,
}

/// Options for one render session.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub participant_origin_placement: OriginPlacement,
    /// Show the best-of-N label separately instead of appending it to the match label.
    pub separated_child_count_label: bool,
    pub show_slots_origin: bool,
    /// Only read when `show_slots_origin` is on.
    pub show_lower_bracket_slots_origin: bool,
    pub highlight_participant_on_hover: bool,
    pub scoring: Scoring,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            participant_origin_placement: OriginPlacement::Before,
            separated_child_count_label: false,
            show_slots_origin: true,
            show_lower_bracket_slots_origin: true,
            highlight_participant_on_hover: true,
            scoring: Scoring::default(),
        }
    }
}
