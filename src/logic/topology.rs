//! Connector topology between a match and its neighbouring rounds.

use crate::models::{BracketKind, FinalType};
use serde::{Deserialize, Serialize};

/// Shape of a connector on one side of a match box.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorShape {
    /// Two matches feed one (binary fan-in).
    Square,
    /// One match feeds one.
    Straight,
}

/// Which sides of a match carry a connector. `None` means no line on that side.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Toward the previous round.
    pub previous: Option<ConnectorShape>,
    /// Toward the next round, or down to a final group.
    pub next: Option<ConnectorShape>,
}

impl Connection {
    pub const NONE: Connection = Connection {
        previous: None,
        next: None,
    };
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConnectionContext {
    /// 1-based.
    pub round_number: u32,
    pub round_count: u32,
    pub bracket: BracketKind,
    /// A final group follows this bracket and its last round should bridge to it.
    pub connect_to_final: bool,
}

/// Connector descriptor for every match of a round.
pub fn connection(ctx: &ConnectionContext) -> Connection {
    let r = ctx.round_number;
    let has_next = r < ctx.round_count;
    match ctx.bracket {
        BracketKind::RoundRobin | BracketKind::FinalGroup(FinalType::ConsolationFinal) => {
            Connection::NONE
        }
        BracketKind::SingleBracket | BracketKind::WinnerBracket => Connection {
            previous: (r > 1).then_some(ConnectorShape::Square),
            next: if has_next {
                Some(ConnectorShape::Square)
            } else if ctx.connect_to_final {
                Some(ConnectorShape::Straight)
            } else {
                None
            },
        },
        // Even loser rounds keep the match count of the round before (one fresh drop per
        // match); odd rounds halve it.
        BracketKind::LoserBracket => Connection {
            previous: (r > 1).then_some(if r % 2 == 0 {
                ConnectorShape::Straight
            } else {
                ConnectorShape::Square
            }),
            next: has_next.then_some(if r % 2 == 0 {
                ConnectorShape::Square
            } else {
                ConnectorShape::Straight
            }),
        },
        BracketKind::FinalGroup(FinalType::GrandFinal) => Connection {
            previous: (r == 1).then_some(ConnectorShape::Straight),
            next: has_next.then_some(ConnectorShape::Straight),
        },
    }
}
