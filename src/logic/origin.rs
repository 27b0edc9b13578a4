//! Origin hints: where the occupant of a not-yet-decided slot will come from.

use crate::logic::naming::RoundName;
use crate::models::{BracketKind, FinalType, Slot};
use serde::{Deserialize, Serialize};

/// Upstream source of a slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "from")]
pub enum SlotOrigin {
    /// Seeded directly into this round.
    Seed { position: u32 },
    /// Winner of an earlier match of the given bracket.
    Winner {
        bracket: BracketKind,
        round: u32,
        match_number: u32,
    },
    /// Loser of a match in the given bracket. `round` is `Round(n)`, `SemiFinal` or `Final`.
    Loser {
        bracket: BracketKind,
        round: RoundName,
        match_number: Option<u32>,
    },
    /// Whoever wins the given bracket.
    Champion { bracket: BracketKind },
}

/// Position of a round, for hint purposes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HintContext {
    /// 1-based.
    pub round_number: u32,
    pub round_count: u32,
    pub skip_first_round: bool,
    pub bracket: BracketKind,
}

/// Resolver for the slots of one round. See [`origin_hint`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OriginHint {
    ctx: HintContext,
}

/// Slots of a loser bracket match that receive a loser dropping from the winner bracket.
///
/// Round 1 is made of drops only (seeds when the first round was skipped). After that, even
/// rounds take one fresh drop in slot 2 against the previous loser round's winner in slot 1,
/// and odd rounds are fed by the loser bracket alone.
pub fn loser_bracket_drop_slots(round_number: u32, skip_first_round: bool) -> &'static [Slot] {
    if round_number == 1 {
        if skip_first_round {
            &[]
        } else {
            &Slot::BOTH
        }
    } else if round_number % 2 == 0 {
        &[Slot::Two]
    } else {
        &[]
    }
}

/// Hint resolver for a round, or `None` when its slots have no upstream source to show.
///
/// Round 1 of a single or winner bracket is seeded and gets no hint, unless the true first
/// round was skipped, in which case seed positions are shown. A grand final reset only
/// replays the first grand final match.
pub fn origin_hint(ctx: HintContext) -> Option<OriginHint> {
    match ctx.bracket {
        BracketKind::RoundRobin => None,
        BracketKind::SingleBracket | BracketKind::WinnerBracket
            if ctx.round_number == 1 && !ctx.skip_first_round =>
        {
            None
        }
        BracketKind::FinalGroup(FinalType::GrandFinal) if ctx.round_number > 1 => None,
        _ => Some(OriginHint { ctx }),
    }
}

/// Number of the upstream match feeding `slot` when two matches merge into one.
///
/// Saturates instead of overflowing on match numbers no real bracket reaches.
fn fan_in(match_number: u32, slot: Slot) -> u32 {
    (match_number.max(1) - 1)
        .saturating_mul(2)
        .saturating_add(slot.number())
}

impl OriginHint {
    /// Source of `slot` in match `match_number` of this round.
    ///
    /// `position` is the slot's recorded origin position; it wins over the position derived
    /// from the match number where the upstream ordering is not positional (seeds, drops).
    pub fn resolve(
        &self,
        slot: Slot,
        match_number: u32,
        position: Option<u32>,
    ) -> Option<SlotOrigin> {
        let r = self.ctx.round_number;
        let fan_in = fan_in(match_number, slot);
        match self.ctx.bracket {
            BracketKind::RoundRobin => None,
            BracketKind::SingleBracket | BracketKind::WinnerBracket => {
                if r == 1 {
                    position.map(|position| SlotOrigin::Seed { position })
                } else {
                    Some(SlotOrigin::Winner {
                        bracket: self.ctx.bracket,
                        round: r - 1,
                        match_number: fan_in,
                    })
                }
            }
            BracketKind::LoserBracket => self.resolve_loser(slot, match_number, position),
            BracketKind::FinalGroup(FinalType::GrandFinal) => Some(SlotOrigin::Champion {
                bracket: match slot {
                    Slot::One => BracketKind::WinnerBracket,
                    Slot::Two => BracketKind::LoserBracket,
                },
            }),
            BracketKind::FinalGroup(FinalType::ConsolationFinal) => Some(SlotOrigin::Loser {
                bracket: BracketKind::SingleBracket,
                round: RoundName::SemiFinal,
                match_number: Some(slot.number()),
            }),
        }
    }

    fn resolve_loser(
        &self,
        slot: Slot,
        match_number: u32,
        position: Option<u32>,
    ) -> Option<SlotOrigin> {
        let HintContext {
            round_number: r,
            round_count,
            skip_first_round,
            ..
        } = self.ctx;

        if r == 1 && skip_first_round {
            return position.map(|position| SlotOrigin::Seed { position });
        }

        let drops = loser_bracket_drop_slots(r, skip_first_round);
        if drops.contains(&slot) {
            if r == 1 {
                return Some(SlotOrigin::Loser {
                    bracket: BracketKind::WinnerBracket,
                    round: RoundName::Round(1),
                    match_number: Some(position.unwrap_or_else(|| fan_in(match_number, slot))),
                });
            }
            let match_number = position.unwrap_or(match_number);
            let (round, match_number) = if r == round_count {
                (RoundName::Final, None)
            } else if r + 2 == round_count {
                (RoundName::SemiFinal, Some(match_number))
            } else if skip_first_round {
                (RoundName::Round(r / 2), Some(match_number))
            } else {
                (RoundName::Round(r / 2 + 1), Some(match_number))
            };
            return Some(SlotOrigin::Loser {
                bracket: BracketKind::WinnerBracket,
                round,
                match_number,
            });
        }

        // Fed by the previous loser round: one-to-one into even rounds, two-to-one into odd.
        let upstream = if r % 2 == 0 {
            match_number
        } else {
            fan_in(match_number, slot)
        };
        Some(SlotOrigin::Winner {
            bracket: BracketKind::LoserBracket,
            round: r - 1,
            match_number: upstream,
        })
    }
}
