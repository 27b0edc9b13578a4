//! How many rounds of a final group are actually shown.

use crate::models::{FinalType, Match};

/// Number of final group rounds to display, given the group's first match and the number
/// of rounds present in the data.
///
/// A grand final needs its reset round only after an upset: when the winner bracket
/// champion (opponent 1) is unknown or already won the first match, one round is enough.
pub fn displayed_final_rounds(
    final_type: FinalType,
    first_match: Option<&Match>,
    available: usize,
) -> usize {
    let wanted = match final_type {
        FinalType::ConsolationFinal => 1,
        FinalType::GrandFinal => {
            let champion = first_match.and_then(|m| m.opponent1.as_ref());
            match champion {
                Some(o) if o.id.is_some() && !o.is_win() => 2,
                _ => 1,
            }
        }
    };
    wanted.min(available)
}
