use std::collections::BTreeSet;

use rand::Rng;

use crate::geo::{bearing, distance_miles};
use crate::hint::{pick_hint, HintKey};
use crate::types::{GuessRecord, Institution};

/// Score `candidate` against `target`.
///
/// Distance and direction are measured from the candidate toward the target.
/// A hint is drawn from the target's attributes unless every allow-listed
/// attribute is missing or already in `used_hints`.
pub fn evaluate<R: Rng + ?Sized>(
    candidate: &Institution,
    target: &Institution,
    used_hints: &BTreeSet<HintKey>,
    rng: &mut R,
) -> GuessRecord {
    let miles = distance_miles(candidate.location, target.location);
    let direction = bearing(candidate.location, target.location);
    let hint = if target.attributes.is_empty() {
        None
    } else {
        pick_hint(&target.attributes, used_hints, rng)
    };
    log::debug!(
        "evaluated guess {:?}: {:.1} miles {}",
        candidate.name,
        miles,
        direction
    );
    GuessRecord {
        candidate: candidate.clone(),
        miles,
        direction,
        hint,
    }
}
