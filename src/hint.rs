//! Hint selection over the fixed attribute allow-list.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Attribute names that may be revealed as hints, in allow-list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HintKey {
    Established,
    Motto,
    Nickname,
    Colors,
    Undergraduates,
    Endowment,
    #[serde(rename = "Sporting affiliations")]
    SportingAffiliations,
    Campus,
    Newspaper,
    Mascot,
    President,
    Location,
}

impl HintKey {
    pub const ALL: [HintKey; 12] = [
        HintKey::Established,
        HintKey::Motto,
        HintKey::Nickname,
        HintKey::Colors,
        HintKey::Undergraduates,
        HintKey::Endowment,
        HintKey::SportingAffiliations,
        HintKey::Campus,
        HintKey::Newspaper,
        HintKey::Mascot,
        HintKey::President,
        HintKey::Location,
    ];

    /// Attribute name as it appears in the dataset.
    pub fn as_str(self) -> &'static str {
        match self {
            HintKey::Established => "Established",
            HintKey::Motto => "Motto",
            HintKey::Nickname => "Nickname",
            HintKey::Colors => "Colors",
            HintKey::Undergraduates => "Undergraduates",
            HintKey::Endowment => "Endowment",
            HintKey::SportingAffiliations => "Sporting affiliations",
            HintKey::Campus => "Campus",
            HintKey::Newspaper => "Newspaper",
            HintKey::Mascot => "Mascot",
            HintKey::President => "President",
            HintKey::Location => "Location",
        }
    }
}

impl fmt::Display for HintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HintKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HintKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("not a hint attribute: {s}"))
    }
}

/// A revealed attribute of the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub key: HintKey,
    pub value: String,
}

/// Allow-listed keys that have a non-blank value in `attributes` and are not
/// in `used`, in allow-list order.
pub fn available_hints(
    attributes: &BTreeMap<String, String>,
    used: &BTreeSet<HintKey>,
) -> Vec<HintKey> {
    HintKey::ALL
        .into_iter()
        .filter(|k| !used.contains(k))
        .filter(|k| {
            attributes
                .get(k.as_str())
                .is_some_and(|v| !v.trim().is_empty())
        })
        .collect()
}

/// Pick one unused hint uniformly at random.
///
/// Does not record the choice; callers add the returned key to `used` before
/// asking again.
pub fn pick_hint<R: Rng + ?Sized>(
    attributes: &BTreeMap<String, String>,
    used: &BTreeSet<HintKey>,
    rng: &mut R,
) -> Option<Hint> {
    let pool = available_hints(attributes, used);
    if pool.is_empty() {
        return None;
    }
    let key = pool[rng.gen_range(0..pool.len())];
    let value = attributes.get(key.as_str())?.clone();
    Some(Hint { key, value })
}
