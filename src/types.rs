use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::geo::Compass;
use crate::hint::Hint;

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite and inside the usual
    /// `[-90, 90]` / `[-180, 180]` ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Stable identifier of an institution. Numeric ids in input files are
/// stored in their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct InstitutionId(pub String);

impl fmt::Display for InstitutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for InstitutionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for InstitutionId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl<'de> Deserialize<'de> for InstitutionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => InstitutionId(s),
            RawId::Int(n) => InstitutionId(n.to_string()),
            RawId::Float(n) => InstitutionId(n.to_string()),
        })
    }
}

/// A university as seen by the game.
///
/// Built once by the dataset loader and never mutated afterwards; sessions and
/// guess records hold their own clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub id: InstitutionId,
    pub name: String,
    #[serde(flatten)]
    pub location: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Alternate names accepted by name lookup.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Descriptive attributes keyed by attribute name. Keys outside the hint
    /// allow-list are carried but never revealed.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Institution {
    pub fn new(id: impl Into<InstitutionId>, name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            city: None,
            state: None,
            aliases: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn with_place(mut self, city: impl Into<String>, state: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self.state = Some(state.into());
        self
    }
}

/// Outcome of scoring one candidate against the target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuessRecord {
    /// The institution that was guessed.
    pub candidate: Institution,
    /// Great-circle distance from the candidate to the target.
    pub miles: f64,
    /// Direction from the candidate toward the target.
    pub direction: Compass,
    pub hint: Option<Hint>,
}
