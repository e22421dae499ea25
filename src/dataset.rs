//! Institution lists for the command line tools.
//!
//! Two on-disk shapes are understood, picked by file extension:
//!
//! * `.json`: an array of objects with `name`, `lat`, `lng` and the optional
//!   `id`, `city`, `state`, `aliases` and `attributes` fields. Coordinates may
//!   be numbers or numeric strings; a missing id defaults to the name.
//! * `.csv`: a header row containing at least `id,name,lat,lng`. `city`,
//!   `state` and `aliases` (separated by `|`) are optional; every other column
//!   named after a hint attribute becomes an attribute.
//!
//! Rows without a name or with unusable coordinates are dropped, and only the
//! first row for each id is kept.

use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::UniversleError;
use crate::hint::HintKey;
use crate::types::{Coordinate, Institution, InstitutionId};

/// Validated, de-duplicated list of institutions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    institutions: Vec<Institution>,
}

impl Dataset {
    /// Build a dataset, dropping invalid and duplicate rows.
    pub fn from_institutions(rows: Vec<Institution>) -> Self {
        let total = rows.len();
        let mut seen: HashSet<InstitutionId> = HashSet::new();
        let mut institutions = Vec::with_capacity(total);
        for mut row in rows {
            row.name = row.name.trim().to_string();
            if row.name.is_empty() {
                log::warn!("skipping institution {}: empty name", row.id);
                continue;
            }
            if !row.location.is_valid() {
                log::warn!(
                    "skipping {:?}: invalid coordinates ({}, {})",
                    row.name,
                    row.location.lat,
                    row.location.lng
                );
                continue;
            }
            if !seen.insert(row.id.clone()) {
                log::warn!("skipping {:?}: duplicate id {}", row.name, row.id);
                continue;
            }
            row.attributes = clean_attributes(row.attributes);
            institutions.push(row);
        }
        log::info!(
            "institutions loaded: {} -> cleaned: {}",
            total,
            institutions.len()
        );
        Self { institutions }
    }

    /// Load a `.json` or `.csv` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, UniversleError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let file = BufReader::new(File::open(path)?);
        match ext.as_deref() {
            Some("json") => Self::from_json_reader(file),
            Some("csv") => Self::from_csv_reader(file),
            _ => Err(UniversleError::Dataset(format!(
                "unsupported dataset format for '{}'; expected .json or .csv",
                path.display()
            ))),
        }
    }

    /// Parse a JSON array of rows. Only a malformed document fails; rows
    /// that do not describe a usable institution are skipped one by one.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, UniversleError> {
        let values: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
        let mut rows = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            let raw = match serde_json::from_value::<JsonRow>(value) {
                Ok(raw) => raw,
                Err(e) => {
                    log::warn!("skipping JSON row {index}: {e}");
                    continue;
                }
            };
            if let Some(inst) = raw.into_institution(index) {
                rows.push(inst);
            }
        }
        Ok(Self::from_institutions(rows))
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, UniversleError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let headers = rdr.headers()?.clone();
        let column = |name: &str| headers.iter().position(|h| h == name);
        let (id_col, name_col, lat_col, lng_col) =
            match (column("id"), column("name"), column("lat"), column("lng")) {
                (Some(i), Some(n), Some(la), Some(ln)) => (i, n, la, ln),
                _ => {
                    return Err(UniversleError::Dataset(
                        "CSV header must contain id, name, lat and lng".into(),
                    ))
                }
            };
        let city_col = column("city");
        let state_col = column("state");
        let alias_col = column("aliases");
        let hint_cols: Vec<(usize, HintKey)> = headers
            .iter()
            .enumerate()
            .filter_map(|(i, h)| h.parse::<HintKey>().ok().map(|k| (i, k)))
            .collect();

        let mut rows = Vec::new();
        for (line, record) in rdr.records().enumerate() {
            let record = record?;
            let field = |col: usize| record.get(col).unwrap_or("");
            let optional = |col: Option<usize>| {
                col.map(field)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
            };
            let (Ok(lat), Ok(lng)) = (field(lat_col).parse::<f64>(), field(lng_col).parse::<f64>())
            else {
                log::warn!("skipping CSV row {}: unparsable coordinates", line + 2);
                continue;
            };
            let mut inst = Institution::new(
                field(id_col),
                field(name_col),
                Coordinate::new(lat, lng),
            );
            inst.city = optional(city_col);
            inst.state = optional(state_col);
            inst.aliases = optional(alias_col)
                .map(|a| {
                    a.split('|')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            for &(col, key) in &hint_cols {
                inst.attributes
                    .insert(key.as_str().to_string(), field(col).to_string());
            }
            rows.push(inst);
        }
        Ok(Self::from_institutions(rows))
    }

    /// Two-school demo list used when nothing else is available.
    pub fn fallback() -> Self {
        let stanford = Institution::new(1_u64, "Stanford University", Coordinate::new(37.4275, -122.1697))
            .with_place("Stanford", "CA")
            .with_alias("Leland Stanford Junior University")
            .with_attribute("Established", "1891")
            .with_attribute("Motto", "The wind of freedom blows")
            .with_attribute("Nickname", "Cardinal")
            .with_attribute("Colors", "Cardinal Red, White")
            .with_attribute("Sporting affiliations", "ACC (NCAA D-I)")
            .with_attribute("Undergraduates", "7841 (fall 2023)")
            .with_attribute("Location", "Stanford, California")
            .with_attribute("Mascot", "Stanford Tree (unofficial)");
        let chicago = Institution::new(2_u64, "University of Chicago", Coordinate::new(41.7897, -87.5997))
            .with_place("Chicago", "IL")
            .with_attribute("Established", "1890")
            .with_attribute("Motto", "Crescat scientia; vita excolatur")
            .with_attribute("Nickname", "Maroons")
            .with_attribute("Colors", "Maroon, White")
            .with_attribute("Undergraduates", "7339")
            .with_attribute("Location", "Chicago, Illinois")
            .with_attribute("Mascot", "Phil the Phoenix");
        Self {
            institutions: vec![stanford, chicago],
        }
    }

    /// Load `path` if given; fall back to [`Dataset::fallback`] when there is
    /// no path or the file yields no usable rows. Read and parse errors are
    /// returned, not masked.
    pub fn load_or_fallback(path: Option<&Path>) -> Result<Self, UniversleError> {
        let Some(path) = path else {
            log::info!("no dataset given; using the built-in demo list");
            return Ok(Self::fallback());
        };
        let loaded = Self::load(path)?;
        if loaded.is_empty() {
            log::warn!(
                "'{}' has no usable institutions; using the built-in demo list",
                path.display()
            );
            return Ok(Self::fallback());
        }
        Ok(loaded)
    }

    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    pub fn len(&self) -> usize {
        self.institutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }

    pub fn into_vec(self) -> Vec<Institution> {
        self.institutions
    }
}

/// One element of a JSON dataset before validation.
#[derive(Deserialize)]
struct JsonRow {
    #[serde(default)]
    id: Option<InstitutionId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    lat: Option<LooseNumber>,
    #[serde(default)]
    lng: Option<LooseNumber>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    aliases: Option<Vec<String>>,
    #[serde(default)]
    attributes: Option<BTreeMap<String, String>>,
}

/// Coordinate component written either as a number or a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    fn value(&self) -> Option<f64> {
        match self {
            LooseNumber::Number(n) => Some(*n),
            LooseNumber::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl JsonRow {
    /// Rows without a name or coordinates yield `None`. A missing id falls
    /// back to the name.
    fn into_institution(self, index: usize) -> Option<Institution> {
        let Some(name) = self.name.filter(|n| !n.trim().is_empty()) else {
            log::warn!("skipping JSON row {index}: missing name");
            return None;
        };
        let (Some(lat), Some(lng)) = (
            self.lat.as_ref().and_then(LooseNumber::value),
            self.lng.as_ref().and_then(LooseNumber::value),
        ) else {
            log::warn!("skipping JSON row {index} ({name:?}): missing coordinates");
            return None;
        };
        let id = self
            .id
            .unwrap_or_else(|| InstitutionId(name.trim().to_string()));
        let mut inst = Institution::new(id, name, Coordinate::new(lat, lng));
        inst.city = self.city;
        inst.state = self.state;
        inst.aliases = self.aliases.unwrap_or_default();
        inst.attributes = self.attributes.unwrap_or_default();
        Some(inst)
    }
}

/// Trim values and drop blank ones.
fn clean_attributes(attributes: BTreeMap<String, String>) -> BTreeMap<String, String> {
    attributes
        .into_iter()
        .filter_map(|(k, v)| {
            let v = v.trim();
            (!v.is_empty()).then(|| (k, v.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_already_clean() {
        let fb = Dataset::fallback();
        assert_eq!(Dataset::from_institutions(fb.clone().into_vec()), fb);
        assert_eq!(fb.len(), 2);
    }

    #[test]
    fn drops_invalid_and_duplicate_rows() {
        let rows = vec![
            Institution::new(1_u64, "A", Coordinate::new(10.0, 10.0)),
            Institution::new(2_u64, "  ", Coordinate::new(10.0, 10.0)),
            Institution::new(3_u64, "C", Coordinate::new(f64::NAN, 10.0)),
            Institution::new(4_u64, "D", Coordinate::new(95.0, 10.0)),
            Institution::new(1_u64, "A again", Coordinate::new(11.0, 11.0)),
            Institution::new(5_u64, "E", Coordinate::new(-33.9, 151.2)).with_attribute("Motto", " x "),
        ];
        let ds = Dataset::from_institutions(rows);
        let names: Vec<_> = ds.institutions().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["A", "E"]);
        assert_eq!(ds.institutions()[1].attributes["Motto"], "x");
    }
}
