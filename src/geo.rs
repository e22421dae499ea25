//! Great-circle distance and 16-point compass bearings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Coordinate;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.7613;

/// Width of one compass sector in degrees.
const SECTOR_DEGREES: f64 = 22.5;

/// The sixteen compass points, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compass {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl Compass {
    /// All labels in sector order; `ALL[i]` is centred on `i * 22.5` degrees.
    pub const ALL: [Compass; 16] = [
        Compass::N,
        Compass::NNE,
        Compass::NE,
        Compass::ENE,
        Compass::E,
        Compass::ESE,
        Compass::SE,
        Compass::SSE,
        Compass::S,
        Compass::SSW,
        Compass::SW,
        Compass::WSW,
        Compass::W,
        Compass::WNW,
        Compass::NW,
        Compass::NNW,
    ];

    /// Bucket a bearing in degrees into its nearest compass point.
    ///
    /// Any finite angle is accepted and wrapped into `[0, 360)` first. Exact
    /// sector boundaries round up to the next label clockwise.
    pub fn from_degrees(degrees: f64) -> Self {
        let wrapped = degrees.rem_euclid(360.0);
        let index = (wrapped / SECTOR_DEGREES).round() as usize % Self::ALL.len();
        Self::ALL[index]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Compass::N => "N",
            Compass::NNE => "NNE",
            Compass::NE => "NE",
            Compass::ENE => "ENE",
            Compass::E => "E",
            Compass::ESE => "ESE",
            Compass::SE => "SE",
            Compass::SSE => "SSE",
            Compass::S => "S",
            Compass::SSW => "SSW",
            Compass::SW => "SW",
            Compass::WSW => "WSW",
            Compass::W => "W",
            Compass::WNW => "WNW",
            Compass::NW => "NW",
            Compass::NNW => "NNW",
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Haversine distance between two coordinates in miles.
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let s = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `s` a hair above 1 for antipodal points.
    2.0 * EARTH_RADIUS_MILES * s.clamp(0.0, 1.0).sqrt().asin()
}

/// Initial great-circle bearing from `a` toward `b`, in `[0, 360)` degrees.
///
/// Returns `None` when the points coincide and no direction exists.
pub fn initial_bearing_degrees(a: Coordinate, b: Coordinate) -> Option<f64> {
    if a == b {
        return None;
    }
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let d_lng = (b.lng - a.lng).to_radians();
    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
    Some(y.atan2(x).to_degrees().rem_euclid(360.0))
}

/// Compass point to travel from `a` toward `b`. Identical points yield `N`.
pub fn bearing(a: Coordinate, b: Coordinate) -> Compass {
    initial_bearing_degrees(a, b)
        .map(Compass::from_degrees)
        .unwrap_or(Compass::N)
}
