//! Core logic for Universle, a university geography guessing game.
//!
//! A game picks a target institution; each guess is scored by great-circle
//! distance and compass direction toward the target, and may reveal one of
//! the target's attributes as a hint. Six guesses are allowed by default.
//!
//! Everything here is synchronous and free of I/O except [`Dataset`]
//! loading. Randomness is always passed in as a [`rand::Rng`] so games can
//! be replayed from a seed.

pub mod config;
pub mod dataset;
pub mod error;
pub mod evaluate;
pub mod geo;
pub mod hint;
pub mod io_utils;
pub mod normalize;
pub mod search;
pub mod session;
pub mod types;

pub use config::{GameConfig, DEFAULT_MAX_ATTEMPTS};
pub use dataset::Dataset;
pub use error::UniversleError;
pub use evaluate::evaluate;
pub use geo::{bearing, distance_miles, initial_bearing_degrees, Compass, EARTH_RADIUS_MILES};
pub use hint::{available_hints, pick_hint, Hint, HintKey};
pub use normalize::{names_match, normalize};
pub use search::{find_exact, suggest, SUGGESTION_CAP};
pub use session::{select_target, GameStatus, Session};
pub use types::{Coordinate, GuessRecord, Institution, InstitutionId};
