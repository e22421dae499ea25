//! Game session state.
//!
//! A [`Session`] owns the target, the guesses made so far and the hint keys
//! already revealed. Win/loss status is never stored: every query recomputes
//! it from the target and the guess list, so the two cannot disagree.

use std::collections::BTreeSet;

use rand::Rng;
use serde::Serialize;

use crate::config::GameConfig;
use crate::error::UniversleError;
use crate::evaluate::evaluate;
use crate::hint::HintKey;
use crate::normalize::normalize;
use crate::types::{GuessRecord, Institution};

/// Derived state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

/// Choose a target uniformly at random.
pub fn select_target<'a, R: Rng + ?Sized>(
    institutions: &'a [Institution],
    rng: &mut R,
) -> Result<&'a Institution, UniversleError> {
    if institutions.is_empty() {
        return Err(UniversleError::EmptyDataset);
    }
    Ok(&institutions[rng.gen_range(0..institutions.len())])
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    max_attempts: usize,
    target: Option<Institution>,
    /// Oldest first.
    guesses: Vec<GuessRecord>,
    used_hints: BTreeSet<HintKey>,
}

impl Session {
    /// An uninitialized session; call [`Session::initialize`] before guessing.
    pub fn new(config: &GameConfig) -> Result<Self, UniversleError> {
        config.validate()?;
        Ok(Self {
            max_attempts: config.max_attempts,
            target: None,
            guesses: Vec::new(),
            used_hints: BTreeSet::new(),
        })
    }

    /// A session whose target is already fixed.
    pub fn with_target(config: &GameConfig, target: Institution) -> Result<Self, UniversleError> {
        let mut session = Self::new(config)?;
        session.target = Some(target);
        Ok(session)
    }

    /// Pick the target once.
    ///
    /// Repeated calls return the existing target and leave `rng` untouched.
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        institutions: &[Institution],
        rng: &mut R,
    ) -> Result<&Institution, UniversleError> {
        let target = match self.target.take() {
            Some(existing) => existing,
            None => {
                let chosen = select_target(institutions, rng)?;
                log::debug!("target chosen: {}", chosen.name);
                chosen.clone()
            }
        };
        Ok(self.target.insert(target))
    }

    pub fn is_initialized(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&Institution> {
        self.target.as_ref()
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Guesses in submission order.
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Guesses with the most recent first.
    pub fn guesses_newest_first(&self) -> impl Iterator<Item = &GuessRecord> {
        self.guesses.iter().rev()
    }

    pub fn used_hints(&self) -> &BTreeSet<HintKey> {
        &self.used_hints
    }

    pub fn attempts_left(&self) -> usize {
        self.max_attempts.saturating_sub(self.guesses.len())
    }

    pub fn status(&self) -> GameStatus {
        let Some(target) = &self.target else {
            return GameStatus::Active;
        };
        let wanted = normalize(&target.name);
        if self
            .guesses
            .iter()
            .any(|g| normalize(&g.candidate.name) == wanted)
        {
            GameStatus::Won
        } else if self.guesses.len() >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::Active
        }
    }

    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    pub fn is_won(&self) -> bool {
        self.status() == GameStatus::Won
    }

    /// Score `candidate` and append the result.
    ///
    /// Returns `None` without touching the session when no target has been
    /// chosen yet or the game is already over.
    pub fn submit_guess<R: Rng + ?Sized>(
        &mut self,
        candidate: &Institution,
        rng: &mut R,
    ) -> Option<&GuessRecord> {
        if self.is_over() {
            return None;
        }
        let target = self.target.as_ref()?;
        let record = evaluate(candidate, target, &self.used_hints, rng);
        if let Some(hint) = &record.hint {
            self.used_hints.insert(hint.key);
        }
        self.guesses.push(record);
        match self.status() {
            GameStatus::Won => log::info!("solved in {} guesses", self.guesses.len()),
            GameStatus::Lost => log::info!("out of attempts"),
            GameStatus::Active => {}
        }
        self.guesses.last()
    }
}
