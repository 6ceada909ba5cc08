//! Runtime settings: defaults, then an optional JSON file, then environment.
//!
//! | Variable               | Field             |
//! |------------------------|-------------------|
//! | `QUIZ_SHUFFLE_OPTIONS` | `shuffle_options` |
//! | `QUIZ_RNG_SEED`        | `rng_seed`        |
//! | `QUIZ_HISTORY_LIMIT`   | `history_limit`   |

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::quiz_engine::{
    error::{QuizError, Result},
    models::QuizRequest,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    pub shuffle_options: bool,
    pub rng_seed: Option<u64>,
    /// Results kept per quiz in the history store.
    pub history_limit: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            shuffle_options: false,
            rng_seed: None,
            history_limit: 20,
        }
    }
}

impl QuizSettings {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Defaults, overlaid by `path` when it exists, overlaid by the environment.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut settings = match fs::read_to_string(path.as_ref()) {
            Ok(raw) => Self::from_json_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(err) => return Err(err.into()),
        };
        settings.apply_overrides(|key| std::env::var(key).ok())?;
        debug!(?settings, "quiz settings loaded");
        Ok(settings)
    }

    pub fn from_env() -> Result<Self> {
        let mut settings = Self::default();
        settings.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Apply overrides from any key lookup (the process environment in
    /// production, a map in tests).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("QUIZ_SHUFFLE_OPTIONS") {
            self.shuffle_options = parse_bool(&v)
                .ok_or(QuizError::InvalidSetting { key: "QUIZ_SHUFFLE_OPTIONS", value: v })?;
        }
        if let Some(v) = lookup("QUIZ_RNG_SEED") {
            self.rng_seed = if v.trim().is_empty() {
                None
            } else {
                Some(v.trim().parse().map_err(|_| QuizError::InvalidSetting { key: "QUIZ_RNG_SEED", value: v.clone() })?)
            };
        }
        if let Some(v) = lookup("QUIZ_HISTORY_LIMIT") {
            self.history_limit = v
                .trim()
                .parse()
                .map_err(|_| QuizError::InvalidSetting { key: "QUIZ_HISTORY_LIMIT", value: v.clone() })?;
        }
        Ok(())
    }

    /// Start request for `quiz_id` carrying these settings.
    pub fn request(&self, quiz_id: impl Into<String>) -> QuizRequest {
        QuizRequest {
            quiz_id: quiz_id.into(),
            rng_seed: self.rng_seed,
            shuffle_options: self.shuffle_options,
        }
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
