//! Question banks from JSON.
//!
//! Accepted shape (a single bank, or an array of them):
//!
//! ```json
//! {
//!   "id": "ocean-robot",
//!   "title": "Robots and Buses That Help the Planet",
//!   "questions": [
//!     { "text": "What powers the solar bus?", "options": ["Gas", "Wind", "Solar energy"], "correct_index": 2 }
//!   ]
//! }
//! ```
//!
//! `correctIndex` and `correct` are accepted in place of `correct_index`.
//! Validation happens during decoding, so a bad bank is a `QuizError::Json`.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::quiz_engine::{catalog::StaticCatalog, error::Result, models::QuestionBank};

pub fn bank_from_json_str(raw: &str) -> Result<QuestionBank> {
    Ok(serde_json::from_str(raw)?)
}

pub fn banks_from_json_str(raw: &str) -> Result<Vec<QuestionBank>> {
    Ok(serde_json::from_str(raw)?)
}

pub fn bank_from_path(path: impl AsRef<Path>) -> Result<QuestionBank> {
    let raw = fs::read_to_string(path.as_ref())?;
    let bank = bank_from_json_str(&raw)?;
    info!(path = %path.as_ref().display(), quiz_id = bank.id(), "question bank loaded");
    Ok(bank)
}

/// Register every bank in a JSON array file into `catalog`.
pub fn extend_catalog_from_path(catalog: &mut StaticCatalog, path: impl AsRef<Path>) -> Result<usize> {
    let raw = fs::read_to_string(path.as_ref())?;
    let banks = banks_from_json_str(&raw)?;
    let count = banks.len();
    for bank in banks {
        catalog.insert(bank);
    }
    info!(path = %path.as_ref().display(), count, "question banks loaded");
    Ok(count)
}
