//! Typed key/value persistence and the results history built on it.
//!
//! [`KeyValueStore`] is the raw string store the app's platform storage
//! provides; [`MemoryStore`] stands in for it in tests and demos.
//! [`JsonStore`] adds typed `get`/`set` through `serde_json`, and
//! [`ResultHistory`] keeps finished quiz results for the parent dashboard.

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use crate::quiz_engine::{error::Result, models::QuizResult};

/// Raw string storage. Implementations decide where the bytes live.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON (de)serialization on top of any [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct JsonStore<S> {
    inner: S,
}

impl<S: KeyValueStore> JsonStore<S> {
    pub fn new(inner: S) -> Self {
        JsonStore { inner }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.inner.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        debug!(key, bytes = raw.len(), "json value stored");
        self.inner.set(key, raw)
    }

    pub fn remove(&mut self, key: &str) -> Result<()> {
        self.inner.remove(key)
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

/// Receives every finished quiz result.
pub trait ResultSink {
    fn record(&mut self, result: &QuizResult) -> Result<()>;
}

/// Newest-last list of results per quiz, capped at `limit` entries each.
#[derive(Debug, Clone)]
pub struct ResultHistory<S> {
    store: JsonStore<S>,
    limit: usize,
}

const KEY_PREFIX: &str = "quiz_results:";

fn results_key(quiz_id: &str) -> String {
    format!("{KEY_PREFIX}{quiz_id}")
}

impl<S: KeyValueStore> ResultHistory<S> {
    /// A `limit` of 0 is treated as 1.
    pub fn new(store: S, limit: usize) -> Self {
        ResultHistory { store: JsonStore::new(store), limit: limit.max(1) }
    }

    pub fn results(&self, quiz_id: &str) -> Result<Vec<QuizResult>> {
        Ok(self.store.get(&results_key(quiz_id))?.unwrap_or_default())
    }

    pub fn latest(&self, quiz_id: &str) -> Result<Option<QuizResult>> {
        Ok(self.results(quiz_id)?.pop())
    }

    pub fn best_score(&self, quiz_id: &str) -> Result<Option<usize>> {
        Ok(self.results(quiz_id)?.iter().map(|r| r.score).max())
    }

    pub fn clear(&mut self, quiz_id: &str) -> Result<()> {
        self.store.remove(&results_key(quiz_id))
    }
}

impl<S: KeyValueStore> ResultSink for ResultHistory<S> {
    fn record(&mut self, result: &QuizResult) -> Result<()> {
        let key = results_key(&result.quiz_id);
        let mut results: Vec<QuizResult> = self.store.get(&key)?.unwrap_or_default();
        results.push(result.clone());
        if results.len() > self.limit {
            let excess = results.len() - self.limit;
            results.drain(..excess);
        }
        self.store.set(&key, &results)?;
        info!(
            quiz_id = %result.quiz_id,
            score = result.score,
            total = result.total,
            kept = results.len(),
            "quiz result recorded"
        );
        Ok(())
    }
}
