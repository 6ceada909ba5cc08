//! Question bank providers.
//!
//! [`StaticCatalog`] serves the quizzes that ship with the app and any banks
//! loaded from JSON at startup. Sessions only ever see an `Arc<QuestionBank>`,
//! so a provider can be swapped for a fake in tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::quiz_engine::{
    error::{QuizError, Result},
    models::QuestionBank,
};

/// ocean-robot
pub mod tech_news;
/// penguin-rescue
pub mod nature;

/// Source of validated question banks, keyed by quiz id.
pub trait QuestionBankProvider {
    fn bank(&self, quiz_id: &str) -> Result<Arc<QuestionBank>>;

    /// Ids this provider can serve, in a stable order.
    fn quiz_ids(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    banks: BTreeMap<String, Arc<QuestionBank>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with the bundled story quizzes.
    pub fn builtin() -> Result<Self> {
        let mut catalog = Self::new();
        catalog.insert(tech_news::ocean_robot()?);
        catalog.insert(nature::penguin_rescue()?);
        Ok(catalog)
    }

    /// Add or replace a bank under its own id.
    pub fn insert(&mut self, bank: QuestionBank) {
        debug!(quiz_id = bank.id(), questions = bank.len(), "bank registered");
        self.banks.insert(bank.id().to_string(), Arc::new(bank));
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}

impl QuestionBankProvider for StaticCatalog {
    fn bank(&self, quiz_id: &str) -> Result<Arc<QuestionBank>> {
        self.banks
            .get(quiz_id)
            .cloned()
            .ok_or_else(|| QuizError::UnknownQuiz(quiz_id.to_string()))
    }

    fn quiz_ids(&self) -> Vec<String> {
        self.banks.keys().cloned().collect()
    }
}
