use std::collections::BTreeMap;

use serde::Serialize;

use super::catalog::CategoryId;
use super::domain::EvaluationError;
use super::resolver::EvaluationConfiguration;

/// Raw per-indicator entry. Unset is distinct from any numeric score and is
/// excluded from averages, never treated as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndicatorEntry {
    pub score: Option<u8>,
    pub comment: Option<String>,
}

/// Holds the raw 1-5 scores and free-text comments for every indicator in the
/// current evaluation instance. Pure data, owned exclusively by one session.
#[derive(Debug, Clone)]
pub struct IndicatorScoreStore {
    entries: BTreeMap<&'static str, (CategoryId, IndicatorEntry)>,
}

impl IndicatorScoreStore {
    /// Initialize one unset entry per indicator of the resolved configuration.
    pub fn for_configuration(configuration: &EvaluationConfiguration) -> Self {
        let mut entries = BTreeMap::new();
        for step in &configuration.steps {
            for template in &step.indicators {
                entries.insert(template.key, (step.category, IndicatorEntry::default()));
            }
        }
        Self { entries }
    }

    pub fn set_score(&mut self, key: &str, score: u8) -> Result<(), EvaluationError> {
        if !(1..=5).contains(&score) {
            return Err(EvaluationError::ScoreOutOfRange(score));
        }
        let (_, entry) = self
            .entries
            .get_mut(key)
            .ok_or_else(|| EvaluationError::UnknownIndicator(key.to_owned()))?;
        entry.score = Some(score);
        Ok(())
    }

    pub fn clear_score(&mut self, key: &str) -> Result<(), EvaluationError> {
        let (_, entry) = self
            .entries
            .get_mut(key)
            .ok_or_else(|| EvaluationError::UnknownIndicator(key.to_owned()))?;
        entry.score = None;
        Ok(())
    }

    pub fn set_comment(&mut self, key: &str, comment: Option<String>) -> Result<(), EvaluationError> {
        let (_, entry) = self
            .entries
            .get_mut(key)
            .ok_or_else(|| EvaluationError::UnknownIndicator(key.to_owned()))?;
        entry.comment = comment.filter(|text| !text.trim().is_empty());
        Ok(())
    }

    pub fn entry(&self, key: &str) -> Option<&IndicatorEntry> {
        self.entries.get(key).map(|(_, entry)| entry)
    }

    pub fn score(&self, key: &str) -> Option<u8> {
        self.entry(key).and_then(|entry| entry.score)
    }

    /// Set scores within one category, in catalog order for that store.
    pub fn category_scores(&self, category: CategoryId) -> impl Iterator<Item = u8> + '_ {
        self.entries
            .values()
            .filter(move |(owner, _)| *owner == category)
            .filter_map(|(_, entry)| entry.score)
    }

    pub fn rated_count(&self, category: CategoryId) -> usize {
        self.category_scores(category).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, CategoryId, &IndicatorEntry)> + '_ {
        self.entries
            .iter()
            .map(|(key, (category, entry))| (*key, *category, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
