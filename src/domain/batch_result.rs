use std::collections::BTreeMap;

use serde::Serialize;

use super::generated_mcq::GeneratedMcq;
use super::mcq::FormattedMcq;

/// Everything one source produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceResult {
    pub formatted: Vec<FormattedMcq>,
    pub generated: Vec<GeneratedMcq>,
}

impl SourceResult {
    pub fn new(formatted: Vec<FormattedMcq>, generated: Vec<GeneratedMcq>) -> Self {
        Self {
            formatted,
            generated,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.formatted.is_empty() && self.generated.is_empty()
    }
}

/// Per-source results of a batch run, keyed by source identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BatchResult {
    entries: BTreeMap<String, SourceResult>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a source's result. A source that was already recorded keeps
    /// its first result.
    pub fn record(&mut self, source: impl Into<String>, result: SourceResult) {
        self.entries.entry(source.into()).or_insert(result);
    }

    pub fn get(&self, source: &str) -> Option<&SourceResult> {
        self.entries.get(source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SourceResult)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn total_formatted(&self) -> usize {
        self.entries.values().map(|r| r.formatted.len()).sum()
    }

    pub fn total_generated(&self) -> usize {
        self.entries.values().map(|r| r.generated.len()).sum()
    }
}
