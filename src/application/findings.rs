//! Finding store
//!
//! Accumulates findings per component, keyed by canonical component path.
//! Components appear in the order their first finding was recorded and
//! messages keep emission order, so the same inputs always render the same
//! report.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::Finding;
use crate::domain::value_objects::Channel;

/// Findings recorded against one component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentFindings {
    pub path: PathBuf,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ComponentFindings {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn messages(&self, channel: Channel) -> &[String] {
        match channel {
            Channel::Error => &self.errors,
            Channel::Warning => &self.warnings,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FindingStore {
    entries: Vec<ComponentFindings>,
    index: HashMap<PathBuf, usize>,
}

impl FindingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: &Path, channel: Channel, message: impl Into<String>) {
        let slot = match self.index.get(path) {
            Some(&slot) => slot,
            None => {
                self.entries.push(ComponentFindings::new(path.to_path_buf()));
                let slot = self.entries.len() - 1;
                self.index.insert(path.to_path_buf(), slot);
                slot
            }
        };

        let entry = &mut self.entries[slot];
        match channel {
            Channel::Error => entry.errors.push(message.into()),
            Channel::Warning => entry.warnings.push(message.into()),
        }
    }

    pub fn record_finding(&mut self, finding: Finding) {
        self.record(&finding.component, finding.channel, finding.message);
    }

    /// Total number of findings on a channel.
    pub fn count(&self, channel: Channel) -> usize {
        self.entries.iter().map(|e| e.messages(channel).len()).sum()
    }

    /// Visit every component that has at least one finding.
    pub fn for_each_non_empty<F>(&self, mut visitor: F)
    where
        F: FnMut(&ComponentFindings),
    {
        for entry in self.entries.iter().filter(|e| !e.is_empty()) {
            visitor(entry);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentFindings> {
        self.entries.iter()
    }

    pub fn get(&self, path: &Path) -> Option<&ComponentFindings> {
        self.index.get(path).map(|&slot| &self.entries[slot])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(ComponentFindings::is_empty)
    }
}

/// Aggregate counts of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LintSummary {
    pub errors: usize,
    pub warnings: usize,
    /// Components claimed during traversal, including ones that failed to load
    pub components: usize,
}

impl LintSummary {
    /// Warnings alone never fail a run.
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }
}
