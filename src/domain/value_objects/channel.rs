//! Channel value object
//!
//! Severity classification attached to a traversal branch.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity channel a finding is reported on.
///
/// A component receives the channel that was in effect on the branch that
/// first reached it. Only `Error` findings fail a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Error,
    Warning,
}

impl Channel {
    /// Channel used for a branch entered through an external dependency.
    pub fn for_dependencies(warn_on_deps: bool) -> Self {
        if warn_on_deps {
            Channel::Warning
        } else {
            Channel::Error
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Error => "error",
            Channel::Warning => "warning",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
