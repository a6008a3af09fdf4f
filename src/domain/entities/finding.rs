//! Finding entity - one reported defect

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::Channel;

/// A defect scoped to a component and a severity channel.
///
/// Messages may span several lines (e.g. an ambiguity followed by the list of
/// matching directories); reporters decide how to indent continuation lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub component: PathBuf,
    pub channel: Channel,
    pub message: String,
}

impl Finding {
    pub fn new(
        component: impl Into<PathBuf>,
        channel: Channel,
        message: impl Into<String>,
    ) -> Self {
        Self {
            component: component.into(),
            channel,
            message: message.into(),
        }
    }

    pub fn error(component: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(component, Channel::Error, message)
    }

    pub fn warning(component: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(component, Channel::Warning, message)
    }
}
