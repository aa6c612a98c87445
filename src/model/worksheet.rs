use serde::{Deserialize, Serialize};

use super::problem::Problem;
use crate::cli::Layout;
use crate::config::defaults::DEFAULT_TITLE;

/// User-facing worksheet options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorksheetSettings {
    pub title: String,
    /// Printed centered at the bottom of every page; empty means none
    pub footnote: String,
    pub layout: Layout,
}

impl Default for WorksheetSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            footnote: String::new(),
            layout: Layout::SingleColumn,
        }
    }
}

impl WorksheetSettings {
    pub fn with_layout(layout: Layout) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    /// Whether space must be reserved for a footnote
    pub fn has_footnote(&self) -> bool {
        !self.footnote.trim().is_empty()
    }
}

/// A loaded worksheet: settings plus the problems that passed validation
#[derive(Debug, Clone, Default)]
pub struct Worksheet {
    pub settings: WorksheetSettings,
    pub problems: Vec<Problem>,
}
