use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::child::Child;
use super::status::NutritionStatus;

/// Filter for child listings. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildFilter {
    pub center: Option<String>,
    pub status: Option<NutritionStatus>,
    /// Case-insensitive substring of the child's or guardian's name.
    pub search_text: Option<String>,
}

impl ChildFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(mut self, center: impl Into<String>) -> Self {
        self.center = Some(center.into());
        self
    }

    pub fn status(mut self, status: NutritionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    /// Search text to apply, or `None` when blank.
    pub fn normalized_search(&self) -> Option<String> {
        self.search_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    pub fn matches(&self, child: &Child) -> bool {
        if let Some(center) = &self.center {
            if &child.awc_center != center {
                return false;
            }
        }
        if let Some(status) = self.status {
            if child.current_status != status {
                return false;
            }
        }
        match self.normalized_search() {
            Some(needle) => {
                child.name.to_lowercase().contains(&needle)
                    || child.guardian_name.to_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}

/// Filter for status reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportFilter {
    pub center: Option<String>,
    /// Only children registered at or after this instant.
    pub created_since: Option<DateTime<Utc>>,
}
