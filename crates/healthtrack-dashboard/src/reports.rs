//! Status reports over per-center counts.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use healthtrack_core::models::{CenterStatusCounts, NutritionStatus, ReportFilter};

/// Registration window a report covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportWindow {
    #[default]
    All,
    /// Children registered in the last `n` days.
    LastDays(u32),
}

impl ReportWindow {
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::All => None,
            Self::LastDays(days) => Some(now - Duration::days(i64::from(days))),
        }
    }

    /// Filter for `center` (all centers when `None`) within this window.
    pub fn filter(self, center: Option<&str>, now: DateTime<Utc>) -> ReportFilter {
        ReportFilter {
            center: center.map(str::to_string),
            created_since: self.cutoff(now),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusSummary {
    pub status: NutritionStatus,
    pub count: u64,
    /// Whole percent of all children in the report.
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CenterReport {
    pub by_center: Vec<CenterStatusCounts>,
    /// One entry per status, SAM first.
    pub summary: Vec<StatusSummary>,
}

impl CenterReport {
    pub fn from_counts(by_center: Vec<CenterStatusCounts>) -> Self {
        let summary = summarize(&by_center);
        Self { by_center, summary }
    }

    pub fn total(&self) -> u64 {
        self.by_center.iter().map(|c| c.total_count).sum()
    }

    pub fn centers(&self) -> Vec<&str> {
        self.by_center.iter().map(|c| c.awc_center.as_str()).collect()
    }
}

/// Counts for the admin landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardSummary {
    pub total_health_workers: u64,
    pub total_children: u64,
    pub sam_count: u64,
    pub mam_count: u64,
    pub normal_count: u64,
}

/// Round half up, for non-negative values.
fn round_half_up(value: f64) -> u32 {
    (value + 0.5).floor() as u32
}

pub fn percentage(count: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    round_half_up(count as f64 / total as f64 * 100.0)
}

/// Totals per status across all centers.
pub fn summarize(by_center: &[CenterStatusCounts]) -> Vec<StatusSummary> {
    let total: u64 = by_center.iter().map(|c| c.total_count).sum();
    NutritionStatus::ALL
        .iter()
        .map(|&status| {
            let count = by_center.iter().map(|c| c.count(status)).sum();
            StatusSummary {
                status,
                count,
                percentage: percentage(count, total),
            }
        })
        .collect()
}
