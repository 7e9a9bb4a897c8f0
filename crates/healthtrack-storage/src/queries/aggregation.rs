//! Aggregation queries: per-center status counts.

use std::collections::BTreeMap;

use rusqlite::{params, Connection};

use healthtrack_core::errors::HealthTrackResult;
use healthtrack_core::models::{CenterStatusCounts, NutritionStatus, ReportFilter};

use super::codec::{decode_enum, encode_timestamp};
use crate::to_storage_err;

/// Count children by center and current status, sorted by center.
pub fn status_counts(
    conn: &Connection,
    filter: &ReportFilter,
) -> HealthTrackResult<Vec<CenterStatusCounts>> {
    let mut stmt = conn
        .prepare(
            "SELECT awc_center, current_status, COUNT(*)
             FROM children
             WHERE (?1 IS NULL OR awc_center = ?1)
               AND (?2 IS NULL OR created_at >= ?2)
             GROUP BY awc_center, current_status",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let since = filter.created_since.map(encode_timestamp);
    let rows = stmt
        .query_map(params![filter.center, since], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut by_center: BTreeMap<String, CenterStatusCounts> = BTreeMap::new();
    for row in rows {
        let (center, status, count) = row.map_err(|e| to_storage_err(e.to_string()))?;
        let status: NutritionStatus = decode_enum("current_status", &status)?;
        by_center
            .entry(center.clone())
            .or_insert_with(|| CenterStatusCounts::new(center))
            .add(status, count as u64);
    }
    Ok(by_center.into_values().collect())
}
