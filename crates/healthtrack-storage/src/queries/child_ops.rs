//! Insert, get, and list children.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use healthtrack_core::errors::HealthTrackResult;
use healthtrack_core::models::{Child, ChildFilter, NewChild, NutritionStatus};

use super::codec::{
    self, decode_date, decode_enum, decode_timestamp, encode_date, encode_timestamp,
};
use crate::to_storage_err;

const CHILD_COLUMNS: &str = "id, name, date_of_birth, gender, guardian_name, city, district,
     awc_center, healthworker_id, current_status, created_at, updated_at";

/// Raw column values, decoded after the row borrow ends.
struct ChildRow {
    id: String,
    name: String,
    date_of_birth: String,
    gender: String,
    guardian_name: String,
    city: String,
    district: String,
    awc_center: String,
    healthworker_id: Option<String>,
    current_status: String,
    created_at: String,
    updated_at: String,
}

impl ChildRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            date_of_birth: row.get(2)?,
            gender: row.get(3)?,
            guardian_name: row.get(4)?,
            city: row.get(5)?,
            district: row.get(6)?,
            awc_center: row.get(7)?,
            healthworker_id: row.get(8)?,
            current_status: row.get(9)?,
            created_at: row.get(10)?,
            updated_at: row.get(11)?,
        })
    }

    fn into_child(self) -> HealthTrackResult<Child> {
        Ok(Child {
            date_of_birth: decode_date("date_of_birth", &self.date_of_birth)?,
            gender: decode_enum("gender", &self.gender)?,
            current_status: decode_enum("current_status", &self.current_status)?,
            created_at: decode_timestamp("created_at", &self.created_at)?,
            updated_at: decode_timestamp("updated_at", &self.updated_at)?,
            id: self.id,
            name: self.name,
            guardian_name: self.guardian_name,
            city: self.city,
            district: self.district,
            awc_center: self.awc_center,
            healthworker_id: self.healthworker_id,
        })
    }
}

/// Insert a new child with status `normal`.
pub fn insert_child(conn: &Connection, new: &NewChild) -> HealthTrackResult<Child> {
    let now = codec::now();
    let child = Child {
        id: uuid::Uuid::new_v4().to_string(),
        name: new.name.clone(),
        date_of_birth: new.date_of_birth,
        gender: new.gender,
        guardian_name: new.guardian_name.clone(),
        city: new.city.clone(),
        district: new.district.clone(),
        awc_center: new.awc_center.clone(),
        healthworker_id: new.healthworker_id.clone(),
        current_status: NutritionStatus::Normal,
        created_at: now,
        updated_at: now,
    };

    conn.execute(
        "INSERT INTO children (
            id, name, date_of_birth, gender, guardian_name, city, district,
            awc_center, healthworker_id, current_status, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            child.id,
            child.name,
            encode_date(child.date_of_birth),
            child.gender.as_str(),
            child.guardian_name,
            child.city,
            child.district,
            child.awc_center,
            child.healthworker_id,
            child.current_status.as_str(),
            encode_timestamp(child.created_at),
            encode_timestamp(child.updated_at),
        ],
    )
    .map_err(|e| to_storage_err(format!("insert_child: {e}")))?;

    Ok(child)
}

pub fn get_child(conn: &Connection, id: &str) -> HealthTrackResult<Option<Child>> {
    let sql = format!("SELECT {CHILD_COLUMNS} FROM children WHERE id = ?1");
    let row = conn
        .query_row(&sql, params![id], ChildRow::read)
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.map(ChildRow::into_child).transpose()
}

pub fn child_exists(conn: &Connection, id: &str) -> HealthTrackResult<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM children WHERE id = ?1)",
        params![id],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Center and status filter in SQL; name search applied on decoded rows.
pub fn list_children(conn: &Connection, filter: &ChildFilter) -> HealthTrackResult<Vec<Child>> {
    let sql = format!(
        "SELECT {CHILD_COLUMNS} FROM children
         WHERE (?1 IS NULL OR awc_center = ?1)
           AND (?2 IS NULL OR current_status = ?2)
         ORDER BY created_at DESC, rowid DESC"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(
            params![filter.center, filter.status.map(NutritionStatus::as_str)],
            ChildRow::read,
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut children = Vec::new();
    for row in rows {
        let child = row
            .map_err(|e| to_storage_err(e.to_string()))?
            .into_child()?;
        if filter.matches(&child) {
            children.push(child);
        }
    }
    Ok(children)
}

/// Overwrite a child's current status. Returns false if the child is missing.
pub fn update_status(
    conn: &Connection,
    id: &str,
    status: NutritionStatus,
    at: DateTime<Utc>,
) -> HealthTrackResult<bool> {
    let changed = conn
        .execute(
            "UPDATE children SET current_status = ?1, updated_at = ?2 WHERE id = ?3",
            params![status.as_str(), encode_timestamp(at), id],
        )
        .map_err(|e| to_storage_err(format!("update_status: {e}")))?;
    Ok(changed > 0)
}
