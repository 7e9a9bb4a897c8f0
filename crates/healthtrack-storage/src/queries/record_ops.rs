//! Append and list health records.

use rusqlite::{params, Connection, Row};

use healthtrack_core::errors::{HealthTrackError, HealthTrackResult, ValidationError};
use healthtrack_core::models::{HealthRecord, NewHealthRecord};

use super::child_ops;
use super::codec::{self, decode_enum, decode_timestamp, encode_timestamp};
use crate::to_storage_err;

struct RecordRow {
    id: String,
    child_id: String,
    height: f64,
    weight: f64,
    edema: bool,
    poverty_index: u8,
    sanitation_index: u8,
    meals_per_day: u32,
    predicted_status: String,
    sam_probability: f64,
    mam_probability: f64,
    normal_probability: f64,
    recorded_at: String,
    recorded_by: Option<String>,
}

impl RecordRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            child_id: row.get(1)?,
            height: row.get(2)?,
            weight: row.get(3)?,
            edema: row.get(4)?,
            poverty_index: row.get(5)?,
            sanitation_index: row.get(6)?,
            meals_per_day: row.get(7)?,
            predicted_status: row.get(8)?,
            sam_probability: row.get(9)?,
            mam_probability: row.get(10)?,
            normal_probability: row.get(11)?,
            recorded_at: row.get(12)?,
            recorded_by: row.get(13)?,
        })
    }

    fn into_record(self) -> HealthTrackResult<HealthRecord> {
        Ok(HealthRecord {
            predicted_status: decode_enum("predicted_status", &self.predicted_status)?,
            recorded_at: decode_timestamp("recorded_at", &self.recorded_at)?,
            id: self.id,
            child_id: self.child_id,
            height: self.height,
            weight: self.weight,
            edema: self.edema,
            poverty_index: self.poverty_index,
            sanitation_index: self.sanitation_index,
            meals_per_day: self.meals_per_day,
            sam_probability: self.sam_probability,
            mam_probability: self.mam_probability,
            normal_probability: self.normal_probability,
            recorded_by: self.recorded_by,
        })
    }
}

/// Insert a record and move the child's status to the prediction.
/// Runs in one transaction: record row + status update are all-or-nothing.
pub fn insert_record(conn: &Connection, new: &NewHealthRecord) -> HealthTrackResult<HealthRecord> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("insert_record begin: {e}")))?;

    match insert_record_inner(&tx, new) {
        Ok(record) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("insert_record commit: {e}")))?;
            Ok(record)
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

fn insert_record_inner(conn: &Connection, new: &NewHealthRecord) -> HealthTrackResult<HealthRecord> {
    let p = &new.prediction.probabilities;
    if !p.is_distribution() {
        return Err(ValidationError::InvalidFormat {
            field: "probabilities".to_string(),
            reason: format!("not a distribution: {}/{}/{}", p.sam, p.mam, p.normal),
        }
        .into());
    }
    if !child_ops::child_exists(conn, &new.child_id)? {
        return Err(HealthTrackError::ChildNotFound {
            id: new.child_id.clone(),
        });
    }

    let m = &new.measurements;
    let record = HealthRecord {
        id: uuid::Uuid::new_v4().to_string(),
        child_id: new.child_id.clone(),
        height: m.height_cm,
        weight: m.weight_kg,
        edema: m.edema,
        poverty_index: m.poverty_index,
        sanitation_index: m.sanitation_index,
        meals_per_day: m.meals_per_day,
        predicted_status: new.prediction.status,
        sam_probability: p.sam,
        mam_probability: p.mam,
        normal_probability: p.normal,
        recorded_at: codec::now(),
        recorded_by: new.recorded_by.clone(),
    };

    conn.execute(
        "INSERT INTO health_records (
            id, child_id, height, weight, edema, poverty_index, sanitation_index,
            meals_per_day, predicted_status, sam_probability, mam_probability,
            normal_probability, recorded_at, recorded_by
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            record.id,
            record.child_id,
            record.height,
            record.weight,
            record.edema,
            record.poverty_index,
            record.sanitation_index,
            record.meals_per_day,
            record.predicted_status.as_str(),
            record.sam_probability,
            record.mam_probability,
            record.normal_probability,
            encode_timestamp(record.recorded_at),
            record.recorded_by,
        ],
    )
    .map_err(|e| to_storage_err(format!("insert_record: {e}")))?;

    child_ops::update_status(conn, &record.child_id, record.predicted_status, record.recorded_at)?;

    Ok(record)
}

/// All records for a child, newest first.
pub fn list_records(conn: &Connection, child_id: &str) -> HealthTrackResult<Vec<HealthRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, child_id, height, weight, edema, poverty_index, sanitation_index,
                    meals_per_day, predicted_status, sam_probability, mam_probability,
                    normal_probability, recorded_at, recorded_by
             FROM health_records
             WHERE child_id = ?1
             ORDER BY recorded_at DESC, rowid DESC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![child_id], RecordRow::read)
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.map(|row| {
        row.map_err(|e| to_storage_err(e.to_string()))?
            .into_record()
    })
    .collect()
}
