//! Profiles keyed by identity-provider user id.

use rusqlite::{params, Connection, OptionalExtension};

use healthtrack_core::errors::HealthTrackResult;
use healthtrack_core::models::{NewProfile, Profile};

use super::codec::{self, decode_enum, decode_timestamp, encode_timestamp};
use crate::to_storage_err;

pub fn insert_profile(conn: &Connection, new: &NewProfile) -> HealthTrackResult<Profile> {
    let now = codec::now();
    let profile = Profile {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: new.user_id.clone(),
        role: new.role,
        full_name: new.full_name.clone(),
        username: new.username.clone(),
        awc_center: new.awc_center.clone(),
        created_at: now,
        updated_at: now,
    };

    conn.execute(
        "INSERT INTO profiles (id, user_id, role, full_name, username, awc_center, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            profile.id,
            profile.user_id,
            profile.role.as_str(),
            profile.full_name,
            profile.username,
            profile.awc_center,
            encode_timestamp(profile.created_at),
            encode_timestamp(profile.updated_at),
        ],
    )
    .map_err(|e| to_storage_err(format!("insert_profile: {e}")))?;

    Ok(profile)
}

pub fn get_by_user(conn: &Connection, user_id: &str) -> HealthTrackResult<Option<Profile>> {
    #[allow(clippy::type_complexity)]
    let row: Option<(String, String, String, String, Option<String>, Option<String>, String, String)> = conn
        .query_row(
            "SELECT id, user_id, role, full_name, username, awc_center, created_at, updated_at
             FROM profiles WHERE user_id = ?1",
            params![user_id],
            |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                    row.get(6)?,
                    row.get(7)?,
                ))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some((id, user_id, role, full_name, username, awc_center, created_at, updated_at)) = row
    else {
        return Ok(None);
    };

    Ok(Some(Profile {
        id,
        user_id,
        role: decode_enum("role", &role)?,
        full_name,
        username,
        awc_center,
        created_at: decode_timestamp("created_at", &created_at)?,
        updated_at: decode_timestamp("updated_at", &updated_at)?,
    }))
}
