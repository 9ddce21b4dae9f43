//! Repository for the `settings` key/value table.

use gallery_core::settings::{decode_all, EncodedSetting};
use serde_json::{Map, Value};
use sqlx::{PgConnection, PgPool};

use crate::models::setting::Setting;

const COLUMNS: &str = "key, value, value_type, updated_at";

/// Provides reads and upserts for site settings.
pub struct SettingRepo;

impl SettingRepo {
    /// List every stored setting row, ordered by key.
    pub async fn list(pool: &PgPool) -> Result<Vec<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings ORDER BY key ASC");
        sqlx::query_as::<_, Setting>(&query).fetch_all(pool).await
    }

    /// Load all settings decoded into a single JSON object.
    pub async fn load_map(pool: &PgPool) -> Result<Map<String, Value>, sqlx::Error> {
        let rows = Self::list(pool).await?;
        Ok(decode_all(
            rows.iter()
                .map(|s| (s.key.as_str(), s.value.as_str(), s.value_type.as_str())),
        ))
    }

    /// Insert or replace a single setting.
    pub async fn upsert(pool: &PgPool, setting: &EncodedSetting) -> Result<Setting, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        upsert_one(&mut conn, setting).await
    }

    /// Insert or replace several settings atomically: either every entry is
    /// written or none is.
    pub async fn upsert_many(
        pool: &PgPool,
        settings: &[EncodedSetting],
    ) -> Result<Vec<Setting>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut written = Vec::with_capacity(settings.len());
        for setting in settings {
            written.push(upsert_one(&mut tx, setting).await?);
        }
        tx.commit().await?;
        Ok(written)
    }
}

/// Replace both value and type for an existing key; never merges.
async fn upsert_one(conn: &mut PgConnection, setting: &EncodedSetting) -> Result<Setting, sqlx::Error> {
    let query = format!(
        "INSERT INTO settings (key, value, value_type)
         VALUES ($1, $2, $3)
         ON CONFLICT (key) DO UPDATE SET
            value = EXCLUDED.value,
            value_type = EXCLUDED.value_type,
            updated_at = NOW()
         RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, Setting>(&query)
        .bind(&setting.key)
        .bind(&setting.value)
        .bind(setting.setting_type.as_str())
        .fetch_one(&mut *conn)
        .await
}
