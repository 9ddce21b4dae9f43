//! Site setting row model.

use gallery_core::types::Timestamp;
use sqlx::FromRow;

/// A row from the `settings` table. `value` is raw text whose meaning
/// depends on `value_type` (`string` or `json`); see
/// [`gallery_core::settings`] for the decode rules.
#[derive(Debug, Clone, FromRow)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub value_type: String,
    pub updated_at: Timestamp,
}
