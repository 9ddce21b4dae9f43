use crate::error::CoreError;

/// All database primary keys are PostgreSQL UUIDs generated server-side.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse an id taken from a request path.
///
/// A string that is not a UUID cannot name any stored row, so it is reported
/// as `entity` not found rather than as a malformed request.
pub fn parse_id(entity: &'static str, raw: &str) -> Result<DbId, CoreError> {
    DbId::parse_str(raw).map_err(|_| CoreError::not_found(entity, raw))
}
