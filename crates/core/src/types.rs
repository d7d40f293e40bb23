/// Primary-key type shared by every table (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// UTC timestamp, as stored in the schema's TIMESTAMPTZ columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
