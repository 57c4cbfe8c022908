/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A calendar day (`DATE` column), always interpreted in UTC.
pub type Day = chrono::NaiveDate;

/// A time of day (`TIME` column), always interpreted in UTC.
pub type TimeOfDay = chrono::NaiveTime;
