use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr, ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// One immutable attendance mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "employee_id": "EMP001",
    "date": "2024-01-10",
    "status": "Present"
}))]
pub struct AttendanceRecord {
    pub id: i64,
    /// `emp_id` of the employee this mark belongs to
    #[serde(rename = "employee_id")]
    pub employee_ref: String,
    #[schema(example = "2024-01-10", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl<'r> FromRow<'r, SqliteRow> for AttendanceRecord {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let status: String = row.try_get("status")?;
        Ok(Self {
            id: row.try_get("id")?,
            employee_ref: row.try_get("employee_ref")?,
            date: row.try_get("date")?,
            status: status
                .parse()
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
        })
    }
}

/// Mark-attendance request. Fields stay raw strings so date and status are
/// validated by the ledger with readable messages.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    #[serde(default)]
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[serde(default)]
    #[schema(example = "2024-01-10", format = "date")]
    pub date: String,
    #[serde(default)]
    #[schema(example = "Present")]
    pub status: String,
}

/// Row of the per-employee history view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceEntry {
    #[schema(example = "2024-01-11", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl From<&AttendanceRecord> for AttendanceEntry {
    fn from(record: &AttendanceRecord) -> Self {
        Self {
            date: record.date,
            status: record.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "emp_id": "EMP001", "total": 2, "present": 1, "absent": 1 }))]
pub struct AttendanceSummary {
    pub emp_id: String,
    pub total: usize,
    pub present: usize,
    pub absent: usize,
}
