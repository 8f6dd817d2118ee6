use crate::error::{HrmsError, HrmsResult};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus, AttendanceSummary};
use crate::utils::validation::{
    is_foreign_key_violation, is_unique_violation, normalize_emp_id, parse_date, parse_status,
    require_non_empty,
};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, error, info, instrument, warn};

#[derive(Clone)]
pub struct AttendanceLedger {
    pool: SqlitePool,
}

impl AttendanceLedger {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Records one day's status for an existing employee.
    ///
    /// Membership test and insert are a single statement, so the write lock
    /// is taken (waiting on the busy timeout) before anything is read. An
    /// employee may be marked at most once per date.
    #[instrument(skip(self))]
    pub async fn mark(
        &self,
        employee_ref: &str,
        date: &str,
        status: &str,
    ) -> HrmsResult<AttendanceRecord> {
        let employee_ref = require_non_empty("employee_id", normalize_emp_id(employee_ref))?;
        let date = parse_date(date)?;
        let status = parse_status(status)?;

        let result = sqlx::query(
            r#"
            INSERT INTO attendance_records (employee_ref, date, status)
            SELECT ?, ?, ?
            WHERE EXISTS (SELECT 1 FROM employees WHERE emp_id = ?)
            "#,
        )
        .bind(&employee_ref)
        .bind(date)
        .bind(status.as_ref())
        .bind(&employee_ref)
        .execute(&self.pool)
        .await;

        let id = match result {
            Ok(done) if done.rows_affected() == 0 => {
                warn!("Attendance mark for unknown employee");
                return Err(HrmsError::UnknownEmployee(employee_ref));
            }
            Ok(done) => done.last_insert_rowid(),
            Err(e) if is_unique_violation(&e) => {
                warn!("Attendance already marked for this day");
                return Err(HrmsError::AttendanceAlreadyMarked {
                    emp_id: employee_ref,
                    date,
                });
            }
            Err(e) if is_foreign_key_violation(&e) => {
                return Err(HrmsError::UnknownEmployee(employee_ref));
            }
            Err(e) => {
                error!(error = %e, "Failed to mark attendance");
                return Err(e.into());
            }
        };

        info!(id, "Attendance marked");
        Ok(AttendanceRecord {
            id,
            employee_ref,
            date,
            status,
        })
    }

    /// All records of one employee, most recent date first. Unknown employees
    /// simply have no records.
    pub async fn records_for(&self, employee_ref: &str) -> HrmsResult<Vec<AttendanceRecord>> {
        let employee_ref = normalize_emp_id(employee_ref);
        let records = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            SELECT id, employee_ref, date, status
            FROM attendance_records
            WHERE employee_ref = ?
            ORDER BY date DESC, id DESC
            "#,
        )
        .bind(employee_ref)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, employee_ref, "Failed to fetch attendance");
            e
        })?;

        debug!(employee_ref, count = records.len(), "Fetched attendance");
        Ok(records)
    }

    pub async fn summary(&self, employee_ref: &str) -> HrmsResult<AttendanceSummary> {
        let employee_ref = normalize_emp_id(employee_ref);
        let records = self.records_for(employee_ref).await?;
        Ok(AttendanceSummary {
            emp_id: employee_ref.to_string(),
            total: records.len(),
            present: Self::present_count(&records),
            absent: Self::absent_count(&records),
        })
    }

    pub async fn count(&self) -> HrmsResult<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance_records")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    /// Removes every record of `employee_ref`. Only the directory's delete
    /// path calls this, on its own transaction.
    pub(crate) async fn purge_for(
        conn: &mut SqliteConnection,
        employee_ref: &str,
    ) -> HrmsResult<u64> {
        let removed = sqlx::query("DELETE FROM attendance_records WHERE employee_ref = ?")
            .bind(employee_ref)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        debug!(employee_ref, removed, "Purged attendance");
        Ok(removed)
    }

    pub fn present_count(records: &[AttendanceRecord]) -> usize {
        records
            .iter()
            .filter(|r| r.status == AttendanceStatus::Present)
            .count()
    }

    pub fn absent_count(records: &[AttendanceRecord]) -> usize {
        records.len() - Self::present_count(records)
    }
}
