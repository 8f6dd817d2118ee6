use crate::error::{HrmsError, HrmsResult};
use crate::model::employee::{Employee, NewEmployee};
use crate::service::ledger::AttendanceLedger;
use crate::utils::validation::{is_unique_violation, normalize_emp_id, validate_new_employee};
use sqlx::SqlitePool;
use tracing::{debug, error, info, instrument, warn};

#[derive(Clone)]
pub struct EmployeeDirectory {
    pool: SqlitePool,
}

impl EmployeeDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> HrmsResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, emp_id, full_name, email, department
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list employees");
            e
        })?;

        debug!(count = employees.len(), "Listed employees");
        Ok(employees)
    }

    pub async fn find(&self, emp_id: &str) -> HrmsResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, emp_id, full_name, email, department
            FROM employees
            WHERE emp_id = ?
            "#,
        )
        .bind(normalize_emp_id(emp_id))
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    pub async fn count(&self) -> HrmsResult<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    /// Creates an employee. `emp_id` uniqueness (case-sensitive) is enforced
    /// by the unique index, so concurrent adds of one id yield exactly one row.
    #[instrument(skip(self, new), fields(emp_id = %new.emp_id))]
    pub async fn add(&self, new: NewEmployee) -> HrmsResult<Employee> {
        let new = validate_new_employee(&new)?;

        let result = sqlx::query(
            r#"
            INSERT INTO employees (emp_id, full_name, email, department)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&new.emp_id)
        .bind(&new.full_name)
        .bind(&new.email)
        .bind(&new.department)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => {
                let employee = Employee {
                    id: done.last_insert_rowid(),
                    emp_id: new.emp_id,
                    full_name: new.full_name,
                    email: new.email,
                    department: new.department,
                };
                info!(id = employee.id, "Employee created");
                Ok(employee)
            }
            Err(e) if is_unique_violation(&e) => {
                warn!("Rejected duplicate employee id");
                Err(HrmsError::DuplicateIdentifier(new.emp_id))
            }
            Err(e) => {
                error!(error = %e, "Failed to create employee");
                Err(e.into())
            }
        }
    }

    /// Deletes the employee and every attendance record referencing it in one
    /// transaction. Returns the number of attendance records purged.
    ///
    /// Records are purged before the employee row so the count is not eaten
    /// by the FK cascade. Both statements are writes, so the write lock is
    /// taken by the first one and never upgraded from a read.
    #[instrument(skip(self))]
    pub async fn remove(&self, emp_id: &str) -> HrmsResult<u64> {
        let emp_id = normalize_emp_id(emp_id);
        let mut tx = self.pool.begin().await?;

        let purged = AttendanceLedger::purge_for(&mut *tx, emp_id).await?;

        let deleted = sqlx::query("DELETE FROM employees WHERE emp_id = ?")
            .bind(emp_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete employee");
                e
            })?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Err(HrmsError::NotFound(emp_id.to_string()));
        }

        tx.commit().await?;

        info!(purged, "Employee and attendance records deleted");
        Ok(purged)
    }
}
