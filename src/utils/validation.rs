use crate::error::{HrmsError, HrmsResult};
use crate::model::attendance::AttendanceStatus;
use crate::model::employee::NewEmployee;
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trims `value` and rejects it if nothing is left.
pub fn require_non_empty(field: &str, value: &str) -> HrmsResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HrmsError::InvalidInput(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Business ids are compared after trimming, on every path.
pub fn normalize_emp_id(value: &str) -> &str {
    value.trim()
}

/// Shape check only: `local@domain.tld`, no whitespace.
pub fn validate_email(email: &str) -> HrmsResult<()> {
    let invalid = || HrmsError::InvalidInput("Invalid email address".to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// Normalised copy of an add-employee request, every field trimmed and checked.
pub fn validate_new_employee(new: &NewEmployee) -> HrmsResult<NewEmployee> {
    let validated = NewEmployee {
        emp_id: require_non_empty("emp_id", normalize_emp_id(&new.emp_id))?,
        full_name: require_non_empty("full_name", &new.full_name)?,
        email: require_non_empty("email", &new.email)?,
        department: require_non_empty("department", &new.department)?,
    };
    validate_email(&validated.email)?;
    Ok(validated)
}

pub fn parse_date(value: &str) -> HrmsResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        HrmsError::InvalidInput(format!("Invalid date '{value}', expected YYYY-MM-DD"))
    })
}

pub fn parse_status(value: &str) -> HrmsResult<AttendanceStatus> {
    value.trim().parse().map_err(|_| {
        HrmsError::InvalidInput(format!(
            "Invalid status '{value}', expected Present or Absent"
        ))
    })
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}
