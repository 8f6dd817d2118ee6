use crate::error::ErrorBody;
use crate::model::attendance::{
    AttendanceEntry, AttendanceRecord, AttendanceStatus, AttendanceSummary, MarkAttendance,
};
use crate::model::employee::{Employee, NewEmployee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

Keeps an **employee directory** and a **daily attendance ledger**.

### Key Features
- **Employees**
  - Add, list, look up and delete employees by their business ID (`emp_id`)
  - Deleting an employee removes all of their attendance records
- **Attendance**
  - Mark one day as `Present` or `Absent` (once per employee per day)
  - History per employee, most recent first, plus present/absent totals

### Errors
Every 4xx/5xx response carries `{ "detail": "<message>" }`.

---
Built with **Rust**, **Actix Web**, **SQLx** and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::add_employee,
        crate::api::employee::get_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::get_attendance,
        crate::api::attendance::attendance_summary
    ),
    components(
        schemas(
            Employee,
            NewEmployee,
            AttendanceRecord,
            AttendanceStatus,
            AttendanceEntry,
            AttendanceSummary,
            MarkAttendance,
            ErrorBody
        )
    ),
    tags(
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Attendance", description = "Attendance ledger APIs"),
    )
)]
pub struct ApiDoc;
