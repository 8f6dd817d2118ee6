use crate::{
    error::{ErrorBody, HrmsError},
    model::attendance::{AttendanceEntry, AttendanceRecord, AttendanceSummary, MarkAttendance},
    service::AttendanceLedger,
};
use actix_web::{HttpResponse, web};

/// Mark attendance
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance recorded", body = AttendanceRecord),
        (status = 400, description = "Unknown employee, invalid date/status, or day already marked", body = ErrorBody, example = json!({
            "detail": "Employee 'EMP999' does not exist"
        })),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    ledger: web::Data<AttendanceLedger>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, HrmsError> {
    let record = ledger
        .mark(&payload.employee_id, &payload.date, &payload.status)
        .await?;
    Ok(HttpResponse::Created().json(record))
}

/// Attendance history of one employee, most recent first
#[utoipa::path(
    get,
    path = "/attendance/{emp_id}",
    params(
        ("emp_id" = String, Path, description = "Employee business ID")
    ),
    responses(
        (status = 200, description = "Attendance entries, empty if none", body = [AttendanceEntry], example = json!([
            { "date": "2024-01-11", "status": "Absent" },
            { "date": "2024-01-10", "status": "Present" }
        ]))
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    ledger: web::Data<AttendanceLedger>,
    path: web::Path<String>,
) -> Result<HttpResponse, HrmsError> {
    let records = ledger.records_for(&path.into_inner()).await?;
    let entries: Vec<AttendanceEntry> = records.iter().map(AttendanceEntry::from).collect();
    Ok(HttpResponse::Ok().json(entries))
}

/// Present/absent totals for one employee
#[utoipa::path(
    get,
    path = "/attendance/{emp_id}/summary",
    params(
        ("emp_id" = String, Path, description = "Employee business ID")
    ),
    responses(
        (status = 200, description = "Attendance totals", body = AttendanceSummary)
    ),
    tag = "Attendance"
)]
pub async fn attendance_summary(
    ledger: web::Data<AttendanceLedger>,
    path: web::Path<String>,
) -> Result<HttpResponse, HrmsError> {
    let summary = ledger.summary(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(summary))
}
