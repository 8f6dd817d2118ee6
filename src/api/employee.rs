use crate::{
    error::{ErrorBody, HrmsError},
    model::employee::{Employee, NewEmployee},
    service::EmployeeDirectory,
};
use actix_web::{HttpResponse, web};
use serde_json::json;

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees", body = [Employee]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    directory: web::Data<EmployeeDirectory>,
) -> Result<HttpResponse, HrmsError> {
    let employees = directory.list().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Duplicate employee ID or invalid input", body = ErrorBody, example = json!({
            "detail": "Employee ID 'EMP001' already exists"
        })),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn add_employee(
    directory: web::Data<EmployeeDirectory>,
    payload: web::Json<NewEmployee>,
) -> Result<HttpResponse, HrmsError> {
    let employee = directory.add(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(employee))
}

/// Get Employee by business ID
#[utoipa::path(
    get,
    path = "/employees/{emp_id}",
    params(
        ("emp_id" = String, Path, description = "Employee business ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = ErrorBody, example = json!({
            "detail": "Employee 'EMP001' not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    directory: web::Data<EmployeeDirectory>,
    path: web::Path<String>,
) -> Result<HttpResponse, HrmsError> {
    let emp_id = path.into_inner();

    match directory.find(&emp_id).await? {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Err(HrmsError::NotFound(emp_id)),
    }
}

/// Delete Employee together with its attendance records
#[utoipa::path(
    delete,
    path = "/employees/{emp_id}",
    params(
        ("emp_id" = String, Path, description = "Employee business ID")
    ),
    responses(
        (status = 200, description = "Employee and records deleted", body = Object, example = json!({
            "message": "Employee and records deleted"
        })),
        (status = 404, description = "Employee not found", body = ErrorBody, example = json!({
            "detail": "Employee 'EMP001' not found"
        })),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    directory: web::Data<EmployeeDirectory>,
    path: web::Path<String>,
) -> Result<HttpResponse, HrmsError> {
    let emp_id = path.into_inner();

    let purged = directory.remove(&emp_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee and records deleted",
        "attendance_records_deleted": purged
    })))
}
