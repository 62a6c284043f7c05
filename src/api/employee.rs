use actix_web::{HttpResponse, web};
use validator::Validate;

use crate::{
    error::ApiError,
    models::{ApiResponse, CreateEmployee, UpdateEmployee},
    service::employee::EmployeeService,
};

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created successfully", body = Object, example = json!({
            "success": true,
            "data": {
                "id": 1,
                "fullName": "Jane Doe",
                "email": "jane@x.com",
                "dateOfBirth": null,
                "gender": null,
                "phoneNumber": "1234567890",
                "active": true,
                "createdAt": "2026-01-01T09:00:00Z",
                "updatedAt": "2026-01-01T09:00:00Z"
            },
            "message": "Employee created successfully"
        })),
        (status = 400, description = "Validation failed", body = Object, example = json!({
            "success": false,
            "data": { "phoneNumber": ["Phone number must be exactly 10 digits"] },
            "message": "Validation failed"
        })),
        (status = 409, description = "Email already in use", body = Object, example = json!({
            "success": false,
            "data": null,
            "message": "Employee with email jane@x.com already exists"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    service: web::Data<EmployeeService>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    payload.validate()?;

    let created = service.create(payload).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(created, "Employee created successfully")))
}

#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "Every employee", body = Object, example = json!({
            "success": true,
            "data": [],
            "message": "Success"
        }))
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, ApiError> {
    let employees = service.find_all().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(employees, "Success")))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Object),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "success": false,
            "data": null,
            "message": "Employee not found with id: 1"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let employee = service.find_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(employee, "Success")))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated successfully", body = Object),
        (status = 400, description = "Validation failed", body = Object),
        (status = 404, description = "Employee not found", body = Object)
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<u64>,
    payload: web::Json<UpdateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    payload.validate()?;

    let updated = service.update(path.into_inner(), payload).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "Employee updated successfully")))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "success": true,
            "data": null,
            "message": "Employee deleted successfully"
        })),
        (status = 404, description = "Employee not found", body = Object)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    service.delete(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::empty("Employee deleted successfully")))
}
