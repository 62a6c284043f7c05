use crate::model::employee::Gender;
use crate::models::{CreateEmployee, EmployeeResponse, UpdateEmployee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Service API",
        version = "1.0.0",
        description = r#"
## Employee Records

Create, list, view, update and delete employee records.

### Rules
- **Email** is unique across all employees and cannot be changed after creation
- **Passwords** are stored as argon2 hashes and never returned
- **Updates** replace the mutable fields; omit `password` (or send it empty) to keep the current one

### Response Format
Every response, success or failure, uses the same envelope:

```json
{ "success": true, "data": { }, "message": "Success" }
```

Validation failures return `400` with per-field messages in `data`,
unknown ids return `404`, and a taken email returns `409`.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee
    ),
    components(
        schemas(
            CreateEmployee,
            UpdateEmployee,
            EmployeeResponse,
            Gender
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
    )
)]
pub struct ApiDoc;
