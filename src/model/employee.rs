use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "emp_id": "EMP001",
        "full_name": "Ann Lee",
        "email": "ann@co.com",
        "department": "Eng"
    })
)]
pub struct Employee {
    /// Surrogate key assigned by the directory
    #[schema(example = 1)]
    pub id: i64,

    /// Caller-supplied business identifier, unique and immutable
    #[schema(example = "EMP001")]
    pub emp_id: String,

    #[schema(example = "Ann Lee")]
    pub full_name: String,

    #[schema(example = "ann@co.com")]
    pub email: String,

    #[schema(example = "Eng")]
    pub department: String,
}

/// Add-employee request. Missing fields deserialize as empty strings so they
/// are reported by the directory's own validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct NewEmployee {
    #[serde(default)]
    #[schema(example = "EMP001")]
    pub emp_id: String,
    #[serde(default)]
    #[schema(example = "Ann Lee")]
    pub full_name: String,
    #[serde(default)]
    #[schema(example = "ann@co.com", format = "email")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "Eng")]
    pub department: String,
}

impl NewEmployee {
    pub fn new(
        emp_id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            emp_id: emp_id.into(),
            full_name: full_name.into(),
            email: email.into(),
            department: department.into(),
        }
    }
}
