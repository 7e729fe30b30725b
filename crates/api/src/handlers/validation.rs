//! Handlers for the `/validation` resource.
//!
//! Field errors are advisory: a request that names a valid form always gets
//! HTTP 200, with the per-field messages in the body.

use axum::extract::{Path, State};
use axum::Json;
use harvest_core::roles::EmployeeRole;
use harvest_core::validation::{FieldName, FormContext, ValidationResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Outcome of validating a field or record.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: ValidationResult,
}

impl From<ValidationResult> for ValidationReport {
    fn from(errors: ValidationResult) -> Self {
        Self {
            is_valid: errors.is_valid(),
            errors,
        }
    }
}

/// Fields submitted by one form.
#[derive(Debug, Serialize)]
pub struct ContextFields {
    pub context: FormContext,
    pub fields: &'static [FieldName],
}

/// GET /api/v1/validation/roles
///
/// Role labels for the employee form dropdown.
pub async fn list_roles() -> Json<DataResponse<Vec<&'static str>>> {
    let roles = EmployeeRole::ALL.iter().map(|r| r.label()).collect();
    Json(DataResponse { data: roles })
}

/// GET /api/v1/validation/contexts/{context}/fields
pub async fn list_context_fields(
    Path(context): Path<String>,
) -> AppResult<Json<DataResponse<ContextFields>>> {
    let context: FormContext = context.parse()?;
    Ok(Json(DataResponse {
        data: ContextFields {
            context,
            fields: context.fields(),
        },
    }))
}

/// Request body for single-field validation.
#[derive(Debug, Deserialize, Validate)]
pub struct ValidateFieldRequest {
    #[validate(length(min = 1, max = 64))]
    pub field: String,
    #[serde(default)]
    pub value: Value,
    /// Form the field belongs to (default: `farmer_profile`).
    pub context: Option<String>,
}

/// POST /api/v1/validation/field
///
/// Validate one field as the user edits it. Unknown field names pass.
pub async fn validate_field(
    State(state): State<AppState>,
    Json(body): Json<ValidateFieldRequest>,
) -> AppResult<Json<DataResponse<ValidationReport>>> {
    body.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let context = match body.context.as_deref() {
        Some(name) => name.parse::<FormContext>()?,
        None => FormContext::FarmerProfile,
    };

    let result = state
        .validator(context)
        .validate_named(&body.field, &body.value);

    Ok(Json(DataResponse {
        data: result.into(),
    }))
}

/// Request body for whole-record validation.
#[derive(Debug, Deserialize, Validate)]
pub struct ValidateRecordRequest {
    #[validate(length(min = 1, max = 64))]
    pub context: String,
    pub record: Map<String, Value>,
}

/// POST /api/v1/validation/record
///
/// Validate a form before submission. Every field of the form is checked,
/// including ones missing from the record.
pub async fn validate_record(
    State(state): State<AppState>,
    Json(body): Json<ValidateRecordRequest>,
) -> AppResult<Json<DataResponse<ValidationReport>>> {
    body.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let context: FormContext = body.context.parse()?;
    let result = state.validator(context).validate_record(&body.record);

    tracing::info!(
        %context,
        is_valid = result.is_valid(),
        invalid_fields = result.len(),
        "Validated record"
    );

    Ok(Json(DataResponse {
        data: result.into(),
    }))
}
