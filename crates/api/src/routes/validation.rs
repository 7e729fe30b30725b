//! Route definitions for the `/validation` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::validation;
use crate::state::AppState;

/// Routes mounted at `/validation`.
///
/// ```text
/// GET    /roles                      -> list_roles
/// GET    /contexts/{context}/fields  -> list_context_fields
/// POST   /field                      -> validate_field
/// POST   /record                     -> validate_record
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/roles", get(validation::list_roles))
        .route(
            "/contexts/{context}/fields",
            get(validation::list_context_fields),
        )
        .route("/field", post(validation::validate_field))
        .route("/record", post(validation::validate_record))
}
