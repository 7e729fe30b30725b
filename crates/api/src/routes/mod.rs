pub mod health;
pub mod validation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /validation/roles                        selectable job roles (GET)
/// /validation/contexts/{context}/fields    fields of a form (GET)
/// /validation/field                        validate one field (POST)
/// /validation/record                       validate a whole form (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/validation", validation::router())
}
