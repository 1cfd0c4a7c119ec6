use axum::Json;

use crate::templates::{catalogue, TemplateCatalogue};

/// GET /api/v1/templates
/// Resume styles, portfolio layouts and the design presets, for pickers.
pub async fn templates_handler() -> Json<TemplateCatalogue> {
    Json(catalogue())
}
