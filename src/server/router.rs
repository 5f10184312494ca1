use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

#[derive(OpenApi)]
#[openapi(info(
    title = "Collections API",
    description = "CRUD endpoints for composers, persons, customers, teams and users"
))]
struct ApiDoc;

/// Builds the application router.
///
/// Registers every API route, serves the generated OpenAPI document at
/// `/api-docs/openapi.json` with Swagger UI at `/api-docs`, and wraps everything in
/// request tracing and a permissive CORS policy.
pub fn router() -> Router<AppState> {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(controller::composer::routes())
        .merge(controller::person::routes())
        .merge(controller::team::routes())
        .merge(controller::customer::routes())
        .merge(controller::session::routes())
        .split_for_parts();

    api_router
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
