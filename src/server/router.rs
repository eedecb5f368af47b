//! HTTP routing and OpenAPI documentation configuration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the API router with the authentication routes and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /api/auth/login` - Redirect to the provider's sign-in page
/// - `GET /api/auth/signup` - Redirect to the provider's sign-up page
/// - `GET /api/auth/logout` - Redirect to the provider's sign-out page
/// - `GET /api/auth/user` - Signed-in user reported by the provider
///
/// Interactive documentation is served at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "trainium", description = "trainium API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication provider routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::signup))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
