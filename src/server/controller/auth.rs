//! Hand-off routes to the hosted authentication provider.
//!
//! The client's sign-in, sign-up, and sign-out triggers link here. Each of those routes only
//! redirects to the matching provider page with a return URL on this application; the provider
//! runs the whole flow and owns the resulting session. `get_user` forwards the visitor's
//! cookies to the provider's session endpoint so the client can learn who is signed in.

use axum::{
    extract::{Query, State},
    http::{header::COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{config::Config, error::Error, model::app::AppState},
};

/// OpenAPI tag for the authentication routes
pub static AUTH_TAG: &str = "auth";

/// Query parameters accepted by every hand-off route
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RedirectParams {
    /// Path on this application to return to once the provider is done, defaults to `/`
    pub redirect: Option<String>,
}

/// Pages of the hosted authentication provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderPage {
    /// Provider sign-in page
    SignIn,
    /// Provider sign-up page
    SignUp,
    /// Provider sign-out page
    SignOut,
}

impl ProviderPage {
    fn path(self) -> &'static str {
        match self {
            Self::SignIn => "sign-in",
            Self::SignUp => "sign-up",
            Self::SignOut => "sign-out",
        }
    }
}

/// Build the provider URL for `page`, returning to `redirect` on this application afterwards
///
/// Only absolute paths on this application are accepted as redirect targets.
pub fn provider_redirect_url(
    config: &Config,
    page: ProviderPage,
    redirect: Option<&str>,
) -> Result<String, Error> {
    let return_path = match redirect {
        None => "/",
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        Some(path) => return Err(Error::InvalidRedirect(path.to_string())),
    };

    let return_url = format!("{}{}", config.app_url, return_path);

    Ok(format!(
        "{}/{}?redirect_url={}",
        config.auth_provider_url,
        page.path(),
        urlencoding::encode(&return_url)
    ))
}

fn hand_off(
    state: &AppState,
    page: ProviderPage,
    params: &RedirectParams,
) -> Result<Redirect, Error> {
    let url = provider_redirect_url(&state.config, page, params.redirect.as_deref())?;

    Ok(Redirect::temporary(&url))
}

/// Begin sign-in with the authentication provider
///
/// # Responses
/// - 307 (Temporary Redirect): Redirects to the provider's sign-in page
/// - 400 (Bad Request): The requested redirect is not a path on this application
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    params(RedirectParams),
    responses(
        (status = 307, description = "Redirect to the provider's sign-in page"),
        (status = 400, description = "Invalid redirect target", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Query(params): Query<RedirectParams>,
) -> Result<impl IntoResponse, Error> {
    hand_off(&state, ProviderPage::SignIn, &params)
}

/// Begin sign-up with the authentication provider
///
/// # Responses
/// - 307 (Temporary Redirect): Redirects to the provider's sign-up page
/// - 400 (Bad Request): The requested redirect is not a path on this application
#[utoipa::path(
    get,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    params(RedirectParams),
    responses(
        (status = 307, description = "Redirect to the provider's sign-up page"),
        (status = 400, description = "Invalid redirect target", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Query(params): Query<RedirectParams>,
) -> Result<impl IntoResponse, Error> {
    hand_off(&state, ProviderPage::SignUp, &params)
}

/// Sign out through the authentication provider
///
/// # Responses
/// - 307 (Temporary Redirect): Redirects to the provider's sign-out page
/// - 400 (Bad Request): The requested redirect is not a path on this application
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    params(RedirectParams),
    responses(
        (status = 307, description = "Redirect to the provider's sign-out page"),
        (status = 400, description = "Invalid redirect target", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    Query(params): Query<RedirectParams>,
) -> Result<impl IntoResponse, Error> {
    hand_off(&state, ProviderPage::SignOut, &params)
}

/// Provider endpoint reporting the user behind a session cookie
pub fn provider_session_url(config: &Config) -> String {
    format!("{}/session", config.auth_provider_url)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorDto {
            error: "Not signed in".to_string(),
        }),
    )
        .into_response()
}

/// Get the signed-in user from the authentication provider
///
/// Requests without cookies are answered locally; otherwise the cookies are forwarded to the
/// provider's session endpoint.
///
/// # Responses
/// - 200 (Success): The visitor has an active session
/// - 401 (Unauthorized): No session, or the provider rejected it
/// - 502 (Bad Gateway): The provider could not be reached or answered unexpectedly
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed-in user", body = UserDto),
        (status = 401, description = "No active session", body = ErrorDto),
        (status = 502, description = "Authentication provider unavailable", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    let Some(cookie) = headers.get(COOKIE) else {
        return Ok(unauthorized());
    };

    let resp = state
        .http_client
        .get(provider_session_url(&state.config))
        .header(COOKIE, cookie.clone())
        .send()
        .await?;

    match resp.status() {
        StatusCode::OK => {
            let user: UserDto = resp.json().await?;

            Ok((StatusCode::OK, Json(user)).into_response())
        }
        StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND => Ok(unauthorized()),
        status => Err(Error::ProviderStatus(status.as_u16())),
    }
}
