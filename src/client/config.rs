//! Client-side endpoints for the authentication provider.
//!
//! The web client has no runtime environment, so each endpoint can be overridden at build time
//! through the matching environment variable and otherwise falls back to the routes served by
//! the bundled server.

use crate::model::auth::AuthTrigger;

/// Endpoint returning the current session user, `TRAINIUM_USER_ENDPOINT`
///
/// The bundled server answers it by forwarding the visitor's cookies to the provider.
pub const USER_ENDPOINT: &str = match option_env!("TRAINIUM_USER_ENDPOINT") {
    Some(path) => path,
    None => "/api/auth/user",
};

/// Sign-in trigger target, `TRAINIUM_SIGN_IN_PATH`
pub const SIGN_IN_PATH: &str = match option_env!("TRAINIUM_SIGN_IN_PATH") {
    Some(path) => path,
    None => "/api/auth/login",
};

/// Sign-up trigger target, `TRAINIUM_SIGN_UP_PATH`
pub const SIGN_UP_PATH: &str = match option_env!("TRAINIUM_SIGN_UP_PATH") {
    Some(path) => path,
    None => "/api/auth/signup",
};

/// Sign-out trigger target, `TRAINIUM_SIGN_OUT_PATH`
pub const SIGN_OUT_PATH: &str = match option_env!("TRAINIUM_SIGN_OUT_PATH") {
    Some(path) => path,
    None => "/api/auth/logout",
};

/// Resolve the provider endpoint a trigger links to
pub fn trigger_href(trigger: AuthTrigger) -> &'static str {
    match trigger {
        AuthTrigger::SignIn => SIGN_IN_PATH,
        AuthTrigger::SignUp => SIGN_UP_PATH,
        AuthTrigger::SignOut => SIGN_OUT_PATH,
    }
}
