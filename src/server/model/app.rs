use std::sync::Arc;

use crate::server::config::Config;

/// State shared by all server routes
#[derive(Clone)]
pub struct AppState {
    /// Loaded server configuration
    pub config: Arc<Config>,
    /// Client used to check sessions with the authentication provider
    pub http_client: reqwest::Client,
}
