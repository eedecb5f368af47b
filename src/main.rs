#![allow(non_snake_case)]

use trainium::client;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use std::sync::Arc;

        use dioxus_logger::tracing;
        use trainium::server::{config::Config, model::app::AppState, router::routes};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        tracing::info!(
            auth_provider = %config.auth_provider_url,
            app_url = %config.app_url,
            "Starting server"
        );

        let mut router = dioxus::server::router(client::App);
        let server_routes = routes().with_state(AppState {
            config: Arc::new(config),
            http_client: reqwest::Client::new(),
        });
        router = router.merge(server_routes);

        Ok(router)
    })
}
