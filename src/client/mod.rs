pub mod app;
pub mod components;
pub mod config;
pub mod dismiss;
pub mod hooks;
pub mod menu;
pub mod nav;
pub mod router;
pub mod routes;
pub mod store;
pub mod util;

pub use app::App;
