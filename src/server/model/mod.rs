//! Server application state.

pub mod app;
