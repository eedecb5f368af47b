//! HTTP controller endpoints for the trainium web API.

pub mod auth;
