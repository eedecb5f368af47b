//! Server application modules.
//!
//! The server only hosts the client and forwards the authentication triggers to the hosted
//! authentication provider. Sessions, tokens, and credentials stay with the provider.

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
