// GoPhish API client
//
// This crate wraps the GoPhish admin REST API behind a typed client.
// Responses pass through as untyped JSON; only the handful of error
// messages the upstream is known to emit get classified into error kinds.

mod campaigns;
mod client;
mod error;
mod groups;
mod pages;
mod profiles;
mod settings;
mod templates;
mod users;

pub use client::GophishClient;
pub use error::{GophishError, Result};
