// HTTP API routes
//
// One submodule per upstream resource. Every handler requires an
// authenticated user and forwards the request to the GoPhish client,
// passing JSON payloads through untouched.

pub mod campaigns;
pub mod common;
pub mod groups;
pub mod pages;
pub mod profiles;
pub mod settings;
pub mod templates;
pub mod users;

use std::sync::Arc;

use phishdeck_gophish::GophishClient;

use crate::auth::middleware::{AuthState, FromRef};

/// State shared by the proxy routes
#[derive(Clone)]
pub struct ProxyState {
    pub gophish: Arc<GophishClient>,
    pub auth: AuthState,
}

impl FromRef<ProxyState> for AuthState {
    fn from_ref(input: &ProxyState) -> Self {
        input.auth.clone()
    }
}
