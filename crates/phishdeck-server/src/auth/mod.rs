// Authentication: session tokens, the request guard, and the
// register/login endpoints.

pub mod config;
pub mod jwt;
pub mod middleware;
pub mod routes;

pub use config::AuthConfig;
pub use middleware::{AuthState, AuthUser};
pub use routes::routes;
