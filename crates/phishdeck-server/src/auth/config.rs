// Authentication configuration loaded from environment variables.
// Decision: The signing secret is required — the process refuses to boot
// without it rather than falling back to a generated dev secret.

use std::time::Duration;

use anyhow::{Context, Result};

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing session tokens
    pub secret: String,
    /// Session token lifetime
    pub token_lifetime: Duration,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            token_lifetime: Duration::from_secs(24 * 60 * 60), // 24 hours
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let secret = std::env::var("JWT_SECRET_KEY")
            .context("JWT_SECRET_KEY environment variable required")?;

        let token_lifetime = std::env::var("AUTH_TOKEN_LIFETIME")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| JwtConfig::default().token_lifetime);

        Ok(Self {
            jwt: JwtConfig {
                secret,
                token_lifetime,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lifetime_is_24_hours() {
        let config = JwtConfig::default();
        assert_eq!(config.token_lifetime, Duration::from_secs(86_400));
    }
}
