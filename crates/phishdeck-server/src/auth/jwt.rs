// JWT session token service
// Decision: HS256 pinned — tokens claiming any other algorithm are rejected
// Decision: All validation failures collapse to one error; callers answer 401
// without telling the client which check failed

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Deserializer, Serialize};

use super::config::JwtConfig;

/// Largest user ID that survives a round-trip through an f64 claim.
const MAX_LOSSLESS_ID: i64 = 1 << 53;

/// Session token validation error
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("session token has expired")]
    Expired,
    #[error("invalid session token: {0}")]
    Invalid(String),
}

/// Claims carried by a session token: the numeric user ID and the expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(deserialize_with = "numeric_user_id")]
    pub id: i64,
    pub exp: i64,
}

/// Deserialize the user ID claim, which travels as a JSON number and may
/// arrive as a float from other token producers. Anything that does not
/// convert losslessly to a non-negative integer is rejected.
fn numeric_user_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(id) = number.as_i64() {
        if id >= 0 {
            return Ok(id);
        }
    } else if let Some(float) = number.as_f64() {
        if float >= 0.0 && float.fract() == 0.0 && float <= MAX_LOSSLESS_ID as f64 {
            return Ok(float as i64);
        }
    }
    Err(serde::de::Error::custom(
        "user id claim is not a non-negative integer",
    ))
}

/// Issues and validates signed session tokens.
#[derive(Clone)]
pub struct JwtService {
    token_lifetime: chrono::Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            token_lifetime: Duration::seconds(config.token_lifetime.as_secs() as i64),
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
        }
    }

    /// Issue a token for the given user, expiring after the configured
    /// lifetime. Failure here means the signing setup is broken, not that
    /// the caller did anything wrong.
    pub fn issue(&self, user_id: i64) -> anyhow::Result<String> {
        let exp = (Utc::now() + self.token_lifetime).timestamp();
        let claims = SessionClaims { id: user_id, exp };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| anyhow::anyhow!("Failed to sign session token: {}", e))
    }

    /// Validate a token and return the embedded user ID.
    pub fn validate(&self, token: &str) -> Result<i64, JwtError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::Invalid(e.to_string()),
            })?;

        Ok(token_data.claims.id)
    }

    /// Configured token lifetime in seconds (reported alongside the token).
    pub fn token_lifetime_secs(&self) -> i64 {
        self.token_lifetime.num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_service() -> JwtService {
        JwtService::new(&JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            token_lifetime: std::time::Duration::from_secs(3600),
        })
    }

    #[test]
    fn test_issue_and_validate_round_trip() {
        let service = test_service();
        let token = service.issue(42).unwrap();
        assert_eq!(service.validate(&token).unwrap(), 42);
    }

    #[test]
    fn test_expired_token_fails() {
        let service = test_service();
        let claims = SessionClaims {
            id: 1,
            exp: (Utc::now() - Duration::hours(2)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret-key-for-testing"),
        )
        .unwrap();

        assert!(matches!(service.validate(&token), Err(JwtError::Expired)));
    }

    #[test]
    fn test_wrong_secret_fails() {
        let issuer = JwtService::new(&JwtConfig {
            secret: "one-secret".to_string(),
            token_lifetime: std::time::Duration::from_secs(3600),
        });
        let verifier = JwtService::new(&JwtConfig {
            secret: "another-secret".to_string(),
            token_lifetime: std::time::Duration::from_secs(3600),
        });

        let token = issuer.issue(7).unwrap();
        assert!(matches!(
            verifier.validate(&token),
            Err(JwtError::Invalid(_))
        ));
    }

    #[test]
    fn test_wrong_algorithm_rejected() {
        let service = test_service();
        let claims = SessionClaims {
            id: 7,
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        };
        // Same secret, different algorithm family member
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(b"test-secret-key-for-testing"),
        )
        .unwrap();

        assert!(matches!(
            service.validate(&token),
            Err(JwtError::Invalid(_))
        ));
    }

    #[test]
    fn test_float_claim_converts_when_lossless() {
        let service = test_service();
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let token = encode(
            &Header::new(Algorithm::HS256),
            &json!({ "id": 7.0, "exp": exp }),
            &EncodingKey::from_secret(b"test-secret-key-for-testing"),
        )
        .unwrap();

        assert_eq!(service.validate(&token).unwrap(), 7);
    }

    #[test]
    fn test_fractional_claim_rejected() {
        let service = test_service();
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let token = encode(
            &Header::new(Algorithm::HS256),
            &json!({ "id": 7.5, "exp": exp }),
            &EncodingKey::from_secret(b"test-secret-key-for-testing"),
        )
        .unwrap();

        assert!(matches!(
            service.validate(&token),
            Err(JwtError::Invalid(_))
        ));
    }

    #[test]
    fn test_negative_claim_rejected() {
        let service = test_service();
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let token = encode(
            &Header::new(Algorithm::HS256),
            &json!({ "id": -3, "exp": exp }),
            &EncodingKey::from_secret(b"test-secret-key-for-testing"),
        )
        .unwrap();

        assert!(matches!(
            service.validate(&token),
            Err(JwtError::Invalid(_))
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = test_service();
        assert!(service.validate("not-a-token").is_err());
    }
}
