// Upstream error classification
//
// GoPhish signals failures with a JSON envelope {"message": "..."} and a
// small fixed set of message strings. Classification is a lookup from those
// known strings to error kinds; anything unrecognized stays opaque so the
// caller can surface the raw body.

use serde::Deserialize;

pub type Result<T> = std::result::Result<T, GophishError>;

/// Error returned by GoPhish API calls.
#[derive(Debug, thiserror::Error)]
pub enum GophishError {
    /// The addressed resource does not exist upstream.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The upstream rejected a create/update because the identity is taken.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Unclassified non-2xx response. Body is the raw upstream payload.
    #[error("upstream error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// The request never produced a response (connect, timeout, TLS).
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response that did not decode as JSON.
    #[error("failed to decode upstream response: {0}")]
    Decode(String),

    /// A required environment value is missing. Fatal at boot.
    #[error("{0}")]
    Config(&'static str),
}

/// Known `message` strings and the error kind each maps to.
/// Fallback for anything not listed is `Api` with the raw body.
const NOT_FOUND_MESSAGES: &[(&str, &str)] = &[
    ("Campaign not found", "campaign"),
    ("Group not found", "group"),
    ("Page not found", "page"),
    ("Template not found", "template"),
    ("SMTP not found", "profile"),
    ("User not found", "user"),
];

const CONFLICT_MESSAGES: &[&str] = &["Username already taken"];

#[derive(Deserialize)]
struct ErrorEnvelope {
    message: String,
}

/// Classify a non-2xx upstream response body.
pub(crate) fn classify(status: u16, body: String) -> GophishError {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&body) {
        for (message, resource) in NOT_FOUND_MESSAGES {
            if envelope.message == *message {
                return GophishError::NotFound(resource);
            }
        }
        for message in CONFLICT_MESSAGES {
            if envelope.message == *message {
                return GophishError::Conflict(envelope.message);
            }
        }
    }
    GophishError::Api { status, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found_messages() {
        for (message, resource) in NOT_FOUND_MESSAGES {
            let body = format!(r#"{{"message":"{message}","success":false}}"#);
            match classify(404, body) {
                GophishError::NotFound(r) => assert_eq!(r, *resource),
                other => panic!("expected NotFound for {message:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_classify_username_taken() {
        let body = r#"{"message":"Username already taken"}"#.to_string();
        match classify(400, body) {
            GophishError::Conflict(msg) => assert_eq!(msg, "Username already taken"),
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_unknown_message_falls_back() {
        let body = r#"{"message":"Something else went wrong"}"#.to_string();
        match classify(500, body.clone()) {
            GophishError::Api { status, body: b } => {
                assert_eq!(status, 500);
                assert_eq!(b, body);
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_non_json_body_falls_back() {
        let body = "<html>bad gateway</html>".to_string();
        match classify(502, body.clone()) {
            GophishError::Api { status, body: b } => {
                assert_eq!(status, 502);
                assert_eq!(b, body);
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_requires_exact_message() {
        // Substrings of known messages must not classify
        let body = r#"{"message":"Campaign not found in cache layer"}"#.to_string();
        assert!(matches!(classify(404, body), GophishError::Api { .. }));
    }
}
