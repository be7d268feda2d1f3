// Settings operations

use serde_json::{json, Value};

use crate::client::GophishClient;
use crate::error::{GophishError, Result};

impl GophishClient {
    /// Rotate the upstream admin API key. Returns the new key from the
    /// `{success, data}` envelope.
    ///
    /// Note: after this call succeeds the key this client was built with is
    /// no longer valid; the process must be restarted with the new key.
    pub async fn reset_api_key(&self) -> Result<String> {
        let response = self.post("/api/reset", &json!({})).await?;
        match response.get("data").and_then(Value::as_str) {
            Some(key) => Ok(key.to_string()),
            None => Err(GophishError::Decode(
                "reset response missing data field".to_string(),
            )),
        }
    }
}
