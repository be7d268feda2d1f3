// Email template operations

use serde_json::{json, Value};

use crate::client::GophishClient;
use crate::error::Result;

impl GophishClient {
    pub async fn list_templates(&self) -> Result<Value> {
        self.get("/api/templates").await
    }

    pub async fn get_template(&self, id: i64) -> Result<Value> {
        self.get(&format!("/api/templates/{id}")).await
    }

    pub async fn create_template(&self, data: &Value) -> Result<Value> {
        self.post("/api/templates/", data).await
    }

    pub async fn update_template(&self, id: i64, mut data: Value) -> Result<Value> {
        if let Some(object) = data.as_object_mut() {
            object.insert("id".to_string(), Value::from(id));
        }
        self.put(&format!("/api/templates/{id}"), &data).await
    }

    pub async fn delete_template(&self, id: i64) -> Result<Value> {
        self.delete(&format!("/api/templates/{id}")).await
    }

    /// Parse a raw RFC 2822 email into subject/text/HTML parts upstream.
    pub async fn import_email(&self, content: &str, convert_links: bool) -> Result<Value> {
        let payload = json!({
            "content": content,
            "convert_links": convert_links,
        });
        self.post("/api/import/email", &payload).await
    }
}
