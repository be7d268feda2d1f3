// Sending profile operations (the upstream calls these "smtp")

use serde_json::Value;

use crate::client::GophishClient;
use crate::error::Result;

impl GophishClient {
    pub async fn list_profiles(&self) -> Result<Value> {
        self.get("/api/smtp").await
    }

    pub async fn get_profile(&self, id: i64) -> Result<Value> {
        self.get(&format!("/api/smtp/{id}")).await
    }

    pub async fn create_profile(&self, data: &Value) -> Result<Value> {
        self.post("/api/smtp/", data).await
    }

    pub async fn update_profile(&self, id: i64, mut data: Value) -> Result<Value> {
        if let Some(object) = data.as_object_mut() {
            object.insert("id".to_string(), Value::from(id));
        }
        self.put(&format!("/api/smtp/{id}"), &data).await
    }
}
