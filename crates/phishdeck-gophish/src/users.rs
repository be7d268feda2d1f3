// Upstream account operations
//
// These are GoPhish's own admin accounts, distinct from the users this
// backend authenticates locally.

use serde_json::Value;

use crate::client::GophishClient;
use crate::error::Result;

impl GophishClient {
    pub async fn list_users(&self) -> Result<Value> {
        self.get("/api/users/").await
    }

    pub async fn get_user(&self, id: i64) -> Result<Value> {
        self.get(&format!("/api/users/{id}")).await
    }

    pub async fn create_user(&self, data: &Value) -> Result<Value> {
        self.post("/api/users/", data).await
    }

    pub async fn update_user(&self, id: i64, data: &Value) -> Result<Value> {
        self.put(&format!("/api/users/{id}"), data).await
    }
}
