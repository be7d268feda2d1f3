// Landing page operations

use serde_json::Value;

use crate::client::GophishClient;
use crate::error::Result;

impl GophishClient {
    pub async fn list_pages(&self) -> Result<Value> {
        self.get("/api/pages").await
    }

    pub async fn get_page(&self, id: i64) -> Result<Value> {
        self.get(&format!("/api/pages/{id}")).await
    }

    pub async fn create_page(&self, data: &Value) -> Result<Value> {
        self.post("/api/pages/", data).await
    }

    pub async fn update_page(&self, id: i64, mut data: Value) -> Result<Value> {
        if let Some(object) = data.as_object_mut() {
            object.insert("id".to_string(), Value::from(id));
        }
        self.put(&format!("/api/pages/{id}"), &data).await
    }

    pub async fn delete_page(&self, id: i64) -> Result<Value> {
        self.delete(&format!("/api/pages/{id}")).await
    }

    /// Ask the upstream to fetch a site and return it as landing-page HTML.
    /// The payload is `{url, include_resources}`; the fetch happens upstream.
    pub async fn import_site(&self, data: &Value) -> Result<Value> {
        self.post("/api/import/site", data).await
    }
}
