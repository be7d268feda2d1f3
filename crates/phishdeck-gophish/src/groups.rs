// Target group operations

use serde_json::Value;

use crate::client::GophishClient;
use crate::error::Result;

impl GophishClient {
    pub async fn list_groups(&self) -> Result<Value> {
        self.get("/api/groups").await
    }

    pub async fn get_group(&self, id: i64) -> Result<Value> {
        self.get(&format!("/api/groups/{id}")).await
    }

    pub async fn groups_summary(&self) -> Result<Value> {
        self.get("/api/groups/summary").await
    }

    pub async fn group_summary(&self, id: i64) -> Result<Value> {
        self.get(&format!("/api/groups/{id}/summary")).await
    }

    pub async fn create_group(&self, data: &Value) -> Result<Value> {
        self.post("/api/groups/", data).await
    }

    /// The upstream requires the ID inside the body to match the path.
    pub async fn update_group(&self, id: i64, mut data: Value) -> Result<Value> {
        if let Some(object) = data.as_object_mut() {
            object.insert("id".to_string(), Value::from(id));
        }
        self.put(&format!("/api/groups/{id}"), &data).await
    }

    pub async fn delete_group(&self, id: i64) -> Result<Value> {
        self.delete(&format!("/api/groups/{id}")).await
    }

    /// Forward a CSV of targets to the upstream import endpoint. The
    /// upstream parses the file and returns the extracted target list.
    pub async fn import_group_csv(&self, file_name: String, data: Vec<u8>) -> Result<Value> {
        let part = reqwest::multipart::Part::bytes(data).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);
        self.post_multipart("/api/import/group", form).await
    }
}
