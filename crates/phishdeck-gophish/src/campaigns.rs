// Campaign operations
//
// Paths mirror the GoPhish admin API. Create uses the trailing-slash form;
// the upstream 404s the slashless POST.

use serde_json::Value;

use crate::client::GophishClient;
use crate::error::Result;

impl GophishClient {
    pub async fn list_campaigns(&self) -> Result<Value> {
        self.get("/api/campaigns/").await
    }

    pub async fn get_campaign(&self, id: i64) -> Result<Value> {
        self.get(&format!("/api/campaigns/{id}")).await
    }

    pub async fn create_campaign(&self, data: &Value) -> Result<Value> {
        self.post("/api/campaigns/", data).await
    }

    pub async fn delete_campaign(&self, id: i64) -> Result<Value> {
        self.delete(&format!("/api/campaigns/{id}")).await
    }

    pub async fn campaign_results(&self, id: i64) -> Result<Value> {
        self.get(&format!("/api/campaigns/{id}/results")).await
    }

    pub async fn campaign_summary(&self, id: i64) -> Result<Value> {
        self.get(&format!("/api/campaigns/{id}/summary")).await
    }

    /// Mark a campaign as completed. The upstream models this as a GET.
    pub async fn complete_campaign(&self, id: i64) -> Result<Value> {
        self.get(&format!("/api/campaigns/{id}/complete")).await
    }
}
