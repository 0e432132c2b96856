use anyhow::Result;
use async_trait::async_trait;
use contracts::enums::integration_type::IntegrationType;
use contracts::usecases::u601_load_integration_data::{Credentials, IntegrationItem, LoadedData};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{mask_token, require_token, IntegrationError, IntegrationLoader};

/// HTTP client for the Airtable metadata API
pub struct AirtableApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl AirtableApiClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /v0/meta/bases
    pub async fn list_bases(&self, access_token: &str) -> Result<Vec<AirtableBase>> {
        let url = format!("{}/v0/meta/bases", self.base_url);
        let data: AirtableBasesResponse = self.get_json(&url, access_token).await?;
        Ok(data.bases)
    }

    /// GET /v0/meta/bases/{base_id}/tables
    pub async fn list_tables(&self, access_token: &str, base_id: &str) -> Result<Vec<AirtableTable>> {
        let url = format!("{}/v0/meta/bases/{}/tables", self.base_url, base_id);
        let data: AirtableTablesResponse = self.get_json(&url, access_token).await?;
        Ok(data.tables)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, access_token: &str) -> Result<T> {
        tracing::debug!("Airtable request: GET {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Airtable API request failed with status {}: {}", status, body);
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl IntegrationLoader for AirtableApiClient {
    fn integration(&self) -> IntegrationType {
        IntegrationType::Airtable
    }

    async fn load(&self, credentials: &Credentials) -> Result<LoadedData, IntegrationError> {
        let token = require_token(credentials)?;
        tracing::info!("Loading Airtable items with token {}", mask_token(token));

        let bases = self
            .list_bases(token)
            .await
            .map_err(|e| IntegrationError::upstream(IntegrationType::Airtable, e))?;

        let mut items = Vec::new();
        for base in &bases {
            items.push(base_item(base));
            // tables of a base we cannot read are left out
            match self.list_tables(token, &base.id).await {
                Ok(tables) => items.extend(tables.iter().map(|t| table_item(base, t))),
                Err(e) => tracing::warn!("Error fetching tables of base {}: {}", base.id, e),
            }
        }

        tracing::info!("Total Airtable items: {}", items.len());
        Ok(LoadedData::Bare(items))
    }
}

#[derive(Debug, Deserialize)]
struct AirtableBasesResponse {
    #[serde(default)]
    bases: Vec<AirtableBase>,
}

#[derive(Debug, Deserialize)]
struct AirtableTablesResponse {
    #[serde(default)]
    tables: Vec<AirtableTable>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirtableBase {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirtableTable {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

pub fn base_item(base: &AirtableBase) -> IntegrationItem {
    IntegrationItem::new(&base.id)
        .with_name(&base.name)
        .with_type("Base")
}

pub fn table_item(base: &AirtableBase, table: &AirtableTable) -> IntegrationItem {
    IntegrationItem::new(format!("{}/{}", base.id, table.id))
        .with_name(&table.name)
        .with_type("Table")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u601_load_integration_data::test_support::spawn_upstream;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_bases_and_tables() {
        async fn bases() -> Json<Value> {
            Json(json!({"bases": [
                {"id": "app1", "name": "CRM", "permissionLevel": "create"},
                {"id": "app2", "name": "Locked", "permissionLevel": "read"}
            ]}))
        }
        async fn tables(Path(base_id): Path<String>) -> Result<Json<Value>, StatusCode> {
            match base_id.as_str() {
                "app1" => Ok(Json(json!({"tables": [{"id": "tbl1", "name": "Leads"}]}))),
                _ => Err(StatusCode::FORBIDDEN),
            }
        }

        let router = Router::new()
            .route("/v0/meta/bases", get(bases))
            .route("/v0/meta/bases/:base_id/tables", get(tables));
        let base = spawn_upstream(router).await;
        let client = AirtableApiClient::new(reqwest::Client::new(), &base);

        let creds = Credentials::new(json!({"access_token": "pat"}));
        let LoadedData::Bare(items) = client.load(&creds).await.unwrap() else {
            panic!("expected bare array");
        };

        let titles: Vec<String> = items.iter().map(|i| i.display_title()).collect();
        assert_eq!(titles, vec!["CRM (Base)", "Leads (Table)", "Locked (Base)"]);
        assert_eq!(items[1].id, "app1/tbl1");
        assert!(items.iter().all(|i| i.creation_time.is_none()));
    }

    #[tokio::test]
    async fn test_bases_failure_is_upstream_error() {
        let base = spawn_upstream(Router::new()).await;
        let client = AirtableApiClient::new(reqwest::Client::new(), &base);
        let creds = Credentials::new(json!({"access_token": "pat"}));

        let err = client.load(&creds).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
