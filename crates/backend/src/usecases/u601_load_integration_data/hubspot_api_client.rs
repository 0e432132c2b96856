use anyhow::Result;
use async_trait::async_trait;
use contracts::enums::integration_type::IntegrationType;
use contracts::usecases::u601_load_integration_data::{
    Credentials, IntegrationItem, ItemsEnvelope, LoadedData,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{mask_token, require_token, IntegrationError, IntegrationLoader};

/// CRM object types listed for every account
pub const OBJECT_TYPES: [&str; 4] = ["contacts", "companies", "deals", "tickets"];

/// HTTP client for the HubSpot CRM v3 API
pub struct HubspotApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl HubspotApiClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /crm/v3/objects/{object_type}
    pub async fn fetch_objects(
        &self,
        access_token: &str,
        object_type: &str,
    ) -> Result<Vec<HubspotObject>> {
        let url = format!("{}/crm/v3/objects/{}", self.base_url, object_type);
        tracing::debug!("HubSpot request: GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(access_token)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("HubSpot API request failed with status {}: {}", status, body);
        }

        let data: HubspotListResponse = response.json().await?;
        Ok(data.results)
    }
}

#[async_trait]
impl IntegrationLoader for HubspotApiClient {
    fn integration(&self) -> IntegrationType {
        IntegrationType::Hubspot
    }

    async fn load(&self, credentials: &Credentials) -> Result<LoadedData, IntegrationError> {
        let token = require_token(credentials)?;
        tracing::info!("Loading HubSpot items with token {}", mask_token(token));

        let mut items = Vec::new();
        for object_type in OBJECT_TYPES {
            // a failing object type is skipped, the rest still load
            match self.fetch_objects(token, object_type).await {
                Ok(objects) => {
                    tracing::info!("Found {} {}", objects.len(), object_type);
                    items.extend(objects.iter().map(|o| to_item(o, object_type)));
                }
                Err(e) => {
                    tracing::warn!("Error fetching HubSpot {}: {}", object_type, e);
                }
            }
        }

        tracing::info!("Total HubSpot items: {}", items.len());
        let message = format!("Successfully retrieved {} items from HubSpot", items.len());
        Ok(LoadedData::Envelope(ItemsEnvelope::new(items, message)))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HubspotListResponse {
    #[serde(default)]
    pub results: Vec<HubspotObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HubspotObject {
    pub id: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

impl HubspotObject {
    fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

pub fn to_item(object: &HubspotObject, object_type: &str) -> IntegrationItem {
    let name = match object_type {
        "companies" => object
            .property("name")
            .unwrap_or("Unnamed Company")
            .to_string(),
        "contacts" => contact_name(object),
        "deals" => object
            .property("dealname")
            .unwrap_or("Unnamed Deal")
            .to_string(),
        "tickets" => object
            .property("subject")
            .unwrap_or("Unnamed Ticket")
            .to_string(),
        other => format!("Unknown {}", other),
    };

    IntegrationItem::new(format!("{}_{}", object.id, object_type))
        .with_name(name)
        .with_type(object_type)
        .with_times(object.created_at.clone(), object.updated_at.clone())
}

fn contact_name(object: &HubspotObject) -> String {
    let full = format!(
        "{} {}",
        object.property("firstname").unwrap_or_default(),
        object.property("lastname").unwrap_or_default()
    );
    let full = full.trim();
    if !full.is_empty() {
        return full.to_string();
    }
    object
        .property("email")
        .unwrap_or("Unnamed Contact")
        .to_string()
}
