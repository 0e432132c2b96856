use anyhow::Result;
use async_trait::async_trait;
use contracts::enums::integration_type::IntegrationType;
use contracts::usecases::u601_load_integration_data::{Credentials, IntegrationItem, LoadedData};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{mask_token, require_token, IntegrationError, IntegrationLoader};

/// HTTP client for the Notion search API
pub struct NotionApiClient {
    client: reqwest::Client,
    base_url: String,
    notion_version: String,
}

impl NotionApiClient {
    pub fn new(client: reqwest::Client, base_url: &str, notion_version: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            notion_version: notion_version.to_string(),
        }
    }

    /// POST /v1/search: every page and database shared with the integration
    pub async fn search(&self, access_token: &str) -> Result<Vec<Value>> {
        let url = format!("{}/v1/search", self.base_url);
        tracing::debug!("Notion request: POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(access_token)
            .header("Notion-Version", &self.notion_version)
            .json(&json!({ "page_size": 100 }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Notion API request failed with status {}: {}", status, body);
        }

        let data: NotionSearchResponse = response.json().await?;
        Ok(data.results)
    }
}

#[async_trait]
impl IntegrationLoader for NotionApiClient {
    fn integration(&self) -> IntegrationType {
        IntegrationType::Notion
    }

    async fn load(&self, credentials: &Credentials) -> Result<LoadedData, IntegrationError> {
        let token = require_token(credentials)?;
        tracing::info!("Loading Notion items with token {}", mask_token(token));

        let results = self
            .search(token)
            .await
            .map_err(|e| IntegrationError::upstream(IntegrationType::Notion, e))?;

        let items: Vec<IntegrationItem> = results.iter().filter_map(to_item).collect();
        tracing::info!("Total Notion items: {}", items.len());
        Ok(LoadedData::Bare(items))
    }
}

#[derive(Debug, Deserialize)]
struct NotionSearchResponse {
    #[serde(default)]
    results: Vec<Value>,
}

/// Map a page or database object; objects without an id are dropped
pub fn to_item(object: &Value) -> Option<IntegrationItem> {
    let id = object.get("id")?.as_str()?;
    let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);

    let mut item = IntegrationItem::new(id)
        .with_times(text("created_time"), text("last_edited_time"));
    item.item_type = text("object");
    item.name = title_of(object);
    Some(item)
}

/// Databases carry a top-level `title`; pages keep it in their title property
fn title_of(object: &Value) -> Option<String> {
    let rich_text = match object.get("title") {
        Some(title) => title,
        None => object
            .get("properties")?
            .as_object()?
            .values()
            .find(|p| p.get("type").and_then(Value::as_str) == Some("title"))?
            .get("title")?,
    };

    let joined: String = rich_text
        .as_array()?
        .iter()
        .filter_map(|part| part.get("plain_text").and_then(Value::as_str))
        .collect();
    Some(joined).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u601_load_integration_data::test_support::spawn_upstream;
    use axum::http::HeaderMap;
    use axum::routing::post;
    use axum::{Json, Router};

    #[test]
    fn test_page_title_from_properties() {
        let page = json!({
            "object": "page",
            "id": "p1",
            "created_time": "2024-03-15T14:02:00.000Z",
            "last_edited_time": "2024-03-16T09:00:00.000Z",
            "properties": {
                "Status": {"type": "select", "select": null},
                "Name": {"type": "title", "title": [
                    {"plain_text": "Road"}, {"plain_text": "map"}
                ]}
            }
        });
        let item = to_item(&page).unwrap();
        assert_eq!(item.id, "p1");
        assert_eq!(item.name.as_deref(), Some("Roadmap"));
        assert_eq!(item.item_type.as_deref(), Some("page"));
        assert_eq!(item.last_modified_time.as_deref(), Some("2024-03-16T09:00:00.000Z"));
    }

    #[test]
    fn test_database_title_and_untitled() {
        let db = json!({"object": "database", "id": "d1", "title": [{"plain_text": "Tasks"}]});
        assert_eq!(to_item(&db).unwrap().name.as_deref(), Some("Tasks"));

        let untitled = json!({"object": "page", "id": "p2", "properties": {}});
        assert_eq!(to_item(&untitled).unwrap().name, None);

        assert!(to_item(&json!({"object": "page"})).is_none());
    }

    #[tokio::test]
    async fn test_load_returns_bare_array() {
        async fn search(headers: HeaderMap) -> Json<Value> {
            assert_eq!(
                headers.get("notion-version").and_then(|v| v.to_str().ok()),
                Some("2022-06-28")
            );
            Json(json!({"results": [
                {"object": "database", "id": "d1", "title": [{"plain_text": "Tasks"}]}
            ]}))
        }

        let base = spawn_upstream(Router::new().route("/v1/search", post(search))).await;
        let client = NotionApiClient::new(reqwest::Client::new(), &base, "2022-06-28");
        let creds = Credentials::new(json!({"access_token": "secret_x"}));

        let data = client.load(&creds).await.unwrap();
        match data {
            LoadedData::Bare(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].display_title(), "Tasks (database)");
            }
            other => panic!("unexpected shape: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let base = spawn_upstream(Router::new()).await;
        let client = NotionApiClient::new(reqwest::Client::new(), &base, "2022-06-28");
        let creds = Credentials::new(json!({"access_token": "secret_x"}));

        let err = client.load(&creds).await.unwrap_err();
        assert!(err.to_string().starts_with("Error fetching Notion items:"));
    }
}
