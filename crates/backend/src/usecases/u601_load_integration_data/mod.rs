pub mod airtable_api_client;
pub mod error;
pub mod hubspot_api_client;
pub mod notion_api_client;

pub use error::IntegrationError;

use async_trait::async_trait;
use contracts::enums::integration_type::IntegrationType;
use contracts::usecases::u601_load_integration_data::{Credentials, LoadedData};
use std::collections::HashMap;
use std::sync::Arc;

use crate::shared::config::IntegrationsConfig;
use airtable_api_client::AirtableApiClient;
use hubspot_api_client::HubspotApiClient;
use notion_api_client::NotionApiClient;

/// Fetches the item list of one integration on behalf of the widget
#[async_trait]
pub trait IntegrationLoader: Send + Sync {
    fn integration(&self) -> IntegrationType;

    async fn load(&self, credentials: &Credentials) -> Result<LoadedData, IntegrationError>;
}

/// One loader per integration type
#[derive(Clone, Default)]
pub struct LoaderRegistry {
    loaders: HashMap<IntegrationType, Arc<dyn IntegrationLoader>>,
}

impl LoaderRegistry {
    pub fn from_config(config: &IntegrationsConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        let mut registry = Self::default();
        registry.register(HubspotApiClient::new(
            client.clone(),
            &config.hubspot_api_base,
        ));
        registry.register(NotionApiClient::new(
            client.clone(),
            &config.notion_api_base,
            &config.notion_version,
        ));
        registry.register(AirtableApiClient::new(client, &config.airtable_api_base));
        Ok(registry)
    }

    pub fn register(&mut self, loader: impl IntegrationLoader + 'static) {
        self.loaders.insert(loader.integration(), Arc::new(loader));
    }

    pub fn get(&self, integration: IntegrationType) -> Option<Arc<dyn IntegrationLoader>> {
        self.loaders.get(&integration).cloned()
    }
}

pub(crate) fn require_token(credentials: &Credentials) -> Result<&str, IntegrationError> {
    credentials
        .access_token()
        .ok_or(IntegrationError::NoAccessToken)
}

/// Token prefix safe to put in logs. Short tokens are masked entirely.
pub(crate) fn mask_token(token: &str) -> String {
    if token.chars().count() <= 8 {
        return "****".to_string();
    }
    let prefix: String = token.chars().take(4).collect();
    format!("{}****", prefix)
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::Router;
    use tokio::net::TcpListener;

    /// Serve `router` on an ephemeral local port and return its base URL
    pub async fn spawn_upstream(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }
}
