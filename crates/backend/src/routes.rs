use axum::extract::{Multipart, State};
use axum::{
    routing::{get, post},
    Router,
};
use contracts::enums::integration_type::IntegrationType;
use std::sync::Arc;

use crate::handlers;
use crate::usecases::u601_load_integration_data::LoaderRegistry;

#[derive(Clone)]
pub struct AppState {
    pub loaders: Arc<LoaderRegistry>,
}

impl AppState {
    pub fn new(loaders: LoaderRegistry) -> Self {
        Self {
            loaders: Arc::new(loaders),
        }
    }
}

/// All application routes. Integration paths come from the shared route table.
pub fn configure_routes(state: AppState) -> Router {
    let mut router = Router::new().route("/health", get(|| async { "ok" }));

    for integration in IntegrationType::all() {
        router = router.route(
            &integration.route().path(),
            post(move |state: State<AppState>, multipart: Multipart| {
                handlers::u601_load_integration_data::load(state, integration, multipart)
            }),
        );
    }

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u601_load_integration_data::test_support::spawn_upstream;
    use crate::usecases::u601_load_integration_data::{IntegrationError, IntegrationLoader};
    use async_trait::async_trait;
    use contracts::usecases::u601_load_integration_data::{
        Credentials, ErrorBody, IntegrationItem, LoadedData,
    };
    use reqwest::multipart::Form;
    use serde_json::json;

    /// Echoes the received token back as a single item
    struct EchoLoader(IntegrationType);

    #[async_trait]
    impl IntegrationLoader for EchoLoader {
        fn integration(&self) -> IntegrationType {
            self.0
        }

        async fn load(&self, credentials: &Credentials) -> Result<LoadedData, IntegrationError> {
            let token = credentials
                .access_token()
                .ok_or(IntegrationError::NoAccessToken)?;
            Ok(LoadedData::Bare(vec![
                IntegrationItem::new(token).with_type(self.0.display_name())
            ]))
        }
    }

    async fn spawn_app() -> String {
        let mut registry = LoaderRegistry::default();
        for integration in IntegrationType::all() {
            registry.register(EchoLoader(integration));
        }
        spawn_upstream(configure_routes(AppState::new(registry))).await
    }

    #[tokio::test]
    async fn test_each_route_reaches_its_loader() {
        let base = spawn_app().await;
        let client = reqwest::Client::new();

        for integration in IntegrationType::all() {
            let form = Form::new().text("credentials", r#"{"access_token":"tok"}"#);
            let response = client
                .post(format!("{}{}", base, integration.route().path()))
                .multipart(form)
                .send()
                .await
                .unwrap();
            assert!(response.status().is_success());

            let body: Vec<IntegrationItem> = response.json().await.unwrap();
            assert_eq!(body[0].id, "tok");
            assert_eq!(body[0].item_type.as_deref(), Some(integration.display_name()));
        }
    }

    #[tokio::test]
    async fn test_hubspot_load_path_is_not_routed() {
        let base = spawn_app().await;
        let form = Form::new().text("credentials", "{}");
        let response = reqwest::Client::new()
            .post(format!("{}/integrations/hubspot/load", base))
            .multipart(form)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_errors_carry_detail() {
        let base = spawn_app().await;
        let client = reqwest::Client::new();
        let url = format!("{}/integrations/notion/load", base);

        let cases = [
            (Form::new().text("other", "x"), "Missing credentials field"),
            (
                Form::new().text("credentials", json!({"token": "x"}).to_string()),
                "No access token found in credentials",
            ),
        ];
        for (form, expected) in cases {
            let response = client.post(&url).multipart(form).send().await.unwrap();
            assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
            let body: ErrorBody = response.json().await.unwrap();
            assert_eq!(body.detail.as_deref(), Some(expected));
        }

        let form = Form::new().text("credentials", "{not json");
        let response = client.post(&url).multipart(form).send().await.unwrap();
        let body: ErrorBody = response.json().await.unwrap();
        assert!(body.detail.unwrap().starts_with("Invalid credentials:"));
    }
}
