use axum::extract::{Multipart, State};
use axum::Json;
use contracts::enums::integration_type::IntegrationType;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_load_integration_data::{
    Credentials, LoadIntegrationData, LoadedData, CREDENTIALS_FIELD,
};

use crate::routes::AppState;
use crate::usecases::u601_load_integration_data::IntegrationError;

/// POST /integrations/{segment}/{action}
pub async fn load(
    State(state): State<AppState>,
    integration: IntegrationType,
    multipart: Multipart,
) -> Result<Json<LoadedData>, IntegrationError> {
    let credentials = read_credentials(multipart).await?;

    let loader = state.loaders.get(integration).ok_or_else(|| {
        IntegrationError::upstream(integration, "integration is not configured")
    })?;

    match loader.load(&credentials).await {
        Ok(data) => Ok(Json(data)),
        Err(e) => {
            tracing::error!(
                "{} failed for {}: {}",
                LoadIntegrationData::full_name(),
                integration,
                e
            );
            Err(e)
        }
    }
}

async fn read_credentials(mut multipart: Multipart) -> Result<Credentials, IntegrationError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| IntegrationError::InvalidForm(e.to_string()))?
    {
        if field.name() != Some(CREDENTIALS_FIELD) {
            continue;
        }
        let raw = field
            .text()
            .await
            .map_err(|e| IntegrationError::InvalidForm(e.to_string()))?;
        return Credentials::parse_form_value(&raw)
            .map_err(|e| IntegrationError::InvalidCredentials(e.to_string()));
    }
    Err(IntegrationError::MissingCredentials)
}
