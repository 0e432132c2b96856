use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::enums::integration_type::IntegrationType;
use contracts::usecases::u601_load_integration_data::ErrorBody;
use thiserror::Error;

/// Failures of a load request, rendered as `{"detail": ...}`
#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("Missing credentials field")]
    MissingCredentials,

    #[error("Invalid form data: {0}")]
    InvalidForm(String),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("No access token found in credentials")]
    NoAccessToken,

    #[error("Error fetching {} items: {message}", .integration.vendor_name())]
    Upstream {
        integration: IntegrationType,
        message: String,
    },
}

impl IntegrationError {
    pub fn upstream(integration: IntegrationType, err: impl std::fmt::Display) -> Self {
        IntegrationError::Upstream {
            integration,
            message: err.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            IntegrationError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for IntegrationError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
