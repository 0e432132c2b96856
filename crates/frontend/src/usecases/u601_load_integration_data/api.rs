use crate::shared::api_utils::api_base;
use contracts::enums::integration_type::IntegrationType;
use contracts::usecases::u601_load_integration_data::{
    failure_message, Credentials, LoadedData, CREDENTIALS_FIELD,
};
use gloo_net::http::Request;
use web_sys::FormData;

/// URL of the load endpoint for an integration
pub fn load_url(base: &str, integration: IntegrationType) -> String {
    format!("{}{}", base, integration.route().path())
}

pub fn integration_url(integration: IntegrationType) -> String {
    load_url(&api_base(), integration)
}

/// POST the credentials as multipart form data and return the raw payload.
///
/// A success body that is not JSON is kept as text and renders as "no data".
pub async fn load_items(url: &str, credentials: &Credentials) -> Result<LoadedData, String> {
    let form = FormData::new().map_err(|e| format!("Failed to create form data: {:?}", e))?;
    form.append_with_str(CREDENTIALS_FIELD, &credentials.to_form_value())
        .map_err(|e| format!("Failed to append form field: {:?}", e))?;

    let response = Request::post(url)
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let body = response.text().await.map_err(|e| e.to_string());
    read_payload(response.ok(), response.status(), body)
}

/// Turn a finished response into the payload or an error message.
///
/// A failed body read is a load failure on success statuses. On error
/// statuses the status-code message still applies.
pub fn read_payload(
    ok: bool,
    status: u16,
    body: Result<String, String>,
) -> Result<LoadedData, String> {
    if !ok {
        let fallback = format!("Request failed with status code {}", status);
        return Err(failure_message(&body.unwrap_or_default(), &fallback));
    }

    let body = body?;
    Ok(serde_json::from_str::<LoadedData>(&body)
        .unwrap_or(LoadedData::Unrecognized(serde_json::Value::String(body))))
}
