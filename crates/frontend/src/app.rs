use crate::shared::load_log::{provide_load_log, ConsoleLoadLog};
use crate::usecases::u601_load_integration_data::DataForm;
use contracts::enums::integration_type::IntegrationType;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_load_integration_data::{Credentials, LoadIntegrationData};
use leptos::prelude::*;
use thaw::*;

/// Parse the credentials textarea. Blank input means "no credentials".
pub fn parse_credentials(raw: &str) -> Result<Credentials, String> {
    if raw.trim().is_empty() {
        return Ok(Credentials::empty());
    }
    serde_json::from_str::<serde_json::Value>(raw)
        .map(Credentials::new)
        .map_err(|e| format!("Invalid credentials JSON: {}", e))
}

#[component]
pub fn App() -> impl IntoView {
    provide_load_log(ConsoleLoadLog);

    let integration_name = RwSignal::new(IntegrationType::Notion.display_name().to_string());
    let credentials_text = RwSignal::new(String::from("{}"));

    let integration_type = Signal::derive(move || {
        IntegrationType::from_name(&integration_name.get()).unwrap_or(IntegrationType::Notion)
    });
    let parsed = Memo::new(move |_| parse_credentials(&credentials_text.get()));
    let credentials = Signal::derive(move || parsed.get().unwrap_or_default());

    view! {
        <ConfigProvider>
            <div style="max-width: 640px; margin: 20px auto; padding: 20px;">
                <h2>{LoadIntegrationData::display_name()}</h2>

                <div style="margin: 16px 0;">
                    <label style="display: block; margin-bottom: 8px; font-weight: bold;">
                        "Integration:"
                    </label>
                    <Select value=integration_name>
                        {IntegrationType::all().into_iter().map(|t| view! {
                            <option value={t.display_name()}>{t.display_name()}</option>
                        }).collect_view()}
                    </Select>
                </div>

                <div style="margin: 16px 0;">
                    <label style="display: block; margin-bottom: 8px; font-weight: bold;">
                        "Credentials (JSON):"
                    </label>
                    <Textarea
                        value=credentials_text
                        attr:style="width: 100%; min-height: 100px; font-family: monospace;"
                    />
                    {move || parsed.get().err().map(|e| view! {
                        <div style="margin-top: 4px; font-size: 12px; color: var(--color-error);">{e}</div>
                    })}
                </div>

                <DataForm integration_type=integration_type credentials=credentials />
            </div>
        </ConfigProvider>
    }
}
