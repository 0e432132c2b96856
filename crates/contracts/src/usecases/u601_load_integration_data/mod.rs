pub mod credentials;
pub mod error;
pub mod item;
pub mod response;

pub use credentials::Credentials;
pub use error::{failure_message, ErrorBody};
pub use item::IntegrationItem;
pub use response::{ItemsEnvelope, LoadedData, LoadedItems};

use crate::usecases::common::UseCaseMetadata;

/// Multipart field carrying the JSON-encoded credentials
pub const CREDENTIALS_FIELD: &str = "credentials";

pub struct LoadIntegrationData;

impl UseCaseMetadata for LoadIntegrationData {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "load_integration_data"
    }

    fn display_name() -> &'static str {
        "Load integration data"
    }

    fn description() -> &'static str {
        "Lists the items an integration exposes through the backend proxy"
    }
}
