//! Logging capability for data loads.
//!
//! Components take the logger from context instead of writing to the console
//! directly, so hosts and tests can swap it. Without a provided logger the
//! console one is used.

use contracts::enums::integration_type::IntegrationType;
use contracts::usecases::u601_load_integration_data::{Credentials, LoadedItems};
use leptos::prelude::*;
use std::sync::Arc;

pub trait LoadLog: Send + Sync {
    fn request(&self, integration: IntegrationType, url: &str, credentials: &Credentials);
    fn received(&self, integration: IntegrationType, loaded: &LoadedItems);
    fn failed(&self, integration: IntegrationType, message: &str);
}

/// Writes through the `log` crate (console in the browser)
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLoadLog;

impl LoadLog for ConsoleLoadLog {
    fn request(&self, integration: IntegrationType, url: &str, credentials: &Credentials) {
        log::debug!(
            "{}: POST {} credentials={}",
            integration,
            url,
            describe_credentials(credentials)
        );
    }

    fn received(&self, integration: IntegrationType, loaded: &LoadedItems) {
        log::debug!(
            "{}: received {} items (total {})",
            integration,
            loaded.items.len(),
            loaded.total_count
        );
    }

    fn failed(&self, integration: IntegrationType, message: &str) {
        log::error!("{}: load failed: {}", integration, message);
    }
}

/// Raw credentials only ever reach the log in debug builds
#[cfg(debug_assertions)]
pub fn describe_credentials(credentials: &Credentials) -> String {
    credentials.to_form_value()
}

#[cfg(not(debug_assertions))]
pub fn describe_credentials(_credentials: &Credentials) -> String {
    "<redacted>".to_string()
}

#[derive(Clone)]
pub struct LoadLogHandle(Arc<dyn LoadLog>);

impl LoadLogHandle {
    pub fn new(log: impl LoadLog + 'static) -> Self {
        Self(Arc::new(log))
    }

    pub fn from_arc(log: Arc<dyn LoadLog>) -> Self {
        Self(log)
    }
}

impl std::ops::Deref for LoadLogHandle {
    type Target = dyn LoadLog;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Default for LoadLogHandle {
    fn default() -> Self {
        Self::new(ConsoleLoadLog)
    }
}

pub fn provide_load_log(log: impl LoadLog + 'static) {
    provide_context(LoadLogHandle::new(log));
}

pub fn use_load_log() -> LoadLogHandle {
    use_context::<LoadLogHandle>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording(Mutex<Vec<String>>);

    impl LoadLog for Recording {
        fn request(&self, integration: IntegrationType, url: &str, _credentials: &Credentials) {
            self.0.lock().unwrap().push(format!("request {} {}", integration, url));
        }

        fn received(&self, integration: IntegrationType, loaded: &LoadedItems) {
            self.0
                .lock()
                .unwrap()
                .push(format!("received {} {}", integration, loaded.total_count));
        }

        fn failed(&self, integration: IntegrationType, message: &str) {
            self.0.lock().unwrap().push(format!("failed {} {}", integration, message));
        }
    }

    #[test]
    fn test_handle_dispatches_to_inner_log() {
        let recording = Arc::new(Recording::default());
        let handle = LoadLogHandle::from_arc(recording.clone());
        handle.request(IntegrationType::Notion, "/x", &Credentials::empty());
        handle.failed(IntegrationType::Hubspot, "bad creds");

        let lines = recording.0.lock().unwrap().clone();
        assert_eq!(lines, vec!["request Notion /x", "failed Hubspot bad creds"]);
    }

    #[test]
    fn test_credentials_visible_only_in_debug_builds() {
        let creds = Credentials::new(json!({"access_token": "secret"}));
        let described = describe_credentials(&creds);
        if cfg!(debug_assertions) {
            assert!(described.contains("secret"));
        } else {
            assert_eq!(described, "<redacted>");
        }
    }
}
