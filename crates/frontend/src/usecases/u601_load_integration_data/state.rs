use contracts::usecases::u601_load_integration_data::LoadedData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Local state of the DataForm widget. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFormState {
    pub loaded: Option<LoadedData>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DataFormState {
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Errored
        } else if self.loaded.is_some() {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }

    /// Previous data stays visible until the new response arrives
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_ok(&mut self, data: LoadedData) {
        self.loaded = Some(data);
        self.loading = false;
    }

    pub fn finish_err(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    pub fn clear(&mut self) {
        self.loaded = None;
        self.error = None;
    }

    pub fn can_clear(&self) -> bool {
        self.loaded.is_some() || self.error.is_some()
    }

    pub fn load_label(&self) -> &'static str {
        if self.loading {
            "Loading Data..."
        } else {
            "Load Data"
        }
    }
}
