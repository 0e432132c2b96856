/// Identification metadata for a UseCase, shared by the UI and the server logs
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u601")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "load_integration_data")
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name like "u601_load_integration_data"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
