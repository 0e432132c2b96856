pub mod api;
pub mod model;
pub mod state;
pub mod view;

pub use view::{DataForm, LoadedDataView};
