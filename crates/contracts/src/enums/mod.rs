pub mod integration_type;
