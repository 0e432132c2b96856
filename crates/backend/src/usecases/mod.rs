pub mod u601_load_integration_data;
