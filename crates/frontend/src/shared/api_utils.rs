//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing backend URLs.

/// Port the integration proxy listens on
pub const BACKEND_PORT: u16 = 8000;

/// Get the base URL for API requests
///
/// Constructs the base URL from the current window location,
/// using [`BACKEND_PORT`] for the backend server.
///
/// # Returns
/// - Base URL like "http://localhost:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    base_url(&protocol, &hostname)
}

pub fn base_url(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}
