//! HTTP client creation and configuration utilities

use reqwest::Client;

/// Creates the HTTP client shared by every request of a [`super::HoopsRefClient`].
///
/// No request timeout is set; requests run with the transport defaults.
/// Connection pooling keeps consecutive page loads on one connection.
pub fn create_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Creates an HTTP client for testing with the default user agent
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client(&crate::constants::default_user_agent())
        .expect("Failed to create test HTTP client")
}
