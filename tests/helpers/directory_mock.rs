//! Mock directory API server for testing
//!
//! Wraps a wiremock server that answers the college and enquiry endpoints
//! the way the real backend does.

use serde_json::Value;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use college_directory::config::ApiConfig;
use college_directory::services::HttpDirectoryApi;

/// Prefix the backend mounts its resources under
pub const API_ROOT: &str = "/api";

/// Mock directory API server
pub struct DirectoryMockServer {
    pub server: MockServer,
    pub base_url: String,
}

impl DirectoryMockServer {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let base_url = format!("{}{}", server.uri(), API_ROOT);
        Self { server, base_url }
    }

    /// Client pointed at this server, with the base URL given without a trailing slash
    pub fn client(&self) -> HttpDirectoryApi {
        let config = ApiConfig {
            base_url: self.base_url.clone(),
            timeout_seconds: 5,
            ..ApiConfig::default()
        };
        HttpDirectoryApi::new(&config).expect("mock server URL is valid")
    }

    fn route(resource: &str) -> String {
        format!("{}/{}", API_ROOT, resource)
    }

    /// Respond to `verb resource` with `status` and a JSON body
    pub async fn mock_json(&self, verb: &str, resource: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(Self::route(resource)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Respond to `verb resource` with a bare status
    pub async fn mock_status(&self, verb: &str, resource: &str, status: u16) {
        Mock::given(method(verb))
            .and(path(Self::route(resource)))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_list_colleges(&self, colleges: Value) {
        self.mock_json("GET", "colleges/", 200, colleges).await;
    }

    pub async fn mock_list_enquiries(&self, enquiries: Value) {
        self.mock_json("GET", "enquiries/", 200, enquiries).await;
    }

    /// Bodies of every request received so far, parsed as JSON
    pub async fn received_json(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }

    /// `METHOD path` of every request received so far
    pub async fn received_routes(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| format!("{} {}", request.method, request.url.path()))
            .collect()
    }

    pub async fn reset(&self) {
        self.server.reset().await;
    }
}
