//! Directory API client
//!
//! This service talks to the REST backend that owns colleges and enquiries.
//! It handles HTTP client setup, URL construction, response parsing and
//! error mapping. Nothing is retried or cached.

use std::future::Future;
use std::time::{Duration, Instant};

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::config::ApiConfig;
use crate::models::{College, CollegePayload, CreateEnquiryRequest, Enquiry};
use crate::utils::errors::{ApiError, DirectoryError, Result};
use crate::utils::logging;

/// Remote collection resources consumed by the client
pub trait DirectoryApi: Send + Sync {
    /// GET `colleges/`
    fn list_colleges(&self) -> impl Future<Output = Result<Vec<College>>> + Send;

    /// POST `colleges/`
    fn create_college(&self, payload: &CollegePayload) -> impl Future<Output = Result<College>> + Send;

    /// PUT `colleges/{id}/`
    fn update_college(
        &self,
        college_id: i64,
        payload: &CollegePayload,
    ) -> impl Future<Output = Result<College>> + Send;

    /// DELETE `colleges/{id}/`
    fn delete_college(&self, college_id: i64) -> impl Future<Output = Result<()>> + Send;

    /// GET `enquiries/`
    fn list_enquiries(&self) -> impl Future<Output = Result<Vec<Enquiry>>> + Send;

    /// POST `enquiries/`
    fn create_enquiry(&self, request: &CreateEnquiryRequest) -> impl Future<Output = Result<Enquiry>> + Send;
}

/// reqwest-backed implementation of [`DirectoryApi`]
#[derive(Clone, Debug)]
pub struct HttpDirectoryApi {
    client: Client,
    base_url: Url,
}

impl HttpDirectoryApi {
    /// Create a new client from API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }
        let client = builder.build().map_err(DirectoryError::Http)?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&config.base_url)?,
        })
    }

    /// Base URL all resource paths are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn execute(&self, method: Method, path: &str, body: Option<RequestBody<'_>>) -> Result<Response> {
        let url = self.endpoint(path)?;
        debug!(method = %method, url = %url, "Making directory API request");

        let mut request: RequestBuilder = self.client.request(method.clone(), url);
        request = match body {
            Some(RequestBody::College(payload)) => request.json(payload),
            Some(RequestBody::Enquiry(payload)) => request.json(payload),
            None => request,
        };

        let started = Instant::now();
        let outcome = send(request).await;
        let elapsed = started.elapsed().as_millis() as u64;
        logging::log_api_call(method.as_str(), path, elapsed, outcome.is_ok());

        outcome
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody<'_>>,
    ) -> Result<T> {
        let response = self.execute(method, path, body).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| DirectoryError::Api(ApiError::InvalidResponse(e.to_string())))
    }
}

enum RequestBody<'a> {
    College(&'a CollegePayload),
    Enquiry(&'a CreateEnquiryRequest),
}

impl DirectoryApi for HttpDirectoryApi {
    #[instrument(skip(self))]
    async fn list_colleges(&self) -> Result<Vec<College>> {
        self.execute_json(Method::GET, "colleges/", None).await
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    async fn create_college(&self, payload: &CollegePayload) -> Result<College> {
        self.execute_json(Method::POST, "colleges/", Some(RequestBody::College(payload)))
            .await
    }

    #[instrument(skip(self, payload))]
    async fn update_college(&self, college_id: i64, payload: &CollegePayload) -> Result<College> {
        let path = college_path(college_id);
        self.execute_json(Method::PUT, &path, Some(RequestBody::College(payload)))
            .await
            .map_err(|e| not_found_as_missing_college(e, college_id))
    }

    #[instrument(skip(self))]
    async fn delete_college(&self, college_id: i64) -> Result<()> {
        let path = college_path(college_id);
        self.execute(Method::DELETE, &path, None)
            .await
            .map(|_| ())
            .map_err(|e| not_found_as_missing_college(e, college_id))
    }

    #[instrument(skip(self))]
    async fn list_enquiries(&self) -> Result<Vec<Enquiry>> {
        self.execute_json(Method::GET, "enquiries/", None).await
    }

    #[instrument(skip(self, request), fields(college_id = request.college))]
    async fn create_enquiry(&self, request: &CreateEnquiryRequest) -> Result<Enquiry> {
        self.execute_json(Method::POST, "enquiries/", Some(RequestBody::Enquiry(request)))
            .await
    }
}

/// Send a request and map transport failures and non-2xx statuses
async fn send(request: RequestBuilder) -> Result<Response> {
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            DirectoryError::Api(ApiError::Timeout)
        } else if e.is_connect() {
            DirectoryError::Api(ApiError::ServiceUnavailable)
        } else {
            DirectoryError::Api(ApiError::RequestFailed(e.to_string()))
        }
    })?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(DirectoryError::Api(ApiError::Status { status, body }));
    }

    Ok(response)
}

fn college_path(college_id: i64) -> String {
    format!("colleges/{}/", college_id)
}

fn not_found_as_missing_college(error: DirectoryError, college_id: i64) -> DirectoryError {
    match error {
        DirectoryError::Api(ref api) if api.is_not_found() => DirectoryError::CollegeNotFound { college_id },
        other => other,
    }
}

/// Make sure relative joins land under the base path rather than replacing its last segment
fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.ends_with('/') {
        Ok(Url::parse(trimmed)?)
    } else {
        Ok(Url::parse(&format!("{}/", trimmed))?)
    }
}
