//! REST client for the Showroom backend.

use reqwest::{Client, RequestBuilder, Response, StatusCode, multipart::Form};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Backend address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Configuration for connecting to the backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend address, e.g. `"http://localhost:3000"`.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP transport error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with anything but `200 OK`.
    #[error("request failed with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the backend refused the request outright (non-2xx).
    ///
    /// Deletes of records still referenced by an order are refused this way.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status, .. } if !(200..300).contains(status))
    }
}

/// `{ "data": ... }`
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub(crate) data: T,
}

/// HTTP client bound to one backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// Create a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!("showroom/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Absolute URL of `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET path`, unwrapping the `data` envelope.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a non-200 status or an unexpected body.
    pub async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = send(self.http.get(self.url(path))).await?;

        decode_data(response).await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-200 status.
    pub async fn post_json<B: Serialize + ?Sized + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        send(self.http.post(self.url(path)).json(body)).await?;

        Ok(())
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-200 status.
    pub async fn put_json<B: Serialize + ?Sized + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        send(self.http.put(self.url(path)).json(body)).await?;

        Ok(())
    }

    /// `DELETE path`
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-200 status.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        send(self.http.delete(self.url(path))).await?;

        Ok(())
    }

    /// `POST path` with a multipart body, unwrapping the `data` envelope.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a non-200 status or an unexpected body.
    pub async fn post_multipart_data<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let response = send(self.http.post(self.url(path)).multipart(form)).await?;

        decode_data(response).await
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request.send().await?;
    let status = response.status();

    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();

        return Err(ApiError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response)
}

async fn decode_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;

    parse_envelope(&bytes)
}

pub(crate) fn parse_envelope<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let envelope: Envelope<T> = serde_json::from_slice(bytes)?;

    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn urls_join_without_double_slashes() -> TestResult {
        let client = ApiClient::new(ApiConfig {
            base_url: "http://localhost:3000/".to_string(),
        })?;

        assert_eq!(client.url("/orders/cars/7"), "http://localhost:3000/orders/cars/7");
        assert_eq!(client.url("customers"), "http://localhost:3000/customers");

        Ok(())
    }

    #[test]
    fn envelope_is_unwrapped() -> TestResult {
        let names: Vec<String> = parse_envelope(br#"{"data": ["Ani", "Budi"]}"#)?;

        assert_eq!(names, ["Ani", "Budi"]);

        Ok(())
    }

    #[test]
    fn missing_envelope_is_a_decode_error() {
        let result = parse_envelope::<Vec<String>>(br#"["Ani"]"#);

        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn only_non_2xx_statuses_are_rejections() {
        let rejected = ApiError::UnexpectedStatus {
            status: 409,
            body: String::new(),
        };
        let odd_success = ApiError::UnexpectedStatus {
            status: 204,
            body: String::new(),
        };

        assert!(rejected.is_rejection());
        assert!(!odd_success.is_rejection());
    }
}
