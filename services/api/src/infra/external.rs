//! Reqwest-backed adapters for the country, weather and image providers.
//!
//! Each call is a single outbound request bounded by the client timeout.
//! Provider JSON is passed through untouched.

use std::time::Duration;

use anyhow::Context as _;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use crate::domain::repository::ExternalDataPort;
use crate::error::ExternalError;

const REST_COUNTRIES: &str = "REST Countries";
const OPENWEATHERMAP: &str = "OpenWeatherMap";
const UNSPLASH: &str = "Unsplash";

/// Provider base URLs and credentials, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ExternalEndpoints {
    pub rest_countries_url: String,
    pub openweathermap_url: String,
    pub openweathermap_api_key: Option<String>,
    pub unsplash_url: String,
    pub unsplash_access_key: Option<String>,
}

#[derive(Clone)]
pub struct HttpExternalData {
    client: Client,
    endpoints: ExternalEndpoints,
}

impl HttpExternalData {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoints: ExternalEndpoints, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoints })
    }

    async fn get_json(
        &self,
        request: reqwest::RequestBuilder,
        provider: &'static str,
        resource: &'static str,
    ) -> Result<Value, ExternalError> {
        let response = request
            .send()
            .await
            .with_context(|| format!("{provider} request failed"))?;
        classify_status(response.status(), provider, resource)?;
        let body = response
            .json::<Value>()
            .await
            .with_context(|| format!("invalid {provider} JSON payload"))?;
        Ok(body)
    }
}

impl ExternalDataPort for HttpExternalData {
    async fn country_by_name(&self, name: &str) -> Result<Value, ExternalError> {
        let url = endpoint(&self.endpoints.rest_countries_url, &["name", name])?;
        let body = self
            .get_json(self.client.get(url), REST_COUNTRIES, "country")
            .await?;
        first_match(body)
    }

    async fn weather(&self, latitude: f64, longitude: f64) -> Result<Value, ExternalError> {
        let key = self
            .endpoints
            .openweathermap_api_key
            .as_deref()
            .ok_or(ExternalError::MissingCredential(OPENWEATHERMAP))?;
        let mut url = endpoint(&self.endpoints.openweathermap_url, &[])?;
        url.query_pairs_mut()
            .append_pair("lat", &latitude.to_string())
            .append_pair("lon", &longitude.to_string())
            .append_pair("appid", key)
            .append_pair("units", "metric");
        self.get_json(self.client.get(url), OPENWEATHERMAP, "weather")
            .await
    }

    async fn search_images(&self, query: &str) -> Result<Value, ExternalError> {
        let key = self
            .endpoints
            .unsplash_access_key
            .as_deref()
            .ok_or(ExternalError::MissingCredential(UNSPLASH))?;
        let mut url = endpoint(&self.endpoints.unsplash_url, &["search", "photos"])?;
        url.query_pairs_mut().append_pair("query", query);
        let request = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Client-ID {key}"))
            .header("Accept-Version", "v1");
        self.get_json(request, UNSPLASH, "images").await
    }
}

/// Base URL with `segments` appended, each percent-encoded.
fn endpoint(base: &str, segments: &[&str]) -> Result<Url, ExternalError> {
    let mut url = Url::parse(base).with_context(|| format!("invalid provider URL {base}"))?;
    if !segments.is_empty() {
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("provider URL {base} cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
    }
    Ok(url)
}

/// Map a provider status to a failure class. 2xx passes.
fn classify_status(
    status: StatusCode,
    provider: &'static str,
    resource: &'static str,
) -> Result<(), ExternalError> {
    if status.is_success() {
        return Ok(());
    }
    match status {
        StatusCode::NOT_FOUND => Err(ExternalError::NotFound(resource)),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(ExternalError::MissingCredential(provider))
        }
        other => Err(ExternalError::Upstream(anyhow::anyhow!(
            "{provider} responded with {other}"
        ))),
    }
}

/// REST Countries answers with an array; the first entry is the best match.
fn first_match(body: Value) -> Result<Value, ExternalError> {
    match body {
        Value::Array(items) => items
            .into_iter()
            .next()
            .ok_or(ExternalError::NotFound("country")),
        other => Ok(other),
    }
}
