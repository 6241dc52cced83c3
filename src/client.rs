//! HTTP client for the ride service
//!
//! One `reqwest::Client` with a cookie store serves both the ride detail
//! fetch and the join request, so session cookies set by the service are
//! sent back on every call.

use crate::booking::executor::{diagnostic_message, JoinTransport};
use crate::booking::{JoinAttemptResult, JoinBody};
use crate::error::TransportError;
use crate::models::{FetchState, RideSummary};
use crate::settings::ApiSettings;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;
use url::Url;

const JSON: &str = "application/json";

#[derive(Debug, Clone)]
pub struct RideClient {
    http: reqwest::Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl RideClient {
    /// Build a client for the configured ride service
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be constructed
    pub fn new(api: &ApiSettings) -> Result<Self, TransportError> {
        let base_url = Url::parse(&api.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::InvalidUrl(format!(
                "{} cannot be used as a base URL",
                api.base_url
            )));
        }

        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(api.user_agent.as_str());
        if let Some(secs) = api.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            auth_token: api.auth_token.clone(),
        })
    }

    /// Resolve path segments against the base URL, percent-encoding each one
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry a path
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| TransportError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `<base>/rides/{rideId}/join`
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry a path
    pub fn join_url(&self, ride_id: &str) -> Result<Url, TransportError> {
        self.endpoint(&["rides", ride_id, "join"])
    }

    fn request(&self, url: Url) -> reqwest::RequestBuilder {
        let request = self
            .http
            .get(url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .header("X-Requested-With", "XMLHttpRequest");
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Fetch ride details by identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service answers with a
    /// non-success status, or the payload is not a ride
    pub async fn fetch_ride(&self, ride_id: &str) -> Result<RideSummary, TransportError> {
        let url = self.endpoint(&["rides", ride_id])?;
        log::debug!("Fetching ride details from: {url}");

        let response = self.request(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await?;
            return Err(TransportError::Server {
                status: status.as_u16(),
                body: JoinBody::from_bytes(&bytes)?,
            });
        }

        Ok(response.json::<RideSummary>().await?)
    }

    /// Fetch ride details and report them the way the page consumes them
    pub async fn load_ride(&self, ride_id: &str) -> FetchState {
        match self.fetch_ride(ride_id).await {
            Ok(ride) => FetchState::loaded(ride),
            Err(err) => {
                log::warn!("Failed to load ride {ride_id}: {err}");
                FetchState::failed(diagnostic_message(&err))
            }
        }
    }
}

#[async_trait]
impl JoinTransport for RideClient {
    async fn join(&self, ride_id: &str) -> Result<JoinAttemptResult, TransportError> {
        let url = self.join_url(ride_id)?;
        log::debug!("Joining ride at: {url}");

        let response = self.request(url).send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body = JoinBody::from_bytes(&bytes)?;
        log::debug!("Join response: status={status} body={body:?}");

        Ok(JoinAttemptResult::new(status, body))
    }
}
