use log::{debug, warn};
use reqwest::{blocking, Client, ClientBuilder};

use super::ApiResponse;
use crate::core::{Credentials, Payload, ReaderConfig};
use crate::ReaderResult;

const USER_AGENT: &str = concat!("oxyreader/", env!("CARGO_PKG_VERSION"));

/// Issues authenticated POSTs against the scraping API.
///
/// A fresh HTTP client is built for every call and dropped when the call
/// returns, so no connection outlives a single request/response cycle.
#[derive(Debug, Clone)]
pub struct OxylabsClient {
    credentials: Credentials,
    config: ReaderConfig,
}

impl OxylabsClient {
    pub fn new(credentials: Credentials, config: ReaderConfig) -> Self {
        Self {
            credentials,
            config,
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn build_client(&self) -> ReaderResult<Client> {
        let client = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(self.config.timeout)
            .build()?;
        Ok(client)
    }

    fn build_blocking_client(&self) -> ReaderResult<blocking::Client> {
        let client = blocking::ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(self.config.timeout)
            .build()?;
        Ok(client)
    }

    pub async fn post(&self, payload: &Payload) -> ReaderResult<ApiResponse> {
        let client = self.build_client()?;
        let url = self.config.endpoint.clone();

        debug!("POST {} (payload keys: {:?})", url, payload.keys().collect::<Vec<_>>());
        let response = client
            .post(url.clone())
            .basic_auth(self.credentials.username(), Some(self.credentials.password()))
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(Self::finish(url, status, body))
    }

    pub fn post_blocking(&self, payload: &Payload) -> ReaderResult<ApiResponse> {
        let client = self.build_blocking_client()?;
        let url = self.config.endpoint.clone();

        debug!("POST {} (payload keys: {:?})", url, payload.keys().collect::<Vec<_>>());
        let response = client
            .post(url.clone())
            .basic_auth(self.credentials.username(), Some(self.credentials.password()))
            .json(payload)
            .send()?;

        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        Ok(Self::finish(url, status, body))
    }

    fn finish(url: url::Url, status: u16, body: Vec<u8>) -> ApiResponse {
        let response = ApiResponse { url, status, body };

        if response.is_success() {
            debug!(
                "Received response: status={}, body_length={}",
                response.status,
                response.body.len()
            );
        } else {
            warn!(
                "Scraping API answered {} for {} ({} bytes)",
                response.status,
                response.url,
                response.body.len()
            );
        }

        response
    }
}
