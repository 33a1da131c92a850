use async_trait::async_trait;
use log::info;

use crate::core::{Credentials, Payload, Reader, ReaderConfig};
use crate::document::Document;
use crate::http::OxylabsClient;
use crate::{ReaderError, ReaderResult};

/// Scrapes a single website through the Oxylabs universal source.
///
/// The payload must carry a `url` key; everything else is passed through.
#[derive(Debug, Clone)]
pub struct OxylabsWebReader {
    client: OxylabsClient,
}

impl OxylabsWebReader {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::from_credentials(Credentials::new(username, password))
    }

    pub fn from_credentials(credentials: Credentials) -> Self {
        Self {
            client: OxylabsClient::new(credentials, ReaderConfig::default()),
        }
    }

    pub fn with_config(self, config: ReaderConfig) -> Self {
        Self {
            client: OxylabsClient::new(self.client.credentials().clone(), config),
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        self.client.config()
    }

    fn validate_payload(payload: &Payload) -> ReaderResult<()> {
        if !payload.contains_key("url") {
            return Err(ReaderError::ValidationError(
                "'url' must be provided!".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl Reader for OxylabsWebReader {
    fn class_name(&self) -> &'static str {
        "OxylabsWebReader"
    }

    fn load_data(&self, payload: &Payload) -> ReaderResult<Vec<Document>> {
        Self::validate_payload(payload)?;

        let response = self.client.post_blocking(payload)?;
        info!("{} loaded response from {}", self.class_name(), response.url);
        Ok(vec![Document::from_response(&response)?])
    }

    async fn aload_data(&self, payload: &Payload) -> ReaderResult<Vec<Document>> {
        Self::validate_payload(payload)?;

        let response = self.client.post(payload).await?;
        info!("{} loaded response from {}", self.class_name(), response.url);
        Ok(vec![Document::from_response(&response)?])
    }
}
