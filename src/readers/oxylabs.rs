use async_trait::async_trait;
use log::info;

use crate::core::{Credentials, Payload, Reader, ReaderConfig};
use crate::document::Document;
use crate::http::OxylabsClient;
use crate::ReaderResult;

/// Reads any Oxylabs source (`google_search`, `amazon_product`, ...).
///
/// ```no_run
/// use oxyreader::{OxylabsReader, Reader};
/// use serde_json::json;
///
/// let reader = OxylabsReader::new("OXYLABS_USERNAME", "OXYLABS_PASSWORD");
/// let payload = json!({
///     "source": "google_search",
///     "parse": true,
///     "query": "Iphone 16",
///     "geo_location": "Paris, France"
/// });
/// let docs = reader.load_data(payload.as_object().unwrap())?;
/// # Ok::<(), oxyreader::ReaderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OxylabsReader {
    client: OxylabsClient,
}

impl OxylabsReader {
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
}

#[async_trait]
impl Reader for OxylabsReader {
    fn class_name(&self) -> &'static str {
        "OxylabsReader"
    }

    fn load_data(&self, payload: &Payload) -> ReaderResult<Vec<Document>> {
        let response = self.client.post_blocking(payload)?;
        info!("{} loaded response from {}", self.class_name(), response.url);
        Ok(vec![Document::from_response(&response)?])
    }

    async fn aload_data(&self, payload: &Payload) -> ReaderResult<Vec<Document>> {
        let response = self.client.post(payload).await?;
        info!("{} loaded response from {}", self.class_name(), response.url);
        Ok(vec![Document::from_response(&response)?])
    }
}
