use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::document::Document;
use crate::ReaderResult;

/// Request body forwarded verbatim to the scraping API.
pub type Payload = Map<String, Value>;

#[async_trait]
pub trait Reader: Send + Sync {
    fn class_name(&self) -> &'static str;

    /// Blocks the calling thread for the whole round trip. Must not be called
    /// from an async worker thread; use `spawn_blocking` there.
    fn load_data(&self, payload: &Payload) -> ReaderResult<Vec<Document>>;

    async fn aload_data(&self, payload: &Payload) -> ReaderResult<Vec<Document>>;
}
