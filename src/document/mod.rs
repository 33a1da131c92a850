use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::http::ApiResponse;
use crate::{ReaderError, ReaderResult};

/// A single unit of text handed to the indexing pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            text: text.into(),
        }
    }

    /// Objects and arrays are re-serialized as compact JSON. Any other JSON
    /// value keeps its textual form (strings lose their quotes). Bodies that
    /// are not JSON are taken as UTF-8 text.
    pub fn from_response(response: &ApiResponse) -> ReaderResult<Self> {
        let text = match serde_json::from_slice::<Value>(&response.body) {
            Ok(value @ (Value::Object(_) | Value::Array(_))) => serde_json::to_string(&value)?,
            Ok(Value::String(s)) => s,
            Ok(value) => value.to_string(),
            Err(_) => String::from_utf8(response.body.clone())
                .map_err(|e| ReaderError::DecodingError(e.to_string()))?,
        };

        Ok(Self::new(text))
    }
}
