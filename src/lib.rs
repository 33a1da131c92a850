pub mod core;
pub mod document;
pub mod http;
pub mod readers;

pub use core::{Credentials, Payload, Reader, ReaderConfig, ReaderError, ReaderResult};
pub use document::Document;
pub use http::{ApiResponse, OxylabsClient};
pub use readers::{OxylabsReader, OxylabsWebReader};
