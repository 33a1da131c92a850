mod config;
mod errors;
mod reader;

pub use config::{
    Credentials, ReaderConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, PASSWORD_ENV, USERNAME_ENV,
};
pub use errors::{ReaderError, ReaderResult};
pub use reader::{Payload, Reader};
