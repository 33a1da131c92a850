mod client;
mod response;

pub use client::OxylabsClient;
pub use response::ApiResponse;
