use url::Url;

/// Raw reply from the scraping API, read once and converted into a document.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub url: Url,
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
