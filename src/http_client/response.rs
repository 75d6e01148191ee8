use crate::http_client::request::Headers;

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: String,
    /// URL the response was served from, after any redirects.
    pub final_url: String,
}
