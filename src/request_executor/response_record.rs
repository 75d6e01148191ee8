use serde::Serialize;
use serde_json::Value;

use crate::http_client::{request::Headers, response::Response};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseRecord {
    pub status_code: u16,
    pub headers: Headers,
    pub raw_body: String,
    pub final_url: String,
    /// `None` when `raw_body` is not a JSON document.
    pub parsed_json: Option<Value>,
}

impl From<Response> for ResponseRecord {
    fn from(response: Response) -> Self {
        let parsed_json = serde_json::from_str(&response.body).ok();

        Self {
            status_code: response.status,
            headers: response.headers,
            raw_body: response.body,
            final_url: response.final_url,
            parsed_json,
        }
    }
}
