use serde_json::{Map, Value};

use crate::http_client::request::Headers;

pub type Payload = Map<String, Value>;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "Rust-POST-Client/1.0";

/// Parameters for one outbound POST. Fields left as `None` fall back to
/// [`default_payload`] and [`default_headers`] when the request is executed.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub url: String,
    pub payload: Option<Payload>,
    pub headers: Option<Headers>,
    pub timeout_seconds: u64,
}

impl RequestSpec {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            payload: None,
            headers: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }
}

pub fn default_payload() -> Payload {
    let mut payload = Payload::new();
    payload.insert(
        "message".to_string(),
        Value::from("Hello from Rust POST client"),
    );
    payload.insert("timestamp".to_string(), Value::from("2024-01-01T00:00:00Z"));
    payload
}

pub fn default_headers() -> Headers {
    Headers::from([
        ("Content-Type", "application/json"),
        ("User-Agent", DEFAULT_USER_AGENT),
    ])
}
