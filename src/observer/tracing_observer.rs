use tracing::{error, info};

use crate::{
    http_client::request::Headers,
    observer::execution_observer::ExecutionObserver,
    request_executor::{
        error_record::ErrorRecord, request_spec::Payload, response_record::ResponseRecord,
    },
};

pub const BODY_PREVIEW_CHARS: usize = 200;

/// Writes execution progress to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ExecutionObserver for TracingObserver {
    fn on_request(&self, url: &str, payload: &Payload, headers: &Headers) {
        info!("Sending POST request to {}", url);
        info!("Payload: {}", to_pretty_json(payload));
        info!("Headers: {}", to_pretty_json(headers));
    }

    fn on_response(&self, record: &ResponseRecord) {
        info!(
            status = record.status_code,
            final_url = %record.final_url,
            "Response received"
        );
        info!("Body: {}", body_preview(&record.raw_body, BODY_PREVIEW_CHARS));
    }

    fn on_error(&self, error: &ErrorRecord) {
        error!(kind = ?error.kind, "{}", error.message);
    }
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unprintable: {e}>"))
}

/// First `limit` characters of `body`, with `...` appended when cut.
pub fn body_preview(body: &str, limit: usize) -> String {
    match body.char_indices().nth(limit) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
