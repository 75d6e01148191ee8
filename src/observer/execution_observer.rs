use crate::{
    http_client::request::Headers,
    request_executor::{
        error_record::ErrorRecord, request_spec::Payload, response_record::ResponseRecord,
    },
};

/// Receives the progress events of a single execution. `on_request` fires
/// once the defaults have been applied; exactly one of `on_response` or
/// `on_error` follows.
#[cfg_attr(test, mockall::automock)]
pub trait ExecutionObserver: Send + Sync {
    fn on_request(&self, url: &str, payload: &Payload, headers: &Headers);
    fn on_response(&self, record: &ResponseRecord);
    fn on_error(&self, error: &ErrorRecord);
}
