use crate::{
    http_client::request::Headers,
    observer::execution_observer::ExecutionObserver,
    request_executor::{
        error_record::ErrorRecord, request_spec::Payload, response_record::ResponseRecord,
    },
};

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ExecutionObserver for NoopObserver {
    fn on_request(&self, _: &str, _: &Payload, _: &Headers) {}

    fn on_response(&self, _: &ResponseRecord) {}

    fn on_error(&self, _: &ErrorRecord) {}
}
