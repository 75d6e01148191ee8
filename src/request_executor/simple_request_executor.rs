use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use bytes::Bytes;

use crate::{
    http_client::{
        http_client::HttpClient, reqwest_http_client::ReqwestHttpClient, request::Request,
    },
    observer::{execution_observer::ExecutionObserver, noop_observer::NoopObserver},
    request_executor::{
        error_record::ErrorRecord,
        request_executor::RequestExecutor,
        request_spec::{RequestSpec, default_headers, default_payload},
        response_record::ResponseRecord,
    },
};

#[derive(Clone)]
pub struct SimpleRequestExecutor {
    http_client: Arc<dyn HttpClient>,
    observer: Arc<dyn ExecutionObserver>,
}

impl SimpleRequestExecutor {
    pub fn new(http_client: Arc<dyn HttpClient>, observer: Arc<dyn ExecutionObserver>) -> Self {
        Self {
            http_client,
            observer,
        }
    }

    async fn send(&self, spec: RequestSpec) -> Result<ResponseRecord, ErrorRecord> {
        let RequestSpec {
            url,
            payload,
            headers,
            timeout_seconds,
        } = spec;

        if timeout_seconds == 0 {
            return Err(ErrorRecord::unexpected(
                "timeout must be a positive number of seconds",
            ));
        }

        let payload = payload.unwrap_or_else(default_payload);
        let headers = headers.unwrap_or_else(default_headers);

        self.observer.on_request(&url, &payload, &headers);

        // Content-Type is left as given; the body is JSON regardless.
        let body = serde_json::to_vec(&payload).map_err(ErrorRecord::unexpected)?;

        let response = self
            .http_client
            .post(Request {
                url,
                headers,
                body: Bytes::from(body),
                timeout: Duration::from_secs(timeout_seconds),
            })
            .await?;

        Ok(ResponseRecord::from(response))
    }
}

impl Default for SimpleRequestExecutor {
    fn default() -> Self {
        Self::new(
            Arc::new(ReqwestHttpClient::default()),
            Arc::new(NoopObserver),
        )
    }
}

#[async_trait]
impl RequestExecutor for SimpleRequestExecutor {
    async fn execute(&self, spec: RequestSpec) -> Result<ResponseRecord, ErrorRecord> {
        let outcome = self.send(spec).await;

        match &outcome {
            Ok(record) => self.observer.on_response(record),
            Err(error) => self.observer.on_error(error),
        }

        outcome
    }
}
