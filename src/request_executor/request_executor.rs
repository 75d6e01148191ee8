use async_trait::async_trait;

use crate::request_executor::{
    error_record::ErrorRecord, request_spec::RequestSpec, response_record::ResponseRecord,
};

/// Sends one POST described by a [`RequestSpec`] and reports exactly one
/// outcome. Implementations never panic on transport failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, spec: RequestSpec) -> Result<ResponseRecord, ErrorRecord>;
}
