pub mod error_record;
pub mod request_executor;
pub mod request_spec;
pub mod response_record;
pub mod simple_request_executor;
