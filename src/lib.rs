pub mod demo;
pub mod http_client;
pub mod observer;
pub mod request_executor;
pub mod sum_list;
