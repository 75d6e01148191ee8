mod cli_arguments;

use std::sync::Arc;

use clap::Parser;
use post_client::{
    demo::{run_post_demo, run_sum_demo},
    http_client::reqwest_http_client::ReqwestHttpClient,
    observer::tracing_observer::TracingObserver,
    request_executor::simple_request_executor::SimpleRequestExecutor,
};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli_arguments::{CliArguments, Command};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: CliArguments = CliArguments::parse();

    match args.into_command() {
        Command::Post {
            url,
            timeout_seconds,
        } => {
            info!("=== POST request test ===");

            let executor = SimpleRequestExecutor::new(
                Arc::new(ReqwestHttpClient::default()),
                Arc::new(TracingObserver),
            );

            println!("{}", run_post_demo(&executor, &url, timeout_seconds).await);
        }
        Command::Sum { numbers } => {
            println!("{}", run_sum_demo(&numbers));
        }
    }
}
