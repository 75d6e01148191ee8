use clap::{Parser, Subcommand};
use post_client::{
    demo::{DEMO_NUMBERS, DEMO_URL},
    request_executor::request_spec::DEFAULT_TIMEOUT_SECONDS,
};

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub(crate) struct CliArguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub(crate) enum Command {
    /// Send the demo POST request and print the outcome
    Post {
        #[arg(short, long, default_value = DEMO_URL)]
        url: String,

        #[arg(
            short,
            long,
            default_value_t = DEFAULT_TIMEOUT_SECONDS,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        timeout_seconds: u64,
    },
    /// Sum a list of numbers
    Sum {
        #[arg(default_values_t = DEMO_NUMBERS, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
}

impl CliArguments {
    /// Running without a subcommand is the same as `post` with its defaults.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or_else(|| Command::Post {
            url: DEMO_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        })
    }
}
