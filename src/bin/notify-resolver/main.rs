#![deny(clippy::all, clippy::nursery)]
#![deny(nonstandard_style, rust_2018_idioms)]

use lambda_runtime::{service_fn, Error, LambdaEvent};
use std::io::{self, Write};
use tracing::{debug, info};

mod config;
mod event;
use config::Config;
use event::Event;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        // CloudWatch adds the ingestion time
        .without_time()
        .with_target(false)
        .init();

    info!(
        "Starting {}",
        config.function_name.as_deref().unwrap_or("notify-resolver")
    );

    lambda_runtime::run(service_fn(handler)).await
}

async fn handler(event: LambdaEvent<Event>) -> Result<Event, Error> {
    echo(event, &mut io::stdout().lock())
}

// Print the notification line regardless of LOG_LEVEL and return the event as-is
fn echo<W: Write>(event: LambdaEvent<Event>, out: &mut W) -> Result<Event, Error> {
    let LambdaEvent { payload, context } = event;

    debug!("Got request {}", context.request_id);
    writeln!(out, "{}", payload)?;

    Ok(payload)
}
