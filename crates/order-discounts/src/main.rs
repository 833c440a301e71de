use std::io::{stdin, stdout};

use miette::Result;
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    // stdout carries the result document, logs go to stderr only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_discounts=warn,discounts=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("reading function input");
    discounts::respond(stdin().lock(), stdout().lock())?;
    Ok(())
}
