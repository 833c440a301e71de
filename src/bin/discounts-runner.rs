use std::fs::File;
use std::io::{stdin, stdout, BufReader};

use clap::Parser;
use discounts::*;
use miette::IntoDiagnostic;
use tracing_subscriber::prelude::*;

fn main() -> miette::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "discounts=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    let args = Args::parse();
    let cfg = load_config(&args)?;

    let input: serde_json::Value = match &args.input {
        Some(path) => {
            serde_json::from_reader(BufReader::new(File::open(path).into_diagnostic()?))
                .into_diagnostic()?
        }
        None => serde_json::from_reader(stdin()).into_diagnostic()?,
    };

    let runner = FunctionRunner::new();
    let module = runner.load(&cfg.function.path)?;
    let result = runner.run(&module, &input)?;
    tracing::info!(
        discounts = result.discounts.len(),
        "function returned a discount result"
    );
    write_output(stdout().lock(), &result)?;
    Ok(())
}
