pub mod function;
pub mod output;
#[cfg(feature = "runner")]
pub mod runner;

#[cfg(feature = "runner")]
use clap::Parser;
#[cfg(feature = "runner")]
use config::File;
use miette::Diagnostic;
#[cfg(feature = "runner")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "runner")]
use std::path::PathBuf;
use thiserror::Error;

pub use function::{parse_input, respond, run, write_output};
pub use output::{DiscountApplicationStrategy, FunctionResult};
#[cfg(feature = "runner")]
pub use runner::FunctionRunner;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("function input is not valid JSON")]
    #[diagnostic(
        code(discounts::parse),
        help("the function expects a single UTF-8 encoded JSON object on stdin")
    )]
    Parse(#[source] serde_json::Error),

    #[error("function input must be a JSON object, found {found}")]
    #[diagnostic(code(discounts::not_an_object))]
    NotAnObject { found: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "runner")]
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[cfg(feature = "runner")]
    #[error(transparent)]
    WasmTime(#[from] wasmtime::Error),

    #[cfg(feature = "runner")]
    #[error("function exited with code {code}")]
    #[diagnostic(code(discounts::function_exit))]
    FunctionExit { code: i32 },

    #[cfg(feature = "runner")]
    #[error("function output is not a discount result")]
    #[diagnostic(code(discounts::invalid_output))]
    InvalidOutput(#[source] serde_json::Error),

    #[error("{0}")]
    ErrorValue(String),
}

pub type Result<T> = miette::Result<T, Error>;

#[cfg(feature = "runner")]
const DEFAULT_CONFIG_FILE: &str = "/etc/discounts.yaml";

#[cfg(feature = "runner")]
#[derive(Parser, Clone, Debug)]
pub struct Args {
    /// JSON input file, stdin when omitted
    pub input: Option<PathBuf>,

    /// compiled function module (.wasm or .wat)
    #[arg(long, short)]
    pub function: Option<String>,

    #[arg(long, short)]
    pub config: Option<String>,
}

#[cfg(feature = "runner")]
#[derive(Deserialize, Serialize, Debug)]
pub struct Config {
    pub function: FunctionConfig,
}

#[cfg(feature = "runner")]
#[derive(Deserialize, Serialize, Debug)]
pub struct FunctionConfig {
    pub path: PathBuf,
}

#[cfg(feature = "runner")]
pub fn load_config(args: &Args) -> Result<Config> {
    let file = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_FILE);
    let cfg = config::Config::builder()
        .add_source(File::with_name(file).required(false))
        .set_override_option("function.path", args.function.clone())?
        .build()?;

    Ok(cfg.try_deserialize()?)
}
