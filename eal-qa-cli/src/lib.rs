//! Command-line front ends for the QA tools.
//!
//! Both binaries take a single positional parameter file (see
//! [`Parameters`]) and exit with status 1 on a usage error, a fatal
//! configuration problem, or any validation error.
//!
//! ```bash
//! validate-system-output validate.params
//! assessment-qa qa.params
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use eal_qa_validate::Parameters;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub mod assessment;
pub mod validate;

/// Arguments shared by every QA binary.
#[derive(Debug, Parser)]
#[command(version, about = "Event-argument QA tool driven by a parameter file")]
pub struct ParamFileArgs {
    /// Parameter file of `key: value` lines
    pub param_file: PathBuf,
}

/// Install a `fmt` subscriber on stderr; `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load the parameter file named by `args` and log its contents.
pub fn load_parameters(args: &ParamFileArgs) -> Result<Parameters> {
    let params = Parameters::load(&args.param_file)
        .with_context(|| format!("loading parameters from {}", args.param_file.display()))?;
    info!("parameters:\n{}", params.dump());
    Ok(params)
}

/// Parse arguments, run `tool`, and map the result to an exit code.
pub fn run_tool(tool: fn(&Parameters) -> Result<()>) -> ExitCode {
    let args = match ParamFileArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_tracing();

    match load_parameters(&args).and_then(|params| tool(&params)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
