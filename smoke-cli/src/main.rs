use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use verifier::hosts::wasmtime_host::WasmtimeHost;
use verifier::{verify_all, SmokeCheck, Variant};

#[derive(Parser, Debug)]
#[command(
    name = "smoke-cli",
    about = "Smoke-check wasm-bindgen artifacts across target variants."
)]
struct Args {
    /// Directory containing the compiled artifacts
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Restrict the run to specific variants (repeatable; default: all)
    #[arg(long = "variant", value_name = "NAME")]
    variants: Vec<Variant>,

    /// Exported function to call
    #[arg(long, default_value = "double")]
    export: String,

    /// Argument passed to the export
    #[arg(long, default_value_t = 2)]
    input: i32,

    /// Return value the export must produce
    #[arg(long, default_value_t = 4)]
    expected: i32,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let variants: Vec<Variant> = if args.variants.is_empty() {
        Variant::ALL.to_vec()
    } else {
        args.variants.clone()
    };
    let check = SmokeCheck {
        export: args.export.clone(),
        input: args.input,
        expected: args.expected,
    };

    let host = match WasmtimeHost::new() {
        Ok(host) => Arc::new(host),
        Err(err) => {
            error!("failed to initialize wasm host: {err}");
            return ExitCode::FAILURE;
        }
    };

    let results = verify_all(host, &args.dir, &variants, &check).await;

    let mut failed = 0usize;
    for (variant, outcome) in &results {
        match outcome {
            Ok(report) => {
                info!(%variant, path = %report.path.display(), bytes = report.len, "smoke check passed")
            }
            Err(err) => {
                failed += 1;
                error!(%variant, "smoke check failed: {err}");
            }
        }
    }

    if failed == 0 {
        info!(variants = results.len(), "all smoke checks passed");
        ExitCode::SUCCESS
    } else {
        error!("{failed} of {} variants failed", results.len());
        ExitCode::FAILURE
    }
}
