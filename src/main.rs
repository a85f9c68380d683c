use std::path::PathBuf;

use clap::Parser;
use datadog_configure::{AppError, PipelinePaths};

#[derive(Parser)]
#[command(name = "datadog-configure")]
#[command(version)]
#[command(
    about = "Render Datadog stack manifests for a Kratix resource request",
    long_about = None
)]
struct Cli {
    /// Path to the resource request document
    #[arg(long, default_value = "/kratix/input/object.yaml")]
    input: PathBuf,
    /// Directory receiving the rendered manifests
    #[arg(long, default_value = "/kratix/output")]
    output_dir: PathBuf,
    /// Directory receiving the pipeline status note
    #[arg(long, default_value = "/kratix/metadata")]
    metadata_dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let paths = PipelinePaths {
        input: cli.input,
        output_dir: cli.output_dir,
        metadata_dir: cli.metadata_dir,
    };

    let result: Result<(), AppError> = datadog_configure::configure(&paths);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
