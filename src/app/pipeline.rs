//! Pipeline orchestration: read the request, render the manifest set, write
//! it out. Strictly sequential; the first fatal error halts the run.

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::app::render;
use crate::domain::{AppError, ResolvedStack, StackRequest};
use crate::services::{ManifestWriter, preset_assets};

/// Filesystem locations the pipeline reads from and writes to.
///
/// Defaults to the fixed Kratix container paths; overridable for tests.
pub struct PipelinePaths {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub metadata_dir: PathBuf,
}

/// Run the configure pipeline end to end.
pub fn execute(paths: &PipelinePaths) -> Result<(), AppError> {
    println!("=== Kratix Datadog Pipeline ===");
    println!("Workflow: {}", env::var("KRATIX_WORKFLOW_ACTION").unwrap_or_default());

    let input = fs::read_to_string(&paths.input)
        .map_err(|source| AppError::InputRead { path: paths.input.clone(), source })?;
    let request: StackRequest = serde_yaml::from_str(&input)?;

    let (stack, tier_fallback) = ResolvedStack::from_request(&request);
    if let Some(fallback) = &tier_fallback {
        eprintln!("WARNING: Unknown tier '{}', defaulting to minimal", fallback.requested);
    }

    println!("Resource: {}", stack.name);
    println!("Tier: {}", stack.tier.as_str());
    println!("Environment: {}", stack.environment);
    println!("Cluster: {}", stack.cluster_name);

    let tier_values = preset_assets::tier_values(stack.tier)?;
    println!("Using values: {}", stack.tier.values_filename());

    let writer = ManifestWriter::new(&paths.output_dir, &paths.metadata_dir);

    writer.write_manifest("namespace.yaml", &render::namespace(&stack))?;
    writer.write_manifest("helm-repository.yaml", &render::helm_repository(&stack))?;
    writer.write_manifest("helm-release.yaml", &render::helm_release(&stack, tier_values))?;
    writer.write_manifest("external-secret.yaml", &render::external_secret(&stack))?;

    // Status is advisory; a failed write must not fail the run.
    if let Err(err) = writer.write_metadata("status.yaml", &render::status(&stack)) {
        eprintln!("WARNING: Failed to write status: {}", err);
    }

    println!("=== Pipeline Complete ===");
    Ok(())
}
