//! datadog-configure: Kratix pipeline step rendering Datadog stack manifests.

pub mod app;
pub mod domain;
pub mod services;

pub use app::pipeline::PipelinePaths;
pub use domain::AppError;
pub use domain::{ResolvedStack, StackRequest, Tier, TierFallback};

/// Run the configure pipeline against the given paths.
///
/// Reads the resource request, applies defaults, renders the manifest set,
/// and writes it out. Fatal errors surface as `AppError`; the caller decides
/// the process exit.
pub fn configure(paths: &PipelinePaths) -> Result<(), AppError> {
    app::pipeline::execute(paths)
}
