pub mod error;
pub mod stack;

pub use error::AppError;
pub use stack::{ResolvedStack, StackMetadata, StackRequest, StackSpec, Tier, TierFallback};
