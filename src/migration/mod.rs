pub mod pacing;
pub mod report;
pub mod runner;
pub mod transform;

pub use pacing::PacingPolicy;
pub use report::{MigrationReport, RecordFailure, RecordOutcome};
pub use runner::MigrationRunner;
pub use transform::TransformError;
