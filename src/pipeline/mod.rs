// Sequential cleaning pipeline: load, normalize, quality diagnostics.

pub mod loader;
pub mod normalize;
pub mod quality;
pub mod runner;

pub use normalize::WorkingCopy;
pub use runner::PipelineOutcome;
