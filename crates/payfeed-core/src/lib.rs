pub mod correction;
pub mod pipeline;
pub mod progress;

pub use correction::apply_correction;
pub use pipeline::{BatchOutcome, ProviderOutput, SkippedRecord, run_batch};
pub use progress::{CollectingSink, NullSink, ProgressEvent, ProgressSink};
