//! Service request triage pipeline.
//!
//! One pass over a batch of raw messages:
//! 1. Field coercion — untyped records read defensively
//! 2. Dedup + empty-description skip → unprocessable partition
//! 3. Substring routing → inspection vs. incident report
//! 4. Normalization — lenient date parsing, phone cleanup, priority

pub mod normalize;
pub mod processor;
pub mod types;

pub use processor::MessageProcessor;
pub use types::{IncidentReport, Inspection, Priority, ProcessOutcome, RawMessage, Status};
