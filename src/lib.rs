//! Service Triage — batch classification of free-text service requests.
//!
//! One pass over a JSON batch of raw messages produces three partitions:
//! inspections, incident reports, and unprocessable records. The
//! [`pipeline`] module holds the decision logic; [`io`] and [`cli`] are
//! plumbing around it.

pub mod cli;
pub mod error;
pub mod io;
pub mod pipeline;
