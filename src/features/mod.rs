//! Feature implementations for pinkink.
//!
//! - Goals with milestones and entry mentions
//! - Writing prompts and saved responses
//! - Writing statistics and the mood calendar

pub mod goals;
pub mod prompts;
pub mod stats;
