//! CLI library components for PayFeed.

pub mod logging;
pub mod report;
