//! # jsonfreeze Bench
//!
//! Sample builders for jsonfreeze performance testing.

pub mod samples;
