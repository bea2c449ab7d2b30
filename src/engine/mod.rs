//! Review aggregation and filter engine.
//!
//! This module derives display-ready statistics and filtered result
//! sets from a fetched snapshot of review data: per-professor grouping
//! with averages and a most-helpful-review pick, course level buckets,
//! and compound search filters. Every function here is pure and total
//! over in-memory data; no I/O, no errors.

pub mod filter;
pub mod level;
pub mod stats;
pub mod utility;
