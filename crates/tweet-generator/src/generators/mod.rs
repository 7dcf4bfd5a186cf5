//! Individual field generators.
//!
//! Each generator takes the caller's RNG so a single seed drives the whole
//! record.

pub mod name;
pub mod reactions;
pub mod short_id;
pub mod timestamp;
