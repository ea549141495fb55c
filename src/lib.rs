//! Timeweave library.
//!
//! Exposes the board representation, the location-selection eligibility
//! engine, and the host protocol for use by integration tests and the
//! binary entry point.

pub mod board;
pub mod engine;
pub mod protocol;
pub mod select;
