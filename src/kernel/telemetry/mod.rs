//! Capture & Cast Telemetry
//!
//! # SAFETY INVARIANT
//! Telemetry is a READ-ONLY side-effect layer.
//! It must **NEVER** be read inside decision logic (capture classification or resolution).
//! It exists solely for observability and verification.
//!
//! Rejected presses are recorded here even though collaborators never hear about them.

pub mod event;
pub mod metrics;
pub mod recorder;
