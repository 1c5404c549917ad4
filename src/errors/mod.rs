//! Diagnostics for the front end.
//!
//! This module defines the process-wide error handler shared by every
//! pipeline stage. It includes:
//!
//! - Diagnostic structures with source location information
//! - Specific diagnostic variants for each compilation phase
//! - Severity levels (ERROR gates the pipeline, WARN does not)
//! - The fail-fast exit gate used by the driver between stages

pub mod errors;
