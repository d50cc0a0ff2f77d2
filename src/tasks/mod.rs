//! Standalone maintenance tasks for the sinkhole catalog.
//!
//! Each task is run via a CLI subcommand as a one-off job, not while the
//! server is handling traffic. The loaders write through the service's
//! trusted insert path and skip request validation.

pub mod export;
pub mod import_csv;
pub mod relocate;
pub mod seed;
