//! Service layer for packaging orchestration
//!
//! This module sequences the build steps, separating them from the CLI layer
//! in main.rs.

pub mod package;

pub use package::{completion_message, PackageReport, PackageService, Step};
