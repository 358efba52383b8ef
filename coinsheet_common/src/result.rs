//! Result type alias shared across the workspace.
//!
//! Defaults the error type to the common `SheetError`, so functions can simply
//! return `Result<T>`.
use crate::error::SheetError;

/// Workspace-wide `Result` alias with `SheetError` as the default error.
pub type Result<T, E = SheetError> = std::result::Result<T, E>;
