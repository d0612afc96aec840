//! Error types and handling for gitdeps
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gitdeps operations
#[derive(Error, Diagnostic, Debug)]
pub enum GitdepsError {
    // Manifest errors
    #[error("Failed to read manifest at '{path}': {reason}")]
    #[diagnostic(
        code(gitdeps::manifest::unreadable),
        help("Check that the package's resolved path contains a readable package.json")
    )]
    ManifestUnreadable { path: String, reason: String },

    #[error("Malformed manifest at '{path}': {reason}")]
    #[diagnostic(
        code(gitdeps::manifest::malformed),
        help("The manifest must be valid JSON and 'git-dependencies' must be an array")
    )]
    ManifestMalformed { path: String, reason: String },

    // Host errors
    #[error("Failed to enumerate installed packages: {reason}")]
    #[diagnostic(code(gitdeps::host::installed_query_failed))]
    InstalledQueryFailed { reason: String },

    #[error("Host rejected the install request: {reason}")]
    #[diagnostic(code(gitdeps::host::submission_failed))]
    SubmissionFailed { reason: String },

    #[error("Dependency installation failed: {message}")]
    #[diagnostic(code(gitdeps::host::installation_failed))]
    InstallationFailed { message: String },

    // Prompt errors
    #[error("Failed to read confirmation: {reason}")]
    #[diagnostic(code(gitdeps::ui::confirmation_failed))]
    ConfirmationFailed { reason: String },
}

/// Result type alias for gitdeps operations
pub type Result<T> = std::result::Result<T, GitdepsError>;
