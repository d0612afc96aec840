//! Host package-manager boundary
//!
//! The resolver never reaches into the host directly; the host hands its
//! capabilities in through [`PackageHost`] when constructing the resolver.
//! Install submissions are fire-and-forget: the host returns an
//! [`InstallTicket`] immediately and the resolver polls it to completion
//! from the host's update loop.

use crate::domain::PackageDescriptor;
use crate::error::Result;

/// Completion state of an asynchronous install request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStatus {
    /// The host is still resolving and installing
    Pending,
    /// All requested dependencies were installed
    Succeeded,
    /// The request failed; terminal, the resolver does not resubmit
    Failed(String),
}

/// Handle to one outstanding install request
pub trait InstallTicket {
    fn status(&self) -> InstallStatus;
}

/// Capabilities the host package manager provides to the resolver
pub trait PackageHost {
    /// Enumerate all currently installed packages.
    ///
    /// Called fresh on every resolution (and again before every deferred
    /// submission) since installation changes the result as a side effect
    /// of this very workflow.
    fn installed_packages(&self) -> Result<Vec<PackageDescriptor>>;

    /// Submit one combined change request: `add` lists dependency
    /// identifiers to install, `remove` identifiers to drop. The resolver
    /// always passes an empty `remove` list; it exists for parity with
    /// host change APIs that take both.
    fn submit_change(&mut self, add: &[String], remove: &[String])
    -> Result<Box<dyn InstallTicket>>;
}
