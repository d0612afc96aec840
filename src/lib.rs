//! Gitdeps - git dependency resolution for host package managers
//!
//! When a host package manager reports newly registered packages, gitdeps
//! inspects each package's manifest for a `"git-dependencies"` list,
//! filters out dependencies already satisfied by an installed package, and
//! drives the installation of the rest through the host, with user
//! confirmation and a progress indicator.
//!
//! The host plugs in through two seams: the [`PackageHost`] trait
//! (installed-package enumeration and install submission) and a recurring
//! call to [`DependencyResolver::poll`] from its update loop, which tracks
//! the asynchronous installation to completion.

pub mod domain;
pub mod error;
pub mod host;
pub mod installed;
pub mod manifest;
pub mod resolver;
pub mod ui;

pub use domain::PackageDescriptor;
pub use error::{GitdepsError, Result};
pub use host::{InstallStatus, InstallTicket, PackageHost};
pub use resolver::{DependencyResolver, Resolution, ResolverOptions};
pub use ui::ConfirmationGate;
