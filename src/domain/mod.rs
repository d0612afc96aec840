//! Domain types shared between the host boundary and the resolver.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Snapshot of one package known to the host.
///
/// The host owns and mutates package state; the resolver only reads these
/// per invocation. `source_id` is the host-assigned install-source
/// identifier of the form `<name>@<source>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    /// Package name
    pub name: String,
    /// Install-source identifier (`<name>@<source>`)
    pub source_id: String,
    /// Resolved filesystem location of the package's contents
    pub path: PathBuf,
}

impl PackageDescriptor {
    pub fn new(
        name: impl Into<String>,
        source_id: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            source_id: source_id.into(),
            path: path.into(),
        }
    }

    /// The portion of the install-source identifier after the first `@`,
    /// or `None` for packages installed from the registry (no `@`).
    pub fn install_source(&self) -> Option<&str> {
        self.source_id.split_once('@').map(|(_, source)| source)
    }
}
