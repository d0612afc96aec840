//! Installed-set filtering
//!
//! Decides whether a declared dependency is already satisfied by an
//! installed package. The match is exact string equality between the
//! declaration and the installed package's source (the part of its
//! `<name>@<source>` identifier after the first `@`). No normalization:
//! a trailing `.git`, scheme, or case difference means "not satisfied",
//! and the dependency is installed again rather than silently dropped.

use crate::domain::PackageDescriptor;

/// Whether some installed package satisfies `dependency`.
pub fn is_satisfied(dependency: &str, installed: &[PackageDescriptor]) -> bool {
    installed
        .iter()
        .any(|package| package.install_source() == Some(dependency))
}

/// Filter a dependency set down to the entries no installed package
/// satisfies, preserving order.
pub fn unmet(declared: Vec<String>, installed: &[PackageDescriptor]) -> Vec<String> {
    declared
        .into_iter()
        .filter(|dependency| !is_satisfied(dependency, installed))
        .collect()
}
