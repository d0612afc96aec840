//! Manifest inspection
//!
//! Reads a package's `package.json` and extracts the `"git-dependencies"`
//! array. The rest of the manifest is opaque to gitdeps, so it is parsed as
//! a generic JSON document rather than a typed structure.

use serde_json::Value;

use crate::domain::PackageDescriptor;
use crate::error::{GitdepsError, Result};

/// Manifest file name, relative to the package root
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Manifest key holding the declared git dependencies
pub const GIT_DEPENDENCIES_KEY: &str = "git-dependencies";

/// Extract the dependencies a package declares in its manifest.
///
/// Returns `Ok(None)` when the manifest has no `"git-dependencies"` key
/// (the common case). A declared empty array yields `Ok(Some(vec![]))`.
/// Declared order is preserved; duplicates are NOT removed here, the
/// resolver deduplicates across the whole batch.
///
/// Array elements are taken as-is: strings verbatim, any other JSON value
/// via its compact rendering. No URL validation is performed.
pub fn declared_dependencies(package: &PackageDescriptor) -> Result<Option<Vec<String>>> {
    let manifest_path = package.path.join(MANIFEST_FILE_NAME);

    let content =
        std::fs::read_to_string(&manifest_path).map_err(|e| GitdepsError::ManifestUnreadable {
            path: manifest_path.display().to_string(),
            reason: e.to_string(),
        })?;

    let document: Value =
        serde_json::from_str(&content).map_err(|e| GitdepsError::ManifestMalformed {
            path: manifest_path.display().to_string(),
            reason: e.to_string(),
        })?;

    let Some(value) = document.get(GIT_DEPENDENCIES_KEY) else {
        return Ok(None);
    };

    let Some(entries) = value.as_array() else {
        return Err(GitdepsError::ManifestMalformed {
            path: manifest_path.display().to_string(),
            reason: format!("'{GIT_DEPENDENCIES_KEY}' is not an array"),
        });
    };

    Ok(Some(entries.iter().map(declaration_string).collect()))
}

fn declaration_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
