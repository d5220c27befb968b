//! Manifest module - package.json script entries
//!
//! Merges the lint/format/test scripts and the lint-staged rule into an
//! existing `package.json`, keeping every other key where it was.
//!
//! # Example
//!
//! ```no_run
//! use react_setup::manifest;
//! use std::path::Path;
//!
//! let path = manifest::merge_scripts(Path::new("."))?;
//! println!("updated {}", path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Manifest file name in the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Key holding the staged-file lint rule
pub const LINT_STAGED_KEY: &str = "lint-staged";

/// Scripts set on every run; existing entries with these names are replaced
pub const SCRIPTS: &[(&str, &str)] = &[
    ("lint", "eslint src --fix"),
    ("format", "prettier --write ."),
    ("test", "jest"),
];

/// Staged-file glob and the command lint-staged runs on it
pub const LINT_STAGED_RULE: (&str, &str) = ("*.js", "eslint --fix");

/// Read, merge and rewrite `package.json` under `project_root`
///
/// # Errors
///
/// Fails if the manifest is missing, is not valid JSON, is not a JSON
/// object, or cannot be written back.
pub fn merge_scripts(project_root: &Path) -> Result<PathBuf> {
    internal::merge_scripts(project_root)
}

/// Apply the merge to an in-memory manifest
///
/// `scripts` is shallow-merged (a non-object value is replaced) and
/// `lint-staged` is replaced wholesale.
pub fn apply(manifest: &mut Value) -> Result<()> {
    internal::apply(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_apply_to_empty_object() {
        let mut manifest = json!({});
        apply(&mut manifest).unwrap();

        assert_eq!(
            manifest,
            json!({
                "scripts": {
                    "lint": "eslint src --fix",
                    "format": "prettier --write .",
                    "test": "jest"
                },
                "lint-staged": { "*.js": "eslint --fix" }
            })
        );
    }

    #[test]
    fn test_apply_rejects_non_object() {
        let mut manifest = json!(["not", "a", "manifest"]);
        let err = apply(&mut manifest).unwrap_err();
        assert!(err.to_string().contains("JSON object"));
    }
}
