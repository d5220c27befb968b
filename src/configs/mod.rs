//! Static tool configuration documents
//!
//! Each run writes the lint, format and test-runner configuration from a
//! fixed in-memory document. Existing files are replaced, never merged, so
//! repeated runs leave byte-identical files behind.
//!
//! # Example
//!
//! ```no_run
//! use react_setup::configs::{self, ConfigKind};
//! use react_setup::EslintFlavor;
//! use std::path::Path;
//!
//! let written = configs::write_config(Path::new("."), ConfigKind::Format, EslintFlavor::Legacy)?;
//! println!("wrote {}", written.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::EslintFlavor;

/// The configuration documents a setup produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    Lint,
    Format,
    Test,
}

impl ConfigKind {
    /// Every kind, in write order
    pub const ALL: [ConfigKind; 3] = [ConfigKind::Lint, ConfigKind::Format, ConfigKind::Test];

    /// File name relative to the project root
    pub fn file_name(self, eslint: EslintFlavor) -> &'static str {
        match (self, eslint) {
            (ConfigKind::Lint, EslintFlavor::Legacy) => ".eslintrc.json",
            (ConfigKind::Lint, EslintFlavor::Flat) => "eslint.config.mjs",
            (ConfigKind::Format, _) => ".prettierrc",
            (ConfigKind::Test, _) => "jest.config.json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfigKind::Lint => "ESLint",
            ConfigKind::Format => "Prettier",
            ConfigKind::Test => "Jest",
        }
    }
}

/// Render a document to the exact text written to disk
pub fn render(kind: ConfigKind, eslint: EslintFlavor) -> Result<String> {
    internal::render(kind, eslint)
}

/// Write one document under `project_root`, replacing any existing file
///
/// Returns the path written.
pub fn write_config(project_root: &Path, kind: ConfigKind, eslint: EslintFlavor) -> Result<PathBuf> {
    internal::write_config(project_root, kind, eslint)
}

/// Write lint, format and test documents in that order
pub fn write_all(project_root: &Path, eslint: EslintFlavor) -> Result<Vec<PathBuf>> {
    ConfigKind::ALL
        .iter()
        .map(|kind| write_config(project_root, *kind, eslint))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_names() {
        assert_eq!(ConfigKind::Lint.file_name(EslintFlavor::Legacy), ".eslintrc.json");
        assert_eq!(ConfigKind::Lint.file_name(EslintFlavor::Flat), "eslint.config.mjs");
        assert_eq!(ConfigKind::Format.file_name(EslintFlavor::Flat), ".prettierrc");
        assert_eq!(ConfigKind::Test.file_name(EslintFlavor::Legacy), "jest.config.json");
    }

    #[test]
    fn test_write_all_creates_three_files() -> Result<()> {
        let temp = TempDir::new()?;
        let written = write_all(temp.path(), EslintFlavor::Legacy)?;

        assert_eq!(written.len(), 3);
        assert!(temp.path().join(".eslintrc.json").is_file());
        assert!(temp.path().join(".prettierrc").is_file());
        assert!(temp.path().join("jest.config.json").is_file());
        Ok(())
    }

    #[test]
    fn test_rewrite_is_byte_identical() -> Result<()> {
        let temp = TempDir::new()?;
        write_all(temp.path(), EslintFlavor::Legacy)?;
        let first: Vec<Vec<u8>> = ConfigKind::ALL
            .iter()
            .map(|k| fs::read(temp.path().join(k.file_name(EslintFlavor::Legacy))))
            .collect::<std::io::Result<_>>()?;

        write_all(temp.path(), EslintFlavor::Legacy)?;
        let second: Vec<Vec<u8>> = ConfigKind::ALL
            .iter()
            .map(|k| fs::read(temp.path().join(k.file_name(EslintFlavor::Legacy))))
            .collect::<std::io::Result<_>>()?;

        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_hand_edits_are_overwritten() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join(".prettierrc");
        fs::write(&path, "{\n  \"semi\": true,\n  \"tabWidth\": 8\n}")?;

        write_config(temp.path(), ConfigKind::Format, EslintFlavor::Legacy)?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content, render(ConfigKind::Format, EslintFlavor::Legacy)?);
        assert!(!content.contains("tabWidth"));
        Ok(())
    }

    #[test]
    fn test_flat_lint_config() -> Result<()> {
        let temp = TempDir::new()?;
        let path = write_config(temp.path(), ConfigKind::Lint, EslintFlavor::Flat)?;

        assert!(path.ends_with("eslint.config.mjs"));
        assert!(!temp.path().join(".eslintrc.json").exists());
        let content = fs::read_to_string(path)?;
        assert!(content.contains("'react/prop-types': 'off'"));
        Ok(())
    }
}
