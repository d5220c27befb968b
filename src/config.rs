use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::platform::Platform;

/// Package manager used when none is configured
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Which ESLint configuration format to write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EslintFlavor {
    /// `.eslintrc.json`
    #[default]
    Legacy,
    /// `eslint.config.mjs`
    Flat,
}

/// Configuration for a setup run
#[derive(Debug, Clone)]
pub struct Config {
    /// Front-end project root (where package.json lives)
    pub project_root: PathBuf,
    /// Package manager binary, resolved on PATH before use
    pub package_manager: String,
    /// Skip the dependency install step
    pub skip_install: bool,
    /// ESLint configuration format
    pub eslint: EslintFlavor,
    /// Selects the pre-commit hook body
    pub platform: Platform,
}

impl Config {
    /// Defaults for a given project root, without touching the filesystem
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
            skip_install: false,
            eslint: EslintFlavor::default(),
            platform: Platform::current(),
        }
    }

    /// Load configuration
    ///
    /// Falls back to the current directory when no project directory is given.
    /// The root must be an existing directory.
    pub fn load(project_dir: Option<PathBuf>) -> Result<Self> {
        let project_root = match project_dir {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to resolve current directory")?,
        };

        if !project_root.is_dir() {
            bail!(
                "Project directory does not exist: {}",
                project_root.display()
            );
        }

        Ok(Self::new(project_root))
    }

    /// Path of the project manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.project_root.join(crate::manifest::MANIFEST_FILE)
    }

    /// Directory Git reads hooks from
    pub fn hooks_dir(&self) -> PathBuf {
        hooks_dir(&self.project_root)
    }
}

/// `.git/hooks` under a project root
pub fn hooks_dir(project_root: &Path) -> PathBuf {
    project_root.join(".git").join("hooks")
}
