//! Sequential setup run: install, configs, manifest, hook
//!
//! Every step runs in order on the calling thread. The first failing step
//! aborts the run and its error is returned unchanged; earlier steps are not
//! rolled back. The only non-fatal condition is a missing `.git/hooks`
//! directory, which is reported as a warning.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::Config;
use crate::configs;
use crate::hooks::{self, HookOutcome};
use crate::installer;
use crate::manifest;

/// What a run changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Whether the package manager ran
    pub dependencies_installed: bool,
    /// Configuration files written, in write order
    pub config_files: Vec<PathBuf>,
    /// The rewritten manifest
    pub manifest: PathBuf,
    pub hook: HookOutcome,
}

/// Run every setup step against `config.project_root`
pub fn run(config: &Config) -> Result<Report> {
    let dependencies_installed = if config.skip_install {
        println!("⏭️  Skipping dependency install");
        false
    } else {
        println!(
            "📦 Installing dev dependencies with {}...",
            config.package_manager.as_str().bold()
        );
        installer::install_dependencies(config)?;
        true
    };

    let config_files = configs::write_all(&config.project_root, config.eslint)?;
    for path in &config_files {
        println!("  {} Wrote {}", "✓".green().bold(), display_name(path));
    }

    let manifest = manifest::merge_scripts(&config.project_root)?;
    println!(
        "  {} Added lint, format and test scripts to {}",
        "✓".green().bold(),
        manifest::MANIFEST_FILE
    );

    let hook = hooks::install_git_hook(&config.hooks_dir(), config.platform)?;
    match &hook {
        HookOutcome::Installed(_) => {
            println!("{} Git pre-commit hook installed successfully!", "✅".green());
        }
        HookOutcome::Skipped(_) => {
            eprintln!(
                "{}",
                "⚠️  Git hooks directory not found. Make sure Git is initialized.".yellow()
            );
        }
    }

    Ok(Report {
        dependencies_installed,
        config_files,
        manifest,
        hook,
    })
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
