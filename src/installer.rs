//! Dev-dependency installation through the project's package manager

use anyhow::{bail, Context, Result};
use std::process::{Command, Stdio};

use crate::config::{Config, EslintFlavor};
use crate::log::log_debug;

/// Packages every setup installs
pub const DEV_DEPENDENCIES: &[&str] = &[
    "eslint",
    "prettier",
    "eslint-config-prettier",
    "eslint-plugin-prettier",
    "lint-staged",
    "jest",
    "@testing-library/react",
    "@testing-library/jest-dom",
    "sass",
];

/// Extra packages `eslint.config.mjs` imports
pub const FLAT_ESLINT_DEPENDENCIES: &[&str] = &[
    "@eslint/js",
    "@eslint/eslintrc",
    "eslint-plugin-react",
    "globals",
];

/// Arguments passed to the package manager
pub fn install_args(eslint: EslintFlavor) -> Vec<&'static str> {
    let mut args = vec!["install", "--save-dev"];
    args.extend_from_slice(DEV_DEPENDENCIES);
    if eslint == EslintFlavor::Flat {
        args.extend_from_slice(FLAT_ESLINT_DEPENDENCIES);
    }
    args
}

/// Run the package manager in the project root
///
/// Standard I/O is inherited so the package manager's own progress shows up.
/// Blocks until the child exits; a non-zero exit is an error.
pub fn install_dependencies(config: &Config) -> Result<()> {
    let program = which::which(&config.package_manager).with_context(|| {
        format!(
            "Package manager '{}' not found on PATH",
            config.package_manager
        )
    })?;
    let args = install_args(config.eslint);

    log_debug(
        "installer",
        &format!("{} {} (in {})", program.display(), args.join(" "), config.project_root.display()),
    );

    let status = Command::new(&program)
        .args(&args)
        .current_dir(&config.project_root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to run {}", config.package_manager))?;

    if !status.success() {
        bail!("{} install failed ({})", config.package_manager, status);
    }

    Ok(())
}
