//! Git pre-commit hook installation

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::log::log_debug;
use crate::platform::Platform;

/// Hook file name inside `.git/hooks`
pub const HOOK_NAME: &str = "pre-commit";

/// Shell hook for POSIX hosts
pub const POSIX_HOOK: &str = "#!/bin/sh
npx eslint src --fix
npx prettier --write .
exit 0
";

/// Batch hook for Windows hosts
pub const WINDOWS_HOOK: &str = "@echo off
npx eslint src --fix
npx prettier --write .
exit /b %errorlevel%
";

/// What the hook step did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// Hook written to this path
    Installed(PathBuf),
    /// No hooks directory, nothing written
    Skipped(PathBuf),
}

/// Hook body for a platform
pub fn hook_script(platform: Platform) -> &'static str {
    if platform.is_windows() {
        WINDOWS_HOOK
    } else {
        POSIX_HOOK
    }
}

/// Write the pre-commit hook into `hooks_dir`
///
/// A missing hooks directory is not an error: the repository simply has no
/// Git metadata yet, so the step is skipped.
pub fn install_git_hook(hooks_dir: &Path, platform: Platform) -> Result<HookOutcome> {
    if !hooks_dir.is_dir() {
        log_debug("hooks", &format!("{} not found", hooks_dir.display()));
        return Ok(HookOutcome::Skipped(hooks_dir.to_path_buf()));
    }

    let hook_path = hooks_dir.join(HOOK_NAME);
    fs::write(&hook_path, hook_script(platform))
        .with_context(|| format!("Failed to write {}", hook_path.display()))?;

    if !platform.is_windows() {
        make_executable(&hook_path)
            .with_context(|| format!("Failed to mark {} executable", hook_path.display()))?;
    }
    log_debug(
        "hooks",
        &format!("installed {} hook at {}", platform.name(), hook_path.display()),
    );

    Ok(HookOutcome::Installed(hook_path))
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
