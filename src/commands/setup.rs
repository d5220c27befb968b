//! Default command: run the whole setup and print a summary

use anyhow::Result;
use colored::Colorize;

use react_setup::bootstrap;
use react_setup::hooks::HookOutcome;
use react_setup::Config;

pub fn execute(config: &Config) -> Result<()> {
    println!(
        "{}",
        "📦 Setting up React project with ESLint, Prettier, Jest, and SCSS..."
            .bold()
            .blue()
    );
    println!("   Project: {}\n", config.project_root.display());

    let report = bootstrap::run(config)?;
    display_summary(&report);

    println!(
        "\n{}",
        "🚀 React project template with coding standards, Jest, and SCSS is ready!"
            .green()
            .bold()
    );
    Ok(())
}

fn display_summary(report: &bootstrap::Report) {
    println!("\n{}", "Summary".bold());
    if report.dependencies_installed {
        println!("  • Dev dependencies installed");
    }
    println!("  • {} config files written", report.config_files.len());
    println!("  • Updated {}", report.manifest.display());
    match &report.hook {
        HookOutcome::Installed(path) => println!("  • Hook: {}", path.display()),
        HookOutcome::Skipped(dir) => {
            println!("  • Hook: skipped ({} missing)", dir.display());
            println!("    💡 Run 'git init' and re-run to install the pre-commit hook");
        }
    }
}
