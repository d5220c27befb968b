use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use react_setup::{Config, EslintFlavor};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Set up ESLint, Prettier, Jest and a pre-commit hook in a React project", long_about = None)]
struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(long, env = "REACT_SETUP_DIR")]
    project_dir: Option<PathBuf>,

    /// Package manager used to install dev dependencies
    #[arg(long, env = "REACT_SETUP_PACKAGE_MANAGER", default_value = react_setup::config::DEFAULT_PACKAGE_MANAGER)]
    package_manager: String,

    /// Skip installing dev dependencies
    #[arg(long)]
    skip_install: bool,

    /// Write eslint.config.mjs (flat config) instead of .eslintrc.json
    #[arg(long)]
    flat_eslint: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.project_dir)?;
    config.package_manager = cli.package_manager;
    config.skip_install = cli.skip_install;
    if cli.flat_eslint {
        config.eslint = EslintFlavor::Flat;
    }

    commands::setup::execute(&config)
}
