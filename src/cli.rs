use anyhow::{Context as AnyhowContext, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "fixture-catalog")]
#[command(about = "Discover bundled submodules and normalize manifests in a test fixture", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List submodules bundled inside the fixture's top-level packages
    Submodules(SubmodulesArgs),

    /// Run `composer normalize` over every composer.json under a path
    Normalize(NormalizeArgs),
}

#[derive(ClapArgs, Debug)]
pub struct SubmodulesArgs {
    /// Fixture root directory
    #[arg(long, value_name = "DIR")]
    pub fixture: PathBuf,

    /// YAML file declaring the top-level packages
    #[arg(long, value_name = "FILE")]
    pub packages: PathBuf,

    /// Only list submodules of this top-level package (vendor/project)
    #[arg(long, value_name = "NAME")]
    pub parent: Option<String>,

    /// Output format (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(ClapArgs, Debug)]
pub struct NormalizeArgs {
    /// Directory to search for composer.json files
    #[arg(long, value_name = "DIR")]
    pub path: PathBuf,

    /// Project directory Composer runs from
    #[arg(long, value_name = "DIR")]
    pub project_dir: PathBuf,

    /// Composer binary (defaults to <project-dir>/vendor/bin/composer)
    #[arg(long, value_name = "BIN")]
    pub composer: Option<PathBuf>,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Submodules(args) => {
                validate_dir(&args.fixture)?;
                validate_path(&args.packages)?;
            }
            Command::Normalize(args) => {
                validate_dir(&args.path)?;
                validate_dir(&args.project_dir)?;
            }
        }
        Ok(())
    }
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    std::fs::metadata(path).with_context(|| format!("Cannot read path: {}", path.display()))?;
    Ok(())
}

pub fn validate_dir(path: &Path) -> Result<()> {
    validate_path(path)?;
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }
    Ok(())
}
