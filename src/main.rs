use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use fixture_catalog::cli::{self, Command, NormalizeArgs, OutputFormat, SubmodulesArgs};
use fixture_catalog::logging::{self, Verbosity};
use fixture_catalog::task::{ComposerNormalizeTask, Task};
use fixture_catalog::{
    Fixture, OsFilesystem, PackageCatalog, SubmoduleManager, Submodules, SystemProcessRunner,
};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    match args.command {
        Command::Submodules(sub) => list_submodules(&sub),
        Command::Normalize(norm) => normalize(&norm),
    }
}

fn list_submodules(args: &SubmodulesArgs) -> Result<()> {
    let submodules = find_submodules(args)
        .with_context(|| format!("Failed to list submodules in {}", args.fixture.display()))?;
    print_submodules(&submodules, args.format)
}

fn find_submodules(args: &SubmodulesArgs) -> fixture_catalog::Result<Submodules> {
    let fixture = Fixture::new(&args.fixture);
    let catalog = PackageCatalog::load(&OsFilesystem, &fixture, &args.packages)?;
    let mut manager = SubmoduleManager::new(OsFilesystem, fixture, &catalog);

    match &args.parent {
        Some(name) => manager.get_by_parent_name(name),
        None => Ok(manager.discover_all()?.clone()),
    }
}

fn print_submodules(submodules: &Submodules, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let packages: Vec<_> = submodules.values().collect();
            println!("{}", serde_json::to_string_pretty(&packages)?);
        }
        OutputFormat::Table => {
            if submodules.is_empty() {
                println!("No submodules found.");
            }
            let width = submodules.keys().map(String::len).max().unwrap_or(0);
            for package in submodules.values() {
                println!("{:width$}  {}", package.name(), package.install_path());
            }
        }
    }
    Ok(())
}

fn normalize(args: &NormalizeArgs) -> Result<()> {
    run_normalize(args).context("One or more composer.json files could not be normalized")
}

fn run_normalize(args: &NormalizeArgs) -> fixture_catalog::Result<()> {
    let mut task = ComposerNormalizeTask::new(OsFilesystem, SystemProcessRunner, &args.project_dir);
    if let Some(composer) = &args.composer {
        task = task.with_composer(composer);
    }
    task.set_path(&args.path);
    task.execute()?;
    Ok(())
}
