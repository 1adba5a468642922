use ib_health::cli::{Args, CliCommand};
use ib_health::config::{self, ConfigFile};
use ib_health::prelude::*;
use ib_health::shared::error::ExitCode;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        CliCommand::GenerateMapping {
            output_prefix,
            config,
        } => run_generate_mapping(output_prefix, config),
        CliCommand::Check {
            db,
            no_color,
            config,
        } => run_check(db, no_color, config),
    }
}

/// An explicit --config path must exist; otherwise the working directory
/// is probed and silence means defaults.
fn load_config(explicit: Option<&str>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(Path::new(path)).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}

fn run_generate_mapping(cli_prefix: Option<String>, config_path: Option<String>) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let prefix = config::resolve_output_prefix(cli_prefix, config.as_ref());
    let output_path = PathBuf::from(dated_snapshot_name(&prefix));

    let use_case = GenerateMappingUseCase::new(
        IbNetDiscoverSource::new(),
        CsvMappingStore::new(),
        StderrProgressReporter::new(),
    );
    use_case.execute(GenerateMappingRequest::new(output_path))?;

    Ok(())
}

fn run_check(cli_db: Option<String>, no_color: bool, config_path: Option<String>) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let mapping_path = config::resolve_mapping_file(cli_db, config.as_ref());

    let use_case = CheckFabricUseCase::new(
        IbLinkInfoSource::new(),
        CsvMappingStore::new(),
        StderrProgressReporter::new(),
    );
    let response = use_case.execute(CheckFabricRequest::new(PathBuf::from(mapping_path)))?;

    let renderer = ReportRenderer::new(!no_color);
    let presenter = StdoutPresenter::new();
    presenter.present(&renderer.render(&response.report))?;

    Ok(())
}
