mod cli;
mod config;

use clap::Parser;
use cli::Args;
use license_audit::adapters::outbound::console::StderrProgressReporter;
use license_audit::adapters::outbound::filesystem::{
    DirectoryResourceLocator, FileSystemReader, FileSystemStore,
};
use license_audit::application::use_cases::CheckLicensingUseCase;
use license_audit::licensing::policies::{AuditVerdict, DefaultDislikePolicy};
use license_audit::shared::error::ExitCode;
use license_audit::shared::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;

fn main() {
    let exit_code = match Args::try_parse() {
        Ok(args) => match run(args) {
            Ok(exit_code) => exit_code,
            Err(e) => {
                print_error(&e);
                ExitCode::ApplicationError
            }
        },
        Err(e) => {
            // --help and --version are reported through clap errors too
            let _ = e.print();
            if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            }
        }
    };

    process::exit(exit_code.as_i32());
}

fn run(args: Args) -> Result<ExitCode> {
    // Merge the config file under the command-line options
    let config = match args.config.as_deref() {
        Some(path) => {
            let config = config::load_config_from_path(path)?;
            eprintln!("📄 Loaded config from: {}", path.display());
            Some(config)
        }
        None => {
            let discovered = config::discover_config(Path::new("."))?;
            if discovered.is_some() {
                eprintln!("📄 Auto-discovered config file: {}", config::CONFIG_FILENAME);
            }
            discovered
        }
    };
    let args = match config {
        Some(config) => args.apply_config(config)?,
        None => args,
    };

    if args.skip {
        eprintln!("⏭️  Licensing check skipped");
        return Ok(ExitCode::Success);
    }

    let request = args.to_request()?;

    // Create adapters (Dependency Injection)
    let reader = FileSystemReader::new();
    let store = FileSystemStore::new();
    let resource_locator = DirectoryResourceLocator::new(args.resource_dirs.clone());
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = CheckLicensingUseCase::new(
        reader,
        reader,
        store,
        resource_locator,
        progress_reporter,
        DefaultDislikePolicy,
    );

    // Execute use case
    let response = use_case.execute(&request)?;

    Ok(report_verdict(&response.verdict))
}

fn report_verdict(verdict: &AuditVerdict) -> ExitCode {
    match verdict {
        AuditVerdict::Passed => {
            eprintln!("{}", "✅ Licensing check passed".green().bold());
            ExitCode::Success
        }
        AuditVerdict::Failed { message } => {
            eprintln!("{} {}", "❌ Licensing check failed:".red().bold(), message);
            ExitCode::AuditFailed
        }
    }
}

fn print_error(e: &anyhow::Error) {
    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", e);

    // Display error chain
    for cause in e.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }

    eprintln!();
}
