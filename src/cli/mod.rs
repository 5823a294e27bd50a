use std::path::Path;

use anyhow::Result;

pub use args::Arguments;
pub use exit_status::ExitStatus;

use crate::config::Config;
use crate::reporter::ReporterKind;

mod args;
mod exit_status;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let config = Config::load(Path::new("."))?.unwrap_or_default();
    config.validate()?;

    let outcome = run::run(&args, &config)?;

    let reporter = args
        .reporter
        .or(config.reporter)
        .unwrap_or(ReporterKind::Table);
    // Renderers differ in whether they end with a newline; emit exactly one.
    let rendering = reporter.render(&outcome.comments);
    println!("{}", rendering.trim_end_matches('\n'));

    if outcome.skipped > 0 {
        eprintln!(
            "warning: skipped {} file(s) with unsupported extensions",
            outcome.skipped
        );
    }
    if args.verbose {
        eprintln!("scanned {} file(s)", outcome.files_scanned);
    }

    if outcome.comments.is_empty() || args.exit_nicely {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
