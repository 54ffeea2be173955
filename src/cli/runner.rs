use std::process::ExitCode;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cardcrop::io::discovery::{default_output_dir, strip_path_quotes};
use cardcrop::io::writers::report::write_report_json;
use cardcrop::{BatchParams, BatchReport, ErrorPolicy, TransformParams, process_directory_to_path};

use super::args::CliArgs;
use super::errors::AppError;
use super::platform::PlatformConstraints;

/// How a completed run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// At least one image processed and none failed
    Completed,
    /// No `.jpg` / `.png` files in the input directory
    NoImages,
    /// Some images failed under `--continue-on-error`
    CompletedWithFailures,
}

impl RunStatus {
    /// Process exit status: 0 success, 1 no images, 2 failures.
    pub fn code(self) -> u8 {
        match self {
            RunStatus::Completed => 0,
            RunStatus::NoImages => 1,
            RunStatus::CompletedWithFailures => 2,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }

    fn from_report(report: &BatchReport) -> Self {
        if report.is_empty() {
            RunStatus::NoImages
        } else if report.failed > 0 {
            RunStatus::CompletedWithFailures
        } else {
            RunStatus::Completed
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn batch_params(args: &CliArgs, constraints: &PlatformConstraints) -> Result<BatchParams, AppError> {
    Ok(BatchParams {
        transform: TransformParams::new(args.scale)?.with_filter(args.filter),
        recursive: constraints.resolve_recursive(args.recursive),
        clean_names: args.clean_names,
        error_policy: if args.continue_on_error {
            ErrorPolicy::Continue
        } else {
            ErrorPolicy::Abort
        },
    })
}

fn log_summary(report: &BatchReport) {
    info!("Total processing time: {:.4}s", report.total_seconds);
    if let Some(average) = report.average_seconds() {
        info!("Average file processing time: {:.4}s", average);
    }
    for record in report.files.iter().filter(|r| r.error.is_some()) {
        warn!(
            "Failed: {:?}: {}",
            record.input,
            record.error.as_deref().unwrap_or_default()
        );
    }
}

pub fn run(args: CliArgs) -> Result<RunStatus, AppError> {
    init_logging(args.log);

    let constraints = PlatformConstraints::current();
    let params = batch_params(&args, &constraints)?;

    let input_dir = strip_path_quotes(&args.input_path);
    if !input_dir.is_dir() {
        return Err(AppError::InputNotDirectory { path: input_dir });
    }
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_dir(&input_dir));

    info!("Input directory: {:?}", input_dir);
    info!("Output directory: {:?}", output_dir);
    info!(
        "Scale: {}, filter: {}, recursive: {}, clean names: {}, on error: {}",
        params.transform.scale,
        params.transform.filter,
        params.recursive,
        params.clean_names,
        params.error_policy
    );

    let report = process_directory_to_path(&input_dir, &output_dir, &params)?;
    log_summary(&report);

    if let Some(report_path) = &args.report {
        write_report_json(&report, report_path)?;
    }

    let status = RunStatus::from_report(&report);
    match status {
        RunStatus::NoImages => {
            warn!(
                "There are no .jpg or .png files in directory: {:?}",
                input_dir
            );
        }
        RunStatus::Completed => {
            info!("Process complete. Edited {} images.", report.processed);
        }
        RunStatus::CompletedWithFailures => {
            warn!(
                "Process complete. Edited {} images, {} failed.",
                report.processed, report.failed
            );
        }
    }

    Ok(status)
}
