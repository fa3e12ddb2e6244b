use crate::cli::VerifyArgs;
use crate::config::{AppConfig, PartialAppConfig};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use crate::utils::table;
use helixgen::core::io::json::JsonCandidateFile;
use helixgen::engine::progress::ProgressReporter;
use helixgen::engine::report::VerificationReport;
use helixgen::engine::source::JsonFileSource;
use helixgen::workflows;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::{info, warn};

pub async fn run(args: VerifyArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialAppConfig::from_file(path)?,
        None => PartialAppConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    let source = JsonFileSource::new(&args.input);
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the verification workflow on {:?}...", &args.input);
    let report = tokio::task::block_in_place(|| {
        workflows::verify::run(&config.request, &source, &config.verification, &reporter)
    });
    progress_handler.finish();
    let report = report?;

    if report.accepted.is_empty() {
        warn!("Workflow completed but no proposal passed validation.");
    }

    write_candidates(&args, &config, &report)?;

    eprint!(
        "{}",
        table::render_candidates(&report, &config.request.constraints)
    );
    if !report.all_accepted() {
        if config.output.show_rejections {
            eprintln!("Rejected proposals:");
            eprint!("{}", table::render_rejections(&report));
        } else {
            info!(
                "{} proposal(s) rejected; pass --show-rejections to list them.",
                report.rejected.len()
            );
        }
    }

    Ok(())
}

fn write_candidates(args: &VerifyArgs, config: &AppConfig, report: &VerificationReport) -> Result<()> {
    match &args.output {
        Some(path) => {
            info!(
                "Writing {} verified candidate(s) to {:?}",
                report.accepted.len(),
                path
            );
            let mut writer = BufWriter::new(File::create(path)?);
            JsonCandidateFile::write_candidates_styled(
                &report.accepted,
                &mut writer,
                config.output.style,
            )
            .map_err(|source| CliError::Output {
                target: path.display().to_string(),
                source,
            })?;
            writer.flush()?;
            eprintln!("✓ Verified candidates written to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            JsonCandidateFile::write_candidates_styled(
                &report.accepted,
                &mut handle,
                config.output.style,
            )
            .map_err(|source| CliError::Output {
                target: "standard output".to_string(),
                source,
            })?;
        }
    }
    Ok(())
}
