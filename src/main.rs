use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use site_assets::application::dto::DerivationProfile;
use site_assets::application::{AuditLinksUseCase, DeriveImagesUseCase};
use site_assets::infrastructure::codec::AvifCodec;
use site_assets::infrastructure::walker::{collect_html_files, collect_sources};
use site_assets::presentation::cli::{
    Cli, Commands, ProgressReporter, build_audit_options, build_profile,
};
use site_assets::telemetry;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    telemetry::init_tracing(cli.log_json, telemetry::level_for(cli.verbose, cli.debug));

    let root = std::fs::canonicalize(&cli.root)
        .with_context(|| format!("Project root not found: {}", cli.root.display()))?;

    match cli.command {
        Commands::CheckLinks {
            site_prefix,
            skip_dirs,
            json,
        } => run_check_links(&root, &site_prefix, skip_dirs, json),
        Commands::DeriveImages {
            profile,
            source_dir,
            targets,
            quality,
            min_width,
            no_min_width,
            jobs,
            speed,
            fail_on_error,
            no_progress,
        } => {
            let profile = build_profile(
                profile,
                source_dir,
                targets,
                quality,
                min_width,
                no_min_width,
                jobs,
                fail_on_error,
            );
            run_derive(&root, profile, AvifCodec::new(speed), !no_progress)
        }
    }
}

fn run_check_links(
    root: &Path,
    site_prefix: &str,
    skip_dirs: Option<Vec<String>>,
    json: bool,
) -> Result<ExitCode> {
    let options = build_audit_options(root, site_prefix, skip_dirs);
    let files = collect_html_files(root, &options.skip_dirs)
        .context("Failed to collect HTML files")?;

    let use_case = AuditLinksUseCase::new(options)?;
    let report = use_case.execute(&files)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.is_clean() {
        println!("{}", report.summary());
    } else {
        for line in report.problem_lines() {
            eprintln!("{line}");
        }
    }

    Ok(report.exit_code())
}

fn run_derive(
    root: &Path,
    profile: DerivationProfile,
    codec: AvifCodec,
    show_progress: bool,
) -> Result<ExitCode> {
    let sources: Vec<PathBuf> =
        collect_sources(root, &profile.source_dir, profile.recursive, &profile.rules)
            .with_context(|| format!("Failed to collect sources for profile {}", profile.name))?;

    let progress = ProgressReporter::for_derivation(sources.len() as u64, show_progress);
    let policy = profile.failure_policy;

    let use_case = DeriveImagesUseCase::new(codec, profile, root);
    let report = use_case.execute(&sources, Some(progress.derivation_callback()))?;
    progress.finish("done");

    println!("{}", report.to_json()?);

    Ok(policy.exit_code(report.failed_count()))
}
