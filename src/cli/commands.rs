//! Download command handler
//!
//! Coordinates validation, directory-context resolution, client
//! construction, and the traversal itself, then reports a summary.

use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use crate::app::{FilesClient, Walker};
use crate::cli::context::DirectoryContext;
use crate::cli::flags::FlagVals;
use crate::cli::progress::ProgressReporter;
use crate::config::Settings;
use crate::constants::files::FAILED_LIST_FILE;
use crate::errors::{ContextError, DownloadError, DownloadResult, Result};

/// Validate the app-name positional before anything else runs
///
/// `args[1]` must exist and must not look like a flag; users who put flags
/// before the app name get told so rather than a confusing parse error.
pub fn validate_app_name(args: &[String]) -> Result<()> {
    match args.get(1) {
        None => Err(ContextError::MissingAppName.into()),
        Some(name) if name.is_empty() => Err(ContextError::MissingAppName.into()),
        Some(name) if name.starts_with('-') => Err(ContextError::AppNameIsFlag.into()),
        Some(_) => Ok(()),
    }
}

/// Handle the download command
///
/// Flags are parsed by the caller so logging can be initialized from the
/// verbosity before any of this runs.
pub async fn handle_download(cwd: &Path, args: &[String], flags: FlagVals) -> Result<()> {
    let start_time = Instant::now();

    validate_app_name(args)?;
    let app_name = args[1].as_str();

    let context = DirectoryContext::resolve(cwd, args);
    info!(
        "Downloading app '{}' instance {} from {} into {}",
        app_name,
        flags.instance,
        context.starting_path,
        context.download_root.display()
    );

    ensure_download_root(&context.download_root, flags.overwrite)?;

    let settings = Settings::load()?;
    let client = FilesClient::new(&settings, app_name, &flags.instance)?;

    let reporter = ProgressReporter::new(flags.verbose);
    let walker = Walker::new(&client, &flags.omit, &reporter);
    let stats = walker
        .run(&context.starting_path, &context.download_root)
        .await?;
    reporter.finish();

    if !stats.failures.is_empty() {
        let report = write_failed_list(&context.download_root, &stats.failures)?;
        warn!("{} downloads failed; see {}", stats.failures.len(), report);
    }

    println!();
    println!("Download Complete!");
    println!("Files Downloaded:    {}", stats.files_written);
    println!("Directories Created: {}", stats.directories_created);
    if stats.entries_skipped > 0 {
        println!("Entries Omitted:     {}", stats.entries_skipped);
    }
    if !stats.failures.is_empty() {
        println!(
            "Failed Downloads:    {} (listed in {})",
            stats.failures.len(),
            FAILED_LIST_FILE
        );
    }
    println!("Time Elapsed:        {:.2?}", start_time.elapsed());

    Ok(())
}

/// Create the download root, refusing an existing non-empty one
///
/// With `--overwrite` the walk proceeds into the existing tree and writes
/// over files in place; nothing is deleted up front.
pub fn ensure_download_root(root: &Path, overwrite: bool) -> DownloadResult<()> {
    if root.exists() && !overwrite {
        let mut entries = std::fs::read_dir(root)?;
        if entries.next().is_some() {
            return Err(DownloadError::TargetExists {
                path: root.display().to_string(),
            });
        }
    }
    std::fs::create_dir_all(root)?;
    Ok(())
}

/// Write the failed-download report into the download root
///
/// Returns the report path for the warning line.
fn write_failed_list(root: &Path, failures: &[(String, String)]) -> DownloadResult<String> {
    let report_path = root.join(FAILED_LIST_FILE);
    let mut contents = String::new();
    for (remote_path, error) in failures {
        contents.push_str(remote_path);
        contents.push_str(": ");
        contents.push_str(error);
        contents.push('\n');
    }
    std::fs::write(&report_path, contents)?;
    Ok(report_path.display().to_string())
}
