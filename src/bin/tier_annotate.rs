use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use prosody_tiers::{BatchRunner, BatchSummary, FailurePolicy, TierDeriver};

#[path = "tier_annotate/chunk_command.rs"]
mod chunk_command;
#[path = "tier_annotate/phrases_command.rs"]
mod phrases_command;
#[path = "tier_annotate/summary_formatter.rs"]
mod summary_formatter;
#[path = "tier_annotate/syllables_command.rs"]
mod syllables_command;

#[derive(Debug, Parser)]
#[command(name = "tier_annotate")]
#[command(about = "Derive syllable and intonational-phrase tiers from aligned TextGrids")]
struct Cli {
    /// Verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a syllable tier, syllabifying every span (word) of a span tier
    Syllables(syllables_command::SyllablesArgs),
    /// Add an intonational-phrase tier grouping non-silence phones
    Phrases(phrases_command::PhrasesArgs),
    /// Slice a recording into one WAV file per labeled interval of a tier
    Chunk(chunk_command::ChunkArgs),
}

/// Options shared by the tier-deriving subcommands.
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Directory for the annotated TextGrids; without it results are computed but not written
    #[arg(long, visible_alias = "outdir", env = "PROSODY_TIERS_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,
    /// Stop at the first file that cannot be read or written
    #[arg(long, env = "PROSODY_TIERS_FAIL_FAST", default_value_t = false)]
    fail_fast: bool,
    /// Write a JSON summary of the run to this path
    #[arg(long, env = "PROSODY_TIERS_SUMMARY_JSON")]
    summary_json: Option<PathBuf>,
    /// Show a progress bar
    #[arg(long, default_value_t = false)]
    progress: bool,
    /// Input TextGrid files
    #[arg(required = true, num_args = 1..)]
    input_files: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Syllables(args) => syllables_command::run(args),
        Command::Phrases(args) => phrases_command::run(args),
        Command::Chunk(args) => chunk_command::run(args),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Runs `deriver` over the batch's input files and reports the outcome.
pub fn run_batch(deriver: &dyn TierDeriver, batch: &BatchArgs, command: &str) -> Result<(), String> {
    for input in &batch.input_files {
        require_path_exists(input)?;
    }

    let policy = if batch.fail_fast {
        FailurePolicy::FailFast
    } else {
        FailurePolicy::Isolate
    };
    let runner = BatchRunner::new(deriver)
        .with_output_dir(batch.output_dir.clone())
        .with_failure_policy(policy);

    let progress = if batch.progress {
        let bar = ProgressBar::new(batch.input_files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta}) {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let summary = runner
        .run_with(&batch.input_files, |record| {
            progress.set_message(record.input.clone());
            progress.inc(1);
        })
        .map_err(|err| format!("{command}: {err}"))?;
    progress.finish_with_message(format!("{command} pass complete"));

    report(&summary, batch, command)
}

fn report(summary: &BatchSummary, batch: &BatchArgs, command: &str) -> Result<(), String> {
    tracing::info!(
        files = summary.files_total,
        written = summary.files_written,
        failed = summary.files_failed,
        segments = summary.totals.segments,
        spans_failed = summary.totals.spans_failed,
        "{command}: done"
    );
    if let Some(path) = batch.summary_json.as_ref() {
        summary_formatter::write_summary(path, command, summary)?;
        println!("{}", path.display());
    }
    if summary.has_failures() {
        return Err(format!(
            "{command}: {} of {} file(s) failed",
            summary.files_failed, summary.files_total
        ));
    }
    Ok(())
}

fn require_path_exists(path: &Path) -> Result<(), String> {
    if path.exists() {
        Ok(())
    } else {
        Err(format!("Input file '{}' does not exist.", path.display()))
    }
}
