use argh::FromArgs;
use book_randomness::{
    prelude::*,
    utilities::{
        io::file_finder::load_texts,
        report::csv_writer::{write_csv, write_diagnostics},
    },
};
use bytesize::ByteSize;
use core::num::NonZeroU32;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Makes grand but generally rubbish claims about the randomness of books.
///
/// Prints a CSV ranking of every file in the folder, by how much better the
/// file compresses than random text of the same length.
#[derive(FromArgs, Debug)]
pub struct Args {
    /// folder containing books, in plaintext, to "analyze"
    #[argh(option, short = 'f')]
    folder: PathBuf,

    /// maximum number of threads to analyze with (default: number of physical cores)
    #[argh(option, short = 't')]
    threads: Option<u32>,

    /// log level: trace, debug, info, warn or error (default: error)
    #[argh(option, default = "String::from(\"error\")")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();
    init_logging(&args.log_level)?;

    // Validate arguments
    if !args.folder.exists() {
        return Err("Input folder does not exist".into());
    }

    if !args.folder.is_dir() {
        return Err("Input path must be a folder".into());
    }

    let mut settings = AnalysisSettings::new();
    if let Some(threads) = args.threads {
        settings.max_num_threads =
            NonZeroU32::new(threads).ok_or("Thread count must be at least 1")?;
    }
    settings.sanitize();

    let (texts, mut diagnostics) = load_texts(&args.folder)?;
    let total_size: u64 = texts.iter().map(|t| t.text().len() as u64).sum();
    info!(
        "Found {} texts in {}, total size: {}",
        texts.len(),
        args.folder.display(),
        ByteSize(total_size)
    );

    let outcome = analyze_batch(&texts, &settings)?;
    diagnostics.extend(outcome.diagnostics);

    write_diagnostics(&diagnostics, std::io::stderr().lock())?;
    write_csv(&outcome.report, std::io::stdout().lock())?;
    Ok(())
}

/// Logs go to stderr, so stdout only carries the report.
fn init_logging(log_level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => return Err(format!("Unknown log level '{}'", log_level).into()),
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
