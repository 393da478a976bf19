use super::ratio_analyzer::{analyze_text, AnalysisError};
use crate::{
    api::{
        analysis_settings::AnalysisSettings, enums::diagnostic::Diagnostic,
        input_text::InputText, ranked_report::RankedReport, result_record::ResultRecord,
    },
    utilities::compression::CompressionError,
};
use rand::Rng;
use tracing::{info, warn};

/// The outcome of analyzing a batch of texts.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Records of every measured text, ranked by spread.
    pub report: RankedReport,

    /// Texts that could not be measured, in input order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Analyzes and ranks a batch of texts, using fresh randomness for every baseline.
///
/// # Arguments
///
/// * `inputs` - The texts, in input order. This order breaks ties in the ranking.
/// * `settings` - Execution settings.
///
/// # Remarks
///
/// Running this twice on the same texts can yield slightly different spreads,
/// as every run draws new baselines.
pub fn analyze_batch(
    inputs: &[InputText],
    settings: &AnalysisSettings,
) -> Result<BatchOutcome, CompressionError> {
    analyze_batch_with(inputs, settings, |_| rand::thread_rng())
}

/// Analyzes and ranks a batch of texts with a caller supplied randomness source.
///
/// # Arguments
///
/// * `inputs` - The texts, in input order. This order breaks ties in the ranking.
/// * `settings` - Execution settings.
/// * `make_rng` - Creates the randomness source for the text at the given index.
///
/// # Errors
///
/// Empty texts do not fail the batch; they are returned as [`Diagnostic::EmptyInput`].
/// A compressor failure aborts the whole batch.
pub fn analyze_batch_with<R, F>(
    inputs: &[InputText],
    settings: &AnalysisSettings,
    make_rng: F,
) -> Result<BatchOutcome, CompressionError>
where
    R: Rng,
    F: Fn(usize) -> R + Sync,
{
    let results = analyze_all(inputs, settings, &make_rng);

    let mut records: Vec<ResultRecord> = Vec::with_capacity(results.len());
    let mut diagnostics = Vec::new();
    for result in results {
        match result {
            Ok(record) => records.push(record),
            Err(AnalysisError::EmptyInput(source)) => {
                warn!(source = %source, "Skipping empty text");
                diagnostics.push(Diagnostic::EmptyInput { input: source });
            }
            Err(AnalysisError::Compression(error)) => return Err(error),
        }
    }

    info!(
        analyzed = records.len(),
        skipped = diagnostics.len(),
        "Batch analysis complete"
    );

    Ok(BatchOutcome {
        report: RankedReport::rank(records),
        diagnostics,
    })
}

fn analyze_sequential<R, F>(
    inputs: &[InputText],
    make_rng: &F,
) -> Vec<Result<ResultRecord, AnalysisError>>
where
    R: Rng,
    F: Fn(usize) -> R,
{
    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| analyze_text(input, &mut make_rng(index)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn analyze_all<R, F>(
    inputs: &[InputText],
    _settings: &AnalysisSettings,
    make_rng: &F,
) -> Vec<Result<ResultRecord, AnalysisError>>
where
    R: Rng,
    F: Fn(usize) -> R + Sync,
{
    analyze_sequential(inputs, make_rng)
}

/// Results are collected in input order regardless of which worker finishes first.
#[cfg(feature = "parallel")]
fn analyze_all<R, F>(
    inputs: &[InputText],
    settings: &AnalysisSettings,
    make_rng: &F,
) -> Vec<Result<ResultRecord, AnalysisError>>
where
    R: Rng,
    F: Fn(usize) -> R + Sync,
{
    use rayon::prelude::*;

    let num_threads = settings.max_num_threads.get() as usize;
    if num_threads <= 1 || inputs.len() <= 1 {
        return analyze_sequential(inputs, make_rng);
    }

    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads.min(inputs.len()))
        .build()
    {
        Ok(pool) => pool,
        Err(error) => {
            warn!(%error, "Failed to create thread pool, analyzing on the current thread");
            return analyze_sequential(inputs, make_rng);
        }
    };

    pool.install(|| {
        inputs
            .par_iter()
            .enumerate()
            .map(|(index, input)| analyze_text(input, &mut make_rng(index)))
            .collect()
    })
}
