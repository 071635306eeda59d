//! Batch processing: turn a flat path list into jobs and run them in order.

use crate::config::ExtractionConfig;
use crate::error::Pdf2TxtError;
use crate::extract::extract;
use crate::output::{BatchReport, JobReport};
use crate::pipeline::source::TextSource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// One (input PDF, output text file) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Pair up `paths` as consecutive `<input> <output>` jobs.
///
/// # Errors
/// [`Pdf2TxtError::InvalidArguments`] when fewer than two paths are given
/// or the count is odd.
pub fn parse_jobs<I, P>(paths: I) -> Result<Vec<Job>, Pdf2TxtError>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();

    if paths.len() < 2 {
        return Err(Pdf2TxtError::InvalidArguments(format!(
            "expected at least one <input> <output> pair, got {} path(s)",
            paths.len()
        )));
    }
    if paths.len() % 2 != 0 {
        return Err(Pdf2TxtError::InvalidArguments(format!(
            "expected <input> <output> pairs, got an odd number of paths ({})",
            paths.len()
        )));
    }

    Ok(paths
        .chunks_exact(2)
        .map(|pair| Job {
            input: pair[0].clone(),
            output: pair[1].clone(),
        })
        .collect())
}

/// Run `jobs` sequentially through [`extract`].
///
/// Stops at the first job whose document cannot be opened or whose output
/// cannot be written. Outputs of jobs that already finished stay on disk;
/// later jobs are not attempted.
pub fn run_batch<S>(
    source: &S,
    jobs: &[Job],
    config: &ExtractionConfig,
) -> Result<BatchReport, Pdf2TxtError>
where
    S: TextSource + ?Sized,
{
    let start = Instant::now();
    if let Some(ref cb) = config.progress_callback {
        cb.on_batch_start(jobs.len());
    }

    let mut report = BatchReport::default();
    for (i, job) in jobs.iter().enumerate() {
        info!(
            "Job {}/{}: {} → {}",
            i + 1,
            jobs.len(),
            job.input.display(),
            job.output.display()
        );
        let stats = extract(source, &job.input, &job.output, config)?;
        report.jobs.push(JobReport {
            input: job.input.clone(),
            output: job.output.clone(),
            stats,
        });
    }

    report.total_duration_ms = start.elapsed().as_millis() as u64;
    Ok(report)
}
