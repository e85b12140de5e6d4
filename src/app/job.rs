// linesift - app/job.rs
//
// A single filter run: resolves which two files to use, owns both handles
// for the duration of the pass, and releases them on every exit path.

use crate::core::filter;
use crate::core::model::FilterSummary;
use crate::platform::config::AppConfig;
use crate::platform::fs;
use crate::util::error::Result;
use std::path::PathBuf;
use std::time::Instant;

/// The two paths one run operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl FilterJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Build a job from CLI overrides, falling back to the validated config
    /// (which itself falls back to the built-in defaults).
    pub fn resolve(input: Option<PathBuf>, output: Option<PathBuf>, config: &AppConfig) -> Self {
        Self {
            input: input.unwrap_or_else(|| config.input.clone()),
            output: output.unwrap_or_else(|| config.output.clone()),
        }
    }
}

/// Run the filter described by `job`.
///
/// The input is opened before the output is created, so a missing or
/// unreadable input never truncates an existing output file. Both handles
/// are owned by this call and closed when it returns, whether it succeeds
/// or fails; the output is flushed explicitly so a flush failure is
/// reported instead of being swallowed on drop.
///
/// Input and output must be different files: creating the output would
/// truncate the input before it is read. Naming the same file twice fails
/// with `FileAccessError::CreateOutput` and leaves the file untouched.
pub fn run_filter(job: &FilterJob) -> Result<FilterSummary> {
    let started = Instant::now();
    tracing::info!(
        input = %job.input.display(),
        output = %job.output.display(),
        "Filter started"
    );

    let reader = fs::open_input(&job.input)?;
    fs::ensure_distinct_output(&job.input, &job.output)?;
    let writer = fs::create_output(&job.output)?;

    let result = filter::filter_lines(reader, writer, &job.input, &job.output);

    match &result {
        Ok(summary) => tracing::info!(
            lines_read = summary.lines_read,
            lines_kept = summary.lines_kept,
            lines_dropped = summary.lines_dropped,
            bytes_written = summary.bytes_written,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Filter complete"
        ),
        Err(e) => tracing::warn!(
            path = %e.path().display(),
            error = %e,
            "Filter aborted; output may be incomplete"
        ),
    }

    result
}
