use std::path::{Path, PathBuf};

use crate::error::TierError;
use crate::pipeline::progress::ProgressReporter;
use crate::pipeline::summary::{BatchSummary, FileRecord, FileStatus};
use crate::pipeline::traits::TierDeriver;
use crate::tiers::textgrid_io::{read_utterance, write_utterance};

/// What a file-level error does to the rest of the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure and continue with the next file.
    #[default]
    Isolate,
    /// Stop the batch and return the error.
    FailFast,
}

/// Applies one tier derivation to input files sequentially, in input order.
pub struct BatchRunner<'a> {
    deriver: &'a dyn TierDeriver,
    output_dir: Option<PathBuf>,
    failure_policy: FailurePolicy,
    progress: ProgressReporter,
}

impl<'a> BatchRunner<'a> {
    pub fn new(deriver: &'a dyn TierDeriver) -> Self {
        Self {
            deriver,
            output_dir: None,
            failure_policy: FailurePolicy::default(),
            progress: ProgressReporter::default(),
        }
    }

    /// Without an output directory results are computed but not persisted.
    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    pub fn with_progress(mut self, progress: ProgressReporter) -> Self {
        self.progress = progress;
        self
    }

    pub fn run(&self, inputs: &[PathBuf]) -> Result<BatchSummary, TierError> {
        self.run_with(inputs, |_| {})
    }

    /// Like [`run`](Self::run), calling `on_file` after each file.
    pub fn run_with(
        &self,
        inputs: &[PathBuf],
        mut on_file: impl FnMut(&FileRecord),
    ) -> Result<BatchSummary, TierError> {
        let mut summary = BatchSummary::new(self.deriver.output_tier());
        self.progress.start(inputs.len());

        for (idx, input) in inputs.iter().enumerate() {
            let record = match self.process_file(input) {
                Ok(record) => record,
                Err(err) if self.failure_policy == FailurePolicy::Isolate => {
                    tracing::error!(
                        path = %input.display(),
                        error = %err,
                        "failed to process file; continuing"
                    );
                    FileRecord {
                        input: input.display().to_string(),
                        output: None,
                        status: FileStatus::Failed,
                        stats: Default::default(),
                        error: Some(err.to_string()),
                    }
                }
                Err(err) => return Err(err),
            };
            on_file(&record);
            summary.record(record);
            self.progress.file_done(idx);
        }
        Ok(summary)
    }

    pub fn process_file(&self, input: &Path) -> Result<FileRecord, TierError> {
        let (mut tiers, main) = read_utterance(input, self.deriver.main_tier())?;
        let derived = self.deriver.derive(input, &tiers, &main)?;
        tiers.insert(self.deriver.output_tier(), derived.tier);

        let output = match &self.output_dir {
            Some(dir) => {
                let file_name = input.file_name().ok_or_else(|| {
                    TierError::invalid_input(format!(
                        "input path '{}' has no file name",
                        input.display()
                    ))
                })?;
                let out_path = dir.join(file_name);
                write_utterance(&out_path, &tiers)?;
                Some(out_path)
            }
            None => None,
        };
        tracing::debug!(
            path = %input.display(),
            segments = derived.stats.segments,
            "derived {} tier",
            self.deriver.output_tier()
        );

        Ok(FileRecord {
            input: input.display().to_string(),
            status: if output.is_some() {
                FileStatus::Written
            } else {
                FileStatus::Derived
            },
            output: output.map(|path| path.display().to_string()),
            stats: derived.stats,
            error: None,
        })
    }
}
