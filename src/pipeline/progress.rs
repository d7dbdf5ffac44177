/// Logs run progress: once at the start and after every `batch_size` files.
#[derive(Debug, Clone, Copy)]
pub struct ProgressReporter {
    batch_size: usize,
}

impl ProgressReporter {
    pub const DEFAULT_BATCH_SIZE: usize = 100;

    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    pub fn start(&self, total: usize) {
        tracing::info!(total, "processing {total} input files");
    }

    /// Call after the file at `index` (0-based) is done; returns whether a line was logged.
    pub fn file_done(&self, index: usize) -> bool {
        let done = index + 1;
        if done % self.batch_size != 0 {
            return false;
        }
        tracing::info!(done, "processed {done} files");
        true
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BATCH_SIZE)
    }
}
