use serde::Serialize;

/// Per-span bookkeeping of a tier derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SpanStats {
    pub spans: usize,
    pub spans_syllabified: usize,
    pub spans_out_of_phoneset: usize,
    pub spans_without_nucleus: usize,
    pub spans_failed: usize,
    /// Labeled segments written to the output tier (syllables or phrases).
    pub segments: usize,
}

impl SpanStats {
    pub fn merge(&mut self, other: &SpanStats) {
        self.spans += other.spans;
        self.spans_syllabified += other.spans_syllabified;
        self.spans_out_of_phoneset += other.spans_out_of_phoneset;
        self.spans_without_nucleus += other.spans_without_nucleus;
        self.spans_failed += other.spans_failed;
        self.segments += other.segments;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Derived and written to the output directory.
    Written,
    /// Derived only; no output directory was given.
    Derived,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRecord {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub status: FileStatus,
    pub stats: SpanStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BatchSummary {
    pub output_tier: String,
    pub files_total: usize,
    pub files_written: usize,
    pub files_failed: usize,
    pub totals: SpanStats,
    pub files: Vec<FileRecord>,
}

impl BatchSummary {
    pub fn new(output_tier: impl Into<String>) -> Self {
        Self {
            output_tier: output_tier.into(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, record: FileRecord) {
        self.files_total += 1;
        match record.status {
            FileStatus::Written => self.files_written += 1,
            FileStatus::Failed => self.files_failed += 1,
            FileStatus::Derived => {}
        }
        self.totals.merge(&record.stats);
        self.files.push(record);
    }

    pub fn has_failures(&self) -> bool {
        self.files_failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: FileStatus, segments: usize) -> FileRecord {
        FileRecord {
            input: "utt.TextGrid".to_string(),
            output: None,
            status,
            stats: SpanStats {
                spans: 2,
                segments,
                ..SpanStats::default()
            },
            error: None,
        }
    }

    #[test]
    fn record_updates_counters_and_totals() {
        let mut summary = BatchSummary::new("syllables");
        summary.record(record(FileStatus::Written, 3));
        summary.record(record(FileStatus::Derived, 2));
        summary.record(record(FileStatus::Failed, 0));

        assert_eq!(summary.files_total, 3);
        assert_eq!(summary.files_written, 1);
        assert_eq!(summary.files_failed, 1);
        assert_eq!(summary.totals.spans, 6);
        assert_eq!(summary.totals.segments, 5);
        assert!(summary.has_failures());
    }

    #[test]
    fn serializes_status_lowercase_and_skips_missing_fields() {
        let json = serde_json::to_value(record(FileStatus::Written, 1)).expect("serialize");
        assert_eq!(json["status"], "written");
        assert!(json.get("output").is_none());
        assert!(json.get("error").is_none());
        assert_eq!(json["stats"]["segments"], 1);
    }
}
