pub mod annotation;
pub mod chunking;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod syllabification;
pub mod tiers;
pub mod types;

pub use annotation::{PhraseSegmenter, SpanSyllableAnnotator, SyllableTierOutput};
pub use config::{PhonologyConfig, PhraseTierOptions, SyllableTierOptions};
pub use error::{SyllabificationFailure, TierError};
pub use pipeline::builder::SpanSyllableAnnotatorBuilder;
pub use pipeline::runtime::{BatchRunner, FailurePolicy};
pub use pipeline::summary::{BatchSummary, FileRecord, FileStatus, SpanStats};
pub use pipeline::traits::{DerivedTier, Syllabifier, TierDeriver};
pub use syllabification::{syllabify, SyllabificationResult};
pub use tiers::{read_utterance, write_utterance, TierSet};
pub use types::{Boundary, PointTier, Segment, Syllable};
