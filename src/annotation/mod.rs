pub mod phrase_tier;
pub mod syllable_tier;

pub use phrase_tier::PhraseSegmenter;
pub use syllable_tier::{SpanSyllableAnnotator, SyllableTierOutput};
