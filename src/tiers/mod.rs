pub mod segment_model;
pub mod textgrid_io;
pub mod tier_set;

pub use segment_model::{decode, decode_filtered, encode, TimeWindow};
pub use textgrid_io::{read_utterance, write_utterance};
pub use tier_set::TierSet;
