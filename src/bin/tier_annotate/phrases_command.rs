use clap::Args;
use prosody_tiers::{PhraseSegmenter, PhraseTierOptions};

use crate::BatchArgs;

/// Phrases are always derived from the phone tier with the default silence labels.
#[derive(Debug, Args)]
pub struct PhrasesArgs {
    #[command(flatten)]
    batch: BatchArgs,
}

pub fn run(args: PhrasesArgs) -> Result<(), String> {
    let segmenter = PhraseSegmenter::new(PhraseTierOptions::default());
    crate::run_batch(&segmenter, &args.batch, "phrases")
}
