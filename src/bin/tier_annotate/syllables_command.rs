use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use prosody_tiers::{PhonologyConfig, SpanSyllableAnnotatorBuilder, SyllableTierOptions};

use crate::BatchArgs;

#[derive(Debug, Args)]
pub struct SyllablesArgs {
    /// Whitespace-delimited list of every phone label
    #[arg(long, env = "PROSODY_TIERS_PHONESET", default_value = PhonologyConfig::DEFAULT_PHONESET_PATH)]
    phoneset: PathBuf,
    /// Whitespace-delimited list of vowel labels (a subset of the phone set)
    #[arg(long, env = "PROSODY_TIERS_VOWELS", default_value = PhonologyConfig::DEFAULT_VOWELS_PATH)]
    vowels: PathBuf,
    /// Legal syllable onsets, one hyphen-joined cluster per entry (e.g. s-t-r)
    #[arg(long, env = "PROSODY_TIERS_ONSETS", default_value = PhonologyConfig::DEFAULT_ONSETS_PATH)]
    onsets: PathBuf,
    /// Tier whose intervals are syllabified one at a time
    #[arg(long, default_value = SyllableTierOptions::DEFAULT_SPAN_TIER)]
    span_tier: String,
    /// Name of the tier to add
    #[arg(long, default_value = SyllableTierOptions::DEFAULT_OUTPUT_TIER)]
    output_tier: String,
    /// Label syllables with their phones only, without the span label
    #[arg(long, default_value_t = false)]
    no_span_prefix: bool,
    /// Mark a glottal onset on vowel-initial spans
    #[arg(long, default_value_t = false)]
    glottal_onset: bool,
    #[command(flatten)]
    batch: BatchArgs,
}

pub fn run(args: SyllablesArgs) -> Result<(), String> {
    let phonology = PhonologyConfig::load(&args.phoneset, &args.vowels, &args.onsets)
        .map_err(|err| format!("Failed to load phonology: {err}"))?;

    let annotator = SpanSyllableAnnotatorBuilder::new(Arc::new(phonology))
        .with_span_tier(args.span_tier)
        .with_output_tier(args.output_tier)
        .with_span_prefix(!args.no_span_prefix)
        .with_glottal_onset(args.glottal_onset)
        .build()
        .map_err(|err| format!("Failed to configure syllable tier: {err}"))?;

    crate::run_batch(&annotator, &args.batch, "syllables")
}
