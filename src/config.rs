use std::collections::HashSet;
use std::path::Path;

use crate::error::TierError;

/// Label of an interval that carries no annotation.
pub const EMPTY_LABEL: &str = "";
/// Joins the phones of a rendered syllable, and the phones of an onset cluster in the onsets list.
pub const PHONE_JOINER: &str = "-";
/// Joins a span label and its syllable's phones.
pub const SPAN_JOINER: &str = "_";
/// Abstract phone prefixed to a vowel-initial span's first syllable.
pub const GLOTTAL_ONSET: &str = "?";

/// Phone inventory shared read-only by every file of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonologyConfig {
    phoneset: HashSet<String>,
    vowels: HashSet<String>,
    onsets: HashSet<Vec<String>>,
}

impl PhonologyConfig {
    pub const DEFAULT_PHONESET_PATH: &'static str = "etc/phoneset.txt";
    pub const DEFAULT_VOWELS_PATH: &'static str = "etc/vowels.txt";
    pub const DEFAULT_ONSETS_PATH: &'static str = "etc/onsets.txt";

    pub fn new(
        phoneset: HashSet<String>,
        vowels: HashSet<String>,
        onsets: HashSet<Vec<String>>,
    ) -> Result<Self, TierError> {
        let mut stray_vowels = vowels
            .iter()
            .filter(|v| !phoneset.contains(*v))
            .cloned()
            .collect::<Vec<_>>();
        if !stray_vowels.is_empty() {
            stray_vowels.sort();
            return Err(TierError::invalid_input(format!(
                "vowels missing from the phone set: {}",
                stray_vowels.join(" ")
            )));
        }
        if let Some(onset) = onsets
            .iter()
            .find(|onset| onset.iter().any(|ph| !phoneset.contains(ph)))
        {
            return Err(TierError::invalid_input(format!(
                "onset '{}' uses a phone outside the phone set",
                onset.join(PHONE_JOINER)
            )));
        }
        Ok(Self {
            phoneset,
            vowels,
            onsets,
        })
    }

    /// Builds the inventory from list contents: whitespace-delimited phones, vowels and
    /// hyphen-joined onset clusters.
    pub fn from_lists(phoneset: &str, vowels: &str, onsets: &str) -> Result<Self, TierError> {
        Self::new(
            split_list(phoneset).map(str::to_string).collect(),
            split_list(vowels).map(str::to_string).collect(),
            split_list(onsets)
                .map(parse_cluster)
                .filter(|cluster| !cluster.is_empty())
                .collect(),
        )
    }

    pub fn load(phoneset: &Path, vowels: &Path, onsets: &Path) -> Result<Self, TierError> {
        let phoneset =
            std::fs::read_to_string(phoneset).map_err(|e| TierError::io("read phone set", e))?;
        let vowels =
            std::fs::read_to_string(vowels).map_err(|e| TierError::io("read vowel list", e))?;
        let onsets =
            std::fs::read_to_string(onsets).map_err(|e| TierError::io("read onset list", e))?;
        let config = Self::from_lists(&phoneset, &vowels, &onsets)?;
        tracing::info!(
            phones = config.phoneset.len(),
            vowels = config.vowels.len(),
            onsets = config.onsets.len(),
            "loaded phonology"
        );
        Ok(config)
    }

    pub fn contains(&self, phone: &str) -> bool {
        self.phoneset.contains(phone)
    }

    pub fn is_vowel(&self, phone: &str) -> bool {
        self.vowels.contains(phone)
    }

    /// Exact-sequence membership; a prefix or single phone of a declared cluster does not match.
    pub fn is_onset(&self, cluster: &[String]) -> bool {
        self.onsets.contains(cluster)
    }

    pub fn phoneset(&self) -> &HashSet<String> {
        &self.phoneset
    }

    pub fn vowels(&self) -> &HashSet<String> {
        &self.vowels
    }

    pub fn onsets(&self) -> &HashSet<Vec<String>> {
        &self.onsets
    }
}

fn split_list(contents: &str) -> impl Iterator<Item = &str> {
    contents.split_whitespace().filter(|e| !e.is_empty())
}

fn parse_cluster(entry: &str) -> Vec<String> {
    entry
        .trim_matches('-')
        .split(PHONE_JOINER)
        .filter(|ph| !ph.is_empty())
        .map(str::to_string)
        .collect()
}

/// Options of the span-wise syllable tier derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableTierOptions {
    pub span_tier: String,
    pub phone_tier: String,
    pub output_tier: String,
    pub add_glottal_onset: bool,
    pub prefix_span_label: bool,
    /// Span labels that never produce syllables (unlabeled gaps by default).
    pub ignored_span_labels: HashSet<String>,
}

impl SyllableTierOptions {
    pub const DEFAULT_SPAN_TIER: &'static str = "words";
    pub const DEFAULT_PHONE_TIER: &'static str = "phones";
    pub const DEFAULT_OUTPUT_TIER: &'static str = "syllables";
}

impl Default for SyllableTierOptions {
    fn default() -> Self {
        Self {
            span_tier: Self::DEFAULT_SPAN_TIER.to_string(),
            phone_tier: Self::DEFAULT_PHONE_TIER.to_string(),
            output_tier: Self::DEFAULT_OUTPUT_TIER.to_string(),
            add_glottal_onset: false,
            prefix_span_label: true,
            ignored_span_labels: HashSet::from([EMPTY_LABEL.to_string()]),
        }
    }
}

/// Options of the intonational-phrase tier derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseTierOptions {
    pub phone_tier: String,
    pub output_tier: String,
    pub silence_labels: HashSet<String>,
    pub phrase_label: String,
}

impl PhraseTierOptions {
    pub const DEFAULT_PHONE_TIER: &'static str = "phones";
    pub const DEFAULT_OUTPUT_TIER: &'static str = "iphrases";
    pub const DEFAULT_PHRASE_LABEL: &'static str = "IP";
    pub const DEFAULT_SILENCE_LABELS: [&'static str; 3] = ["sp", "sil", EMPTY_LABEL];
}

impl Default for PhraseTierOptions {
    fn default() -> Self {
        Self {
            phone_tier: Self::DEFAULT_PHONE_TIER.to_string(),
            output_tier: Self::DEFAULT_OUTPUT_TIER.to_string(),
            silence_labels: Self::DEFAULT_SILENCE_LABELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            phrase_label: Self::DEFAULT_PHRASE_LABEL.to_string(),
        }
    }
}
