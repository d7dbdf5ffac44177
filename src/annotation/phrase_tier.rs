use std::path::Path;

use crate::config::{PhraseTierOptions, EMPTY_LABEL};
use crate::error::TierError;
use crate::pipeline::summary::SpanStats;
use crate::pipeline::traits::{DerivedTier, TierDeriver};
use crate::tiers::segment_model::{decode, encode};
use crate::tiers::tier_set::TierSet;
use crate::types::{PointTier, Segment};

/// Groups runs of non-silence phones into intonational phrases.
#[derive(Debug, Clone, Default)]
pub struct PhraseSegmenter {
    options: PhraseTierOptions,
}

impl PhraseSegmenter {
    pub fn new(options: PhraseTierOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PhraseTierOptions {
        &self.options
    }

    /// One phrase per maximal run of consecutive non-silence segments.
    pub fn segment(&self, phones: &[Segment]) -> Vec<Segment> {
        let mut phrases: Vec<Segment> = Vec::new();
        let mut in_phrase = false;
        for phone in phones {
            if self.options.silence_labels.contains(phone.label.as_str()) {
                in_phrase = false;
                continue;
            }
            if in_phrase {
                if let Some(current) = phrases.last_mut() {
                    current.end = phone.end;
                    continue;
                }
            }
            phrases.push(Segment::new(
                phone.start,
                phone.end,
                self.options.phrase_label.as_str(),
            ));
            in_phrase = true;
        }
        phrases
    }

    /// Phrase tier padded with an empty interval up to the end of `phones`.
    pub fn phrase_tier(&self, phones: &PointTier) -> PointTier {
        let phrases = self.segment(&decode(phones));
        tracing::debug!(phrases = phrases.len(), "grouped phones into phrases");
        let mut tier = encode(&phrases);
        if let Some(end) = phones.end_time() {
            tier.pad_to(end, EMPTY_LABEL);
        }
        tier
    }
}

impl TierDeriver for PhraseSegmenter {
    fn main_tier(&self) -> &str {
        &self.options.phone_tier
    }

    fn output_tier(&self) -> &str {
        &self.options.output_tier
    }

    fn derive(
        &self,
        _source: &Path,
        _tiers: &TierSet,
        main: &PointTier,
    ) -> Result<DerivedTier, TierError> {
        let tier = self.phrase_tier(main);
        let phrases = tier
            .iter()
            .filter(|b| b.label == self.options.phrase_label)
            .count();
        Ok(DerivedTier {
            tier,
            stats: SpanStats {
                segments: phrases,
                ..SpanStats::default()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone_tier() -> PointTier {
        PointTier::from_pairs([(1.0, "p"), (2.0, "sp"), (3.0, "t"), (4.0, "a"), (5.0, "sil")])
    }

    #[test]
    fn runs_between_silences_become_phrases() {
        let segmenter = PhraseSegmenter::default();
        let phrases = segmenter.segment(&decode(&phone_tier()));
        assert_eq!(
            phrases,
            [Segment::new(0.0, 1.0, "IP"), Segment::new(2.0, 4.0, "IP")]
        );
    }

    #[test]
    fn phrase_tier_gets_trailing_filler() {
        let segmenter = PhraseSegmenter::default();
        assert_eq!(
            segmenter.phrase_tier(&phone_tier()),
            PointTier::from_pairs([(1.0, "IP"), (2.0, ""), (4.0, "IP"), (5.0, "")])
        );
    }

    #[test]
    fn phrase_ending_at_tier_end_needs_no_filler() {
        let phones = PointTier::from_pairs([(0.5, "sil"), (1.0, "a"), (1.5, "n")]);
        let tier = PhraseSegmenter::default().phrase_tier(&phones);
        assert_eq!(tier, PointTier::from_pairs([(0.5, ""), (1.5, "IP")]));
    }

    #[test]
    fn empty_label_counts_as_silence() {
        let phones = PointTier::from_pairs([(1.0, "a"), (2.0, ""), (3.0, "b")]);
        let phrases = PhraseSegmenter::default().segment(&decode(&phones));
        assert_eq!(phrases.len(), 2);
    }

    #[test]
    fn all_silence_yields_only_filler() {
        let phones = PointTier::from_pairs([(1.0, "sil"), (2.0, "sp")]);
        let tier = PhraseSegmenter::default().phrase_tier(&phones);
        assert_eq!(tier, PointTier::from_pairs([(2.0, "")]));
    }

    #[test]
    fn custom_silence_set_and_label() {
        let options = PhraseTierOptions {
            silence_labels: ["pau".to_string()].into_iter().collect(),
            phrase_label: "phrase".to_string(),
            ..PhraseTierOptions::default()
        };
        let phones = PointTier::from_pairs([(1.0, "a"), (2.0, "sil"), (3.0, "pau"), (4.0, "b")]);
        let phrases = PhraseSegmenter::new(options).segment(&decode(&phones));
        assert_eq!(
            phrases,
            [Segment::new(0.0, 2.0, "phrase"), Segment::new(3.0, 4.0, "phrase")]
        );
    }

    #[test]
    fn derive_counts_phrases() {
        let segmenter = PhraseSegmenter::default();
        let derived = segmenter
            .derive(Path::new("utt.TextGrid"), &TierSet::default(), &phone_tier())
            .expect("derive");
        assert_eq!(derived.stats.segments, 2);
        assert_eq!(segmenter.output_tier(), "iphrases");
    }
}
