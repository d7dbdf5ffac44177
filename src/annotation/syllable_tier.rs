use std::path::Path;
use std::sync::Arc;

use crate::config::{
    PhonologyConfig, SyllableTierOptions, EMPTY_LABEL, GLOTTAL_ONSET, PHONE_JOINER, SPAN_JOINER,
};
use crate::error::{SyllabificationFailure, TierError};
use crate::pipeline::defaults::MaxOnsetSyllabifier;
use crate::pipeline::summary::SpanStats;
use crate::pipeline::traits::{DerivedTier, Syllabifier, TierDeriver};
use crate::syllabification::check_coverage;
use crate::tiers::segment_model::{decode_filtered, encode, TimeWindow};
use crate::tiers::tier_set::TierSet;
use crate::types::{PointTier, Segment, Syllable};

/// Syllable tier of one utterance together with per-span bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct SyllableTierOutput {
    pub segments: Vec<Segment>,
    pub tier: PointTier,
    pub stats: SpanStats,
}

/// What happened to one span.
#[derive(Debug)]
enum SpanOutcome {
    Syllables(Vec<Segment>),
    OutOfPhoneset,
    NoNucleus,
    Failed(SyllabificationFailure),
}

/// Syllabifies every span (usually a word) of a span tier against the phone tier.
pub struct SpanSyllableAnnotator {
    phonology: Arc<PhonologyConfig>,
    options: SyllableTierOptions,
    syllabifier: Box<dyn Syllabifier>,
}

impl SpanSyllableAnnotator {
    pub fn new(phonology: Arc<PhonologyConfig>, options: SyllableTierOptions) -> Self {
        Self::with_syllabifier(phonology, options, Box::new(MaxOnsetSyllabifier))
    }

    pub fn with_syllabifier(
        phonology: Arc<PhonologyConfig>,
        options: SyllableTierOptions,
        syllabifier: Box<dyn Syllabifier>,
    ) -> Self {
        Self {
            phonology,
            options,
            syllabifier,
        }
    }

    pub fn options(&self) -> &SyllableTierOptions {
        &self.options
    }

    /// Builds the syllable tier for `spans` over `phones`.
    ///
    /// Spans holding a phone outside the phone set are dropped silently; spans the
    /// syllabifier rejects are dropped with a warning. The tier is padded with an empty
    /// interval up to the end of the phone tier.
    pub fn annotate(&self, spans: &PointTier, phones: &PointTier) -> SyllableTierOutput {
        let mut segments = Vec::new();
        let mut stats = SpanStats::default();

        for span in decode_filtered(spans, Some(&self.options.ignored_span_labels), None) {
            stats.spans += 1;
            let span_phones = decode_filtered(phones, None, Some(TimeWindow::of(&span)));
            match self.annotate_span(&span, &span_phones) {
                SpanOutcome::Syllables(mut syllables) => {
                    stats.spans_syllabified += 1;
                    stats.segments += syllables.len();
                    segments.append(&mut syllables);
                }
                SpanOutcome::OutOfPhoneset => stats.spans_out_of_phoneset += 1,
                SpanOutcome::NoNucleus => stats.spans_without_nucleus += 1,
                SpanOutcome::Failed(err) => {
                    tracing::warn!(
                        span = span.label.as_str(),
                        start = span.start,
                        end = span.end,
                        phones = %join_labels(&span_phones),
                        error = %err,
                        "failed to syllabify span; skipping"
                    );
                    stats.spans_failed += 1;
                }
            }
        }

        let mut tier = encode(&segments);
        if let Some(end) = phones.end_time() {
            tier.pad_to(end, EMPTY_LABEL);
        }
        SyllableTierOutput {
            segments,
            tier,
            stats,
        }
    }

    fn annotate_span(&self, span: &Segment, span_phones: &[Segment]) -> SpanOutcome {
        if let Some(phone) = span_phones
            .iter()
            .find(|ph| !self.phonology.contains(&ph.label))
        {
            tracing::debug!(
                span = span.label.as_str(),
                phone = phone.label.as_str(),
                "span has a phone outside the phone set; skipping"
            );
            return SpanOutcome::OutOfPhoneset;
        }

        let labels = span_phones
            .iter()
            .map(|ph| ph.label.clone())
            .collect::<Vec<_>>();
        let syllables = match self.syllabifier.syllabify(&labels, &self.phonology) {
            Ok(syllables) if syllables.is_empty() => return SpanOutcome::NoNucleus,
            Ok(syllables) => syllables,
            Err(err) => return SpanOutcome::Failed(err),
        };
        if let Err(err) = check_coverage(&syllables, labels.len()) {
            return SpanOutcome::Failed(err);
        }

        let mut out = Vec::with_capacity(syllables.len());
        let mut phone_idx = 0;
        for (k, syllable) in syllables.iter().enumerate() {
            let first = &span_phones[phone_idx];
            let last = &span_phones[phone_idx + syllable.len() - 1];
            out.push(Segment::new(
                first.start,
                last.end,
                self.render_label(&span.label, syllable, k == 0),
            ));
            phone_idx += syllable.len();
        }
        tracing::debug!(
            span = span.label.as_str(),
            syllables = out.len(),
            "syllabified span"
        );
        SpanOutcome::Syllables(out)
    }

    fn render_label(&self, span_label: &str, syllable: &Syllable, span_initial: bool) -> String {
        let mut phones = Vec::with_capacity(syllable.len() + 1);
        if span_initial
            && self.options.add_glottal_onset
            && syllable.onset.is_empty()
            && self.phonology.is_vowel(&syllable.nucleus)
        {
            phones.push(GLOTTAL_ONSET);
        }
        phones.extend(syllable.phones());

        let rendered = phones.join(PHONE_JOINER);
        if self.options.prefix_span_label {
            format!("{span_label}{SPAN_JOINER}{rendered}")
        } else {
            rendered
        }
    }
}

impl TierDeriver for SpanSyllableAnnotator {
    fn main_tier(&self) -> &str {
        &self.options.phone_tier
    }

    fn output_tier(&self) -> &str {
        &self.options.output_tier
    }

    fn derive(
        &self,
        source: &Path,
        tiers: &TierSet,
        main: &PointTier,
    ) -> Result<DerivedTier, TierError> {
        let spans = tiers
            .get(&self.options.span_tier)
            .ok_or_else(|| TierError::missing_tier(source, self.options.span_tier.as_str()))?;
        let output = self.annotate(spans, main);
        Ok(DerivedTier {
            tier: output.tier,
            stats: output.stats,
        })
    }
}

fn join_labels(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| s.label.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
