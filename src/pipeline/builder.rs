use std::sync::Arc;

use crate::annotation::syllable_tier::SpanSyllableAnnotator;
use crate::config::{PhonologyConfig, SyllableTierOptions};
use crate::error::TierError;
use crate::pipeline::defaults::MaxOnsetSyllabifier;
use crate::pipeline::traits::Syllabifier;

pub struct SpanSyllableAnnotatorBuilder {
    phonology: Arc<PhonologyConfig>,
    options: SyllableTierOptions,
    syllabifier: Option<Box<dyn Syllabifier>>,
}

impl SpanSyllableAnnotatorBuilder {
    pub fn new(phonology: Arc<PhonologyConfig>) -> Self {
        Self {
            phonology,
            options: SyllableTierOptions::default(),
            syllabifier: None,
        }
    }

    pub fn with_options(mut self, options: SyllableTierOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_span_tier(mut self, span_tier: impl Into<String>) -> Self {
        self.options.span_tier = span_tier.into();
        self
    }

    pub fn with_phone_tier(mut self, phone_tier: impl Into<String>) -> Self {
        self.options.phone_tier = phone_tier.into();
        self
    }

    pub fn with_output_tier(mut self, output_tier: impl Into<String>) -> Self {
        self.options.output_tier = output_tier.into();
        self
    }

    pub fn with_glottal_onset(mut self, enabled: bool) -> Self {
        self.options.add_glottal_onset = enabled;
        self
    }

    pub fn with_span_prefix(mut self, enabled: bool) -> Self {
        self.options.prefix_span_label = enabled;
        self
    }

    pub fn with_syllabifier(mut self, syllabifier: Box<dyn Syllabifier>) -> Self {
        self.syllabifier = Some(syllabifier);
        self
    }

    pub fn build(self) -> Result<SpanSyllableAnnotator, TierError> {
        let options = self.options;
        for (what, name) in [
            ("span tier", &options.span_tier),
            ("phone tier", &options.phone_tier),
            ("output tier", &options.output_tier),
        ] {
            if name.trim().is_empty() {
                return Err(TierError::invalid_input(format!("{what} name is empty")));
            }
        }
        if options.output_tier == options.span_tier || options.output_tier == options.phone_tier {
            return Err(TierError::invalid_input(format!(
                "output tier '{}' would overwrite an input tier",
                options.output_tier
            )));
        }

        Ok(SpanSyllableAnnotator::with_syllabifier(
            self.phonology,
            options,
            self.syllabifier
                .unwrap_or_else(|| Box::new(MaxOnsetSyllabifier)),
        ))
    }
}
