use crate::config::PhonologyConfig;
use crate::pipeline::traits::Syllabifier;
use crate::syllabification::{syllabify, SyllabificationResult};

/// Maximum Onset Principle syllabifier.
pub struct MaxOnsetSyllabifier;

impl Syllabifier for MaxOnsetSyllabifier {
    fn syllabify(&self, phones: &[String], phonology: &PhonologyConfig) -> SyllabificationResult {
        syllabify(phones, phonology)
    }
}
