use std::path::Path;

use crate::config::PhonologyConfig;
use crate::error::TierError;
use crate::pipeline::summary::SpanStats;
use crate::syllabification::SyllabificationResult;
use crate::tiers::tier_set::TierSet;
use crate::types::PointTier;

pub trait Syllabifier: Send + Sync {
    fn syllabify(&self, phones: &[String], phonology: &PhonologyConfig) -> SyllabificationResult;
}

/// Output of one tier derivation over one utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedTier {
    pub tier: PointTier,
    pub stats: SpanStats,
}

/// Derives a new tier for an utterance from its existing tiers.
pub trait TierDeriver: Send + Sync {
    /// Tier every input file must contain; handed to `derive` as `main`.
    fn main_tier(&self) -> &str;

    fn output_tier(&self) -> &str;

    fn derive(
        &self,
        source: &Path,
        tiers: &TierSet,
        main: &PointTier,
    ) -> Result<DerivedTier, TierError>;
}
