use crate::types::PointTier;

/// Named tiers of one utterance, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TierSet {
    tiers: Vec<(String, PointTier)>,
}

impl TierSet {
    pub fn get(&self, name: &str) -> Option<&PointTier> {
        self.tiers
            .iter()
            .find(|(tier_name, _)| tier_name == name)
            .map(|(_, tier)| tier)
    }

    /// Replaces a tier of the same name in place, or appends a new one.
    pub fn insert(&mut self, name: impl Into<String>, tier: PointTier) {
        let name = name.into();
        match self.tiers.iter_mut().find(|(tier_name, _)| *tier_name == name) {
            Some((_, existing)) => *existing = tier,
            None => self.tiers.push((name, tier)),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tiers.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PointTier)> {
        self.tiers.iter().map(|(name, tier)| (name.as_str(), tier))
    }

    /// Latest final boundary over all tiers.
    pub fn end_time(&self) -> Option<f64> {
        self.tiers
            .iter()
            .filter_map(|(_, tier)| tier.end_time())
            .reduce(f64::max)
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, PointTier)> for TierSet {
    fn from_iter<I: IntoIterator<Item = (N, PointTier)>>(iter: I) -> Self {
        let mut set = Self::default();
        for (name, tier) in iter {
            set.insert(name, tier);
        }
        set
    }
}
