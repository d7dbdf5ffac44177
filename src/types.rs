/// One labeled interval of a tier, in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub label: String,
}

impl Segment {
    pub fn new(start: f64, end: f64, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }
}

/// Boundary of a point-tier encoding: the interval ending at `time` carries `label`.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    pub time: f64,
    pub label: String,
}

impl Boundary {
    pub fn new(time: f64, label: impl Into<String>) -> Self {
        Self {
            time,
            label: label.into(),
        }
    }
}

/// Ordered `(end_time, label)` pairs; interval `i` starts where interval `i - 1` ends
/// (the first one starts at 0).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointTier {
    pub boundaries: Vec<Boundary>,
}

impl PointTier {
    pub fn new(boundaries: Vec<Boundary>) -> Self {
        Self { boundaries }
    }

    pub fn from_pairs<L: Into<String>>(pairs: impl IntoIterator<Item = (f64, L)>) -> Self {
        Self {
            boundaries: pairs
                .into_iter()
                .map(|(time, label)| Boundary::new(time, label))
                .collect(),
        }
    }

    /// Final boundary time, i.e. the duration the tier covers.
    pub fn end_time(&self) -> Option<f64> {
        self.boundaries.last().map(|b| b.time)
    }

    pub fn push(&mut self, boundary: Boundary) {
        self.boundaries.push(boundary);
    }

    /// Appends an empty-label boundary at `end_time` unless the tier already reaches it.
    pub fn pad_to(&mut self, end_time: f64, filler: &str) {
        let reached = self.end_time().unwrap_or(0.0);
        if reached < end_time {
            self.boundaries.push(Boundary::new(end_time, filler));
        }
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Boundary> {
        self.boundaries.iter()
    }
}

/// A syllable as produced by the syllabifier: `onset ++ [nucleus] ++ coda`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    pub onset: Vec<String>,
    pub nucleus: String,
    pub coda: Vec<String>,
}

impl Syllable {
    pub fn phones(&self) -> impl Iterator<Item = &str> {
        self.onset
            .iter()
            .chain(std::iter::once(&self.nucleus))
            .chain(self.coda.iter())
            .map(String::as_str)
    }

    pub fn to_phones(&self) -> Vec<String> {
        self.phones().map(str::to_string).collect()
    }

    /// Number of phones; never zero.
    pub fn len(&self) -> usize {
        self.onset.len() + 1 + self.coda.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_to_appends_filler_only_when_short() {
        let mut tier = PointTier::from_pairs([(1.0, "a"), (2.0, "b")]);
        tier.pad_to(3.5, "");
        assert_eq!(tier.end_time(), Some(3.5));
        assert_eq!(tier.boundaries[2].label, "");

        let before = tier.clone();
        tier.pad_to(3.5, "");
        assert_eq!(tier, before);
    }

    #[test]
    fn pad_to_on_empty_tier_covers_whole_duration() {
        let mut tier = PointTier::default();
        tier.pad_to(4.0, "");
        assert_eq!(tier.boundaries, vec![Boundary::new(4.0, "")]);
    }

    #[test]
    fn syllable_phones_in_order() {
        let syllable = Syllable {
            onset: vec!["s".to_string(), "t".to_string()],
            nucleus: "i".to_string(),
            coda: vec!["n".to_string()],
        };
        assert_eq!(syllable.phones().collect::<Vec<_>>(), ["s", "t", "i", "n"]);
        assert_eq!(syllable.len(), 4);
        assert_eq!(syllable.to_phones(), ["s", "t", "i", "n"]);
    }
}
