use std::fs;
use std::path::Path;

use textgrid::{Interval, TextGrid, Tier, TierType};

use crate::config::EMPTY_LABEL;
use crate::error::TierError;
use crate::tiers::tier_set::TierSet;
use crate::types::{Boundary, PointTier};

/// Reads every interval tier of a TextGrid, plus the designated `main_tier` on its own.
pub fn read_utterance(path: &Path, main_tier: &str) -> Result<(TierSet, PointTier), TierError> {
    let textgrid = TextGrid::from_file(path).map_err(|err| TierError::textgrid(path, err))?;

    let mut tiers = TierSet::default();
    for tier in &textgrid.tiers {
        if tier.tier_type != TierType::IntervalTier {
            tracing::debug!(
                tier = tier.name.as_str(),
                path = %path.display(),
                "skipping non-interval tier"
            );
            continue;
        }
        tiers.insert(tier.name.clone(), intervals_to_point_tier(&tier.intervals));
    }

    let main = tiers
        .get(main_tier)
        .cloned()
        .ok_or_else(|| TierError::missing_tier(path, main_tier))?;
    Ok((tiers, main))
}

/// Writes all tiers as interval tiers spanning `[0, latest boundary]`.
pub fn write_utterance(path: &Path, tiers: &TierSet) -> Result<(), TierError> {
    let xmax = tiers.end_time().unwrap_or(0.0);
    let mut textgrid = TextGrid::new(0.0, xmax).map_err(|err| TierError::textgrid(path, err))?;

    for (name, tier) in tiers.iter() {
        textgrid
            .add_tier(Tier {
                name: name.to_string(),
                tier_type: TierType::IntervalTier,
                xmin: 0.0,
                xmax,
                intervals: point_tier_to_intervals(tier, xmax),
                points: Vec::new(),
            })
            .map_err(|err| TierError::textgrid(path, err))?;
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| TierError::io("create output directory", e))?;
    }
    textgrid
        .to_file(path, false)
        .map_err(|err| TierError::textgrid(path, err))
}

fn intervals_to_point_tier(intervals: &[Interval]) -> PointTier {
    let mut tier = PointTier::default();
    let mut prev_end = 0.0;
    for interval in intervals {
        if interval.xmin > prev_end {
            tier.push(Boundary::new(interval.xmin, EMPTY_LABEL));
        }
        tier.push(Boundary::new(interval.xmax, interval.text.clone()));
        prev_end = interval.xmax;
    }
    tier
}

fn point_tier_to_intervals(tier: &PointTier, xmax: f64) -> Vec<Interval> {
    let mut intervals = Vec::with_capacity(tier.len() + 1);
    let mut start = 0.0;
    for boundary in tier.iter() {
        // TextGrid intervals must have positive duration.
        if boundary.time <= start {
            tracing::debug!(
                time = boundary.time,
                label = boundary.label.as_str(),
                "dropping zero-duration interval"
            );
            continue;
        }
        intervals.push(Interval {
            xmin: start,
            xmax: boundary.time,
            text: boundary.label.clone(),
        });
        start = boundary.time;
    }
    if start < xmax {
        intervals.push(Interval {
            xmin: start,
            xmax,
            text: EMPTY_LABEL.to_string(),
        });
    }
    intervals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals_with_gap_gain_filler_boundary() {
        let intervals = vec![
            Interval {
                xmin: 0.0,
                xmax: 0.4,
                text: "a".to_string(),
            },
            Interval {
                xmin: 0.6,
                xmax: 1.0,
                text: "b".to_string(),
            },
        ];
        assert_eq!(
            intervals_to_point_tier(&intervals),
            PointTier::from_pairs([(0.4, "a"), (0.6, ""), (1.0, "b")])
        );
    }

    #[test]
    fn short_tier_is_padded_to_grid_end() {
        let tier = PointTier::from_pairs([(0.4, "a"), (0.4, "zero"), (1.0, "b")]);
        let intervals = point_tier_to_intervals(&tier, 2.0);
        let spans = intervals
            .iter()
            .map(|i| (i.xmin, i.xmax, i.text.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(spans, [(0.0, 0.4, "a"), (0.4, 1.0, "b"), (1.0, 2.0, "")]);
    }

    #[test]
    fn write_then_read_keeps_tiers_and_order() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("utt.TextGrid");
        let tiers: TierSet = [
            ("words", PointTier::from_pairs([(0.5, ""), (1.5, "pata"), (2.0, "")])),
            (
                "phones",
                PointTier::from_pairs([
                    (0.5, "sil"),
                    (0.75, "p"),
                    (1.0, "a"),
                    (1.25, "t"),
                    (1.5, "a"),
                    (2.0, "sil"),
                ]),
            ),
        ]
        .into_iter()
        .collect();

        write_utterance(&path, &tiers).expect("write");
        let (read_back, main) = read_utterance(&path, "phones").expect("read");

        assert_eq!(read_back.names().collect::<Vec<_>>(), ["words", "phones"]);
        assert_eq!(&main, tiers.get("phones").unwrap());
        assert_eq!(read_back.get("words"), tiers.get("words"));
    }

    #[test]
    fn missing_main_tier_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("utt.TextGrid");
        let tiers: TierSet = [("words", PointTier::from_pairs([(1.0, "a")]))]
            .into_iter()
            .collect();
        write_utterance(&path, &tiers).expect("write");

        let err = read_utterance(&path, "phones").unwrap_err();
        assert!(matches!(err, TierError::MissingTier { ref tier, .. } if tier == "phones"));
    }

    #[test]
    fn unreadable_file_is_textgrid_error() {
        let err = read_utterance(Path::new("/nonexistent/utt.TextGrid"), "phones").unwrap_err();
        assert!(matches!(err, TierError::TextGrid { .. }));
    }
}
