//! Translation between point-tier encodings and labeled segments.

use std::collections::HashSet;

use crate::config::EMPTY_LABEL;
use crate::types::{Boundary, PointTier, Segment};

/// Closed time range `[start, end]` selecting the segments of one span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}

impl TimeWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn of(segment: &Segment) -> Self {
        Self::new(segment.start, segment.end)
    }
}

pub fn decode(tier: &PointTier) -> Vec<Segment> {
    decode_filtered(tier, None, None)
}

/// Decodes `tier` into segments, trimming labels.
///
/// Segments labeled with one of `ignore` are dropped. With a `window`, segments that
/// start or end before it are skipped (not truncated) and decoding stops at the first
/// segment that starts or ends after it.
pub fn decode_filtered(
    tier: &PointTier,
    ignore: Option<&HashSet<String>>,
    window: Option<TimeWindow>,
) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut start = 0.0;
    for boundary in tier.iter() {
        let seg_start = start;
        let seg_end = boundary.time;
        start = boundary.time;

        let label = boundary.label.trim();
        if ignore.is_some_and(|labels| labels.contains(label)) {
            continue;
        }
        if let Some(window) = window {
            if seg_start < window.start || seg_end < window.start {
                continue;
            }
            if seg_start > window.end || seg_end > window.end {
                break;
            }
        }
        out.push(Segment::new(seg_start, seg_end, label));
    }
    out
}

/// Encodes ordered segments, inserting an empty-label boundary wherever a segment does
/// not start at the previous segment's end.
pub fn encode(segments: &[Segment]) -> PointTier {
    let mut tier = PointTier::default();
    let mut prev_end = 0.0;
    for segment in segments {
        if segment.start != prev_end {
            tier.push(Boundary::new(segment.start, EMPTY_LABEL));
        }
        tier.push(Boundary::new(segment.end, segment.label.clone()));
        prev_end = segment.end;
    }
    tier
}
