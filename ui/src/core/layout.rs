//! Stack engine: sorts drivers by the primary metric and computes where each
//! segment of each bar sits.

use super::driver::NormalizedRecord;
use super::metrics::Metric;
use super::order::StackOrder;
use super::scale::LinearScale;

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentLayout {
    pub metric: Metric,
    pub color: &'static str,
    /// Top edge in SVG coordinates.
    pub y: f64,
    pub height: f64,
    pub normalized: f64,
    pub original: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub driver: String,
    pub abbreviation: String,
    pub slot: usize,
    /// Bottom segment first, in stacking order.
    pub segments: Vec<SegmentLayout>,
}

impl BarLayout {
    pub fn total_height(&self) -> f64 {
        self.segments.iter().map(|segment| segment.height).sum()
    }

    pub fn segment(&self, metric: Metric) -> Option<&SegmentLayout> {
        self.segments.iter().find(|segment| segment.metric == metric)
    }
}

/// Stable descending sort on the unclamped rank of `metric`, so negative
/// values keep their relative order even though they draw as empty segments.
pub fn sort_by_metric(records: &[NormalizedRecord], metric: Metric) -> Vec<&NormalizedRecord> {
    let mut sorted: Vec<&NormalizedRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.rank.get(metric).total_cmp(&a.rank.get(metric)));
    sorted
}

/// Lay out every record as a stack of segments resting on `baseline`.
///
/// Segments follow `order` from the bottom up; slots follow the descending
/// sort on `order.primary()`.
pub fn stack_bars(
    order: &StackOrder,
    records: &[NormalizedRecord],
    y_scale: &LinearScale,
    baseline: f64,
) -> Vec<BarLayout> {
    sort_by_metric(records, order.primary())
        .into_iter()
        .enumerate()
        .map(|(slot, record)| {
            let mut cursor = baseline;
            let segments = order
                .iter()
                .map(|metric| {
                    let normalized = record.normalized.get(metric);
                    let height = y_scale.apply(normalized);
                    cursor -= height;
                    SegmentLayout {
                        metric,
                        color: metric.color(),
                        y: cursor,
                        height,
                        normalized,
                        original: record.original.get(metric),
                    }
                })
                .collect();

            BarLayout {
                driver: record.driver.clone(),
                abbreviation: record.abbreviation.clone(),
                slot,
                segments,
            }
        })
        .collect()
}
