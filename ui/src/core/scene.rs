//! Declarative description of what the chart should show.
//!
//! The renderer never mutates SVG nodes directly: it renders a [`Scene`], and
//! Dioxus reconciles the keyed nodes against the previous frame. Every
//! segment carries its own [`TooltipContent`] so event handlers only need the
//! node they are attached to.

use super::config::ChartConfig;
use super::format::format_metric_value;
use super::layout::BarLayout;
use super::metrics::Metric;
use super::order::StackOrder;

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub driver: String,
    pub metric: Metric,
    pub label: &'static str,
    pub color: &'static str,
    /// Original value, already formatted for display.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentNode {
    pub key: String,
    pub metric: Metric,
    pub y: f64,
    pub height: f64,
    pub width: f64,
    pub fill: &'static str,
    pub tooltip: TooltipContent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarNode {
    /// Driver name; stable across reorders.
    pub key: String,
    pub slot: usize,
    pub x: f64,
    pub segments: Vec<SegmentNode>,
}

impl BarNode {
    pub fn segment(&self, metric: Metric) -> Option<&SegmentNode> {
        self.segments.iter().find(|segment| segment.metric == metric)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelNode {
    pub key: String,
    pub slot: usize,
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendNode {
    pub metric: Metric,
    pub label: &'static str,
    pub color: &'static str,
    pub offset_y: f64,
    /// Current sort key / bottom segment.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub bars: Vec<BarNode>,
    pub labels: Vec<LabelNode>,
    pub legend: Vec<LegendNode>,
}

impl Scene {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Place laid-out bars into the band scale. Bars whose slot falls outside
    /// the band domain are not shown.
    pub fn build(bars: &[BarLayout], order: &StackOrder, config: &ChartConfig) -> Self {
        let band = &config.x_scale;
        let bandwidth = band.bandwidth();
        let width = (bandwidth - config.segment_inset).max(0.0);

        let mut bar_nodes = Vec::with_capacity(bars.len().min(band.count));
        let mut labels = Vec::with_capacity(bars.len().min(band.count));

        for bar in bars {
            let Some(x) = band.position(bar.slot) else {
                continue;
            };

            let segments = bar
                .segments
                .iter()
                .map(|segment| SegmentNode {
                    key: format!("{}-{}", bar.driver, segment.metric.key()),
                    metric: segment.metric,
                    y: segment.y,
                    height: segment.height,
                    width,
                    fill: segment.color,
                    tooltip: TooltipContent {
                        driver: bar.driver.clone(),
                        metric: segment.metric,
                        label: segment.metric.label(),
                        color: segment.color,
                        value: format_metric_value(segment.metric, segment.original),
                    },
                })
                .collect();

            bar_nodes.push(BarNode {
                key: bar.driver.clone(),
                slot: bar.slot,
                x,
                segments,
            });

            labels.push(LabelNode {
                key: bar.driver.clone(),
                slot: bar.slot,
                x: x + bandwidth / 2.0 - config.label_offset,
                y: config.label_y,
                text: bar.abbreviation.clone(),
                opacity: 1.0,
            });
        }

        Self {
            bars: bar_nodes,
            labels,
            legend: legend_nodes(order, config.legend.row_height),
        }
    }

    pub fn bar(&self, key: &str) -> Option<&BarNode> {
        self.bars.iter().find(|bar| bar.key == key)
    }
}

/// Legend entries in catalogue order; the stacking order only moves the
/// active marker.
pub fn legend_nodes(order: &StackOrder, row_height: f64) -> Vec<LegendNode> {
    Metric::ALL
        .iter()
        .enumerate()
        .map(|(index, metric)| LegendNode {
            metric: *metric,
            label: metric.label(),
            color: metric.color(),
            offset_y: index as f64 * row_height,
            active: *metric == order.primary(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::driver::{normalize, tests::record};
    use crate::core::layout::stack_bars;

    fn build(order: &StackOrder, drivers: usize) -> Scene {
        let config = ChartConfig::default();
        let raw: Vec<_> = (0..drivers)
            .map(|i| {
                let value = (drivers - i) as f64;
                record(&format!("Driver Number{i}"), [value, value, value, value, 200.0 + value])
            })
            .collect();
        let records = normalize(&raw).records;
        let bars = stack_bars(order, &records, &config.y_scale, config.baseline);
        Scene::build(&bars, order, &config)
    }

    #[test]
    fn only_band_slots_are_displayed() {
        let scene = build(&StackOrder::identity(), 20);
        assert_eq!(scene.bars.len(), 10);
        assert_eq!(scene.labels.len(), 10);
        assert!(scene.bars.iter().all(|bar| bar.slot < 10));
    }

    #[test]
    fn labels_sit_under_their_bars() {
        let config = ChartConfig::default();
        let scene = build(&StackOrder::identity(), 3);
        let bandwidth = config.x_scale.bandwidth();
        for (bar, label) in scene.bars.iter().zip(&scene.labels) {
            assert_eq!(label.key, bar.key);
            assert!((label.x - (bar.x + bandwidth / 2.0 - 7.0)).abs() < 1e-9);
            assert_eq!(label.y, 820.0);
            assert_eq!(label.text, "NUM");
        }
    }

    #[test]
    fn segments_carry_their_tooltip() {
        let scene = build(&StackOrder::identity(), 2);
        let leader = &scene.bars[0];
        let speed = leader.segment(Metric::AvgSpeed).expect("speed segment");
        assert_eq!(speed.tooltip.value, "202.0 km/h");
        assert_eq!(speed.tooltip.label, "Avg Speed (km/h)");
        assert_eq!(speed.fill, "#708090");
        assert_eq!(speed.key, "Driver Number0-avg_speed");

        let points = leader.segment(Metric::TotalPoints).expect("points segment");
        assert_eq!(points.tooltip.value, "2");
        assert!((points.width - (ChartConfig::default().x_scale.bandwidth() - 10.0)).abs() < 1e-9);
    }

    #[test]
    fn legend_marks_primary_metric() {
        let mut order = StackOrder::identity();
        order.promote(Metric::Podiums);
        let legend = legend_nodes(&order, 22.0);

        let labels: Vec<_> = legend.iter().map(|entry| entry.label).collect();
        assert_eq!(
            labels,
            ["Total Points", "Races Finished", "Position Gained", "Podiums", "Avg Speed (km/h)"]
        );
        let active: Vec<_> = legend.iter().filter(|e| e.active).map(|e| e.metric).collect();
        assert_eq!(active, [Metric::Podiums]);
        assert_eq!(legend[3].offset_y, 66.0);
    }
}
