//! The interactive stacked bar chart.

mod bars;
mod labels;
mod legend;
mod tooltip;
mod view;

pub use bars::BarsLayer;
pub use labels::DriverLabels;
pub use legend::Legend;
pub use tooltip::{Tooltip, TooltipState};
pub use view::DriverChart;

use crate::core::metrics::Metric;

/// Loading lifecycle of the chart's dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChartStatus {
    #[default]
    Loading,
    Ready {
        drivers: usize,
        /// Metrics that normalized to 0 for everyone.
        degenerate: Vec<Metric>,
    },
    /// Rendered error message; interaction stays disabled.
    Failed(String),
}
