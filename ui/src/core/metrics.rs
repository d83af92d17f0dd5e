//! The fixed metric catalogue. Declaration order is the "original index" used
//! by stacking orders and the legend.

/// One of the five compared driver metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    TotalPoints,
    RacesFinished,
    PositionsGained,
    Podiums,
    AvgSpeed,
}

impl Metric {
    pub const COUNT: usize = 5;

    pub const ALL: [Metric; Metric::COUNT] = [
        Metric::TotalPoints,
        Metric::RacesFinished,
        Metric::PositionsGained,
        Metric::Podiums,
        Metric::AvgSpeed,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn config(self) -> &'static MetricConfig {
        &METRICS[self.index()]
    }

    /// Field name in the driver dataset.
    pub fn key(self) -> &'static str {
        self.config().key
    }

    pub fn label(self) -> &'static str {
        self.config().label
    }

    pub fn color(self) -> &'static str {
        self.config().color
    }
}

/// Static presentation data for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricConfig {
    pub metric: Metric,
    pub key: &'static str,
    pub color: &'static str,
    pub label: &'static str,
}

pub const METRICS: [MetricConfig; Metric::COUNT] = [
    MetricConfig {
        metric: Metric::TotalPoints,
        key: "total_points",
        color: "#E10600",
        label: "Total Points",
    },
    MetricConfig {
        metric: Metric::RacesFinished,
        key: "races_finished",
        color: "#0078D4",
        label: "Races Finished",
    },
    MetricConfig {
        metric: Metric::PositionsGained,
        key: "positions_gained",
        color: "#00A86B",
        label: "Position Gained",
    },
    MetricConfig {
        metric: Metric::Podiums,
        key: "podiums",
        color: "#FFD700",
        label: "Podiums",
    },
    MetricConfig {
        metric: Metric::AvgSpeed,
        key: "avg_speed",
        color: "#708090",
        label: "Avg Speed (km/h)",
    },
];
