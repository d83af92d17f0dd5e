//! Driver records and the 0–100 normalization applied before layout.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::metrics::Metric;

/// One row of the season dataset, exactly as it appears in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverRecord {
    pub driver: String,
    pub total_points: f64,
    pub races_finished: f64,
    pub positions_gained: f64,
    pub podiums: f64,
    pub avg_speed: f64,
}

impl DriverRecord {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::TotalPoints => self.total_points,
            Metric::RacesFinished => self.races_finished,
            Metric::PositionsGained => self.positions_gained,
            Metric::Podiums => self.podiums,
            Metric::AvgSpeed => self.avg_speed,
        }
    }

    pub fn values(&self) -> MetricValues {
        MetricValues::from_fn(|metric| self.value(metric))
    }
}

/// The five metric values of one driver (raw, normalized or maxima).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricValues {
    pub total_points: f64,
    pub races_finished: f64,
    pub positions_gained: f64,
    pub podiums: f64,
    pub avg_speed: f64,
}

impl MetricValues {
    pub fn from_fn(mut f: impl FnMut(Metric) -> f64) -> Self {
        Self {
            total_points: f(Metric::TotalPoints),
            races_finished: f(Metric::RacesFinished),
            positions_gained: f(Metric::PositionsGained),
            podiums: f(Metric::Podiums),
            avg_speed: f(Metric::AvgSpeed),
        }
    }

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::TotalPoints => self.total_points,
            Metric::RacesFinished => self.races_finished,
            Metric::PositionsGained => self.positions_gained,
            Metric::Podiums => self.podiums,
            Metric::AvgSpeed => self.avg_speed,
        }
    }
}

/// A driver rescaled against the per-metric maxima of the whole dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub driver: String,
    /// First three letters of the surname, uppercased (`"Max Verstappen"` → `"VER"`).
    pub abbreviation: String,
    /// Values in `[0, 100]`.
    pub normalized: MetricValues,
    /// Percent of the maximum before clamping; negative raw values stay
    /// negative here so they still rank against each other.
    pub rank: MetricValues,
    pub original: MetricValues,
}

/// Output of [`normalize`]: records in input order plus the maxima they were
/// scaled against.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedSet {
    pub records: Vec<NormalizedRecord>,
    pub maxima: MetricValues,
    /// Metrics whose maximum was zero, negative or non-finite. Every record
    /// carries 0 for these.
    pub degenerate: Vec<Metric>,
}

impl NormalizedSet {
    /// Map a normalized value back onto the raw scale of `metric`.
    pub fn denormalize(&self, metric: Metric, normalized: f64) -> f64 {
        normalized / 100.0 * self.maxima.get(metric)
    }

    pub fn is_degenerate(&self, metric: Metric) -> bool {
        self.degenerate.contains(&metric)
    }
}

pub fn normalize(records: &[DriverRecord]) -> NormalizedSet {
    let maxima = MetricValues::from_fn(|metric| {
        records
            .iter()
            .map(|record| record.value(metric))
            .filter(|value| value.is_finite())
            .fold(None, |acc: Option<f64>, value| {
                Some(acc.map_or(value, |max| max.max(value)))
            })
            .unwrap_or(0.0)
    });

    let degenerate: Vec<Metric> = Metric::ALL
        .into_iter()
        .filter(|metric| !usable_max(maxima.get(*metric)))
        .collect();

    for metric in &degenerate {
        warn!(
            metric = metric.key(),
            max = maxima.get(*metric),
            "metric has no positive maximum; normalizing to 0"
        );
    }

    let records = records
        .iter()
        .map(|record| NormalizedRecord {
            driver: record.driver.clone(),
            abbreviation: abbreviate(&record.driver),
            normalized: MetricValues::from_fn(|metric| {
                to_percent(record.value(metric), maxima.get(metric)).clamp(0.0, 100.0)
            }),
            rank: MetricValues::from_fn(|metric| {
                to_percent(record.value(metric), maxima.get(metric))
            }),
            original: record.values(),
        })
        .collect();

    NormalizedSet {
        records,
        maxima,
        degenerate,
    }
}

/// Last whitespace-delimited token, first three characters, uppercased.
pub fn abbreviate(driver: &str) -> String {
    driver
        .split_whitespace()
        .last()
        .unwrap_or_default()
        .chars()
        .take(3)
        .collect::<String>()
        .to_uppercase()
}

fn usable_max(max: f64) -> bool {
    max.is_finite() && max > 0.0
}

fn to_percent(value: f64, max: f64) -> f64 {
    if !usable_max(max) || !value.is_finite() {
        return 0.0;
    }
    value / max * 100.0
}
