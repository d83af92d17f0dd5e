//! Chart configuration. Launchers provide a [`ChartConfig`] through context;
//! the chart falls back to [`ChartConfig::default`] otherwise.

use serde::Deserialize;

use super::animation::TransitionTimings;
use super::data::DataSource;
use super::scale::{BandScale, LinearScale};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub data: DataSource,
    /// SVG viewport.
    pub width: f64,
    pub height: f64,
    /// Y coordinate every stack rests on.
    pub baseline: f64,
    pub label_y: f64,
    /// Shift of the driver label from the band centre.
    pub label_offset: f64,
    /// Segment width is the bandwidth minus this inset.
    pub segment_inset: f64,
    pub x_scale: BandScale,
    /// Normalized percent → display units.
    pub y_scale: LinearScale,
    pub legend: LegendGeometry,
    pub timings: TransitionTimings,
    pub frame_interval_ms: u64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data: DataSource::default(),
            width: 1000.0,
            height: 900.0,
            baseline: 800.0,
            label_y: 820.0,
            label_offset: 7.0,
            segment_inset: 10.0,
            x_scale: BandScale::new(10, (50.0, 750.0), 0.1),
            y_scale: LinearScale::new((0.0, 100.0), (0.0, 200.0)).nice(),
            legend: LegendGeometry::default(),
            timings: TransitionTimings::default(),
            frame_interval_ms: 16,
        }
    }
}

impl ChartConfig {
    /// Parse a (possibly partial) JSON config; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LegendGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub row_height: f64,
}

impl Default for LegendGeometry {
    fn default() -> Self {
        Self {
            x: 850.0,
            y: 30.0,
            width: 200.0,
            row_height: 22.0,
        }
    }
}

impl LegendGeometry {
    /// Background panel height for `entries` rows.
    pub fn panel_height(&self, entries: usize) -> f64 {
        entries as f64 * self.row_height + 15.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ChartConfig::from_json(
            r#"{
                "baseline": 700,
                "timings": { "bar_move_ms": 400 },
                "data": { "kind": "url", "location": "/data/drivers.json" }
            }"#,
        )
        .expect("valid config");

        assert_eq!(config.baseline, 700.0);
        assert_eq!(config.timings.bar_move_ms, 400.0);
        assert_eq!(config.timings.segment_ms, 600.0);
        assert_eq!(config.data, DataSource::Url("/data/drivers.json".into()));
        assert_eq!(config.x_scale, ChartConfig::default().x_scale);
    }

    #[test]
    fn legend_panel_fits_all_metrics() {
        let legend = LegendGeometry::default();
        assert_eq!(legend.panel_height(5), 125.0);
    }

    #[test]
    fn rejects_malformed_config() {
        assert!(ChartConfig::from_json(r#"{ "baseline": "low" }"#).is_err());
    }
}
