//! Formatting helpers for presenting metric values.

use super::metrics::Metric;

/// Tooltip text for an original (non-normalized) value.
pub fn format_metric_value(metric: Metric, value: f64) -> String {
    match metric {
        Metric::AvgSpeed => format_speed(value),
        _ => format_number(value),
    }
}

pub fn format_speed(value: f64) -> String {
    format!("{value:.1} km/h")
}

/// Whole numbers without a fractional part, everything else as-is.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_gets_one_decimal_and_unit() {
        assert_eq!(format_metric_value(Metric::AvgSpeed, 215.4), "215.4 km/h");
        assert_eq!(format_metric_value(Metric::AvgSpeed, 210.0), "210.0 km/h");
    }

    #[test]
    fn counts_print_raw() {
        assert_eq!(format_metric_value(Metric::TotalPoints, 575.0), "575");
        assert_eq!(format_metric_value(Metric::PositionsGained, -3.0), "-3");
        assert_eq!(format_metric_value(Metric::TotalPoints, 12.5), "12.5");
    }
}
