//! Linear and band scales used to place the bars.

use serde::Deserialize;

/// Maps a continuous domain onto a continuous range.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Extend the domain outward to round tick boundaries, assuming ten ticks.
    pub fn nice(self) -> Self {
        let (mut start, mut stop) = self.domain;
        if !start.is_finite() || !stop.is_finite() || start >= stop {
            return self;
        }

        let mut previous: Option<f64> = None;
        for _ in 0..10 {
            let step = tick_step(start, stop, 10);
            if previous == Some(step) {
                break;
            }
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
            previous = Some(step);
        }

        Self {
            domain: (start, stop),
            ..self
        }
    }
}

fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start) / count as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Evenly spaced slots across a range, with equal inner and outer padding,
/// centred.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BandScale {
    pub count: usize,
    pub range: (f64, f64),
    pub padding: f64,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64), padding: f64) -> Self {
        Self {
            count,
            range,
            padding: padding.clamp(0.0, 1.0),
        }
    }

    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        (r1 - r0) / (n - self.padding + self.padding * 2.0).max(1.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of `slot`, or `None` when the slot is outside the domain.
    pub fn position(&self, slot: usize) -> Option<f64> {
        if slot >= self.count {
            return None;
        }
        let (r0, r1) = self.range;
        let step = self.step();
        let start = r0 + (r1 - r0 - step * (self.count as f64 - self.padding)) * 0.5;
        Some(start + step * slot as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn linear_maps_percent_to_display_units() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 200.0)).nice();
        assert_eq!(scale.domain, (0.0, 100.0));
        assert_eq!(scale.apply(0.0), 0.0);
        assert_eq!(scale.apply(50.0), 100.0);
        assert_eq!(scale.apply(100.0), 200.0);
    }

    #[test]
    fn nice_rounds_domain_outward() {
        let scale = LinearScale::new((0.0, 97.0), (0.0, 1.0)).nice();
        assert_eq!(scale.domain, (0.0, 100.0));

        let scale = LinearScale::new((3.2, 8.7), (0.0, 1.0)).nice();
        assert!(close(scale.domain.0, 3.0));
        assert!(close(scale.domain.1, 9.0));
    }

    #[test]
    fn collapsed_domain_maps_to_range_start() {
        let scale = LinearScale::new((5.0, 5.0), (10.0, 20.0));
        assert_eq!(scale.apply(5.0), 10.0);
    }

    #[test]
    fn band_layout_for_ten_slots() {
        let band = BandScale::new(10, (50.0, 750.0), 0.1);
        assert!(close(band.step(), 69.307));
        assert!(close(band.bandwidth(), 62.376));
        assert!(close(band.position(0).unwrap(), 56.931));
        assert!(close(
            band.position(9).unwrap() - band.position(0).unwrap(),
            9.0 * band.step()
        ));
        assert_eq!(band.position(10), None);
    }
}
