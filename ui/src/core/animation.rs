//! Easing curves and scene-to-scene transitions.
//!
//! A [`Transition`] is a pure description of an animation between two
//! [`Scene`]s. The chart view samples it once per frame and treats
//! [`Transition::is_complete`] as the signal that releases the reorder lock.

use serde::Deserialize;

use super::scene::{BarNode, LabelNode, Scene, SegmentNode};

const BACK_OVERSHOOT: f64 = 1.70158;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    CubicOut,
    CubicInOut,
    BackOut,
}

impl Easing {
    /// Eased progress for `t` in `[0, 1]` (clamped).
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Easing::CubicInOut => {
                let t2 = t * 2.0;
                if t2 <= 1.0 {
                    t2 * t2 * t2 / 2.0
                } else {
                    let u = t2 - 2.0;
                    (u * u * u + 2.0) / 2.0
                }
            }
            Easing::BackOut => {
                let u = t - 1.0;
                u * u * ((BACK_OVERSHOOT + 1.0) * u + BACK_OVERSHOOT) + 1.0
            }
        }
    }
}

/// Durations (ms) of the individual animation tracks.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransitionTimings {
    /// Horizontal slot move of a whole bar.
    pub bar_move_ms: f64,
    /// Vertical position/height of each segment.
    pub segment_ms: f64,
    pub label_fade_ms: f64,
    /// Extra label delay per slot.
    pub label_stagger_ms: f64,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            bar_move_ms: 800.0,
            segment_ms: 600.0,
            label_fade_ms: 400.0,
            label_stagger_ms: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: Scene,
    to: Scene,
    timings: TransitionTimings,
}

impl Transition {
    pub fn new(from: Scene, to: Scene, timings: TransitionTimings) -> Self {
        Self { from, to, timings }
    }

    pub fn target(&self) -> &Scene {
        &self.to
    }

    /// Longest track, including the staggered label fades.
    pub fn duration_ms(&self) -> f64 {
        let labels = self
            .to
            .labels
            .iter()
            .map(|label| self.label_delay(label) + self.timings.label_fade_ms)
            .fold(0.0, f64::max);
        self.timings
            .bar_move_ms
            .max(self.timings.segment_ms)
            .max(labels)
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms()
    }

    /// Sample the scene `elapsed_ms` after the transition started.
    pub fn frame(&self, elapsed_ms: f64) -> Scene {
        if self.is_complete(elapsed_ms) {
            return self.to.clone();
        }

        let bar_t = Easing::CubicOut.apply(progress(elapsed_ms, 0.0, self.timings.bar_move_ms));
        let segment_t = Easing::BackOut.apply(progress(elapsed_ms, 0.0, self.timings.segment_ms));

        let bars = self
            .to
            .bars
            .iter()
            .map(|bar| {
                let previous = self.from.bar(&bar.key);
                let x = previous.map_or(bar.x, |prev| lerp(prev.x, bar.x, bar_t));
                let segments = bar
                    .segments
                    .iter()
                    .map(|segment| {
                        // Entering segments grow from nothing at their final position.
                        let (y0, h0) = previous
                            .and_then(|prev| prev.segment(segment.metric))
                            .map_or((segment.y, 0.0), |prev| (prev.y, prev.height));
                        SegmentNode {
                            y: lerp(y0, segment.y, segment_t),
                            height: lerp(h0, segment.height, segment_t).max(0.0),
                            ..segment.clone()
                        }
                    })
                    .collect();

                BarNode {
                    key: bar.key.clone(),
                    slot: bar.slot,
                    x,
                    segments,
                }
            })
            .collect();

        let labels = self
            .to
            .labels
            .iter()
            .map(|label| {
                let t = progress(
                    elapsed_ms,
                    self.label_delay(label),
                    self.timings.label_fade_ms,
                );
                LabelNode {
                    opacity: label.opacity * Easing::CubicInOut.apply(t),
                    ..label.clone()
                }
            })
            .collect();

        Scene {
            bars,
            labels,
            legend: self.to.legend.clone(),
        }
    }

    fn label_delay(&self, label: &LabelNode) -> f64 {
        label.slot as f64 * self.timings.label_stagger_ms
    }
}

fn progress(elapsed_ms: f64, delay_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return if elapsed_ms >= delay_ms { 1.0 } else { 0.0 };
    }
    ((elapsed_ms - delay_ms) / duration_ms).clamp(0.0, 1.0)
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
