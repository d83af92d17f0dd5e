//! Interaction state for the chart: current stacking order plus the
//! transition lock.
//!
//! A promote request is only honoured while the chart is idle. Accepting one
//! moves the state into [`TransitionPhase::Animating`] with a fresh
//! generation; the lock is released when the animation for *that* generation
//! reports completion. Stale completions are ignored.

use tracing::debug;

use super::metrics::Metric;
use super::order::StackOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    Animating { generation: u64 },
    /// Data failed to load; interaction is disabled for good.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoteOutcome {
    Accepted { generation: u64 },
    Busy,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartState {
    order: StackOrder,
    phase: TransitionPhase,
    generation: u64,
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new(StackOrder::default())
    }
}

impl ChartState {
    pub fn new(order: StackOrder) -> Self {
        Self {
            order,
            phase: TransitionPhase::Idle,
            generation: 0,
        }
    }

    pub fn order(&self) -> &StackOrder {
        &self.order
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_interactive(&self) -> bool {
        self.phase == TransitionPhase::Idle
    }

    /// Promote `metric` and lock until the matching completion arrives.
    pub fn request_promote(&mut self, metric: Metric) -> PromoteOutcome {
        match self.phase {
            TransitionPhase::Unavailable => PromoteOutcome::Unavailable,
            TransitionPhase::Animating { generation } => {
                debug!(metric = metric.key(), generation, "promote ignored while animating");
                PromoteOutcome::Busy
            }
            TransitionPhase::Idle => {
                self.order.promote(metric);
                let generation = self.lock();
                PromoteOutcome::Accepted { generation }
            }
        }
    }

    /// Lock for a transition that doesn't change the order (the initial draw).
    pub fn begin_transition(&mut self) -> Option<u64> {
        match self.phase {
            TransitionPhase::Idle => Some(self.lock()),
            _ => None,
        }
    }

    /// Release the lock if `generation` is the one currently running.
    pub fn complete(&mut self, generation: u64) -> bool {
        match self.phase {
            TransitionPhase::Animating { generation: current } if current == generation => {
                self.phase = TransitionPhase::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn disable(&mut self) {
        self.phase = TransitionPhase::Unavailable;
    }

    fn lock(&mut self) -> u64 {
        self.generation += 1;
        self.phase = TransitionPhase::Animating {
            generation: self.generation,
        };
        self.generation
    }
}
