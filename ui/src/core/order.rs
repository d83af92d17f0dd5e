//! Stacking order: which metric sits at the bottom of every bar (and drives
//! the sort), followed by the rest bottom-to-top.

use std::fmt;

use super::metrics::Metric;

/// A permutation of the five metrics, bottom of the stack first.
///
/// The only mutation is [`StackOrder::promote`], so the permutation
/// invariant (no duplicates, no omissions) holds for every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackOrder([Metric; Metric::COUNT]);

impl Default for StackOrder {
    fn default() -> Self {
        Self::identity()
    }
}

impl StackOrder {
    pub fn identity() -> Self {
        Self(Metric::ALL)
    }

    /// Build an order from an explicit sequence; `None` unless it is a permutation.
    pub fn from_metrics(metrics: [Metric; Metric::COUNT]) -> Option<Self> {
        let mut seen = [false; Metric::COUNT];
        for metric in metrics {
            if std::mem::replace(&mut seen[metric.index()], true) {
                return None;
            }
        }
        Some(Self(metrics))
    }

    /// The sort key and bottom segment.
    pub fn primary(&self) -> Metric {
        self.0[0]
    }

    pub fn as_slice(&self) -> &[Metric] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Metric> + '_ {
        self.0.iter().copied()
    }

    pub fn position(&self, metric: Metric) -> Option<usize> {
        self.0.iter().position(|candidate| *candidate == metric)
    }

    /// Original catalogue indices, bottom first.
    pub fn indices(&self) -> [usize; Metric::COUNT] {
        self.0.map(Metric::index)
    }

    /// Move `metric` to the front, keeping the relative order of the others.
    pub fn promote(&mut self, metric: Metric) {
        if let Some(position) = self.position(metric) {
            self.0[..=position].rotate_right(1);
        }
    }

    /// Index form of [`promote`](Self::promote). Unknown indices are a no-op
    /// and return `false`.
    pub fn promote_index(&mut self, index: usize) -> bool {
        match Metric::from_index(index) {
            Some(metric) => {
                self.promote(metric);
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for StackOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.iter().map(Metric::key).collect();
        write!(f, "[{}]", keys.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_as_identity() {
        let order = StackOrder::default();
        assert_eq!(order.indices(), [0, 1, 2, 3, 4]);
        assert_eq!(order.primary(), Metric::TotalPoints);
    }

    #[test]
    fn promoting_podiums_from_identity() {
        let mut order = StackOrder::identity();
        order.promote(Metric::Podiums);
        assert_eq!(
            order.as_slice(),
            [
                Metric::Podiums,
                Metric::TotalPoints,
                Metric::RacesFinished,
                Metric::PositionsGained,
                Metric::AvgSpeed,
            ]
        );
    }

    #[test]
    fn promoting_the_front_metric_changes_nothing() {
        let mut order = StackOrder::identity();
        order.promote(Metric::TotalPoints);
        assert_eq!(order, StackOrder::identity());
    }

    #[test]
    fn unknown_index_is_a_no_op() {
        let mut order = StackOrder::identity();
        assert!(!order.promote_index(5));
        assert!(!order.promote_index(usize::MAX));
        assert_eq!(order, StackOrder::identity());
        assert!(order.promote_index(4));
        assert_eq!(order.indices(), [4, 0, 1, 2, 3]);
    }

    #[test]
    fn rejects_non_permutations() {
        assert!(StackOrder::from_metrics([Metric::Podiums; Metric::COUNT]).is_none());
        assert!(StackOrder::from_metrics([
            Metric::AvgSpeed,
            Metric::Podiums,
            Metric::PositionsGained,
            Metric::RacesFinished,
            Metric::TotalPoints,
        ])
        .is_some());
    }

    #[test]
    fn display_lists_keys_bottom_first() {
        let mut order = StackOrder::identity();
        order.promote(Metric::AvgSpeed);
        assert_eq!(
            order.to_string(),
            "[avg_speed, total_points, races_finished, positions_gained, podiums]"
        );
    }

    fn any_order() -> impl Strategy<Value = StackOrder> {
        Just(Metric::ALL.to_vec()).prop_shuffle().prop_map(|metrics| {
            let mut array = Metric::ALL;
            array.copy_from_slice(&metrics);
            StackOrder::from_metrics(array).expect("shuffle keeps a permutation")
        })
    }

    proptest! {
        #[test]
        fn promote_moves_to_front_and_keeps_the_rest(order in any_order(), index in 0usize..Metric::COUNT) {
            let metric = Metric::from_index(index).expect("index in range");
            let mut promoted = order;
            promoted.promote(metric);

            prop_assert_eq!(promoted.primary(), metric);

            let rest_before: Vec<Metric> = order.iter().filter(|m| *m != metric).collect();
            let rest_after: Vec<Metric> = promoted.iter().skip(1).collect();
            prop_assert_eq!(rest_before, rest_after);
        }

        #[test]
        fn promote_keeps_a_permutation(order in any_order(), steps in prop::collection::vec(0usize..Metric::COUNT, 0..16)) {
            let mut order = order;
            for index in steps {
                order.promote_index(index);
            }
            prop_assert!(StackOrder::from_metrics(order.0).is_some());
        }
    }
}
