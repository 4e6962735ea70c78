use std::collections::BTreeMap;

pub struct StatsHelper;

impl StatsHelper {
    /// `part / whole * 100`, or `0.0` for an empty group.
    pub fn percent(part: usize, whole: usize) -> f64 {
        if whole == 0 {
            return 0.0;
        }
        part as f64 / whole as f64 * 100.0
    }

    pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
        let (sum, count) = values
            .into_iter()
            .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
        (count > 0).then(|| sum / count as f64)
    }

    /// Counts occurrences of each key.
    pub fn tally<K: Ord, I: IntoIterator<Item = K>>(keys: I) -> BTreeMap<K, usize> {
        let mut counts = BTreeMap::new();
        for key in keys {
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }
}

/// Mean of a percentage map, the reference line drawn under period charts.
pub fn mean_of<K>(map: &BTreeMap<K, f64>) -> Option<f64> {
    StatsHelper::mean(map.values().copied())
}
