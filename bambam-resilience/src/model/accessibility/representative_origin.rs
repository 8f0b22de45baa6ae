use serde::{Deserialize, Serialize};

use crate::model::network::StationIndex;

/// how the station whose reachable area stands for the whole network is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RepresentativeOrigin {
    /// reachable count closest to the median count
    #[default]
    Median,
    /// reachable count closest to the mean count
    Mean,
}

impl RepresentativeOrigin {
    /// the target reachable count for this choice.
    pub fn target(&self, counts: &[usize]) -> Option<f64> {
        if counts.is_empty() {
            return None;
        }
        match self {
            RepresentativeOrigin::Median => median_count(counts),
            RepresentativeOrigin::Mean => {
                Some(counts.iter().sum::<usize>() as f64 / counts.len() as f64)
            }
        }
    }

    /// picks the station whose reachable count is closest to the target.
    /// ties go to the lowest station index.
    pub fn select(&self, counts: &[usize]) -> Option<StationIndex> {
        let target = self.target(counts)?;
        let mut best: Option<(usize, f64)> = None;
        for (idx, count) in counts.iter().enumerate() {
            let distance = (*count as f64 - target).abs();
            match best {
                Some((_, d)) if d <= distance => {}
                _ => best = Some((idx, distance)),
            }
        }
        best.map(|(idx, _)| StationIndex(idx))
    }
}

/// the element at index N/2 of the sorted counts.
pub fn median_count(counts: &[usize]) -> Option<f64> {
    let mut sorted = counts.to_vec();
    sorted.sort_unstable();
    sorted.get(sorted.len() / 2).map(|c| *c as f64)
}

impl std::fmt::Display for RepresentativeOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepresentativeOrigin::Median => write!(f, "median"),
            RepresentativeOrigin::Mean => write!(f, "mean"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_uses_upper_middle() {
        assert_eq!(median_count(&[4, 1, 3, 2]), Some(3.0));
        assert_eq!(median_count(&[5, 1, 3]), Some(3.0));
        assert_eq!(median_count(&[]), None);
    }

    #[test]
    fn test_select_median() {
        let counts = [1, 9, 4, 6, 5];
        assert_eq!(
            RepresentativeOrigin::Median.select(&counts),
            Some(StationIndex(4))
        );
    }

    #[test]
    fn test_select_mean_tie_goes_to_lowest_index() {
        // mean is 5, stations 0 and 2 are both 1 away
        let counts = [4, 10, 6, 0];
        assert_eq!(
            RepresentativeOrigin::Mean.select(&counts),
            Some(StationIndex(0))
        );
    }
}
