//! Fixed-edge histograms

use serde::{Deserialize, Serialize};

/// Counts per bin over ascending edges
///
/// Bins are half-open `[edge[i], edge[i + 1])` except the last, which also
/// includes its upper edge. Values outside the edges are not counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn with_edges(edges: Vec<f64>, values: impl IntoIterator<Item = f64>) -> Self {
        let bins = edges.len().saturating_sub(1);
        let mut counts = vec![0; bins];

        if bins > 0 {
            let lo = edges[0];
            let hi = edges[bins];
            for value in values {
                if !(lo..=hi).contains(&value) {
                    continue;
                }
                // partition_point gives the first edge greater than value
                let idx = edges.partition_point(|e| *e <= value).saturating_sub(1);
                counts[idx.min(bins - 1)] += 1;
            }
        }

        Histogram { edges, counts }
    }

    /// `bins` equal-width bins spanning the observed range
    ///
    /// A degenerate range (all values equal) is widened to ±0.5.
    pub fn equal_width(values: &[f64], bins: usize) -> Self {
        if values.is_empty() || bins == 0 {
            return Histogram {
                edges: Vec::new(),
                counts: Vec::new(),
            };
        }

        let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if (hi - lo).abs() < f64::EPSILON {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| lo + width * i as f64).collect();
        edges.push(hi);

        Self::with_edges(edges, values.iter().copied())
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Lower/upper edge for each bin
    pub fn bin_ranges(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.edges.windows(2).map(|w| (w[0], w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_edges() {
        let h = Histogram::with_edges(vec![0.0, 5.0, 10.0], [0.0, 4.9, 5.0, 10.0, 11.0, -1.0]);
        assert_eq!(h.counts, vec![2, 2]);
        assert_eq!(h.total(), 4);
    }

    #[test]
    fn test_equal_width() {
        let values: Vec<f64> = (0..=100).map(|v| v as f64).collect();
        let h = Histogram::equal_width(&values, 10);
        assert_eq!(h.counts.len(), 10);
        assert_eq!(h.total(), 101);
        // last bin closed: 90..=100
        assert_eq!(h.counts[9], 11);
    }

    #[test]
    fn test_degenerate_range() {
        let h = Histogram::equal_width(&[42.0, 42.0, 42.0], 15);
        assert_eq!(h.total(), 3);
        assert_eq!(h.counts.len(), 15);
    }

    #[test]
    fn test_empty() {
        let h = Histogram::equal_width(&[], 15);
        assert_eq!(h.total(), 0);
        assert!(h.bin_ranges().next().is_none());
    }
}
