//! Small numeric helpers shared by the aggregations.

use serde::Serialize;

/// Mean / median / spread of a series, as annotated on each chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (n-1); `None` below two values.
    pub std_dev: Option<f64>,
}

impl SeriesSummary {
    /// Summarize `values`; `None` for an empty series.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mean = mean(values);
        Some(Self {
            count: values.len(),
            mean,
            median: quantile_sorted(&sorted, 0.5),
            std_dev: stddev_sample(values, mean),
        })
    }
}

pub(crate) fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / (xs.len() as f64)
}

/// Sample standard deviation (n-1), deterministic.
pub(crate) fn stddev_sample(xs: &[f64], mean: f64) -> Option<f64> {
    if xs.len() < 2 {
        return None;
    }
    let var = xs
        .iter()
        .map(|x| {
            let d = x - mean;
            d * d
        })
        .sum::<f64>()
        / ((xs.len() - 1) as f64);
    Some(var.sqrt())
}

/// Quantile with linear interpolation between closest ranks.
///
/// `sorted` must be ascending and non-empty.
pub(crate) fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * ((sorted.len() - 1) as f64);
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}
