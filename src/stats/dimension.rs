use serde::Deserialize;

use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Per-dimension aggregate statistics
// ---------------------------------------------------------------------------

/// Divisor used for the standard deviation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviationKind {
    /// Divide by N.
    #[default]
    Population,
    /// Divide by N - 1.
    Sample,
}

/// Aggregates of one dimension across every record of a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionStats {
    pub average: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub std_deviation: f64,
}

impl DimensionStats {
    /// Compute the aggregates of one column. `None` for an empty column.
    pub fn from_column<I>(column: I, kind: DeviationKind) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values: Vec<f64> = column.into_iter().collect();
        if values.is_empty() {
            return None;
        }

        let count = values.len() as f64;
        let minimum = values.iter().copied().fold(f64::INFINITY, f64::min);
        let maximum = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        // Summation rounding can carry the mean just outside the observed range.
        // An all-NaN column leaves minimum > maximum, where clamp would panic.
        let mean = values.iter().sum::<f64>() / count;
        let average = if minimum <= maximum {
            mean.clamp(minimum, maximum)
        } else {
            mean
        };

        let squared: f64 = values.iter().map(|v| (v - average).powi(2)).sum();
        let divisor = match kind {
            DeviationKind::Population => count,
            DeviationKind::Sample => count - 1.0,
        };
        // A single sample has no observable spread.
        let std_deviation = if divisor > 0.0 {
            (squared / divisor).sqrt()
        } else {
            0.0
        };

        Some(DimensionStats {
            average,
            minimum,
            maximum,
            std_deviation,
        })
    }
}

/// Population statistics for every dimension, index-aligned with the
/// dataset's dimensions. An empty dataset yields an empty vector.
pub fn compute_dimension_stats(dataset: &Dataset) -> Vec<DimensionStats> {
    compute_dimension_stats_with(dataset, DeviationKind::Population)
}

/// Like [`compute_dimension_stats`] with a selectable deviation divisor.
pub fn compute_dimension_stats_with(
    dataset: &Dataset,
    kind: DeviationKind,
) -> Vec<DimensionStats> {
    (0..dataset.dimensions())
        .filter_map(|dim| DimensionStats::from_column(dataset.column(dim), kind))
        .collect()
}
