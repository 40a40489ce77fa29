use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// InputRecord – one labeled observation
// ---------------------------------------------------------------------------

/// A single labeled input vector (one row of the source data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    /// Display label, used as the x-axis tick of the chart.
    #[serde(default)]
    pub label: String,
    /// One value per dimension.
    pub values: Vec<f64>,
}

impl InputRecord {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

// ---------------------------------------------------------------------------
// DatasetError
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    /// A record's value count differs from the first record's.
    #[error("record {index} ('{label}') has {found} values, expected {expected}")]
    ShapeMismatch {
        index: usize,
        label: String,
        expected: usize,
        found: usize,
    },
}

// ---------------------------------------------------------------------------
// Dataset – validated, ordered collection of records
// ---------------------------------------------------------------------------

/// An ordered set of records that all share the same dimension count.
///
/// Insertion order is kept; it defines the x-axis order of the chart.
/// The empty dataset is valid and has zero dimensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<InputRecord>,
    dimensions: usize,
}

impl Dataset {
    /// Validate the records and build a dataset.
    ///
    /// The dimension count is taken from the first record; the first record
    /// that disagrees is reported as [`DatasetError::ShapeMismatch`].
    pub fn new(records: Vec<InputRecord>) -> Result<Self, DatasetError> {
        let dimensions = records.first().map_or(0, |r| r.values.len());

        if let Some((index, rec)) = records
            .iter()
            .enumerate()
            .find(|(_, r)| r.values.len() != dimensions)
        {
            return Err(DatasetError::ShapeMismatch {
                index,
                label: rec.label.clone(),
                expected: dimensions,
                found: rec.values.len(),
            });
        }

        Ok(Dataset {
            records,
            dimensions,
        })
    }

    pub fn records(&self) -> &[InputRecord] {
        &self.records
    }

    /// Number of values per record.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Values of one dimension across all records, in dataset order.
    ///
    /// Yields nothing when `dim` is out of range.
    pub fn column(&self, dim: usize) -> impl Iterator<Item = f64> + '_ {
        self.records
            .iter()
            .filter_map(move |r| r.values.get(dim).copied())
    }

    /// Record labels in dataset order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset_is_valid() {
        let ds = Dataset::new(Vec::new()).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.dimensions(), 0);
        assert_eq!(ds.column(0).count(), 0);
    }

    #[test]
    fn dimensions_come_from_first_record() {
        let ds = Dataset::new(vec![
            InputRecord::new("a", vec![1.0, 2.0, 3.0]),
            InputRecord::new("b", vec![4.0, 5.0, 6.0]),
        ])
        .unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.dimensions(), 3);
        assert_eq!(ds.column(1).collect::<Vec<_>>(), vec![2.0, 5.0]);
        assert_eq!(ds.labels().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn shorter_record_is_rejected() {
        let err = Dataset::new(vec![
            InputRecord::new("a", vec![1.0, 2.0]),
            InputRecord::new("b", vec![3.0, 4.0]),
            InputRecord::new("c", vec![5.0]),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            DatasetError::ShapeMismatch {
                index: 2,
                label: "c".into(),
                expected: 2,
                found: 1,
            }
        );
        assert_eq!(err.to_string(), "record 2 ('c') has 1 values, expected 2");
    }

    #[test]
    fn longer_record_is_rejected() {
        let err = Dataset::new(vec![
            InputRecord::new("a", vec![1.0]),
            InputRecord::new("b", vec![3.0, 4.0]),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::ShapeMismatch { index: 1, expected: 1, found: 2, .. }
        ));
    }
}
