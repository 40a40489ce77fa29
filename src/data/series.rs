use super::model::Dataset;

// ---------------------------------------------------------------------------
// Chart series: one line per dimension
// ---------------------------------------------------------------------------

/// A single point of a series: the record label and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// One plotted line, i.e. one dimension across all records.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

/// Display name of a dimension, 1-indexed.
pub fn dimension_name(dim: usize) -> String {
    format!("Input {}", dim + 1)
}

/// Build the chart series for a dataset, points in dataset order.
pub fn build_series(dataset: &Dataset) -> Vec<ChartSeries> {
    (0..dataset.dimensions())
        .map(|dim| ChartSeries {
            name: dimension_name(dim),
            points: dataset
                .records()
                .iter()
                .map(|rec| SeriesPoint {
                    label: rec.label.clone(),
                    value: rec.values[dim],
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::InputRecord;

    #[test]
    fn one_series_per_dimension() {
        let ds = Dataset::new(vec![
            InputRecord::new("a", vec![1.0, 2.0]),
            InputRecord::new("b", vec![3.0, 4.0]),
            InputRecord::new("c", vec![5.0, 6.0]),
        ])
        .unwrap();

        let series = build_series(&ds);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Input 1");
        assert_eq!(series[1].name, "Input 2");

        let labels: Vec<&str> = series[1].points.iter().map(|p| p.label.as_str()).collect();
        let values: Vec<f64> = series[1].points.iter().map(|p| p.value).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
        assert_eq!(values, vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn empty_dataset_has_no_series() {
        let ds = Dataset::new(Vec::new()).unwrap();
        assert!(build_series(&ds).is_empty());
    }
}
