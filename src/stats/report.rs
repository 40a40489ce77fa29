use std::path::Path;

use anyhow::{Context, Result};

use crate::config::ViewerConfig;
use crate::data::model::Dataset;

use super::dimension::DimensionStats;
use super::narrator::{narrate, numeric_summary};

/// Plain-text report: header, numeric summary, then the narrative.
pub fn render_report(dataset: &Dataset, stats: &[DimensionStats], config: &ViewerConfig) -> String {
    if dataset.is_empty() {
        return "No data to display.\n".to_string();
    }

    let mut out = format!(
        "{} records, {} dimensions\n\n",
        dataset.len(),
        dataset.dimensions()
    );
    for line in numeric_summary(stats, config) {
        out.push_str(&line);
        out.push('\n');
    }
    for paragraph in narrate(stats, config) {
        out.push('\n');
        out.push_str(&paragraph);
        out.push('\n');
    }
    out
}

pub fn write_report(
    path: &Path,
    dataset: &Dataset,
    stats: &[DimensionStats],
    config: &ViewerConfig,
) -> Result<()> {
    std::fs::write(path, render_report(dataset, stats, config))
        .with_context(|| format!("writing report to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::InputRecord;
    use crate::stats::compute_dimension_stats;
    use tempfile::tempdir;

    #[test]
    fn report_lists_summary_then_narrative() {
        let ds = Dataset::new(vec![
            InputRecord::new("a", vec![1.0, 2.0]),
            InputRecord::new("b", vec![3.0, 4.0]),
        ])
        .unwrap();
        let stats = compute_dimension_stats(&ds);
        let report = render_report(&ds, &stats, &ViewerConfig::default());

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "2 records, 2 dimensions");
        assert_eq!(lines[2], "Input 1: average 2.000, std dev 1.000, min 1.000, max 3.000");
        assert_eq!(lines[3], "Input 2: average 3.000, std dev 1.000, min 2.000, max 4.000");
        assert!(lines[5].starts_with("Input 1 has an average value of 2.00."));
        assert!(lines[7].starts_with("Input 2 has an average value of 3.00."));
    }

    #[test]
    fn empty_dataset_report() {
        let ds = Dataset::default();
        assert_eq!(
            render_report(&ds, &[], &ViewerConfig::default()),
            "No data to display.\n"
        );
    }

    #[test]
    fn writes_report_to_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let ds = Dataset::new(vec![InputRecord::new("only", vec![0.5])]).unwrap();
        let stats = compute_dimension_stats(&ds);

        write_report(&path, &ds, &stats, &ViewerConfig::default()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("1 records, 1 dimensions"));
        assert!(text.contains("low variation"));
    }
}
