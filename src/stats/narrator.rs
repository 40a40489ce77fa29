use crate::config::ViewerConfig;
use crate::data::series::dimension_name;

use super::dimension::DimensionStats;

// ---------------------------------------------------------------------------
// Variance classification
// ---------------------------------------------------------------------------

/// Qualitative description of a dimension's spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarianceLevel {
    Low,
    SpreadOut,
}

impl VarianceLevel {
    /// `Low` when the deviation is strictly below the threshold.
    pub fn classify(std_deviation: f64, threshold: f64) -> Self {
        if std_deviation < threshold {
            VarianceLevel::Low
        } else {
            VarianceLevel::SpreadOut
        }
    }
}

// ---------------------------------------------------------------------------
// Numeric summary & table rows
// ---------------------------------------------------------------------------

/// Pre-formatted cells for one row of the statistics table.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsRow {
    pub name: String,
    pub average: String,
    pub std_deviation: String,
    pub minimum: String,
    pub maximum: String,
}

impl StatsRow {
    pub fn new(dim: usize, stats: &DimensionStats, decimals: usize) -> Self {
        StatsRow {
            name: dimension_name(dim),
            average: format!("{:.decimals$}", stats.average),
            std_deviation: format!("{:.decimals$}", stats.std_deviation),
            minimum: format!("{:.decimals$}", stats.minimum),
            maximum: format!("{:.decimals$}", stats.maximum),
        }
    }
}

pub fn stats_rows(stats: &[DimensionStats], config: &ViewerConfig) -> Vec<StatsRow> {
    stats
        .iter()
        .enumerate()
        .map(|(dim, s)| StatsRow::new(dim, s, config.numeric_decimals))
        .collect()
}

/// One line per dimension: `Input N: average A, std dev S, min m, max M`.
pub fn numeric_summary(stats: &[DimensionStats], config: &ViewerConfig) -> Vec<String> {
    stats_rows(stats, config)
        .into_iter()
        .map(|row| {
            format!(
                "{}: average {}, std dev {}, min {}, max {}",
                row.name, row.average, row.std_deviation, row.minimum, row.maximum
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Narrative paragraphs
// ---------------------------------------------------------------------------

/// One plain-language paragraph per dimension.
pub fn narrate(stats: &[DimensionStats], config: &ViewerConfig) -> Vec<String> {
    stats
        .iter()
        .enumerate()
        .map(|(dim, s)| narrate_one(dim, s, config))
        .collect()
}

fn narrate_one(dim: usize, s: &DimensionStats, config: &ViewerConfig) -> String {
    let d = config.narrative_decimals;
    let variation = match VarianceLevel::classify(s.std_deviation, config.variance_threshold) {
        VarianceLevel::Low => format!(
            "The values stay close to the average, showing low variation \
             (standard deviation {:.d$}).",
            s.std_deviation
        ),
        VarianceLevel::SpreadOut => format!(
            "The values are spread out around the average \
             (standard deviation {:.d$}).",
            s.std_deviation
        ),
    };

    format!(
        "{} has an average value of {:.d$}. {variation} \
         They range from {:.d$} to {:.d$}.",
        dimension_name(dim),
        s.average,
        s.minimum,
        s.maximum,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(std_deviation: f64) -> DimensionStats {
        DimensionStats {
            average: 2.0,
            minimum: 1.0,
            maximum: 3.0,
            std_deviation,
        }
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(VarianceLevel::classify(0.999, 1.0), VarianceLevel::Low);
        assert_eq!(VarianceLevel::classify(1.0, 1.0), VarianceLevel::SpreadOut);
    }

    #[test]
    fn low_deviation_reads_as_low_variation() {
        let text = narrate(&[stats(0.5)], &ViewerConfig::default());
        assert_eq!(
            text,
            vec![
                "Input 1 has an average value of 2.00. The values stay close to the average, \
                 showing low variation (standard deviation 0.50). They range from 1.00 to 3.00."
                    .to_string()
            ]
        );
    }

    #[test]
    fn high_deviation_reads_as_spread_out() {
        let text = narrate(&[stats(0.5), stats(2.0)], &ViewerConfig::default());
        assert!(text[1].starts_with("Input 2 "));
        assert!(text[1].contains("spread out"));
        assert!(!text[1].contains("low variation"));
        assert!(text[1].contains("(standard deviation 2.00)"));
    }

    #[test]
    fn threshold_follows_config() {
        let config = ViewerConfig {
            variance_threshold: 0.25,
            ..ViewerConfig::default()
        };
        assert!(narrate(&[stats(0.5)], &config)[0].contains("spread out"));
    }

    #[test]
    fn numeric_summary_uses_three_decimals() {
        let s = DimensionStats {
            average: 1.0 / 3.0,
            minimum: 0.0,
            maximum: 1.0,
            std_deviation: 0.47140452,
        };
        assert_eq!(
            numeric_summary(&[s], &ViewerConfig::default()),
            vec!["Input 1: average 0.333, std dev 0.471, min 0.000, max 1.000".to_string()]
        );
    }

    #[test]
    fn empty_stats_produce_no_text() {
        let config = ViewerConfig::default();
        assert!(narrate(&[], &config).is_empty());
        assert!(numeric_summary(&[], &config).is_empty());
        assert!(stats_rows(&[], &config).is_empty());
    }
}
