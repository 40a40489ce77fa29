use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use crate::stats::DeviationKind;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "PATTERN_STATS_CONFIG";

const MAX_DECIMALS: usize = 12;

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// Tunables for the statistics panel and summaries.
///
/// Every field is optional in the JSON file:
///
/// ```json
/// { "variance_threshold": 0.25, "numeric_decimals": 4, "deviation": "sample" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Standard deviations strictly below this are described as low variation.
    pub variance_threshold: f64,
    /// Decimal places in the numeric summary and statistics table.
    pub numeric_decimals: usize,
    /// Decimal places in the narrative paragraphs.
    pub narrative_decimals: usize,
    /// Divisor used for the standard deviation.
    pub deviation: DeviationKind,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            variance_threshold: 1.0,
            numeric_decimals: 3,
            narrative_decimals: 2,
            deviation: DeviationKind::Population,
        }
    }
}

impl ViewerConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: ViewerConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Config from the file named by [`CONFIG_ENV`], or defaults.
    ///
    /// A broken file is logged and ignored so the viewer still starts.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        match Self::load(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config: {e:#}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.variance_threshold.is_finite() && self.variance_threshold >= 0.0,
            "variance_threshold must be a finite, non-negative number (got {})",
            self.variance_threshold
        );
        ensure!(
            self.numeric_decimals <= MAX_DECIMALS && self.narrative_decimals <= MAX_DECIMALS,
            "decimal places must be at most {MAX_DECIMALS}"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_panel_formatting() {
        let config = ViewerConfig::default();
        assert_eq!(config.variance_threshold, 1.0);
        assert_eq!(config.numeric_decimals, 3);
        assert_eq!(config.narrative_decimals, 2);
        assert_eq!(config.deviation, DeviationKind::Population);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"variance_threshold": 0.25, "deviation": "sample"}"#).unwrap();

        let config = ViewerConfig::load(&path).unwrap();
        assert_eq!(config.variance_threshold, 0.25);
        assert_eq!(config.deviation, DeviationKind::Sample);
        assert_eq!(config.numeric_decimals, 3);
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"variance_threshold": -1}"#).unwrap();

        let err = ViewerConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("variance_threshold"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"threshold": 2}"#).unwrap();
        assert!(ViewerConfig::load(&path).is_err());
    }
}
