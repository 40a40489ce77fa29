use eframe::egui::Color32;

use crate::color::generate_palette;
use crate::config::ViewerConfig;
use crate::data::model::Dataset;
use crate::data::series::{ChartSeries, build_series};
use crate::stats::narrator::{StatsRow, narrate, stats_rows};
use crate::stats::{
    DeviationKind, DimensionStats, compute_dimension_stats, compute_dimension_stats_with,
};

// ---------------------------------------------------------------------------
// Derived data, recomputed once per dataset
// ---------------------------------------------------------------------------

/// Everything the panels draw, derived from the current dataset.
#[derive(Debug, Clone, Default)]
pub struct Derived {
    pub stats: Vec<DimensionStats>,
    pub rows: Vec<StatsRow>,
    pub narratives: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub colors: Vec<Color32>,
}

impl Derived {
    pub fn compute(dataset: &Dataset, config: &ViewerConfig) -> Self {
        let stats = match config.deviation {
            DeviationKind::Population => compute_dimension_stats(dataset),
            kind => compute_dimension_stats_with(dataset, kind),
        };
        let series = build_series(dataset);
        Derived {
            rows: stats_rows(&stats, config),
            narratives: narrate(&stats, config),
            colors: generate_palette(series.len()),
            stats,
            series,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<Dataset>,

    /// Statistics, summaries and series of `dataset` (cached).
    pub derived: Derived,

    pub config: ViewerConfig,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            dataset: None,
            derived: Derived::default(),
            config,
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset and recompute everything derived from it.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.derived = Derived::compute(&dataset, &self.config);
        log::debug!(
            "Computed statistics for {} dimensions over {} records",
            self.derived.stats.len(),
            dataset.len()
        );
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Record a failure for the status bar.
    pub fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Whether there is anything to draw.
    pub fn has_data(&self) -> bool {
        self.dataset.as_ref().is_some_and(|ds| !ds.is_empty())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}
