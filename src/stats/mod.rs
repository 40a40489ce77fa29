/// Statistics layer: per-dimension aggregates and their text renderings.
///
/// ```text
///   Dataset ──► dimension ──► Vec<DimensionStats>
///                                  │
///                    ┌─────────────┴─────────────┐
///                    ▼                           ▼
///              narrator                       report
///   (table rows, numeric summary,   (plain-text file export)
///    narrative paragraphs)
/// ```

pub mod dimension;
pub mod narrator;
pub mod report;

pub use dimension::{
    DeviationKind, DimensionStats, compute_dimension_stats, compute_dimension_stats_with,
};
