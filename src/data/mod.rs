/// Data layer: core types, loading, and chart series.
///
/// Architecture:
/// ```text
///  .json / .csv / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → Vec<InputRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  shape-checked records, dimension count
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  series  │  one ChartSeries per dimension → egui_plot
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod series;
