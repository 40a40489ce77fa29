use std::ops::RangeInclusive;

use eframe::egui::{Color32, Ui};
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Pattern chart (central panel)
// ---------------------------------------------------------------------------

/// Render one line per dimension over the record axis.
pub fn pattern_plot(ui: &mut Ui, state: &AppState) {
    if !state.has_data() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view input patterns  (File → Open…)");
        });
        return;
    }

    let labels: Vec<String> = state
        .dataset
        .as_ref()
        .map(|ds| ds.labels().map(str::to_string).collect())
        .unwrap_or_default();

    Plot::new("pattern_plot")
        .legend(Legend::default())
        .x_axis_label("Record")
        .y_axis_label("Value")
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            record_tick(&labels, mark.value)
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (series, &color) in state
                .derived
                .series
                .iter()
                .zip(state.derived.colors.iter().chain(std::iter::repeat(&Color32::LIGHT_BLUE)))
            {
                let coords: Vec<[f64; 2]> = series
                    .points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| [i as f64, p.value])
                    .collect();

                plot_ui.line(
                    Line::new(coords.iter().copied().collect::<PlotPoints>())
                        .name(&series.name)
                        .color(color)
                        .width(1.5),
                );
                plot_ui.points(
                    Points::new(coords.into_iter().collect::<PlotPoints>())
                        .name(&series.name)
                        .color(color)
                        .radius(3.0),
                );
            }
        });
}

/// Tick text for an x position: the record label on integer positions only.
fn record_tick(labels: &[String], x: f64) -> String {
    if x.fract() != 0.0 || x < 0.0 {
        return String::new();
    }
    labels.get(x as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_only_on_records() {
        let labels = vec!["a".to_string(), "b".to_string()];
        assert_eq!(record_tick(&labels, 0.0), "a");
        assert_eq!(record_tick(&labels, 1.0), "b");
        assert_eq!(record_tick(&labels, 0.5), "");
        assert_eq!(record_tick(&labels, 2.0), "");
        assert_eq!(record_tick(&labels, -1.0), "");
    }
}
