use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – statistics
// ---------------------------------------------------------------------------

/// Render the statistics table and the narrative summary.
pub fn stats_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Statistics");
    ui.separator();

    if !state.has_data() {
        ui.label("No data to display.");
        return;
    }

    let derived = &state.derived;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.push_id("stats_table", |ui: &mut Ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .column(Column::auto())
                    .columns(Column::remainder().at_least(56.0), 4)
                    .header(20.0, |mut header| {
                        for title in ["", "Average", "Std Dev", "Min", "Max"] {
                            header.col(|ui: &mut Ui| {
                                ui.strong(title);
                            });
                        }
                    })
                    .body(|mut body| {
                        for (row, &color) in derived.rows.iter().zip(&derived.colors) {
                            body.row(18.0, |mut table_row| {
                                table_row.col(|ui: &mut Ui| {
                                    ui.label(RichText::new(&row.name).color(color).strong());
                                });
                                for cell in
                                    [&row.average, &row.std_deviation, &row.minimum, &row.maximum]
                                {
                                    table_row.col(|ui: &mut Ui| {
                                        ui.monospace(cell);
                                    });
                                }
                            });
                        }
                    });
            });

            ui.add_space(8.0);
            ui.strong("Summary");
            ui.separator();
            for paragraph in &derived.narratives {
                ui.label(paragraph);
                ui.add_space(4.0);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.has_data(), egui::Button::new("Save report…"))
                .clicked()
            {
                save_report_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records, {} dimensions",
                ds.len(),
                ds.dimensions()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open input patterns")
        .add_filter("Supported files", &["json", "csv", "parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records with {} dimensions from {}",
                    dataset.len(),
                    dataset.dimensions(),
                    path.display()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.set_error(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn save_report_dialog(state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Save statistics report")
        .set_file_name("report.txt")
        .add_filter("Text", &["txt"])
        .save_file();

    if let Some(path) = file {
        let result = crate::stats::report::write_report(
            &path,
            dataset,
            &state.derived.stats,
            &state.config,
        );
        match result {
            Ok(()) => log::info!("Wrote report to {}", path.display()),
            Err(e) => {
                log::error!("Failed to save report: {e:#}");
                state.set_error(format!("Error: {e:#}"));
            }
        }
    }
}
