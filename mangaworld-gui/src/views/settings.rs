use std::path::PathBuf;

use crate::app::MangaWorldApp;
use crate::settings::DbPathSource;
use crate::state::UiAction;

/// Render the Settings view.
pub fn show(ui: &mut egui::Ui, app: &mut MangaWorldApp) {
    ui.heading("Settings");
    ui.separator();
    ui.add_space(8.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        show_database_section(ui, app);
        ui.add_space(16.0);
        show_files_section(ui, app);
    });
}

fn show_database_section(ui: &mut egui::Ui, app: &mut MangaWorldApp) {
    ui.strong("Database");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label("In use:");
        ui.monospace(app.db_path.display().to_string());
        ui.weak(format!("({})", app.db_path_source));
    });

    ui.horizontal(|ui| {
        ui.label("Status:");
        if app.store.is_some() {
            ui.label(format!(
                "open, {} authors, {} works",
                app.catalog.authors.len(),
                app.catalog.works.len()
            ));
        } else {
            ui.colored_label(ui.visuals().error_fg_color, "not open");
        }
        if ui
            .add_enabled(app.store.is_some(), egui::Button::new("Reload"))
            .clicked()
        {
            app.actions.push(UiAction::Reload);
        }
    });

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Database file:");
        ui.add(egui::TextEdit::singleline(&mut app.db_path_input).desired_width(320.0));
        if ui.button("Browse...").clicked()
            && let Some(path) = rfd::FileDialog::new()
                .add_filter("SQLite database", &["db", "sqlite", "sqlite3"])
                .set_file_name("catalog.db")
                .save_file()
        {
            app.db_path_input = path.display().to_string();
        }
    });

    let input = app.db_path_input.trim().to_string();
    let can_save = !input.is_empty() && PathBuf::from(&input) != app.db_path;
    ui.horizontal(|ui| {
        if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
            app.actions.push(UiAction::SaveDatabasePath(PathBuf::from(input)));
        }
        ui.weak("Takes effect on next launch.");
    });

    if let DbPathSource::EnvVar(var) = &app.db_path_source {
        ui.add_space(4.0);
        ui.colored_label(
            ui.visuals().warn_fg_color,
            format!("${} is set and overrides the saved path.", var),
        );
    }
}

fn show_files_section(ui: &mut egui::Ui, app: &mut MangaWorldApp) {
    ui.strong("Files");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label("Settings file:");
        ui.monospace(app.settings_file.display().to_string());
    });
}
