use crate::app::MangaWorldApp;
use crate::state::UiAction;
use crate::widgets;

/// Render the author management screen: toolbar plus table.
pub fn show(ui: &mut egui::Ui, app: &mut MangaWorldApp) {
    ui.heading("Authors");
    ui.separator();

    ui.horizontal(|ui| {
        if ui.button("Add author").clicked() {
            app.actions.push(UiAction::OpenAuthorForm(None));
        }
        if ui.button("Reload").clicked() {
            app.actions.push(UiAction::Reload);
        }
        ui.separator();
        ui.label(format!("{} authors", app.catalog.authors.len()));
    });

    ui.add_space(4.0);

    if app.catalog.authors.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No authors yet. Use \"Add author\" to create one.");
        });
        return;
    }

    widgets::author_table::show(ui, &app.catalog.authors, &mut app.actions);
}
