use crate::app::MangaWorldApp;
use crate::state::UiAction;
use crate::widgets;

/// Render the work management screen: toolbar plus table.
pub fn show(ui: &mut egui::Ui, app: &mut MangaWorldApp) {
    ui.heading("Works");
    ui.separator();

    let has_authors = !app.catalog.authors.is_empty();

    ui.horizontal(|ui| {
        if ui
            .add_enabled(has_authors, egui::Button::new("Add work"))
            .on_disabled_hover_text("Create an author first.")
            .clicked()
        {
            app.actions.push(UiAction::OpenWorkForm(None));
        }
        if ui.button("Reload").clicked() {
            app.actions.push(UiAction::Reload);
        }
        ui.separator();
        ui.label(format!("{} works", app.catalog.works.len()));
    });

    ui.add_space(4.0);

    if app.catalog.works.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No works yet.");
        });
        return;
    }

    widgets::work_table::show(ui, &app.catalog.works, &mut app.actions);
}
