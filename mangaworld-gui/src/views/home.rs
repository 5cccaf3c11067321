use crate::app::MangaWorldApp;
use crate::state::{UiAction, View};

/// Render the welcome screen with shortcuts to both management screens.
pub fn show(ui: &mut egui::Ui, app: &mut MangaWorldApp) {
    let has_store = app.store.is_some();

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 4.0);
        ui.heading(egui::RichText::new("Welcome to MangaWorld").size(28.0).strong());
        ui.add_space(8.0);
        ui.label(format!(
            "{} authors, {} works in the catalog.",
            app.catalog.authors.len(),
            app.catalog.works.len()
        ));
        ui.add_space(24.0);

        ui.horizontal(|ui| {
            // Center the two buttons
            let width = 2.0 * 160.0 + ui.spacing().item_spacing.x;
            ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));

            let size = egui::vec2(160.0, 32.0);
            if ui
                .add_enabled(has_store, egui::Button::new("Manage authors").min_size(size))
                .clicked()
            {
                app.actions.push(UiAction::Navigate(View::Authors));
            }
            if ui
                .add_enabled(has_store, egui::Button::new("Manage works").min_size(size))
                .clicked()
            {
                app.actions.push(UiAction::Navigate(View::Works));
            }
        });
    });
}
