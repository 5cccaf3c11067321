use crate::state::{AuthorForm, UiAction};

/// Modal create/edit dialog for an author.
pub fn show(ctx: &egui::Context, form: &mut AuthorForm, actions: &mut Vec<UiAction>) {
    egui::Window::new(form.title())
        .id(egui::Id::new("author_form"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Grid::new("author_form_grid")
                .num_columns(2)
                .spacing([10.0, 10.0])
                .show(ui, |ui| {
                    ui.label("First name:");
                    ui.add(egui::TextEdit::singleline(&mut form.first_name).desired_width(200.0));
                    ui.end_row();

                    ui.label("Last name:");
                    ui.add(egui::TextEdit::singleline(&mut form.last_name).desired_width(200.0));
                    ui.end_row();
                });

            if let Some(err) = &form.error {
                ui.add_space(4.0);
                ui.colored_label(ui.visuals().error_fg_color, err);
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    actions.push(UiAction::SubmitAuthorForm);
                }
                if ui.button("Cancel").clicked() {
                    actions.push(UiAction::CloseForm);
                }
            });
        });
}
