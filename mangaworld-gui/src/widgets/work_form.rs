use mangaworld_catalog::AuthorListing;

use crate::state::{UiAction, WorkForm};

/// Modal create/edit dialog for a work, with an author picker.
pub fn show(
    ctx: &egui::Context,
    form: &mut WorkForm,
    authors: &[AuthorListing],
    actions: &mut Vec<UiAction>,
) {
    egui::Window::new(form.title())
        .id(egui::Id::new("work_form"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Grid::new("work_form_grid")
                .num_columns(2)
                .spacing([10.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Title:");
                    ui.add(egui::TextEdit::singleline(&mut form.title).desired_width(220.0));
                    ui.end_row();

                    ui.label("Author:");
                    let selected = form
                        .author_id
                        .and_then(|id| authors.iter().find(|l| l.author.id == id))
                        .map(|l| l.author.display_name())
                        .unwrap_or_else(|| "Select an author".to_string());
                    egui::ComboBox::from_id_salt("work_form_author")
                        .selected_text(selected)
                        .width(220.0)
                        .show_ui(ui, |ui| {
                            for listing in authors {
                                let author = &listing.author;
                                ui.selectable_value(
                                    &mut form.author_id,
                                    Some(author.id),
                                    author.display_name(),
                                );
                            }
                        });
                    ui.end_row();
                });

            if let Some(err) = &form.error {
                ui.add_space(4.0);
                ui.colored_label(ui.visuals().error_fg_color, err);
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    actions.push(UiAction::SubmitWorkForm);
                }
                if ui.button("Cancel").clicked() {
                    actions.push(UiAction::CloseForm);
                }
            });
        });
}
