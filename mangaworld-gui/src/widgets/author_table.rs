use egui_extras::{Column, TableBuilder};
use mangaworld_catalog::AuthorListing;

use crate::state::{PendingDelete, UiAction};

/// Render the author table with inline Edit and Delete buttons.
pub fn show(ui: &mut egui::Ui, authors: &[AuthorListing], actions: &mut Vec<UiAction>) {
    let available_height = ui.available_height();
    let row_height = ui.spacing().interact_size.y + 4.0;

    let table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(50.0)) // ID
        .column(Column::initial(180.0).at_least(80.0)) // First name
        .column(Column::initial(180.0).at_least(80.0)) // Last name
        .column(Column::exact(60.0)) // Works
        .column(Column::exact(60.0)) // Edit
        .column(Column::exact(70.0)) // Delete
        .min_scrolled_height(0.0)
        .max_scroll_height(available_height);

    table
        .header(20.0, |mut header| {
            for title in ["ID", "First name", "Last name", "Works", "", ""] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, authors.len(), |mut row| {
                let listing = &authors[row.index()];
                let author = &listing.author;

                row.col(|ui| {
                    ui.label(author.id.to_string());
                });
                row.col(|ui| {
                    ui.label(&author.first_name);
                });
                row.col(|ui| {
                    ui.label(&author.last_name);
                });
                row.col(|ui| {
                    ui.label(listing.work_count.to_string());
                });
                row.col(|ui| {
                    if ui.button("Edit").clicked() {
                        actions.push(UiAction::OpenAuthorForm(Some(author.id)));
                    }
                });
                row.col(|ui| {
                    let mut response = ui.button("Delete");
                    if listing.is_referenced() {
                        response = response.on_hover_text(format!(
                            "Owns {} work(s); delete those first.",
                            listing.work_count
                        ));
                    }
                    if response.clicked() {
                        actions.push(UiAction::RequestDelete(PendingDelete::Author {
                            id: author.id,
                            label: author.display_name(),
                        }));
                    }
                });
            });
        });
}
