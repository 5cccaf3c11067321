use egui_extras::{Column, TableBuilder};
use mangaworld_catalog::WorkListing;

use crate::state::{PendingDelete, UiAction};

/// Render the work table with inline Edit and Delete buttons.
pub fn show(ui: &mut egui::Ui, works: &[WorkListing], actions: &mut Vec<UiAction>) {
    let available_height = ui.available_height();
    let row_height = ui.spacing().interact_size.y + 4.0;

    let table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(50.0)) // ID
        .column(Column::initial(260.0).at_least(100.0)) // Title
        .column(Column::initial(200.0).at_least(80.0)) // Author
        .column(Column::exact(60.0)) // Edit
        .column(Column::exact(70.0)) // Delete
        .min_scrolled_height(0.0)
        .max_scroll_height(available_height);

    table
        .header(20.0, |mut header| {
            for title in ["ID", "Title", "Author", "", ""] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, works.len(), |mut row| {
                let listing = &works[row.index()];
                let work = &listing.work;

                row.col(|ui| {
                    ui.label(work.id.to_string());
                });
                row.col(|ui| {
                    ui.label(&work.title);
                });
                row.col(|ui| {
                    if listing.author_name.is_some() {
                        ui.label(listing.author_label());
                    } else {
                        ui.weak(listing.author_label());
                    }
                });
                row.col(|ui| {
                    if ui.button("Edit").clicked() {
                        actions.push(UiAction::OpenWorkForm(Some(work.id)));
                    }
                });
                row.col(|ui| {
                    if ui.button("Delete").clicked() {
                        actions.push(UiAction::RequestDelete(PendingDelete::Work {
                            id: work.id,
                            label: work.title.clone(),
                        }));
                    }
                });
            });
        });
}
