use std::path::Path;

use crate::state::{Notice, NoticeLevel, PendingDelete, UiAction};

/// Yes/No confirmation before a delete.
pub fn confirm_delete(ctx: &egui::Context, pending: &PendingDelete, actions: &mut Vec<UiAction>) {
    egui::Window::new("Confirm")
        .id(egui::Id::new("confirm_delete"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(pending.question());
            ui.strong(pending.label());
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Yes").clicked() {
                    actions.push(UiAction::ConfirmDelete);
                }
                if ui.button("No").clicked() {
                    actions.push(UiAction::CancelDelete);
                }
            });
        });
}

/// The pop-up reporting the outcome of the last action.
pub fn notice(ctx: &egui::Context, notice: &Notice, actions: &mut Vec<UiAction>) {
    let title = match notice.level {
        NoticeLevel::Info => "Information",
        NoticeLevel::Error => "Error",
    };

    egui::Window::new(title)
        .id(egui::Id::new("notice"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            match notice.level {
                NoticeLevel::Info => ui.label(&notice.text),
                NoticeLevel::Error => ui.colored_label(ui.visuals().error_fg_color, &notice.text),
            };
            ui.add_space(8.0);
            let ok = ui.button("OK");
            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ok.clicked() || enter {
                actions.push(UiAction::DismissNotice);
            }
        });
}

/// Banner shown when the catalog could not be opened at startup.
pub fn error_banner(ui: &mut egui::Ui, db_path: &Path, error: &str) {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .show(ui, |ui| {
            ui.colored_label(
                ui.visuals().error_fg_color,
                format!("Could not open the catalog at {}", db_path.display()),
            );
            ui.label(error);
            ui.weak("Fix the path in Settings, then restart.");
        });
}
