//! MangaWorld GUI
//!
//! Desktop application for managing a catalog of authors and their works.

use mangaworld_db::CatalogStore;
use mangaworld_gui::{GuiError, MangaWorldApp};
use mangaworld_gui::settings;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings_file = settings::settings_path();
    let app_settings = settings::load_settings();
    let (db_path, source) = settings::resolve_db_path(&app_settings);
    log::info!("Using catalog {} ({})", db_path.display(), source);

    // On failure the window still opens, showing the error; Settings can
    // point at another file.
    let store = CatalogStore::open(&db_path).map_err(|e| {
        let e = GuiError::from(e);
        log::error!("Failed to open catalog at {}: {}", db_path.display(), e);
        e.to_string()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("MangaWorld")
            .with_inner_size([app_settings.window.width, app_settings.window.height])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MangaWorld",
        options,
        Box::new(move |cc| {
            Ok(Box::new(MangaWorldApp::new(
                cc,
                store,
                app_settings,
                settings_file,
                db_path,
                source,
            )))
        }),
    )
}
