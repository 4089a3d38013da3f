mod ui;

use eframe::egui;
use tracing::info;

use prest_board::storage::{self, FileStorage, PersistWorker, STORAGE_KEY};
use prest_board::Store;

fn main() -> anyhow::Result<()> {
    let settings = ui::settings_io::load_settings();

    tracing_subscriber::fmt()
        .with_max_level(settings.log_level())
        .init();

    let board_storage = settings
        .storage_dir
        .clone()
        .map(FileStorage::new)
        .unwrap_or_default();
    info!(dir = %board_storage.dir().display(), "board storage");

    let mut store = Store::new(
        storage::hydrate(&board_storage, STORAGE_KEY),
        settings.store_config(),
    );
    let persist = PersistWorker::spawn(board_storage, STORAGE_KEY);
    persist.attach(&mut store);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 860.0])
            .with_min_inner_size([320.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Prest-board",
        options,
        Box::new(move |_cc| Ok(Box::new(ui::app::BoardApp::new(store, settings, persist)))),
    )
    .map_err(|e| anyhow::anyhow!("board window failed: {e}"))
}
