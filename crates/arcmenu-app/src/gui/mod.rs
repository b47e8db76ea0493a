pub mod app;
pub mod theme;
pub mod view;

use crate::config::AppConfig;
use app::AppModel;
use relm4::prelude::*;
use std::path::PathBuf;

pub fn run(config: AppConfig, config_path: PathBuf) {
    let (tx, rx) = async_channel::bounded(32);

    crate::sys::runtime::start_background_services(config_path.clone(), tx.clone());

    // GTK would otherwise try to parse our own subcommand.
    let app = RelmApp::new("org.arcmenu.arcmenu").with_args(Vec::new());

    app.run::<AppModel>((config, config_path, tx, rx));
}
