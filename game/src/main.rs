use std::error::Error;

use engine::app::{AppConfig, run_game};
use game::gamepad::{GamepadSource, NoGamepad};
use game::headful::{BlockfallApp, GilrsGamepads};
use game::settings::SettingsStore;
use game::view::canvas_size;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let store = SettingsStore::from_env();
    let settings = store.load();
    log::info!("settings from {}", store.path().display());

    let config = AppConfig {
        title: "Blockfall".to_string(),
        canvas: canvas_size(&settings.board),
        vsync: Some(settings.video.vsync),
    };
    let pads: Box<dyn GamepadSource> = match GilrsGamepads::new() {
        Ok(pads) => Box::new(pads),
        Err(err) => {
            log::warn!("gamepad support unavailable, keyboard only: {err}");
            Box::new(NoGamepad)
        }
    };
    run_game(config, BlockfallApp::new(settings, pads))
}
