use iced::{Application, Settings, Size};
use std::path::PathBuf;
use tracing::info;

mod app;
mod playback;
mod ui;

use app::PlayerApp;

fn main() -> iced::Result {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("info,cuepoint_core=debug,cuepoint_player=debug")
        .init();

    info!("Starting Cuepoint v{}", env!("CARGO_PKG_VERSION"));

    // Optional session file as the first argument
    let session_path = std::env::args_os().nth(1).map(PathBuf::from);

    PlayerApp::run(Settings {
        window: iced::window::Settings {
            size: Size::new(960.0, 640.0),
            min_size: Some(Size::new(640.0, 420.0)),
            position: iced::window::Position::Centered,
            ..Default::default()
        },
        ..Settings::with_flags(session_path)
    })
}
