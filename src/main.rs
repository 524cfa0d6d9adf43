#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_TITLE);

    iced::application(
        app::ArtworkSearchApp::build,
        app::ArtworkSearchApp::handle_update,
        app::ArtworkSearchApp::render_view,
    )
    .title(global_constants::APPLICATION_TITLE)
    .theme(app::ArtworkSearchApp::theme)
    .subscription(app::ArtworkSearchApp::handle_subscription)
    .window_size((1100.0, 820.0))
    .run()
}
