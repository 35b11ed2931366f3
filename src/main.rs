//! Rounded Progress - demo window for the rounded progress bar
//! A button animates the bar to random values; another one rebuilds it
//! across a save/restore boundary.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size((480.0, 260.0))
        .antialiasing(true)
        .run()?;

    Ok(())
}
