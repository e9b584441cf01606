//! Checkers game
//!
//! Plays in a window by default, or in the terminal with `--cli`.

use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use checkers::config::Args;
use checkers::ui::CheckersApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.game_config();
    info!(?config, cli = args.cli, "starting");

    if args.cli {
        let stdin = io::stdin();
        checkers::cli::run(config, stdin.lock(), io::stdout())?;
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Checkers"),
        ..Default::default()
    };

    eframe::run_native(
        "Checkers",
        options,
        Box::new(move |cc| Ok(Box::new(CheckersApp::new(cc, config)))),
    )?;
    Ok(())
}
