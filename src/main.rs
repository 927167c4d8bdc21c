// src/main.rs

use std::sync::Arc;

use anyhow::Context;
use log::info;

use term_screen::color::color_mode_name;
use term_screen::config::CONFIG_PATH_ENV;
use term_screen::{Config, Dispatcher, ScreenManager};

/// 80x24, 16 colors.
const SETUP: [u8; 5] = [0x01, 0x03, 80, 24, 0x01];

/// Main entry point for the `term-screen` demo.
fn main() -> anyhow::Result<()> {
    let config_path = Config::path_from_env();
    let config = Config::load_or_default(config_path.as_deref())?;

    // RUST_LOG wins over the configured filter.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.logging.filter))
        .format_timestamp_micros()
        .init();

    info!("Starting term-screen demo...");
    match &config_path {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => info!("{} not set, using default configuration", CONFIG_PATH_ENV),
    }
    let dispatcher = Dispatcher::with_options(Arc::new(ScreenManager::new()), config.screen.clone());

    let mut stream = SETUP.to_vec();
    stream.extend_from_slice(&[0x02, 0x04, 10, 5, 1, b'H']); // 'H' in red at (10, 5)
    stream.extend_from_slice(&[0x03, 0x06, 0, 0, 79, 0, 4, b'=']); // top border in blue
    stream.extend_from_slice(&[0x03, 0x06, 0, 23, 79, 23, 4, b'=']); // bottom border
    stream.extend_from_slice(&[0x03, 0x06, 2, 2, 30, 9, 2, b'*']); // shallow diagonal in green
    stream.extend_from_slice(&[0x04, 0x0F, 11, 5, 3]);
    stream.extend_from_slice(b"ello, screen");
    stream.extend_from_slice(&[0xFF, 0x00]);

    let handled = dispatcher
        .run(&stream)
        .context("Failed to apply demo command stream")?;
    info!("Applied {} commands", handled);

    let screen = dispatcher
        .manager()
        .current()
        .context("No screen created")?;

    println!("Screen Created:");
    println!("Width: {}", screen.width());
    println!("Height: {}", screen.height());
    println!("Color Mode: {}", color_mode_name(screen.color_mode().as_byte()));

    let cell = screen.get_cell(10, 5).context("Error getting cell")?;
    println!();
    println!("Cell at (10,5):");
    println!("Character: {}", cell.c);
    println!("Foreground Color: {}", cell.fg);
    println!("Background Color: {}", cell.bg);

    println!();
    let fill = config.screen.fill;
    for (y, row) in screen.snapshot().rows().enumerate() {
        if row.iter().any(|cell| cell.c != fill) {
            let text: String = row.iter().map(|cell| cell.c).collect();
            println!("{:2} |{}|", y, text);
        }
    }

    info!("term-screen demo exited successfully.");
    Ok(())
}
