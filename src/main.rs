#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod config;
mod dialog;
mod gui;
mod input;
mod math;
mod state;
mod stroke;
mod style;
mod surface;
mod throttle;

use anyhow::{Result, bail};

use log::{LevelFilter, info};

use crate::config::Config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    init_logging();
    info!("sketchpad v{VERSION}");

    let config = Config::from_args(std::env::args().skip(1));
    info!(
        "click: {}, stamps: {}, clear on resize: {}, throttle: {:?}",
        config.click_policy, config.stamp_shape, config.clear_on_resize, config.throttle_interval
    );

    if let Err(err) = gui::gui(config) {
        bail!("GUI error: {err}");
    }

    Ok(())
}

fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_module("eframe", LevelFilter::Warn)
        .filter_module("calloop", LevelFilter::Warn)
        .filter_module("winit", LevelFilter::Warn)
        .init();
}
