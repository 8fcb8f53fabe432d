use eframe::egui::Color32;
use log::debug;
use thiserror::Error;

use crate::config::Config;

/// Largest brush or eraser size accepted from the user.
pub const MAX_SIZE: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Draw,
    Erase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub draw_color: Color32,
    pub background: Color32,
    pub draw_size: u32,
    pub erase_size: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SizeError {
    #[error("no size entered")]
    Empty,
    #[error("{0:?} is not a whole number")]
    NotANumber(String),
    #[error("{0} is outside 1..={max}", max = MAX_SIZE)]
    OutOfRange(i64),
}

impl Default for Style {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Style {
    pub fn from_config(config: &Config) -> Self {
        Self {
            draw_color: config.draw_color,
            background: config.background_color,
            draw_size: config.draw_size,
            erase_size: config.erase_size,
        }
    }

    /// Colour and size for `mode`, `None` when idle.
    pub fn brush(&self, mode: Mode) -> Option<(Color32, u32)> {
        match mode {
            Mode::Idle => None,
            Mode::Draw => Some((self.draw_color, self.draw_size)),
            Mode::Erase => Some((self.background, self.erase_size)),
        }
    }

    pub fn set_draw_color(&mut self, color: Color32) {
        debug!("draw colour -> {color:?}");
        self.draw_color = color;
    }

    pub fn set_background(&mut self, color: Color32) {
        debug!("background colour -> {color:?}");
        self.background = color;
    }

    /// `None` (a cancelled entry) keeps the current size. Returns whether it changed.
    pub fn set_draw_size(&mut self, size: Option<u32>) -> bool {
        update_size(&mut self.draw_size, size, "draw")
    }

    /// `None` (a cancelled entry) keeps the current size. Returns whether it changed.
    pub fn set_erase_size(&mut self, size: Option<u32>) -> bool {
        update_size(&mut self.erase_size, size, "erase")
    }
}

fn update_size(slot: &mut u32, size: Option<u32>, which: &str) -> bool {
    let Some(size) = size else {
        debug!("{which} size entry cancelled, keeping {slot}");
        return false;
    };

    if size == 0 || size > MAX_SIZE {
        debug!("{which} size {size} rejected, keeping {slot}");
        return false;
    }

    let changed = *slot != size;
    *slot = size;
    debug!("{which} size -> {size}");

    changed
}

/// Parses a size typed by the user.
pub fn parse_size(text: &str) -> Result<u32, SizeError> {
    let text = text.trim();

    if text.is_empty() {
        return Err(SizeError::Empty);
    }

    let value: i64 = text
        .parse()
        .map_err(|_| SizeError::NotANumber(text.to_owned()))?;

    if !(1..=MAX_SIZE as i64).contains(&value) {
        return Err(SizeError::OutOfRange(value));
    }

    Ok(value as u32)
}
