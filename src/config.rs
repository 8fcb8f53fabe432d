use std::{fmt::Display, time::Duration};

use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Config {
    /// Colour of new strokes.
    pub draw_color: Color32,
    /// Canvas colour, also used by the eraser.
    pub background_color: Color32,
    /// Brush size in pixels.
    pub draw_size: u32,
    /// Eraser size in pixels.
    pub erase_size: u32,
    /// Minimum time between two accepted motion samples.
    pub throttle_interval: Duration,
    /// Whether resizing the window wipes the canvas.
    pub clear_on_resize: bool,
    /// What a press without motion leaves behind.
    pub click_policy: ClickPolicy,
    /// Shape stamped for short motion.
    pub stamp_shape: StampShape,
    /// Keep the window above other windows.
    pub always_on_top: bool,
    /// Colours offered as one-click shortcuts in the menu bar.
    pub quick_colors: Vec<(String, Color32)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickPolicy {
    /// Nothing is drawn until the pointer moves.
    Ignore,
    /// A single stamp is drawn at the press location.
    Dot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampShape {
    Square,
    Oval,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            draw_color: Color32::BLACK,
            background_color: Color32::WHITE,
            draw_size: 3,
            erase_size: 20,
            throttle_interval: Duration::from_millis(8),
            clear_on_resize: false,
            click_policy: ClickPolicy::Ignore,
            stamp_shape: StampShape::Square,
            always_on_top: true,
            quick_colors: vec![
                ("Black".into(), Color32::BLACK),
                ("Purple".into(), Color32::from_rgb(0x80, 0x00, 0xFF)),
                ("Red".into(), Color32::RED),
            ],
        }
    }
}

impl Config {
    /// Applies command line switches on top of the defaults.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();

        for arg in args {
            match arg.as_ref().trim() {
                "--clear-on-resize" => config.clear_on_resize = true,
                "--dot-on-click" => config.click_policy = ClickPolicy::Dot,
                "--oval-stamps" => config.stamp_shape = StampShape::Oval,
                "--no-topmost" => config.always_on_top = false,
                other => log::warn!("Ignoring unknown argument {other:?}"),
            }
        }

        config
    }
}

impl Display for ClickPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ClickPolicy::Ignore => "Ignore",
            ClickPolicy::Dot => "Dot",
        })
    }
}

impl Display for StampShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            StampShape::Square => "Square",
            StampShape::Oval => "Oval",
        })
    }
}
