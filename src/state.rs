use std::time::Instant;

use eframe::egui::{Color32, WindowLevel};
use log::{debug, info};

use crate::{
    config::Config,
    dialog::{ColorTarget, Dialog, DialogOutcome, SizeTarget},
    input::{Button, CanvasEvent},
    stroke::StrokeRenderer,
    style::{Mode, Style},
    surface::RetainedSurface,
};

/// Everything the window needs, owned by the UI thread.
#[derive(Debug)]
pub struct Sketchpad {
    pub config: Config,
    renderer: StrokeRenderer,
    surface: RetainedSurface,
    dialog: Option<Dialog>,
    lowered: bool,
}

impl Sketchpad {
    pub fn new(config: Config) -> Self {
        Self {
            renderer: StrokeRenderer::new(&config),
            surface: RetainedSurface::new(config.background_color),
            config,
            dialog: None,
            lowered: false,
        }
    }

    pub fn surface(&self) -> &RetainedSurface {
        &self.surface
    }

    pub fn style(&self) -> &Style {
        &self.renderer.style
    }

    /// Feeds one canvas event to the renderer. Returns whether the canvas changed.
    pub fn handle(&mut self, event: CanvasEvent, now: Instant) -> bool {
        if self.dialog.is_some() {
            return false;
        }

        match event {
            CanvasEvent::Press { button, at } => {
                let mode = match button {
                    Button::Primary => Mode::Draw,
                    Button::Secondary => Mode::Erase,
                    Button::Tertiary => {
                        self.clear();
                        return true;
                    }
                };

                self.renderer.on_button_down(&mut self.surface, at, mode);
                true
            }
            CanvasEvent::Release { button } => {
                let active = match self.renderer.state().mode {
                    Mode::Draw => Some(Button::Primary),
                    Mode::Erase => Some(Button::Secondary),
                    Mode::Idle => None,
                };

                if active == Some(button) {
                    self.renderer.on_button_up();
                }
                false
            }
            CanvasEvent::Motion { at } => self.renderer.on_motion(&mut self.surface, at, now),
            CanvasEvent::Resize { width, height } => {
                if self.surface.size() == (width, height) {
                    return false;
                }

                self.renderer.resize(&mut self.surface, width, height);
                if self.config.clear_on_resize {
                    self.clear();
                }
                true
            }
        }
    }

    pub fn clear(&mut self) {
        info!("Clearing canvas");
        self.renderer.clear(&mut self.surface);
    }

    pub fn set_draw_color(&mut self, color: Color32) {
        self.renderer.style.set_draw_color(color);
    }

    pub fn set_background(&mut self, color: Color32) {
        self.renderer.set_background(&mut self.surface, color);
    }

    pub fn set_draw_size(&mut self, size: Option<u32>) -> bool {
        self.renderer.style.set_draw_size(size)
    }

    pub fn set_erase_size(&mut self, size: Option<u32>) -> bool {
        self.renderer.style.set_erase_size(size)
    }

    pub fn dialog_mut(&mut self) -> Option<&mut Dialog> {
        self.dialog.as_mut()
    }

    pub fn open_color_dialog(&mut self, target: ColorTarget) -> Option<WindowLevel> {
        let current = match target {
            ColorTarget::Draw => self.style().draw_color,
            ColorTarget::Background => self.style().background,
        };
        self.open_dialog(Dialog::color(target, current))
    }

    pub fn open_size_dialog(&mut self, target: SizeTarget) -> Option<WindowLevel> {
        let current = match target {
            SizeTarget::Draw => self.style().draw_size,
            SizeTarget::Erase => self.style().erase_size,
        };
        self.open_dialog(Dialog::size(target, current))
    }

    /// Opens `dialog` unless one is already showing. Returns the window level to
    /// switch to, if any, so the prompt can take focus.
    pub fn open_dialog(&mut self, dialog: Dialog) -> Option<WindowLevel> {
        if self.dialog.is_some() {
            return None;
        }

        debug!("opening {:?}", dialog.title());
        self.dialog = Some(dialog);
        self.renderer.on_button_up();

        if self.config.always_on_top {
            self.lowered = true;
            return Some(WindowLevel::Normal);
        }

        None
    }

    /// Applies a finished dialog. Returns the window level to restore, if any.
    pub fn finish_dialog(&mut self, outcome: DialogOutcome) -> Option<WindowLevel> {
        match outcome {
            DialogOutcome::Pending => return None,
            DialogOutcome::Cancelled => debug!("dialog cancelled"),
            DialogOutcome::Color(ColorTarget::Draw, color) => self.set_draw_color(color),
            DialogOutcome::Color(ColorTarget::Background, color) => self.set_background(color),
            DialogOutcome::Size(SizeTarget::Draw, size) => {
                self.set_draw_size(Some(size));
            }
            DialogOutcome::Size(SizeTarget::Erase, size) => {
                self.set_erase_size(Some(size));
            }
        }

        self.dialog = None;

        if std::mem::take(&mut self.lowered) {
            return Some(WindowLevel::AlwaysOnTop);
        }

        None
    }
}
