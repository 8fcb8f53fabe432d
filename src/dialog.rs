use anyhow::{Context, Result};
use eframe::egui::{self, Align2, Color32, Key, Vec2, color_picker};
use log::{error, warn};
use native_dialog::{DialogBuilder, MessageLevel};

use crate::style::{SizeError, parse_size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Draw,
    Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTarget {
    Draw,
    Erase,
}

/// A modal prompt. Canvas input is ignored while one is open.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Color { target: ColorTarget, working: Color32 },
    Size { target: SizeTarget, text: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogOutcome {
    Pending,
    Cancelled,
    Color(ColorTarget, Color32),
    Size(SizeTarget, u32),
}

impl Dialog {
    pub fn color(target: ColorTarget, current: Color32) -> Self {
        Self::Color {
            target,
            working: current,
        }
    }

    pub fn size(target: SizeTarget, current: u32) -> Self {
        Self::Size {
            target,
            text: current.to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dialog::Color {
                target: ColorTarget::Draw,
                ..
            } => "Choose Draw Color",
            Dialog::Color {
                target: ColorTarget::Background,
                ..
            } => "Choose Background Color",
            Dialog::Size {
                target: SizeTarget::Draw,
                ..
            } => "Draw Size",
            Dialog::Size {
                target: SizeTarget::Erase,
                ..
            } => "Erase Size",
        }
    }

    /// Outcome of pressing OK. Invalid size text keeps the dialog open.
    pub fn confirm(&self) -> Result<DialogOutcome, SizeError> {
        match self {
            Dialog::Color { target, working } => Ok(DialogOutcome::Color(*target, *working)),
            Dialog::Size { target, text } => Ok(DialogOutcome::Size(*target, parse_size(text)?)),
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> DialogOutcome {
        let mut confirmed = false;
        let mut cancelled = false;
        let title = self.title();

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                match self {
                    Dialog::Color { working, .. } => {
                        color_picker::color_picker_color32(
                            ui,
                            working,
                            color_picker::Alpha::Opaque,
                        );
                    }
                    Dialog::Size { target, text } => {
                        let label = match target {
                            SizeTarget::Draw => "Enter draw size:",
                            SizeTarget::Erase => "Enter erase size:",
                        };
                        ui.label(label);

                        let response = ui.text_edit_singleline(text);
                        confirmed |=
                            response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                    }
                }

                ui.separator();
                ui.horizontal(|ui| {
                    confirmed |= ui.button("OK").clicked();
                    cancelled |= ui.button("Cancel").clicked();
                });

                cancelled |= ui.input(|i| i.key_pressed(Key::Escape));
            });

        if cancelled {
            return DialogOutcome::Cancelled;
        }

        if !confirmed {
            return DialogOutcome::Pending;
        }

        match self.confirm() {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("Rejected size entry: {err}");
                if let Err(err) = warn_invalid_size(&err) {
                    error!("{err:#}");
                }
                DialogOutcome::Pending
            }
        }
    }
}

fn warn_invalid_size(err: &SizeError) -> Result<()> {
    let text = format!("Illegal value: {err}.\nPlease try again.");

    DialogBuilder::message()
        .set_level(MessageLevel::Warning)
        .set_title("Illegal value")
        .set_text(&text)
        .alert()
        .show()
        .context("failed to show size warning")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_dialog_starts_with_current_value() {
        let dialog = Dialog::size(SizeTarget::Erase, 20);
        assert_eq!(
            dialog.confirm(),
            Ok(DialogOutcome::Size(SizeTarget::Erase, 20))
        );
    }

    #[test]
    fn invalid_size_text_does_not_confirm() {
        let dialog = Dialog::Size {
            target: SizeTarget::Draw,
            text: "abc".into(),
        };
        assert_eq!(
            dialog.confirm(),
            Err(SizeError::NotANumber("abc".into()))
        );

        let dialog = Dialog::Size {
            target: SizeTarget::Draw,
            text: String::new(),
        };
        assert_eq!(dialog.confirm(), Err(SizeError::Empty));
    }

    #[test]
    fn color_dialog_confirms_working_colour() {
        let mut dialog = Dialog::color(ColorTarget::Background, Color32::WHITE);
        if let Dialog::Color { working, .. } = &mut dialog {
            *working = Color32::YELLOW;
        }
        assert_eq!(
            dialog.confirm(),
            Ok(DialogOutcome::Color(ColorTarget::Background, Color32::YELLOW))
        );
        assert_eq!(dialog.title(), "Choose Background Color");
    }
}
