use std::time::Instant;

use eframe::egui::{
    self, CornerRadius, Event, Frame, PointerButton, Pos2, Rect, Sense, Shape, Stroke,
    Vec2, ViewportBuilder, ViewportCommand, WindowLevel,
};

use crate::{
    config::Config,
    dialog::{ColorTarget, DialogOutcome, SizeTarget},
    input::{Button, CanvasEvent, coalesce_motion},
    state::Sketchpad,
    surface::{Point, Primitive},
};

pub fn gui(config: Config) -> eframe::Result {
    let window_level = if config.always_on_top {
        WindowLevel::AlwaysOnTop
    } else {
        WindowLevel::Normal
    };

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder {
            title: Some("Sketchpad".into()),
            app_id: Some("sketchpad".into()),
            inner_size: Some(Vec2::new(800.0, 600.0)),
            window_level: Some(window_level),
            ..Default::default()
        },
        persist_window: false,
        centered: true,
        ..Default::default()
    };

    let mut pad = Sketchpad::new(config);

    eframe::run_simple_native("sketchpad", options, move |ctx, _frame| {
        let mut level_change = None;

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.menu_button("Colors", |ui| {
                    if ui.button("Choose Draw Color").clicked() {
                        level_change = pad.open_color_dialog(ColorTarget::Draw);
                    }

                    if ui.button("Choose Background Color").clicked() {
                        level_change = pad.open_color_dialog(ColorTarget::Background);
                    }
                });

                let quick_colors = pad.config.quick_colors.clone();
                for (name, color) in quick_colors {
                    if ui.button(name).clicked() {
                        pad.set_draw_color(color);
                    }
                }

                ui.menu_button("Sizes", |ui| {
                    if ui.button("Set Draw Size").clicked() {
                        level_change = pad.open_size_dialog(SizeTarget::Draw);
                    }

                    if ui.button("Set Erase Size").clicked() {
                        level_change = pad.open_size_dialog(SizeTarget::Erase);
                    }
                });

                ui.menu_button("Canvas", |ui| {
                    if ui.button("Clear").clicked() {
                        pad.clear();
                    }
                });
            });
        });

        if let Some(dialog) = pad.dialog_mut() {
            let outcome = dialog.show(ctx);
            if outcome != DialogOutcome::Pending {
                level_change = pad.finish_dialog(outcome);
            }
        }

        if let Some(level) = level_change {
            ctx.send_viewport_cmd(ViewportCommand::WindowLevel(level));
        }

        egui::CentralPanel::default()
            .frame(Frame::NONE)
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
                let rect = response.rect;

                let mut events = vec![CanvasEvent::Resize {
                    width: rect.width().max(0.0) as u32,
                    height: rect.height().max(0.0) as u32,
                }];

                // presses only count over the canvas, everything else follows the stroke
                let hovered = response.contains_pointer();
                ui.input(|i| {
                    for event in &i.events {
                        if let Some(event) = canvas_event(event, rect, hovered) {
                            events.push(event);
                        }
                    }
                });
                coalesce_motion(&mut events);

                let now = Instant::now();
                let mut changed = false;
                for event in events {
                    changed |= pad.handle(event, now);
                }

                if changed {
                    ctx.request_repaint();
                }

                paint(&painter, rect, &pad);
            });
    })
}

fn canvas_event(event: &Event, rect: Rect, hovered: bool) -> Option<CanvasEvent> {
    match event {
        Event::PointerButton {
            pos,
            button,
            pressed,
            ..
        } => {
            let button = match button {
                PointerButton::Primary => Button::Primary,
                PointerButton::Secondary => Button::Secondary,
                PointerButton::Middle => Button::Tertiary,
                _ => return None,
            };

            if !*pressed {
                return Some(CanvasEvent::Release { button });
            }

            hovered.then(|| CanvasEvent::Press {
                button,
                at: to_canvas(*pos, rect),
            })
        }
        Event::PointerMoved(pos) => Some(CanvasEvent::Motion {
            at: to_canvas(*pos, rect),
        }),
        _ => None,
    }
}

fn to_canvas(pos: Pos2, rect: Rect) -> Point {
    let local = pos - rect.min;
    Point::new(local.x.round() as i32, local.y.round() as i32)
}

fn to_screen(point: Point, rect: Rect) -> Pos2 {
    rect.min + Vec2::new(point.x as f32, point.y as f32)
}

fn paint(painter: &egui::Painter, rect: Rect, pad: &Sketchpad) {
    let surface = pad.surface();
    painter.rect_filled(rect, CornerRadius::ZERO, surface.background());

    for primitive in surface.primitives() {
        match *primitive {
            Primitive::Oval { bbox, color } => {
                let (x, y) = bbox.centre();
                let radius = Vec2::new(
                    (bbox.max.x - bbox.min.x) as f32 * 0.5,
                    (bbox.max.y - bbox.min.y) as f32 * 0.5,
                );
                painter.add(Shape::ellipse_filled(
                    rect.min + Vec2::new(x, y),
                    radius,
                    color,
                ));
            }
            Primitive::Rect { bbox, color } => {
                let shape = Rect::from_min_max(to_screen(bbox.min, rect), to_screen(bbox.max, rect));
                painter.rect_filled(shape, CornerRadius::ZERO, color);
            }
            Primitive::Line {
                from,
                to,
                color,
                width,
            } => {
                painter.line_segment(
                    [to_screen(from, rect), to_screen(to, rect)],
                    Stroke::new(width as f32, color),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::new(0.0, 24.0), Vec2::new(200.0, 100.0))
    }

    #[test]
    fn pointer_positions_are_canvas_relative() {
        let point = to_canvas(Pos2::new(10.4, 30.6), canvas());
        assert_eq!(point, Point::new(10, 7));
        assert_eq!(to_screen(point, canvas()), Pos2::new(10.0, 31.0));
    }

    #[test]
    fn presses_outside_canvas_are_dropped_but_releases_kept() {
        let press = Event::PointerButton {
            pos: Pos2::new(5.0, 5.0),
            button: PointerButton::Primary,
            pressed: true,
            modifiers: Default::default(),
        };
        assert_eq!(canvas_event(&press, canvas(), false), None);

        let release = Event::PointerButton {
            pos: Pos2::new(5.0, 5.0),
            button: PointerButton::Middle,
            pressed: false,
            modifiers: Default::default(),
        };
        assert_eq!(
            canvas_event(&release, canvas(), false),
            Some(CanvasEvent::Release {
                button: Button::Tertiary
            })
        );
    }

    #[test]
    fn right_press_over_canvas_erases() {
        let press = Event::PointerButton {
            pos: Pos2::new(50.0, 74.0),
            button: PointerButton::Secondary,
            pressed: true,
            modifiers: Default::default(),
        };
        assert_eq!(
            canvas_event(&press, canvas(), true),
            Some(CanvasEvent::Press {
                button: Button::Secondary,
                at: Point::new(50, 50),
            })
        );
    }
}
