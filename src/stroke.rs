use std::time::Instant;

use eframe::egui::Color32;
use log::{debug, trace};

use crate::{
    config::{ClickPolicy, Config, StampShape},
    math::{chebyshev, interpolate_floor, sign},
    style::{Mode, Style},
    surface::{Bbox, Point, Surface},
    throttle::Throttle,
};

/// Motion up to this Chebyshev distance is stamped instead of drawn as a line.
pub const STAMP_DISTANCE: i32 = 3;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StrokeState {
    pub last: Point,
    pub mode: Mode,
}

#[derive(Debug, Clone)]
pub struct StrokeRenderer {
    pub style: Style,
    state: StrokeState,
    throttle: Throttle,
    click_policy: ClickPolicy,
    stamp_shape: StampShape,
}

impl StrokeRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            style: Style::from_config(config),
            state: StrokeState::default(),
            throttle: Throttle::new(config.throttle_interval),
            click_policy: config.click_policy,
            stamp_shape: config.stamp_shape,
        }
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn on_button_down(&mut self, surface: &mut impl Surface, point: Point, mode: Mode) {
        debug!("{mode:?} from {point:?}");

        self.state.last = point;
        self.state.mode = mode;

        if self.click_policy == ClickPolicy::Dot
            && let Some((color, size)) = self.style.brush(mode)
        {
            self.stamp(surface, point, color, size);
        }
    }

    pub fn on_button_up(&mut self) {
        self.state.mode = Mode::Idle;
    }

    /// Extends the active stroke to `point`. Returns whether the sample was rendered.
    pub fn on_motion(&mut self, surface: &mut impl Surface, point: Point, now: Instant) -> bool {
        let Some((color, size)) = self.style.brush(self.state.mode) else {
            return false;
        };

        if !self.throttle.accept(now) {
            return false;
        }

        let last = self.state.last;
        let dx = point.x - last.x;
        let dy = point.y - last.y;
        let distance = chebyshev(dx, dy);

        if distance <= STAMP_DISTANCE {
            // densify slow motion, thin lines would otherwise look dashed
            let steps = distance + 1;
            for i in 0..steps {
                let at = Point::new(
                    interpolate_floor(last.x, dx, i, steps),
                    interpolate_floor(last.y, dy, i, steps),
                );
                self.stamp(surface, at, color, size);
            }
        } else {
            // pull both ends one pixel inwards so consecutive segments don't overlap
            let (sx, sy) = (sign(dx), sign(dy));
            surface.line(last.offset(sx, sy), point.offset(-sx, -sy), color, size);
        }

        trace!("{last:?} -> {point:?} ({distance})");
        self.state.last = point;

        true
    }

    pub fn clear(&mut self, surface: &mut impl Surface) {
        surface.clear();
    }

    pub fn resize(&mut self, surface: &mut impl Surface, width: u32, height: u32) {
        debug!("resize to {width}x{height}");
        surface.resize(width, height);
    }

    pub fn set_background(&mut self, surface: &mut impl Surface, color: Color32) {
        self.style.set_background(color);
        surface.set_background(color);
    }

    fn stamp(&self, surface: &mut impl Surface, at: Point, color: Color32, size: u32) {
        let bbox = Bbox::around(at, stamp_half_extent(size));

        match self.stamp_shape {
            StampShape::Square => surface.fill_rect(bbox, color),
            StampShape::Oval => surface.fill_oval(bbox, color),
        }
    }
}

/// Half the side of a stamp for a brush of `size`, never below one pixel.
pub fn stamp_half_extent(size: u32) -> i32 {
    (size as i32 / 2 - 1).max(1)
}
