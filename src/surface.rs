use eframe::egui::Color32;
use log::debug;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned box between two corners, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bbox {
    pub min: Point,
    pub max: Point,
}

impl Bbox {
    /// Box spanning `half` pixels either side of `centre`.
    pub const fn around(centre: Point, half: i32) -> Self {
        Self {
            min: centre.offset(-half, -half),
            max: centre.offset(half, half),
        }
    }

    pub fn centre(&self) -> (f32, f32) {
        (
            (self.min.x + self.max.x) as f32 * 0.5,
            (self.min.y + self.max.y) as f32 * 0.5,
        )
    }
}

/// A shape inserted into a retained surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Oval {
        bbox: Bbox,
        color: Color32,
    },
    Rect {
        bbox: Bbox,
        color: Color32,
    },
    Line {
        from: Point,
        to: Point,
        color: Color32,
        width: u32,
    },
}

/// Retained-mode drawing target. Shapes stay until [`Surface::clear`].
pub trait Surface {
    fn fill_oval(&mut self, bbox: Bbox, color: Color32);
    fn fill_rect(&mut self, bbox: Bbox, color: Color32);
    fn line(&mut self, from: Point, to: Point, color: Color32, width: u32);
    fn clear(&mut self);
    fn resize(&mut self, width: u32, height: u32);
    fn set_background(&mut self, color: Color32);
}

/// Keeps every primitive in insertion order so it can be painted each frame.
#[derive(Debug, Clone)]
pub struct RetainedSurface {
    primitives: Vec<Primitive>,
    width: u32,
    height: u32,
    background: Color32,
}

impl RetainedSurface {
    pub fn new(background: Color32) -> Self {
        Self {
            primitives: Vec::new(),
            width: 0,
            height: 0,
            background,
        }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn background(&self) -> Color32 {
        self.background
    }
}

impl Surface for RetainedSurface {
    fn fill_oval(&mut self, bbox: Bbox, color: Color32) {
        self.primitives.push(Primitive::Oval { bbox, color });
    }

    fn fill_rect(&mut self, bbox: Bbox, color: Color32) {
        self.primitives.push(Primitive::Rect { bbox, color });
    }

    fn line(&mut self, from: Point, to: Point, color: Color32, width: u32) {
        self.primitives.push(Primitive::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn clear(&mut self) {
        debug!("clearing {} primitives", self.primitives.len());
        self.primitives.clear();
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn set_background(&mut self, color: Color32) {
        self.background = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_until_cleared() {
        let mut surface = RetainedSurface::new(Color32::WHITE);
        let bbox = Bbox::around(Point::new(5, 5), 2);

        surface.fill_rect(bbox, Color32::BLACK);
        surface.line(Point::new(0, 0), Point::new(9, 9), Color32::RED, 3);
        surface.fill_oval(bbox, Color32::BLUE);

        assert_eq!(surface.primitives().len(), 3);
        assert!(matches!(surface.primitives()[1], Primitive::Line { width: 3, .. }));

        surface.clear();
        assert!(surface.primitives().is_empty());
    }

    #[test]
    fn bbox_around_is_symmetric() {
        let bbox = Bbox::around(Point::new(10, -4), 3);
        assert_eq!(bbox.min, Point::new(7, -7));
        assert_eq!(bbox.max, Point::new(13, -1));
        assert_eq!(bbox.centre(), (10.0, -4.0));
    }
}
