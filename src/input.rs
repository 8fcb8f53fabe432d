use crate::surface::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Draws.
    Primary,
    /// Erases.
    Secondary,
    /// Clears the canvas.
    Tertiary,
}

/// Raw canvas input, in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEvent {
    Press { button: Button, at: Point },
    Release { button: Button },
    Motion { at: Point },
    Resize { width: u32, height: u32 },
}

/// Keeps only the newest of each run of consecutive motion events.
pub fn coalesce_motion(events: &mut Vec<CanvasEvent>) {
    events.dedup_by(|next, prev| {
        let both_motion = matches!(next, CanvasEvent::Motion { .. })
            && matches!(prev, CanvasEvent::Motion { .. });

        if both_motion {
            *prev = *next;
        }

        both_motion
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motion(x: i32) -> CanvasEvent {
        CanvasEvent::Motion {
            at: Point::new(x, 0),
        }
    }

    #[test]
    fn motion_runs_collapse_to_newest() {
        let press = CanvasEvent::Press {
            button: Button::Primary,
            at: Point::new(0, 0),
        };
        let mut events = vec![motion(1), motion(2), press, motion(3), motion(4), motion(5)];

        coalesce_motion(&mut events);

        assert_eq!(events, vec![motion(2), press, motion(5)]);
    }
}
