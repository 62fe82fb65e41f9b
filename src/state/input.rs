use crate::model::Point;

// Pointer state, written only by the intent handlers in `Scene`.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct PointerState {
    pub pos: Point,
    pub pressed: bool,
    pub pos_down: Point,
    pub pos_up: Point,
    /// Pan accumulated over every finished drag, in zoom-1 pixels.
    pub drag_offset: Point,
}

impl PointerState {
    pub fn press(&mut self, at: Point) {
        self.pressed = true;
        self.pos = at;
        self.pos_down = at;
    }

    /// `pan_delta` is how far the drag moved the camera, `zoom` the level it ran at.
    pub fn release(&mut self, at: Point, pan_delta: Point, zoom: u8) {
        self.pressed = false;
        self.pos = at;
        self.pos_up = at;
        self.fold_drag(pan_delta, zoom);
    }

    /// Adds a pan made at `zoom` to `drag_offset`, scaled back to zoom 1.
    pub fn fold_drag(&mut self, pan_delta: Point, zoom: u8) {
        let z = zoom.max(1) as f64;
        self.drag_offset.x += pan_delta.x / z;
        self.drag_offset.y += pan_delta.y / z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_accumulates_drag_in_base_pixels() {
        let mut p = PointerState::default();
        p.press(Point::new(10.0, 10.0));
        assert!(p.pressed);
        p.release(Point::new(30.0, 0.0), Point::new(40.0, -20.0), 2);
        assert!(!p.pressed);
        assert_eq!(p.pos_up, Point::new(30.0, 0.0));
        assert_eq!(p.drag_offset, Point::new(20.0, -10.0));
        p.press(Point::new(0.0, 0.0));
        p.release(Point::new(0.0, 0.0), Point::new(5.0, 5.0), 1);
        assert_eq!(p.drag_offset, Point::new(25.0, -5.0));
    }
}
