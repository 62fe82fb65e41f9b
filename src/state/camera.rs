use crate::model::{GridSize, Point, Viewport};

pub const BASE_TILE_WIDTH: f64 = 120.0;
pub const BASE_TILE_HEIGHT: f64 = 60.0;
pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 3;

/// Pan limits for the current zoom and viewport. `left`/`top` are the upper
/// bounds and `right`/`bottom` the lower ones; they cross when the grid is
/// smaller than the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Pan and zoom of the grid. Pan is applied to every projected tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub zoom: u8,
    pub pan_x: f64,
    pub pan_y: f64,
    pub tile_width: f64,
    pub tile_height: f64,
    /// Pan at the moment the current drag started.
    pub drag_start_x: f64,
    pub drag_start_y: f64,
    pub grid: GridSize,
    pub viewport: Viewport,
}

impl Camera {
    pub fn new(grid: GridSize, viewport: Viewport) -> Self {
        let mut cam = Self {
            zoom: MIN_ZOOM,
            pan_x: 0.0,
            pan_y: 0.0,
            tile_width: BASE_TILE_WIDTH,
            tile_height: BASE_TILE_HEIGHT,
            drag_start_x: 0.0,
            drag_start_y: 0.0,
            grid,
            viewport,
        };
        cam.recenter(Point::default());
        cam
    }

    fn update_tile_size(&mut self) {
        self.tile_width = BASE_TILE_WIDTH * self.zoom as f64;
        self.tile_height = BASE_TILE_HEIGHT * self.zoom as f64;
    }

    /// Pan that puts the grid's horizontal centre in the middle of the viewport.
    pub fn rest_position(&self) -> Point {
        Point::new(
            self.viewport.width / 2.0 - self.tile_width * self.grid.width as f64 / 2.0,
            self.viewport.height / 2.0,
        )
    }

    /// Moves to the rest position shifted by `drag_offset`, given in zoom-1 pixels.
    pub fn recenter(&mut self, drag_offset: Point) {
        let rest = self.rest_position();
        let z = self.zoom as f64;
        self.pan_x = rest.x + drag_offset.x * z;
        self.pan_y = rest.y + drag_offset.y * z;
        self.clamp();
    }

    pub fn begin_drag(&mut self) {
        self.drag_start_x = self.pan_x;
        self.drag_start_y = self.pan_y;
    }

    /// Pans by the distance between `down` and `current`, per axis, from the
    /// pan captured by [`Camera::begin_drag`].
    pub fn drag(&mut self, down: Point, current: Point) {
        let abs_x = (down.x - current.x).abs();
        let abs_y = (down.y - current.y).abs();

        self.pan_x = if down.x > current.x {
            self.drag_start_x - abs_x // left
        } else {
            self.drag_start_x + abs_x // right
        };
        self.pan_y = if down.y > current.y {
            self.drag_start_y - abs_y // up
        } else {
            self.drag_start_y + abs_y // down
        };

        self.clamp();
    }

    /// Pan moved since the last [`Camera::begin_drag`].
    pub fn drag_delta(&self) -> Point {
        Point::new(
            self.pan_x - self.drag_start_x,
            self.pan_y - self.drag_start_y,
        )
    }

    /// Returns `true` when the level changed. Levels outside
    /// [`MIN_ZOOM`]..=[`MAX_ZOOM`] are ignored.
    pub fn set_zoom(&mut self, level: i32, drag_offset: Point) -> bool {
        if !self.zoom_changes_to(level) {
            return false;
        }
        self.zoom = level as u8;
        self.update_tile_size();
        self.recenter(drag_offset);
        true
    }

    /// Whether `set_zoom(level, ..)` would move to a new level.
    pub fn zoom_changes_to(&self, level: i32) -> bool {
        level != self.zoom as i32 && (MIN_ZOOM as i32..=MAX_ZOOM as i32).contains(&level)
    }

    /// Zero-sized viewports leave the camera untouched and return `false`.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if viewport.is_empty() {
            return false;
        }
        self.viewport = viewport;
        self.clamp();
        true
    }

    pub fn bounds(&self) -> PanBounds {
        let max_x = self.tile_width * self.grid.width as f64 - self.viewport.width;
        let max_y = self.tile_height * self.grid.height as f64 - self.viewport.height;
        let center_y = self.tile_height * self.grid.height as f64 / 2.0;
        let y_offset = center_y + self.tile_height / 2.0;
        PanBounds {
            left: 0.0,
            right: -max_x,
            top: y_offset,
            bottom: -max_y + y_offset,
        }
    }

    /// Keeps the grid covering the viewport. The checks run in order, so
    /// when the grid is smaller than the viewport the later bound wins and
    /// the pan is pinned to a single value.
    pub fn clamp(&mut self) {
        let b = self.bounds();
        if self.pan_x >= b.left {
            self.pan_x = b.left;
        }
        if self.pan_x <= b.right {
            self.pan_x = b.right;
        }
        if self.pan_y >= b.top {
            self.pan_y = b.top;
        }
        if self.pan_y <= b.bottom {
            self.pan_y = b.bottom;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cam() -> Camera {
        Camera::new(GridSize { width: 20, height: 20 }, Viewport::new(1000.0, 800.0))
    }

    #[test]
    fn bounds_match_grid_and_viewport() {
        let c = cam();
        let b = c.bounds();
        assert_eq!(b.left, 0.0);
        assert_eq!(b.right, -1400.0);
        assert_eq!(b.top, 630.0);
        assert_eq!(b.bottom, 230.0);
    }

    #[test]
    fn starts_at_rest_position() {
        let c = cam();
        assert_eq!(c.zoom, 1);
        assert_eq!(c.pan_x, -700.0);
        assert_eq!(c.pan_y, 400.0);
    }

    #[test]
    fn drag_past_right_edge_is_clamped() {
        let mut c = cam();
        c.begin_drag();
        c.drag(Point::new(600.0, 400.0), Point::new(-700.0, 400.0));
        assert_eq!(c.pan_x, -1400.0);
        assert_eq!(c.pan_y, 400.0);

        c.pan_x = -2000.0;
        c.clamp();
        assert_eq!(c.pan_x, -1400.0);
    }

    #[test]
    fn drag_axes_are_independent() {
        let mut c = cam();
        c.begin_drag();
        c.drag(Point::new(500.0, 500.0), Point::new(550.0, 450.0));
        assert_eq!(c.pan_x, -650.0);
        assert_eq!(c.pan_y, 350.0);
        assert_eq!(c.drag_delta(), Point::new(50.0, -50.0));
    }

    #[test]
    fn clamp_is_idempotent() {
        let viewports = [
            Viewport::new(1000.0, 800.0),
            Viewport::new(5000.0, 4000.0),
            Viewport::new(300.0, 200.0),
        ];
        let pans = [-5000.0, -1400.0, -3.5, 0.0, 12.0, 630.0, 9000.0];
        for vp in viewports {
            for zoom in 1..=3 {
                for &px in &pans {
                    for &py in &pans {
                        let mut c = Camera::new(GridSize { width: 20, height: 20 }, vp);
                        c.set_zoom(zoom, Point::default());
                        c.pan_x = px;
                        c.pan_y = py;
                        c.clamp();
                        let once = c.clone();
                        c.clamp();
                        assert_eq!(c, once);
                    }
                }
            }
        }
    }

    #[test]
    fn small_grid_is_pinned() {
        let mut c = Camera::new(GridSize { width: 2, height: 2 }, Viewport::new(1000.0, 800.0));
        let b = c.bounds();
        for p in [-500.0, 0.0, 500.0] {
            c.pan_x = p;
            c.pan_y = p;
            c.clamp();
            assert_eq!(c.pan_x, b.right);
            assert_eq!(c.pan_y, b.bottom);
        }
    }

    #[test]
    fn zoom_stays_within_range() {
        let mut c = cam();
        for level in [5, -1, 0, 2, 4, 3, 100, 1, 3, 3, -7] {
            c.set_zoom(level, Point::default());
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&c.zoom));
        }
        assert_eq!(c.zoom, 3);
    }

    #[test]
    fn zoom_scales_tiles_and_ignores_same_level() {
        let mut c = cam();
        assert!(!c.set_zoom(1, Point::default()));
        assert!(c.set_zoom(2, Point::default()));
        assert_eq!(c.tile_width, 240.0);
        assert_eq!(c.tile_height, 120.0);
        assert!(!c.set_zoom(0, Point::default()));
        assert_eq!(c.zoom, 2);
    }

    #[test]
    fn zoom_keeps_drag_offset_proportional() {
        let mut c = cam();
        assert!(c.set_zoom(2, Point::new(-100.0, -50.0)));
        let rest = c.rest_position();
        assert_eq!(c.pan_x, rest.x - 200.0);
        assert_eq!(c.pan_y, rest.y - 100.0);
    }

    #[test]
    fn zero_size_resize_is_ignored() {
        let mut c = cam();
        let before = c.clone();
        assert!(!c.resize(Viewport::new(0.0, 800.0)));
        assert!(!c.resize(Viewport::new(1000.0, 0.0)));
        assert_eq!(c, before);
        assert!(c.resize(Viewport::new(1200.0, 900.0)));
        assert_eq!(c.viewport, Viewport::new(1200.0, 900.0));
    }

    #[test]
    fn drag_never_loses_the_grid() {
        let mut c = cam();
        let deltas = [-4000.0, -900.0, -1.0, 0.0, 37.0, 800.0, 5000.0];
        for &dx in &deltas {
            for &dy in &deltas {
                c.begin_drag();
                c.drag(Point::new(500.0, 400.0), Point::new(500.0 + dx, 400.0 + dy));
                let grid_w = c.tile_width * c.grid.width as f64;
                // horizontal extent of the diamond lattice
                assert!(c.pan_x < c.viewport.width && c.pan_x + grid_w > 0.0);
                // vertical extent: top of the back corner to the bottom of the front corner
                let top = c.pan_y - c.tile_height * (c.grid.width as f64 + 1.0) / 2.0;
                let bottom = top + c.tile_height * (c.grid.width + c.grid.height) as f64 / 2.0;
                assert!(top < c.viewport.height && bottom > 0.0);
            }
        }
    }
}
