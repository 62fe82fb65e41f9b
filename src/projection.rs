//! Isometric projection between tile coordinates and screen pixels.
//!
//! Advancing a column moves a tile right and up, advancing a row moves it
//! right and down. All functions are total: coordinates outside the grid
//! project and unproject like any other, bounds are the caller's concern.

use crate::model::Point;
use crate::state::Camera;

/// Top-left corner of the tile's bounding box.
pub fn tile_to_screen(column: i32, row: i32, cam: &Camera) -> Point {
    let (c, r) = (column as f64, row as f64);
    Point::new(
        (c + r) * cam.tile_width / 2.0 + cam.pan_x,
        (r - c) * cam.tile_height / 2.0 + cam.pan_y - cam.tile_height,
    )
}

pub fn tile_center(column: i32, row: i32, cam: &Camera) -> Point {
    let p = tile_to_screen(column, row, cam);
    Point::new(p.x + cam.tile_width / 2.0, p.y + cam.tile_height / 2.0)
}

/// Nearest tile to a screen point. The rounding cell of each tile is exactly
/// its drawn diamond; points on an edge may resolve to either neighbour.
pub fn screen_to_tile(screen: Point, cam: &Camera) -> (i32, i32) {
    let page_x = screen.x - cam.tile_width / 2.0 - cam.pan_x;
    let page_y = screen.y - cam.tile_height / 2.0 - (cam.pan_y - cam.tile_height);
    let u = page_x / cam.tile_width;
    let v = page_y / cam.tile_height;
    ((u - v).round() as i32, (u + v).round() as i32)
}

/// Diamond vertices for a tile anchored at `at`: left, top, right, bottom.
pub fn diamond(at: Point, width: f64, height: f64) -> [Point; 4] {
    let (hw, hh) = (width / 2.0, height / 2.0);
    [
        Point::new(at.x, at.y + hh),
        Point::new(at.x + hw, at.y),
        Point::new(at.x + width, at.y + hh),
        Point::new(at.x + hw, at.y + height),
    ]
}
