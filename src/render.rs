//! Frame rendering against an abstract drawing surface.

use crate::model::{Point, TileKind, Viewport};
use crate::projection::{diamond, tile_center, tile_to_screen};
use crate::settings::RenderSettings;
use crate::state::{Camera, Scene};

pub const COLOR_BACKGROUND: &str = "#000";
pub const COLOR_GROUND: &str = "#47b02e";
pub const COLOR_SELECT: &str = "#b02e33";
pub const COLOR_OUTLINE: &str = "#ddd";
pub const COLOR_BUILDING: &str = "#8a5a2b";

const OUTLINE_WIDTH: f64 = 2.0;

/// Drawing primitives the renderer issues. Nothing is ever read back.
pub trait Surface {
    fn viewport(&self) -> Viewport;
    fn clear(&mut self);
    fn fill_rect(&mut self, color: &str);
    fn fill_polygon(&mut self, points: &[Point], color: &str);
    fn stroke_line(&mut self, from: Point, to: Point, color: &str, width: f64);
    fn draw_text(&mut self, text: &str, at: Point, color: &str);
}

/// Clears, paints the background, then runs the ground pass and the
/// building pass over the same cell order.
pub fn render_frame<S: Surface>(surface: &mut S, scene: &Scene, settings: &RenderSettings) {
    surface.clear();
    surface.fill_rect(COLOR_BACKGROUND);

    let cam = &scene.camera;
    for cell in scene.grid.cells() {
        let selected = scene
            .selected
            .is_some_and(|t| t.column == cell.column && t.row == cell.row);
        draw_tile(surface, cell.column, cell.row, cam, selected, settings);
    }
    for cell in scene.grid.cells() {
        if cell.kind == TileKind::Building {
            draw_building(surface, cell.column, cell.row, cam);
        }
    }
}

fn draw_tile<S: Surface>(
    surface: &mut S,
    column: u32,
    row: u32,
    cam: &Camera,
    selected: bool,
    settings: &RenderSettings,
) {
    let at = tile_to_screen(column as i32, row as i32, cam);
    let (w, h) = (cam.tile_width, cam.tile_height);
    let pts = diamond(at, w, h);

    let fill = if selected { COLOR_SELECT } else { COLOR_GROUND };
    surface.fill_polygon(&pts, fill);

    if settings.show_outline {
        for i in 0..4 {
            surface.stroke_line(pts[i], pts[(i + 1) % 4], COLOR_OUTLINE, OUTLINE_WIDTH);
        }
    }
    if settings.show_coordinates {
        let c = tile_center(column as i32, row as i32, cam);
        let label = format!("{}.{}", column, row);
        surface.draw_text(&label, Point::new(c.x - 9.0, c.y + 3.0), COLOR_OUTLINE);
    }
}

/// Silhouette of a block standing on the inner part of the tile.
pub fn building_outline(at: Point, width: f64, height: f64) -> [Point; 6] {
    let cx = at.x + width / 2.0;
    let cy = at.y + height / 2.0;
    let hw = width * 0.3;
    let hh = height * 0.3;
    let lift = height * 0.8;
    [
        Point::new(cx - hw, cy),
        Point::new(cx, cy + hh),
        Point::new(cx + hw, cy),
        Point::new(cx + hw, cy - lift),
        Point::new(cx, cy - hh - lift),
        Point::new(cx - hw, cy - lift),
    ]
}

fn draw_building<S: Surface>(surface: &mut S, column: u32, row: u32, cam: &Camera) {
    let at = tile_to_screen(column as i32, row as i32, cam);
    let pts = building_outline(at, cam.tile_width, cam.tile_height);
    surface.fill_polygon(&pts, COLOR_BUILDING);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Grid, GridSize, TileCoord};
    use crate::state::Intent;

    #[derive(Debug, Clone, PartialEq)]
    enum Cmd {
        Clear,
        Rect(String),
        Poly(Vec<Point>, String),
        Line(String),
        Text(String, Point),
    }

    #[derive(Default)]
    struct Recorder {
        cmds: Vec<Cmd>,
    }

    impl Surface for Recorder {
        fn viewport(&self) -> Viewport {
            Viewport::new(1000.0, 800.0)
        }
        fn clear(&mut self) {
            self.cmds.push(Cmd::Clear);
        }
        fn fill_rect(&mut self, color: &str) {
            self.cmds.push(Cmd::Rect(color.to_string()));
        }
        fn fill_polygon(&mut self, points: &[Point], color: &str) {
            self.cmds.push(Cmd::Poly(points.to_vec(), color.to_string()));
        }
        fn stroke_line(&mut self, _from: Point, _to: Point, color: &str, _width: f64) {
            self.cmds.push(Cmd::Line(color.to_string()));
        }
        fn draw_text(&mut self, text: &str, at: Point, _color: &str) {
            self.cmds.push(Cmd::Text(text.to_string(), at));
        }
    }

    impl Recorder {
        fn polys(&self, color: &str) -> Vec<&Vec<Point>> {
            self.cmds
                .iter()
                .filter_map(|c| match c {
                    Cmd::Poly(p, col) if col == color => Some(p),
                    _ => None,
                })
                .collect()
        }
    }

    fn single_building_scene() -> Scene {
        let mut grid = Grid::new(GridSize { width: 20, height: 20 });
        grid.set(1, 12, TileKind::Building);
        Scene::new(grid, Viewport::new(1000.0, 800.0))
    }

    #[test]
    fn one_building_one_overlay() {
        let scene = single_building_scene();
        let mut r = Recorder::default();
        render_frame(&mut r, &scene, &RenderSettings::default());

        let b = r.polys(COLOR_BUILDING);
        assert_eq!(b.len(), 1);
        let at = tile_to_screen(1, 12, &scene.camera);
        let expected = building_outline(at, scene.camera.tile_width, scene.camera.tile_height);
        assert_eq!(b[0].as_slice(), expected.as_slice());
    }

    #[test]
    fn frame_starts_with_clear_and_background() {
        let scene = single_building_scene();
        let mut r = Recorder::default();
        render_frame(&mut r, &scene, &RenderSettings::default());
        assert_eq!(r.cmds[0], Cmd::Clear);
        assert_eq!(r.cmds[1], Cmd::Rect(COLOR_BACKGROUND.to_string()));
        assert_eq!(r.polys(COLOR_GROUND).len(), 400);
        // buildings come after every ground tile
        let last_ground = r
            .cmds
            .iter()
            .rposition(|c| matches!(c, Cmd::Poly(_, col) if col == COLOR_GROUND))
            .unwrap();
        let first_building = r
            .cmds
            .iter()
            .position(|c| matches!(c, Cmd::Poly(_, col) if col == COLOR_BUILDING))
            .unwrap();
        assert!(first_building > last_ground);
    }

    #[test]
    fn selected_tile_uses_highlight() {
        let mut scene = single_building_scene();
        scene.selected = Some(TileCoord { column: 4, row: 5 });
        let mut r = Recorder::default();
        render_frame(&mut r, &scene, &RenderSettings::default());
        let sel = r.polys(COLOR_SELECT);
        assert_eq!(sel.len(), 1);
        let at = tile_to_screen(4, 5, &scene.camera);
        assert_eq!(sel[0].as_slice(), diamond(at, 120.0, 60.0).as_slice());
        assert_eq!(r.polys(COLOR_GROUND).len(), 399);
    }

    #[test]
    fn outline_and_labels_follow_settings() {
        let scene = Scene::new(Grid::new(GridSize { width: 2, height: 3 }), Viewport::new(1000.0, 800.0));

        let mut r = Recorder::default();
        render_frame(&mut r, &scene, &RenderSettings::default());
        let lines = r.cmds.iter().filter(|c| matches!(c, Cmd::Line(_))).count();
        assert_eq!(lines, 24);
        let at = tile_to_screen(1, 2, &scene.camera);
        assert!(r.cmds.contains(&Cmd::Text("1.2".into(), Point::new(at.x + 51.0, at.y + 33.0))));

        let mut r = Recorder::default();
        let off = RenderSettings {
            show_coordinates: false,
            show_outline: false,
        };
        render_frame(&mut r, &scene, &off);
        assert!(!r.cmds.iter().any(|c| matches!(c, Cmd::Line(_) | Cmd::Text(..))));
    }

    #[test]
    fn overlay_follows_the_camera() {
        let mut scene = single_building_scene();
        scene.push(Intent::PointerDown(Point::new(500.0, 400.0)));
        scene.push(Intent::PointerMoved(Point::new(450.0, 420.0)));
        scene.drain_intents();

        let mut r = Recorder::default();
        render_frame(&mut r, &scene, &RenderSettings::default());
        let at = tile_to_screen(1, 12, &scene.camera);
        let b = r.polys(COLOR_BUILDING);
        assert_eq!(at, Point::new(scene.camera.pan_x + 780.0, scene.camera.pan_y + 270.0));
        assert_eq!(b[0].as_slice(), building_outline(at, 120.0, 60.0).as_slice());
    }
}
