use std::collections::VecDeque;

use crate::model::{Grid, Point, TileCoord, TileKind, Viewport};
use crate::projection::screen_to_tile;
use crate::state::{Camera, PointerState};
use crate::util::clog;

/// Input queued by DOM callbacks and applied at the start of the next frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    PointerMoved(Point),
    PointerDown(Point),
    PointerUp(Point),
    WheelScrolled { delta_y: f64 },
    Resized(Viewport),
    /// Flip ground and building on the tile under the point.
    ToggleBuilding(Point),
    /// Zoom by whole levels, from the on-screen controls.
    ZoomStep(i32),
    Recenter,
}

/// Summary shown by the HUD panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HudInfo {
    pub zoom: u8,
    pub selected: Option<TileCoord>,
    pub selected_kind: Option<TileKind>,
    pub buildings: usize,
}

/// Everything one grid view needs, passed explicitly to the renderer.
#[derive(Debug, Clone)]
pub struct Scene {
    pub pointer: PointerState,
    pub camera: Camera,
    pub grid: Grid,
    pub selected: Option<TileCoord>,
    intents: VecDeque<Intent>,
}

impl Scene {
    pub fn new(grid: Grid, viewport: Viewport) -> Self {
        Self {
            pointer: PointerState::default(),
            camera: Camera::new(grid.size(), viewport),
            grid,
            selected: None,
            intents: VecDeque::new(),
        }
    }

    pub fn push(&mut self, intent: Intent) {
        self.intents.push_back(intent);
    }

    /// Applies every queued intent in arrival order; returns how many ran.
    pub fn drain_intents(&mut self) -> usize {
        let mut n = 0;
        while let Some(intent) = self.intents.pop_front() {
            self.apply(intent);
            n += 1;
        }
        n
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::PointerMoved(at) => {
                self.pointer.pos = at;
                if self.pointer.pressed {
                    self.camera.drag(self.pointer.pos_down, at);
                    self.selected = None;
                } else {
                    self.selected = self.hit_test(at);
                }
            }
            Intent::PointerDown(at) => {
                self.pointer.press(at);
                self.camera.begin_drag();
                self.selected = None;
            }
            Intent::PointerUp(at) => {
                let delta = if self.pointer.pressed {
                    self.camera.drag_delta()
                } else {
                    Point::default()
                };
                self.pointer.release(at, delta, self.camera.zoom);
                self.camera.begin_drag();
                self.selected = self.hit_test(self.pointer.pos_up);
            }
            Intent::WheelScrolled { delta_y } => {
                if delta_y < 0.0 {
                    self.zoom_by(1);
                } else if delta_y > 0.0 {
                    self.zoom_by(-1);
                }
            }
            Intent::ToggleBuilding(at) => {
                if let Some(t) = self.hit_test(at) {
                    self.grid.toggle_building(t.column, t.row);
                }
            }
            Intent::ZoomStep(step) => self.zoom_by(step),
            Intent::Resized(viewport) => {
                if self.camera.resize(viewport) {
                    clog(&format!("viewport {}x{}", viewport.width, viewport.height));
                } else {
                    clog("ignoring zero-size viewport");
                }
            }
            Intent::Recenter => {
                self.pointer.drag_offset = Point::default();
                self.camera.recenter(Point::default());
            }
        }
    }

    /// A zoom during a drag closes the gesture so far at the old level and
    /// restarts it from the current pointer position at the new one.
    fn zoom_by(&mut self, step: i32) {
        let old = self.camera.zoom;
        let level = old as i32 + step;
        if !self.camera.zoom_changes_to(level) {
            return;
        }
        if self.pointer.pressed {
            let delta = self.camera.drag_delta();
            self.pointer.fold_drag(delta, old);
        }
        if self.camera.set_zoom(level, self.pointer.drag_offset) {
            clog(&format!("zoom -> {}", self.camera.zoom));
        }
        if self.pointer.pressed {
            self.camera.begin_drag();
            self.pointer.pos_down = self.pointer.pos;
        } else {
            self.selected = self.hit_test(self.pointer.pos);
        }
    }

    /// The tile under a screen point, or `None` outside the grid.
    pub fn hit_test(&self, at: Point) -> Option<TileCoord> {
        let (column, row) = screen_to_tile(at, &self.camera);
        if self.grid.contains(column as i64, row as i64) {
            Some(TileCoord {
                column: column as u32,
                row: row as u32,
            })
        } else {
            None
        }
    }

    pub fn hud(&self) -> HudInfo {
        HudInfo {
            zoom: self.camera.zoom,
            selected: self.selected,
            selected_kind: self
                .selected
                .and_then(|t| self.grid.get(t.column, t.row)),
            buildings: self.grid.count(TileKind::Building),
        }
    }
}
