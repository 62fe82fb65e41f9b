//! Core data models for the isometric tile grid.
//! Cells are addressed by (column, row); type codes are plain `u8`s so game
//! logic can introduce new kinds without touching the renderer.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub column: u32,
    pub row: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    /// Bare ground.
    Empty,
    /// A building stands on this tile.
    Building,
    /// Any code the renderer has no special handling for.
    Other(u8),
}

impl TileKind {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => TileKind::Empty,
            1 => TileKind::Building,
            n => TileKind::Other(n),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            TileKind::Empty => 0,
            TileKind::Building => 1,
            TileKind::Other(n) => n,
        }
    }

    pub fn label(self) -> String {
        match self {
            TileKind::Empty => "Ground".to_string(),
            TileKind::Building => "Building".to_string(),
            TileKind::Other(n) => format!("Type {}", n),
        }
    }
}

/// One visited cell, as yielded by [`Grid::cells`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub column: u32,
    pub row: u32,
    pub kind: TileKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    /// Row-major type codes; length = width * height.
    codes: Vec<u8>,
}

pub const DEMO_GRID_SIZE: GridSize = GridSize {
    width: 20,
    height: 20,
};

/// Initial layout, indexed `DEMO_MAP[row][column]`.
const DEMO_MAP: [[u8; 20]; 20] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

impl Grid {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            codes: vec![0; size.width as usize * size.height as usize],
        }
    }

    /// Builds a grid from `rows[row][column]`. Ragged or empty tables yield `None`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Option<Self> {
        let width = rows.first()?.as_ref().len();
        if width == 0 || rows.iter().any(|r| r.as_ref().len() != width) {
            return None;
        }
        let codes = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().copied())
            .collect();
        Some(Self {
            size: GridSize {
                width: width as u32,
                height: rows.len() as u32,
            },
            codes,
        })
    }

    pub fn demo() -> Self {
        Self::from_rows(&DEMO_MAP[..]).unwrap_or_else(|| Self::new(DEMO_GRID_SIZE))
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn contains(&self, column: i64, row: i64) -> bool {
        column >= 0
            && row >= 0
            && column < self.size.width as i64
            && row < self.size.height as i64
    }

    fn idx(&self, column: u32, row: u32) -> Option<usize> {
        if column < self.size.width && row < self.size.height {
            Some(row as usize * self.size.width as usize + column as usize)
        } else {
            None
        }
    }

    pub fn get(&self, column: u32, row: u32) -> Option<TileKind> {
        self.idx(column, row)
            .map(|i| TileKind::from_code(self.codes[i]))
    }

    /// Returns `false` when the coordinate is outside the grid.
    pub fn set(&mut self, column: u32, row: u32, kind: TileKind) -> bool {
        match self.idx(column, row) {
            Some(i) => {
                self.codes[i] = kind.code();
                true
            }
            None => false,
        }
    }

    /// Swaps ground and building; other kinds are left alone.
    pub fn toggle_building(&mut self, column: u32, row: u32) -> Option<TileKind> {
        let next = match self.get(column, row)? {
            TileKind::Empty => TileKind::Building,
            TileKind::Building => TileKind::Empty,
            other => return Some(other),
        };
        self.set(column, row, next);
        Some(next)
    }

    /// Visits every cell back to front: columns descending, rows ascending.
    /// Both render passes rely on this order being the same every call.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let GridSize { width, height } = self.size;
        (0..width).rev().flat_map(move |column| {
            (0..height).map(move |row| Cell {
                column,
                row,
                kind: TileKind::from_code(self.codes[row as usize * width as usize + column as usize]),
            })
        })
    }

    pub fn count(&self, kind: TileKind) -> usize {
        let code = kind.code();
        self.codes.iter().filter(|&&c| c == code).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_grid_is_twenty_by_twenty_with_buildings() {
        let g = Grid::demo();
        assert_eq!(g.size(), GridSize { width: 20, height: 20 });
        assert_eq!(g.get(1, 12), Some(TileKind::Building));
        assert_eq!(g.get(0, 0), Some(TileKind::Empty));
        assert!(g.count(TileKind::Building) > 0);
    }

    #[test]
    fn out_of_range_lookups_are_none() {
        let mut g = Grid::new(GridSize { width: 3, height: 2 });
        assert_eq!(g.get(3, 0), None);
        assert_eq!(g.get(0, 2), None);
        assert!(!g.set(5, 5, TileKind::Building));
        assert!(!g.contains(-1, 0));
        assert!(g.contains(2, 1));
    }

    #[test]
    fn cells_visit_every_coordinate_once_in_back_to_front_order() {
        let g = Grid::new(GridSize { width: 3, height: 2 });
        let order: Vec<(u32, u32)> = g.cells().map(|c| (c.column, c.row)).collect();
        assert_eq!(order, vec![(2, 0), (2, 1), (1, 0), (1, 1), (0, 0), (0, 1)]);
        // restartable
        assert_eq!(g.cells().count(), 6);
    }

    #[test]
    fn from_rows_rejects_ragged_tables() {
        assert!(Grid::from_rows(&[vec![0u8, 1], vec![0]][..]).is_none());
        assert!(Grid::from_rows::<Vec<u8>>(&[]).is_none());
        let g = Grid::from_rows(&[[0u8, 1, 0], [7, 0, 0]][..]).unwrap();
        assert_eq!(g.size(), GridSize { width: 3, height: 2 });
        assert_eq!(g.get(1, 0), Some(TileKind::Building));
        assert_eq!(g.get(0, 1), Some(TileKind::Other(7)));
    }

    #[test]
    fn toggle_building_flips_ground_only() {
        let mut g = Grid::from_rows(&[[0u8, 1, 5]][..]).unwrap();
        assert_eq!(g.toggle_building(0, 0), Some(TileKind::Building));
        assert_eq!(g.toggle_building(1, 0), Some(TileKind::Empty));
        assert_eq!(g.toggle_building(2, 0), Some(TileKind::Other(5)));
        assert_eq!(g.toggle_building(3, 0), None);
        assert_eq!(g.count(TileKind::Building), 1);
    }

    #[test]
    fn type_codes_survive_set_and_get() {
        let mut g = Grid::new(GridSize { width: 2, height: 2 });
        assert!(g.set(1, 1, TileKind::Other(9)));
        assert_eq!(g.get(1, 1), Some(TileKind::Other(9)));
        assert_eq!(TileKind::from_code(1), TileKind::Building);
    }

    #[test]
    fn tall_thin_grids_size_their_storage_in_usize() {
        let g = Grid::new(GridSize { width: 1, height: 70_000 });
        assert_eq!(g.count(TileKind::Empty), 70_000);
        assert_eq!(g.get(0, 69_999), Some(TileKind::Empty));
        let empty = Grid::new(GridSize { width: 0, height: 5 });
        assert_eq!(empty.cells().count(), 0);
    }
}
