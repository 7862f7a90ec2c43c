/// Row-major matrix of cell values, indexed `layer[y][x]`.
pub type Layer = Vec<Vec<u32>>;

pub const EMPTY: u32 = 0;
pub const OCCUPIED: u32 = 1;

/// Value written by a flood when no zone id is given. Never a final zone id.
pub const DEFAULT_FILL: u32 = 1;

/// Zone ids start here; the counter is pre-incremented from `FIRST_ZONE - 1`.
pub const FIRST_ZONE: u32 = 2;

/// The four 4-connected neighbor directions, in flood order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Neighbor of `(x, y)` in this direction, or `None` past the grid edge.
    pub fn step(self, x: usize, y: usize, width: usize, height: usize) -> Option<(usize, usize)> {
        let (dx, dy) = self.offset();
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if nx >= 0 && nx < width as i64 && ny >= 0 && ny < height as i64 {
            Some((nx as usize, ny as usize))
        } else {
            None
        }
    }
}

/// Read the cell of `layer` next to `(x, y)` in direction `dir`.
pub fn neighbor_value(layer: &Layer, x: usize, y: usize, dir: Direction) -> Option<u32> {
    let height = layer.len();
    let width = layer.first().map_or(0, |row| row.len());
    dir.step(x, y, width, height).map(|(nx, ny)| layer[ny][nx])
}

pub fn is_on_border(x: usize, y: usize, width: usize, height: usize) -> bool {
    x == 0 || y == 0 || x + 1 == width || y + 1 == height
}
