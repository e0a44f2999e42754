//! Perfect maze generation for hedge and wall layouts.
//!
//! Cells are addressed as `(x, z)` with `x` in `0..width` and `z` in
//! `0..height`. The entrance is an opening in the north edge (z = 0) and the
//! exit an opening in the south edge (z = height).

use std::collections::VecDeque;

use rand::Rng;

/// Wall segment in cell coordinates, from one lattice corner to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    pub from: (f32, f32),
    pub to: (f32, f32),
}

impl WallSegment {
    fn new(x0: usize, z0: usize, x1: usize, z1: usize) -> Self {
        Self {
            from: (x0 as f32, z0 as f32),
            to: (x1 as f32, z1 as f32),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.from.1 == self.to.1
    }

    pub fn midpoint(&self) -> (f32, f32) {
        ((self.from.0 + self.to.0) * 0.5, (self.from.1 + self.to.1) * 0.5)
    }
}

#[derive(Debug, Clone)]
pub struct Maze {
    width: usize,
    height: usize,
    open_east: Vec<bool>,
    open_south: Vec<bool>,
    entrance: usize,
    exit: usize,
}

impl Maze {
    /// Carves a maze with a randomized depth-first search.
    ///
    /// The walk uses an explicit stack, so large grids cannot overflow the
    /// call stack. A zero dimension is clamped to one cell.
    pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let cells = width * height;

        let mut maze = Self {
            width,
            height,
            open_east: vec![false; cells],
            open_south: vec![false; cells],
            entrance: rng.gen_range(0..width),
            exit: rng.gen_range(0..width),
        };

        let mut visited = vec![false; cells];
        let mut stack = vec![(0usize, 0usize)];
        visited[0] = true;

        while let Some(&(x, z)) = stack.last() {
            let mut candidates = [(0usize, 0usize); 4];
            let mut n = 0;
            if x > 0 && !visited[maze.index(x - 1, z)] {
                candidates[n] = (x - 1, z);
                n += 1;
            }
            if x + 1 < width && !visited[maze.index(x + 1, z)] {
                candidates[n] = (x + 1, z);
                n += 1;
            }
            if z > 0 && !visited[maze.index(x, z - 1)] {
                candidates[n] = (x, z - 1);
                n += 1;
            }
            if z + 1 < height && !visited[maze.index(x, z + 1)] {
                candidates[n] = (x, z + 1);
                n += 1;
            }

            if n == 0 {
                stack.pop();
                continue;
            }

            let next = candidates[rng.gen_range(0..n)];
            maze.open_between((x, z), next);
            visited[maze.index(next.0, next.1)] = true;
            stack.push(next);
        }

        maze
    }

    fn index(&self, x: usize, z: usize) -> usize {
        z * self.width + x
    }

    fn open_between(&mut self, a: (usize, usize), b: (usize, usize)) {
        let (lo, hi) = if (a.1, a.0) < (b.1, b.0) { (a, b) } else { (b, a) };
        let idx = self.index(lo.0, lo.1);
        if lo.1 == hi.1 {
            self.open_east[idx] = true;
        } else {
            self.open_south[idx] = true;
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn entrance(&self) -> (usize, usize) {
        (self.entrance, 0)
    }

    pub fn exit(&self) -> (usize, usize) {
        (self.exit, self.height - 1)
    }

    /// Whether two orthogonally adjacent cells are connected.
    pub fn is_open(&self, a: (usize, usize), b: (usize, usize)) -> bool {
        let dx = a.0.abs_diff(b.0);
        let dz = a.1.abs_diff(b.1);
        if dx + dz != 1 {
            return false;
        }
        let (lo, hi) = if (a.1, a.0) < (b.1, b.0) { (a, b) } else { (b, a) };
        let idx = self.index(lo.0, lo.1);
        if lo.1 == hi.1 {
            self.open_east[idx]
        } else {
            self.open_south[idx]
        }
    }

    /// Number of interior walls removed.
    pub fn passages(&self) -> usize {
        self.open_east.iter().chain(self.open_south.iter()).filter(|&&o| o).count()
    }

    fn neighbors(&self, (x, z): (usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut out = [None; 4];
        if x > 0 {
            out[0] = Some((x - 1, z));
        }
        if x + 1 < self.width {
            out[1] = Some((x + 1, z));
        }
        if z > 0 {
            out[2] = Some((x, z - 1));
        }
        if z + 1 < self.height {
            out[3] = Some((x, z + 1));
        }
        out.into_iter()
            .flatten()
            .filter(move |&n| self.is_open((x, z), n))
    }

    /// Shortest path from entrance to exit, inclusive of both cells.
    pub fn solve(&self) -> Vec<(usize, usize)> {
        let cells = self.width * self.height;
        let mut came_from: Vec<Option<(usize, usize)>> = vec![None; cells];
        let mut seen = vec![false; cells];
        let start = self.entrance();
        let goal = self.exit();

        let mut queue = VecDeque::from([start]);
        seen[self.index(start.0, start.1)] = true;
        while let Some(cell) = queue.pop_front() {
            if cell == goal {
                break;
            }
            for next in self.neighbors(cell) {
                let idx = self.index(next.0, next.1);
                if !seen[idx] {
                    seen[idx] = true;
                    came_from[idx] = Some(cell);
                    queue.push_back(next);
                }
            }
        }

        let mut path = vec![goal];
        let mut cursor = goal;
        while let Some(prev) = came_from[self.index(cursor.0, cursor.1)] {
            path.push(prev);
            cursor = prev;
        }
        path.reverse();
        path
    }

    /// Count of cells reachable from the entrance.
    pub fn reachable(&self) -> usize {
        let mut seen = vec![false; self.width * self.height];
        let start = self.entrance();
        let mut stack = vec![start];
        seen[self.index(start.0, start.1)] = true;
        let mut count = 0;
        while let Some(cell) = stack.pop() {
            count += 1;
            for next in self.neighbors(cell) {
                let idx = self.index(next.0, next.1);
                if !seen[idx] {
                    seen[idx] = true;
                    stack.push(next);
                }
            }
        }
        count
    }

    /// Every standing wall, boundary included, minus the two openings.
    pub fn walls(&self) -> Vec<WallSegment> {
        let (w, h) = (self.width, self.height);
        let mut walls = Vec::with_capacity(2 * w * h + w + h);

        walls.extend((0..w).filter(|&x| x != self.entrance).map(|x| WallSegment::new(x, 0, x + 1, 0)));
        walls.extend((0..h).map(|z| WallSegment::new(0, z, 0, z + 1)));

        for z in 0..h {
            for x in 0..w {
                let idx = self.index(x, z);
                if !self.open_east[idx] {
                    walls.push(WallSegment::new(x + 1, z, x + 1, z + 1));
                }
                let is_exit = z == h - 1 && x == self.exit;
                if !self.open_south[idx] && !is_exit {
                    walls.push(WallSegment::new(x, z + 1, x + 1, z + 1));
                }
            }
        }
        walls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn single_cell_maze_has_no_passages() {
        let mut rng = StdRng::seed_from_u64(0);
        let maze = Maze::generate(1, 1, &mut rng);
        assert_eq!(maze.passages(), 0);
        assert_eq!(maze.solve(), vec![(0, 0)]);
        // north minus entrance, west, east, south minus exit
        assert_eq!(maze.walls().len(), 2);
    }

    #[test]
    fn zero_dimensions_clamp_to_one() {
        let mut rng = StdRng::seed_from_u64(0);
        let maze = Maze::generate(0, 5, &mut rng);
        assert_eq!((maze.width(), maze.height()), (1, 5));
        assert_eq!(maze.passages(), 4);
    }

    #[test]
    fn non_adjacent_cells_are_never_open() {
        let mut rng = StdRng::seed_from_u64(4);
        let maze = Maze::generate(4, 4, &mut rng);
        assert!(!maze.is_open((0, 0), (1, 1)));
        assert!(!maze.is_open((0, 0), (0, 0)));
    }
}
