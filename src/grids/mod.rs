pub mod wall_grid;

pub use wall_grid::{Cell, WallGrid, Walls};

/// (row, column)
pub type Coord = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.0 < self.rows && coord.1 < self.columns
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.rows * self.columns
    }
}

/// Rows grow northwards: north of (r, c) is (r + 1, c).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
}

impl Direction {
    /// Canonical neighbor order, used everywhere neighbors are listed.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Coordinates one step in this direction, if they don't underflow. Upper
    /// bounds are left to the caller.
    pub fn step_from(self, coord: Coord) -> Option<Coord> {
        let (row, column) = coord;
        match self {
            Direction::North => Some((row + 1, column)),
            Direction::South => row.checked_sub(1).map(|row| (row, column)),
            Direction::East => Some((row, column + 1)),
            Direction::West => column.checked_sub(1).map(|column| (row, column)),
        }
    }

    /// Direction leading from `from` to `to` when the two are 4-adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        Direction::ALL
            .iter()
            .copied()
            .find(|dir| dir.step_from(from) == Some(to))
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// In-bounds neighbors of a cell, yielded in `Direction::ALL` order.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub north: Option<Coord>,
    pub south: Option<Coord>,
    pub east: Option<Coord>,
    pub west: Option<Coord>,

    counter: usize,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self {
            north: None,
            south: None,
            east: None,
            west: None,
            counter: 0,
        }
    }

    pub fn of(coord: Coord, dims: Dimensions) -> Self {
        let mut neighbors = Self::new();
        for dir in Direction::ALL.iter().copied() {
            let neighbor = dir.step_from(coord).filter(|n| dims.contains(*n));
            match dir {
                Direction::North => neighbors.north = neighbor,
                Direction::South => neighbors.south = neighbor,
                Direction::East => neighbors.east = neighbor,
                Direction::West => neighbors.west = neighbor,
            }
        }

        neighbors
    }

    fn get(&self, dir: Direction) -> Option<Coord> {
        match dir {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }
}

impl Iterator for Neighborhood {
    type Item = (Coord, Direction);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(dir) = Direction::ALL.get(self.counter).copied() {
            self.counter += 1;
            if let Some(coord) = self.get(dir) {
                return Some((coord, dir));
            }
        }

        None
    }
}
