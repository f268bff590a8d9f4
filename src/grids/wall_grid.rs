use crate::error::{MazeError, Result};
use crate::grids::{Coord, Dimensions, Direction, Neighborhood};

/// Wall flags of a single cell, indexed by `Direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls([bool; 4]);

impl Walls {
    pub fn all() -> Self {
        Walls([true; 4])
    }

    #[inline]
    pub fn has(&self, dir: Direction) -> bool {
        self.0[dir as usize]
    }

    #[inline]
    fn remove(&mut self, dir: Direction) {
        self.0[dir as usize] = false;
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub visited: bool,
    pub walls: Walls,
}

/// Fixed size grid of fully walled cells that passages get carved into.
///
/// Walls are only ever removed in pairs, so the wall a cell has facing a
/// neighbor always matches the wall that neighbor has facing back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGrid {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl WallGrid {
    pub fn with_dims(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(MazeError::InvalidDimension {
                rows,
                cols: columns,
            });
        }

        Ok(Self {
            cells: vec![Cell::default(); rows * columns],
            dims: Dimensions { rows, columns },
        })
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    fn index_of(&self, coord: Coord) -> Result<usize> {
        if self.dims.contains(coord) {
            Ok((self.dims.columns * coord.0) + coord.1)
        } else {
            Err(MazeError::OutOfBounds {
                coord,
                dims: self.dims,
            })
        }
    }

    pub fn cell(&self, coord: Coord) -> Result<&Cell> {
        let index = self.index_of(coord)?;
        Ok(&self.cells[index])
    }

    pub fn is_visited(&self, coord: Coord) -> Result<bool> {
        self.cell(coord).map(|cell| cell.visited)
    }

    pub fn walls_of(&self, coord: Coord) -> Result<Walls> {
        self.cell(coord).map(|cell| cell.walls)
    }

    pub fn mark_visited(&mut self, coord: Coord) -> Result<()> {
        let index = self.index_of(coord)?;
        self.cells[index].visited = true;
        Ok(())
    }

    pub fn remove_wall_between(&mut self, one: Coord, two: Coord) -> Result<()> {
        // validate both ends before touching either cell
        let index_one = self.index_of(one)?;
        let index_two = self.index_of(two)?;
        let dir = Direction::between(one, two)
            .ok_or(MazeError::NotAdjacent { a: one, b: two })?;

        self.cells[index_one].walls.remove(dir);
        self.cells[index_two].walls.remove(-dir);
        Ok(())
    }

    pub fn neighborhood_of(&self, coord: Coord) -> Result<Neighborhood> {
        self.index_of(coord)?;
        Ok(Neighborhood::of(coord, self.dims))
    }

    /// Unvisited neighbors in North, South, East, West order.
    pub fn unvisited_neighbors(&self, coord: Coord) -> Result<Vec<Coord>> {
        Ok(self
            .neighborhood_of(coord)?
            .filter(|(neighbor, _)| !self.visited_unchecked(*neighbor))
            .map(|(neighbor, _)| neighbor)
            .collect())
    }

    pub fn has_unvisited_neighbor(&self, coord: Coord) -> Result<bool> {
        Ok(self
            .neighborhood_of(coord)?
            .any(|(neighbor, _)| !self.visited_unchecked(neighbor)))
    }

    // only for coordinates coming out of a Neighborhood, which are in bounds
    #[inline]
    fn visited_unchecked(&self, coord: Coord) -> bool {
        self.cells[(self.dims.columns * coord.0) + coord.1].visited
    }

    /// Number of adjacent cell pairs with the wall between them removed.
    pub fn removed_wall_count(&self) -> usize {
        self.cells()
            .map(|(coord, cell)| {
                [Direction::North, Direction::East]
                    .iter()
                    .filter(|dir| {
                        dir.step_from(coord)
                            .map_or(false, |n| self.dims.contains(n))
                            && !cell.walls.has(**dir)
                    })
                    .count()
            })
            .sum()
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited).count()
    }

    /// Cells in row-major order along with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        let columns = self.dims.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| ((index / columns, index % columns), cell))
    }

    pub fn clear(&mut self) {
        self.cells = vec![Cell::default(); self.cells.len()];
    }
}

#[cfg(test)]
mod test_wall_grid {
    use super::*;

    fn assert_symmetric(grid: &WallGrid) {
        for (coord, cell) in grid.cells() {
            for (neighbor, dir) in grid.neighborhood_of(coord).unwrap() {
                let other = grid.walls_of(neighbor).unwrap();
                assert_eq!(cell.walls.has(dir), other.has(-dir), "{:?} {:?}", coord, dir);
            }
        }
    }

    #[test]
    fn starts_walled_and_unvisited() {
        let grid = WallGrid::with_dims(3, 4).unwrap();
        assert_eq!(grid.dims(), Dimensions { rows: 3, columns: 4 });
        assert_eq!(grid.cells().count(), 12);
        for (_, cell) in grid.cells() {
            assert!(!cell.visited);
            assert_eq!(cell.walls, Walls::all());
        }
        assert_eq!(grid.removed_wall_count(), 0);
        assert_eq!(grid.visited_count(), 0);
    }

    #[test]
    fn rejects_empty_dims() {
        assert_eq!(
            WallGrid::with_dims(0, 3),
            Err(MazeError::InvalidDimension { rows: 0, cols: 3 })
        );
        assert_eq!(
            WallGrid::with_dims(3, 0),
            Err(MazeError::InvalidDimension { rows: 3, cols: 0 })
        );
        assert!(WallGrid::with_dims(1, 1).is_ok());
    }

    #[test]
    fn clears_both_sides() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();

        grid.remove_wall_between((0, 0), (1, 0)).unwrap();
        assert!(!grid.walls_of((0, 0)).unwrap().has(Direction::North));
        assert!(!grid.walls_of((1, 0)).unwrap().has(Direction::South));
        assert!(grid.walls_of((0, 0)).unwrap().has(Direction::East));

        grid.remove_wall_between((1, 1), (1, 0)).unwrap();
        assert!(!grid.walls_of((1, 1)).unwrap().has(Direction::West));
        assert!(!grid.walls_of((1, 0)).unwrap().has(Direction::East));

        assert_eq!(grid.removed_wall_count(), 2);
        assert_symmetric(&grid);
    }

    #[test]
    fn rejects_bad_wall_pairs_without_mutating() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();
        let fresh = grid.clone();

        assert_eq!(
            grid.remove_wall_between((0, 0), (1, 1)),
            Err(MazeError::NotAdjacent { a: (0, 0), b: (1, 1) })
        );
        assert_eq!(
            grid.remove_wall_between((0, 0), (0, 0)),
            Err(MazeError::NotAdjacent { a: (0, 0), b: (0, 0) })
        );
        assert!(matches!(
            grid.remove_wall_between((1, 1), (2, 1)),
            Err(MazeError::OutOfBounds { coord: (2, 1), .. })
        ));
        assert!(matches!(
            grid.remove_wall_between((5, 0), (4, 0)),
            Err(MazeError::OutOfBounds { coord: (5, 0), .. })
        ));

        assert_eq!(grid, fresh);
    }

    #[test]
    fn out_of_bounds_queries() {
        let mut grid = WallGrid::with_dims(2, 3).unwrap();
        let dims = grid.dims();

        assert_eq!(
            grid.mark_visited((2, 0)),
            Err(MazeError::OutOfBounds { coord: (2, 0), dims })
        );
        assert!(grid.is_visited((0, 3)).is_err());
        assert!(grid.walls_of((9, 9)).is_err());
        assert!(grid.unvisited_neighbors((2, 2)).is_err());
    }

    #[test]
    fn visiting_is_idempotent() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();
        grid.mark_visited((1, 1)).unwrap();
        let once = grid.clone();
        grid.mark_visited((1, 1)).unwrap();

        assert_eq!(grid, once);
        assert!(grid.is_visited((1, 1)).unwrap());
        assert!(!grid.is_visited((0, 0)).unwrap());
    }

    #[test]
    fn unvisited_neighbors_in_canonical_order() {
        let mut grid = WallGrid::with_dims(3, 3).unwrap();

        assert_eq!(
            grid.unvisited_neighbors((1, 1)).unwrap(),
            vec![(2, 1), (0, 1), (1, 2), (1, 0)]
        );

        grid.mark_visited((0, 1)).unwrap();
        grid.mark_visited((1, 0)).unwrap();
        assert_eq!(grid.unvisited_neighbors((1, 1)).unwrap(), vec![(2, 1), (1, 2)]);
        assert!(grid.has_unvisited_neighbor((1, 1)).unwrap());

        grid.mark_visited((2, 1)).unwrap();
        grid.mark_visited((1, 2)).unwrap();
        assert!(grid.unvisited_neighbors((1, 1)).unwrap().is_empty());
        assert!(!grid.has_unvisited_neighbor((1, 1)).unwrap());
    }

    #[test]
    fn has_unvisited_neighbor_at_edges() {
        let mut grid = WallGrid::with_dims(1, 2).unwrap();
        assert!(grid.has_unvisited_neighbor((0, 0)).unwrap());
        assert!(grid.has_unvisited_neighbor((0, 1)).unwrap());

        grid.mark_visited((0, 1)).unwrap();
        assert!(!grid.has_unvisited_neighbor((0, 0)).unwrap());
        assert!(grid.has_unvisited_neighbor((0, 1)).unwrap());
        assert!(grid.has_unvisited_neighbor((0, 2)).is_err());

        let single = WallGrid::with_dims(1, 1).unwrap();
        assert!(!single.has_unvisited_neighbor((0, 0)).unwrap());
    }

    #[test]
    fn clear_restores_fresh_grid() {
        let mut grid = WallGrid::with_dims(2, 3).unwrap();
        grid.mark_visited((0, 0)).unwrap();
        grid.remove_wall_between((0, 0), (0, 1)).unwrap();

        grid.clear();
        assert_eq!(grid, WallGrid::with_dims(2, 3).unwrap());
    }
}
