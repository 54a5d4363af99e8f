use crate::snake::Snake;
use crate::Coords;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(width: u16, height: u16) -> Self {
        Bounds { width: width as i32, height: height as i32 }
    }

    pub fn contains(&self, (x, y): Coords) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn cells(&self) -> impl Iterator<Item = Coords> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y)))
    }
}

/// What a cell holds from the point of view of a head about to enter it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    OutOfBounds,
    Food,
    Snake,
    Empty,
}

/// Bounds go first: an off-board cell must never match a stored coordinate.
pub fn classify(cell: Coords, snake: &Snake, apple: Coords, bounds: Bounds) -> Collision {
    if !bounds.contains(cell) {
        Collision::OutOfBounds
    } else if cell == apple {
        Collision::Food
    } else if snake.contains(cell) {
        Collision::Snake
    } else {
        Collision::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake() -> Snake {
        Snake::from_cells([(5, 5), (4, 5), (3, 5)]).unwrap()
    }

    #[test]
    fn off_board_cells() {
        let bounds = Bounds::new(50, 25);
        for cell in [(-1, 0), (0, -1), (50, 3), (3, 25)] {
            assert_eq!(classify(cell, &snake(), (6, 5), bounds), Collision::OutOfBounds);
        }
    }

    #[test]
    fn bounds_checked_before_apple() {
        // A degenerate apple outside the board still reads as a wall.
        assert_eq!(classify((-1, 5), &snake(), (-1, 5), Bounds::new(50, 25)), Collision::OutOfBounds);
    }

    #[test]
    fn food_body_and_empty() {
        let bounds = Bounds::new(50, 25);
        assert_eq!(classify((6, 5), &snake(), (6, 5), bounds), Collision::Food);
        assert_eq!(classify((4, 5), &snake(), (6, 5), bounds), Collision::Snake);
        assert_eq!(classify((3, 5), &snake(), (6, 5), bounds), Collision::Snake);
        assert_eq!(classify((6, 6), &snake(), (6, 5), bounds), Collision::Empty);
    }

    #[test]
    fn board_cells_cover_every_coordinate_once() {
        let bounds = Bounds::new(4, 2);
        let cells: Vec<_> = bounds.cells().collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1), (3, 1)]);
        assert_eq!(bounds.cell_count(), cells.len());
    }
}
