use std::collections::VecDeque;

use crate::Coords;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Unit step on the board, y grows downwards.
    pub fn delta(self) -> Coords {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn is_reverse_of(self, other: Direction) -> bool {
        matches!((self, other), (Up, Down) | (Down, Up) | (Right, Left) | (Left, Right))
    }

    /// Final byte of an `ESC [ x` cursor-key sequence.
    pub fn from_arrow_code(code: u8) -> Option<Direction> {
        match code {
            b'A' => Some(Up),
            b'B' => Some(Down),
            b'C' => Some(Right),
            b'D' => Some(Left),
            _ => None,
        }
    }

    pub fn head_char(self) -> char {
        match self {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

/// Snake body, head at the front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Coords>,
}

impl Snake {
    /// Lays out `size` cells (at least one) in a straight line trailing behind `head`.
    pub fn new(head: Coords, size: usize, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..size.max(1) as i32)
            .map(|i| (head.0 - dx * i, head.1 - dy * i))
            .collect();
        Snake { body }
    }

    /// `None` for an empty sequence.
    pub fn from_cells<I: IntoIterator<Item = Coords>>(cells: I) -> Option<Self> {
        let body: VecDeque<Coords> = cells.into_iter().collect();
        (!body.is_empty()).then_some(Snake { body })
    }

    pub fn head(&self) -> Coords {
        // Never empty: constructors seed at least one cell and pop_tail keeps one.
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, cell: Coords) -> bool {
        self.body.contains(&cell)
    }

    pub fn next_head(&self, direction: Direction) -> Coords {
        let (x, y) = self.head();
        let (dx, dy) = direction.delta();
        (x + dx, y + dy)
    }

    pub fn push_head(&mut self, cell: Coords) {
        self.body.push_front(cell);
    }

    /// Removes and returns the tail, keeping at least the head.
    pub fn pop_tail(&mut self) -> Option<Coords> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }
}
