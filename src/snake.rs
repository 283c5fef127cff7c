use crate::grid::Cell;
use Direction::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn reverse(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_reverse_of(self, other: Direction) -> bool {
        self == other.reverse()
    }

    /// The cell one step away from `from` in this direction.
    pub fn step(self, from: Cell) -> Cell {
        match self {
            Up => Cell::new(from.x, from.y - 1),
            Down => Cell::new(from.x, from.y + 1),
            Left => Cell::new(from.x - 1, from.y),
            Right => Cell::new(from.x + 1, from.y),
        }
    }
}

/// Ordered body segments, head first. Always at least one segment long;
/// overlapping segments are possible after a bad move and are the collision
/// check's job to catch, not this type's.
#[derive(Debug, Clone)]
pub struct Snake {
    segments: Vec<Cell>,
}

impl Snake {
    pub fn new(head: Cell) -> Self {
        Snake { segments: vec![head] }
    }

    #[cfg(test)]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        assert!(!segments.is_empty(), "a snake has at least one segment");
        Snake { segments }
    }

    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Cell] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Prepends the new head one step in `direction`. The tail is popped
    /// unless this move eats food, which nets a length of +1.
    pub fn advance(&mut self, direction: Direction, grow: bool) {
        let new_head = direction.step(self.head());
        self.segments.insert(0, new_head);

        if !grow {
            self.segments.pop();
        }
    }

    pub fn head_overlaps_body(&self) -> bool {
        self.segments[1..].contains(&self.head())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal_relation_covers_all_pairs() {
        assert!(Up.is_reverse_of(Down));
        assert!(Down.is_reverse_of(Up));
        assert!(Left.is_reverse_of(Right));
        assert!(Right.is_reverse_of(Left));

        assert!(!Up.is_reverse_of(Up));
        assert!(!Up.is_reverse_of(Left));
        assert!(!Left.is_reverse_of(Down));
        assert!(!Right.is_reverse_of(Up));
    }

    #[test]
    fn step_offsets_match_screen_coordinates() {
        let origin = Cell::new(5, 5);
        assert_eq!(Up.step(origin), Cell::new(5, 4));
        assert_eq!(Down.step(origin), Cell::new(5, 6));
        assert_eq!(Left.step(origin), Cell::new(4, 5));
        assert_eq!(Right.step(origin), Cell::new(6, 5));
    }

    #[test]
    fn advance_keeps_length_without_growth() {
        let mut snake = Snake::from_segments(vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)]);
        snake.advance(Right, false);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.segments(), &[Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]);
    }

    #[test]
    fn advance_with_growth_keeps_the_tail() {
        let mut snake = Snake::from_segments(vec![Cell::new(5, 5), Cell::new(4, 5)]);
        snake.advance(Right, true);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.segments(), &[Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]);
    }

    #[test]
    fn head_overlap_ignores_the_head_itself() {
        let no_overlap = Snake::from_segments(vec![Cell::new(5, 5), Cell::new(4, 5)]);
        assert!(!no_overlap.head_overlaps_body());

        let overlap = Snake::from_segments(vec![Cell::new(4, 5), Cell::new(5, 5), Cell::new(4, 5)]);
        assert!(overlap.head_overlaps_body());
    }

    #[test]
    fn occupies_checks_every_segment() {
        let snake = Snake::from_segments(vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)]);
        assert!(snake.occupies(Cell::new(5, 5)));
        assert!(snake.occupies(Cell::new(3, 5)));
        assert!(!snake.occupies(Cell::new(6, 5)));
    }
}
