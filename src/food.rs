use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Cell;
use crate::snake::Snake;

// Attempts before switching to a scan of the remaining free cells.
const SPAWN_ATTEMPTS: u32 = 256;

/// Picks a uniformly random cell not occupied by the snake. Returns `None`
/// only when the snake covers the whole board.
pub fn spawn_food<R: Rng>(rng: &mut R, snake: &Snake, grid_size: i32) -> Option<Cell> {
    for _ in 0..SPAWN_ATTEMPTS {
        let candidate = Cell::new(rng.gen_range(1..=grid_size), rng.gen_range(1..=grid_size));
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    // The board is nearly full; enumerate what is left instead of sampling.
    let free: Vec<Cell> = (1..=grid_size)
        .flat_map(|y| (1..=grid_size).map(move |x| Cell::new(x, y)))
        .filter(|cell| !snake.occupies(*cell))
        .collect();

    free.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::is_in_bounds;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawned_food_is_in_bounds_and_off_the_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(vec![Cell::new(2, 2), Cell::new(2, 3), Cell::new(3, 3)]);

        for _ in 0..100 {
            let cell = spawn_food(&mut rng, &snake, 4).unwrap();
            assert!(is_in_bounds(cell, 4));
            assert!(!snake.occupies(cell));
        }
    }

    #[test]
    fn single_free_cell_is_always_found() {
        let mut rng = StdRng::seed_from_u64(42);
        let segments: Vec<Cell> = (1..=2)
            .flat_map(|y| (1..=2).map(move |x| Cell::new(x, y)))
            .filter(|cell| *cell != Cell::new(2, 2))
            .collect();
        let snake = Snake::from_segments(segments);

        assert_eq!(spawn_food(&mut rng, &snake, 2), Some(Cell::new(2, 2)));
    }

    #[test]
    fn full_board_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        let segments: Vec<Cell> = (1..=2)
            .flat_map(|y| (1..=2).map(move |x| Cell::new(x, y)))
            .collect();
        let snake = Snake::from_segments(segments);

        assert_eq!(spawn_food(&mut rng, &snake, 2), None);
    }
}
