use rand::Rng;

use crate::config::GameConfig;
use crate::food;
use crate::grid::{self, Cell};
use crate::snake::{Direction, Snake};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfHit,
}

/// Why a session stopped. Board exhaustion is kept apart from the
/// collisions so callers can word it differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    WallCollision,
    SelfCollision,
    BoardFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    AteFood,
    Ended(SessionEnd),
}

/// All mutable state of one play-through. Constructed once at startup and
/// put back to its initial state with `reset` whenever a session ends.
#[derive(Debug)]
pub struct GameSession {
    pub grid_size: i32,
    pub direction: Direction,
    pub next_direction: Direction,
    pub snake: Snake,
    pub food: Option<Cell>,
    pub score: u32,
    pub delay_ms: u64,
    pub active: bool,
}

impl GameSession {
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let snake = Snake::new(center_cell(config.grid_size));
        let food = food::spawn_food(rng, &snake, config.grid_size);

        GameSession {
            grid_size: config.grid_size,
            direction: Direction::Right,
            next_direction: Direction::Right,
            snake,
            food,
            score: 0,
            delay_ms: config.initial_delay_ms,
            active: false,
        }
    }

    /// Back to the initial snake, direction, delay and score. The adopted
    /// grid size survives resets; food is respawned so it cannot sit under
    /// the re-centered snake.
    pub fn reset<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.snake = Snake::new(center_cell(self.grid_size));
        self.score = 0;
        self.delay_ms = config.initial_delay_ms;
        self.food = food::spawn_food(rng, &self.snake, self.grid_size);
    }

    /// Buffers a turn for the next tick. Reversals of the committed
    /// direction are dropped; a later valid turn overwrites an earlier one.
    pub fn queue_direction(&mut self, direction: Direction) {
        if !direction.is_reverse_of(self.direction) {
            self.next_direction = direction;
        }
    }

    /// One simulation step: commit the queued direction, advance the snake,
    /// check collisions, then settle food and speed.
    pub fn tick<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) -> TickOutcome {
        self.direction = self.next_direction;

        let new_head = self.direction.step(self.snake.head());
        let ate = self.food == Some(new_head);
        self.snake.advance(self.direction, ate);

        if let Some(collision) = self.check_collision() {
            return TickOutcome::Ended(match collision {
                Collision::Wall => SessionEnd::WallCollision,
                Collision::SelfHit => SessionEnd::SelfCollision,
            });
        }

        if !ate {
            return TickOutcome::Moved;
        }

        self.score += 1;
        self.delay_ms = config.next_delay(self.delay_ms);

        match food::spawn_food(rng, &self.snake, self.grid_size) {
            Some(cell) => {
                self.food = Some(cell);
                TickOutcome::AteFood
            }
            None => {
                self.food = None;
                TickOutcome::Ended(SessionEnd::BoardFull)
            }
        }
    }

    /// Wall and self checks against the post-move body: the head against
    /// the grid bounds, then against every segment behind it.
    pub fn check_collision(&self) -> Option<Collision> {
        if !grid::is_in_bounds(self.snake.head(), self.grid_size) {
            return Some(Collision::Wall);
        }

        if self.snake.head_overlaps_body() {
            return Some(Collision::SelfHit);
        }

        None
    }

    /// Adopts a grid size supplied by the viewport. An idle snake is
    /// re-centered; food stranded outside the new bounds or under the snake
    /// is respawned.
    pub fn adopt_grid_size<R: Rng>(&mut self, grid_size: i32, rng: &mut R) {
        if grid_size <= 0 {
            return;
        }

        self.grid_size = grid_size;
        if !self.active {
            self.snake = Snake::new(center_cell(grid_size));
        }

        let stale = match self.food {
            Some(cell) => !grid::is_in_bounds(cell, grid_size) || self.snake.occupies(cell),
            None => true,
        };
        if stale {
            self.food = food::spawn_food(rng, &self.snake, self.grid_size);
        }
    }
}

fn center_cell(grid_size: i32) -> Cell {
    let mid = (grid_size / 2).max(1);
    Cell::new(mid, mid)
}
