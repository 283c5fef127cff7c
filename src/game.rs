use std::thread::sleep;
use std::time::{Duration, Instant};

use anyhow::Result;
use rand::rngs::ThreadRng;

use crate::config::GameConfig;
use crate::grid::Cell;
use crate::input::Intent;
use crate::log;
use crate::session::{GameSession, SessionEnd, TickOutcome};
use crate::snake::Direction;

// Wake-up cadence of the frame loop; ticks can never run more often than
// this, so delays below one frame period are not reachable.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Read-only view of the simulation handed to renderers once per completed
/// tick and on session start/end.
pub struct Snapshot<'a> {
    pub snake: &'a [Cell],
    pub food: Option<Cell>,
    pub direction: Direction,
    pub score: u32,
    pub high_score: u32,
    pub active: bool,
    pub grid_size: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendEvent {
    Intent(Intent),
    Resize(i32),
}

/// Rendering and input collaborator injected into the loop. Implementations
/// read snapshots and emit events; they never touch simulation state.
pub trait Frontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;
    fn render(&mut self, snapshot: &Snapshot) -> Result<()>;
}

/// Restartable gate deciding when enough time has passed for the next tick.
pub struct TickClock {
    last_tick: Instant,
}

impl TickClock {
    pub fn new() -> Self {
        TickClock { last_tick: Instant::now() }
    }

    pub fn restart(&mut self) {
        self.last_tick = Instant::now();
    }

    /// True at most once per elapsed `delay`, moving the reference point
    /// forward when it fires.
    pub fn tick_due(&mut self, delay: Duration) -> bool {
        let now = Instant::now();
        if now.duration_since(self.last_tick) >= delay {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}

pub struct GameLoop<F: Frontend> {
    config: GameConfig,
    session: GameSession,
    high_score: u32,
    clock: TickClock,
    rng: ThreadRng,
    frontend: F,
}

impl<F: Frontend> GameLoop<F> {
    pub fn new(config: GameConfig, frontend: F) -> Self {
        let mut rng = rand::thread_rng();
        let session = GameSession::new(&config, &mut rng);

        GameLoop {
            config,
            session,
            high_score: 0,
            clock: TickClock::new(),
            rng,
            frontend,
        }
    }

    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    pub fn run(&mut self) -> Result<()> {
        self.render()?;

        loop {
            sleep(FRAME_INTERVAL);

            for event in self.frontend.poll_events()? {
                if !self.handle_event(event)? {
                    return Ok(());
                }
            }

            let delay = Duration::from_millis(self.session.delay_ms);
            if self.session.active && self.clock.tick_due(delay) {
                self.step()?;
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    // Returns false once the player asks to quit.
    fn handle_event(&mut self, event: FrontendEvent) -> Result<bool> {
        match event {
            FrontendEvent::Intent(Intent::Quit) => {
                log!("quit requested, final high score {}", self.high_score);
                return Ok(false);
            }
            FrontendEvent::Intent(Intent::Start) => self.start()?,
            FrontendEvent::Intent(Intent::Turn(direction)) => {
                // Turns only steer a running session.
                if self.session.active {
                    self.session.queue_direction(direction);
                }
            }
            FrontendEvent::Resize(grid_size) => {
                if grid_size > 0 {
                    self.session.adopt_grid_size(grid_size, &mut self.rng);
                    self.render()?;
                }
            }
        }

        Ok(true)
    }

    // Idempotent: a Start while already running is a no-op.
    fn start(&mut self) -> Result<()> {
        if self.session.active {
            return Ok(());
        }

        self.session.active = true;
        self.clock.restart();
        log!("session started on a {0}x{0} grid", self.session.grid_size);
        self.render()
    }

    fn step(&mut self) -> Result<()> {
        match self.session.tick(&self.config, &mut self.rng) {
            TickOutcome::Ended(reason) => self.end_session(reason),
            TickOutcome::AteFood => {
                log!(
                    "food eaten, score {}, length {}, delay {}ms",
                    self.session.score,
                    self.session.snake.len(),
                    self.session.delay_ms
                );
            }
            TickOutcome::Moved => {}
        }

        self.render()
    }

    fn end_session(&mut self, reason: SessionEnd) {
        let score = self.session.score;
        if score > self.high_score {
            self.high_score = score;
        }
        log!("session over ({:?}), score {}, high score {}", reason, score, self.high_score);

        self.session.active = false;
        self.session.reset(&self.config, &mut self.rng);
    }

    fn render(&mut self) -> Result<()> {
        let snapshot = Snapshot {
            snake: self.session.snake.segments(),
            food: self.session.food,
            direction: self.session.direction,
            score: self.session.score,
            high_score: self.high_score,
            active: self.session.active,
            grid_size: self.session.grid_size,
        };

        self.frontend.render(&snapshot)
    }
}
