use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{poll, read, Event};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style};

use crate::game::{Frontend, FrontendEvent, Snapshot};
use crate::grid::Cell;
use crate::input;
use crate::snake::Direction;

// Two terminal columns per board cell, so cells come out roughly square.
const CELL_WIDTH: u16 = 2;

const BODY_STR: &str = "██";
const FOOD_STR: &str = "O ";

const PROMPT_LINES: [&str; 3] =
    ["Press Space to start", "Arrow keys or WASD to steer", "Q or Esc to quit"];

pub struct TermFrontend {
    stdout: Stdout,
    term_width: u16,
    term_height: u16,
}

impl TermFrontend {
    pub fn new() -> Result<Self> {
        let (term_width, term_height) =
            terminal::size().context("Failed to read the terminal size")?;
        Ok(TermFrontend { stdout: stdout(), term_width, term_height })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Failed to enter alt screen")?;
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
            .context("Failed to hide the cursor")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking)
            .context("Failed to restore the cursor")?;
        execute!(self.stdout, LeaveAlternateScreen).context("Failed to leave alt screen")?;
        Ok(())
    }

    /// Largest board the current terminal can draw: two columns per cell
    /// plus the border, and below the board a line for the scores.
    pub fn fitted_grid_size(&self) -> i32 {
        grid_size_for(self.term_width, self.term_height)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_border(&mut self, grid_size: i32) -> Result<()> {
        let inner = grid_size as usize * CELL_WIDTH as usize;
        let horizontal = format!("+{}+", "-".repeat(inner));

        queue!(self.stdout, cursor::MoveTo(0, 0), style::Print(&horizontal))?;
        for row in 1..=grid_size as u16 {
            queue!(self.stdout, cursor::MoveTo(0, row), style::Print('|'))?;
            queue!(self.stdout, cursor::MoveTo(inner as u16 + 1, row), style::Print('|'))?;
        }
        queue!(self.stdout, cursor::MoveTo(0, grid_size as u16 + 1), style::Print(&horizontal))?;

        Ok(())
    }

    fn put_cell(&mut self, cell: Cell, text: &str) -> Result<()> {
        let column = 1 + (cell.x as u16 - 1) * CELL_WIDTH;
        let row = cell.y as u16;
        queue!(self.stdout, cursor::MoveTo(column, row), style::Print(text))?;
        Ok(())
    }

    fn draw_scores(&mut self, snapshot: &Snapshot) -> Result<()> {
        let line = format!("Score: {:03}   High Score: {:03}", snapshot.score, snapshot.high_score);
        queue!(self.stdout, cursor::MoveTo(0, snapshot.grid_size as u16 + 2), style::Print(line))?;
        Ok(())
    }

    fn draw_prompt(&mut self, grid_size: i32) -> Result<()> {
        let width = PROMPT_LINES.iter().map(|line| line.len()).max().unwrap_or(0) + 2;
        let board_width = grid_size as usize * CELL_WIDTH as usize + 2;
        let board_height = grid_size as usize + 2;
        let left = board_width.saturating_sub(width) / 2;
        let top = board_height.saturating_sub(PROMPT_LINES.len()) / 2;

        for (i, line) in PROMPT_LINES.iter().enumerate() {
            let padded = format!("{line: ^width$}", line = line, width = width);
            queue!(
                self.stdout,
                cursor::MoveTo(left as u16, (top + i) as u16),
                style::Print(padded)
            )?;
        }

        Ok(())
    }
}

impl Frontend for TermFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).context("Failed to poll input")? {
            match read().context("Failed to read input")? {
                Event::Key(key) => {
                    if let Some(intent) = input::intent_for_key(&key) {
                        events.push(FrontendEvent::Intent(intent));
                    }
                }
                Event::Resize(width, height) => {
                    self.term_width = width;
                    self.term_height = height;
                    let grid_size = grid_size_for(width, height);
                    if grid_size > 0 {
                        events.push(FrontendEvent::Resize(grid_size));
                    }
                }
                Event::Mouse(_) => {}
            }
        }

        Ok(events)
    }

    fn render(&mut self, snapshot: &Snapshot) -> Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;
        self.draw_border(snapshot.grid_size)?;

        if snapshot.active {
            if let Some(food) = snapshot.food {
                self.put_cell(food, FOOD_STR)?;
            }
        }

        for (i, segment) in snapshot.snake.iter().enumerate() {
            let text = if i == 0 { head_str(snapshot.direction) } else { BODY_STR };
            self.put_cell(*segment, text)?;
        }

        self.draw_scores(snapshot)?;
        if !snapshot.active {
            self.draw_prompt(snapshot.grid_size)?;
        }

        self.stdout.flush().context("Failed to flush the frame")?;
        Ok(())
    }
}

fn head_str(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "^ ",
        Direction::Down => "v ",
        Direction::Left => "< ",
        Direction::Right => "> ",
    }
}

fn grid_size_for(term_width: u16, term_height: u16) -> i32 {
    let by_width = term_width.saturating_sub(2) / CELL_WIDTH;
    let by_height = term_height.saturating_sub(4);
    by_width.min(by_height) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_tracks_the_narrow_dimension() {
        // 80x24: width fits 39 cells, height only 20.
        assert_eq!(grid_size_for(80, 24), 20);
        // A tall, narrow window is limited by width instead.
        assert_eq!(grid_size_for(30, 50), 14);
    }

    #[test]
    fn degenerate_terminals_yield_no_board() {
        assert_eq!(grid_size_for(0, 0), 0);
        assert_eq!(grid_size_for(2, 4), 0);
    }

    #[test]
    fn head_glyph_follows_the_direction() {
        assert_eq!(head_str(Direction::Up), "^ ");
        assert_eq!(head_str(Direction::Down), "v ");
        assert_eq!(head_str(Direction::Left), "< ");
        assert_eq!(head_str(Direction::Right), "> ");
    }
}
