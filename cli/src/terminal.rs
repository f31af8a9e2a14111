use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use vivito_core::Board;

const ALIVE_COLOR: Color = Color::Red;
const DEAD_COLOR: Color = Color::White;

/// Renders one generation per interval until `q`, `Esc`, or Ctrl-C is
/// pressed.
pub fn run(mut board: Board, interval: Duration) -> Result<()> {
    let mut screen = Screen::new()?;
    let mut generation: u64 = 0;

    loop {
        screen.draw(&board, generation)?;
        if quit_requested(interval)? {
            return Ok(());
        }
        board = board.step();
        generation += 1;
    }
}

/// Raw-mode alternate screen that restores the terminal when dropped.
struct Screen {
    out: Stdout,
}

impl Screen {
    fn new() -> Result<Self> {
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, cursor::Hide)?;
        enable_raw_mode()?;
        Ok(Self { out })
    }

    /// Paints the generation header and two background-colored spaces per
    /// cell, one board row per line.
    fn draw(&mut self, board: &Board, generation: u64) -> Result<()> {
        queue!(
            self.out,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            Print(format!("(t : {generation})")),
            cursor::MoveToNextLine(1),
        )?;

        let (height, width) = board.size();
        for row in 0..height {
            for col in 0..width {
                let color = if board[(row, col)].is_alive() {
                    ALIVE_COLOR
                } else {
                    DEAD_COLOR
                };
                queue!(self.out, SetBackgroundColor(color), Print("  "))?;
            }
            queue!(self.out, ResetColor, cursor::MoveToNextLine(1))?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.out, ResetColor, LeaveAlternateScreen, cursor::Show);
    }
}

/// Waits out one generation interval, consuming input events. Returns true
/// when a quit key arrived. Raw mode swallows SIGINT, so Ctrl-C is handled
/// here as a key press.
fn quit_requested(interval: Duration) -> Result<bool> {
    let deadline = Instant::now() + interval;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(false);
        }
        if !event::poll(remaining)? {
            return Ok(false);
        }
        if let Event::Key(key) = event::read()? {
            let interrupt =
                key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            if interrupt || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                return Ok(true);
            }
        }
    }
}
