use crate::ai::{Agent, AlphaBetaAgent};
use crate::config::AppConfig;
use crate::game::{GameOutcome, Move, MoveError, Player, Position, SIZE};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    position: Position,
    cursor: (usize, usize),
    computer_player: Player,
    agent: Box<dyn Agent>,
    thinking_delay: Duration,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            position: Position::initial(),
            cursor: (1, 1), // Start in the center
            computer_player: config.game.computer_player,
            agent: Box::new(AlphaBetaAgent::new()),
            thinking_delay: Duration::from_millis(config.game.thinking_delay_ms),
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if !self.position.is_terminal()
                && self.position.side_to_move() == self.computer_player
            {
                self.computer_move(terminal)?;
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                if self.cursor.0 > 0 {
                    self.cursor.0 -= 1;
                }
            }
            KeyCode::Down => {
                if self.cursor.0 < SIZE - 1 {
                    self.cursor.0 += 1;
                }
            }
            KeyCode::Left => {
                if self.cursor.1 > 0 {
                    self.cursor.1 -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor.1 < SIZE - 1 {
                    self.cursor.1 += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_mark();
            }
            KeyCode::Char('r') => {
                // Reset game
                self.position = Position::initial();
                self.cursor = (1, 1);
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Place the human mark at the cursor
    fn place_mark(&mut self) {
        if self.position.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let m = Move::new(self.cursor.0, self.cursor.1);
        match self.position.apply_move(m) {
            Ok(next) => {
                self.position = next;
                self.announce_outcome();
            }
            Err(MoveError::CellOccupied) => {
                self.message = Some("Cell is not empty!".to_string());
            }
            Err(MoveError::OutOfBounds) => {
                self.message = Some("Cell is out of bounds!".to_string());
            }
        }
    }

    /// Run the computer's turn: show a thinking notice, wait the pacing
    /// delay, then apply the engine's move. The delay has no effect on
    /// the search itself.
    fn computer_move<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.message = Some("Computer is thinking...".to_string());
        terminal.draw(|f| self.render(f))?;
        std::thread::sleep(self.thinking_delay);

        let m = self.agent.select_move(&self.position);
        self.position = self
            .position
            .apply_move(m)
            .expect("engine selected an illegal move");
        self.message = None;
        self.announce_outcome();
        Ok(())
    }

    /// Set the status message if the game just ended
    fn announce_outcome(&mut self) {
        if let Some(outcome) = self.position.outcome() {
            self.message = Some(match outcome {
                GameOutcome::Winner(p) if p == self.computer_player => {
                    "Computer has won the game! Press 'r' to restart.".to_string()
                }
                GameOutcome::Winner(_) => "You have won the game! Press 'r' to restart.".to_string(),
                GameOutcome::Draw => "Game ended in a tie. Press 'r' to restart.".to_string(),
            });
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.position,
            self.cursor,
            self.computer_player,
            &self.message,
        );
    }
}
