//! Line-oriented console front-end.
//!
//! [`Console`] owns the input and output streams. [`ConsoleHuman`] shares it
//! with the event renderer so prompts and board redraws land on one screen.

use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use parlor_tictactoe::{
    Board, GameEvent, HUMAN_MARKERS, Marker, Match, MoveProvider, Position, Side, human_marker,
};
use std::cell::RefCell;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Shown whenever a move prompt gets an unusable answer.
pub const INVALID_CHOICE: &str = "Sorry its not a valid choice";

/// Console shared between the human player and the renderer.
pub type SharedConsole<R, W> = Rc<RefCell<Console<R, W>>>;

/// Joins items as `1, 2, 3 or 4`.
pub fn joinor<T: Display>(items: &[T], delimiter: &str, word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(delimiter);
            format!("{head} {word} {last}")
        }
    }
}

/// Uppercases the first letter and lowercases the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Prompting and rendering over a pair of streams.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
    round_pause: Duration,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over `input` and `output`.
    pub fn new(input: R, output: W, clear_screen: bool, round_pause: Duration) -> Self {
        Self {
            input,
            output,
            clear_screen,
            round_pause,
        }
    }

    /// Wraps the console for sharing with a [`ConsoleHuman`].
    pub fn shared(self) -> SharedConsole<R, W> {
        Rc::new(RefCell::new(self))
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}").context("Failed to write to console")
    }

    /// Reads one trimmed line.
    ///
    /// # Errors
    ///
    /// Fails when the input stream is closed.
    pub fn read_line(&mut self) -> Result<String> {
        self.output.flush().context("Failed to flush console")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from console")?;
        if read == 0 {
            anyhow::bail!("Input closed");
        }
        Ok(line.trim().to_string())
    }

    /// Clears the terminal when enabled.
    pub fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
                .context("Failed to clear screen")?;
        }
        Ok(())
    }

    /// Asks for a non-empty name and capitalizes it.
    #[instrument(skip(self))]
    pub fn ask_name(&mut self) -> Result<String> {
        self.say("Please enter your name:")?;
        loop {
            let name = self.read_line()?;
            if !name.is_empty() {
                return Ok(capitalize(&name));
            }
            self.say("Sorry, you must enter a value.")?;
        }
    }

    /// Asks the human to pick a marker from the roster.
    #[instrument(skip(self))]
    pub fn ask_marker(&mut self) -> Result<Marker> {
        self.say(format!(
            "Please pick a marker between ({})",
            joinor(&HUMAN_MARKERS, ", ", "and")
        ))?;
        loop {
            match human_marker(&self.read_line()?) {
                Ok(marker) => return Ok(marker),
                Err(e) => {
                    debug!(error = %e, "Marker rejected");
                    self.say("Please choose amongst the given set")?;
                }
            }
        }
    }

    /// Asks for an empty cell, re-prompting until one is given.
    #[instrument(skip(self, board))]
    pub fn ask_move(&mut self, board: &Board) -> Result<Position> {
        let open = board.empty_cells();
        self.say(format!("Choose a square between ({})", joinor(&open, ", ", "or")))?;
        loop {
            let input = self.read_line()?;
            match Position::parse_number(&input) {
                Some(position) if open.contains(&position) => return Ok(position),
                _ => {
                    debug!(%input, "Move rejected");
                    self.say(INVALID_CHOICE)?;
                }
            }
        }
    }

    /// Asks whether to start another match.
    #[instrument(skip(self))]
    pub fn ask_play_again(&mut self) -> Result<bool> {
        self.say("Would you like to play again? (y/n)")?;
        loop {
            match self.read_line()?.to_ascii_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Sorry, must be y or n")?,
            }
        }
    }

    /// Redraws the markers, score line, and board.
    pub fn show_table<H: MoveProvider, C: MoveProvider>(&mut self, game: &Match<H, C>) -> Result<()> {
        self.clear()?;
        let (human, computer) = (game.human(), game.computer());
        let score = game.score();
        writeln!(
            self.output,
            "{} you are {} and {} is {}",
            human.name(),
            human.marker(),
            computer.name(),
            computer.marker()
        )?;
        writeln!(
            self.output,
            "Scores: {}[{}] {}[{}] Ties[{}]",
            human.name(),
            score.human_wins(),
            computer.name(),
            score.computer_wins(),
            score.ties()
        )?;
        writeln!(self.output)?;
        write!(self.output, "{}", game.board())?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Renders one match event.
    #[instrument(skip(self, game))]
    pub fn render<H: MoveProvider, C: MoveProvider>(
        &mut self,
        game: &Match<H, C>,
        event: GameEvent,
    ) -> Result<()> {
        match event {
            GameEvent::RoundStarted { .. } => self.show_table(game),
            GameEvent::MoveMade {
                side: Side::Computer,
                ..
            } if !is_terminal(game.board()) => self.show_table(game),
            GameEvent::MoveMade { .. } => Ok(()),
            GameEvent::RoundOver(outcome) => {
                self.show_table(game)?;
                match outcome.winner() {
                    Some(side) => self.say(format!("{} Won", game.name_of(side)))?,
                    None => self.say("Its a tie")?,
                }
                if !game.score().is_match_over() {
                    self.pause()?;
                }
                Ok(())
            }
            GameEvent::MatchOver { winner } => {
                self.say(format!("*** {} won the match ***", game.name_of(winner)))
            }
        }
    }

    fn pause(&mut self) -> Result<()> {
        self.output.flush()?;
        if !self.round_pause.is_zero() {
            std::thread::sleep(self.round_pause);
        }
        Ok(())
    }
}

fn is_terminal(board: &Board) -> bool {
    board.winner().is_some() || board.is_full()
}

/// The human side, answering move requests from the console.
pub struct ConsoleHuman<R, W> {
    name: String,
    marker: Marker,
    console: SharedConsole<R, W>,
}

impl<R, W> ConsoleHuman<R, W> {
    /// Creates a human player reading moves from `console`.
    pub fn new(name: String, marker: Marker, console: SharedConsole<R, W>) -> Self {
        Self {
            name,
            marker,
            console,
        }
    }
}

impl<R: BufRead, W: Write> MoveProvider for ConsoleHuman<R, W> {
    fn next_move(&mut self, board: &Board) -> Result<Position> {
        self.console.borrow_mut().ask_move(board)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn marker(&self) -> Marker {
        self.marker
    }
}
