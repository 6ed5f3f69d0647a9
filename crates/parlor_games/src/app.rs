//! A tic-tac-toe session: identities, matches, and rematches.

use crate::config::GameConfig;
use crate::console::{Console, ConsoleHuman, capitalize};
use anyhow::Result;
use parlor_tictactoe::{
    ComputerPlayer, MATCH_WIN_THRESHOLD, Match, MoveProvider, Participant, human_marker,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::time::Duration;
use tracing::{info, instrument};

/// Runs a session until the human declines a rematch.
///
/// Name and marker are prompted for unless the config already has them.
/// Without a configured seed a fresh one is drawn and logged.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(config: &GameConfig, input: R, output: W) -> Result<()> {
    let console = Console::new(
        input,
        output,
        config.clear_screen(),
        Duration::from_millis(config.round_pause_ms()),
    )
    .shared();

    let seed = config.seed().unwrap_or_else(rand::random);
    info!(seed, "Session seed");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let human = {
        let mut io = console.borrow_mut();
        io.clear()?;
        io.say("Welcome to Tic Tac Toe!")?;
        let name = match config.player_name() {
            Some(name) => capitalize(name.trim()),
            None => io.ask_name()?,
        };
        let marker = match config.human_marker() {
            Some(symbol) => human_marker(&symbol.to_string())?,
            None => io.ask_marker()?,
        };
        io.say(format!(
            "{name}, first to {MATCH_WIN_THRESHOLD} rounds wins the match."
        ))?;
        ConsoleHuman::new(name, marker, Rc::clone(&console))
    };

    let identity = Participant::random_computer(&mut rng);
    info!(computer = %identity.name(), marker = %identity.marker(), "Computer joined");
    let computer = ComputerPlayer::with_rng(identity, human.marker(), rng);
    let mut game = Match::new(human, computer, config.first_player())?;

    loop {
        let winner = game.play_match(&mut |game, event| console.borrow_mut().render(game, event))?;
        info!(?winner, "Match finished");
        if !console.borrow_mut().ask_play_again()? {
            break;
        }
        game.reset();
        console.borrow_mut().say("Lets play again!")?;
    }

    console.borrow_mut().say(format!(
        "Thanks for playing Tic Tac Toe! Goodbye {}",
        game.human().name()
    ))?;
    Ok(())
}
