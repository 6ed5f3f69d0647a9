//! End-to-end console sessions against the seeded computer.

use parlor_games::{GameConfig, app};

/// Cycles through cells 1-9 so every move prompt is eventually answered.
fn cycling_moves(cycles: usize) -> String {
    "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(cycles)
}

fn quiet_config(extra: &str) -> GameConfig {
    GameConfig::from_toml(&format!(
        "seed = 5\nround_pause_ms = 0\nclear_screen = false\n{extra}"
    ))
    .expect("Config failed")
}

fn play(config: &GameConfig, input: &str) -> anyhow::Result<String> {
    let mut output = Vec::new();
    app::run(config, input.as_bytes(), &mut output)?;
    Ok(String::from_utf8(output).expect("Output not UTF-8"))
}

#[test]
fn test_session_prompts_for_identity_and_finishes() {
    let config = quiet_config("");
    let input = format!("\nada\nO\nz\n{}n\n", cycling_moves(300));

    let out = play(&config, &input).expect("Session failed");
    assert!(out.contains("Welcome to Tic Tac Toe!"));
    assert!(out.contains("Sorry, you must enter a value."));
    assert!(out.contains("Please choose amongst the given set"));
    assert!(out.contains("Ada you are Z and"));
    assert!(out.contains("Scores: Ada[0] "));
    assert!(out.contains("Choose a square between (1, 2, 3, 4, 5, 6, 7, 8 or 9)"));
    assert_eq!(out.matches("won the match ***").count(), 1);
    assert!(out.contains("Would you like to play again? (y/n)"));
    assert!(out.ends_with("Thanks for playing Tic Tac Toe! Goodbye Ada\n"));
}

#[test]
fn test_configured_identity_skips_prompts() {
    let config = quiet_config("player_name = \"grace\"\nhuman_marker = \"X\"\n");
    let input = format!("{}n\n", cycling_moves(300));

    let out = play(&config, &input).expect("Session failed");
    assert!(!out.contains("Please enter your name:"));
    assert!(!out.contains("Please pick a marker"));
    assert!(out.contains("Grace you are X and"));
}

#[test]
fn test_rematch_resets_score() {
    let config = quiet_config("player_name = \"Ada\"\nhuman_marker = \"Y\"\n");
    let moves = cycling_moves(300);
    let input = format!("{moves}y\n{moves}n\n");

    let out = play(&config, &input).expect("Session failed");
    assert_eq!(out.matches("won the match ***").count(), 2);
    assert!(out.contains("Lets play again!"));
    let after_rematch = out.split("Lets play again!").nth(1).expect("No rematch");
    assert!(after_rematch.contains("Scores: Ada[0] "));
}

#[test]
fn test_computer_first_draws_before_prompting() {
    let config =
        quiet_config("player_name = \"Ada\"\nhuman_marker = \"G\"\nfirst_player = \"computer\"\n");
    let input = format!("{}n\n", cycling_moves(300));

    let out = play(&config, &input).expect("Session failed");
    // The computer opens on the center, so the first prompt omits it.
    assert!(out.contains("Choose a square between (1, 2, 3, 4, 6, 7, 8 or 9)"));
    assert!(!out.contains("Choose a square between (1, 2, 3, 4, 5, 6, 7, 8 or 9)"));
}

#[test]
fn test_closed_input_is_an_error() {
    let config = quiet_config("player_name = \"Ada\"\nhuman_marker = \"X\"\n");
    let err = play(&config, "5\n").unwrap_err();
    assert!(err.to_string().contains("Input closed"));
}
