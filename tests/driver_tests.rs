use battleship_solo::{
    BoardSize, Driver, DriverConfig, RunSummary, ScriptedConsole, VICTORY_BANNER,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Every coordinate of a grid, row by row.
fn sweep(side: usize) -> Vec<String> {
    let rows = ['A', 'B', 'C', 'D', 'E', 'F'];
    (0..side)
        .flat_map(|r| (1..=side).map(move |c| format!("{}{}", rows[r], c)))
        .collect()
}

fn run(lines: Vec<String>, config: DriverConfig, seed: u64) -> (RunSummary, ScriptedConsole) {
    let mut driver = Driver::new(
        ScriptedConsole::new(lines),
        SmallRng::seed_from_u64(seed),
        config,
    );
    let summary = driver.run().unwrap();
    (summary, driver.into_console())
}

#[test]
fn test_sweep_wins_and_stops_after_one_session() {
    let config = DriverConfig {
        board_size: Some(BoardSize::Four),
        max_sessions: Some(1),
        ..DriverConfig::default()
    };
    let (summary, console) = run(sweep(4), config, 5);
    assert_eq!(summary.sessions_won, 1);
    assert!(summary.guesses <= 16);
    let transcript = console.transcript();
    assert!(transcript.contains("Congratulations! You have sunk all the ships!"));
    assert!(transcript.contains(VICTORY_BANNER));
    assert_eq!(transcript.matches("You hit a large ship!").count(), 3);
    assert_eq!(transcript.matches("You hit a small ship!").count(), 2);
}

#[test]
fn test_restarts_after_win() {
    let config = DriverConfig {
        board_size: Some(BoardSize::Five),
        max_sessions: Some(2),
        ..DriverConfig::default()
    };
    let mut lines = sweep(5);
    lines.extend(sweep(5));
    let (summary, console) = run(lines, config, 11);
    assert_eq!(summary.sessions_won, 2);
    assert_eq!(
        console
            .transcript()
            .matches("Congratulations! You have sunk all the ships!")
            .count(),
        2
    );
}

#[test]
fn test_invalid_input_reprompts() {
    let config = DriverConfig {
        board_size: Some(BoardSize::Four),
        max_sessions: Some(1),
        ..DriverConfig::default()
    };
    let mut lines: Vec<String> = vec!["".into(), "Z9".into(), "A0".into(), "G1".into()];
    lines.extend(sweep(4));
    let (summary, console) = run(lines, config, 5);
    assert_eq!(summary.sessions_won, 1);
    assert_eq!(
        console.transcript().matches("Invalid guess, try again.").count(),
        4
    );
}

#[test]
fn test_repeat_guess_is_reported() {
    let config = DriverConfig {
        board_size: Some(BoardSize::Four),
        max_sessions: Some(1),
        ..DriverConfig::default()
    };
    let mut lines: Vec<String> = vec!["A1".into(), "A1".into()];
    lines.extend(sweep(4));
    let (_, console) = run(lines, config, 8);
    assert!(console.transcript().contains("You already guessed that spot!"));
}

#[test]
fn test_menu_selects_size_after_bad_choice() {
    let config = DriverConfig {
        max_sessions: Some(1),
        ..DriverConfig::default()
    };
    let mut lines: Vec<String> = vec!["7".into(), "zero".into(), "3".into()];
    lines.extend(sweep(6));
    let (summary, console) = run(lines, config, 21);
    assert_eq!(summary.sessions_won, 1);
    let transcript = console.transcript();
    assert_eq!(transcript.matches("Invalid choice, try again.").count(), 2);
    assert!(transcript.contains("[1] 4x4 [2] 5x5 [3] 6x6"));
}

#[test]
fn test_end_of_input_stops_without_error() {
    let (summary, console) = run(vec!["1".into(), "A1".into()], DriverConfig::default(), 3);
    assert_eq!(summary, RunSummary::default());
    assert!(console.transcript().starts_with("Welcome to Battleship"));
}

#[test]
fn test_debug_reveals_fleet() {
    let config = DriverConfig {
        board_size: Some(BoardSize::Six),
        debug: true,
        ..DriverConfig::default()
    };
    let (_, console) = run(Vec::new(), config, 4);
    let board = &console.output()[1];
    assert_eq!(board.matches("🔵").count(), 6);
    assert_eq!(board.matches("🟠").count(), 4);
}

#[test]
fn test_impossible_placement_is_an_error() {
    let config = DriverConfig {
        board_size: Some(BoardSize::Four),
        max_attempts: Some(0),
        ..DriverConfig::default()
    };
    let mut driver = Driver::new(
        ScriptedConsole::new(Vec::<String>::new()),
        SmallRng::seed_from_u64(1),
        config,
    );
    let err = driver.run().unwrap_err();
    assert!(err.to_string().contains("cannot set up a 4x4 board"));
}
