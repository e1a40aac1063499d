//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line, feedback printed back.

use crate::dictionary::Dictionary;
use crate::game::{Game, GameConfig, GameStatus, Statistics};
use crate::output::{write_banner, write_feedback, write_statistics};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the line-based game until the player quits or input ends
///
/// Each line read from `input` (minus its line ending) is passed to the game
/// unchanged. `:q` or `:quit` stops immediately.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R, I, O>(
    dictionary: &Dictionary,
    config: GameConfig,
    rng: &mut R,
    input: &mut I,
    out: &mut O,
) -> io::Result<Statistics>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    let mut stats = Statistics::default();
    write_banner(out, config.max_attempts, dictionary.word_length())?;

    loop {
        let mut game = Game::with_config(dictionary, rng, config);

        while !game.is_over() {
            write!(
                out,
                "Please make a guess (you have {} left): ",
                game.remaining_attempts()
            )?;
            out.flush()?;

            let Some(line) = read_line(input)? else {
                writeln!(out)?;
                write_statistics(out, &stats)?;
                return Ok(stats);
            };

            if matches!(line.as_str(), ":q" | ":quit") {
                writeln!(out, "\n👋 Thanks for playing!")?;
                write_statistics(out, &stats)?;
                return Ok(stats);
            }

            match game.submit_guess(&line) {
                Ok(feedback) => write_feedback(out, &feedback)?,
                Err(e) => writeln!(out, "{}", format!("failed to guess: {e}").red())?,
            }
        }

        stats.record(&game);
        write_outcome(out, &game)?;

        write!(out, "Play again? (yes/no): ")?;
        out.flush()?;
        match read_line(input)?.as_deref().map(str::to_lowercase).as_deref() {
            Some("yes" | "y") => writeln!(out, "\n🔄 New game started!\n")?,
            _ => {
                writeln!(out, "\n👋 Thanks for playing!")?;
                write_statistics(out, &stats)?;
                return Ok(stats);
            }
        }
    }
}

fn write_outcome<O: Write>(out: &mut O, game: &Game<'_>) -> io::Result<()> {
    let answer = game
        .revealed_target()
        .map(|w| w.text().to_uppercase())
        .unwrap_or_default();

    match game.status() {
        GameStatus::Won => {
            let guesses = game.attempts_used();
            writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
            writeln!(
                out,
                "{}",
                format!(
                    "  🎉 Solved in {guesses} {}!",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            )?;
            writeln!(out, "{}", "═".repeat(60).bright_cyan())
        }
        GameStatus::Lost => {
            writeln!(out, "\n{}", "Out of guesses.".red().bold())?;
            writeln!(out, "{}", format!("The word was {answer}").bright_yellow().bold())
        }
        GameStatus::InProgress => Ok(()),
    }
}

/// Read one line without its line ending; `None` at end of input
fn read_line<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']);
    Ok(Some(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn single_answer_dictionary() -> Dictionary {
        Dictionary::new(
            words_from_slice(&["crate"]),
            words_from_slice(&["crate", "react", "slate", "trace"]),
        )
        .unwrap()
    }

    fn play(script: &str, config: GameConfig) -> (Statistics, String) {
        let dictionary = single_answer_dictionary();
        let mut rng = StdRng::seed_from_u64(3);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();

        let stats = run_simple(&dictionary, config, &mut rng, &mut input, &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_after_rejected_guesses() {
        let (stats, text) = play("zzzzz\nabc\nreact\ncrate\nno\n", GameConfig::default());

        assert!(text.contains("Please make a guess (you have 6 left): "));
        assert!(text.contains("failed to guess: not a valid word: 'zzzzz'"));
        assert!(text.contains("failed to guess: guess length does not match word length"));
        assert!(text.contains("🟨🟨🟩🟨🟨"));
        assert!(text.contains("Please make a guess (you have 5 left): "));
        assert!(text.contains("🟩🟩🟩🟩🟩"));
        assert!(text.contains("Solved in 2 guesses!"));

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn loss_reveals_answer() {
        let config = GameConfig::new().with_max_attempts(2);
        let (stats, text) = play("slate\ntrace\nno\n", config);

        assert!(text.contains("Out of guesses."));
        assert!(text.contains("The word was CRATE"));
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 0);
    }

    #[test]
    fn play_again_starts_new_game() {
        let (stats, text) = play("crate\nyes\ncrate\nno\n", GameConfig::default());

        assert!(text.contains("New game started!"));
        assert!(text.contains("Solved in 1 guess!"));
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn quit_mid_game_is_not_recorded() {
        let (stats, text) = play("react\n:q\n", GameConfig::default());

        assert!(text.contains("Thanks for playing!"));
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn quit_and_exit_are_playable_words() {
        let dictionary = Dictionary::new(
            words_from_slice(&["exit"]),
            words_from_slice(&["exit", "quit"]),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut input = Cursor::new(b"quit\nexit\nno\n".to_vec());
        let mut out = Vec::new();

        let stats =
            run_simple(&dictionary, GameConfig::default(), &mut rng, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Solved in 2 guesses!"));
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let (stats, _) = play("react\n", GameConfig::default());
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn windows_line_endings_are_trimmed() {
        let (stats, _) = play("crate\r\nno\r\n", GameConfig::default());
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn read_line_strips_only_line_endings() {
        let mut input = Cursor::new(b"  crate \r\n".to_vec());
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("  crate "));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }
}
