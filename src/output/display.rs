//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_tiles};
use crate::commands::{ScoreResult, VerifyReport};
use crate::core::Feedback;
use crate::game::Statistics;
use colored::Colorize;
use std::io::{self, Write};

/// Write the how-to-play banner
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_banner<W: Write>(
    out: &mut W,
    max_attempts: usize,
    word_length: usize,
) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "{}", "  Welcome to OpenWordle!".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out)?;
    writeln!(out, "How to play:")?;
    writeln!(out, "- You have {max_attempts} turns to guess a {word_length}-letter word.")?;
    writeln!(out, "- Each turn, guess what the word is. If you guess the word, you win.")?;
    writeln!(
        out,
        "- Nonexistent words, e.g. '{}', do not count as a guess.",
        "a".repeat(word_length)
    )?;
    writeln!(out, "- Each guess is scored letter by letter:")?;
    writeln!(out, "    {}  means none of the letters are in the word", "_".repeat(word_length))?;
    writeln!(out, "    {}  e: the word has an E, in a different spot", example(word_length, 'e'))?;
    writeln!(out, "    {}  E: the word has an E in exactly that spot", example(word_length, 'E'))?;
    writeln!(out)?;
    writeln!(out, "Type ':q' to stop. Have fun!")?;
    writeln!(out)
}

fn example(word_length: usize, letter: char) -> String {
    (0..word_length)
        .map(|i| if i == 1 { letter } else { '_' })
        .collect()
}

/// Write one scored guess as tiles, text and emoji
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_feedback<W: Write>(out: &mut W, feedback: &Feedback) -> io::Result<()> {
    writeln!(
        out,
        "  {}   {}   {}",
        feedback_tiles(feedback),
        feedback.render(),
        feedback.to_emoji()
    )
}

/// Write session statistics
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Statistics:".bright_cyan().bold())?;
    writeln!(out, "   Played:       {}", stats.games_played)?;
    writeln!(out, "   Win rate:     {:.0}%", stats.win_rate())?;
    writeln!(out, "   Streak:       {} (best {})", stats.current_streak, stats.max_streak)?;
    if let Some(avg) = stats.average_guesses() {
        writeln!(out, "   Average:      {avg:.2} guesses")?;
    }

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        writeln!(out, "   {guesses}: {} {count}", bar.green())?;
    }
    Ok(())
}

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target.to_uppercase().bright_yellow().bold(),
        result.feedback.guess().text().to_uppercase().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let mut stdout = io::stdout();
    // A closed stdout leaves nothing to report to
    let _ = write_feedback(&mut stdout, &result.feedback);

    println!(
        "\n  {} correct, {} partial",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_partial().to_string().yellow()
    );
    if result.feedback.is_win() {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Print the result of verifying word lists
pub fn print_verify_report(report: &VerifyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Answers:          {}", report.answers);
    println!("   Allowed guesses:  {}", report.allowed);
    println!("   Word length:      {}", report.word_length);

    print_problems("Wrong length", &report.wrong_length);
    print_problems("Answers not allowed as guesses", &report.missing_answers);
    print_problems("Exact-match shortcut disagrees", &report.shortcut_mismatches);

    println!();
    if report.is_ok() {
        println!("{}", "✅ Word lists look good".green().bold());
    } else {
        println!("{}", "❌ Word lists have problems".red().bold());
    }
}

fn print_problems(label: &str, words: &[String]) {
    if words.is_empty() {
        return;
    }
    println!("\n   {} ({}):", label.yellow().bold(), words.len());
    for word in words.iter().take(20) {
        println!("     • {word}");
    }
    if words.len() > 20 {
        println!("     … and {} more", words.len() - 20);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::dictionary::Dictionary;
    use crate::game::Game;

    fn written(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn banner_mentions_limits() {
        let text = written(|out| write_banner(out, 6, 5));
        assert!(text.contains("You have 6 turns to guess a 5-letter word."));
        assert!(text.contains("'aaaaa'"));
        assert!(text.contains("_e___"));
        assert!(text.contains("_E___"));
    }

    #[test]
    fn feedback_line_has_render_and_emoji() {
        let guess = Word::new("react").unwrap();
        let target = Word::new("crate").unwrap();
        let feedback = Feedback::calculate(&guess, &target);

        let text = written(|out| write_feedback(out, &feedback));
        assert!(text.contains("reAct"));
        assert!(text.contains("🟨🟨🟩🟨🟨"));
    }

    #[test]
    fn statistics_block() {
        let dictionary = Dictionary::embedded();
        let mut game = Game::with_target(&dictionary, Word::new("crate").unwrap());
        game.submit_guess("crate").unwrap();

        let mut stats = Statistics::default();
        stats.record(&game);

        let text = written(|out| write_statistics(out, &stats));
        assert!(text.contains("Played:       1"));
        assert!(text.contains("Win rate:     100%"));
        assert!(text.contains("Average:      1.00 guesses"));
    }
}
