//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile, e.g. ` C ` on green
#[must_use]
pub fn letter_tile(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Verdict::Correct => text.black().on_green().bold(),
        Verdict::Partial => text.black().on_yellow().bold(),
        Verdict::Incorrect => text.white().on_bright_black(),
    }
}

/// Render a whole guess as a row of colored tiles
#[must_use]
pub fn feedback_tiles(feedback: &Feedback) -> String {
    feedback
        .letters()
        .map(|(letter, verdict)| letter_tile(letter, verdict).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn feedback_tiles_contain_every_letter() {
        let guess = Word::new("react").unwrap();
        let target = Word::new("crate").unwrap();
        let tiles = feedback_tiles(&Feedback::calculate(&guess, &target));

        // Color codes may wrap each tile, but the tiles stay in guess order
        let mut rest = tiles.as_str();
        for tile in [" R ", " E ", " A ", " C ", " T "] {
            let at = rest.find(tile).unwrap_or_else(|| panic!("missing {tile:?} in {tiles:?}"));
            rest = &rest[at + tile.len()..];
        }
    }

    #[test]
    fn letter_tile_keeps_letter_text() {
        let tile = letter_tile('e', Verdict::Incorrect);
        assert_eq!(&*tile, " E ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(3.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
