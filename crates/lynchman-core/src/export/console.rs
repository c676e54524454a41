//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::chart::Difficulty;
use crate::stats::Summary;

/// Format a summary for console display.
///
/// Returns a multi-line boxed block headed by `title`.
pub fn format_summary_console(title: &str, summary: &Summary) -> String {
    let mut output = String::new();
    let border = "━".repeat(title.chars().count().max(46) + 4);
    let border_dim = border.dimmed();
    let m = &summary.metadata;

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  {}", title.bold());
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  BPM    : {:.2} ({:.2} beats/bar)",
        m.beats_per_minute, m.beats_per_bar
    );
    let _ = writeln!(output, "  NJS    : {:.2}", m.note_jump_speed);
    let _ = writeln!(
        output,
        "  NOTES  : {} ({} left, {} right), {} bombs",
        summary.normal_notes(),
        summary.left_notes.blue(),
        summary.right_notes.red(),
        summary.bomb_notes
    );
    let _ = writeln!(output, "  LEANING: {}", format_colored_leaning(summary.leaning));
    let _ = writeln!(output, "  GAP    : {:.2} beats", summary.mean_note_gap);
    let _ = write!(output, "{}", border_dim);

    output
}

/// Song title line with the difficulty colored by tier
pub fn format_song_title(ident: &str, name: &str, difficulty: Difficulty) -> String {
    format!(
        "{} [{}] ({})",
        name,
        format_colored_difficulty(difficulty),
        ident
    )
}

fn format_colored_difficulty(difficulty: Difficulty) -> String {
    let name = difficulty.short_name();
    match difficulty {
        Difficulty::Easy => name.green().to_string(),
        Difficulty::Normal => name.cyan().to_string(),
        Difficulty::Hard => name.yellow().to_string(),
        Difficulty::Expert => name.red().to_string(),
        Difficulty::ExpertPlus => name.magenta().to_string(),
    }
}

fn format_colored_leaning(leaning: f64) -> String {
    let value = format!("{:+.2}", leaning);
    if leaning > 0.0 {
        format!("{} (left)", value.blue())
    } else if leaning < 0.0 {
        format!("{} (right)", value.red())
    } else {
        format!("{} (balanced)", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::song::SongMetadata;

    fn summary(leaning: f64) -> Summary {
        Summary {
            metadata: SongMetadata {
                beats_per_minute: 150.0,
                beats_per_bar: 4.0,
                note_jump_speed: 18.0,
                shuffle: 0.0,
                shuffle_period: 0.5,
            },
            left_notes: 30,
            right_notes: 10,
            bomb_notes: 4,
            leaning,
            mean_note_gap: 0.75,
        }
    }

    #[test]
    fn test_format_summary_console_contents() {
        let output = format_summary_console("My Song", &summary(0.5));

        assert!(output.contains("My Song"));
        assert!(output.contains("150.00"));
        assert!(output.contains("18.00"));
        assert!(output.contains("40"));
        assert!(output.contains("+0.50"));
        assert!(output.contains("(left)"));
        assert!(output.contains("0.75 beats"));
    }

    #[test]
    fn test_leaning_labels() {
        assert!(format_colored_leaning(-0.25).contains("(right)"));
        assert!(format_colored_leaning(0.0).contains("(balanced)"));
    }

    #[test]
    fn test_format_song_title() {
        let title = format_song_title("1-a", "Alpha", Difficulty::Expert);
        assert!(title.starts_with("Alpha ["));
        assert!(title.contains("Expert"));
        assert!(title.ends_with("(1-a)"));
    }
}
