//! Human-readable report rendering for terminal output.
//!
//! Produces a colored conversion summary and, when clues are given, the list
//! of words still possible under them.
use std::path::Path;

use colored::*;

use crate::converter::ConversionStats;
use crate::feedback::Clue;

/// Most candidates listed before the list is cut short.
pub const DISPLAY_LIMIT: usize = 99;
/// Candidates printed per row.
pub const ROW_WIDTH: usize = 5;

/// Title line underlined to the title's width.
fn section_header(title: ColoredString) -> String {
    let width = title.chars().count();
    format!("\n{}\n{}\n\n", title, "─".repeat(width))
}

pub fn render_summary(source: &Path, output: &Path, stats: &ConversionStats) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        "txt2json: Word List Conversion".bold().cyan()
    ));
    out.push_str(&section_header("Conversion".bold().yellow()));
    out.push_str(&format!("Source: {}\n", source.display()));
    out.push_str(&format!("Output: {}\n", output.display()));
    out.push_str(&format!("Lines read: {}\n", stats.lines_read));
    out.push_str(&format!("Blank lines skipped: {}\n", stats.blank_lines));
    out.push_str(&format!(
        "Words written: {}\n",
        stats.words_written.to_string().green()
    ));
    out
}

pub fn render_candidates(candidates: &[&str], clues: &[Clue]) -> String {
    let mut out = section_header("Possible Matching Words".bold().magenta());
    let clue_list: Vec<String> = clues.iter().map(|c| c.to_string()).collect();
    out.push_str(&format!("Clues: {}\n", clue_list.join(", ")));
    if candidates.is_empty() {
        out.push_str(&format!("{}\n", "No matching word.".dimmed()));
        return out;
    }
    let shown = &candidates[..candidates.len().min(DISPLAY_LIMIT)];
    if shown.len() < candidates.len() {
        out.push_str(&format!(
            "Showing {} of {}\n",
            shown.len(),
            candidates.len()
        ));
    } else {
        out.push_str(&format!("Matches: {}\n", candidates.len()));
    }
    out.push('\n');
    for row in shown.chunks(ROW_WIDTH) {
        out.push_str("  ");
        out.push_str(&row.join("  "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_header_underlines_title_width() {
        let s = section_header("Café".bold().cyan());
        assert!(s.ends_with("\n────\n\n"));
    }

    #[test]
    fn summary_lists_counts() {
        let stats = ConversionStats {
            lines_read: 5,
            blank_lines: 2,
            words_written: 3,
        };
        let s = render_summary(Path::new("words.txt"), Path::new("words.json"), &stats);
        assert!(s.contains("Source: words.txt"));
        assert!(s.contains("Output: words.json"));
        assert!(s.contains("Lines read: 5"));
        assert!(s.contains("Blank lines skipped: 2"));
        assert!(s.contains("Words written: "));
    }

    #[test]
    fn candidates_are_laid_out_in_rows() {
        let words = ["GRAPE", "BRAVE", "CRANE", "GRACE", "FLARE", "STARE"];
        let clues = vec!["slate=BBGBG".parse::<Clue>().unwrap()];
        let s = render_candidates(&words, &clues);
        assert!(s.contains("Clues: SLATE=BBGBG"));
        assert!(s.contains("Matches: 6"));
        assert!(s.contains("  GRAPE  BRAVE  CRANE  GRACE  FLARE\n  STARE\n"));
    }

    #[test]
    fn candidates_are_capped() {
        let owned: Vec<String> = (0..150).map(|i| format!("W{i:03}")).collect();
        let words: Vec<&str> = owned.iter().map(String::as_str).collect();
        let s = render_candidates(&words, &[]);
        assert!(s.contains("Showing 99 of 150"));
        assert!(s.contains("W098"));
        assert!(!s.contains("W099"));
    }

    #[test]
    fn no_candidates_message() {
        let s = render_candidates(&[], &[]);
        assert!(s.contains("No matching word."));
    }
}
