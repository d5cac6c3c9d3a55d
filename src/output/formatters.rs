//! Text art and formatting shared by the TUI and the simple mode

use crate::game::MAX_STAGE;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Title banner shown on the main menu
pub const TITLE_BANNER: [&str; 5] = [
    "##   ##    ###    ##   ##   #####   ##   ##    ###    ##   ##",
    "##   ##   ## ##   ###  ##  ##    #  ### ###   ## ##   ###  ##",
    "#######  #######  ## # ##  ##       ## # ##  #######  ## # ##",
    "##   ##  ##   ##  ##  ###  ##  ###  ##   ##  ##   ##  ##  ###",
    "##   ##  ##   ##  ##   ##   #####   ##   ##  ##   ##  ##   ##",
];

/// Banner shown when a round is won
pub const WIN_BANNER: [&str; 5] = [
    "##   ##   #####   ##   ##      ##  ##  ##  ##  ##   ##  ##",
    " ## ##   ##   ##  ##   ##      ##  ##  ##  ##  ###  ##  ##",
    "  ###    ##   ##  ##   ##      ##  ##  ##  ##  ## # ##  ##",
    "  ##     ##   ##  ##   ##       ## ## ##   ##  ##  ###    ",
    "  ##      #####   #######        ######    ##  ##   ##  ##",
];

/// Banner shown when a round is lost
pub const LOSE_BANNER: [&str; 5] = [
    " #####     ###    ##   ##  #####     #####   ##   ##  ######  ######  ##",
    "##    #   ## ##   ### ###  ##       ##   ##  ##   ##  ##      ##  ##  ##",
    "##       #######  ## # ##  ####     ##   ##  ##   ##  ####    ######  ##",
    "##  ###  ##   ##  ##   ##  ##       ##   ##   ## ##   ##      ## ##     ",
    " #####   ##   ##  ##   ##  ######    #####     ###    ######  ##  ##  ##",
];

/// Empty gallows, one string per row
const GALLOWS: [&str; 18] = [
    r"    _________________________________",
    r"         []  //                 |",
    r"         [] //                  |",
    r"         []//                   |",
    r"         []/                    |",
    r"         []",
    r"         []",
    r"         []",
    r"         []",
    r"         []",
    r"         []",
    r"         []",
    r"         []",
    r"         []",
    r"         []\",
    r"        /[]\\",
    r" ______//[]_\\_________",
    r"|______________________|",
];

/// Body part drawn at (row, column) on the gallows
type Part = (usize, usize, &'static str);

/// Parts added by each wrong guess, in order
const PARTS: [&[Part]; MAX_STAGE as usize] = [
    // Head
    &[
        (4, 28, r" ___|___"),
        (5, 28, r"// X 0 \\"),
        (6, 28, r" ]  ^  ["),
        (7, 28, r" \__~__/"),
    ],
    // Body
    &[(8, 31, "[ ]"), (9, 31, "[ ]"), (10, 31, "[_]")],
    // Left arm
    &[(8, 27, "  //"), (9, 27, " //"), (10, 27, "//")],
    // Right arm
    &[(8, 34, r"\\  "), (9, 34, r" \\ "), (10, 34, r"  \\")],
    // Left leg
    &[(11, 28, "  // "), (12, 28, " //"), (13, 28, "//")],
    // Right leg
    &[(11, 33, r"\\"), (12, 33, r" \\"), (13, 33, r"  \\")],
];

/// Draw the gallows with the figure completed up to `stage`
///
/// Stages above the maximum draw the full figure.
#[must_use]
pub fn gallows(stage: u8) -> Vec<String> {
    let mut canvas: Vec<Vec<char>> = GALLOWS.iter().map(|row| row.chars().collect()).collect();

    for parts in PARTS.iter().take(usize::from(stage)) {
        for &(row, col, text) in *parts {
            let line = &mut canvas[row];
            for (offset, ch) in text.chars().enumerate() {
                let x = col + offset;
                if line.len() <= x {
                    line.resize(x + 1, ' ');
                }
                line[x] = ch;
            }
        }
    }

    canvas
        .into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect()
}

/// Space out a hidden string so each position is easy to read
///
/// Word gaps become three spaces wide.
#[must_use]
pub fn spaced(hidden: &str) -> String {
    let mut out = String::with_capacity(hidden.len() * 2);
    for (i, ch) in hidden.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Wall-clock text for the game header, e.g. `Mon Oct 19 14:03:05 2026`
#[must_use]
pub fn clock_text<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format("%a %b %e %H:%M:%S %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gallows_has_no_figure() {
        let art = gallows(0).join("\n");
        assert!(!art.contains("X 0"));
        assert!(!art.contains("[_]"));
        assert_eq!(gallows(0).len(), GALLOWS.len());
    }

    #[test]
    fn stages_add_parts_in_order() {
        assert!(gallows(1).join("\n").contains("// X 0 \\\\"));
        assert!(!gallows(1).join("\n").contains("[_]"));
        assert!(gallows(2).join("\n").contains("[_]"));
    }

    #[test]
    fn full_figure_at_last_stage() {
        let art = gallows(MAX_STAGE);
        assert_eq!(art[13], r"         []                 //     \\");
        assert_eq!(gallows(MAX_STAGE + 3), art);
    }

    #[test]
    fn each_stage_changes_the_drawing() {
        for stage in 1..=MAX_STAGE {
            assert_ne!(gallows(stage), gallows(stage - 1), "stage {stage}");
        }
    }

    #[test]
    fn spaced_separates_positions() {
        assert_eq!(spaced("BA_A_A"), "B A _ A _ A");
        assert_eq!(spaced("H_ _"), "H _   _");
        assert_eq!(spaced(""), "");
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(create_progress_bar(0, 6, 6), "░░░░░░");
        assert_eq!(create_progress_bar(3, 6, 6), "███░░░");
        assert_eq!(create_progress_bar(9, 6, 6), "██████");
        assert_eq!(create_progress_bar(1, 0, 4), "░░░░");
    }

    #[test]
    fn clock_text_matches_asctime_layout() {
        let time = chrono::Utc.with_ymd_and_hms(2026, 10, 19, 14, 3, 5).unwrap();
        assert_eq!(clock_text(&time), "Mon Oct 19 14:03:05 2026");

        let time = chrono::Utc.with_ymd_and_hms(2026, 3, 5, 9, 7, 0).unwrap();
        assert_eq!(clock_text(&time), "Thu Mar  5 09:07:00 2026");
    }
}
