//! Diagnostic text rendering of the board.
//!
//! A presentation convenience built on the query interface: the intersection
//! grid is dumped row by row, each occupied cell showing one letter per
//! resource produced there, optionally wrapped in ANSI color codes. The exact
//! column layout is not a compatibility-bearing format.

use crate::board::Board;
use crate::civ::ResourceCounts;
use crate::grid::{GridCoord, GRID_HEIGHT, GRID_WIDTH};
use std::fmt::Write;

const RESET: &str = "\x1b[0m";

/// Resource letters and their ANSI color codes, in print order
const RESOURCE_CELLS: [(&str, &str); 6] = [
    ("B", "\x1b[31m"), // brick, red
    ("L", "\x1b[32m"), // lumber, green
    ("O", "\x1b[90m"), // ore, gray
    ("G", "\x1b[93m"), // grain, bright yellow
    ("W", "\x1b[37m"), // wool, white
    ("0", "\x1b[33m"), // trash, yellow
];

fn cell(out: &mut String, counts: &ResourceCounts, color: bool) {
    let present = [
        counts.brick > 0,
        counts.lumber > 0,
        counts.ore > 0,
        counts.grain > 0,
        counts.wool > 0,
        counts.trash > 0,
    ];
    for (i, (letter, code)) in RESOURCE_CELLS.iter().enumerate() {
        if present[i] {
            if color {
                out.push_str(code);
                out.push_str(letter);
                out.push_str(RESET);
            } else {
                out.push_str(letter);
            }
        }
    }
}

/// Render the board as a letter-headed grid of resource codes.
pub fn render_board(board: &Board, color: bool) -> String {
    let mut out = String::new();

    out.push_str("     ");
    for i in 0..GRID_WIDTH {
        out.push((b'A' + i as u8) as char);
        out.push('\t');
    }
    out.push('\n');
    for _ in 0..GRID_WIDTH {
        out.push_str("--------");
    }
    out.push('\n');

    for y in 0..GRID_HEIGHT {
        let _ = write!(out, "{y:02} \u{2502} ");
        for x in 0..GRID_WIDTH {
            match board.intersection_at(GridCoord::new(x, y)) {
                None => out.push(' '),
                Some(id) => cell(&mut out, &board.resources_at(id), color),
            }
            out.push('\t');
        }
        out.push_str("\n   \u{2502}\n   \u{2502}\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board() -> Board {
        let mut rng = StdRng::seed_from_u64(12);
        Board::standard_with_rng(&mut rng).unwrap()
    }

    #[test]
    fn test_plain_render_has_no_escape_codes() {
        let text = render_board(&board(), false);
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_color_render_resets_every_code() {
        let text = render_board(&board(), true);
        assert_eq!(text.matches('\x1b').count() % 2, 0);
        assert!(text.contains(RESET));
    }

    #[test]
    fn test_render_has_column_headers_and_rows() {
        let text = render_board(&board(), false);
        let header = text.lines().next().unwrap();
        for i in 0..GRID_WIDTH {
            let letter = (b'A' + i as u8) as char;
            assert!(header.contains(letter), "missing column {letter}");
        }
        for y in 0..GRID_HEIGHT {
            assert!(text.contains(&format!("{y:02} \u{2502}")), "missing row {y}");
        }
    }

    #[test]
    fn test_render_shows_resource_letters() {
        // Every standard board has all five resources plus the desert, so
        // each letter appears somewhere in the dump.
        let text = render_board(&board(), false);
        for letter in ["B", "L", "O", "G", "W", "0"] {
            assert!(text.contains(letter), "missing resource code {letter}");
        }
    }
}
