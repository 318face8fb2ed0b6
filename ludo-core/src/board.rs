use serde::{Deserialize, Serialize};

/// Cells are addressed 1..=225, row-major over the 15x15 grid.
pub type Cell = u16;

pub const BOARD_SIZE: u16 = 15;
pub const CELL_COUNT: u16 = BOARD_SIZE * BOARD_SIZE;

/// Zero-based row of a cell.
pub fn cell_row(i: Cell) -> u16 {
    (i - 1) / BOARD_SIZE
}

/// Zero-based column of a cell.
pub fn cell_col(i: Cell) -> u16 {
    (i - 1) % BOARD_SIZE
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Red,
    Yellow,
    Blue,
    Black,
    White,
}

impl Color {
    pub fn name(self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Black => "black",
            Color::White => "white",
        }
    }
}

// Zone data is kept verbatim, duplicates included: cell 76 appears twice in
// the green zone, and deduplicating literal sets could shift classification
// at boundary cells.
pub const GREEN_ZONE: [Cell; 21] = [
    1, 2, 3, 4, 5, 6, 16, 21, 31, 36, 46, 51, 61, 66, 76, 76, 77, 78, 79, 80, 81,
];
pub const RED_ZONE: [Cell; 21] = shift(GREEN_ZONE, 9);
pub const YELLOW_ZONE: [Cell; 21] = shift(GREEN_ZONE, 135);
pub const BLUE_ZONE: [Cell; 21] = shift(GREEN_ZONE, 144);
pub const BLACK_CELLS: [Cell; 5] = [97, 99, 127, 129, 113];

// Home lanes: seven cells per color, starting at the color's lane entry.
pub const GREEN_LANE: [Cell; 7] = [92, 107, 108, 109, 110, 111, 112];
pub const RED_LANE: [Cell; 7] = [23, 38, 53, 68, 83, 98, 24];
pub const YELLOW_LANE: [Cell; 7] = [202, 203, 188, 173, 158, 143, 128];
pub const BLUE_LANE: [Cell; 7] = [134, 119, 118, 117, 116, 115, 114];

const fn shift(base: [Cell; 21], offset: Cell) -> [Cell; 21] {
    let mut out = base;
    let mut i = 0;
    while i < out.len() {
        out[i] += offset;
        i += 1;
    }
    out
}

fn in_set(set: &[Cell], i: Cell) -> bool {
    set.contains(&i)
}

/// Classify a cell. First match wins in the order green, red, yellow, blue,
/// black; anything else is white. Total over all inputs.
pub fn color_of(i: Cell) -> Color {
    if in_set(&GREEN_ZONE, i) || in_set(&GREEN_LANE, i) {
        Color::Green
    } else if in_set(&RED_ZONE, i) || in_set(&RED_LANE, i) {
        Color::Red
    } else if in_set(&YELLOW_ZONE, i) || in_set(&YELLOW_LANE, i) {
        Color::Yellow
    } else if in_set(&BLUE_ZONE, i) || in_set(&BLUE_LANE, i) {
        Color::Blue
    } else if in_set(&BLACK_CELLS, i) {
        Color::Black
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_of_is_total_over_the_grid() {
        for i in 1..=CELL_COUNT {
            let c = color_of(i);
            assert!(
                matches!(
                    c,
                    Color::Green
                        | Color::Red
                        | Color::Yellow
                        | Color::Blue
                        | Color::Black
                        | Color::White
                ),
                "cell {i} classified as {c:?}"
            );
        }
    }

    #[test]
    fn zone_corners_classify_as_expected() {
        assert_eq!(color_of(1), Color::Green);
        assert_eq!(color_of(10), Color::Red);
        assert_eq!(color_of(136), Color::Yellow);
        assert_eq!(color_of(145), Color::Blue);
        assert_eq!(color_of(97), Color::Black);
        assert_eq!(color_of(113), Color::Black);
        // Plain path cell in the top row
        assert_eq!(color_of(8), Color::White);
    }

    #[test]
    fn lane_entries_take_their_color() {
        assert_eq!(color_of(92), Color::Green);
        assert_eq!(color_of(23), Color::Red);
        assert_eq!(color_of(202), Color::Yellow);
        assert_eq!(color_of(134), Color::Blue);
    }

    #[test]
    fn shifted_zones_stay_on_the_board() {
        for z in [RED_ZONE, YELLOW_ZONE, BLUE_ZONE] {
            for c in z {
                assert!(c >= 1 && c <= CELL_COUNT);
            }
        }
    }

    #[test]
    fn rows_and_cols_cover_the_grid() {
        assert_eq!(cell_row(1), 0);
        assert_eq!(cell_col(1), 0);
        assert_eq!(cell_row(225), 14);
        assert_eq!(cell_col(225), 14);
        assert_eq!(cell_row(16), 1);
        assert_eq!(cell_col(16), 0);
    }
}
