//! 5×7 bitmap font for the native snapshot surface, which has no font
//! stack. Each row is five bits wide, most significant bit on the left.
//! Lowercase letters render as uppercase.

pub const GLYPH_COLUMNS: u32 = 5;
pub const GLYPH_ROWS: u32 = 7;
/// Advance in cells for a space.
pub const SPACE_ADVANCE: u32 = 4;
/// Gap in cells between glyphs.
pub const GLYPH_GAP: u32 = 1;

pub fn glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b10010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b10100, 0b00100, 0b00100, 0b00100, 0b11111],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b01110, 0b10001, 0b00001, 0b01110, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b10000, 0b11110, 0b00001, 0b10001, 0b01110],
        '6' => [0b01110, 0b10001, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b00100, 0b00100, 0b00100],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b10001, 0b01110],
        '%' => [0b11001, 0b11010, 0b00010, 0b00100, 0b01000, 0b01011, 0b10011],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '\'' => [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        '"' => [0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '/' => [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        '&' => [0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101],
        _ => return None,
    };
    Some(rows)
}

/// Width of `text` in cells, including inter-glyph gaps.
pub fn text_cells(text: &str) -> u32 {
    let mut cells = 0;
    for (index, ch) in text.chars().enumerate() {
        if index > 0 {
            cells += GLYPH_GAP;
        }
        cells += if glyph(ch).is_some() {
            GLYPH_COLUMNS
        } else {
            SPACE_ADVANCE
        };
    }
    cells
}

/// Lit cells of a glyph as `(column, row)` pairs.
pub fn lit_cells(rows: &[u8; 7]) -> impl Iterator<Item = (u32, u32)> + '_ {
    rows.iter().enumerate().flat_map(|(row, bits)| {
        (0..GLYPH_COLUMNS).filter_map(move |col| {
            let mask = 1u8 << (GLYPH_COLUMNS - 1 - col);
            (bits & mask != 0).then_some((col, row as u32))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_strings_are_fully_covered() {
        for text in [
            "My Reading Journey",
            "The Market's Vote - Data Story",
            "Start: 0%",
            "End: 100%",
            "Completion: 42.5%",
        ] {
            for ch in text.chars().filter(|c| *c != ' ') {
                assert!(glyph(ch).is_some(), "missing glyph for {ch:?} in {text:?}");
            }
        }
    }

    #[test]
    fn rows_fit_five_columns() {
        for ch in ('A'..='Z').chain('0'..='9') {
            let rows = glyph(ch).unwrap();
            assert!(rows.iter().all(|row| *row < 0b100000), "{ch} overflows");
        }
    }

    #[test]
    fn measures_gaps_and_spaces() {
        assert_eq!(text_cells(""), 0);
        assert_eq!(text_cells("A"), 5);
        assert_eq!(text_cells("AB"), 11);
        assert_eq!(text_cells("A B"), 5 + 1 + 4 + 1 + 5);
    }

    #[test]
    fn lit_cells_follow_bits() {
        let minus = glyph('-').unwrap();
        let cells: Vec<_> = lit_cells(&minus).collect();
        assert_eq!(cells, vec![(0, 3), (1, 3), (2, 3), (3, 3), (4, 3)]);
    }
}
