use crate::error::{HellModemError, Result};
use crate::font;
use std::collections::HashMap;

/// One transmittable character bitmap.
///
/// Columns are stored left to right; bit 0 of each column is the top row.
/// The on-air scan order is column-major, top to bottom, which is exactly
/// the order `rows()`-sized bit groups come off each column word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    columns: Vec<u16>,
}

impl Glyph {
    pub fn new(columns: Vec<u16>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[u16] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Whether the pixel at (column, row) is carrier-on.
    pub fn pixel(&self, col: usize, row: usize) -> bool {
        (self.columns[col] >> row) & 1 == 1
    }

    /// Scan-order index of the first carrier-on pixel, if any.
    ///
    /// The receiver uses this to back-date its slot phase when it locks onto
    /// the leading edge of the preamble dot.
    pub fn first_lit_offset(&self, rows: usize) -> Option<usize> {
        for (c, &word) in self.columns.iter().enumerate() {
            for r in 0..rows {
                if (word >> r) & 1 == 1 {
                    return Some(c * rows + r);
                }
            }
        }
        None
    }

    fn hamming(&self, other_columns: &[u16]) -> u32 {
        self.columns
            .iter()
            .zip(other_columns.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }
}

/// Result of matching a reconstructed bitmap against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphMatch {
    pub ch: char,
    pub distance: u32,
}

/// Static code point to bitmap mapping with uniform geometry.
///
/// Built once from an externally produced font asset and read-only for the
/// lifetime of the process. Lookup is total: unmapped code points resolve to
/// the fallback glyph.
#[derive(Debug)]
pub struct GlyphTable {
    rows: usize,
    columns: usize,
    map: HashMap<char, Glyph>,
    fallback: char,
}

impl GlyphTable {
    /// Table backed by the generated builtin font (14x14, ASCII + Japanese).
    pub fn builtin() -> Self {
        let map = font::FONT_DATA
            .iter()
            .map(|&(ch, cols)| (ch, Glyph::new(cols.to_vec())))
            .collect();
        Self {
            rows: font::FONT_ROWS,
            columns: font::FONT_COLUMNS,
            map,
            fallback: font::FALLBACK_CODEPOINT,
        }
    }

    /// Build a table with explicit geometry, mainly for tests and alternate
    /// font assets. `fallback` must be one of the entries.
    pub fn from_entries(
        rows: usize,
        columns: usize,
        entries: &[(char, Vec<u16>)],
        fallback: char,
    ) -> Result<Self> {
        if entries.is_empty() {
            return Err(HellModemError::EmptyGlyphTable);
        }
        // Column words are u16; the decoder sets row bits with `1 << row`.
        if rows == 0 || rows > u16::BITS as usize {
            return Err(HellModemError::InvalidConfig(format!(
                "glyph rows {} must be between 1 and {}",
                rows,
                u16::BITS
            )));
        }
        let mut map = HashMap::with_capacity(entries.len());
        for (ch, cols) in entries {
            if cols.len() != columns {
                return Err(HellModemError::InvalidGlyphGeometry {
                    codepoint: *ch,
                    got: cols.len(),
                    want: columns,
                });
            }
            map.insert(*ch, Glyph::new(cols.clone()));
        }
        if !map.contains_key(&fallback) {
            return Err(HellModemError::InvalidGlyphGeometry {
                codepoint: fallback,
                got: 0,
                want: columns,
            });
        }
        Ok(Self {
            rows,
            columns,
            map,
            fallback,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn fallback_codepoint(&self) -> char {
        self.fallback
    }

    /// Glyph for `ch`, or the fallback glyph when unmapped. Never fails.
    pub fn lookup(&self, ch: char) -> &Glyph {
        self.map.get(&ch).unwrap_or_else(|| &self.map[&self.fallback])
    }

    pub fn contains(&self, ch: char) -> bool {
        self.map.contains_key(&ch)
    }

    /// Nearest glyph by Hamming distance over the whole table.
    ///
    /// Ties break toward the lowest code point so ASCII wins over Japanese
    /// deterministically regardless of map iteration order.
    pub fn best_match(&self, columns: &[u16]) -> GlyphMatch {
        let mut best = GlyphMatch {
            ch: self.fallback,
            distance: u32::MAX,
        };
        for (&ch, glyph) in &self.map {
            let distance = glyph.hamming(columns);
            if distance < best.distance || (distance == best.distance && ch < best.ch) {
                best = GlyphMatch { ch, distance };
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_geometry() {
        let table = GlyphTable::builtin();
        assert_eq!(table.rows(), crate::GLYPH_ROWS);
        assert_eq!(table.columns(), crate::GLYPH_COLUMNS);
        assert_eq!(table.rows(), 14);
        assert!(table.len() > 250);
    }

    #[test]
    fn lookup_is_total() {
        let table = GlyphTable::builtin();
        let fallback = table.lookup('\u{1F600}');
        assert_eq!(fallback, table.lookup(table.fallback_codepoint()));
    }

    #[test]
    fn space_is_blank_and_dot_is_not() {
        let table = GlyphTable::builtin();
        assert!(table.lookup(' ').columns().iter().all(|&c| c == 0));
        assert!(table.lookup('.').columns().iter().any(|&c| c != 0));
    }

    #[test]
    fn dot_first_lit_offset_is_stable() {
        let table = GlyphTable::builtin();
        let dot = table.lookup('.');
        let offset = dot.first_lit_offset(table.rows()).unwrap();
        // Centered dot block: first lit column is 5, first lit row is 9.
        assert_eq!(offset, 5 * 14 + 9);
    }

    #[test]
    fn exact_match_has_zero_distance() {
        let table = GlyphTable::builtin();
        for ch in ['A', 'z', '3', 'こ', 'カ', '日'] {
            let m = table.best_match(table.lookup(ch).columns());
            assert_eq!(m.ch, ch);
            assert_eq!(m.distance, 0);
        }
    }

    #[test]
    fn near_match_recovers_original() {
        let table = GlyphTable::builtin();
        let mut cols = table.lookup('H').columns().to_vec();
        cols[3] ^= 0x0004; // flip one pixel
        let m = table.best_match(&cols);
        assert_eq!(m.ch, 'H');
        assert_eq!(m.distance, 1);
    }

    #[test]
    fn tie_break_prefers_lowest_codepoint() {
        let entries = vec![
            ('a', vec![0x0001u16, 0x0000]),
            ('b', vec![0x0002u16, 0x0000]),
            (' ', vec![0x0000u16, 0x0000]),
        ];
        let table = GlyphTable::from_entries(2, 2, &entries, ' ').unwrap();
        // A bitmap one bit away from both 'a' and 'b' must resolve to 'a'.
        let m = table.best_match(&[0x0003, 0x0000]);
        assert_eq!(m.ch, 'a');
        assert_eq!(m.distance, 1);
    }

    #[test]
    fn from_entries_rejects_bad_width() {
        let entries = vec![(' ', vec![0u16; 3])];
        assert!(GlyphTable::from_entries(14, 14, &entries, ' ').is_err());
    }

    #[test]
    fn from_entries_rejects_missing_fallback() {
        let entries = vec![('a', vec![1u16, 2])];
        assert!(GlyphTable::from_entries(2, 2, &entries, ' ').is_err());
    }

    #[test]
    fn from_entries_rejects_rows_beyond_column_word() {
        // 17 rows cannot fit a u16 column; accepting it would let the
        // decoder shift a row bit out of range.
        let entries = vec![(' ', vec![0u16, 0])];
        assert!(matches!(
            GlyphTable::from_entries(17, 2, &entries, ' '),
            Err(HellModemError::InvalidConfig(_))
        ));
        assert!(GlyphTable::from_entries(0, 2, &entries, ' ').is_err());
        assert!(GlyphTable::from_entries(16, 2, &entries, ' ').is_ok());
    }

    #[test]
    fn letterforms_carry_their_strokes() {
        let table = GlyphTable::builtin();

        // 'I' is drawn with a tall vertical stem.
        let stem = table
            .lookup('I')
            .columns()
            .iter()
            .map(|c| c.count_ones())
            .max()
            .unwrap();
        assert!(stem >= 8);

        // 'O' is a ring: hollow at the center, lit across several columns.
        let o = table.lookup('O');
        assert!(!o.pixel(6, 6));
        assert!(o.columns().iter().filter(|&&c| c != 0).count() >= 5);

        // The 日 frame stays closed: both outer strokes span most rows.
        let sun = table.lookup('日');
        let lit: Vec<usize> = (0..sun.width())
            .filter(|&c| sun.columns()[c] != 0)
            .collect();
        assert!(sun.columns()[lit[0]].count_ones() >= 9);
        assert!(sun.columns()[*lit.last().unwrap()].count_ones() >= 9);

        // Every printable character except the space puts ink on the air,
        // and confusable pairs stay distinguishable.
        for cp in 0x21..0x7f_u32 {
            let ch = char::from_u32(cp).unwrap();
            assert!(table.lookup(ch).columns().iter().any(|&c| c != 0), "{ch}");
        }
        for (a, b) in [('I', 'l'), ('O', '0'), ('へ', 'ヘ')] {
            assert_ne!(table.lookup(a).columns(), table.lookup(b).columns());
        }
    }
}
