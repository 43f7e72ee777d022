use crate::glyph::{Glyph, GlyphTable};

/// Framing characters sent before the message: three dots separated by
/// single spacers, plus the spacer isolating the first message glyph. The
/// receiver locks its slot phase on the first dot and confirms the rest.
pub const PREAMBLE: [char; 6] = ['.', ' ', '.', ' ', '.', ' '];

/// Mirror image framing after the message. Seeing it returns the receiver
/// to its searching state.
pub const POSTAMBLE: [char; 6] = [' ', '.', ' ', '.', ' ', '.'];

/// One glyph scheduled for transmission, tagged with the code point it was
/// built from so progress reporting can name what is on the air.
#[derive(Debug, Clone)]
pub struct FrameGlyph {
    pub ch: char,
    pub glyph: Glyph,
}

/// The complete transmission unit: preamble dots, message, postamble dots.
#[derive(Debug, Clone)]
pub struct Frame {
    pub glyphs: Vec<FrameGlyph>,
}

impl Frame {
    /// Total pixel cells across every glyph in the frame.
    pub fn total_cells(&self, rows: usize) -> usize {
        self.glyphs.iter().map(|g| g.glyph.width() * rows).sum()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Assembles frames from input text and a glyph table.
pub struct FrameBuilder<'a> {
    table: &'a GlyphTable,
}

impl<'a> FrameBuilder<'a> {
    pub fn new(table: &'a GlyphTable) -> Self {
        Self { table }
    }

    /// Deterministic: the same text always yields the same frame. Iterates
    /// by Unicode scalar; unmapped scalars take the fallback glyph.
    pub fn build(&self, text: &str) -> Frame {
        let mut glyphs =
            Vec::with_capacity(PREAMBLE.len() + text.chars().count() + POSTAMBLE.len());
        for ch in PREAMBLE {
            glyphs.push(self.framing_glyph(ch));
        }
        for ch in text.chars() {
            let resolved = if self.table.contains(ch) {
                ch
            } else {
                self.table.fallback_codepoint()
            };
            glyphs.push(FrameGlyph {
                ch: resolved,
                glyph: self.table.lookup(ch).clone(),
            });
        }
        for ch in POSTAMBLE {
            glyphs.push(self.framing_glyph(ch));
        }
        Frame { glyphs }
    }

    fn framing_glyph(&self, ch: char) -> FrameGlyph {
        FrameGlyph {
            ch,
            glyph: self.table.lookup(ch).clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_has_framing_on_both_sides() {
        let table = GlyphTable::builtin();
        let frame = FrameBuilder::new(&table).build("HELLO");
        assert_eq!(frame.len(), 6 + 5 + 6);
        let head: Vec<char> = frame.glyphs[..6].iter().map(|g| g.ch).collect();
        let tail: Vec<char> = frame.glyphs[frame.len() - 6..].iter().map(|g| g.ch).collect();
        assert_eq!(head, PREAMBLE);
        assert_eq!(tail, POSTAMBLE);
    }

    #[test]
    fn framing_is_three_dots_with_single_spacers() {
        assert_eq!(PREAMBLE.iter().filter(|&&c| c == '.').count(), 3);
        assert_eq!(POSTAMBLE.iter().filter(|&&c| c == '.').count(), 3);
        for pair in PREAMBLE.windows(2).chain(POSTAMBLE.windows(2)) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn empty_text_still_frames() {
        let table = GlyphTable::builtin();
        let frame = FrameBuilder::new(&table).build("");
        assert_eq!(frame.len(), 12);
    }

    #[test]
    fn build_is_deterministic() {
        let table = GlyphTable::builtin();
        let builder = FrameBuilder::new(&table);
        let a = builder.build("かな KANA");
        let b = builder.build("かな KANA");
        let chars_a: Vec<char> = a.glyphs.iter().map(|g| g.ch).collect();
        let chars_b: Vec<char> = b.glyphs.iter().map(|g| g.ch).collect();
        assert_eq!(chars_a, chars_b);
    }

    #[test]
    fn unmapped_codepoint_resolves_to_fallback() {
        let table = GlyphTable::builtin();
        let frame = FrameBuilder::new(&table).build("\u{1F600}");
        assert_eq!(frame.glyphs[6].ch, table.fallback_codepoint());
        assert_eq!(
            frame.glyphs[6].glyph,
            *table.lookup(table.fallback_codepoint())
        );
    }

    #[test]
    fn iterates_by_scalar_not_byte() {
        let table = GlyphTable::builtin();
        let frame = FrameBuilder::new(&table).build("こんにちは");
        assert_eq!(frame.len(), 6 + 5 + 6);
    }

    #[test]
    fn total_cells_counts_every_glyph() {
        let table = GlyphTable::builtin();
        let frame = FrameBuilder::new(&table).build("AB");
        assert_eq!(frame.total_cells(table.rows()), 14 * 14 * 14);
    }
}
