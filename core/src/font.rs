//! Built-in 14x14 transmission font.
//!
//! ASCII letterforms are rasterized from the DejaVu Sans Mono outlines at 13
//! px; the kana, kanji and wide punctuation are hand-digitized bitmaps.
//! Voiced kana carry their base form with the dakuten or handakuten drawn in
//! the top-right corner, and small kana are reduced copies of their base
//! forms. Each entry stores one column per `u16`, bit 0 at the top row, so a
//! column is emitted top to bottom by shifting out successive bits.
//!
//! The period is deliberately a bold centered 3x3 block rather than a type
//! dot: it doubles as the sync mark and has to survive a noisy channel.

/// Pixel rows per glyph.
pub const FONT_ROWS: usize = 14;

/// Pixel columns per glyph, transmitted left to right.
pub const FONT_COLUMNS: usize = 14;

/// Stand-in drawn for characters outside the table.
pub const FALLBACK_CODEPOINT: char = '\u{fffd}';

/// Every character the built-in font can draw, ordered by codepoint:
/// printable ASCII, hiragana, katakana, a small kanji set and the wide
/// punctuation common in amateur radio traffic.
pub static FONT_DATA: &[(char, [u16; FONT_COLUMNS])] = &[
    (' ', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('!', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x06FC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('"', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x003C, 0x0000, 0x003C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('#', [0x0000, 0x0000, 0x0000, 0x0080, 0x0690, 0x01F0, 0x009E, 0x0790, 0x00F8, 0x009E, 0x0010, 0x0000, 0x0000, 0x0000]),
    ('$', [0x0000, 0x0000, 0x0000, 0x0000, 0x0230, 0x0448, 0x0448, 0x1FFC, 0x0488, 0x0488, 0x0310, 0x0000, 0x0000, 0x0000]),
    ('%', [0x0000, 0x0000, 0x0000, 0x0018, 0x00A4, 0x00A4, 0x0058, 0x0340, 0x04C0, 0x04A0, 0x0300, 0x0000, 0x0000, 0x0000]),
    ('&', [0x0000, 0x0000, 0x0000, 0x0000, 0x03C0, 0x0638, 0x0424, 0x04C4, 0x0584, 0x0200, 0x05C0, 0x0000, 0x0000, 0x0000]),
    ('\'', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x003C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('(', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x01F8, 0x0607, 0x0801, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    (')', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0801, 0x0E07, 0x01F8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('*', [0x0000, 0x0000, 0x0000, 0x0000, 0x0048, 0x0050, 0x0030, 0x00FC, 0x0030, 0x0050, 0x0048, 0x0000, 0x0000, 0x0000]),
    ('+', [0x0000, 0x0000, 0x0000, 0x0040, 0x0040, 0x0040, 0x03F8, 0x0040, 0x0040, 0x0040, 0x0000, 0x0000, 0x0000, 0x0000]),
    (',', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1000, 0x0E00, 0x0600, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('-', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0080, 0x0080, 0x0080, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('.', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0E00, 0x0E00, 0x0E00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('/', [0x0000, 0x0000, 0x0000, 0x0000, 0x1000, 0x0C00, 0x0380, 0x00E0, 0x0018, 0x0004, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('0', [0x0000, 0x0000, 0x0000, 0x0000, 0x01F0, 0x0208, 0x0404, 0x0444, 0x0404, 0x0208, 0x01F0, 0x0000, 0x0000, 0x0000]),
    ('1', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0404, 0x0404, 0x07FC, 0x0400, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('2', [0x0000, 0x0000, 0x0000, 0x0000, 0x0408, 0x0604, 0x0504, 0x0584, 0x0484, 0x044C, 0x0438, 0x0000, 0x0000, 0x0000]),
    ('3', [0x0000, 0x0000, 0x0000, 0x0000, 0x0208, 0x0404, 0x0444, 0x0444, 0x0444, 0x06A4, 0x03B8, 0x0000, 0x0000, 0x0000]),
    ('4', [0x0000, 0x0000, 0x0000, 0x0000, 0x0180, 0x0140, 0x0130, 0x0118, 0x0104, 0x07FC, 0x0100, 0x0000, 0x0000, 0x0000]),
    ('5', [0x0000, 0x0000, 0x0000, 0x0000, 0x023C, 0x0424, 0x0424, 0x0424, 0x0424, 0x0244, 0x03C0, 0x0000, 0x0000, 0x0000]),
    ('6', [0x0000, 0x0000, 0x0000, 0x0000, 0x01F0, 0x0248, 0x0424, 0x0424, 0x0424, 0x0664, 0x03C8, 0x0000, 0x0000, 0x0000]),
    ('7', [0x0000, 0x0000, 0x0000, 0x0000, 0x0004, 0x0404, 0x0304, 0x0184, 0x0064, 0x001C, 0x0004, 0x0000, 0x0000, 0x0000]),
    ('8', [0x0000, 0x0000, 0x0000, 0x0000, 0x03B8, 0x06C4, 0x0444, 0x0444, 0x0444, 0x04C4, 0x03B8, 0x0000, 0x0000, 0x0000]),
    ('9', [0x0000, 0x0000, 0x0000, 0x0000, 0x0278, 0x04CC, 0x0484, 0x0484, 0x0484, 0x0248, 0x01F0, 0x0000, 0x0000, 0x0000]),
    (':', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0630, 0x0630, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    (';', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1000, 0x0E30, 0x0630, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('<', [0x0000, 0x0000, 0x0000, 0x0000, 0x00C0, 0x00C0, 0x00C0, 0x0120, 0x0120, 0x0120, 0x0210, 0x0000, 0x0000, 0x0000]),
    ('=', [0x0000, 0x0000, 0x0000, 0x0000, 0x0120, 0x0120, 0x0120, 0x0120, 0x0120, 0x0120, 0x0120, 0x0000, 0x0000, 0x0000]),
    ('>', [0x0000, 0x0000, 0x0000, 0x0000, 0x0210, 0x0120, 0x0120, 0x0120, 0x00C0, 0x00C0, 0x00C0, 0x0000, 0x0000, 0x0000]),
    ('?', [0x0000, 0x0000, 0x0000, 0x0000, 0x0008, 0x0004, 0x06C4, 0x0024, 0x0018, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('@', [0x0000, 0x0000, 0x0000, 0x0000, 0x03E0, 0x0C18, 0x180C, 0x11C4, 0x1224, 0x122C, 0x03F8, 0x0000, 0x0000, 0x0000]),
    ('A', [0x0000, 0x0000, 0x0000, 0x0000, 0x0600, 0x03C0, 0x0138, 0x0104, 0x0138, 0x03C0, 0x0600, 0x0000, 0x0000, 0x0000]),
    ('B', [0x0000, 0x0000, 0x0000, 0x0000, 0x07FC, 0x0444, 0x0444, 0x0444, 0x0444, 0x0444, 0x03B8, 0x0000, 0x0000, 0x0000]),
    ('C', [0x0000, 0x0000, 0x0000, 0x0000, 0x01F0, 0x0208, 0x0404, 0x0404, 0x0404, 0x0404, 0x0208, 0x0000, 0x0000, 0x0000]),
    ('D', [0x0000, 0x0000, 0x0000, 0x0000, 0x07FC, 0x0404, 0x0404, 0x0404, 0x0404, 0x0208, 0x01F0, 0x0000, 0x0000, 0x0000]),
    ('E', [0x0000, 0x0000, 0x0000, 0x0000, 0x07FC, 0x0444, 0x0444, 0x0444, 0x0444, 0x0444, 0x0444, 0x0000, 0x0000, 0x0000]),
    ('F', [0x0000, 0x0000, 0x0000, 0x0000, 0x07FC, 0x0044, 0x0044, 0x0044, 0x0044, 0x0044, 0x0044, 0x0000, 0x0000, 0x0000]),
    ('G', [0x0000, 0x0000, 0x0000, 0x0000, 0x01F0, 0x0208, 0x0404, 0x0404, 0x0404, 0x0444, 0x03C8, 0x0000, 0x0000, 0x0000]),
    ('H', [0x0000, 0x0000, 0x0000, 0x0000, 0x07FC, 0x0040, 0x0040, 0x0040, 0x0040, 0x0040, 0x07FC, 0x0000, 0x0000, 0x0000]),
    ('I', [0x0000, 0x0000, 0x0000, 0x0000, 0x0404, 0x0404, 0x07FC, 0x0404, 0x0404, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('J', [0x0000, 0x0000, 0x0000, 0x0000, 0x0200, 0x0400, 0x0404, 0x0404, 0x03FC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('K', [0x0000, 0x0000, 0x0000, 0x0000, 0x07FC, 0x0040, 0x0060, 0x0090, 0x0308, 0x0404, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('L', [0x0000, 0x0000, 0x0000, 0x0000, 0x07FC, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0000, 0x0000, 0x0000]),
    ('M', [0x0000, 0x0000, 0x0000, 0x0000, 0x07FC, 0x000C, 0x0070, 0x0080, 0x0070, 0x000C, 0x07FC, 0x0000, 0x0000, 0x0000]),
    ('N', [0x0000, 0x0000, 0x0000, 0x0000, 0x07FC, 0x000C, 0x0030, 0x0040, 0x0180, 0x0600, 0x07FC, 0x0000, 0x0000, 0x0000]),
    ('O', [0x0000, 0x0000, 0x0000, 0x0000, 0x01F0, 0x0208, 0x0404, 0x0404, 0x0404, 0x0208, 0x01F0, 0x0000, 0x0000, 0x0000]),
    ('P', [0x0000, 0x0000, 0x0000, 0x0000, 0x07FC, 0x0084, 0x0084, 0x0084, 0x0084, 0x00CC, 0x0078, 0x0000, 0x0000, 0x0000]),
    ('Q', [0x0000, 0x0000, 0x0000, 0x0000, 0x01F0, 0x0208, 0x0404, 0x0404, 0x0C04, 0x1E08, 0x03F0, 0x0000, 0x0000, 0x0000]),
    ('R', [0x0000, 0x0000, 0x0000, 0x0000, 0x07FC, 0x0044, 0x0044, 0x0044, 0x0044, 0x00CC, 0x0338, 0x0400, 0x0000, 0x0000]),
    ('S', [0x0000, 0x0000, 0x0000, 0x0000, 0x0238, 0x046C, 0x0444, 0x0444, 0x0444, 0x06C4, 0x0388, 0x0000, 0x0000, 0x0000]),
    ('T', [0x0000, 0x0000, 0x0000, 0x0004, 0x0004, 0x0004, 0x07FC, 0x0004, 0x0004, 0x0004, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('U', [0x0000, 0x0000, 0x0000, 0x0000, 0x03FC, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x03FC, 0x0000, 0x0000, 0x0000]),
    ('V', [0x0000, 0x0000, 0x0000, 0x0000, 0x000C, 0x0078, 0x0380, 0x0400, 0x0380, 0x0078, 0x000C, 0x0000, 0x0000, 0x0000]),
    ('W', [0x0000, 0x0000, 0x0000, 0x001C, 0x07E0, 0x0700, 0x00E0, 0x00E0, 0x0700, 0x07E0, 0x001C, 0x0000, 0x0000, 0x0000]),
    ('X', [0x0000, 0x0000, 0x0000, 0x0000, 0x0404, 0x030C, 0x01B0, 0x0060, 0x01B0, 0x030C, 0x0404, 0x0000, 0x0000, 0x0000]),
    ('Y', [0x0000, 0x0000, 0x0000, 0x0004, 0x0008, 0x0030, 0x07C0, 0x0030, 0x0008, 0x0004, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('Z', [0x0000, 0x0000, 0x0000, 0x0000, 0x0604, 0x0704, 0x0584, 0x0444, 0x0434, 0x041C, 0x040C, 0x0000, 0x0000, 0x0000]),
    ('[', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0FFF, 0x0801, 0x0801, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('\\', [0x0000, 0x0000, 0x0000, 0x0000, 0x0004, 0x0018, 0x00E0, 0x0380, 0x0C00, 0x1000, 0x0000, 0x0000, 0x0000, 0x0000]),
    (']', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0801, 0x0801, 0x0FFF, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('^', [0x0000, 0x0000, 0x0000, 0x0020, 0x0030, 0x0008, 0x0004, 0x0008, 0x0030, 0x0020, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('_', [0x0000, 0x0000, 0x0000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x0000, 0x0000, 0x0000]),
    ('`', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0002, 0x0004, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('a', [0x0000, 0x0000, 0x0000, 0x0000, 0x0300, 0x04A0, 0x0490, 0x0490, 0x0290, 0x07E0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('b', [0x0000, 0x0000, 0x0000, 0x0000, 0x07FF, 0x0630, 0x0410, 0x0410, 0x0630, 0x03E0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('c', [0x0000, 0x0000, 0x0000, 0x0000, 0x01C0, 0x0220, 0x0410, 0x0410, 0x0410, 0x0220, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('d', [0x0000, 0x0000, 0x0000, 0x0000, 0x03E0, 0x0630, 0x0410, 0x0410, 0x0630, 0x07FF, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('e', [0x0000, 0x0000, 0x0000, 0x0000, 0x03E0, 0x06B0, 0x0490, 0x0490, 0x04B0, 0x02E0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('f', [0x0000, 0x0000, 0x0000, 0x0000, 0x0010, 0x0010, 0x07FE, 0x0011, 0x0011, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('g', [0x0000, 0x0000, 0x0000, 0x0000, 0x03E0, 0x1630, 0x2410, 0x2410, 0x2230, 0x1FF0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('h', [0x0000, 0x0000, 0x0000, 0x0000, 0x07FF, 0x0020, 0x0010, 0x0010, 0x0010, 0x07E0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('i', [0x0000, 0x0000, 0x0000, 0x0000, 0x0410, 0x0410, 0x07F1, 0x0400, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('j', [0x0000, 0x0000, 0x0000, 0x0000, 0x2000, 0x2010, 0x2010, 0x1FF1, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('k', [0x0000, 0x0000, 0x0000, 0x0000, 0x07FF, 0x0080, 0x00C0, 0x0120, 0x0210, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('l', [0x0000, 0x0000, 0x0000, 0x0000, 0x0001, 0x0001, 0x03FF, 0x0400, 0x0400, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('m', [0x0000, 0x0000, 0x0000, 0x0000, 0x07F0, 0x0010, 0x0010, 0x07F0, 0x0010, 0x0010, 0x07F0, 0x0000, 0x0000, 0x0000]),
    ('n', [0x0000, 0x0000, 0x0000, 0x0000, 0x07F0, 0x0020, 0x0010, 0x0010, 0x0010, 0x07E0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('o', [0x0000, 0x0000, 0x0000, 0x0000, 0x03E0, 0x0630, 0x0410, 0x0410, 0x0630, 0x03E0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('p', [0x0000, 0x0000, 0x0000, 0x0000, 0x3FF0, 0x0630, 0x0410, 0x0410, 0x0630, 0x03E0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('q', [0x0000, 0x0000, 0x0000, 0x0000, 0x03E0, 0x0630, 0x0410, 0x0410, 0x0230, 0x3FF0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('r', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x07F0, 0x0030, 0x0010, 0x0010, 0x0020, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('s', [0x0000, 0x0000, 0x0000, 0x0000, 0x0260, 0x0490, 0x0490, 0x0490, 0x0490, 0x0320, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('t', [0x0000, 0x0000, 0x0000, 0x0000, 0x0010, 0x0010, 0x03FC, 0x0410, 0x0410, 0x0410, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('u', [0x0000, 0x0000, 0x0000, 0x0000, 0x03F0, 0x0400, 0x0400, 0x0400, 0x0200, 0x07F0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('v', [0x0000, 0x0000, 0x0000, 0x0000, 0x0030, 0x01E0, 0x0700, 0x0700, 0x01E0, 0x0030, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('w', [0x0000, 0x0000, 0x0000, 0x0030, 0x01C0, 0x0600, 0x01C0, 0x01C0, 0x0600, 0x01C0, 0x0030, 0x0000, 0x0000, 0x0000]),
    ('x', [0x0000, 0x0000, 0x0000, 0x0000, 0x0410, 0x0630, 0x01C0, 0x01C0, 0x0630, 0x0410, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('y', [0x0000, 0x0000, 0x0000, 0x0000, 0x0010, 0x20E0, 0x3300, 0x0E00, 0x01C0, 0x0030, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('z', [0x0000, 0x0000, 0x0000, 0x0000, 0x0610, 0x0510, 0x0490, 0x0490, 0x0450, 0x0430, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('{', [0x0000, 0x0000, 0x0000, 0x0000, 0x0020, 0x0020, 0x07DF, 0x0801, 0x0801, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('|', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1FFF, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('}', [0x0000, 0x0000, 0x0000, 0x0000, 0x0801, 0x0801, 0x07DF, 0x0020, 0x0020, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('~', [0x0000, 0x0000, 0x0000, 0x0000, 0x0080, 0x0040, 0x0040, 0x0040, 0x0080, 0x0080, 0x0040, 0x0000, 0x0000, 0x0000]),
    ('、', [0x0000, 0x0000, 0x0100, 0x0200, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('。', [0x0000, 0x0000, 0x0300, 0x0480, 0x0480, 0x0300, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('「', [0x0000, 0x0000, 0x0000, 0x0000, 0x003C, 0x0004, 0x0004, 0x0004, 0x0004, 0x0004, 0x0004, 0x0004, 0x0000, 0x0000]),
    ('」', [0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0780, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ぁ', [0x0000, 0x0000, 0x0310, 0x0590, 0x02D0, 0x01F8, 0x0150, 0x0250, 0x0290, 0x0110, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('あ', [0x0304, 0x0484, 0x0444, 0x0264, 0x019F, 0x00E4, 0x0114, 0x0214, 0x0224, 0x0244, 0x0184, 0x0004, 0x0000, 0x0000]),
    ('ぃ', [0x0000, 0x0000, 0x01C0, 0x0630, 0x0400, 0x0600, 0x0200, 0x0030, 0x01C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('い', [0x01F0, 0x020C, 0x0400, 0x0400, 0x0400, 0x0200, 0x0200, 0x0000, 0x000C, 0x00F0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ぅ', [0x0000, 0x0000, 0x0000, 0x0020, 0x0210, 0x0218, 0x0118, 0x0118, 0x00F0, 0x0060, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('う', [0x0000, 0x0000, 0x0008, 0x0204, 0x0205, 0x0205, 0x0105, 0x0105, 0x0085, 0x006C, 0x0018, 0x0000, 0x0000, 0x0000]),
    ('ぇ', [0x0000, 0x0000, 0x0000, 0x0310, 0x0110, 0x01D8, 0x0158, 0x0330, 0x0210, 0x0200, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('え', [0x0000, 0x0200, 0x0104, 0x0084, 0x0044, 0x00A5, 0x0115, 0x010C, 0x0204, 0x0204, 0x0200, 0x0200, 0x0000, 0x0000]),
    ('ぉ', [0x0000, 0x0000, 0x0310, 0x0590, 0x0278, 0x03D0, 0x0250, 0x0350, 0x01C8, 0x0008, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('お', [0x0304, 0x0484, 0x0444, 0x023F, 0x03E4, 0x0014, 0x0214, 0x0214, 0x0110, 0x00E1, 0x0001, 0x0000, 0x0000, 0x0000]),
    ('か', [0x0204, 0x0104, 0x0084, 0x0064, 0x001F, 0x0004, 0x0104, 0x0104, 0x01FC, 0x0004, 0x0008, 0x0010, 0x0000, 0x0000]),
    ('が', [0x0204, 0x0104, 0x0084, 0x0064, 0x001F, 0x0004, 0x0104, 0x0104, 0x01FC, 0x0001, 0x000A, 0x0011, 0x0002, 0x0000]),
    ('き', [0x0008, 0x0208, 0x010A, 0x010A, 0x011A, 0x012F, 0x012A, 0x012A, 0x012A, 0x004A, 0x0008, 0x0008, 0x0000, 0x0000]),
    ('ぎ', [0x0008, 0x0208, 0x010A, 0x010A, 0x011A, 0x012F, 0x012A, 0x012A, 0x012A, 0x0049, 0x000A, 0x0009, 0x0002, 0x0000]),
    ('く', [0x0020, 0x0050, 0x0050, 0x0088, 0x0088, 0x0104, 0x0104, 0x0202, 0x0202, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ぐ', [0x0020, 0x0050, 0x0050, 0x0088, 0x0088, 0x0104, 0x0104, 0x0202, 0x0202, 0x0001, 0x0002, 0x0001, 0x0002, 0x0000]),
    ('け', [0x03FE, 0x0000, 0x0000, 0x0208, 0x0208, 0x0108, 0x00FE, 0x0008, 0x0008, 0x0008, 0x0008, 0x0008, 0x0000, 0x0000]),
    ('げ', [0x03FE, 0x0000, 0x0000, 0x0208, 0x0208, 0x0108, 0x00FE, 0x0008, 0x0008, 0x0009, 0x000A, 0x0009, 0x0002, 0x0000]),
    ('こ', [0x0000, 0x0080, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0100, 0x0000, 0x0000, 0x0000]),
    ('ご', [0x0000, 0x0080, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0101, 0x0102, 0x0001, 0x0002, 0x0000]),
    ('さ', [0x0004, 0x0104, 0x0084, 0x0084, 0x008C, 0x0097, 0x0094, 0x0094, 0x00A4, 0x0004, 0x0004, 0x0004, 0x0000, 0x0000]),
    ('ざ', [0x0004, 0x0104, 0x0084, 0x0084, 0x008C, 0x0097, 0x0094, 0x0094, 0x00A4, 0x0001, 0x0002, 0x0001, 0x0002, 0x0000]),
    ('し', [0x0000, 0x0000, 0x01FE, 0x0200, 0x0200, 0x0200, 0x0200, 0x0200, 0x0200, 0x0100, 0x0100, 0x0000, 0x0000, 0x0000]),
    ('じ', [0x0000, 0x0000, 0x01FE, 0x0200, 0x0200, 0x0200, 0x0200, 0x0200, 0x0200, 0x0101, 0x0102, 0x0001, 0x0002, 0x0000]),
    ('す', [0x0004, 0x0004, 0x0004, 0x0444, 0x04A4, 0x02A4, 0x01FC, 0x0004, 0x0004, 0x0004, 0x0004, 0x0004, 0x0000, 0x0000]),
    ('ず', [0x0004, 0x0004, 0x0004, 0x0444, 0x04A4, 0x02A4, 0x01FC, 0x0004, 0x0004, 0x0001, 0x0002, 0x0001, 0x0002, 0x0000]),
    ('せ', [0x0008, 0x0008, 0x01FE, 0x0108, 0x0108, 0x0108, 0x0148, 0x0148, 0x0128, 0x001E, 0x0008, 0x0008, 0x0000, 0x0000]),
    ('ぜ', [0x0008, 0x0008, 0x01FE, 0x0108, 0x0108, 0x0108, 0x0148, 0x0148, 0x0128, 0x0019, 0x000A, 0x0009, 0x0002, 0x0000]),
    ('そ', [0x0010, 0x0018, 0x0019, 0x0015, 0x0015, 0x00D3, 0x0131, 0x0111, 0x0110, 0x0010, 0x0010, 0x0010, 0x0000, 0x0000]),
    ('ぞ', [0x0010, 0x0018, 0x0019, 0x0015, 0x0015, 0x00D3, 0x0131, 0x0111, 0x0110, 0x0011, 0x0012, 0x0011, 0x0002, 0x0000]),
    ('た', [0x0104, 0x00C4, 0x0034, 0x000F, 0x0004, 0x0004, 0x0314, 0x0214, 0x0210, 0x0210, 0x0210, 0x0000, 0x0000, 0x0000]),
    ('だ', [0x0104, 0x00C4, 0x0034, 0x000F, 0x0004, 0x0004, 0x0314, 0x0214, 0x0210, 0x0211, 0x0212, 0x0001, 0x0002, 0x0000]),
    ('ち', [0x0004, 0x0004, 0x0004, 0x0024, 0x003C, 0x0027, 0x0224, 0x0224, 0x0244, 0x0184, 0x0004, 0x0004, 0x0000, 0x0000]),
    ('ぢ', [0x0004, 0x0004, 0x0004, 0x0024, 0x003C, 0x0027, 0x0224, 0x0224, 0x0244, 0x0181, 0x0002, 0x0001, 0x0002, 0x0000]),
    ('っ', [0x0000, 0x0000, 0x0000, 0x0060, 0x0020, 0x0220, 0x0220, 0x0120, 0x0120, 0x01C0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('つ', [0x0000, 0x0010, 0x0008, 0x0008, 0x0208, 0x0208, 0x0208, 0x0108, 0x0108, 0x0108, 0x0090, 0x0060, 0x0000, 0x0000]),
    ('づ', [0x0000, 0x0010, 0x0008, 0x0008, 0x0208, 0x0208, 0x0208, 0x0108, 0x0108, 0x0109, 0x0092, 0x0061, 0x0002, 0x0000]),
    ('て', [0x0004, 0x0004, 0x0004, 0x0004, 0x0004, 0x00E4, 0x0114, 0x0114, 0x020C, 0x0204, 0x0204, 0x0004, 0x0000, 0x0000]),
    ('で', [0x0004, 0x0004, 0x0004, 0x0004, 0x0004, 0x00E4, 0x0114, 0x0114, 0x020C, 0x0201, 0x0202, 0x0001, 0x0002, 0x0000]),
    ('と', [0x00C0, 0x0120, 0x0220, 0x0212, 0x0214, 0x0208, 0x0200, 0x0200, 0x0200, 0x0200, 0x0200, 0x0000, 0x0000, 0x0000]),
    ('ど', [0x00C0, 0x0120, 0x0220, 0x0212, 0x0214, 0x0208, 0x0200, 0x0200, 0x0200, 0x0201, 0x0202, 0x0001, 0x0002, 0x0000]),
    ('な', [0x0044, 0x0024, 0x001C, 0x0107, 0x0284, 0x0284, 0x0104, 0x0101, 0x01F2, 0x0004, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('に', [0x03FE, 0x0000, 0x0000, 0x0104, 0x0204, 0x0204, 0x0204, 0x0204, 0x0204, 0x0204, 0x0204, 0x0000, 0x0000, 0x0000]),
    ('ぬ', [0x00C0, 0x0120, 0x0116, 0x0098, 0x0070, 0x0098, 0x0116, 0x0120, 0x02C0, 0x0500, 0x0500, 0x0200, 0x0000, 0x0000]),
    ('ね', [0x0020, 0x0010, 0x03FE, 0x0000, 0x0008, 0x0104, 0x0284, 0x0144, 0x00A4, 0x0298, 0x0300, 0x0000, 0x0000, 0x0000]),
    ('の', [0x00E0, 0x0110, 0x0208, 0x0304, 0x00C4, 0x023A, 0x0202, 0x0104, 0x0104, 0x0088, 0x0070, 0x0000, 0x0000, 0x0000]),
    ('は', [0x03FF, 0x0000, 0x0000, 0x0104, 0x0284, 0x0284, 0x0304, 0x01FF, 0x0004, 0x0004, 0x0004, 0x0004, 0x0000, 0x0000]),
    ('ば', [0x03FF, 0x0000, 0x0000, 0x0104, 0x0284, 0x0284, 0x0304, 0x01FF, 0x0004, 0x0001, 0x0002, 0x0001, 0x0002, 0x0000]),
    ('ぱ', [0x03FF, 0x0000, 0x0000, 0x0104, 0x0284, 0x0284, 0x0304, 0x01FF, 0x0004, 0x0000, 0x0002, 0x0005, 0x0002, 0x0000]),
    ('ひ', [0x0184, 0x0244, 0x0234, 0x040C, 0x0400, 0x0400, 0x0200, 0x0200, 0x0110, 0x00F0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('び', [0x0184, 0x0244, 0x0234, 0x040C, 0x0400, 0x0400, 0x0200, 0x0200, 0x0110, 0x00F1, 0x0002, 0x0001, 0x0002, 0x0000]),
    ('ぴ', [0x0184, 0x0244, 0x0234, 0x040C, 0x0400, 0x0400, 0x0200, 0x0200, 0x0110, 0x00F0, 0x0002, 0x0005, 0x0002, 0x0000]),
    ('ふ', [0x0080, 0x0040, 0x0020, 0x0000, 0x01F0, 0x0109, 0x0009, 0x0012, 0x0020, 0x0040, 0x0020, 0x0040, 0x0000, 0x0000]),
    ('ぶ', [0x0080, 0x0040, 0x0020, 0x0000, 0x01F0, 0x0109, 0x0009, 0x0012, 0x0020, 0x0041, 0x0022, 0x0041, 0x0002, 0x0000]),
    ('ぷ', [0x0080, 0x0040, 0x0020, 0x0000, 0x01F0, 0x0109, 0x0009, 0x0012, 0x0020, 0x0040, 0x0022, 0x0045, 0x0002, 0x0000]),
    ('へ', [0x0040, 0x0020, 0x0010, 0x0008, 0x0008, 0x0010, 0x0010, 0x0020, 0x0040, 0x0080, 0x0080, 0x0100, 0x0000, 0x0000]),
    ('べ', [0x0040, 0x0020, 0x0010, 0x0008, 0x0008, 0x0010, 0x0010, 0x0020, 0x0040, 0x0081, 0x0082, 0x0101, 0x0002, 0x0000]),
    ('ぺ', [0x0040, 0x0020, 0x0010, 0x0008, 0x0008, 0x0010, 0x0010, 0x0020, 0x0040, 0x0080, 0x0082, 0x0105, 0x0002, 0x0000]),
    ('ほ', [0x03FF, 0x0000, 0x0000, 0x0105, 0x0285, 0x0285, 0x0305, 0x01FF, 0x0005, 0x0005, 0x0004, 0x0004, 0x0000, 0x0000]),
    ('ぼ', [0x03FF, 0x0000, 0x0000, 0x0105, 0x0285, 0x0285, 0x0305, 0x01FF, 0x0005, 0x0001, 0x0002, 0x0001, 0x0002, 0x0000]),
    ('ぽ', [0x03FF, 0x0000, 0x0000, 0x0105, 0x0285, 0x0285, 0x0305, 0x01FF, 0x0005, 0x0000, 0x0002, 0x0005, 0x0002, 0x0000]),
    ('ま', [0x0000, 0x0000, 0x000A, 0x018A, 0x024A, 0x014A, 0x00FF, 0x018A, 0x000A, 0x000A, 0x000A, 0x0000, 0x0000, 0x0000]),
    ('み', [0x0080, 0x0140, 0x0122, 0x0132, 0x00EE, 0x0120, 0x0220, 0x0220, 0x0010, 0x0020, 0x0040, 0x0080, 0x0000, 0x0000]),
    ('む', [0x00C4, 0x0124, 0x0104, 0x00FF, 0x0104, 0x0204, 0x0204, 0x0205, 0x0201, 0x0200, 0x03C0, 0x0000, 0x0000, 0x0000]),
    ('め', [0x00C0, 0x0120, 0x0116, 0x0098, 0x0270, 0x0218, 0x0216, 0x0120, 0x00C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('も', [0x0000, 0x0028, 0x0028, 0x01FE, 0x0228, 0x0228, 0x0228, 0x0228, 0x0200, 0x0200, 0x0180, 0x0000, 0x0000, 0x0000]),
    ('ゃ', [0x0000, 0x0000, 0x0040, 0x0070, 0x0030, 0x03E0, 0x0030, 0x0030, 0x0060, 0x0040, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('や', [0x0010, 0x0028, 0x000A, 0x000C, 0x00F8, 0x0308, 0x000C, 0x000A, 0x000A, 0x0028, 0x0010, 0x0000, 0x0000, 0x0000]),
    ('ゅ', [0x0000, 0x0000, 0x00F0, 0x01D0, 0x0120, 0x0520, 0x03F0, 0x0100, 0x0110, 0x00E0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ゆ', [0x007C, 0x0082, 0x01F0, 0x0108, 0x0108, 0x0408, 0x03FE, 0x0100, 0x0000, 0x0084, 0x0048, 0x0030, 0x0000, 0x0000]),
    ('ょ', [0x0000, 0x0000, 0x0000, 0x0000, 0x0100, 0x0280, 0x01F0, 0x0010, 0x0010, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('よ', [0x0000, 0x0000, 0x0000, 0x0180, 0x0240, 0x0240, 0x01FE, 0x0002, 0x0002, 0x0002, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ら', [0x0000, 0x0000, 0x0180, 0x007C, 0x0221, 0x0211, 0x0212, 0x0210, 0x0120, 0x00C0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('り', [0x0000, 0x0000, 0x003E, 0x0222, 0x0200, 0x0200, 0x0100, 0x0100, 0x0080, 0x007E, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('る', [0x0000, 0x0180, 0x0242, 0x0222, 0x0232, 0x01B2, 0x00AA, 0x032A, 0x0246, 0x0182, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('れ', [0x0020, 0x0010, 0x03FE, 0x0000, 0x0008, 0x0004, 0x0004, 0x0004, 0x0004, 0x01F8, 0x0200, 0x0300, 0x0000, 0x0000]),
    ('ろ', [0x0000, 0x0180, 0x0242, 0x0222, 0x0232, 0x0232, 0x022A, 0x022A, 0x0226, 0x0142, 0x0080, 0x0000, 0x0000, 0x0000]),
    ('ゎ', [0x0000, 0x0000, 0x0040, 0x03F0, 0x0000, 0x0230, 0x0210, 0x0110, 0x0160, 0x00C0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('わ', [0x0020, 0x0010, 0x03FE, 0x0000, 0x0008, 0x0204, 0x0204, 0x0104, 0x0104, 0x0098, 0x0070, 0x0000, 0x0000, 0x0000]),
    ('ゐ', [0x0000, 0x00C0, 0x0120, 0x0112, 0x0092, 0x007A, 0x0096, 0x0310, 0x0120, 0x00C0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ゑ', [0x0000, 0x0100, 0x00AA, 0x0055, 0x0195, 0x0055, 0x00AF, 0x0101, 0x0100, 0x0100, 0x0100, 0x0000, 0x0000, 0x0000]),
    ('を', [0x0000, 0x0020, 0x0012, 0x0192, 0x025A, 0x0236, 0x0212, 0x0212, 0x0292, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ん', [0x0180, 0x0040, 0x0020, 0x0018, 0x0026, 0x00C0, 0x0300, 0x0200, 0x0100, 0x0080, 0x0080, 0x0300, 0x0000, 0x0000]),
    ('ゔ', [0x0000, 0x0000, 0x0008, 0x0204, 0x0205, 0x0205, 0x0105, 0x0105, 0x0085, 0x0069, 0x001A, 0x0001, 0x0002, 0x0000]),
    ('ゕ', [0x0000, 0x0000, 0x0210, 0x0110, 0x00D0, 0x0078, 0x0110, 0x01F0, 0x0010, 0x0060, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ゖ', [0x0000, 0x0000, 0x03F0, 0x0000, 0x0220, 0x0320, 0x01F0, 0x0020, 0x0020, 0x0020, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ァ', [0x0000, 0x0000, 0x0010, 0x0010, 0x0410, 0x0650, 0x01D0, 0x0050, 0x0030, 0x0010, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ア', [0x0002, 0x0002, 0x0002, 0x0402, 0x0422, 0x0222, 0x01E2, 0x0012, 0x0012, 0x000A, 0x0006, 0x0000, 0x0000, 0x0000]),
    ('ィ', [0x0000, 0x0000, 0x0000, 0x0040, 0x0040, 0x0060, 0x07E0, 0x0010, 0x0010, 0x0010, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('イ', [0x0000, 0x0020, 0x0020, 0x0010, 0x0010, 0x0008, 0x07F8, 0x0004, 0x0004, 0x0002, 0x0002, 0x0000, 0x0000, 0x0000]),
    ('ゥ', [0x0000, 0x0000, 0x0070, 0x0410, 0x0410, 0x0210, 0x0218, 0x0110, 0x0110, 0x00F0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ウ', [0x001C, 0x0404, 0x0404, 0x0404, 0x0204, 0x0204, 0x0207, 0x0104, 0x0104, 0x0084, 0x0044, 0x003C, 0x0000, 0x0000]),
    ('ェ', [0x0000, 0x0000, 0x0100, 0x0110, 0x0110, 0x0110, 0x01F0, 0x0110, 0x0110, 0x0110, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('エ', [0x0100, 0x0102, 0x0102, 0x0102, 0x0102, 0x0102, 0x01FE, 0x0102, 0x0102, 0x0102, 0x0102, 0x0100, 0x0000, 0x0000]),
    ('ォ', [0x0000, 0x0000, 0x0010, 0x0110, 0x0110, 0x0190, 0x0450, 0x07F8, 0x0010, 0x0010, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('オ', [0x0004, 0x0104, 0x0104, 0x0084, 0x0084, 0x0044, 0x0424, 0x0414, 0x07FF, 0x0004, 0x0004, 0x0004, 0x0000, 0x0000]),
    ('カ', [0x0204, 0x0104, 0x0084, 0x0064, 0x001F, 0x0004, 0x0004, 0x0004, 0x0204, 0x0204, 0x03FC, 0x0004, 0x0000, 0x0000]),
    ('ガ', [0x0204, 0x0104, 0x0084, 0x0064, 0x001F, 0x0004, 0x0004, 0x0004, 0x0204, 0x0201, 0x03FA, 0x0001, 0x0002, 0x0000]),
    ('キ', [0x0004, 0x0004, 0x0024, 0x0024, 0x0027, 0x003C, 0x03E4, 0x0024, 0x0024, 0x0024, 0x0020, 0x0020, 0x0000, 0x0000]),
    ('ギ', [0x0004, 0x0004, 0x0024, 0x0024, 0x0027, 0x003C, 0x03E4, 0x0024, 0x0024, 0x0021, 0x0022, 0x0021, 0x0002, 0x0000]),
    ('ク', [0x0010, 0x0208, 0x0204, 0x0102, 0x0101, 0x0081, 0x0081, 0x0041, 0x0021, 0x0011, 0x0009, 0x0007, 0x0000, 0x0000]),
    ('グ', [0x0010, 0x0208, 0x0204, 0x0102, 0x0101, 0x0081, 0x0081, 0x0041, 0x0021, 0x0011, 0x000A, 0x0001, 0x0002, 0x0000]),
    ('ケ', [0x0010, 0x0008, 0x0004, 0x020A, 0x0209, 0x0108, 0x0088, 0x0078, 0x0008, 0x0008, 0x0008, 0x0008, 0x0000, 0x0000]),
    ('ゲ', [0x0010, 0x0008, 0x0004, 0x020A, 0x0209, 0x0108, 0x0088, 0x0078, 0x0008, 0x0009, 0x000A, 0x0009, 0x0002, 0x0000]),
    ('コ', [0x0102, 0x0102, 0x0102, 0x0102, 0x0102, 0x0102, 0x0102, 0x0102, 0x0102, 0x0102, 0x0102, 0x01FE, 0x0000, 0x0000]),
    ('ゴ', [0x0102, 0x0102, 0x0102, 0x0102, 0x0102, 0x0102, 0x0102, 0x0102, 0x0102, 0x0101, 0x0102, 0x01F9, 0x0002, 0x0000]),
    ('サ', [0x0004, 0x0004, 0x0004, 0x001F, 0x0204, 0x0204, 0x0104, 0x0084, 0x007F, 0x0004, 0x0004, 0x0004, 0x0000, 0x0000]),
    ('ザ', [0x0004, 0x0004, 0x0004, 0x001F, 0x0204, 0x0204, 0x0104, 0x0084, 0x007F, 0x0001, 0x0002, 0x0001, 0x0002, 0x0000]),
    ('シ', [0x0010, 0x0222, 0x0204, 0x0100, 0x0100, 0x0100, 0x0080, 0x0080, 0x0040, 0x0020, 0x0010, 0x0008, 0x0000, 0x0000]),
    ('ジ', [0x0010, 0x0222, 0x0204, 0x0100, 0x0100, 0x0100, 0x0080, 0x0080, 0x0040, 0x0021, 0x0012, 0x0009, 0x0002, 0x0000]),
    ('ス', [0x0202, 0x0202, 0x0102, 0x0102, 0x0082, 0x0042, 0x0062, 0x0092, 0x0112, 0x010A, 0x0206, 0x0202, 0x0000, 0x0000]),
    ('ズ', [0x0202, 0x0202, 0x0102, 0x0102, 0x0082, 0x0042, 0x0062, 0x0092, 0x0112, 0x0109, 0x0202, 0x0201, 0x0002, 0x0000]),
    ('セ', [0x0010, 0x0010, 0x03FE, 0x0210, 0x0210, 0x0210, 0x0210, 0x0210, 0x0210, 0x0270, 0x0210, 0x0210, 0x0000, 0x0000]),
    ('ゼ', [0x0010, 0x0010, 0x03FE, 0x0210, 0x0210, 0x0210, 0x0210, 0x0210, 0x0210, 0x0271, 0x0212, 0x0211, 0x0002, 0x0000]),
    ('ソ', [0x0200, 0x0202, 0x0104, 0x0108, 0x0100, 0x0080, 0x0080, 0x0040, 0x0020, 0x0018, 0x0006, 0x0000, 0x0000, 0x0000]),
    ('ゾ', [0x0200, 0x0202, 0x0104, 0x0108, 0x0100, 0x0080, 0x0080, 0x0040, 0x0020, 0x0019, 0x0002, 0x0001, 0x0002, 0x0000]),
    ('タ', [0x0010, 0x0208, 0x0204, 0x0102, 0x0109, 0x0091, 0x00A1, 0x0041, 0x0021, 0x0011, 0x000F, 0x0001, 0x0000, 0x0000]),
    ('ダ', [0x0010, 0x0208, 0x0204, 0x0102, 0x0109, 0x0091, 0x00A1, 0x0041, 0x0021, 0x0011, 0x000A, 0x0001, 0x0002, 0x0000]),
    ('チ', [0x0008, 0x0008, 0x000A, 0x020B, 0x0209, 0x0109, 0x00FD, 0x0009, 0x0009, 0x0009, 0x0008, 0x0008, 0x0000, 0x0000]),
    ('ヂ', [0x0008, 0x0008, 0x000A, 0x020B, 0x0209, 0x0109, 0x00FD, 0x0009, 0x0009, 0x0009, 0x000A, 0x0009, 0x0002, 0x0000]),
    ('ッ', [0x0000, 0x0000, 0x0000, 0x0230, 0x0100, 0x0110, 0x0120, 0x0180, 0x0040, 0x0070, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ツ', [0x0000, 0x0206, 0x0208, 0x0100, 0x0100, 0x0106, 0x0088, 0x0080, 0x0040, 0x0020, 0x0018, 0x0006, 0x0000, 0x0000]),
    ('ヅ', [0x0000, 0x0206, 0x0208, 0x0100, 0x0100, 0x0106, 0x0088, 0x0080, 0x0040, 0x0021, 0x001A, 0x0001, 0x0002, 0x0000]),
    ('テ', [0x0008, 0x0008, 0x000A, 0x020A, 0x020A, 0x010A, 0x00FA, 0x000A, 0x000A, 0x000A, 0x0008, 0x0008, 0x0000, 0x0000]),
    ('デ', [0x0008, 0x0008, 0x000A, 0x020A, 0x020A, 0x010A, 0x00FA, 0x000A, 0x000A, 0x0009, 0x000A, 0x0009, 0x0002, 0x0000]),
    ('ト', [0x0000, 0x0000, 0x0000, 0x07FF, 0x0010, 0x0020, 0x0020, 0x0040, 0x0040, 0x0080, 0x0080, 0x0000, 0x0000, 0x0000]),
    ('ド', [0x0000, 0x0000, 0x0000, 0x07FF, 0x0010, 0x0020, 0x0020, 0x0040, 0x0040, 0x0081, 0x0082, 0x0001, 0x0002, 0x0000]),
    ('ナ', [0x0004, 0x0204, 0x0204, 0x0104, 0x0084, 0x0044, 0x003F, 0x0004, 0x0004, 0x0004, 0x0004, 0x0004, 0x0000, 0x0000]),
    ('ニ', [0x0100, 0x0100, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0100, 0x0100, 0x0000, 0x0000]),
    ('ヌ', [0x0202, 0x0202, 0x0102, 0x0112, 0x00A2, 0x0042, 0x0042, 0x00A2, 0x0112, 0x010A, 0x0206, 0x0202, 0x0000, 0x0000]),
    ('ネ', [0x0004, 0x0004, 0x0044, 0x0044, 0x0044, 0x0024, 0x07E5, 0x0016, 0x0094, 0x008C, 0x0104, 0x0004, 0x0000, 0x0000]),
    ('ノ', [0x0200, 0x0200, 0x0100, 0x0100, 0x0080, 0x0040, 0x0020, 0x0010, 0x0008, 0x0004, 0x0002, 0x0000, 0x0000, 0x0000]),
    ('ハ', [0x0200, 0x0100, 0x0080, 0x0060, 0x0018, 0x0004, 0x0000, 0x0000, 0x0004, 0x0018, 0x0060, 0x0180, 0x0000, 0x0000]),
    ('バ', [0x0200, 0x0100, 0x0080, 0x0060, 0x0018, 0x0004, 0x0000, 0x0000, 0x0004, 0x0019, 0x0062, 0x0181, 0x0002, 0x0000]),
    ('パ', [0x0200, 0x0100, 0x0080, 0x0060, 0x0018, 0x0004, 0x0000, 0x0000, 0x0004, 0x0018, 0x0062, 0x0185, 0x0002, 0x0000]),
    ('ヒ', [0x0000, 0x0000, 0x03FE, 0x0210, 0x0210, 0x0218, 0x0208, 0x0208, 0x0208, 0x0204, 0x0204, 0x0204, 0x0000, 0x0000]),
    ('ビ', [0x0000, 0x0000, 0x03FE, 0x0210, 0x0210, 0x0218, 0x0208, 0x0208, 0x0208, 0x0201, 0x0202, 0x0201, 0x0002, 0x0000]),
    ('ピ', [0x0000, 0x0000, 0x03FE, 0x0210, 0x0210, 0x0218, 0x0208, 0x0208, 0x0208, 0x0200, 0x0202, 0x0205, 0x0002, 0x0000]),
    ('フ', [0x0002, 0x0202, 0x0202, 0x0102, 0x0102, 0x0102, 0x0082, 0x0082, 0x0042, 0x0022, 0x001A, 0x0006, 0x0000, 0x0000]),
    ('ブ', [0x0002, 0x0202, 0x0202, 0x0102, 0x0102, 0x0102, 0x0082, 0x0082, 0x0042, 0x0021, 0x001A, 0x0001, 0x0002, 0x0000]),
    ('プ', [0x0002, 0x0202, 0x0202, 0x0102, 0x0102, 0x0102, 0x0082, 0x0082, 0x0042, 0x0020, 0x001A, 0x0005, 0x0002, 0x0000]),
    ('ヘ', [0x0040, 0x0020, 0x0010, 0x0008, 0x0008, 0x0010, 0x0020, 0x0040, 0x0080, 0x0080, 0x0100, 0x0100, 0x0000, 0x0000]),
    ('ベ', [0x0040, 0x0020, 0x0010, 0x0008, 0x0008, 0x0010, 0x0020, 0x0040, 0x0080, 0x0081, 0x0102, 0x0101, 0x0002, 0x0000]),
    ('ペ', [0x0040, 0x0020, 0x0010, 0x0008, 0x0008, 0x0010, 0x0020, 0x0040, 0x0080, 0x0080, 0x0102, 0x0105, 0x0002, 0x0000]),
    ('ホ', [0x0104, 0x00C4, 0x0034, 0x0004, 0x0404, 0x0404, 0x07FF, 0x0004, 0x0004, 0x0004, 0x0034, 0x00C4, 0x0000, 0x0000]),
    ('ボ', [0x0104, 0x00C4, 0x0034, 0x0004, 0x0404, 0x0404, 0x07FF, 0x0004, 0x0004, 0x0001, 0x0032, 0x00C1, 0x0002, 0x0000]),
    ('ポ', [0x0104, 0x00C4, 0x0034, 0x0004, 0x0404, 0x0404, 0x07FF, 0x0004, 0x0004, 0x0000, 0x0032, 0x00C5, 0x0002, 0x0000]),
    ('マ', [0x0002, 0x0002, 0x0002, 0x0042, 0x00C2, 0x00A2, 0x0122, 0x0112, 0x0212, 0x000A, 0x0006, 0x0002, 0x0000, 0x0000]),
    ('ミ', [0x0000, 0x0000, 0x0082, 0x0092, 0x0092, 0x0092, 0x0092, 0x0092, 0x0092, 0x00A4, 0x0124, 0x0100, 0x0000, 0x0000]),
    ('ム', [0x0200, 0x0300, 0x0280, 0x0240, 0x0220, 0x0218, 0x0206, 0x0220, 0x0240, 0x0280, 0x0300, 0x0200, 0x0000, 0x0000]),
    ('メ', [0x0000, 0x0000, 0x0210, 0x0220, 0x0140, 0x0080, 0x0140, 0x0220, 0x0210, 0x0008, 0x0004, 0x0002, 0x0000, 0x0000]),
    ('モ', [0x0010, 0x0012, 0x0012, 0x0012, 0x03FE, 0x0212, 0x0212, 0x0212, 0x0212, 0x0212, 0x0212, 0x0210, 0x0000, 0x0000]),
    ('ャ', [0x0000, 0x0000, 0x0020, 0x0020, 0x0030, 0x03E0, 0x0020, 0x0020, 0x0020, 0x0070, 0x0020, 0x0000, 0x0000, 0x0000]),
    ('ヤ', [0x0008, 0x0008, 0x0008, 0x000E, 0x0038, 0x03C8, 0x0008, 0x0008, 0x0008, 0x0008, 0x001C, 0x0008, 0x0008, 0x0000]),
    ('ュ', [0x0000, 0x0000, 0x0100, 0x0110, 0x0110, 0x0110, 0x0110, 0x0110, 0x01F0, 0x0100, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ユ', [0x0100, 0x0100, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x01FC, 0x0100, 0x0100, 0x0000, 0x0000]),
    ('ョ', [0x0000, 0x0000, 0x0110, 0x0110, 0x0150, 0x0150, 0x0150, 0x0150, 0x0150, 0x01F0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ヨ', [0x0102, 0x0102, 0x0102, 0x0122, 0x0122, 0x0122, 0x0122, 0x0122, 0x0122, 0x0122, 0x0122, 0x01FE, 0x0000, 0x0000]),
    ('ラ', [0x0008, 0x0208, 0x020A, 0x020A, 0x010A, 0x010A, 0x010A, 0x008A, 0x008A, 0x004A, 0x0028, 0x0018, 0x0000, 0x0000]),
    ('リ', [0x0000, 0x0000, 0x003E, 0x0200, 0x0200, 0x0200, 0x0100, 0x0100, 0x0080, 0x007E, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ル', [0x0100, 0x0080, 0x0040, 0x0030, 0x000E, 0x0000, 0x0000, 0x0000, 0x01FE, 0x0100, 0x0080, 0x0060, 0x0000, 0x0000]),
    ('レ', [0x0000, 0x0000, 0x03FE, 0x0200, 0x0200, 0x0200, 0x0200, 0x0300, 0x0100, 0x0080, 0x0080, 0x0040, 0x0020, 0x0000]),
    ('ロ', [0x01FC, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x0104, 0x01FC, 0x0000, 0x0000]),
    ('ヮ', [0x0000, 0x0000, 0x0070, 0x0010, 0x0010, 0x0210, 0x0210, 0x0110, 0x0110, 0x00F0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ワ', [0x001C, 0x0004, 0x0004, 0x0004, 0x0204, 0x0204, 0x0204, 0x0104, 0x0104, 0x0084, 0x0044, 0x003C, 0x0000, 0x0000]),
    ('ヰ', [0x0010, 0x0010, 0x00FC, 0x0090, 0x0090, 0x0090, 0x0090, 0x0090, 0x03FE, 0x0090, 0x0090, 0x0090, 0x0000, 0x0000]),
    ('ヱ', [0x0102, 0x0102, 0x0102, 0x0102, 0x01E2, 0x0112, 0x010E, 0x0102, 0x0102, 0x0102, 0x0102, 0x0102, 0x0000, 0x0000]),
    ('ヲ', [0x0002, 0x0002, 0x0202, 0x0202, 0x0212, 0x0112, 0x0112, 0x0092, 0x0092, 0x0052, 0x0032, 0x001E, 0x0000, 0x0000]),
    ('ン', [0x0000, 0x0202, 0x0204, 0x0208, 0x0100, 0x0100, 0x0100, 0x0080, 0x0080, 0x0040, 0x0020, 0x0010, 0x0000, 0x0000]),
    ('ヴ', [0x001C, 0x0404, 0x0404, 0x0404, 0x0204, 0x0204, 0x0207, 0x0104, 0x0104, 0x0081, 0x0042, 0x0039, 0x0002, 0x0000]),
    ('ヵ', [0x0000, 0x0000, 0x0210, 0x0110, 0x00D0, 0x0078, 0x0010, 0x0210, 0x0210, 0x03F0, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ヶ', [0x0000, 0x0000, 0x0040, 0x0030, 0x0230, 0x0328, 0x0120, 0x00E0, 0x0020, 0x0020, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ヷ', [0x001C, 0x0004, 0x0004, 0x0004, 0x0204, 0x0204, 0x0204, 0x0104, 0x0104, 0x0081, 0x0042, 0x0039, 0x0002, 0x0000]),
    ('ヸ', [0x0010, 0x0010, 0x00FC, 0x0090, 0x0090, 0x0090, 0x0090, 0x0090, 0x03FE, 0x0091, 0x0092, 0x0091, 0x0002, 0x0000]),
    ('ヹ', [0x0102, 0x0102, 0x0102, 0x0102, 0x01E2, 0x0112, 0x010E, 0x0102, 0x0102, 0x0101, 0x0102, 0x0101, 0x0002, 0x0000]),
    ('ヺ', [0x0002, 0x0002, 0x0202, 0x0202, 0x0212, 0x0112, 0x0112, 0x0092, 0x0092, 0x0051, 0x0032, 0x0019, 0x0002, 0x0000]),
    ('・', [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0060, 0x0060, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('ー', [0x0000, 0x0040, 0x0040, 0x0040, 0x0040, 0x0040, 0x0040, 0x0040, 0x0040, 0x0040, 0x0040, 0x0000, 0x0000, 0x0000]),
    ('今', [0x0008, 0x0008, 0x0044, 0x0044, 0x0052, 0x0251, 0x0251, 0x0152, 0x00C4, 0x0004, 0x0008, 0x0008, 0x0000, 0x0000]),
    ('何', [0x07F8, 0x0006, 0x0001, 0x0002, 0x00F2, 0x0092, 0x0092, 0x00F2, 0x0002, 0x0202, 0x0202, 0x01FE, 0x0000, 0x0000]),
    ('分', [0x0010, 0x0008, 0x01E4, 0x0022, 0x0021, 0x0021, 0x0222, 0x0324, 0x00E8, 0x0010, 0x0010, 0x0000, 0x0000, 0x0000]),
    ('日', [0x0000, 0x0000, 0x07FE, 0x0442, 0x0442, 0x0442, 0x0442, 0x0442, 0x0442, 0x07FE, 0x0000, 0x0000, 0x0000, 0x0000]),
    ('時', [0x03FE, 0x0222, 0x0222, 0x03FE, 0x0000, 0x002A, 0x00AA, 0x002A, 0x022F, 0x022A, 0x01EA, 0x002A, 0x0000, 0x0000]),
    ('本', [0x0004, 0x0084, 0x0044, 0x0124, 0x0114, 0x010C, 0x07FF, 0x0104, 0x0014, 0x0024, 0x0044, 0x0084, 0x0000, 0x0000]),
    ('秒', [0x0024, 0x0015, 0x000F, 0x03F4, 0x0204, 0x0200, 0x010C, 0x0100, 0x0080, 0x005F, 0x0020, 0x001C, 0x0000, 0x0000]),
    ('語', [0x07AA, 0x04AA, 0x04AB, 0x04AA, 0x07AA, 0x0000, 0x07AA, 0x04BA, 0x04AE, 0x04AA, 0x07BA, 0x002A, 0x0000, 0x0000]),
    ('\u{fffd}', [0x0FFE, 0x0802, 0x0802, 0x0812, 0x080A, 0x080A, 0x0ACA, 0x082A, 0x0812, 0x0802, 0x0802, 0x0FFE, 0x0000, 0x0000]),
];
