//! Hellschreiber (HELL) codec library
//!
//! Converts Unicode text into OOK-keyed audio by scanning fixed-height glyph
//! bitmaps column by column, and recovers text from received audio by per-slot
//! tone detection and nearest-bitmap matching. The protocol carries no clock
//! and no error correction; its redundancy is purely visual.

pub mod cache;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod font;
pub mod frame;
pub mod glyph;
pub mod spectrum;
pub mod waterfall;

pub use cache::WaveformCache;
pub use config::ModulationConfig;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{HellModemError, Result};
pub use frame::{Frame, FrameBuilder, POSTAMBLE, PREAMBLE};
pub use glyph::{Glyph, GlyphMatch, GlyphTable};
pub use waterfall::WaterfallBuffer;

// Protocol constants, fixed by the builtin font geometry
pub const GLYPH_ROWS: usize = font::FONT_ROWS;
pub const GLYPH_COLUMNS: usize = font::FONT_COLUMNS;

// Modulation defaults (classic Feld-Hell timing on a 48 kHz device)
pub const DEFAULT_SAMPLE_RATE: u32 = 48_000;
pub const DEFAULT_CARRIER_HZ: f32 = 1000.0;
pub const DEFAULT_PIXEL_RATE: f32 = 245.0;
pub const DEFAULT_AMPLITUDE: f32 = 0.5;
pub const DEFAULT_RAMP_SAMPLES: usize = 48;

// Receiver defaults
pub const DEFAULT_WATERFALL_HEIGHT: usize = 100;
