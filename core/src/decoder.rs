use crate::config::ModulationConfig;
use crate::error::Result;
use crate::frame::{POSTAMBLE, PREAMBLE};
use crate::glyph::GlyphTable;
use crate::spectrum::SpectralAnalyzer;
use crate::waterfall::WaterfallBuffer;
use log::{debug, trace};
use std::sync::Arc;

/// Searching trigger sits this far above the tracked noise floor.
const TRIGGER_RATIO: f32 = 6.0;

/// Absolute magnitude floor so dead-silent channels cannot trigger.
const MAG_FLOOR: f32 = 1e-3;

/// EMA coefficients for the automatic level adjustment.
const NOISE_ALPHA: f32 = 0.1;
const SIGNAL_ALPHA: f32 = 0.25;

/// All-off slices worth this many glyph durations end the session.
const SILENCE_TIMEOUT_GLYPHS: usize = 6;

/// Matches with more than this fraction of the pixels wrong are logged as
/// ambiguous; the nearest candidate is still emitted.
const SIMILARITY_FLOOR: f32 = 0.125;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SyncState {
    /// Watching per-slice carrier magnitude for the preamble's leading edge.
    Searching,
    /// Tentatively locked; the preamble dots must confirm the slot phase.
    Syncing { matched: usize },
    /// Phase committed; accumulating pixel bits into glyphs.
    Decoding,
}

/// Streaming HELL receiver: one instance per reception session.
///
/// Push-driven: feed PCM chunks of any size with `push`; recovered text
/// accumulates and is drained with `take_text`. The decoder never fails on
/// malformed or noisy input; at worst it emits wrong or fallback characters
/// and falls back to searching.
pub struct Decoder {
    table: Arc<GlyphTable>,
    spp: usize,
    analyzer: SpectralAnalyzer,
    waterfall: WaterfallBuffer,

    state: SyncState,
    pending: Vec<f32>,
    pos: usize,

    noise_level: f32,
    signal_level: f32,

    column_bits: u16,
    bits_in_column: usize,
    columns: Vec<u16>,

    holdback: Vec<char>,
    silent_slots: usize,
    dot_offset: usize,
    output: String,
}

impl Decoder {
    pub fn new(
        table: Arc<GlyphTable>,
        config: &ModulationConfig,
        waterfall_height: usize,
    ) -> Result<Self> {
        config.validate()?;
        let spp = config.samples_per_pixel();
        let analyzer = SpectralAnalyzer::new(spp, config.sample_rate, config.carrier_hz);
        let waterfall = WaterfallBuffer::new(waterfall_height)?;
        let dot_offset = table
            .lookup('.')
            .first_lit_offset(table.rows())
            .unwrap_or(0);
        Ok(Self {
            table,
            spp,
            analyzer,
            waterfall,
            state: SyncState::Searching,
            pending: Vec::new(),
            pos: 0,
            noise_level: 0.0,
            signal_level: 0.0,
            column_bits: 0,
            bits_in_column: 0,
            columns: Vec::new(),
            holdback: Vec::new(),
            silent_slots: 0,
            dot_offset,
            output: String::new(),
        })
    }

    /// Spectral rows for the display collaborator; read-only.
    pub fn waterfall(&self) -> &WaterfallBuffer {
        &self.waterfall
    }

    /// Drain the text recovered so far.
    pub fn take_text(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Feed received samples. Whole slices are consumed; a trailing partial
    /// slice stays buffered for the next call.
    pub fn push(&mut self, samples: &[f32]) {
        self.pending.extend_from_slice(samples);
        while self.pos + self.spp <= self.pending.len() {
            self.process_slice();
        }
        self.compact();
    }

    /// End of stream. A trailing partial slice is zero-padded out to a full
    /// slot so the final glyph can complete; anything still held after that
    /// is flushed as text.
    pub fn finish(&mut self) {
        if self.state != SyncState::Searching && self.pos < self.pending.len() {
            let tail = (self.pending.len() - self.pos) % self.spp;
            if tail != 0 {
                let pad = vec![0.0; self.spp - tail];
                self.push(&pad);
            }
        }
        if self.state != SyncState::Searching {
            debug!("stream ended mid-frame, flushing");
            self.flush_holdback();
            self.reset_to_searching();
        }
        self.pending.clear();
        self.pos = 0;
    }

    /// One-shot session over a complete buffer.
    pub fn decode(&mut self, samples: &[f32]) -> String {
        self.reset();
        self.push(samples);
        self.finish();
        self.take_text()
    }

    /// Drop all session state, keeping only the waterfall history.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.pos = 0;
        self.output.clear();
        self.noise_level = 0.0;
        self.reset_to_searching();
    }

    fn process_slice(&mut self) {
        let row = self
            .analyzer
            .analyze(&self.pending[self.pos..self.pos + self.spp]);
        let carrier_mag = row[self.analyzer.carrier_bin()];
        self.waterfall.push(row);

        match self.state {
            SyncState::Searching => self.search(carrier_mag),
            SyncState::Syncing { .. } | SyncState::Decoding => self.accumulate(carrier_mag),
        }
    }

    fn search(&mut self, carrier_mag: f32) {
        let trigger = (self.noise_level * TRIGGER_RATIO).max(MAG_FLOOR);
        if carrier_mag <= trigger {
            self.noise_level = ema(self.noise_level, carrier_mag, NOISE_ALPHA);
            self.pos += self.spp;
            return;
        }

        // Refine the tone onset to sample accuracy over the previous and
        // current slice, then lock slot phase there. The onset corresponds
        // to the dot glyph's first lit pixel, so the glyph origin is
        // back-dated by that scan offset.
        let window_start = self.pos.saturating_sub(self.spp);
        let window = &self.pending[window_start..self.pos + self.spp];
        let onset = match find_onset(window) {
            Some(i) => window_start + i,
            None => {
                self.pos += self.spp;
                return;
            }
        };

        debug!(
            "carrier onset at sample offset {} (magnitude {:.4})",
            onset, carrier_mag
        );
        self.signal_level = carrier_mag;
        self.silent_slots = 0;
        self.columns.clear();
        self.columns
            .resize(self.dot_offset / self.table.rows(), 0);
        self.bits_in_column = self.dot_offset % self.table.rows();
        self.column_bits = 0;
        self.state = SyncState::Syncing { matched: 0 };
        self.pos = onset;
    }

    fn accumulate(&mut self, carrier_mag: f32) {
        let threshold = ((self.noise_level + self.signal_level) * 0.5).max(MAG_FLOOR * 0.5);
        let on = carrier_mag > threshold;
        if on {
            self.signal_level = ema(self.signal_level, carrier_mag, SIGNAL_ALPHA);
            self.silent_slots = 0;
        } else {
            self.noise_level = ema(self.noise_level, carrier_mag, NOISE_ALPHA);
            self.silent_slots += 1;
        }

        if on {
            self.column_bits |= 1 << self.bits_in_column;
        }
        self.bits_in_column += 1;
        if self.bits_in_column == self.table.rows() {
            self.columns.push(self.column_bits);
            self.column_bits = 0;
            self.bits_in_column = 0;
            if self.columns.len() == self.table.columns() {
                self.complete_glyph();
            }
        }

        self.pos += self.spp;

        let silence_limit =
            self.table.rows() * self.table.columns() * SILENCE_TIMEOUT_GLYPHS;
        if self.silent_slots > silence_limit {
            debug!("sustained silence, returning to search");
            self.flush_holdback();
            self.reset_to_searching();
        }
    }

    fn complete_glyph(&mut self) {
        let m = self.table.best_match(&self.columns);
        self.columns.clear();
        trace!("glyph match {:?} (distance {})", m.ch, m.distance);

        match self.state {
            SyncState::Searching => {}
            SyncState::Syncing { matched } => {
                if m.ch == PREAMBLE[matched] {
                    let matched = matched + 1;
                    if matched == PREAMBLE.len() {
                        debug!("preamble confirmed, decoding");
                        self.state = SyncState::Decoding;
                    } else {
                        self.state = SyncState::Syncing { matched };
                    }
                } else {
                    debug!(
                        "false lock: expected {:?}, matched {:?}",
                        PREAMBLE[matched], m.ch
                    );
                    self.reset_to_searching();
                }
            }
            SyncState::Decoding => {
                let pixels = (self.table.rows() * self.table.columns()) as f32;
                if m.distance as f32 > pixels * SIMILARITY_FLOOR {
                    debug!(
                        "ambiguous glyph: nearest {:?} at distance {}",
                        m.ch, m.distance
                    );
                }
                self.emit(m.ch);
            }
        }
    }

    /// Route a decoded character through the postamble holdback matcher:
    /// characters that could still be framing are withheld until they either
    /// complete the postamble (stripped, back to searching) or diverge from
    /// it (flushed to the output in order).
    fn emit(&mut self, ch: char) {
        self.holdback.push(ch);
        loop {
            if self.holdback.len() == POSTAMBLE.len() && self.holdback[..] == POSTAMBLE[..] {
                debug!("postamble seen, frame complete");
                self.holdback.clear();
                self.reset_to_searching();
                return;
            }
            if POSTAMBLE.starts_with(&self.holdback) {
                return;
            }
            let flushed = self.holdback.remove(0);
            self.output.push(flushed);
        }
    }

    fn flush_holdback(&mut self) {
        let held: String = self.holdback.drain(..).collect();
        self.output.push_str(&held);
    }

    fn reset_to_searching(&mut self) {
        self.state = SyncState::Searching;
        self.signal_level = 0.0;
        self.column_bits = 0;
        self.bits_in_column = 0;
        self.columns.clear();
        self.holdback.clear();
        self.silent_slots = 0;
    }

    /// Keep the pending buffer bounded, retaining one slice of history for
    /// onset refinement.
    fn compact(&mut self) {
        if self.pos > self.spp * 64 {
            let keep_from = self.pos - self.spp;
            self.pending.drain(..keep_from);
            self.pos = self.spp;
        }
    }
}

fn ema(current: f32, sample: f32, alpha: f32) -> f32 {
    current + alpha * (sample - current)
}

/// First sample where the rectified signal clears a quarter of the window
/// peak: the leading edge of the carrier ramp.
fn find_onset(window: &[f32]) -> Option<usize> {
    let peak = window.iter().fold(0.0f32, |m, s| m.max(s.abs()));
    if peak <= 0.0 {
        return None;
    }
    let threshold = peak * 0.25;
    window.iter().position(|s| s.abs() >= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::Encoder;
    use crate::glyph::GlyphTable;

    fn config() -> ModulationConfig {
        ModulationConfig {
            sample_rate: 48_000,
            carrier_hz: 1000.0,
            pixel_rate: 100.0,
            amplitude: 0.5,
            ramp_samples: 48,
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let table = Arc::new(GlyphTable::builtin());
        let bad = ModulationConfig {
            sample_rate: 0,
            ..config()
        };
        assert!(Decoder::new(table, &bad, 100).is_err());
    }

    #[test]
    fn rejects_zero_waterfall_height() {
        let table = Arc::new(GlyphTable::builtin());
        assert!(Decoder::new(table, &config(), 0).is_err());
    }

    #[test]
    fn silence_decodes_to_nothing() {
        let table = Arc::new(GlyphTable::builtin());
        let mut dec = Decoder::new(table, &config(), 100).unwrap();
        let text = dec.decode(&vec![0.0; 48_000]);
        assert!(text.is_empty());
    }

    #[test]
    fn waterfall_sees_one_row_per_slice() {
        let table = Arc::new(GlyphTable::builtin());
        let mut dec = Decoder::new(table, &config(), 1000).unwrap();
        dec.push(&vec![0.0; 480 * 7 + 100]);
        assert_eq!(dec.waterfall().len(), 7);
    }

    #[test]
    fn find_onset_locates_leading_edge() {
        let mut window = vec![0.0f32; 1000];
        for (i, s) in window.iter_mut().enumerate().skip(600) {
            *s = 0.5 * (0.13 * (i - 600) as f32).sin();
        }
        let onset = find_onset(&window).unwrap();
        assert!((600..620).contains(&onset), "onset at {}", onset);
    }

    #[test]
    fn find_onset_on_silence_is_none() {
        assert!(find_onset(&[0.0; 256]).is_none());
    }

    #[test]
    fn push_then_take_text_round_trip() {
        let table = Arc::new(GlyphTable::builtin());
        let enc = Encoder::new(Arc::clone(&table));
        let cfg = config();
        let samples = enc.encode("HI", &cfg).unwrap();

        let mut dec = Decoder::new(table, &cfg, 100).unwrap();
        // Stream in uneven chunks to exercise partial-slice buffering.
        for chunk in samples.chunks(1013) {
            dec.push(chunk);
        }
        dec.finish();
        assert_eq!(dec.take_text(), "HI");
    }
}
