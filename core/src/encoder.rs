use crate::cache::WaveformCache;
use crate::config::ModulationConfig;
use crate::error::Result;
use crate::frame::{Frame, FrameBuilder};
use crate::glyph::GlyphTable;
use log::debug;
use std::f64::consts::TAU;
use std::sync::Arc;

/// Turns text into an OOK sample buffer, memoized through a `WaveformCache`.
///
/// The scan order is the defining property of the protocol: glyph columns
/// left to right, rows top to bottom within each column. Each pixel cell
/// becomes `samples_per_pixel` samples of phase-continuous carrier (on) or
/// silence (off), with a raised-cosine ramp at every on/off run boundary to
/// keep the spectrum clean for the receiver.
pub struct Encoder {
    table: Arc<GlyphTable>,
    cache: WaveformCache,
}

impl Encoder {
    pub fn new(table: Arc<GlyphTable>) -> Self {
        Self {
            table,
            cache: WaveformCache::new(),
        }
    }

    pub fn table(&self) -> &GlyphTable {
        &self.table
    }

    /// The backing cache; callers clear it when swapping configurations.
    pub fn cache(&self) -> &WaveformCache {
        &self.cache
    }

    /// Encode `text` into audio samples. Cache hits return the stored buffer
    /// unchanged, bit-identical across calls.
    pub fn encode(&self, text: &str, config: &ModulationConfig) -> Result<Arc<[f32]>> {
        self.encode_with_progress(text, config, |_| {})
    }

    /// Like `encode`, invoking `on_glyph` with the frame index of each glyph
    /// as generation advances through the frame. Highlight feedback and PTT
    /// sequencing hang off this hook; the codec itself keeps no UI state.
    pub fn encode_with_progress<F>(
        &self,
        text: &str,
        config: &ModulationConfig,
        mut on_glyph: F,
    ) -> Result<Arc<[f32]>>
    where
        F: FnMut(usize),
    {
        config.validate()?;

        let frame = FrameBuilder::new(&self.table).build(text);

        if let Some(hit) = self.cache.get(text, config) {
            debug!("waveform cache hit ({} glyphs)", frame.len());
            for index in 0..frame.len() {
                on_glyph(index);
            }
            return Ok(hit);
        }

        let samples = self.generate(&frame, config, &mut on_glyph);
        debug!(
            "generated {} samples for {} glyphs",
            samples.len(),
            frame.len()
        );
        Ok(self.cache.insert(text, config, samples))
    }

    fn generate(
        &self,
        frame: &Frame,
        config: &ModulationConfig,
        on_glyph: &mut dyn FnMut(usize),
    ) -> Vec<f32> {
        let rows = self.table.rows();
        let spp = config.samples_per_pixel();
        let ramp = config.ramp_samples;
        let omega = TAU * config.carrier_hz as f64 / config.sample_rate as f64;
        let amplitude = config.amplitude;

        // Flatten the frame into scan-order cell bits, remembering where each
        // glyph starts so progress can be reported mid-generation.
        let mut bits = Vec::with_capacity(frame.total_cells(rows));
        let mut glyph_starts = Vec::with_capacity(frame.len());
        for fg in &frame.glyphs {
            glyph_starts.push(bits.len());
            for &column in fg.glyph.columns() {
                for row in 0..rows {
                    bits.push((column >> row) & 1 == 1);
                }
            }
        }

        let mut samples = Vec::with_capacity(bits.len() * spp);
        let mut phase = 0.0f64;
        let mut next_glyph = 0;

        for (cell, &on) in bits.iter().enumerate() {
            while next_glyph < glyph_starts.len() && glyph_starts[next_glyph] == cell {
                on_glyph(next_glyph);
                next_glyph += 1;
            }

            if !on {
                samples.resize(samples.len() + spp, 0.0);
                phase = (phase + omega * spp as f64) % TAU;
                continue;
            }

            let ramp_in = cell == 0 || !bits[cell - 1];
            let ramp_out = cell + 1 == bits.len() || !bits[cell + 1];

            for k in 0..spp {
                let mut envelope = 1.0f32;
                if ramp > 0 {
                    if ramp_in && k < ramp {
                        envelope *= raised_cosine(k as f32 / ramp as f32);
                    }
                    if ramp_out && k >= spp - ramp {
                        envelope *= raised_cosine((spp - k) as f32 / ramp as f32);
                    }
                }
                samples.push(amplitude * envelope * phase.sin() as f32);
                phase += omega;
                if phase >= TAU {
                    phase -= TAU;
                }
            }
        }

        samples
    }
}

/// Half raised-cosine: 0 at t = 0, 1 at t = 1.
fn raised_cosine(t: f32) -> f32 {
    0.5 * (1.0 - (std::f32::consts::PI * t).cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{POSTAMBLE, PREAMBLE};
    use crate::glyph::GlyphTable;

    fn encoder() -> Encoder {
        Encoder::new(Arc::new(GlyphTable::builtin()))
    }

    fn test_config() -> ModulationConfig {
        ModulationConfig {
            sample_rate: 48_000,
            carrier_hz: 1000.0,
            pixel_rate: 100.0,
            amplitude: 0.5,
            ramp_samples: 48,
        }
    }

    #[test]
    fn buffer_length_is_exact() {
        let enc = encoder();
        let cfg = test_config();
        let samples = enc.encode("A", &cfg).unwrap();
        // 1 message glyph + 12 framing glyphs, 14x14 cells each, 480 spp.
        assert_eq!(samples.len(), 13 * 14 * 14 * 480);
    }

    #[test]
    fn cache_hit_returns_identical_buffer() {
        let enc = encoder();
        let cfg = test_config();
        let a = enc.encode("CQ CQ", &cfg).unwrap();
        let b = enc.encode("CQ CQ", &cfg).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(&a[..], &b[..]);
    }

    #[test]
    fn different_config_regenerates() {
        let enc = encoder();
        let a = enc.encode("K", &test_config()).unwrap();
        let other = ModulationConfig {
            carrier_hz: 900.0,
            ..test_config()
        };
        let b = enc.encode("K", &other).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(enc.cache().len(), 2);
    }

    #[test]
    fn invalid_config_is_rejected_and_not_cached() {
        let enc = encoder();
        let bad = ModulationConfig {
            carrier_hz: 30_000.0,
            ..test_config()
        };
        assert!(enc.encode("A", &bad).is_err());
        assert!(enc.cache().is_empty());
    }

    #[test]
    fn progress_covers_every_glyph_in_order() {
        let enc = encoder();
        let cfg = test_config();
        let mut seen = Vec::new();
        enc.encode_with_progress("AB", &cfg, |i| seen.push(i)).unwrap();
        let expected: Vec<usize> = (0..PREAMBLE.len() + 2 + POSTAMBLE.len()).collect();
        assert_eq!(seen, expected);

        // Cache hits replay the same sequence.
        let mut replay = Vec::new();
        enc.encode_with_progress("AB", &cfg, |i| replay.push(i)).unwrap();
        assert_eq!(replay, expected);
    }

    #[test]
    fn scan_order_is_column_major_top_to_bottom() {
        // 2x2 glyph with pixels at (col 0, row 0) and (col 1, row 1):
        // scan order on/off pattern must be [on, off, off, on].
        let entries = vec![
            (' ', vec![0u16, 0]),
            ('.', vec![1u16, 0]),
            ('X', vec![0b01u16, 0b10]),
        ];
        let table = GlyphTable::from_entries(2, 2, &entries, ' ').unwrap();
        let enc = Encoder::new(Arc::new(table));
        let cfg = ModulationConfig {
            sample_rate: 48_000,
            carrier_hz: 1000.0,
            pixel_rate: 4800.0,
            amplitude: 0.5,
            ramp_samples: 2,
        };
        let samples = enc.encode("X", &cfg).unwrap();
        let spp = cfg.samples_per_pixel();
        let message_start = PREAMBLE.len() * 4 * spp; // 6 framing glyphs of 4 cells
        let cell_energy = |cell: usize| -> f32 {
            let start = message_start + cell * spp;
            samples[start..start + spp].iter().map(|s| s * s).sum()
        };
        assert!(cell_energy(0) > 0.1);
        assert_eq!(cell_energy(1), 0.0);
        assert_eq!(cell_energy(2), 0.0);
        assert!(cell_energy(3) > 0.1);
    }

    #[test]
    fn off_cells_are_silent_and_ramps_taper_edges() {
        let enc = encoder();
        let cfg = test_config();
        let samples = enc.encode(" ", &cfg).unwrap();
        let spp = cfg.samples_per_pixel();

        // The first lit pixel of the leading dot glyph sits at scan offset
        // 5*14 + 9; everything before it is silence.
        let onset = (5 * 14 + 9) * spp;
        assert!(samples[..onset].iter().all(|&s| s == 0.0));

        // Ramp-in: the first sample of the tone run is still near zero.
        assert!(samples[onset].abs() < 1e-3);
        // Steady state: mid-run amplitude approaches the configured peak.
        let peak = samples[onset..onset + spp]
            .iter()
            .fold(0.0f32, |m, s| m.max(s.abs()));
        assert!(peak > 0.45 && peak <= 0.5);
    }

    #[test]
    fn tone_is_phase_continuous_across_cells() {
        // Two consecutive on-cells in the dot column must not glitch at the
        // slot boundary: the sample step across it stays bounded by the
        // carrier slope.
        let enc = encoder();
        let cfg = test_config();
        let samples = enc.encode("", &cfg).unwrap();
        let spp = cfg.samples_per_pixel();
        let onset = (5 * 14 + 9) * spp;
        let boundary = onset + spp;
        let max_step = cfg.amplitude
            * (TAU as f32 * cfg.carrier_hz / cfg.sample_rate as f32);
        let step = (samples[boundary] - samples[boundary - 1]).abs();
        assert!(step <= max_step * 1.1, "step {} too large", step);
    }
}
