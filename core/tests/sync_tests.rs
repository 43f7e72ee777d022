//! Acquisition behavior under imperfect channel conditions: late starts,
//! leading noise, truncation, and bursts that are not a real transmission.

use hellwave_core::{Decoder, Encoder, GlyphTable, ModulationConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::f32::consts::TAU;
use std::sync::Arc;

fn config() -> ModulationConfig {
    ModulationConfig {
        sample_rate: 48_000,
        carrier_hz: 1000.0,
        pixel_rate: 100.0,
        amplitude: 0.5,
        ramp_samples: 48,
    }
}

fn setup(text: &str) -> (Vec<f32>, Decoder) {
    let table = Arc::new(GlyphTable::builtin());
    let enc = Encoder::new(Arc::clone(&table));
    let cfg = config();
    let samples = enc.encode(text, &cfg).unwrap().to_vec();
    let dec = Decoder::new(table, &cfg, 100).unwrap();
    (samples, dec)
}

#[test]
fn decodes_after_leading_silence() {
    let (samples, mut dec) = setup("CQ DX");
    let mut padded = vec![0.0f32; 12_000];
    padded.extend_from_slice(&samples);
    assert_eq!(dec.decode(&padded), "CQ DX");
}

#[test]
fn decodes_with_unaligned_start() {
    // 1013 leading samples: no relation to the slot length, so every slice
    // boundary is initially misplaced until onset refinement fixes them.
    let (samples, mut dec) = setup("73");
    let mut padded = vec![0.0f32; 1013];
    padded.extend_from_slice(&samples);
    assert_eq!(dec.decode(&padded), "73");
}

#[test]
fn decodes_after_noisy_leader() {
    let (samples, mut dec) = setup("QRZ");
    let mut rng = StdRng::seed_from_u64(7);
    let noise = Normal::new(0.0f32, 0.005).unwrap();
    let mut padded: Vec<f32> = (0..24_000).map(|_| noise.sample(&mut rng)).collect();
    padded.extend(samples.iter().map(|&s| s + noise.sample(&mut rng)));
    assert_eq!(dec.decode(&padded), "QRZ");
}

#[test]
fn truncated_stream_yields_received_prefix() {
    let (samples, mut dec) = setup("HELLO WORLD");
    let cfg = config();
    let cell = cfg.samples_per_pixel();
    // Cut right after the last message glyph, before any postamble.
    let keep = (6 + 11) * 14 * 14 * cell;
    assert_eq!(dec.decode(&samples[..keep]), "HELLO WORLD");
}

#[test]
fn truncation_mid_message_keeps_earlier_characters() {
    let (samples, mut dec) = setup("HELLO");
    let cfg = config();
    let cell = cfg.samples_per_pixel();
    // Preamble plus the first three message glyphs.
    let keep = (6 + 3) * 14 * 14 * cell;
    assert_eq!(dec.decode(&samples[..keep]), "HEL");
}

#[test]
fn bare_tone_burst_is_not_a_transmission() {
    let table = Arc::new(GlyphTable::builtin());
    let cfg = config();
    let mut dec = Decoder::new(table, &cfg, 100).unwrap();

    let mut burst = vec![0.0f32; 9_600];
    let omega = TAU * cfg.carrier_hz / cfg.sample_rate as f32;
    burst.extend((0..96_000).map(|n| 0.5 * (omega * n as f32).sin()));
    burst.extend(vec![0.0f32; 48_000]);

    assert_eq!(dec.decode(&burst), "");
}

#[test]
fn back_to_back_frames_decode_independently() {
    let (first, mut dec) = setup("AB");
    let table = Arc::new(GlyphTable::builtin());
    let enc = Encoder::new(table);
    let second = enc.encode("CD", &config()).unwrap();

    let mut stream = first;
    stream.extend(vec![0.0f32; 24_000]);
    stream.extend_from_slice(&second);
    assert_eq!(dec.decode(&stream), "ABCD");
}
