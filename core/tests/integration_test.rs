use hellwave_core::{
    Decoder, Encoder, GlyphTable, ModulationConfig, POSTAMBLE, PREAMBLE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
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

fn round_trip(text: &str) -> String {
    let table = Arc::new(GlyphTable::builtin());
    let enc = Encoder::new(Arc::clone(&table));
    let cfg = config();
    let samples = enc.encode(text, &cfg).unwrap();
    let mut dec = Decoder::new(table, &cfg, 100).unwrap();
    dec.decode(&samples)
}

#[test]
fn ascii_round_trip() {
    let _ = env_logger::builder().is_test(true).try_init();
    assert_eq!(round_trip("CQ CQ DE JA1XYZ"), "CQ CQ DE JA1XYZ");
}

#[test]
fn japanese_round_trip() {
    assert_eq!(round_trip("こんにちは"), "こんにちは");
}

#[test]
fn mixed_script_round_trip() {
    assert_eq!(round_trip("73 デ 日本"), "73 デ 日本");
}

#[test]
fn empty_message_round_trip() {
    assert_eq!(round_trip(""), "");
}

#[test]
fn unmapped_character_becomes_replacement() {
    assert_eq!(round_trip("A\u{1F642}B"), "A\u{fffd}B");
}

#[test]
fn round_trip_survives_channel_noise() {
    let table = Arc::new(GlyphTable::builtin());
    let enc = Encoder::new(Arc::clone(&table));
    let cfg = config();
    let clean = enc.encode("HELLO", &cfg).unwrap();

    let mut rng = StdRng::seed_from_u64(42);
    let noise = Normal::new(0.0f32, 0.01).unwrap();
    let noisy: Vec<f32> = clean.iter().map(|&s| s + noise.sample(&mut rng)).collect();

    let mut dec = Decoder::new(table, &cfg, 100).unwrap();
    assert_eq!(dec.decode(&noisy), "HELLO");
}

#[test]
fn repeated_sends_are_bit_identical() {
    let table = Arc::new(GlyphTable::builtin());
    let enc = Encoder::new(table);
    let cfg = config();
    let a = enc.encode("CQ", &cfg).unwrap();
    let b = enc.encode("CQ", &cfg).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(&a[..], &b[..]);
}

#[test]
fn sample_count_is_deterministic() {
    let table = Arc::new(GlyphTable::builtin());
    let enc = Encoder::new(table);
    let cfg = config();
    let spp = cfg.samples_per_pixel();
    assert_eq!(spp, 480);

    for text in ["", "A", "CQ CQ", "こんにちは"] {
        let samples = enc.encode(text, &cfg).unwrap();
        let glyphs = PREAMBLE.len() + text.chars().count() + POSTAMBLE.len();
        assert_eq!(samples.len(), glyphs * 14 * 14 * spp, "text {:?}", text);
    }
}

#[test]
fn narrow_font_changes_glyph_duration() {
    // A 9-column variant of 'A' shortens every glyph to 9 * 14 cells.
    let entries = vec![
        (' ', vec![0u16; 9]),
        ('.', {
            let mut cols = vec![0u16; 9];
            cols[3] = 0x0E00;
            cols[4] = 0x0E00;
            cols[5] = 0x0E00;
            cols
        }),
        ('A', vec![0, 0x3FFC, 0x0210, 0x0210, 0x0210, 0x0210, 0x3FFC, 0, 0]),
    ];
    let table = Arc::new(GlyphTable::from_entries(14, 9, &entries, ' ').unwrap());
    let enc = Encoder::new(Arc::clone(&table));
    let cfg = config();
    let samples = enc.encode("A", &cfg).unwrap();
    assert_eq!(samples.len(), 13 * 9 * 14 * 480);

    let mut dec = Decoder::new(table, &cfg, 100).unwrap();
    assert_eq!(dec.decode(&samples), "A");
}

#[test]
fn waterfall_history_is_bounded() {
    let table = Arc::new(GlyphTable::builtin());
    let enc = Encoder::new(Arc::clone(&table));
    let cfg = config();
    let samples = enc.encode("LONG MESSAGE FOR THE DISPLAY", &cfg).unwrap();

    let mut dec = Decoder::new(table, &cfg, 100).unwrap();
    dec.push(&samples);
    dec.finish();
    assert_eq!(dec.waterfall().len(), 100);
    assert!(dec.waterfall().snapshot().iter().all(|row| row.len() == 240));
}
