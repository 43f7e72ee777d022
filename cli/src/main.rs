use clap::{Parser, Subcommand};
use hellwave_core::{
    Decoder, Encoder, FrameBuilder, GlyphTable, HellModemError, ModulationConfig,
    DEFAULT_AMPLITUDE, DEFAULT_CARRIER_HZ, DEFAULT_PIXEL_RATE, DEFAULT_RAMP_SAMPLES,
    DEFAULT_SAMPLE_RATE, DEFAULT_WATERFALL_HEIGHT,
};
use log::warn;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

mod audio;
mod wav;

#[derive(Parser)]
#[command(name = "hellwave")]
#[command(about = "Hellschreiber text transmitter and receiver")]
struct Cli {
    /// Carrier frequency in Hz
    #[arg(long, global = true, default_value_t = DEFAULT_CARRIER_HZ)]
    carrier: f32,

    /// Pixel rate in pixels per second
    #[arg(long, global = true, default_value_t = DEFAULT_PIXEL_RATE)]
    pixel_rate: f32,

    /// Sample rate in Hz
    #[arg(long, global = true, default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,

    /// Peak carrier amplitude, 0 to 1
    #[arg(long, global = true, default_value_t = DEFAULT_AMPLITUDE)]
    amplitude: f32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text to a WAV audio file
    Encode {
        /// Text to transmit
        text: String,

        /// Output WAV file
        #[arg(value_name = "OUTPUT.WAV")]
        output: PathBuf,

        /// Station callsign prefixed to the message
        #[arg(long)]
        callsign: Option<String>,
    },

    /// Decode a WAV audio file back to text
    Decode {
        /// Input WAV file
        #[arg(value_name = "INPUT.WAV")]
        input: PathBuf,

        /// Spectral history rows to retain
        #[arg(long, default_value_t = DEFAULT_WATERFALL_HEIGHT)]
        waterfall_height: usize,
    },

    /// Transmit text over the default audio output device
    Send {
        /// Text to transmit
        text: String,

        /// Station callsign prefixed to the message
        #[arg(long)]
        callsign: Option<String>,
    },

    /// Receive from the default audio input device, printing decoded text
    Listen {
        /// How long to listen, in seconds
        #[arg(long, default_value_t = 30)]
        seconds: u64,

        /// Print a live spectral waterfall to stderr
        #[arg(long)]
        waterfall: bool,

        /// Spectral history rows to retain
        #[arg(long, default_value_t = DEFAULT_WATERFALL_HEIGHT)]
        waterfall_height: usize,
    },
}

/// Message framing convention: the callsign leads the text, separated by a
/// single spacer.
fn with_callsign(text: &str, callsign: Option<&str>) -> String {
    match callsign {
        Some(cs) => format!("{} {}", cs, text),
        None => text.to_owned(),
    }
}

impl Cli {
    fn modulation(&self) -> ModulationConfig {
        ModulationConfig {
            sample_rate: self.sample_rate,
            carrier_hz: self.carrier,
            pixel_rate: self.pixel_rate,
            amplitude: self.amplitude,
            ramp_samples: DEFAULT_RAMP_SAMPLES,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.modulation();

    match cli.command {
        Commands::Encode {
            text,
            output,
            callsign,
        } => encode_command(&with_callsign(&text, callsign.as_deref()), &output, &config)?,
        Commands::Decode {
            input,
            waterfall_height,
        } => decode_command(&input, waterfall_height, &config)?,
        Commands::Send { text, callsign } => {
            send_command(&with_callsign(&text, callsign.as_deref()), &config)?
        }
        Commands::Listen {
            seconds,
            waterfall,
            waterfall_height,
        } => listen_command(seconds, waterfall, waterfall_height, &config)?,
    }

    Ok(())
}

fn encode_command(
    text: &str,
    output: &PathBuf,
    config: &ModulationConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoder = Encoder::new(Arc::new(GlyphTable::builtin()));
    let samples = encoder.encode(text, config)?;
    println!(
        "Encoded {} characters to {} samples ({:.2} s)",
        text.chars().count(),
        samples.len(),
        samples.len() as f64 / config.sample_rate as f64
    );

    wav::write(output, &samples, config.sample_rate)?;
    println!("Wrote {}", output.display());
    Ok(())
}

fn decode_command(
    input: &PathBuf,
    waterfall_height: usize,
    config: &ModulationConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let (samples, file_rate) = wav::read(input)?;
    println!("Read {} samples at {} Hz", samples.len(), file_rate);

    // The file's rate wins over the flag so a resampled recording still
    // lines up with its own pixel slots.
    let config = ModulationConfig {
        sample_rate: file_rate,
        ..*config
    };

    let table = Arc::new(GlyphTable::builtin());
    let mut decoder = Decoder::new(table, &config, waterfall_height)?;
    let text = decoder.decode(&samples);
    println!("{}", text);
    println!(
        "Analyzed {} slices ({} waterfall rows retained)",
        samples.len() / config.samples_per_pixel(),
        decoder.waterfall().len()
    );
    Ok(())
}

fn send_command(text: &str, config: &ModulationConfig) -> Result<(), Box<dyn std::error::Error>> {
    let table = Arc::new(GlyphTable::builtin());
    let encoder = Encoder::new(Arc::clone(&table));
    let frame = FrameBuilder::new(&table).build(text);

    // Echo each glyph as its audio is generated, the on-air progress view.
    let samples = encoder.encode_with_progress(text, config, |index| {
        eprint!("{}", frame.glyphs[index].ch);
        let _ = std::io::stderr().flush();
    })?;
    eprintln!();

    match audio::play(samples, config.sample_rate) {
        Ok(()) => {}
        Err(HellModemError::Device(msg)) => {
            // One retry at the stock rate with freshly generated audio; the
            // original buffer cannot be reused, its carrier would shift.
            let rate = audio::fallback_rate(config.sample_rate)
                .ok_or(HellModemError::Device(msg.clone()))?;
            warn!(
                "playback at {} Hz failed ({}), retrying at {} Hz",
                config.sample_rate, msg, rate
            );
            let fallback = ModulationConfig {
                sample_rate: rate,
                ..*config
            };
            let samples = encoder.encode(text, &fallback)?;
            audio::play(samples, rate)?;
        }
        Err(e) => return Err(e.into()),
    }
    println!("Sent {} characters", text.chars().count());
    Ok(())
}

fn listen_command(
    seconds: u64,
    waterfall: bool,
    waterfall_height: usize,
    config: &ModulationConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let capture = audio::Capture::open(config.sample_rate)?;
    // Glyph timing must follow whatever rate the device actually accepted.
    let config = ModulationConfig {
        sample_rate: capture.sample_rate(),
        ..*config
    };
    let table = Arc::new(GlyphTable::builtin());
    let mut decoder = Decoder::new(table, &config, waterfall_height)?;

    let deadline = Instant::now() + Duration::from_secs(seconds);
    while Instant::now() < deadline {
        let Some(chunk) = capture.next_chunk(Duration::from_millis(250))? else {
            continue;
        };
        decoder.push(&chunk);

        let text = decoder.take_text();
        if !text.is_empty() {
            print!("{}", text);
            std::io::stdout().flush()?;
        }
        if waterfall {
            if let Some(row) = decoder.waterfall().snapshot().last() {
                eprintln!("{}", render_waterfall_row(row));
            }
        }
    }

    decoder.finish();
    let text = decoder.take_text();
    if !text.is_empty() {
        print!("{}", text);
    }
    println!();
    Ok(())
}

/// One waterfall row as ASCII shades, low frequencies on the left.
fn render_waterfall_row(row: &[f32]) -> String {
    const SHADES: &[u8] = b" .:-=+*#%@";
    let width = row.len().min(72);
    let peak = row[..width].iter().fold(1e-6f32, |m, &v| m.max(v));
    row[..width]
        .iter()
        .map(|&v| {
            let level = ((v / peak) * (SHADES.len() - 1) as f32).round() as usize;
            SHADES[level.min(SHADES.len() - 1)] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waterfall_row_uses_full_shade_range() {
        let mut row = vec![0.0f32; 72];
        row[10] = 0.5;
        let line = render_waterfall_row(&row);
        assert_eq!(line.len(), 72);
        assert_eq!(line.as_bytes()[10], b'@');
        assert_eq!(line.as_bytes()[0], b' ');
    }

    #[test]
    fn callsign_prefixes_the_message() {
        assert_eq!(with_callsign("CQ CQ", Some("JA1XYZ")), "JA1XYZ CQ CQ");
        assert_eq!(with_callsign("CQ CQ", None), "CQ CQ");
    }

    #[test]
    fn modulation_flags_map_onto_config() {
        let cli = Cli::parse_from(["hellwave", "--carrier", "900", "decode", "x.wav"]);
        let cfg = cli.modulation();
        assert_eq!(cfg.carrier_hz, 900.0);
        assert_eq!(cfg.sample_rate, DEFAULT_SAMPLE_RATE);
    }
}
