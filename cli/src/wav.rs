use hound::{SampleFormat, WavSpec};
use std::fs::File;
use std::path::Path;

/// Write mono 16-bit PCM. Samples are clamped to [-1.0, 1.0] before scaling
/// so hot input cannot wrap.
pub fn write(
    path: &Path,
    samples: &[f32],
    sample_rate: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let file = File::create(path)?;
    let mut writer = hound::WavWriter::new(file, spec)?;
    for &sample in samples {
        let clamped = sample.max(-1.0).min(1.0);
        writer.write_sample((clamped * 32767.0) as i16)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Read a WAV file as mono f32 samples, returning the file's sample rate.
/// 16-bit integer and 32-bit float formats are accepted; multi-channel files
/// keep the first channel only.
pub fn read(path: &Path) -> Result<(Vec<f32>, u32), Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let mut reader = hound::WavReader::new(file)?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, 16) => {
            let int_samples: Result<Vec<i16>, _> = reader.samples::<i16>().collect();
            int_samples?
                .into_iter()
                .map(|s| s as f32 / 32768.0)
                .collect()
        }
        (SampleFormat::Float, 32) => {
            let float_samples: Result<Vec<f32>, _> = reader.samples::<f32>().collect();
            float_samples?
        }
        (_, bits) => {
            return Err(format!("Unsupported WAV format: {} bits", bits).into());
        }
    };

    let samples = if spec.channels > 1 {
        interleaved
            .into_iter()
            .step_by(spec.channels as usize)
            .collect()
    } else {
        interleaved
    };

    Ok((samples, spec.sample_rate))
}
