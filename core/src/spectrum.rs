use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::f32::consts::PI;
use std::sync::Arc;

/// Per-slice spectral magnitude analysis.
///
/// One Hann-windowed forward FFT per pixel slot produces the magnitude row
/// that feeds both the decoder's carrier decision and the waterfall display.
/// The carrier bin is pinned at construction so the decision always reads
/// the same element of the row the display renders.
pub struct SpectralAnalyzer {
    slice_len: usize,
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    carrier_bin: usize,
    scratch: Vec<Complex<f32>>,
}

impl SpectralAnalyzer {
    pub fn new(slice_len: usize, sample_rate: u32, carrier_hz: f32) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(slice_len);
        let window: Vec<f32> = (0..slice_len)
            .map(|n| 0.5 * (1.0 - (2.0 * PI * n as f32 / (slice_len - 1) as f32).cos()))
            .collect();
        let carrier_bin = ((carrier_hz * slice_len as f32 / sample_rate as f32).round()
            as usize)
            .min(slice_len / 2 - 1);
        Self {
            slice_len,
            fft,
            window,
            carrier_bin,
            scratch: vec![Complex::new(0.0, 0.0); slice_len],
        }
    }

    pub fn slice_len(&self) -> usize {
        self.slice_len
    }

    /// Index of the carrier frequency in rows returned by `analyze`.
    pub fn carrier_bin(&self) -> usize {
        self.carrier_bin
    }

    /// Magnitude row for one slice. Row length is `slice_len / 2` (positive
    /// frequencies); magnitudes are normalized so a full-scale windowed tone
    /// at a bin center reads close to half its peak amplitude.
    pub fn analyze(&mut self, slice: &[f32]) -> Vec<f32> {
        debug_assert_eq!(slice.len(), self.slice_len);
        for (i, (&s, &w)) in slice.iter().zip(self.window.iter()).enumerate() {
            self.scratch[i] = Complex::new(s * w, 0.0);
        }
        self.fft.process(&mut self.scratch);

        let scale = 2.0 / self.slice_len as f32;
        self.scratch[..self.slice_len / 2]
            .iter()
            .map(|c| c.norm() * scale)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone(freq: f32, amp: f32, len: usize, rate: f32) -> Vec<f32> {
        (0..len)
            .map(|n| amp * (2.0 * PI * freq * n as f32 / rate).sin())
            .collect()
    }

    #[test]
    fn carrier_bin_is_pinned() {
        let a = SpectralAnalyzer::new(480, 48_000, 1000.0);
        assert_eq!(a.carrier_bin(), 10);
    }

    #[test]
    fn tone_peaks_at_carrier_bin() {
        let mut a = SpectralAnalyzer::new(480, 48_000, 1000.0);
        let row = a.analyze(&tone(1000.0, 0.5, 480, 48_000.0));
        let peak_bin = row
            .iter()
            .enumerate()
            .max_by(|x, y| x.1.partial_cmp(y.1).unwrap())
            .unwrap()
            .0;
        assert_eq!(peak_bin, a.carrier_bin());
        assert!(row[peak_bin] > 0.1, "magnitude {}", row[peak_bin]);
    }

    #[test]
    fn silence_reads_zero() {
        let mut a = SpectralAnalyzer::new(480, 48_000, 1000.0);
        let row = a.analyze(&vec![0.0; 480]);
        assert!(row.iter().all(|&m| m < 1e-6));
    }

    #[test]
    fn distant_tone_leaves_carrier_bin_dark() {
        let mut a = SpectralAnalyzer::new(480, 48_000, 1000.0);
        let row = a.analyze(&tone(3000.0, 0.5, 480, 48_000.0));
        assert!(row[a.carrier_bin()] < 0.01);
    }

    #[test]
    fn off_center_carrier_still_reads_strong() {
        // 1013 Hz falls between the 100 Hz bins of a 480-sample slice; the
        // Hann mainlobe must keep the pinned bin usable for OOK decisions.
        let mut a = SpectralAnalyzer::new(480, 48_000, 1013.0);
        let row = a.analyze(&tone(1013.0, 0.5, 480, 48_000.0));
        assert!(row[a.carrier_bin()] > 0.08);
    }

    #[test]
    fn row_length_is_half_slice() {
        let mut a = SpectralAnalyzer::new(196, 48_000, 1000.0);
        let row = a.analyze(&vec![0.0; 196]);
        assert_eq!(row.len(), 98);
    }
}
