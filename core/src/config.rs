use crate::error::{HellModemError, Result};
use crate::{
    DEFAULT_AMPLITUDE, DEFAULT_CARRIER_HZ, DEFAULT_PIXEL_RATE, DEFAULT_RAMP_SAMPLES,
    DEFAULT_SAMPLE_RATE,
};

/// Immutable modulation parameters shared by one encode/decode session.
///
/// Changing any field invalidates previously generated waveforms; callers
/// holding a `WaveformCache` clear it when they swap configurations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModulationConfig {
    /// PCM sample rate in Hz.
    pub sample_rate: u32,
    /// OOK carrier frequency in Hz; must stay below Nyquist.
    pub carrier_hz: f32,
    /// Pixel slots per second. 245 px/s is classic Feld-Hell timing.
    pub pixel_rate: f32,
    /// Peak carrier amplitude, in (0, 1].
    pub amplitude: f32,
    /// Raised-cosine ramp length applied at every on/off run boundary.
    pub ramp_samples: usize,
}

impl Default for ModulationConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            carrier_hz: DEFAULT_CARRIER_HZ,
            pixel_rate: DEFAULT_PIXEL_RATE,
            amplitude: DEFAULT_AMPLITUDE,
            ramp_samples: DEFAULT_RAMP_SAMPLES,
        }
    }
}

impl ModulationConfig {
    /// Samples per pixel slot, rounded to the nearest whole sample.
    pub fn samples_per_pixel(&self) -> usize {
        (self.sample_rate as f32 / self.pixel_rate).round() as usize
    }

    /// Reject unusable parameter sets before any audio is produced.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(HellModemError::InvalidConfig(
                "sample_rate must be positive".into(),
            ));
        }
        if !(self.carrier_hz > 0.0) {
            return Err(HellModemError::InvalidConfig(
                "carrier_hz must be positive".into(),
            ));
        }
        let nyquist = self.sample_rate as f32 / 2.0;
        if self.carrier_hz >= nyquist {
            return Err(HellModemError::InvalidConfig(format!(
                "carrier_hz {} is at or above Nyquist ({})",
                self.carrier_hz, nyquist
            )));
        }
        if !(self.pixel_rate > 0.0) {
            return Err(HellModemError::InvalidConfig(
                "pixel_rate must be positive".into(),
            ));
        }
        if !(self.amplitude > 0.0 && self.amplitude <= 1.0) {
            return Err(HellModemError::InvalidConfig(
                "amplitude must be in (0, 1]".into(),
            ));
        }
        let spp = self.samples_per_pixel();
        if spp < 2 {
            return Err(HellModemError::InvalidConfig(format!(
                "pixel_rate {} leaves fewer than 2 samples per pixel",
                self.pixel_rate
            )));
        }
        if self.ramp_samples * 2 > spp {
            return Err(HellModemError::InvalidConfig(format!(
                "ramp_samples {} exceeds half a pixel slot ({} samples)",
                self.ramp_samples, spp
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = ModulationConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.samples_per_pixel(), 196);
    }

    #[test]
    fn samples_per_pixel_rounds() {
        let cfg = ModulationConfig {
            sample_rate: 48_000,
            pixel_rate: 100.0,
            ..Default::default()
        };
        assert_eq!(cfg.samples_per_pixel(), 480);
    }

    #[test]
    fn rejects_zero_sample_rate() {
        let cfg = ModulationConfig {
            sample_rate: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(HellModemError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_carrier_at_nyquist() {
        let cfg = ModulationConfig {
            carrier_hz: 24_000.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_negative_pixel_rate() {
        let cfg = ModulationConfig {
            pixel_rate: -10.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_oversized_ramp() {
        let cfg = ModulationConfig {
            ramp_samples: 1000,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_amplitude_above_one() {
        let cfg = ModulationConfig {
            amplitude: 1.5,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
