use crate::config::ModulationConfig;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Cache key: the text plus the bit-exact modulation parameters that shaped
/// the waveform. Float fields are keyed by their bit patterns so two configs
/// collide only when they would produce identical audio.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    text: String,
    sample_rate: u32,
    carrier_bits: u32,
    pixel_bits: u32,
    amplitude_bits: u32,
    ramp_samples: usize,
}

impl CacheKey {
    fn new(text: &str, config: &ModulationConfig) -> Self {
        Self {
            text: text.to_owned(),
            sample_rate: config.sample_rate,
            carrier_bits: config.carrier_hz.to_bits(),
            pixel_bits: config.pixel_rate.to_bits(),
            amplitude_bits: config.amplitude.to_bits(),
            ramp_samples: config.ramp_samples,
        }
    }
}

/// Memoizes generated sample buffers across repeated sends.
///
/// Read-mostly and shared: entries are inserted fully built behind the lock
/// and handed out as `Arc` clones, so a concurrent reader sees either a miss
/// or a complete buffer, never a partial one. Eviction is explicit (`clear`
/// on configuration change), never time-based.
#[derive(Debug, Default)]
pub struct WaveformCache {
    inner: Mutex<HashMap<CacheKey, Arc<[f32]>>>,
}

impl WaveformCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, text: &str, config: &ModulationConfig) -> Option<Arc<[f32]>> {
        let key = CacheKey::new(text, config);
        self.inner.lock().expect("cache lock poisoned").get(&key).cloned()
    }

    /// Store a finished buffer and return the shared handle for it.
    pub fn insert(&self, text: &str, config: &ModulationConfig, samples: Vec<f32>) -> Arc<[f32]> {
        let key = CacheKey::new(text, config);
        let buffer: Arc<[f32]> = samples.into();
        self.inner
            .lock()
            .expect("cache lock poisoned")
            .insert(key, Arc::clone(&buffer));
        buffer
    }

    pub fn clear(&self) {
        self.inner.lock().expect("cache lock poisoned").clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_then_hit() {
        let cache = WaveformCache::new();
        let cfg = ModulationConfig::default();
        assert!(cache.get("CQ", &cfg).is_none());
        cache.insert("CQ", &cfg, vec![0.0, 0.5, -0.5]);
        let hit = cache.get("CQ", &cfg).unwrap();
        assert_eq!(&hit[..], &[0.0, 0.5, -0.5]);
    }

    #[test]
    fn config_change_is_a_different_key() {
        let cache = WaveformCache::new();
        let a = ModulationConfig::default();
        let b = ModulationConfig {
            carrier_hz: 900.0,
            ..a
        };
        cache.insert("CQ", &a, vec![1.0]);
        assert!(cache.get("CQ", &b).is_none());
    }

    #[test]
    fn hit_is_the_same_allocation() {
        let cache = WaveformCache::new();
        let cfg = ModulationConfig::default();
        let stored = cache.insert("DE JA1", &cfg, vec![0.25; 64]);
        let hit = cache.get("DE JA1", &cfg).unwrap();
        assert!(Arc::ptr_eq(&stored, &hit));
    }

    #[test]
    fn clear_drops_everything() {
        let cache = WaveformCache::new();
        let cfg = ModulationConfig::default();
        cache.insert("A", &cfg, vec![0.0]);
        cache.insert("B", &cfg, vec![0.0]);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }
}
