use crate::error::{HellModemError, Result};
use std::collections::VecDeque;

/// Fixed-capacity ring of spectral magnitude rows for display.
///
/// Fed one row per analysis slice by the decoder's shared spectral step and
/// consumed read-only by a display collaborator. Pure side channel: it never
/// influences decoding.
#[derive(Debug)]
pub struct WaterfallBuffer {
    rows: VecDeque<Vec<f32>>,
    height: usize,
}

impl WaterfallBuffer {
    pub fn new(height: usize) -> Result<Self> {
        if height == 0 {
            return Err(HellModemError::InvalidConfig(
                "waterfall height must be at least 1".into(),
            ));
        }
        Ok(Self {
            rows: VecDeque::with_capacity(height),
            height,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row, dropping the oldest once the buffer is full.
    pub fn push(&mut self, row: Vec<f32>) {
        if self.rows.len() == self.height {
            self.rows.pop_front();
        }
        self.rows.push_back(row);
    }

    /// Rows oldest-first, cloned for the display side.
    pub fn snapshot(&self) -> Vec<Vec<f32>> {
        self.rows.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_height() {
        assert!(WaterfallBuffer::new(0).is_err());
    }

    #[test]
    fn fills_up_to_height() {
        let mut wf = WaterfallBuffer::new(3).unwrap();
        for i in 0..3 {
            wf.push(vec![i as f32]);
        }
        assert_eq!(wf.len(), 3);
        assert_eq!(wf.snapshot(), vec![vec![0.0], vec![1.0], vec![2.0]]);
    }

    #[test]
    fn evicts_oldest_first() {
        let mut wf = WaterfallBuffer::new(100).unwrap();
        for i in 0..150 {
            wf.push(vec![i as f32]);
        }
        assert_eq!(wf.len(), 100);
        let snap = wf.snapshot();
        assert_eq!(snap[0], vec![50.0]);
        assert_eq!(snap[99], vec![149.0]);
    }

    #[test]
    fn length_never_exceeds_height() {
        let mut wf = WaterfallBuffer::new(5).unwrap();
        for i in 0..37 {
            wf.push(vec![i as f32; 4]);
            assert!(wf.len() <= 5);
        }
    }
}
