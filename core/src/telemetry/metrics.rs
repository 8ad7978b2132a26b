use std::sync::Mutex;

/// Counts advisory outcomes: answers served against fallbacks shown.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    served: usize,
    fallbacks: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                served: 0,
                fallbacks: 0,
            }),
        }
    }

    pub fn record_served(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.served += 1;
        }
    }

    pub fn record_fallback(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.fallbacks += 1;
        }
    }

    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.served, metrics.fallbacks)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_counts_both_outcomes() {
        let recorder = MetricsRecorder::new();
        recorder.record_served();
        recorder.record_served();
        recorder.record_fallback();
        assert_eq!(recorder.snapshot(), (2, 1));
    }
}
