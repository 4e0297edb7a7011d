use std::sync::Mutex;

/// Counters for one batch run over the floor registry.
pub struct RunRecorder {
    inner: Mutex<RunCounters>,
}

struct RunCounters {
    rendered: usize,
    errors: usize,
}

impl RunRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RunCounters {
                rendered: 0,
                errors: 0,
            }),
        }
    }

    pub fn record_rendered(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.rendered += 1;
        }
    }

    pub fn record_error(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.errors += 1;
        }
    }

    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(counters) = self.inner.lock() {
            (counters.rendered, counters.errors)
        } else {
            (0, 0)
        }
    }
}

impl Default for RunRecorder {
    fn default() -> Self {
        Self::new()
    }
}
