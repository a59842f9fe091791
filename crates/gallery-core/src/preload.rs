/// Counts face images as they finish loading and reports readiness once.
#[derive(Clone, Debug)]
pub struct PreloadTracker {
    total: usize,
    loaded: usize,
    failed: usize,
    fired: bool,
}

impl PreloadTracker {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            loaded: 0,
            failed: 0,
            fired: false,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn is_settled(&self) -> bool {
        self.loaded + self.failed >= self.total
    }

    /// Consume the ready signal. `true` exactly once, on the first call after
    /// every image settled (immediately when there is nothing to load).
    pub fn take_ready(&mut self) -> bool {
        if self.fired || !self.is_settled() {
            return false;
        }
        self.fired = true;
        true
    }

    /// Record a successful load and return whether the gallery is now ready.
    pub fn mark_loaded(&mut self) -> bool {
        if !self.is_settled() {
            self.loaded += 1;
        }
        self.take_ready()
    }

    /// Record a failed load. Failures settle the image so one broken source
    /// cannot hold back the gallery.
    pub fn mark_failed(&mut self) -> bool {
        if !self.is_settled() {
            self.failed += 1;
        }
        self.take_ready()
    }
}
