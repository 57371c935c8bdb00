pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Scroll-triggered reveal binding for one section. Once a section has been
/// seen it stays revealed.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealState {
    threshold: f64,
    in_view: bool,
    has_been_in_view: bool,
}

impl Default for RevealState {
    fn default() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }
}

impl RevealState {
    /// A threshold that is not positive falls back to [`DEFAULT_THRESHOLD`].
    pub fn with_threshold(threshold: f64) -> Self {
        let threshold = if threshold > 0.0 {
            threshold
        } else {
            DEFAULT_THRESHOLD
        };
        Self {
            threshold,
            in_view: false,
            has_been_in_view: false,
        }
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    pub fn has_been_in_view(&self) -> bool {
        self.has_been_in_view
    }

    /// `visible_ratio` is the visible share of the section, between 0 and 1.
    pub fn observe(&mut self, visible_ratio: f64) {
        self.in_view = visible_ratio > 0.0 && visible_ratio >= self.threshold;
        self.has_been_in_view |= self.in_view;
    }
}
