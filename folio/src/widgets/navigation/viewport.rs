use super::model::{Viewport, WIDE_VIEWPORT_MIN_WIDTH};

/// Classify a window width.
pub(crate) fn classify(width: f32) -> Viewport {
    if width >= WIDE_VIEWPORT_MIN_WIDTH {
        Viewport::Wide
    } else {
        Viewport::Narrow
    }
}

/// Outcome of observing a new window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ViewportTransition {
    pub(crate) from: Viewport,
    pub(crate) to: Viewport,
}

impl ViewportTransition {
    #[cfg(test)]
    pub(crate) fn changed(&self) -> bool {
        self.from != self.to
    }

    pub(crate) fn widened(&self) -> bool {
        self.from == Viewport::Narrow && self.to == Viewport::Wide
    }
}

/// Keeps the last viewport classification.
#[derive(Debug, Clone)]
pub(crate) struct ViewportClassifier {
    current: Viewport,
}

impl ViewportClassifier {
    pub(crate) fn new(width: f32) -> Self {
        Self {
            current: classify(width),
        }
    }

    pub(crate) fn current(&self) -> Viewport {
        self.current
    }

    /// Reclassify after a resize and report the transition.
    pub(crate) fn observe(&mut self, width: f32) -> ViewportTransition {
        let from = self.current;
        let to = classify(width);
        self.current = to;

        if from != to {
            log::debug!("viewport {from:?} -> {to:?} at width {width}");
        }

        ViewportTransition { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::{ViewportClassifier, classify};
    use crate::widgets::navigation::model::Viewport;

    #[test]
    fn given_breakpoint_width_when_classifying_then_viewport_is_wide() {
        assert_eq!(classify(768.0), Viewport::Wide);
        assert_eq!(classify(767.9), Viewport::Narrow);
        assert_eq!(classify(320.0), Viewport::Narrow);
    }

    #[test]
    fn given_narrow_window_when_widened_then_transition_reports_widen() {
        let mut classifier = ViewportClassifier::new(400.0);

        let transition = classifier.observe(1200.0);

        assert!(transition.changed());
        assert!(transition.widened());
        assert_eq!(classifier.current(), Viewport::Wide);
    }

    #[test]
    fn given_same_class_resize_when_observed_then_no_transition() {
        let mut classifier = ViewportClassifier::new(900.0);

        let transition = classifier.observe(1400.0);

        assert!(!transition.changed());
        assert!(!transition.widened());
    }
}
