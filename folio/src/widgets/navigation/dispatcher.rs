use std::time::{Duration, Instant};

use super::anchors::AnchorSource;
use super::model::ScrollTarget;

/// Duration of an animated scroll-to jump.
pub(crate) const SCROLL_ANIMATION_DURATION: Duration =
    Duration::from_millis(450);

/// Scroll samples this close to the last emitted offset are echoes of the
/// animation itself.
const ECHO_TOLERANCE_PX: f32 = 0.5;

/// Resolve a scroll target to a document offset clamped to the scrollable
/// range. A missing anchor resolves to `None`.
pub(crate) fn resolve_offset(
    target: ScrollTarget,
    anchors: &impl AnchorSource,
    max_offset: f32,
) -> Option<f32> {
    let top = match target {
        ScrollTarget::Top => 0.0,
        ScrollTarget::Section(section) => anchors.anchor_top(section)?,
    };

    Some(top.clamp(0.0, max_offset.max(0.0)))
}

/// One step of a running scroll animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScrollSample {
    pub(crate) offset: f32,
    pub(crate) finished: bool,
}

/// Smooth scroll from one offset to another, driven by frame ticks.
///
/// The clock starts on the first sampled frame so a request made between
/// frames does not skip ahead.
#[derive(Debug, Clone)]
pub(crate) struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    duration: Duration,
    last_offset: Option<f32>,
}

impl ScrollAnimation {
    pub(crate) fn new(from: f32, to: f32) -> Self {
        Self {
            from,
            to,
            started_at: None,
            duration: SCROLL_ANIMATION_DURATION,
            last_offset: None,
        }
    }

    /// Whether a scroll sample came from this animation's own jumps.
    ///
    /// Anything else is the user scrolling, which must win over the
    /// animation.
    pub(crate) fn is_echo(&self, offset: f32) -> bool {
        self.last_offset
            .is_some_and(|last| (last - offset).abs() <= ECHO_TOLERANCE_PX)
    }

    /// Offset for the frame presented at `now`.
    pub(crate) fn sample(&mut self, now: Instant) -> ScrollSample {
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started_at);

        let sample = if self.duration.is_zero() || elapsed >= self.duration {
            ScrollSample {
                offset: self.to,
                finished: true,
            }
        } else {
            let progress =
                elapsed.as_secs_f32() / self.duration.as_secs_f32();
            let eased = ease_in_out_cubic(progress);

            ScrollSample {
                offset: self.from + (self.to - self.from) * eased,
                finished: false,
            }
        };

        self.last_offset = Some(sample.offset);
        sample
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{
        SCROLL_ANIMATION_DURATION, ScrollAnimation, ease_in_out_cubic,
        resolve_offset,
    };
    use crate::widgets::navigation::anchors::AnchorMap;
    use crate::widgets::navigation::model::{ScrollTarget, SectionId};

    fn anchors() -> AnchorMap {
        [(SectionId::Home, 0.0), (SectionId::Contact, 2600.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn given_top_target_when_resolving_then_offset_is_document_origin() {
        assert_eq!(
            resolve_offset(ScrollTarget::Top, &anchors(), 3000.0),
            Some(0.0)
        );
    }

    #[test]
    fn given_missing_anchor_when_resolving_then_no_offset() {
        assert_eq!(
            resolve_offset(
                ScrollTarget::Section(SectionId::Skills),
                &anchors(),
                3000.0
            ),
            None
        );
    }

    #[test]
    fn given_anchor_beyond_scroll_range_when_resolving_then_offset_is_clamped() {
        assert_eq!(
            resolve_offset(
                ScrollTarget::Section(SectionId::Contact),
                &anchors(),
                2000.0
            ),
            Some(2000.0)
        );
    }

    #[test]
    fn given_running_animation_when_sampled_then_reaches_target_exactly() {
        let start = Instant::now();
        let mut animation = ScrollAnimation::new(0.0, 1200.0);

        let first = animation.sample(start);
        assert_eq!(first.offset, 0.0);
        assert!(!first.finished);

        let middle = animation.sample(start + SCROLL_ANIMATION_DURATION / 2);
        assert!(middle.offset > 0.0 && middle.offset < 1200.0);

        let last = animation
            .sample(start + SCROLL_ANIMATION_DURATION + Duration::from_millis(1));
        assert_eq!(last.offset, 1200.0);
        assert!(last.finished);
    }

    #[test]
    fn given_sampled_animation_when_checking_echo_then_only_emitted_offset_matches()
     {
        let start = Instant::now();
        let mut animation = ScrollAnimation::new(0.0, 1200.0);
        assert!(!animation.is_echo(0.0));

        let sample = animation.sample(start + SCROLL_ANIMATION_DURATION / 3);

        assert!(animation.is_echo(sample.offset));
        assert!(!animation.is_echo(sample.offset + 40.0));
    }

    #[test]
    fn given_easing_curve_when_evaluated_then_endpoints_are_fixed() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < f32::EPSILON);
    }
}
