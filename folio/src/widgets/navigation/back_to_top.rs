use std::time::{Duration, Instant};

use super::model::{BACK_TO_TOP_THRESHOLD_PX, MotionPreference};

const FADE_DURATION: Duration = Duration::from_millis(200);

/// Visibility rule of the back-to-top control. No hysteresis.
pub(crate) fn is_back_to_top_visible(scroll_offset: f32) -> bool {
    scroll_offset > BACK_TO_TOP_THRESHOLD_PX
}

/// Back-to-top visibility plus its decorative opacity fade.
#[derive(Debug, Clone, Default)]
pub(crate) struct BackToTop {
    visible: bool,
    opacity: f32,
    last_frame: Option<Instant>,
}

impl BackToTop {
    pub(crate) fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn opacity(&self) -> f32 {
        self.opacity
    }

    pub(crate) fn is_fading(&self) -> bool {
        self.opacity != self.target_opacity()
    }

    /// Apply a new scroll offset. Returns `true` if visibility flipped.
    pub(crate) fn update(
        &mut self,
        scroll_offset: f32,
        motion: MotionPreference,
    ) -> bool {
        let visible = is_back_to_top_visible(scroll_offset);
        if visible == self.visible {
            return false;
        }

        self.visible = visible;
        self.last_frame = None;
        if motion == MotionPreference::Reduced {
            self.opacity = self.target_opacity();
        }
        true
    }

    /// Step the fade toward its target for the frame at `now`.
    pub(crate) fn advance(&mut self, now: Instant) {
        if !self.is_fading() {
            self.last_frame = None;
            return;
        }

        let Some(last) = self.last_frame.replace(now) else {
            return;
        };

        let step = now.saturating_duration_since(last).as_secs_f32()
            / FADE_DURATION.as_secs_f32();
        let target = self.target_opacity();
        self.opacity = if target > self.opacity {
            (self.opacity + step).min(target)
        } else {
            (self.opacity - step).max(target)
        };
    }

    fn target_opacity(&self) -> f32 {
        if self.visible { 1.0 } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{BackToTop, FADE_DURATION, is_back_to_top_visible};
    use crate::widgets::navigation::model::MotionPreference;

    #[test]
    fn given_offsets_around_threshold_when_checked_then_strictly_greater_shows() {
        assert!(!is_back_to_top_visible(0.0));
        assert!(!is_back_to_top_visible(300.0));
        assert!(is_back_to_top_visible(300.5));
        assert!(is_back_to_top_visible(500.0));
    }

    #[test]
    fn given_repeated_offset_when_updated_then_only_first_flip_reports() {
        let mut control = BackToTop::default();

        assert!(control.update(500.0, MotionPreference::Full));
        assert!(!control.update(500.0, MotionPreference::Full));
        assert!(control.is_visible());
    }

    #[test]
    fn given_full_motion_when_shown_then_opacity_fades_in_over_frames() {
        let mut control = BackToTop::default();
        let start = Instant::now();

        control.update(400.0, MotionPreference::Full);
        assert_eq!(control.opacity(), 0.0);

        control.advance(start);
        control.advance(start + FADE_DURATION / 2);
        assert!(control.opacity() > 0.0 && control.opacity() < 1.0);

        control.advance(start + FADE_DURATION + Duration::from_millis(5));
        assert_eq!(control.opacity(), 1.0);
        assert!(!control.is_fading());
    }

    #[test]
    fn given_reduced_motion_when_toggled_then_opacity_snaps() {
        let mut control = BackToTop::default();

        control.update(400.0, MotionPreference::Reduced);
        assert_eq!(control.opacity(), 1.0);

        control.update(0.0, MotionPreference::Reduced);
        assert_eq!(control.opacity(), 0.0);
        assert!(!control.is_fading());
    }
}
