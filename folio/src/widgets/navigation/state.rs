use std::time::Instant;

use super::anchors::AnchorMap;
use super::back_to_top::BackToTop;
use super::dispatcher::{ScrollAnimation, resolve_offset};
use super::menu::MenuState;
use super::model::{
    MotionPreference, NavigationViewModel, ScrollTarget, SectionId, registry,
};
use super::observer::ScrollObserver;
use super::viewport::ViewportClassifier;

/// Runtime state of the navigation shell.
#[derive(Debug)]
pub(super) struct NavigationState {
    scroll_offset: f32,
    anchors: AnchorMap,
    max_offset: f32,
    observer: ScrollObserver,
    viewport: ViewportClassifier,
    menu: MenuState,
    back_to_top: BackToTop,
    animation: Option<ScrollAnimation>,
    motion: MotionPreference,
    torn_down: bool,
}

impl NavigationState {
    pub(super) fn new(window_width: f32, motion: MotionPreference) -> Self {
        Self {
            scroll_offset: 0.0,
            anchors: AnchorMap::new(),
            max_offset: 0.0,
            observer: ScrollObserver::default(),
            viewport: ViewportClassifier::new(window_width),
            menu: MenuState::default(),
            back_to_top: BackToTop::default(),
            animation: None,
            motion,
            torn_down: false,
        }
    }

    #[cfg(test)]
    pub(super) fn active_section(&self) -> SectionId {
        self.observer.active()
    }

    #[cfg(test)]
    pub(super) fn viewport(&self) -> super::model::Viewport {
        self.viewport.current()
    }

    #[cfg(test)]
    pub(super) fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    #[cfg(test)]
    pub(super) fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub(super) fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[cfg(test)]
    pub(super) fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the shell needs the next animation frame.
    pub(super) fn needs_frames(&self) -> bool {
        !self.torn_down
            && (self.observer.is_dirty()
                || self.animation.is_some()
                || self.back_to_top.is_fading())
    }

    /// Record a scroll sample. Identical samples are ignored.
    ///
    /// A sample that the running animation did not produce means the user
    /// scrolled; the animation is dropped so it stops issuing jumps.
    pub(super) fn on_scrolled(&mut self, offset: f32) {
        if self.torn_down || offset == self.scroll_offset {
            return;
        }

        if self
            .animation
            .as_ref()
            .is_some_and(|animation| !animation.is_echo(offset))
        {
            log::debug!("scroll animation cancelled by user scroll at {offset}");
            self.animation = None;
        }

        self.scroll_offset = offset;
        self.observer.mark_dirty();
        self.back_to_top.update(offset, self.motion);
    }

    /// Run the per-frame work and return the next animated scroll offset.
    pub(super) fn on_frame(&mut self, now: Instant) -> Option<f32> {
        if self.torn_down {
            return None;
        }

        self.observer.evaluate(&self.anchors, self.scroll_offset);
        self.back_to_top.advance(now);

        let animation = self.animation.as_mut()?;
        let sample = animation.sample(now);
        if sample.finished {
            self.animation = None;
        }

        Some(sample.offset)
    }

    /// Reclassify the viewport; widening always closes the overlay.
    pub(super) fn on_resized(&mut self, window_width: f32) {
        if self.torn_down {
            return;
        }

        let transition = self.viewport.observe(window_width);
        if transition.widened() {
            self.menu.close();
        }
    }

    /// Replace anchor positions after the page was laid out again.
    pub(super) fn set_layout(&mut self, anchors: AnchorMap, max_offset: f32) {
        if self.torn_down {
            return;
        }

        log::debug!(
            "layout changed: {} anchors, max offset {max_offset}",
            anchors.len()
        );
        self.anchors = anchors;
        self.max_offset = max_offset.max(0.0);
        self.observer.mark_dirty();
    }

    pub(super) fn toggle_menu(&mut self) {
        if self.torn_down {
            return;
        }

        self.menu.toggle(self.viewport.current());
    }

    pub(super) fn close_menu(&mut self) {
        self.menu.close();
    }

    /// Handle a nav item selection: close the overlay and scroll.
    pub(super) fn select_section(&mut self, section: SectionId) -> Option<f32> {
        self.menu.close();
        self.request_scroll(ScrollTarget::Section(section))
    }

    /// Start a scroll-to request.
    ///
    /// Returns an offset to jump to immediately under reduced motion;
    /// otherwise an animation is armed and offsets come from
    /// [`NavigationState::on_frame`]. Missing anchors are a no-op.
    pub(super) fn request_scroll(&mut self, target: ScrollTarget) -> Option<f32> {
        if self.torn_down {
            return None;
        }

        let Some(offset) =
            resolve_offset(target, &self.anchors, self.max_offset)
        else {
            log::debug!("scroll target {target:?} has no mounted anchor");
            return None;
        };

        log::debug!("scroll to {target:?} at offset {offset}");
        match self.motion {
            MotionPreference::Reduced => {
                self.animation = None;
                Some(offset)
            },
            MotionPreference::Full => {
                self.animation =
                    Some(ScrollAnimation::new(self.scroll_offset, offset));
                None
            },
        }
    }

    /// Stop reacting to scroll, resize and frame events.
    pub(super) fn teardown(&mut self) {
        self.torn_down = true;
        self.animation = None;
        self.menu.close();
    }

    pub(super) fn vm(&self) -> NavigationViewModel {
        NavigationViewModel {
            items: registry(),
            active_section: self.observer.active(),
            viewport: self.viewport.current(),
            menu_open: self.menu.is_open(),
            back_to_top_visible: self.back_to_top.is_visible(),
            back_to_top_opacity: self.back_to_top.opacity(),
            scroll_offset: self.scroll_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::NavigationState;
    use crate::widgets::navigation::anchors::AnchorMap;
    use crate::widgets::navigation::model::{
        MotionPreference, ScrollTarget, SectionId, Viewport,
    };

    const FRAME: Duration = Duration::from_millis(16);
    const PAGE_MAX_OFFSET: f32 = 3100.0;

    fn page_anchors() -> AnchorMap {
        [
            (SectionId::Home, 0.0),
            (SectionId::Projects, 820.0),
            (SectionId::Skills, 1700.0),
            (SectionId::Contact, 2500.0),
        ]
        .into_iter()
        .collect()
    }

    fn shell(width: f32, motion: MotionPreference) -> NavigationState {
        let mut state = NavigationState::new(width, motion);
        state.set_layout(page_anchors(), PAGE_MAX_OFFSET);
        settle(&mut state, Instant::now());
        state
    }

    /// Pump frames like the runtime does, echoing every scroll request
    /// back as the scrollable's scroll event.
    fn settle(state: &mut NavigationState, start: Instant) -> Instant {
        let mut now = start;
        let mut guard = 0;
        while state.needs_frames() {
            if let Some(offset) = state.on_frame(now) {
                state.on_scrolled(offset);
            }
            now += FRAME;
            guard += 1;
            assert!(guard < 1_000, "frames never settled");
        }
        now
    }

    fn scroll(state: &mut NavigationState, offset: f32) {
        state.on_scrolled(offset);
        settle(state, Instant::now());
    }

    #[test]
    fn given_initial_load_when_nothing_happened_then_defaults_hold() {
        let wide = shell(1280.0, MotionPreference::Full);
        let vm = wide.vm();

        assert_eq!(vm.active_section, SectionId::Home);
        assert!(!vm.back_to_top_visible);
        assert!(!vm.menu_open);
        assert_eq!(vm.viewport, Viewport::Wide);

        let narrow = shell(600.0, MotionPreference::Full);
        assert_eq!(narrow.vm().viewport, Viewport::Narrow);
    }

    #[test]
    fn given_desktop_click_on_skills_when_animation_completes_then_skills_is_active()
     {
        let mut state = shell(1280.0, MotionPreference::Full);

        assert_eq!(state.select_section(SectionId::Skills), None);
        assert!(state.is_animating());
        settle(&mut state, Instant::now());

        assert_eq!(state.scroll_offset(), 1700.0);
        assert_eq!(state.active_section(), SectionId::Skills);
        assert!(!state.is_menu_open());
        assert_eq!(state.viewport(), Viewport::Wide);
    }

    #[test]
    fn given_narrow_viewport_when_menu_toggled_then_tap_closes_and_navigates() {
        let mut state = shell(400.0, MotionPreference::Full);

        state.toggle_menu();
        let vm = state.vm();
        assert!(vm.menu_open);
        assert!(vm.overlay_visible());
        assert_eq!(vm.items.len(), 4);

        state.select_section(SectionId::Contact);
        assert!(!state.is_menu_open());

        settle(&mut state, Instant::now());
        assert_eq!(state.active_section(), SectionId::Contact);
    }

    #[test]
    fn given_scroll_past_threshold_when_back_to_top_used_then_returns_to_origin() {
        let mut state = shell(1280.0, MotionPreference::Full);

        let mut flips = 0;
        let mut visible = state.vm().back_to_top_visible;
        for offset in (0..=500).step_by(20) {
            scroll(&mut state, offset as f32);
            let now_visible = state.vm().back_to_top_visible;
            if now_visible != visible {
                flips += 1;
                assert!(offset as f32 > 300.0);
            }
            visible = now_visible;
        }
        assert_eq!(flips, 1);
        assert!(visible);
        assert_eq!(state.vm().back_to_top_opacity, 1.0);

        state.request_scroll(ScrollTarget::Top);
        settle(&mut state, Instant::now());

        assert_eq!(state.scroll_offset(), 0.0);
        assert!(!state.vm().back_to_top_visible);
        assert_eq!(state.active_section(), SectionId::Home);
    }

    #[test]
    fn given_open_menu_when_window_widens_then_menu_closes_without_scrolling() {
        let mut state = shell(400.0, MotionPreference::Full);
        scroll(&mut state, 250.0);
        state.toggle_menu();
        assert!(state.is_menu_open());

        state.on_resized(1200.0);

        assert!(!state.is_menu_open());
        assert_eq!(state.viewport(), Viewport::Wide);
        assert_eq!(state.scroll_offset(), 250.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn given_skills_anchor_removed_when_scrolling_and_clicking_then_it_is_skipped()
     {
        let mut state = shell(1280.0, MotionPreference::Full);
        let mut anchors = page_anchors();
        anchors.remove(SectionId::Skills);
        state.set_layout(anchors, PAGE_MAX_OFFSET);

        for offset in (0..=3100).step_by(50) {
            scroll(&mut state, offset as f32);
            assert_ne!(state.active_section(), SectionId::Skills);
        }

        scroll(&mut state, 900.0);
        assert_eq!(state.select_section(SectionId::Skills), None);
        assert!(!state.is_animating());
        assert_eq!(state.scroll_offset(), 900.0);
    }

    #[test]
    fn given_running_animation_when_user_scrolls_then_animation_stops_jumping() {
        let mut state = shell(1280.0, MotionPreference::Full);
        state.request_scroll(ScrollTarget::Section(SectionId::Contact));

        let start = Instant::now();
        for frame in 0..2 {
            if let Some(offset) = state.on_frame(start + FRAME * frame) {
                state.on_scrolled(offset);
            }
        }
        assert!(state.is_animating());

        state.on_scrolled(50.0);

        assert!(!state.is_animating());
        assert_eq!(state.on_frame(start + FRAME * 2), None);
        assert_eq!(state.scroll_offset(), 50.0);
        assert!(!state.is_menu_open());
        assert_eq!(state.viewport(), Viewport::Wide);
    }

    #[test]
    fn given_burst_of_scroll_samples_when_no_frame_yet_then_active_section_waits()
     {
        let mut state = shell(1280.0, MotionPreference::Reduced);

        for offset in [300.0, 900.0, 1500.0, 1800.0] {
            state.on_scrolled(offset);
            assert_eq!(state.active_section(), SectionId::Home);
        }
        assert!(state.needs_frames());

        state.on_frame(Instant::now());

        assert_eq!(state.active_section(), SectionId::Skills);
    }

    #[test]
    fn given_wide_viewport_when_toggle_pressed_then_menu_stays_closed() {
        let mut state = shell(1280.0, MotionPreference::Full);

        state.toggle_menu();

        assert!(!state.is_menu_open());
        assert!(!state.vm().overlay_visible());
    }

    #[test]
    fn given_repeated_scroll_to_same_target_when_settled_then_final_offset_matches()
     {
        let mut state = shell(1280.0, MotionPreference::Full);

        state.request_scroll(ScrollTarget::Section(SectionId::Projects));
        let now = settle(&mut state, Instant::now());
        let first = state.scroll_offset();

        state.request_scroll(ScrollTarget::Section(SectionId::Projects));
        settle(&mut state, now);

        assert_eq!(first, 820.0);
        assert_eq!(state.scroll_offset(), first);
    }

    #[test]
    fn given_reduced_motion_when_scroll_requested_then_jump_is_immediate() {
        let mut state = shell(1280.0, MotionPreference::Reduced);

        let offset = state.request_scroll(ScrollTarget::Section(SectionId::Skills));

        assert_eq!(offset, Some(1700.0));
        assert!(!state.is_animating());

        state.on_scrolled(1700.0);
        assert_eq!(state.vm().back_to_top_opacity, 1.0);
    }

    #[test]
    fn given_torn_down_shell_when_events_arrive_then_state_is_frozen() {
        let mut state = shell(400.0, MotionPreference::Full);
        scroll(&mut state, 120.0);
        state.teardown();
        let before = state.vm();

        state.on_scrolled(2000.0);
        state.on_resized(1400.0);
        state.toggle_menu();
        assert_eq!(state.on_frame(Instant::now()), None);
        assert_eq!(state.request_scroll(ScrollTarget::Top), None);

        assert!(state.is_torn_down());
        assert!(!state.needs_frames());
        assert_eq!(state.vm(), before);
    }

    #[test]
    fn given_any_scroll_offset_when_settled_then_exactly_one_registered_section_is_active()
     {
        let mut state = shell(1280.0, MotionPreference::Full);

        for offset in (0..=3100).rev().step_by(37) {
            scroll(&mut state, offset as f32);
            let active = state.active_section();
            assert_eq!(
                state
                    .vm()
                    .items
                    .iter()
                    .filter(|item| item.section == active)
                    .count(),
                1
            );
        }
    }
}
