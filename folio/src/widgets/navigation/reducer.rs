use iced::Task;

use super::event::{NavigationEffect, NavigationEvent, NavigationIntent};
use super::state::NavigationState;

/// Reduce a navigation intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut NavigationState,
    intent: NavigationIntent,
) -> Task<NavigationEvent> {
    match intent {
        NavigationIntent::Scrolled { offset } => {
            state.on_scrolled(offset);
            Task::none()
        },
        NavigationIntent::Frame(now) => scroll_page(state.on_frame(now)),
        NavigationIntent::Resized { width } => {
            state.on_resized(width);
            Task::none()
        },
        NavigationIntent::LayoutChanged {
            anchors,
            max_offset,
        } => {
            state.set_layout(anchors, max_offset);
            Task::none()
        },
        NavigationIntent::ToggleMenu => {
            state.toggle_menu();
            Task::none()
        },
        NavigationIntent::DismissMenu => {
            state.close_menu();
            Task::none()
        },
        NavigationIntent::SelectSection(section) => {
            scroll_page(state.select_section(section))
        },
        NavigationIntent::ScrollTo(target) => {
            scroll_page(state.request_scroll(target))
        },
        NavigationIntent::Teardown => {
            if state.is_torn_down() {
                return Task::none();
            }
            state.teardown();
            Task::done(NavigationEvent::Effect(NavigationEffect::TornDown))
        },
    }
}

fn scroll_page(offset: Option<f32>) -> Task<NavigationEvent> {
    match offset {
        Some(offset) => Task::done(NavigationEvent::Effect(
            NavigationEffect::ScrollPage { offset },
        )),
        None => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::reduce;
    use crate::widgets::navigation::anchors::AnchorMap;
    use crate::widgets::navigation::event::NavigationIntent;
    use crate::widgets::navigation::model::{
        MotionPreference, ScrollTarget, SectionId,
    };
    use crate::widgets::navigation::state::NavigationState;

    fn anchors() -> AnchorMap {
        [
            (SectionId::Home, 0.0),
            (SectionId::Projects, 700.0),
            (SectionId::Skills, 1500.0),
            (SectionId::Contact, 2300.0),
        ]
        .into_iter()
        .collect()
    }

    fn state(width: f32) -> NavigationState {
        let mut state = NavigationState::new(width, MotionPreference::Full);
        let _ = reduce(
            &mut state,
            NavigationIntent::LayoutChanged {
                anchors: anchors(),
                max_offset: 2600.0,
            },
        );
        state
    }

    #[test]
    fn given_scroll_intent_when_frame_arrives_then_active_section_updates() {
        let mut state = state(1280.0);

        let _ = reduce(&mut state, NavigationIntent::Scrolled { offset: 1450.0 });
        assert!(state.needs_frames());
        assert_eq!(state.active_section(), SectionId::Home);

        let mut now = Instant::now();
        let _ = reduce(&mut state, NavigationIntent::Frame(now));
        assert_eq!(state.active_section(), SectionId::Skills);

        // The back-to-top fade keeps frames coming for a little while.
        for _ in 0..100 {
            if !state.needs_frames() {
                break;
            }
            now += Duration::from_millis(16);
            let _ = reduce(&mut state, NavigationIntent::Frame(now));
        }
        assert!(!state.needs_frames());
        assert_eq!(state.active_section(), SectionId::Skills);
    }

    #[test]
    fn given_open_menu_when_dismissed_then_menu_closes() {
        let mut state = state(500.0);

        let _ = reduce(&mut state, NavigationIntent::ToggleMenu);
        assert!(state.is_menu_open());

        let _ = reduce(&mut state, NavigationIntent::DismissMenu);
        assert!(!state.is_menu_open());
    }

    #[test]
    fn given_select_intent_when_reduced_then_animation_starts_and_menu_closes() {
        let mut state = state(500.0);
        let _ = reduce(&mut state, NavigationIntent::ToggleMenu);

        let _ = reduce(
            &mut state,
            NavigationIntent::SelectSection(SectionId::Projects),
        );

        assert!(!state.is_menu_open());
        assert!(state.is_animating());
    }

    #[test]
    fn given_teardown_when_reduced_twice_then_shell_stays_torn_down() {
        let mut state = state(1280.0);

        let _ = reduce(&mut state, NavigationIntent::Teardown);
        let _ = reduce(&mut state, NavigationIntent::Teardown);
        let _ = reduce(&mut state, NavigationIntent::ScrollTo(ScrollTarget::Top));

        assert!(state.is_torn_down());
        assert!(!state.is_animating());
    }
}
