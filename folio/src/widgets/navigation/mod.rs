pub(crate) mod anchors;
mod back_to_top;
mod dispatcher;
pub(crate) mod event;
mod menu;
pub(crate) mod model;
mod observer;
mod reducer;
mod state;
pub(crate) mod view;
pub(crate) mod viewport;

use iced::Task;

pub(crate) use self::event::{
    NavigationEffect, NavigationEvent, NavigationIntent,
};
use self::model::{MotionPreference, NavigationViewModel};
use self::state::NavigationState;

/// Navigation shell: section tracking, scroll-to requests, the responsive
/// menu and the back-to-top control.
pub(crate) struct NavigationWidget {
    state: NavigationState,
}

impl NavigationWidget {
    /// Create the shell for a window of the given width.
    pub(crate) fn new(window_width: f32, motion: MotionPreference) -> Self {
        Self {
            state: NavigationState::new(window_width, motion),
        }
    }

    /// Reduce a navigation intent into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        intent: NavigationIntent,
    ) -> Task<NavigationEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Whether the frame subscription must stay active.
    pub(crate) fn needs_frames(&self) -> bool {
        self.state.needs_frames()
    }

    pub(crate) fn is_torn_down(&self) -> bool {
        self.state.is_torn_down()
    }

    /// Produce the navigation view model for rendering.
    pub(crate) fn vm(&self) -> NavigationViewModel {
        self.state.vm()
    }
}
