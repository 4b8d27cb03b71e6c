use iced::{Subscription, window};

use crate::app::{App, AppEvent};
use crate::widgets::navigation::{NavigationEvent, NavigationIntent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));

    // After teardown only the close handshake is left to observe.
    if app.widgets.navigation.is_torn_down() {
        return win_subs;
    }

    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);
    let mut subs = vec![win_subs, key_subs];

    // Frame clock for scroll animation and the back-to-top fade.
    if app.widgets.navigation.needs_frames() {
        let frames = window::frames().map(|now| {
            AppEvent::Navigation(NavigationEvent::Intent(
                NavigationIntent::Frame(now),
            ))
        });
        subs.push(frames);
    }

    Subscription::batch(subs)
}
