use iced::Task;
use iced::keyboard::{Event, Key, key};

use crate::app::{App, AppEvent};
use crate::widgets::navigation::NavigationIntent;

/// Escape dismisses the overlay menu; other keys are left to widgets.
pub(crate) fn route(app: &mut App, event: Event) -> Task<AppEvent> {
    let Event::KeyPressed { key, .. } = event else {
        return Task::none();
    };

    if matches!(key, Key::Named(key::Named::Escape))
        && app.widgets.navigation.vm().menu_open
    {
        return app
            .widgets
            .navigation
            .reduce(NavigationIntent::DismissMenu)
            .map(AppEvent::Navigation);
    }

    Task::none()
}
