use iced::{Size, Task};

use crate::app::{App, AppEvent};
use crate::widgets::navigation::NavigationIntent;

/// Handle window open and resize events and propagate the new layout.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    if app.widgets.navigation.is_torn_down() {
        return Task::none();
    }

    if !app.state.set_window_size(size) {
        return Task::none();
    }

    log::debug!("window resized to {}x{}", size.width, size.height);
    let resized = app
        .widgets
        .navigation
        .reduce(NavigationIntent::Resized { width: size.width })
        .map(AppEvent::Navigation);

    Task::batch([resized, sync_layout(app)])
}

/// Hand the current anchor tops and scroll range to the navigation shell.
pub(crate) fn sync_layout(app: &mut App) -> Task<AppEvent> {
    let layout = app.state.layout();
    let intent = NavigationIntent::LayoutChanged {
        anchors: layout.anchors(),
        max_offset: layout.max_offset(),
    };

    app.widgets
        .navigation
        .reduce(intent)
        .map(AppEvent::Navigation)
}

/// Tear the navigation shell down; the window closes once it reports back.
pub(crate) fn handle_close_request(app: &mut App) -> Task<AppEvent> {
    if app.widgets.navigation.is_torn_down() {
        return iced::window::latest().and_then(iced::window::close);
    }

    app.widgets
        .navigation
        .reduce(NavigationIntent::Teardown)
        .map(AppEvent::Navigation)
}
