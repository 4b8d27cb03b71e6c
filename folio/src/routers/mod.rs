use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod keyboard;
pub(crate) mod links;
pub(crate) mod navigation;
pub(crate) mod panels;
pub(crate) mod window;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => window::sync_layout(app),
        // Navigation widget
        AppEvent::Navigation(event) => navigation::route(app, event),
        // Page panels
        AppEvent::Hero(event) => panels::route_hero(event),
        AppEvent::Contact(event) => panels::route_contact(event),
        AppEvent::Footer(event) => panels::route_footer(event),
        // Direct operations
        AppEvent::OpenLink(uri) => links::open(&uri),
        AppEvent::Keyboard(event) => keyboard::route(app, event),
        AppEvent::Window(iced::window::Event::Opened { size, .. })
        | AppEvent::Window(iced::window::Event::Resized(size)) => {
            window::handle_resize(app, size)
        },
        AppEvent::Window(iced::window::Event::CloseRequested) => {
            window::handle_close_request(app)
        },
        AppEvent::Window(_) => Task::none(),
    }
}
