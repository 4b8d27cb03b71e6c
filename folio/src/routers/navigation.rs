use iced::Task;
use iced::widget::operation::scroll_to;
use iced::widget::scrollable::AbsoluteOffset;

use crate::app::view::PAGE_SCROLL_ID;
use crate::app::{App, AppEvent};
use crate::widgets::navigation::{
    NavigationEffect, NavigationEvent, NavigationIntent,
};

/// Route a navigation event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: NavigationEvent) -> Task<AppEvent> {
    match event {
        NavigationEvent::Intent(intent) => route_intent(app, intent),
        NavigationEvent::Effect(effect) => route_effect_event(effect),
    }
}

fn route_intent(app: &mut App, intent: NavigationIntent) -> Task<AppEvent> {
    app.widgets
        .navigation
        .reduce(intent)
        .map(AppEvent::Navigation)
}

fn route_effect_event(effect: NavigationEffect) -> Task<AppEvent> {
    match effect {
        NavigationEffect::ScrollPage { offset } => {
            scroll_to(PAGE_SCROLL_ID, AbsoluteOffset { x: 0.0, y: offset })
        },
        NavigationEffect::TornDown => {
            log::info!("navigation shell torn down, closing window");
            iced::window::latest().and_then(iced::window::close)
        },
    }
}
