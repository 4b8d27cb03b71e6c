use iced::Task;

use crate::app::AppEvent;
use crate::panels::contact::ContactEvent;
use crate::panels::footer::FooterEvent;
use crate::panels::hero::HeroEvent;
use crate::widgets::navigation::model::ScrollTarget;
use crate::widgets::navigation::{NavigationEvent, NavigationIntent};

/// Hero calls to action scroll through the navigation shell.
pub(crate) fn route_hero(event: HeroEvent) -> Task<AppEvent> {
    match event {
        HeroEvent::ScrollTo(section) => Task::done(AppEvent::Navigation(
            NavigationEvent::Intent(NavigationIntent::ScrollTo(
                ScrollTarget::Section(section),
            )),
        )),
        HeroEvent::OpenLink(uri) => {
            Task::done(AppEvent::OpenLink(String::from(uri)))
        },
    }
}

pub(crate) fn route_contact(event: ContactEvent) -> Task<AppEvent> {
    match event {
        ContactEvent::OpenLink(uri) => Task::done(AppEvent::OpenLink(uri)),
    }
}

pub(crate) fn route_footer(event: FooterEvent) -> Task<AppEvent> {
    match event {
        FooterEvent::OpenLink(uri) => Task::done(AppEvent::OpenLink(uri)),
    }
}
