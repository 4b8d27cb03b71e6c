#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::path::Path;

use iced::widget::image;
use iced::{Element, Size, Subscription, Task, Theme};

use crate::config::{self, FolioConfig};
use crate::fonts::FontsConfig;
use crate::icons::PHOTO_PATH;
use crate::panels::contact::ContactEvent;
use crate::panels::footer::FooterEvent;
use crate::panels::hero::HeroEvent;
use crate::state::State;
use crate::theme::{AppTheme, ThemeManager};
use crate::widgets::navigation::{NavigationEvent, NavigationWidget};

pub(crate) const INITIAL_WINDOW_WIDTH: f32 = 1280.0;
pub(crate) const INITIAL_WINDOW_HEIGHT: f32 = 800.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Navigation widget
    Navigation(NavigationEvent),
    // Page panels
    Hero(HeroEvent),
    Contact(ContactEvent),
    Footer(FooterEvent),
    // Direct operations
    OpenLink(String),
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) navigation: NavigationWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) compact_fonts: FontsConfig,
    pub(crate) photo: Option<image::Handle>,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = config::load();
        let theme_manager = ThemeManager::new(config.theme);
        log_startup(&config, theme_manager.current());

        let window_size = Size {
            width: INITIAL_WINDOW_WIDTH,
            height: INITIAL_WINDOW_HEIGHT,
        };
        let state = State::new(window_size, config.hidden_sections());

        let widgets = Widgets {
            navigation: NavigationWidget::new(
                window_size.width,
                config.motion(),
            ),
        };

        let app = App {
            theme_manager,
            fonts: FontsConfig::default(),
            compact_fonts: FontsConfig::default().for_narrow_viewport(),
            photo: load_photo(Path::new(PHOTO_PATH)),
            state,
            widgets,
        };

        (app, Task::done(()).map(|_: ()| AppEvent::IcedReady))
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Harmandeep Singh | Portfolio")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

fn log_startup(config: &FolioConfig, theme: &AppTheme) {
    log::info!(
        "starting with theme `{}`, reduced motion {}",
        theme.id(),
        config.reduced_motion
    );
}

/// The portrait is optional; without it the hero shows text only.
fn load_photo(path: &Path) -> Option<image::Handle> {
    if path.is_file() {
        Some(image::Handle::from_path(path))
    } else {
        log::debug!("no portrait at {}", path.display());
        None
    }
}
