use iced::widget::{Stack, column, scrollable};
use iced::{Background, Color, Element, Length, Theme};

use super::{App, AppEvent};
use crate::fonts::FontsConfig;
use crate::layout::SectionMetrics;
use crate::panels::contact::{self, ContactProps};
use crate::panels::education::{self, EducationProps};
use crate::panels::footer::{self, FooterProps};
use crate::panels::hero::{self, HeroProps};
use crate::panels::skills::{self, SkillsProps};
use crate::theme::{ThemeProps, with_alpha};
use crate::widgets::navigation::model::{SectionId, Viewport};
use crate::widgets::navigation::view::back_to_top_button::{
    self, BackToTopButtonProps,
};
use crate::widgets::navigation::view::nav_bar::{self, NavBarProps};
use crate::widgets::navigation::view::overlay_menu::{self, OverlayMenuProps};
use crate::widgets::navigation::{NavigationEvent, NavigationIntent};

/// Widget id of the page scrollable targeted by scroll-to requests.
pub(crate) const PAGE_SCROLL_ID: &str = "page_scroll";

const SCROLLBAR_WIDTH: f32 = 6.0;
const SCROLLER_ALPHA: f32 = 0.6;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props: ThemeProps<'_> = ThemeProps::new(theme);
    let layout = app.state.layout();
    let viewport = layout.viewport();
    let fonts = match viewport {
        Viewport::Wide => &app.fonts,
        Viewport::Narrow => &app.compact_fonts,
    };

    let mut sections: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        layout
            .sections()
            .iter()
            .map(|metrics| view_section(app, *metrics, theme_props, fonts))
            .collect();
    sections.push(
        footer::view(FooterProps {
            height: layout.footer_height(),
            theme: theme_props,
            fonts,
        })
        .map(AppEvent::Footer),
    );

    let scroller = with_alpha(theme.iced_palette().accent, SCROLLER_ALPHA);
    let page = scrollable::Scrollable::new(
        column(sections).width(Length::Fill),
    )
    .id(PAGE_SCROLL_ID)
    .width(Length::Fill)
    .height(Length::Fill)
    .direction(scrollable::Direction::Vertical(
        scrollable::Scrollbar::new()
            .width(SCROLLBAR_WIDTH)
            .margin(0)
            .scroller_width(SCROLLBAR_WIDTH),
    ))
    .style(page_scroll_style(scroller))
    .on_scroll(|viewport| {
        AppEvent::Navigation(NavigationEvent::Intent(
            NavigationIntent::Scrolled {
                offset: viewport.absolute_offset().y,
            },
        ))
    });

    let vm = app.widgets.navigation.vm();
    let layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> = vec![
        page.into(),
        back_to_top_button::view(BackToTopButtonProps {
            vm,
            theme: theme_props,
        })
        .map(AppEvent::Navigation),
        overlay_menu::view(OverlayMenuProps {
            vm,
            theme: theme_props,
            fonts,
        })
        .map(AppEvent::Navigation),
        nav_bar::view(NavBarProps {
            vm,
            theme: theme_props,
            fonts,
        })
        .map(AppEvent::Navigation),
    ];

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Every panel is rendered at the height reserved for it in the page
/// layout so anchor tops match what is on screen.
fn view_section<'a>(
    app: &'a App,
    metrics: SectionMetrics,
    theme: ThemeProps<'a>,
    fonts: &'a FontsConfig,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let viewport = app.state.layout().viewport();
    let height = metrics.height;

    match metrics.section {
        SectionId::Home => hero::view(HeroProps {
            height,
            viewport,
            photo: app.photo.clone(),
            theme,
            fonts,
        })
        .map(AppEvent::Hero),
        SectionId::Projects => education::view(EducationProps {
            height,
            viewport,
            theme,
            fonts,
        }),
        SectionId::Skills => skills::view(SkillsProps {
            height,
            viewport,
            theme,
            fonts,
        }),
        SectionId::Contact => contact::view(ContactProps {
            height,
            viewport,
            theme,
            fonts,
        })
        .map(AppEvent::Contact),
    }
}

fn page_scroll_style(
    scroller: Color,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(SCROLLBAR_WIDTH / 2.0);

        style.vertical_rail.background = None;
        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;
        style.vertical_rail.scroller.background = Background::Color(scroller);

        style
    }
}
