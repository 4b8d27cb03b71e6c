use iced::widget::{
    Space, column, container, image, mouse_area, row, svg, text,
};
use iced::{Element, Length, alignment, gradient, mouse};

use crate::components::primitive::icon_button::{
    IconButtonProps, view as icon_button_view,
};
use crate::components::primitive::link_button::{
    LinkButtonProps, LinkButtonVariant, view as link_button_view,
};
use crate::content::{PROFILE, SOCIAL_LINKS};
use crate::fonts::FontsConfig;
use crate::icons;
use crate::layout::{NAV_BAR_HEIGHT, PAGE_PADDING_X};
use crate::theme::{ThemeProps, with_alpha};
use crate::widgets::navigation::model::{SectionId, Viewport};

const PHOTO_SIZE: f32 = 160.0;
const PHOTO_BORDER: f32 = 4.0;
const DESCRIPTION_MAX_WIDTH: f32 = 640.0;
const BLOCK_SPACING: f32 = 20.0;
const ACTION_SPACING: f32 = 16.0;
const SOCIAL_SPACING: f32 = 12.0;
const SOCIAL_BUTTON_SIZE: f32 = 40.0;
const SOCIAL_ICON_SIZE: f32 = 24.0;
const SCROLL_HINT_SIZE: f32 = 32.0;
const SCROLL_HINT_MARGIN: f32 = 24.0;

/// Events emitted by the hero panel.
#[derive(Debug, Clone)]
pub(crate) enum HeroEvent {
    ScrollTo(SectionId),
    OpenLink(&'static str),
}

/// Props for rendering the hero panel.
#[derive(Debug, Clone)]
pub(crate) struct HeroProps<'a> {
    pub(crate) height: f32,
    pub(crate) viewport: Viewport,
    pub(crate) photo: Option<image::Handle>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the full-screen introduction.
pub(crate) fn view<'a>(props: HeroProps<'a>) -> Element<'a, HeroEvent> {
    let palette = props.theme.theme.iced_palette();
    let fonts = props.fonts;

    let mut content = column![]
        .spacing(BLOCK_SPACING)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    if let Some(handle) = props.photo.clone() {
        content = content.push(photo(handle, palette.accent));
    }

    content = content
        .push(
            text(PROFILE.greeting)
                .size(fonts.ui.size * 1.25)
                .font(fonts.mono)
                .color(palette.accent),
        )
        .push(
            text(PROFILE.full_name())
                .size(fonts.heading.display_size)
                .font(fonts.heading.font_type)
                .color(palette.bright_foreground)
                .align_x(alignment::Horizontal::Center),
        )
        .push(
            text(PROFILE.tagline)
                .size(fonts.heading.title_size)
                .font(fonts.heading.font_type)
                .color(palette.bright_accent)
                .align_x(alignment::Horizontal::Center),
        )
        .push(
            container(
                text(PROFILE.description)
                    .size(fonts.ui.size * 1.15)
                    .color(palette.dim_foreground)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            )
            .max_width(DESCRIPTION_MAX_WIDTH),
        )
        .push(actions(&props))
        .push(socials(&props));

    let scroll_hint = mouse_area(
        svg::Svg::new(svg::Handle::from_memory(icons::ARROW_DOWN))
            .width(Length::Fixed(SCROLL_HINT_SIZE))
            .height(Length::Fixed(SCROLL_HINT_SIZE))
            .style({
                let color = palette.accent;
                move |_, _| svg::Style { color: Some(color) }
            }),
    )
    .on_press(HeroEvent::ScrollTo(SectionId::Projects))
    .interaction(mouse::Interaction::Pointer);

    let body = column![
        Space::new().height(Length::Fixed(NAV_BAR_HEIGHT)),
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding([0.0, PAGE_PADDING_X])
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
        scroll_hint,
        Space::new().height(Length::Fixed(SCROLL_HINT_MARGIN)),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    let glow = with_alpha(palette.deep_accent, 0.45);
    let background = palette.background;

    container(body)
        .width(Length::Fill)
        .height(Length::Fixed(props.height))
        .style(move |_| iced::widget::container::Style {
            background: Some(iced::Background::Gradient(
                iced::Gradient::Linear(
                    gradient::Linear::new(iced::Radians(std::f32::consts::PI))
                        .add_stop(0.0, glow)
                        .add_stop(0.6, background),
                ),
            )),
            ..Default::default()
        })
        .into()
}

fn photo<'a>(
    handle: image::Handle,
    accent: iced::Color,
) -> Element<'a, HeroEvent> {
    let picture = image(handle)
        .width(Length::Fixed(PHOTO_SIZE))
        .height(Length::Fixed(PHOTO_SIZE))
        .content_fit(iced::ContentFit::Cover);

    container(picture)
        .padding(PHOTO_BORDER)
        .style(move |_| iced::widget::container::Style {
            border: iced::Border {
                width: PHOTO_BORDER,
                color: accent,
                radius: (PHOTO_SIZE / 2.0 + PHOTO_BORDER).into(),
            },
            ..Default::default()
        })
        .into()
}

fn actions<'a>(props: &HeroProps<'a>) -> Element<'a, HeroEvent> {
    let fill_width = !props.viewport.is_wide();
    let button = |label: &'a str,
                  icon: Option<&'static [u8]>,
                  variant: LinkButtonVariant| {
        link_button_view(LinkButtonProps {
            label,
            icon,
            variant,
            fill_width,
            theme: props.theme,
            fonts: props.fonts,
        })
    };

    let view_projects =
        button("View Projects", None, LinkButtonVariant::Primary)
            .map(|_| HeroEvent::ScrollTo(SectionId::Projects));
    let contact_me = button("Contact Me", None, LinkButtonVariant::Outline)
        .map(|_| HeroEvent::ScrollTo(SectionId::Contact));
    let resume = button(
        "Download Resume",
        Some(icons::DOWNLOAD),
        LinkButtonVariant::Outline,
    )
    .map(|_| HeroEvent::OpenLink(PROFILE.resume_url));

    match props.viewport {
        Viewport::Wide => row![view_projects, contact_me, resume]
            .spacing(ACTION_SPACING)
            .align_y(alignment::Vertical::Center)
            .into(),
        Viewport::Narrow => column![view_projects, contact_me, resume]
            .spacing(ACTION_SPACING)
            .width(Length::Fill)
            .into(),
    }
}

fn socials<'a>(props: &HeroProps<'a>) -> Element<'a, HeroEvent> {
    let buttons = SOCIAL_LINKS.iter().map(|link| {
        let url = link.url;
        icon_button_view(IconButtonProps {
            icon: icons::social_icon(link.kind),
            theme: props.theme,
            size: SOCIAL_BUTTON_SIZE,
            icon_size: SOCIAL_ICON_SIZE,
        })
        .map(move |_| HeroEvent::OpenLink(url))
    });

    row(buttons)
        .spacing(SOCIAL_SPACING)
        .align_y(alignment::Vertical::Center)
        .into()
}
