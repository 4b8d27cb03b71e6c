use iced::widget::{column, container, row, svg, text};
use iced::{Element, Length, alignment};

use crate::components::primitive::card::{CardProps, view as card_view};
use crate::components::primitive::link_button::{
    LinkButtonProps, LinkButtonVariant, view as link_button_view,
};
use crate::components::primitive::section_header::{
    SectionHeaderProps, view as section_header_view,
};
use crate::content::{
    CONTACT, CONTACT_COPY, GET_IN_TOUCH_COPY, PROFILE, SectionCopy,
    SocialKind, VIEW_WORK_COPY, social,
};
use crate::fonts::FontsConfig;
use crate::icons;
use crate::layout::{
    CARD_GAP, CONTENT_MAX_WIDTH, PAGE_PADDING_X, SECTION_PADDING_Y,
    contact_card_heights, header_height,
};
use crate::theme::ThemeProps;
use crate::widgets::navigation::model::Viewport;

const CARD_SPACING: f32 = 16.0;
const DETAIL_SPACING: f32 = 12.0;
const DETAIL_ICON_SIZE: f32 = 20.0;
const BUTTON_SPACING: f32 = 12.0;

/// Events emitted by the contact panel.
#[derive(Debug, Clone)]
pub(crate) enum ContactEvent {
    OpenLink(String),
}

/// Props for rendering the contact panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContactProps<'a> {
    pub(crate) height: f32,
    pub(crate) viewport: Viewport,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the contact section with its two cards.
pub(crate) fn view<'a>(props: ContactProps<'a>) -> Element<'a, ContactEvent> {
    let header = section_header_view(SectionHeaderProps {
        copy: CONTACT_COPY,
        height: header_height(props.viewport),
        title_size: props.fonts.heading.title_size,
        theme: props.theme,
        fonts: props.fonts,
    });

    let (touch_height, work_height) = contact_card_heights(props.viewport);
    let touch = get_in_touch_card(props, touch_height);
    let work = view_work_card(props, work_height);

    let cards: Element<'a, ContactEvent> = match props.viewport {
        Viewport::Wide => row![touch, work].spacing(CARD_GAP).into(),
        Viewport::Narrow => column![touch, work].spacing(CARD_GAP).into(),
    };

    let content = column![header, cards]
        .width(Length::Fill)
        .max_width(CONTENT_MAX_WIDTH);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(props.height))
        .padding([SECTION_PADDING_Y, PAGE_PADDING_X])
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top)
        .into()
}

fn get_in_touch_card<'a>(
    props: ContactProps<'a>,
    height: f32,
) -> Element<'a, ContactEvent> {
    let details = column![
        detail_row(props, icons::MAIL, CONTACT.email),
        detail_row(props, icons::PHONE, CONTACT.phone),
    ]
    .spacing(DETAIL_SPACING);

    let mut buttons = vec![link_button(
        props,
        "Email Me",
        icons::MAIL,
        LinkButtonVariant::Primary,
        CONTACT.mailto(),
    )];
    for kind in [SocialKind::ProfessionalNetwork, SocialKind::CodeHost] {
        if let Some(link) = social(kind) {
            buttons.push(link_button(
                props,
                link.label,
                icons::social_icon(kind),
                LinkButtonVariant::Outline,
                link.url.to_string(),
            ));
        }
    }
    if let Some(link) = social(SocialKind::Microblog) {
        buttons.push(link_button(
            props,
            "Follow on X",
            icons::X_LOGO,
            LinkButtonVariant::Outline,
            link.url.to_string(),
        ));
    }

    card(
        props,
        GET_IN_TOUCH_COPY,
        column![details, button_group(props.viewport, buttons)]
            .spacing(CARD_SPACING)
            .into(),
        height,
    )
}

fn view_work_card<'a>(
    props: ContactProps<'a>,
    height: f32,
) -> Element<'a, ContactEvent> {
    let mut buttons = Vec::with_capacity(2);
    if let Some(link) = social(SocialKind::CodeHost) {
        buttons.push(link_button(
            props,
            "GitHub",
            icons::GITHUB,
            LinkButtonVariant::Primary,
            link.url.to_string(),
        ));
    }
    buttons.push(link_button(
        props,
        "Download CV",
        icons::DOWNLOAD,
        LinkButtonVariant::Outline,
        PROFILE.resume_url.to_string(),
    ));

    card(
        props,
        VIEW_WORK_COPY,
        button_group(props.viewport, buttons),
        height,
    )
}

fn card<'a>(
    props: ContactProps<'a>,
    copy: SectionCopy,
    body: Element<'a, ContactEvent>,
    height: f32,
) -> Element<'a, ContactEvent> {
    let palette = props.theme.theme.iced_palette();
    let content = column![
        text(copy.title)
            .size(props.fonts.heading.card_size)
            .font(props.fonts.heading.font_type)
            .color(palette.bright_foreground),
        text(copy.subtitle).color(palette.dim_foreground),
        body,
    ]
    .spacing(CARD_SPACING);

    card_view(CardProps {
        content: content.into(),
        height: Length::Fixed(height),
        theme: props.theme,
    })
}

fn detail_row<'a>(
    props: ContactProps<'a>,
    icon: &'static [u8],
    value: &'static str,
) -> Element<'a, ContactEvent> {
    let palette = props.theme.theme.iced_palette();
    let accent = palette.accent;

    row![
        svg::Svg::new(svg::Handle::from_memory(icon))
            .width(Length::Fixed(DETAIL_ICON_SIZE))
            .height(Length::Fixed(DETAIL_ICON_SIZE))
            .style(move |_, _| svg::Style {
                color: Some(accent)
            }),
        text(value).color(palette.foreground),
    ]
    .spacing(DETAIL_SPACING)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn link_button<'a>(
    props: ContactProps<'a>,
    label: &'a str,
    icon: &'static [u8],
    variant: LinkButtonVariant,
    uri: String,
) -> Element<'a, ContactEvent> {
    link_button_view(LinkButtonProps {
        label,
        icon: Some(icon),
        variant,
        fill_width: !props.viewport.is_wide(),
        theme: props.theme,
        fonts: props.fonts,
    })
    .map(move |_| ContactEvent::OpenLink(uri.clone()))
}

/// Wide cards keep buttons in pairs; narrow cards stack them.
fn button_group<'a>(
    viewport: Viewport,
    buttons: Vec<Element<'a, ContactEvent>>,
) -> Element<'a, ContactEvent> {
    match viewport {
        Viewport::Wide => {
            let mut rows = Vec::new();
            let mut buttons = buttons.into_iter();
            while let Some(first) = buttons.next() {
                let mut pair = row![first].spacing(BUTTON_SPACING);
                if let Some(second) = buttons.next() {
                    pair = pair.push(second);
                }
                rows.push(pair.into());
            }
            column(rows).spacing(BUTTON_SPACING).into()
        },
        Viewport::Narrow => column(buttons)
            .spacing(BUTTON_SPACING)
            .width(Length::Fill)
            .into(),
    }
}
