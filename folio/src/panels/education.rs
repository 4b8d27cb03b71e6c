use iced::widget::{Space, column, container, row, text};
use iced::{Element, Length, alignment};

use crate::components::primitive::badge::{
    BadgeProps, BadgeVariant, view as badge_view,
};
use crate::components::primitive::card::{CardProps, view as card_view};
use crate::components::primitive::section_header::{
    SectionHeaderProps, view as section_header_view,
};
use crate::content::{
    CERTIFICATIONS, EDUCATION, EDUCATION_COPY, EXPERIENCE, PROJECTS_COPY,
};
use crate::fonts::FontsConfig;
use crate::layout::{
    CARD_GAP, CONTENT_MAX_WIDTH, EDUCATION_CARD_HEIGHT, EXPERIENCE_CARD_HEIGHT,
    PAGE_PADDING_X, SECTION_PADDING_Y, certification_badges_per_row,
    certifications_card_height, header_height,
};
use crate::theme::ThemeProps;
use crate::widgets::navigation::model::Viewport;

const CARD_TITLE_SPACING: f32 = 12.0;
const LINE_SPACING: f32 = 6.0;
const BADGE_SPACING: f32 = 8.0;
const SUBHEADER_SCALE: f32 = 0.8;

/// Props for rendering the education and experience panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EducationProps<'a> {
    pub(crate) height: f32,
    pub(crate) viewport: Viewport,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the projects section: degree, internship and certifications.
pub(crate) fn view<'a, Message: 'a>(
    props: EducationProps<'a>,
) -> Element<'a, Message> {
    let header_height = header_height(props.viewport);

    let projects_header = section_header_view(SectionHeaderProps {
        copy: PROJECTS_COPY,
        height: header_height,
        title_size: props.fonts.heading.title_size,
        theme: props.theme,
        fonts: props.fonts,
    });
    let education_header = section_header_view(SectionHeaderProps {
        copy: EDUCATION_COPY,
        height: header_height,
        title_size: props.fonts.heading.title_size * SUBHEADER_SCALE,
        theme: props.theme,
        fonts: props.fonts,
    });

    let education = card(
        props,
        "Education",
        column![
            text(EDUCATION.degree)
                .size(props.fonts.ui.size * 1.15)
                .font(props.fonts.heading.font_type)
                .color(props.theme.theme.iced_palette().accent),
            text(EDUCATION.school),
            text(format!("Expected Graduation: {}", EDUCATION.expected_year))
                .color(props.theme.theme.iced_palette().dim_foreground),
        ]
        .spacing(LINE_SPACING)
        .into(),
        EDUCATION_CARD_HEIGHT,
    );

    let highlights = EXPERIENCE
        .highlights
        .iter()
        .map(|line| text(format!("\u{2022}  {line}")).into());
    let experience = card(
        props,
        "Experience",
        column![
            text(EXPERIENCE.heading())
                .size(props.fonts.ui.size * 1.15)
                .font(props.fonts.heading.font_type)
                .color(props.theme.theme.iced_palette().accent),
            text(EXPERIENCE.period)
                .color(props.theme.theme.iced_palette().dim_foreground),
            column(highlights).spacing(LINE_SPACING),
        ]
        .spacing(LINE_SPACING)
        .into(),
        EXPERIENCE_CARD_HEIGHT,
    );

    let certifications = card(
        props,
        "Certifications",
        certification_rows(props),
        certifications_card_height(props.viewport),
    );

    let cards: Element<'a, Message> = match props.viewport {
        Viewport::Wide => column![
            row![education, experience].spacing(CARD_GAP),
            certifications
        ]
        .spacing(CARD_GAP)
        .into(),
        Viewport::Narrow => column![education, experience, certifications]
            .spacing(CARD_GAP)
            .into(),
    };

    let content = column![projects_header, education_header, cards]
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

fn card<'a, Message: 'a>(
    props: EducationProps<'a>,
    title: &'a str,
    body: Element<'a, Message>,
    height: f32,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();
    let content = column![
        text(title)
            .size(props.fonts.heading.card_size)
            .font(props.fonts.heading.font_type)
            .color(palette.bright_foreground),
        body,
    ]
    .spacing(CARD_TITLE_SPACING);

    card_view(CardProps {
        content: content.into(),
        height: Length::Fixed(height),
        theme: props.theme,
    })
}

fn certification_rows<'a, Message: 'a>(
    props: EducationProps<'a>,
) -> Element<'a, Message> {
    let per_row = certification_badges_per_row(props.viewport);
    let rows = CERTIFICATIONS.chunks(per_row).map(|chunk| {
        let badges = chunk.iter().map(|label| {
            badge_view(BadgeProps {
                label: *label,
                variant: BadgeVariant::Accent,
                theme: props.theme,
                fonts: props.fonts,
            })
        });
        row(badges)
            .spacing(BADGE_SPACING)
            .push(Space::new().width(Length::Fill))
            .into()
    });

    column(rows).spacing(BADGE_SPACING).into()
}
