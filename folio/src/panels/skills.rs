use iced::widget::{Space, column, container, row, text};
use iced::{Element, Length, alignment};

use crate::components::primitive::badge::{
    BadgeProps, BadgeVariant, view as badge_view,
};
use crate::components::primitive::card::{CardProps, view as card_view};
use crate::components::primitive::progress_bar::{
    ProgressBarProps, view as progress_bar_view,
};
use crate::components::primitive::section_header::{
    SectionHeaderProps, view as section_header_view,
};
use crate::content::{
    ADDITIONAL_COMPETENCIES, SKILL_CATEGORIES, SKILLS_COPY, Skill,
    SkillCategory,
};
use crate::fonts::FontsConfig;
use crate::layout::{
    CARD_GAP, CONTENT_MAX_WIDTH, PAGE_PADDING_X, SECTION_PADDING_Y,
    SKILL_ROW_HEIGHT, card_height, competencies_card_height,
    competency_badges_per_row, header_height,
};
use crate::theme::{StyleOverrides, ThemeProps, with_alpha};
use crate::widgets::navigation::model::Viewport;

const CARD_TITLE_SPACING: f32 = 16.0;
const SKILL_LABEL_SPACING: f32 = 8.0;
const PROGRESS_BAR_HEIGHT: f32 = 8.0;
const BADGE_SPACING: f32 = 8.0;

/// Props for rendering the skills panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SkillsProps<'a> {
    pub(crate) height: f32,
    pub(crate) viewport: Viewport,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render skill categories with progress bars and the competency cloud.
pub(crate) fn view<'a, Message: 'a>(
    props: SkillsProps<'a>,
) -> Element<'a, Message> {
    let header = section_header_view(SectionHeaderProps {
        copy: SKILLS_COPY,
        height: header_height(props.viewport),
        title_size: props.fonts.heading.title_size,
        theme: props.theme,
        fonts: props.fonts,
    });

    let tallest = SKILL_CATEGORIES
        .iter()
        .map(|category| category.skills.len())
        .max()
        .unwrap_or(0);
    let cards = SKILL_CATEGORIES.iter().map(|category| {
        let rows = match props.viewport {
            Viewport::Wide => tallest,
            Viewport::Narrow => category.skills.len(),
        };
        category_card(props, category, card_height(rows, SKILL_ROW_HEIGHT))
    });
    let categories: Element<'a, Message> = match props.viewport {
        Viewport::Wide => row(cards).spacing(CARD_GAP).into(),
        Viewport::Narrow => column(cards).spacing(CARD_GAP).into(),
    };

    let content = column![
        header,
        categories,
        Space::new().height(Length::Fixed(CARD_GAP)),
        competencies(props),
    ]
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

fn category_card<'a, Message: 'a>(
    props: SkillsProps<'a>,
    category: &'a SkillCategory,
    height: f32,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();
    let skills = category
        .skills
        .iter()
        .map(|skill| skill_row(props, skill));

    let content = column![
        text(category.title)
            .size(props.fonts.heading.card_size)
            .font(props.fonts.heading.font_type)
            .color(palette.bright_foreground),
        column(skills),
    ]
    .spacing(CARD_TITLE_SPACING);

    card_view(CardProps {
        content: content.into(),
        height: Length::Fixed(height),
        theme: props.theme,
    })
}

fn skill_row<'a, Message: 'a>(
    props: SkillsProps<'a>,
    skill: &'a Skill,
) -> Element<'a, Message> {
    let percent = format!("{}%", skill.percent);

    let label = row![
        text(skill.name)
            .size(props.fonts.ui.size)
            .width(Length::Fill),
        badge_view(BadgeProps {
            label: &percent,
            variant: BadgeVariant::Accent,
            theme: props.theme,
            fonts: props.fonts,
        }),
    ]
    .spacing(SKILL_LABEL_SPACING)
    .align_y(alignment::Vertical::Center);

    let bar = progress_bar_view(ProgressBarProps {
        ratio: skill.ratio(),
        height: PROGRESS_BAR_HEIGHT,
        theme: props.theme,
    });

    column![label, bar]
        .spacing(SKILL_LABEL_SPACING)
        .height(Length::Fixed(SKILL_ROW_HEIGHT))
        .into()
}

fn competencies<'a, Message: 'a>(
    props: SkillsProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();
    let per_row = competency_badges_per_row(props.viewport);

    let rows = ADDITIONAL_COMPETENCIES.chunks(per_row).map(|chunk| {
        let badges = chunk.iter().map(|label| {
            badge_view(BadgeProps {
                label: *label,
                variant: BadgeVariant::Outline,
                theme: props.theme,
                fonts: props.fonts,
            })
        });
        row(badges).spacing(BADGE_SPACING).into()
    });

    let content = column![
        text("Additional Competencies")
            .size(props.fonts.heading.card_size)
            .font(props.fonts.heading.font_type)
            .color(palette.bright_foreground),
        column(rows).spacing(BADGE_SPACING),
    ]
    .spacing(CARD_TITLE_SPACING);

    card_view(CardProps {
        content: content.into(),
        height: Length::Fixed(competencies_card_height(props.viewport)),
        theme: props.theme.with_overrides(StyleOverrides {
            background: Some(with_alpha(palette.surface_raised, 0.7)),
            ..StyleOverrides::default()
        }),
    })
}
