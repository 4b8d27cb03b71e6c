use iced::widget::{
    Space, button, column, container, mouse_area, row, svg, text,
};
use iced::{Element, Length, alignment, mouse};

use super::super::event::{NavigationEvent, NavigationIntent};
use super::super::model::{NavItem, NavigationViewModel, SectionId};
use crate::components::primitive::icon_button::{
    IconButtonProps, view as icon_button_view,
};
use crate::content::PROFILE;
use crate::fonts::FontsConfig;
use crate::icons;
use crate::layout::{CONTENT_MAX_WIDTH, NAV_BAR_HEIGHT, PAGE_PADDING_X};
use crate::theme::{IcedColorPalette, ThemeProps, with_alpha};

const BRAND_LOGO_SIZE: f32 = 28.0;
const BRAND_FONT_SCALE: f32 = 1.25;
const BRAND_SPACING: f32 = 10.0;
const ITEM_SPACING: f32 = 8.0;
const ITEM_PADDING: [f32; 2] = [6.0, 10.0];
const ITEM_UNDERLINE_HEIGHT: f32 = 2.0;
const TOGGLE_BUTTON_SIZE: f32 = 36.0;
const TOGGLE_ICON_SIZE: f32 = 24.0;
const NAV_BAR_ALPHA: f32 = 0.8;

/// Props for rendering the fixed navigation bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavBarProps<'a> {
    pub(crate) vm: NavigationViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the brand mark plus either the inline items or the menu toggle.
pub(crate) fn view<'a>(props: NavBarProps<'a>) -> Element<'a, NavigationEvent> {
    let palette = props.theme.theme.iced_palette();

    let trailing = if props.vm.viewport.is_wide() {
        inline_items(props.vm, palette, props.fonts)
    } else {
        menu_toggle(props)
    };

    let bar = row![
        brand(palette, props.fonts),
        Space::new().width(Length::Fill),
        trailing
    ]
    .align_y(alignment::Vertical::Center)
    .width(Length::Fill)
    .height(Length::Fill);

    let inner = container(bar)
        .max_width(CONTENT_MAX_WIDTH)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([0.0, PAGE_PADDING_X]);

    let background = with_alpha(palette.background, NAV_BAR_ALPHA);
    let border = with_alpha(palette.dim_accent, 0.3);

    container(inner)
        .width(Length::Fill)
        .height(Length::Fixed(NAV_BAR_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            border: iced::Border {
                width: 1.0,
                color: border,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn brand<'a>(
    palette: &IcedColorPalette,
    fonts: &'a FontsConfig,
) -> Element<'a, NavigationEvent> {
    let accent = palette.accent;
    let size = fonts.ui.size * BRAND_FONT_SCALE;

    let logo = svg::Svg::new(svg::Handle::from_memory(icons::LOGO))
        .width(Length::Fixed(BRAND_LOGO_SIZE))
        .height(Length::Fixed(BRAND_LOGO_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(accent),
        });

    let name = row![
        text(PROFILE.first_name)
            .size(size)
            .font(fonts.heading.font_type)
            .color(palette.bright_foreground),
        text(format!(" {}", PROFILE.last_name))
            .size(size)
            .font(fonts.heading.font_type)
            .color(accent),
    ];

    let content = row![logo, name]
        .spacing(BRAND_SPACING)
        .align_y(alignment::Vertical::Center);

    mouse_area(content)
        .on_press(NavigationEvent::Intent(NavigationIntent::SelectSection(
            SectionId::Home,
        )))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

fn inline_items<'a>(
    vm: NavigationViewModel,
    palette: &IcedColorPalette,
    fonts: &'a FontsConfig,
) -> Element<'a, NavigationEvent> {
    let items = vm.items.iter().map(|item| {
        let is_active = item.section == vm.active_section;
        nav_item(*item, is_active, palette, fonts)
    });

    row(items)
        .spacing(ITEM_SPACING)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn nav_item<'a>(
    item: NavItem,
    is_active: bool,
    palette: &IcedColorPalette,
    fonts: &'a FontsConfig,
) -> Element<'a, NavigationEvent> {
    let accent = palette.accent;
    let idle = palette.foreground;
    let label_color = if is_active { accent } else { idle };

    let label = text(item.label)
        .size(fonts.ui.size)
        .font(fonts.ui.font_type)
        .color(label_color);

    let underline_color = if is_active {
        accent
    } else {
        iced::Color::TRANSPARENT
    };
    let underline = container(text(""))
        .width(Length::Fill)
        .height(Length::Fixed(ITEM_UNDERLINE_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(underline_color.into()),
            ..Default::default()
        });

    let content = column![label, underline]
        .spacing(2.0)
        .width(Length::Shrink)
        .align_x(alignment::Horizontal::Center);

    button(content)
        .on_press(NavigationEvent::Intent(NavigationIntent::SelectSection(
            item.section,
        )))
        .padding(ITEM_PADDING)
        .style(move |_, status| {
            let text_color = if matches!(status, button::Status::Hovered) {
                accent
            } else {
                label_color
            };
            button::Style {
                text_color,
                ..button::Style::default()
            }
        })
        .into()
}

fn menu_toggle(props: NavBarProps<'_>) -> Element<'_, NavigationEvent> {
    let icon = if props.vm.menu_open {
        icons::CLOSE
    } else {
        icons::MENU
    };

    icon_button_view(IconButtonProps {
        icon,
        theme: props.theme,
        size: TOGGLE_BUTTON_SIZE,
        icon_size: TOGGLE_ICON_SIZE,
    })
    .map(|_| NavigationEvent::Intent(NavigationIntent::ToggleMenu))
}
