//! Page geometry.
//!
//! Every section is rendered at the height computed here, so anchor tops
//! and the scrollable range are known without measuring widgets.

use iced::Size;

use crate::content::{
    ADDITIONAL_COMPETENCIES, CERTIFICATIONS, SKILL_CATEGORIES,
};
use crate::widgets::navigation::anchors::AnchorMap;
use crate::widgets::navigation::model::{SectionId, Viewport, registry};
use crate::widgets::navigation::viewport::classify;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 320.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

pub(crate) const NAV_BAR_HEIGHT: f32 = 64.0;
pub(crate) const CONTENT_MAX_WIDTH: f32 = 1100.0;
pub(crate) const SECTION_PADDING_Y: f32 = 80.0;
pub(crate) const PAGE_PADDING_X: f32 = 16.0;
pub(crate) const CARD_GAP: f32 = 24.0;
pub(crate) const BADGE_ROW_HEIGHT: f32 = 44.0;
pub(crate) const SKILL_ROW_HEIGHT: f32 = 64.0;

const HERO_MIN_HEIGHT_WIDE: f32 = 780.0;
const HERO_MIN_HEIGHT_NARROW: f32 = 1060.0;
const SECTION_HEADER_HEIGHT_WIDE: f32 = 150.0;
const SECTION_HEADER_HEIGHT_NARROW: f32 = 230.0;
const CARD_CHROME_HEIGHT: f32 = 96.0;
pub(crate) const EDUCATION_CARD_HEIGHT: f32 = 226.0;
pub(crate) const EXPERIENCE_CARD_HEIGHT: f32 = 266.0;
const CONTACT_CARD_HEIGHT_WIDE: f32 = 380.0;
const CONTACT_TOUCH_CARD_NARROW: f32 = 470.0;
const CONTACT_WORK_CARD_NARROW: f32 = 300.0;
const FOOTER_HEIGHT_WIDE: f32 = 200.0;
const FOOTER_HEIGHT_NARROW: f32 = 260.0;

/// Badges per row for the certification list.
pub(crate) fn certification_badges_per_row(viewport: Viewport) -> usize {
    match viewport {
        Viewport::Wide => 2,
        Viewport::Narrow => 1,
    }
}

/// Badges per row for the additional competencies list.
pub(crate) fn competency_badges_per_row(viewport: Viewport) -> usize {
    match viewport {
        Viewport::Wide => 4,
        Viewport::Narrow => 2,
    }
}

/// Placement of one section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SectionMetrics {
    pub(crate) section: SectionId,
    pub(crate) top: f32,
    pub(crate) height: f32,
}

/// Geometry of the whole page for one window size.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PageLayout {
    window: Size,
    viewport: Viewport,
    sections: Vec<SectionMetrics>,
    footer_height: f32,
}

impl PageLayout {
    /// Lay out the visible sections in registry order.
    pub(crate) fn compute(window: Size, hidden: &[SectionId]) -> Self {
        let viewport = classify(window.width);
        let footer_height = footer_height(viewport);

        let visible: Vec<SectionId> = registry()
            .iter()
            .map(|item| item.section)
            .filter(|section| !hidden.contains(section))
            .collect();

        let mut sections = Vec::with_capacity(visible.len());
        let mut top = 0.0;
        for (index, section) in visible.iter().copied().enumerate() {
            let mut height = section_height(section, window, viewport);
            if index + 1 == visible.len() {
                height = height.max(window.height - footer_height);
            }
            sections.push(SectionMetrics {
                section,
                top,
                height,
            });
            top += height;
        }

        Self {
            window,
            viewport,
            sections,
            footer_height,
        }
    }

    pub(crate) fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub(crate) fn sections(&self) -> &[SectionMetrics] {
        &self.sections
    }

    pub(crate) fn footer_height(&self) -> f32 {
        self.footer_height
    }

    #[cfg(test)]
    pub(crate) fn height_of(&self, section: SectionId) -> Option<f32> {
        self.sections
            .iter()
            .find(|metrics| metrics.section == section)
            .map(|metrics| metrics.height)
    }

    /// Total document height including the footer.
    pub(crate) fn content_height(&self) -> f32 {
        self.sections
            .iter()
            .map(|metrics| metrics.height)
            .sum::<f32>()
            + self.footer_height
    }

    /// Largest scroll offset the page can reach.
    pub(crate) fn max_offset(&self) -> f32 {
        (self.content_height() - self.window.height).max(0.0)
    }

    /// Anchor tops of the mounted sections.
    pub(crate) fn anchors(&self) -> AnchorMap {
        self.sections
            .iter()
            .map(|metrics| (metrics.section, metrics.top))
            .collect()
    }
}

fn section_height(section: SectionId, window: Size, viewport: Viewport) -> f32 {
    match section {
        SectionId::Home => hero_height(window, viewport),
        SectionId::Projects => projects_height(viewport),
        SectionId::Skills => skills_height(viewport),
        SectionId::Contact => contact_height(viewport),
    }
}

fn hero_height(window: Size, viewport: Viewport) -> f32 {
    let minimum = match viewport {
        Viewport::Wide => HERO_MIN_HEIGHT_WIDE,
        Viewport::Narrow => HERO_MIN_HEIGHT_NARROW,
    };
    window.height.max(minimum)
}

/// Height of the certifications card.
pub(crate) fn certifications_card_height(viewport: Viewport) -> f32 {
    card_height(
        rows(CERTIFICATIONS.len(), certification_badges_per_row(viewport)),
        BADGE_ROW_HEIGHT,
    )
}

/// Height of the additional competencies card.
pub(crate) fn competencies_card_height(viewport: Viewport) -> f32 {
    card_height(
        rows(
            ADDITIONAL_COMPETENCIES.len(),
            competency_badges_per_row(viewport),
        ),
        BADGE_ROW_HEIGHT,
    )
}

/// Heights of the two contact cards.
pub(crate) fn contact_card_heights(viewport: Viewport) -> (f32, f32) {
    match viewport {
        Viewport::Wide => (CONTACT_CARD_HEIGHT_WIDE, CONTACT_CARD_HEIGHT_WIDE),
        Viewport::Narrow => {
            (CONTACT_TOUCH_CARD_NARROW, CONTACT_WORK_CARD_NARROW)
        },
    }
}

fn projects_height(viewport: Viewport) -> f32 {
    let headers = 2.0 * header_height(viewport);
    let certifications = certifications_card_height(viewport);
    let education = EDUCATION_CARD_HEIGHT;
    let experience = EXPERIENCE_CARD_HEIGHT;

    let cards = match viewport {
        Viewport::Wide => education.max(experience) + CARD_GAP + certifications,
        Viewport::Narrow => {
            education + experience + certifications + 2.0 * CARD_GAP
        },
    };

    2.0 * SECTION_PADDING_Y + headers + cards
}

fn skills_height(viewport: Viewport) -> f32 {
    let categories: Vec<f32> = SKILL_CATEGORIES
        .iter()
        .map(|category| card_height(category.skills.len(), SKILL_ROW_HEIGHT))
        .collect();
    let competencies = competencies_card_height(viewport);

    let category_block = match viewport {
        Viewport::Wide => categories.iter().copied().fold(0.0, f32::max),
        Viewport::Narrow => {
            categories.iter().sum::<f32>()
                + CARD_GAP * categories.len().saturating_sub(1) as f32
        },
    };

    2.0 * SECTION_PADDING_Y
        + header_height(viewport)
        + category_block
        + CARD_GAP
        + competencies
}

fn contact_height(viewport: Viewport) -> f32 {
    let (touch, work) = contact_card_heights(viewport);
    let cards = match viewport {
        Viewport::Wide => touch.max(work),
        Viewport::Narrow => touch + CARD_GAP + work,
    };

    2.0 * SECTION_PADDING_Y + header_height(viewport) + cards
}

fn footer_height(viewport: Viewport) -> f32 {
    match viewport {
        Viewport::Wide => FOOTER_HEIGHT_WIDE,
        Viewport::Narrow => FOOTER_HEIGHT_NARROW,
    }
}

/// Height reserved for a section title plus subtitle.
pub(crate) fn header_height(viewport: Viewport) -> f32 {
    match viewport {
        Viewport::Wide => SECTION_HEADER_HEIGHT_WIDE,
        Viewport::Narrow => SECTION_HEADER_HEIGHT_NARROW,
    }
}

/// Height of a card holding `rows` rows of `row_height` each.
pub(crate) fn card_height(rows: usize, row_height: f32) -> f32 {
    CARD_CHROME_HEIGHT + rows as f32 * row_height
}

fn rows(items: usize, per_row: usize) -> usize {
    items.div_ceil(per_row.max(1))
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::{NAV_BAR_HEIGHT, PageLayout};
    use crate::widgets::navigation::anchors::AnchorSource;
    use crate::widgets::navigation::model::{
        ACTIVATION_THRESHOLD_PX, SectionId, Viewport,
    };

    fn sizes() -> [Size; 4] {
        [
            Size::new(320.0, 480.0),
            Size::new(400.0, 800.0),
            Size::new(1280.0, 800.0),
            Size::new(1920.0, 1200.0),
        ]
    }

    #[test]
    fn given_any_window_when_laid_out_then_sections_follow_registry_order() {
        for window in sizes() {
            let layout = PageLayout::compute(window, &[]);
            let order: Vec<SectionId> = layout
                .sections()
                .iter()
                .map(|metrics| metrics.section)
                .collect();

            assert_eq!(
                order,
                vec![
                    SectionId::Home,
                    SectionId::Projects,
                    SectionId::Skills,
                    SectionId::Contact
                ]
            );
            for pair in layout.sections().windows(2) {
                assert_eq!(pair[0].top + pair[0].height, pair[1].top);
            }
        }
    }

    #[test]
    fn given_any_window_when_laid_out_then_every_anchor_is_reachable() {
        for window in sizes() {
            let layout = PageLayout::compute(window, &[]);
            let anchors = layout.anchors();

            for metrics in layout.sections() {
                let top = anchors
                    .anchor_top(metrics.section)
                    .expect("visible section should have an anchor");
                assert!(top <= layout.max_offset(), "{:?}", metrics.section);
            }
        }
    }

    #[test]
    fn given_hero_when_laid_out_then_it_fills_the_first_screen() {
        for window in sizes() {
            let layout = PageLayout::compute(window, &[]);
            let hero = layout
                .height_of(SectionId::Home)
                .expect("hero should be visible");

            assert!(hero >= window.height);
            assert!(hero > NAV_BAR_HEIGHT + ACTIVATION_THRESHOLD_PX);
        }
    }

    #[test]
    fn given_hidden_section_when_laid_out_then_it_has_no_anchor() {
        let layout =
            PageLayout::compute(Size::new(1280.0, 800.0), &[SectionId::Skills]);

        assert_eq!(layout.anchors().anchor_top(SectionId::Skills), None);
        assert_eq!(layout.anchors().len(), 3);
        assert_eq!(layout.height_of(SectionId::Skills), None);
    }

    #[test]
    fn given_narrow_window_when_laid_out_then_stacked_cards_make_page_taller() {
        let narrow = PageLayout::compute(Size::new(400.0, 800.0), &[]);
        let wide = PageLayout::compute(Size::new(1280.0, 800.0), &[]);

        assert_eq!(narrow.viewport(), Viewport::Narrow);
        assert_eq!(wide.viewport(), Viewport::Wide);
        assert!(narrow.content_height() > wide.content_height());
    }
}
