/// Distance from the viewport top that a section's top edge must cross
/// before the section becomes active.
pub(crate) const ACTIVATION_THRESHOLD_PX: f32 = 100.0;

/// Windows at least this wide use the inline desktop nav bar.
pub(crate) const WIDE_VIEWPORT_MIN_WIDTH: f32 = 768.0;

/// Scroll offset past which the back-to-top control is shown.
pub(crate) const BACK_TO_TOP_THRESHOLD_PX: f32 = 300.0;

/// Page sections that own an anchor in the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum SectionId {
    Home,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    /// Anchor key assigned to the section's container.
    pub(crate) fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    /// Resolve an anchor key back to its section.
    pub(crate) fn from_anchor(anchor: &str) -> Option<Self> {
        SECTION_REGISTRY
            .iter()
            .map(|item| item.section)
            .find(|section| section.anchor() == anchor)
    }
}

/// One entry of the section registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NavItem {
    pub(crate) label: &'static str,
    pub(crate) section: SectionId,
}

/// Ordered registry of navigable sections. Order drives nav rendering and
/// the order in which the scroll observer evaluates candidates.
pub(crate) const SECTION_REGISTRY: [NavItem; 4] = [
    NavItem {
        label: "Home",
        section: SectionId::Home,
    },
    NavItem {
        label: "Projects",
        section: SectionId::Projects,
    },
    NavItem {
        label: "Skills",
        section: SectionId::Skills,
    },
    NavItem {
        label: "Contact",
        section: SectionId::Contact,
    },
];

/// Return the section registry in document order.
pub(crate) fn registry() -> &'static [NavItem] {
    &SECTION_REGISTRY
}

/// Section that is active before any scroll sample arrives.
pub(crate) fn initial_section() -> SectionId {
    SECTION_REGISTRY[0].section
}

/// Destination of a scroll-to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScrollTarget {
    /// Document origin, used by the back-to-top control.
    Top,
    Section(SectionId),
}

/// Width classification of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Viewport {
    Narrow,
    Wide,
}

impl Viewport {
    pub(crate) fn is_wide(self) -> bool {
        matches!(self, Viewport::Wide)
    }
}

/// Whether decorative motion and animated scrolling are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

/// Read-only snapshot of the navigation shell for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NavigationViewModel {
    pub(crate) items: &'static [NavItem],
    pub(crate) active_section: SectionId,
    pub(crate) viewport: Viewport,
    pub(crate) menu_open: bool,
    pub(crate) back_to_top_visible: bool,
    pub(crate) back_to_top_opacity: f32,
    pub(crate) scroll_offset: f32,
}

impl NavigationViewModel {
    /// Overlay is rendered only for narrow windows with the menu open.
    pub(crate) fn overlay_visible(&self) -> bool {
        self.menu_open && !self.viewport.is_wide()
    }
}

#[cfg(test)]
mod tests {
    use super::{SECTION_REGISTRY, SectionId, initial_section, registry};

    #[test]
    fn given_registry_when_listing_then_order_matches_document() {
        let anchors: Vec<&str> =
            registry().iter().map(|item| item.section.anchor()).collect();

        assert_eq!(anchors, vec!["home", "projects", "skills", "contact"]);
    }

    #[test]
    fn given_anchor_keys_when_resolving_then_round_trip_to_sections() {
        for item in SECTION_REGISTRY {
            assert_eq!(
                SectionId::from_anchor(item.section.anchor()),
                Some(item.section)
            );
        }
        assert_eq!(SectionId::from_anchor("about"), None);
    }

    #[test]
    fn given_registry_when_reading_initial_section_then_home_is_first() {
        assert_eq!(initial_section(), SectionId::Home);
    }
}
