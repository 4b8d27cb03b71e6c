use iced::Size;

use crate::layout::PageLayout;
use crate::widgets::navigation::model::SectionId;

/// Window geometry and the page layout derived from it.
#[derive(Debug, Clone)]
pub(crate) struct State {
    window_size: Size,
    hidden_sections: Vec<SectionId>,
    layout: PageLayout,
}

impl State {
    pub(crate) fn new(window_size: Size, hidden_sections: Vec<SectionId>) -> Self {
        let layout = PageLayout::compute(window_size, &hidden_sections);
        Self {
            window_size,
            hidden_sections,
            layout,
        }
    }

    pub(crate) fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Recompute the layout for a new window size.
    ///
    /// Returns `false` when the size did not change.
    pub(crate) fn set_window_size(&mut self, size: Size) -> bool {
        if size == self.window_size {
            return false;
        }

        self.window_size = size;
        self.layout = PageLayout::compute(size, &self.hidden_sections);
        true
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::State;
    use crate::widgets::navigation::model::{SectionId, Viewport};

    #[test]
    fn given_same_size_when_set_then_layout_is_kept() {
        let mut state = State::new(Size::new(1280.0, 800.0), Vec::new());

        assert!(!state.set_window_size(Size::new(1280.0, 800.0)));
        assert!(state.set_window_size(Size::new(500.0, 800.0)));
        assert_eq!(state.layout().viewport(), Viewport::Narrow);
    }

    #[test]
    fn given_hidden_section_when_created_then_it_has_no_height() {
        let state =
            State::new(Size::new(1280.0, 800.0), vec![SectionId::Contact]);

        assert_eq!(state.layout().height_of(SectionId::Contact), None);
    }
}
