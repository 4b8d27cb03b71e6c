use super::model::Viewport;

/// Open/closed state of the narrow-viewport overlay menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub(crate) fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Flip the menu. Opening is only possible on a narrow viewport.
    pub(crate) fn toggle(&mut self, viewport: Viewport) {
        *self = match (*self, viewport) {
            (MenuState::Open, _) => MenuState::Closed,
            (MenuState::Closed, Viewport::Narrow) => MenuState::Open,
            (MenuState::Closed, Viewport::Wide) => MenuState::Closed,
        };
    }

    pub(crate) fn close(&mut self) {
        *self = MenuState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::MenuState;
    use crate::widgets::navigation::model::Viewport;

    #[test]
    fn given_closed_menu_on_narrow_viewport_when_toggled_then_opens_and_closes() {
        let mut menu = MenuState::default();

        menu.toggle(Viewport::Narrow);
        assert!(menu.is_open());

        menu.toggle(Viewport::Narrow);
        assert!(!menu.is_open());
    }

    #[test]
    fn given_wide_viewport_when_toggled_then_menu_stays_closed() {
        let mut menu = MenuState::default();

        menu.toggle(Viewport::Wide);

        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn given_open_menu_when_closed_twice_then_stays_closed() {
        let mut menu = MenuState::Open;

        menu.close();
        menu.close();

        assert!(!menu.is_open());
    }
}
