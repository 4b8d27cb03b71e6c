use super::anchors::AnchorSource;
use super::model::{
    ACTIVATION_THRESHOLD_PX, SectionId, initial_section, registry,
};

/// Tracks the active section from sampled scroll positions.
///
/// Scroll samples only mark the observer dirty; the anchor reads happen in
/// [`ScrollObserver::evaluate`], which the shell calls once per frame.
#[derive(Debug, Clone)]
pub(crate) struct ScrollObserver {
    active: SectionId,
    dirty: bool,
}

impl Default for ScrollObserver {
    fn default() -> Self {
        Self {
            active: initial_section(),
            dirty: false,
        }
    }
}

impl ScrollObserver {
    pub(crate) fn active(&self) -> SectionId {
        self.active
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Record that the scroll position or the anchors changed.
    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Recompute the active section if a sample is pending.
    ///
    /// Returns `true` when the active section changed.
    pub(crate) fn evaluate(
        &mut self,
        anchors: &impl AnchorSource,
        scroll_offset: f32,
    ) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;

        let next = resolve_active(anchors, scroll_offset, self.active);
        if next == self.active {
            return false;
        }

        log::debug!(
            "active section {} -> {}",
            self.active.anchor(),
            next.anchor()
        );
        self.active = next;
        true
    }
}

/// Pick the last registered section whose anchor top sits at or above the
/// activation line.
///
/// Unmounted anchors are skipped. When no anchor is mounted at all the
/// current section is kept; when anchors exist but none qualifies the
/// first registered section is active.
pub(crate) fn resolve_active(
    anchors: &impl AnchorSource,
    scroll_offset: f32,
    current: SectionId,
) -> SectionId {
    let mut any_mounted = false;
    let mut active = None;

    for item in registry() {
        let Some(top) = anchors.anchor_top(item.section) else {
            continue;
        };
        any_mounted = true;

        if top - scroll_offset <= ACTIVATION_THRESHOLD_PX {
            active = Some(item.section);
        }
    }

    if !any_mounted {
        return current;
    }

    active.unwrap_or_else(initial_section)
}
