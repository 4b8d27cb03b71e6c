use std::collections::BTreeMap;

use super::model::SectionId;

/// Lookup of anchor positions in document coordinates.
///
/// A `None` answer means the anchor is not mounted; callers treat that as
/// "skip" and never as an error.
pub(crate) trait AnchorSource {
    /// Top edge of the section's anchor, measured from the document origin.
    fn anchor_top(&self, section: SectionId) -> Option<f32>;
}

/// Anchor positions produced by the page layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct AnchorMap {
    tops: BTreeMap<SectionId, f32>,
}

impl AnchorMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Drop an anchor, as if its panel was unmounted.
    #[cfg(test)]
    pub(crate) fn remove(&mut self, section: SectionId) {
        self.tops.remove(&section);
    }

    pub(crate) fn len(&self) -> usize {
        self.tops.len()
    }
}

impl AnchorSource for AnchorMap {
    fn anchor_top(&self, section: SectionId) -> Option<f32> {
        self.tops.get(&section).copied()
    }
}

impl FromIterator<(SectionId, f32)> for AnchorMap {
    fn from_iter<I: IntoIterator<Item = (SectionId, f32)>>(iter: I) -> Self {
        Self {
            tops: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnchorMap, AnchorSource};
    use crate::widgets::navigation::model::SectionId;

    #[test]
    fn given_unmounted_anchor_when_queried_then_returns_none() {
        let mut anchors: AnchorMap =
            [(SectionId::Home, 0.0), (SectionId::Skills, 900.0)]
                .into_iter()
                .collect();

        assert_eq!(anchors.anchor_top(SectionId::Skills), Some(900.0));
        assert_eq!(anchors.anchor_top(SectionId::Projects), None);

        anchors.remove(SectionId::Skills);
        assert_eq!(anchors.anchor_top(SectionId::Skills), None);
        assert_eq!(anchors.len(), 1);
    }
}
