use std::time::Instant;

use super::anchors::AnchorMap;
use super::model::{ScrollTarget, SectionId};

/// Intent events handled by the navigation shell.
#[derive(Debug, Clone)]
pub(crate) enum NavigationIntent {
    Scrolled { offset: f32 },
    Frame(Instant),
    Resized { width: f32 },
    LayoutChanged { anchors: AnchorMap, max_offset: f32 },
    ToggleMenu,
    DismissMenu,
    SelectSection(SectionId),
    ScrollTo(ScrollTarget),
    Teardown,
}

/// Effect events produced by the navigation reducer.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEffect {
    ScrollPage { offset: f32 },
    TornDown,
}

/// Navigation event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEvent {
    /// Intent event reduced by the navigation widget.
    Intent(NavigationIntent),
    /// External effect orchestrated by app-level routing.
    Effect(NavigationEffect),
}
