//! The interactive arc timeline.
//!
//! This module provides:
//! - [`HoverState`] - active-segment state with leave hysteresis
//! - [`ArcScene`] - layout plus viewport/mouse coordinate mapping
//! - [`ArcTimelineWidget`] - braille-canvas rendering of the arch
//! - [`DetailPanel`] - the floating card for the active event
//! - [`ThumbSlot`] - thumbnail loading with one-shot fallback

mod hover;
mod panel;
mod scene;
mod thumb;
mod widget;

pub use hover::HoverState;
pub use panel::DetailPanel;
pub use scene::ArcScene;
pub use thumb::{ThumbImage, ThumbSlot};
pub use widget::ArcTimelineWidget;
