//! Viewport mapping between layout model space, the canvas, and mouse cells.
//!
//! Layout math lives in y-down model space (folio-core). The ratatui canvas
//! is y-up, and mouse events arrive as terminal cells; the scene owns both
//! conversions so the draw path and the hit path can never disagree.

use folio_core::{ArcLayout, EventRecord, FolioConfig, Point};
use ratatui::layout::Rect;

/// Fraction of the model square shown vertically. The arch lives in the top
/// part of the circle, so the viewport crops below the band endpoints.
const VIEW_RATIO: f64 = 0.55;

/// A computed layout plus its viewport.
#[derive(Debug, Clone)]
pub struct ArcScene {
    layout: ArcLayout,
    /// Model-space width (and full, uncropped height).
    size: f64,
    /// Visible model-space height after the arch crop.
    view_height: f64,
}

impl ArcScene {
    /// Lay out the given events under `config` and wrap them in a viewport.
    pub fn new(events: Vec<EventRecord>, config: &FolioConfig) -> Self {
        Self {
            layout: ArcLayout::compute(events, config),
            size: config.size,
            view_height: config.size * VIEW_RATIO,
        }
    }

    /// The underlying layout.
    pub fn layout(&self) -> &ArcLayout {
        &self.layout
    }

    /// Canvas x bounds for rendering.
    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.size]
    }

    /// Canvas y bounds for rendering.
    pub fn y_bounds(&self) -> [f64; 2] {
        [0.0, self.view_height]
    }

    /// Convert a y-down model point to y-up canvas coordinates.
    pub fn to_canvas(&self, p: Point) -> (f64, f64) {
        (p.x, self.view_height - p.y)
    }

    /// Model-space units covered by one terminal cell horizontally.
    pub fn units_per_col(&self, area: Rect) -> f64 {
        if area.width == 0 {
            0.0
        } else {
            self.size / f64::from(area.width)
        }
    }

    /// Map a terminal cell inside `area` to a model-space point.
    ///
    /// Returns `None` for cells outside the area.
    pub fn cell_to_model(&self, column: u16, row: u16, area: Rect) -> Option<Point> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        if column < area.x
            || column >= area.x + area.width
            || row < area.y
            || row >= area.y + area.height
        {
            return None;
        }

        let dx = f64::from(column - area.x) + 0.5;
        let dy = f64::from(row - area.y) + 0.5;
        Some(Point::new(
            dx * self.size / f64::from(area.width),
            dy * self.view_height / f64::from(area.height),
        ))
    }

    /// Hit-test a mouse cell against the segment band.
    pub fn hit_test(&self, column: u16, row: u16, area: Rect) -> Option<usize> {
        self.cell_to_model(column, row, area)
            .and_then(|p| self.layout.segment_at(p))
    }
}
