//! Screen layout helpers.
//!
//! Pure functions shared by the draw path and the mouse path, so hit-testing
//! always agrees with what was rendered.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the frame into the timeline canvas and a one-line footer.
pub fn screen_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Where the detail panel floats: centered horizontally inside the arch
/// opening, below the top inner edge of the band.
pub fn panel_rect(canvas: Rect) -> Rect {
    let width = canvas.width.saturating_sub(4).min(48).max(20);
    let height = canvas.height.saturating_sub(4).min(14).max(6);
    let x = canvas.x + canvas.width.saturating_sub(width) / 2;
    let y = canvas.y + canvas.height.saturating_mul(35) / 100;
    Rect::new(
        x,
        y,
        width.min(canvas.width),
        height.min(canvas.height.saturating_sub(y.saturating_sub(canvas.y))),
    )
}

/// Create a centered rect with fixed dimensions (help overlay).
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
