//! Canvas rendering of the arc timeline.

use folio_core::{arc_points, polar_to_cartesian, resolve_icon, Segment};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Block, Widget,
    },
};
use unicode_width::UnicodeWidthStr;

use super::scene::ArcScene;
use crate::theme::{IconSet, Theme};

/// Chord step for band-edge arcs, in degrees.
const EDGE_STEP: f64 = 1.5;
/// Angular step of the dim radial hatching that fills the band.
const FILL_STEP: f64 = 2.5;
/// Angular step of the bright hatching over the active segment.
const ACTIVE_STEP: f64 = 0.8;

/// The arc timeline pane.
pub struct ArcTimelineWidget<'a> {
    scene: &'a ArcScene,
    theme: &'a Theme,
    icons: &'a IconSet,
    active: Option<usize>,
}

impl<'a> ArcTimelineWidget<'a> {
    /// Create a new timeline widget.
    pub fn new(scene: &'a ArcScene, theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            scene,
            theme,
            icons,
            active: None,
        }
    }

    /// Set the active segment index.
    #[must_use]
    pub fn active(mut self, active: Option<usize>) -> Self {
        self.active = active;
        self
    }

    /// Draw an arc as a chord polyline.
    fn draw_arc(
        &self,
        ctx: &mut Context<'_>,
        radius: f64,
        start_deg: f64,
        end_deg: f64,
        step: f64,
        color: ratatui::style::Color,
    ) {
        let layout = self.scene.layout();
        let points = arc_points(layout.center, radius, start_deg, end_deg, step);
        for pair in points.windows(2) {
            let (x1, y1) = self.scene.to_canvas(pair[0]);
            let (x2, y2) = self.scene.to_canvas(pair[1]);
            ctx.draw(&CanvasLine {
                x1,
                y1,
                x2,
                y2,
                color,
            });
        }
    }

    /// Draw a radial line between two radii at a fixed angle.
    fn draw_radial(
        &self,
        ctx: &mut Context<'_>,
        r_from: f64,
        r_to: f64,
        angle_deg: f64,
        color: ratatui::style::Color,
    ) {
        let layout = self.scene.layout();
        let (x1, y1) = self
            .scene
            .to_canvas(polar_to_cartesian(layout.center, r_from, angle_deg));
        let (x2, y2) = self
            .scene
            .to_canvas(polar_to_cartesian(layout.center, r_to, angle_deg));
        ctx.draw(&CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }

    /// Hatch the band between two angles with radial strokes.
    fn hatch(
        &self,
        ctx: &mut Context<'_>,
        start_deg: f64,
        end_deg: f64,
        step: f64,
        color: ratatui::style::Color,
    ) {
        let layout = self.scene.layout();
        let mut angle = start_deg;
        while angle < end_deg {
            self.draw_radial(ctx, layout.r_inner, layout.r_outer, angle, color);
            angle += step;
        }
    }

    /// Draw the triangular indicator wedge for a segment.
    fn draw_wedge(&self, ctx: &mut Context<'_>, segment: &Segment, color: ratatui::style::Color) {
        let layout = self.scene.layout();
        let left = polar_to_cartesian(
            layout.center,
            layout.wedge_base,
            segment.mid_deg - layout.wedge_half_spread,
        );
        let right = polar_to_cartesian(
            layout.center,
            layout.wedge_base,
            segment.mid_deg + layout.wedge_half_spread,
        );
        let tip = polar_to_cartesian(
            layout.center,
            layout.wedge_base + layout.wedge_length,
            segment.mid_deg,
        );
        for (a, b) in [(left, tip), (tip, right), (right, left)] {
            let (x1, y1) = self.scene.to_canvas(a);
            let (x2, y2) = self.scene.to_canvas(b);
            ctx.draw(&CanvasLine {
                x1,
                y1,
                x2,
                y2,
                color,
            });
        }
    }

    /// Print a segment's year label at the inner edge, roughly centered.
    fn print_label(&self, ctx: &mut Context<'_>, segment: &Segment, units_per_col: f64) {
        let year = segment.event.display_year();
        if year.is_empty() {
            return;
        }
        let layout = self.scene.layout();
        let at = polar_to_cartesian(layout.center, layout.label_radius, segment.mid_deg);
        let (x, y) = self.scene.to_canvas(at);
        #[allow(clippy::cast_precision_loss)]
        let half_width = year.width() as f64 / 2.0 * units_per_col;
        let style = if self.active == Some(segment.index) {
            Style::default().fg(self.theme.trace)
        } else {
            Style::default().fg(self.theme.label)
        };
        ctx.print(x - half_width, y, Line::styled(year, style));
    }
}

impl Widget for ArcTimelineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let layout = self.scene.layout();
        let units_per_col = self.scene.units_per_col(area);
        let empty = layout.is_empty();
        let active_segment = self.active.and_then(|i| layout.segment(i));

        let canvas = Canvas::default()
            .block(Block::default().style(Style::default().bg(self.theme.base)))
            .marker(Marker::Braille)
            .background_color(self.theme.base)
            .x_bounds(self.scene.x_bounds())
            .y_bounds(self.scene.y_bounds())
            .paint(|ctx| {
                // Dim fill, then the band edges on top of it.
                self.hatch(ctx, layout.start_deg, layout.end_deg, FILL_STEP, self.theme.band);
                self.draw_arc(
                    ctx,
                    layout.r_outer,
                    layout.start_deg,
                    layout.end_deg,
                    EDGE_STEP,
                    self.theme.band_edge,
                );
                self.draw_arc(
                    ctx,
                    layout.r_inner,
                    layout.start_deg,
                    layout.end_deg,
                    EDGE_STEP,
                    self.theme.band_edge,
                );
                // End caps.
                self.draw_radial(
                    ctx,
                    layout.r_inner,
                    layout.r_outer,
                    layout.start_deg,
                    self.theme.band_edge,
                );
                self.draw_radial(
                    ctx,
                    layout.r_inner,
                    layout.r_outer,
                    layout.end_deg,
                    self.theme.band_edge,
                );

                // Separators at interior boundaries.
                for segment in layout.segments.iter().skip(1) {
                    self.draw_radial(
                        ctx,
                        layout.r_inner,
                        layout.r_outer,
                        segment.start_deg,
                        self.theme.separator,
                    );
                }

                // Active segment: bright hatch plus a trace along the
                // center line of its angular range.
                if let Some(segment) = active_segment {
                    self.hatch(
                        ctx,
                        segment.start_deg,
                        segment.end_deg,
                        ACTIVE_STEP,
                        self.theme.highlight,
                    );
                    self.draw_arc(
                        ctx,
                        layout.radius,
                        segment.start_deg,
                        segment.end_deg,
                        EDGE_STEP,
                        self.theme.trace,
                    );
                }

                // Wedges point outward from each segment midpoint.
                for segment in &layout.segments {
                    let color = if self.active == Some(segment.index) {
                        self.theme.trace
                    } else {
                        self.theme.wedge
                    };
                    self.draw_wedge(ctx, segment, color);
                }

                // Year labels along the inner edge.
                for segment in &layout.segments {
                    self.print_label(ctx, segment, units_per_col);
                }

                if empty {
                    let (cx, cy) = self.scene.to_canvas(layout.center);
                    ctx.print(
                        cx - 6.0 * units_per_col,
                        cy,
                        Line::styled(
                            "No events yet",
                            Style::default().fg(self.theme.muted),
                        ),
                    );
                }
            });

        canvas.render(area, buf);

        // Status line with the active event title.
        if let Some(segment) = active_segment {
            let icon = self.icons.display(&resolve_icon(&segment.event));
            let text = format!(" {icon} {} ", segment.event.title);
            let hint_y = area.y + area.height - 1;
            let hint = Line::styled(text, Style::default().fg(self.theme.subtext));
            buf.set_line(area.x + 1, hint_y, &hint, area.width.saturating_sub(2));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use folio_core::{EventRecord, FolioConfig};

    fn scene(n: usize) -> ArcScene {
        let events = (0..n)
            .map(|i| EventRecord {
                year: Some(2018 + i32::try_from(i).unwrap_or(0)),
                date: Some(format!("{}", 2018 + i)),
                ..EventRecord::new(format!("event {i}"))
            })
            .collect();
        ArcScene::new(events, &FolioConfig::default())
    }

    fn render(scene: &ArcScene, active: Option<usize>) -> String {
        let theme = Theme::default();
        let icons = IconSet::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        ArcTimelineWidget::new(scene, &theme, &icons)
            .active(active)
            .render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_renders_year_labels() {
        let out = render(&scene(3), None);
        assert!(out.contains("2018"));
        assert!(out.contains("2019"));
        assert!(out.contains("2020"));
    }

    #[test]
    fn test_renders_braille_band() {
        let out = render(&scene(3), None);
        // Some braille cells must have been painted.
        assert!(out.chars().any(|c| ('\u{2800}'..='\u{28ff}').contains(&c)));
    }

    #[test]
    fn test_empty_state_message() {
        let out = render(&scene(0), None);
        assert!(out.contains("No events yet"));
    }

    #[test]
    fn test_active_segment_shows_title_hint() {
        let out = render(&scene(3), Some(1));
        assert!(out.contains("event 1"));
        let idle = render(&scene(3), None);
        assert!(!idle.contains("event 1"));
    }

    #[test]
    fn test_zero_area_does_not_panic() {
        let theme = Theme::default();
        let icons = IconSet::default();
        let scene = scene(2);
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(Rect::new(0, 0, 1, 1));
        ArcTimelineWidget::new(&scene, &theme, &icons).render(area, &mut buf);
    }
}
