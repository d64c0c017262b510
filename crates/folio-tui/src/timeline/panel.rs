//! Detail panel for the active segment.
//!
//! Shows the event date, icon + title, thumbnail preview, and the blurb
//! rendered as markdown. Only ever drawn while a segment is active.

use folio_core::{resolve_icon, EventRecord};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::thumb::ThumbImage;
use crate::text::{render_markdown, truncate_str};
use crate::theme::{BorderSet, IconSet, Theme};

/// Rows reserved for the thumbnail preview when one is available.
const THUMB_ROWS: u16 = 5;

/// Detail panel widget.
pub struct DetailPanel<'a> {
    event: &'a EventRecord,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
    thumb: Option<&'a ThumbImage>,
}

impl<'a> DetailPanel<'a> {
    /// Create a panel for an event.
    pub fn new(
        event: &'a EventRecord,
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            event,
            theme,
            icons,
            borders,
            thumb: None,
        }
    }

    /// Attach a decoded thumbnail.
    #[must_use]
    pub fn thumb(mut self, thumb: Option<&'a ThumbImage>) -> Self {
        self.thumb = thumb;
        self
    }
}

impl Widget for DetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        // The panel floats over the canvas; clear what's underneath.
        Clear.render(area, buf);

        let icon = self.icons.display(&resolve_icon(self.event));
        let title = format!(" {icon} {} ", self.event.title);
        let title = truncate_str(&title, usize::from(area.width.saturating_sub(4)));

        let block = Block::default()
            .title(title)
            .title_style(Style::default().fg(self.theme.text))
            .borders(Borders::ALL)
            .border_set(self.borders.focused())
            .border_style(Style::default().fg(self.theme.border_focused))
            .style(Style::default().bg(self.theme.surface));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let mut y = inner.y;

        // Date line.
        let date = self.event.date.clone().unwrap_or_else(|| {
            self.event
                .year
                .map(|year| year.to_string())
                .unwrap_or_default()
        });
        if !date.is_empty() {
            let line = Line::from(Span::styled(date, Style::default().fg(self.theme.muted)));
            Paragraph::new(line).render(Rect::new(inner.x, y, inner.width, 1), buf);
            y += 1;
        }

        // Thumbnail preview.
        if let Some(thumb) = self.thumb {
            let rows = THUMB_ROWS.min((inner.y + inner.height).saturating_sub(y));
            if rows > 0 {
                thumb.render(Rect::new(inner.x, y, inner.width, rows), buf);
                y += rows;
            }
        }

        if y < inner.y + inner.height {
            y += 1; // gap before the blurb
        }

        // Blurb, rendered verbatim as markdown.
        let blurb = render_markdown(
            &self.event.blurb,
            usize::from(inner.width),
            self.theme,
        );
        for line in blurb {
            if y >= inner.y + inner.height {
                break;
            }
            Paragraph::new(line).render(Rect::new(inner.x, y, inner.width, 1), buf);
            y += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn event() -> EventRecord {
        EventRecord {
            date: Some("Jun 2021".into()),
            blurb: "Built a **thing** for people.".into(),
            ..EventRecord::new("Summer Internship")
        }
    }

    fn render_panel(event: &EventRecord, area: Rect) -> String {
        let theme = Theme::default();
        let icons = IconSet::default();
        let borders = BorderSet::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, area.width, area.height + area.y));
        DetailPanel::new(event, &theme, &icons, &borders).render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_panel_shows_title_date_and_blurb() {
        let out = render_panel(&event(), Rect::new(0, 0, 40, 12));
        assert!(out.contains("Summer Internship"));
        assert!(out.contains("Jun 2021"));
        assert!(out.contains("thing"));
    }

    #[test]
    fn test_panel_title_shows_inferred_icon() {
        let out = render_panel(&event(), Rect::new(0, 0, 40, 12));
        // "Summer Internship" resolves to the briefcase glyph.
        assert!(out.contains("💼"));
    }

    #[test]
    fn test_long_title_truncated() {
        let mut e = event();
        e.title = "An unreasonably long event title that cannot fit".into();
        let out = render_panel(&e, Rect::new(0, 0, 24, 8));
        assert!(out.contains('…'));
    }

    #[test]
    fn test_tiny_area_is_noop() {
        let out = render_panel(&event(), Rect::new(0, 0, 3, 2));
        assert_eq!(out.trim(), "");
    }

    #[test]
    fn test_blurb_clipped_to_height() {
        let mut e = event();
        e.blurb = (0..30).map(|i| format!("line {i}\n\n")).collect();
        // Must not panic when the blurb exceeds the panel height.
        let out = render_panel(&e, Rect::new(0, 0, 30, 8));
        assert!(out.contains("line 0"));
        assert!(!out.contains("line 29"));
    }
}
