//! Application state and update logic for the folio TUI.

use std::time::{Duration, Instant};

use folio_core::{EventRecord, FolioConfig};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

use crate::event::Action;
use crate::layout::{centered_fixed, panel_rect, screen_layout};
use crate::theme::{BorderSet, IconMode, IconSet, Theme};
use crate::timeline::{ArcScene, ArcTimelineWidget, DetailPanel, HoverState, ThumbSlot};

/// Theme cycle order for the `t` binding.
const THEME_CYCLE: &[&str] = &["mocha", "latte", "high-contrast"];

/// Notification display time in ticks (~3s at the 50ms tick rate).
const NOTIFICATION_TICKS: usize = 60;

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Active configuration.
    pub config: FolioConfig,

    /// Color palette.
    pub theme: Theme,

    /// Icon glyph set.
    pub icons: IconSet,

    /// Border set.
    pub borders: BorderSet,

    /// Notification message (displayed temporarily, cleared after some ticks).
    pub notification: Option<String>,

    /// Ticks remaining until notification is cleared.
    notification_ttl: usize,

    /// The computed arc scene.
    scene: ArcScene,

    /// Hover/focus state for the single timeline instance this app owns.
    hover: HoverState,

    /// Thumbnail slot for the active segment, keyed by segment index.
    thumb: Option<(usize, ThumbSlot)>,

    /// Canvas area from the last render; the mouse path hit-tests against
    /// the same rect the draw path used.
    canvas_area: Rect,
}

impl App {
    /// Create a new app instance from loaded events.
    pub fn new(config: FolioConfig, events: Vec<EventRecord>) -> Self {
        let scene = ArcScene::new(events, &config);
        let hover = HoverState::new(Duration::from_millis(config.hover_linger_ms));
        let theme = Theme::by_name(&config.theme);
        let mode = IconMode::by_name(&config.icon_mode);

        Self {
            should_quit: false,
            show_help: false,
            theme,
            icons: IconSet::new(mode),
            borders: BorderSet::new(mode),
            notification: None,
            notification_ttl: 0,
            scene,
            hover,
            thumb: None,
            canvas_area: Rect::default(),
            config,
        }
    }

    /// The scene being displayed.
    pub fn scene(&self) -> &ArcScene {
        &self.scene
    }

    /// The currently active segment index, if any.
    pub fn active(&self) -> Option<usize> {
        self.hover.active()
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
            }
            Action::Help => self.show_help = !self.show_help,
            Action::Back => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    // Escape clears the active segment immediately, skipping
                    // the hover linger.
                    self.hover.clear();
                }
            }
            Action::Left => self.focus_step(-1),
            Action::Right => self.focus_step(1),
            Action::Home => self.focus_edge(true),
            Action::End => self.focus_edge(false),
            Action::Copy => self.copy_active(),
            Action::ThemeCycle => self.cycle_theme(),
            Action::None => {}
        }
    }

    /// Move keyboard focus one segment left or right, clamping at the ends.
    fn focus_step(&mut self, delta: i64) {
        let len = self.scene.layout().len();
        if len == 0 {
            return;
        }
        let next = match self.hover.active() {
            Some(i) => {
                #[allow(clippy::cast_possible_wrap)]
                let raw = i as i64 + delta;
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let clamped = raw.clamp(0, len as i64 - 1) as usize;
                clamped
            }
            // From idle, either direction lands on the nearest end.
            None if delta < 0 => len - 1,
            None => 0,
        };
        self.hover.enter(next);
    }

    fn focus_edge(&mut self, first: bool) {
        let len = self.scene.layout().len();
        if len == 0 {
            return;
        }
        self.hover.enter(if first { 0 } else { len - 1 });
    }

    /// Pointer moved to a terminal cell.
    pub fn pointer_moved(&mut self, column: u16, row: u16, now: Instant) {
        match self.scene.hit_test(column, row, self.canvas_area) {
            Some(index) => self.hover.enter(index),
            None => self.hover.leave(now),
        }
    }

    /// Advance time-based state.
    pub fn tick(&mut self, now: Instant) {
        self.hover.tick(now);

        if self.notification_ttl > 0 {
            self.notification_ttl -= 1;
            if self.notification_ttl == 0 {
                self.notification = None;
            }
        }
    }

    /// Set a temporary notification message.
    fn set_notification(&mut self, msg: String) {
        self.notification = Some(msg);
        self.notification_ttl = NOTIFICATION_TICKS;
    }

    /// Copy the active event's title and blurb to the clipboard.
    fn copy_active(&mut self) {
        let Some(event) = self
            .hover
            .active()
            .and_then(|i| self.scene.layout().segment(i))
            .map(|s| s.event.clone())
        else {
            return;
        };

        let text = format!("{}\n\n{}", event.title, event.blurb);
        match arboard::Clipboard::new().and_then(|mut c| c.set_text(text)) {
            Ok(()) => self.set_notification(format!("Copied \"{}\"", event.title)),
            Err(e) => self.set_notification(format!("Copy failed: {e}")),
        }
    }

    /// Switch to the next theme in the cycle.
    fn cycle_theme(&mut self) {
        let current = THEME_CYCLE
            .iter()
            .position(|name| *name == self.config.theme)
            .unwrap_or(0);
        let next = THEME_CYCLE[(current + 1) % THEME_CYCLE.len()];
        self.config.theme = next.to_string();
        self.theme = Theme::by_name(next);
        self.set_notification(format!("Theme: {next}"));
    }

    /// Render one frame.
    pub fn render(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let (canvas, footer) = screen_layout(area);
        self.canvas_area = canvas;

        let active = self.hover.active();
        self.prepare_thumb(active, canvas);

        let buf = frame.buffer_mut();

        ArcTimelineWidget::new(&self.scene, &self.theme, &self.icons)
            .active(active)
            .render(canvas, buf);

        if let Some(segment) = active.and_then(|i| self.scene.layout().segment(i)) {
            let rect = panel_rect(canvas);
            let thumb = self
                .thumb
                .as_ref()
                .filter(|(i, _)| Some(*i) == active)
                .and_then(|(_, slot)| slot.image());
            DetailPanel::new(&segment.event, &self.theme, &self.icons, &self.borders)
                .thumb(thumb)
                .render(rect, buf);
        }

        self.render_footer(footer, buf);

        if self.show_help {
            self.render_help(area, buf);
        }
    }

    /// Keep the thumbnail slot in sync with the active segment.
    fn prepare_thumb(&mut self, active: Option<usize>, canvas: Rect) {
        let Some(index) = active else {
            self.thumb = None;
            return;
        };

        if self.thumb.as_ref().is_some_and(|(i, _)| *i == index) {
            // Same segment: the slot keeps its one-shot fallback state.
        } else {
            let Some(segment) = self.scene.layout().segment(index) else {
                self.thumb = None;
                return;
            };
            self.thumb = Some((
                index,
                ThumbSlot::new(
                    segment.event.thumb.clone(),
                    self.config.fallback_thumb.clone(),
                ),
            ));
        }

        if let Some((_, slot)) = &mut self.thumb {
            let rect = panel_rect(canvas);
            slot.ensure_loaded(rect.width.saturating_sub(2), 5);
        }
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let text = self.notification.clone().unwrap_or_else(|| {
            format!(
                " {}/{} segments  Esc clear  y copy  t theme  ? help  q quit",
                self.icons.arrow_left(),
                self.icons.arrow_right(),
            )
        });
        let style = if self.notification.is_some() {
            Style::default().fg(self.theme.secondary)
        } else {
            Style::default().fg(self.theme.muted)
        };
        Paragraph::new(Line::from(Span::styled(text, style)))
            .style(Style::default().bg(self.theme.surface))
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let rect = centered_fixed(44, 12, area);
        Clear.render(rect, buf);

        let block = Block::default()
            .title(" Help ")
            .title_style(Style::default().fg(self.theme.text))
            .borders(Borders::ALL)
            .border_set(self.borders.focused())
            .border_style(Style::default().fg(self.theme.border_focused))
            .style(Style::default().bg(self.theme.surface));
        let inner = block.inner(rect);
        block.render(rect, buf);

        let entries: [(&str, &str); 8] = [
            ("mouse", "hover a segment to open its card"),
            ("←/→  h/l", "move focus between segments"),
            ("Home/End", "jump to first/last segment"),
            ("Esc", "close the card immediately"),
            ("y", "copy the active event"),
            ("t", "cycle color theme"),
            ("?", "toggle this help"),
            ("q", "quit"),
        ];

        for (i, (keys, what)) in entries.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let line = Line::from(vec![
                Span::styled(
                    format!(" {keys:<10}"),
                    Style::default().fg(self.theme.primary),
                ),
                Span::styled((*what).to_string(), Style::default().fg(self.theme.text)),
            ]);
            Paragraph::new(line).render(Rect::new(inner.x, y, inner.width, 1), buf);
        }
    }
}
