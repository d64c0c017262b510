//! Markdown rendering using pulldown-cmark.
//!
//! Converts event blurbs to styled ratatui [`Line`]s. The content is rendered
//! verbatim: whatever the collections supply is displayed as-is, per the
//! documented trust boundary on `EventRecord::blurb`.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme::Theme;

/// Style configuration for markdown elements.
struct MarkdownStyles {
    base: Style,
    heading: Style,
    emphasis: Style,
    strong: Style,
    code: Style,
    link: Style,
    marker: Style,
}

impl MarkdownStyles {
    fn from_theme(theme: &Theme) -> Self {
        Self {
            base: Style::default().fg(theme.text),
            heading: Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
            emphasis: Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::ITALIC),
            strong: Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            code: Style::default().fg(theme.secondary).bg(theme.surface),
            link: Style::default()
                .fg(theme.info)
                .add_modifier(Modifier::UNDERLINED),
            marker: Style::default().fg(theme.muted),
        }
    }
}

/// Render markdown text to styled ratatui Lines wrapped to `width`.
pub fn render_markdown(input: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let parser = Parser::new_ext(input, Options::ENABLE_STRIKETHROUGH);
    let styles = MarkdownStyles::from_theme(theme);

    let mut renderer = MarkdownRenderer::new(styles, width.max(8));
    for event in parser {
        renderer.handle_event(event);
    }
    renderer.flush_line();
    renderer.lines
}

/// Internal renderer that processes pulldown-cmark events.
struct MarkdownRenderer {
    lines: Vec<Line<'static>>,
    styles: MarkdownStyles,
    width: usize,
    /// Stack of active inline styles.
    style_stack: Vec<Style>,
    /// Current line being built.
    current_spans: Vec<Span<'static>>,
    /// Pending marker prepended to the next text ("• " inside list items).
    pending_marker: Option<&'static str>,
    in_code_block: bool,
}

impl MarkdownRenderer {
    fn new(styles: MarkdownStyles, width: usize) -> Self {
        Self {
            lines: Vec::new(),
            styles,
            width,
            style_stack: Vec::new(),
            current_spans: Vec::new(),
            pending_marker: None,
            in_code_block: false,
        }
    }

    fn current_style(&self) -> Style {
        *self.style_stack.last().unwrap_or(&self.styles.base)
    }

    fn handle_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                self.flush_line();
                self.style_stack.push(self.styles.heading);
            }
            Event::End(TagEnd::Heading(_)) => {
                self.flush_line();
                self.style_stack.pop();
                self.blank_line();
            }

            Event::Start(Tag::Emphasis) => self.style_stack.push(self.styles.emphasis),
            Event::Start(Tag::Strong) => self.style_stack.push(self.styles.strong),
            Event::Start(Tag::Strikethrough) => self.style_stack.push(
                self.current_style().add_modifier(Modifier::CROSSED_OUT),
            ),
            Event::Start(Tag::Link { .. }) => self.style_stack.push(self.styles.link),
            Event::End(
                TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link,
            ) => {
                self.style_stack.pop();
            }

            Event::Start(Tag::Paragraph) => self.flush_line(),
            Event::End(TagEnd::Paragraph) => {
                self.flush_line();
                self.blank_line();
            }

            Event::Start(Tag::CodeBlock(_)) => {
                self.flush_line();
                self.in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                self.flush_line();
                self.in_code_block = false;
                self.blank_line();
            }

            Event::Start(Tag::Item) => {
                self.flush_line();
                self.pending_marker = Some("• ");
            }
            Event::End(TagEnd::Item) => self.flush_line(),
            Event::End(TagEnd::List(_)) => self.blank_line(),

            Event::Text(text) => {
                if self.in_code_block {
                    for line in text.lines() {
                        self.current_spans
                            .push(Span::styled(format!("  {line}"), self.styles.code));
                        self.flush_line();
                    }
                } else {
                    self.push_text(&text);
                }
            }
            Event::Code(code) => {
                self.take_marker();
                self.current_spans
                    .push(Span::styled(code.into_string(), self.styles.code));
            }
            Event::SoftBreak => self.push_text(" "),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.lines.push(Line::from(Span::styled(
                    "─".repeat(self.width.min(24)),
                    self.styles.marker,
                )));
            }
            _ => {}
        }
    }

    /// Append text in the current style, wrapping long plain runs.
    fn push_text(&mut self, text: &str) {
        self.take_marker();
        let style = self.current_style();
        if self.current_spans.is_empty() && style == self.styles.base {
            // Plain paragraph start: wrap the run to the panel width.
            let mut wrapped = textwrap::wrap(text, self.width).into_iter();
            if let Some(first) = wrapped.next() {
                self.current_spans
                    .push(Span::styled(first.into_owned(), style));
            }
            for cont in wrapped {
                self.flush_line();
                self.current_spans
                    .push(Span::styled(cont.into_owned(), style));
            }
        } else {
            self.current_spans
                .push(Span::styled(text.to_string(), style));
        }
    }

    fn take_marker(&mut self) {
        if let Some(marker) = self.pending_marker.take() {
            self.current_spans
                .push(Span::styled(marker, self.styles.marker));
        }
    }

    fn flush_line(&mut self) {
        if !self.current_spans.is_empty() {
            self.lines.push(Line::from(std::mem::take(
                &mut self.current_spans,
            )));
        }
    }

    fn blank_line(&mut self) {
        if !self.lines.is_empty() {
            self.lines.push(Line::default());
        }
    }
}
