//! Icon resolution for timeline events.
//!
//! An explicit icon value always wins: path-like values render as images and
//! anything else renders as an inline glyph. Without one, the event title is
//! matched against an ordered rule table and the first hit decides; unknown
//! titles get the generic default.

use std::path::PathBuf;

use crate::event::EventRecord;

/// Built-in icon identities; glyph strings live in the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// Work placements and internships.
    Briefcase,
    /// Volunteering and community work.
    Heart,
    /// Game and engine projects.
    Gamepad,
    /// Degrees and coursework.
    GraduationCap,
    /// Talks and conferences.
    Megaphone,
    /// Generic default.
    Spark,
}

/// Outcome of resolving an event's icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedIcon {
    /// Render the image at this path or URL.
    Image(PathBuf),
    /// Render this string verbatim (an emoji or short glyph).
    Glyph(String),
    /// Render a built-in glyph chosen by the presentation layer.
    Builtin(IconKind),
}

/// Keyword rules evaluated in order; first match wins.
const TITLE_RULES: &[(&[&str], IconKind)] = &[
    (&["intern"], IconKind::Briefcase),
    (&["volunteer"], IconKind::Heart),
    (&["unity", "game"], IconKind::Gamepad),
    (
        &["b.s.", "degree", "university", "computer science"],
        IconKind::GraduationCap,
    ),
    (&["talk", "conference"], IconKind::Megaphone),
];

/// Whether an explicit icon value should be treated as an image reference.
fn looks_like_image(value: &str) -> bool {
    value.starts_with('/') || value.starts_with("./") || value.starts_with("http")
}

/// Infer an icon from a title via the keyword rules.
pub fn infer_from_title(title: &str) -> IconKind {
    let lower = title.to_lowercase();
    TITLE_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map_or(IconKind::Spark, |&(_, kind)| kind)
}

/// Resolve the icon for an event.
pub fn resolve(event: &EventRecord) -> ResolvedIcon {
    match event.icon.as_deref() {
        Some(value) if looks_like_image(value) => ResolvedIcon::Image(PathBuf::from(value)),
        Some(value) if !value.is_empty() => ResolvedIcon::Glyph(value.to_string()),
        _ => ResolvedIcon::Builtin(infer_from_title(&event.title)),
    }
}
