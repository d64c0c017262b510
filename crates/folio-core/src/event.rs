//! Timeline event records.
//!
//! An [`EventRecord`] is the read-only input to the arc layout. Records come
//! from the content collections or are hand-assembled by callers; every field
//! is optional in spirit and missing data degrades to a documented default
//! rather than an error.

use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;

/// Year pattern recognized in free-text fields (19xx or 20xx).
fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(19|20)\d{2}").unwrap_or_else(|_| unreachable!()))
}

/// One event on the timeline.
#[derive(Debug, Clone, Default)]
pub struct EventRecord {
    /// Display label.
    pub title: String,
    /// Free-text date, ideally containing a 4-digit year.
    pub date: Option<String>,
    /// Explicit numeric year; takes priority over text extraction.
    pub year: Option<i32>,
    /// Rich-text (markdown) description, rendered verbatim.
    ///
    /// Trust boundary: the renderer performs no sanitization; suppliers are
    /// expected to hand over content they are willing to display as-is.
    pub blurb: String,
    /// Thumbnail image path; renderers substitute a fallback when absent or
    /// unreadable.
    pub thumb: Option<PathBuf>,
    /// Explicit icon: a path/URL renders as an image, any other non-empty
    /// string renders as an inline glyph. `None` falls back to keyword
    /// inference from the title.
    pub icon: Option<String>,
}

impl EventRecord {
    /// Create an event with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// The year used for chronological ordering.
    ///
    /// Priority: explicit `year` field, then a 4-digit year found in `date`,
    /// then one found in `title`. `None` means the event sorts before every
    /// dated event.
    pub fn inferred_year(&self) -> Option<i32> {
        if let Some(year) = self.year {
            return Some(year);
        }
        if let Some(date) = &self.date {
            if let Some(m) = year_re().find(date) {
                return m.as_str().parse().ok();
            }
        }
        year_re()
            .find(&self.title)
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Sort key; undated events take the minimum value and sort first.
    pub fn sort_year(&self) -> i32 {
        self.inferred_year().unwrap_or(i32::MIN)
    }

    /// The short label drawn on the ring for this event.
    ///
    /// Extracts the 4-digit year from the date string when present, otherwise
    /// falls back to the raw date text, the explicit year, or an empty label.
    pub fn display_year(&self) -> String {
        if let Some(date) = &self.date {
            if let Some(m) = year_re().find(date) {
                return m.as_str().to_string();
            }
            return date.clone();
        }
        self.year.map(|y| y.to_string()).unwrap_or_default()
    }
}

/// Sort events ascending by inferred year.
///
/// The sort is stable, so events sharing a year keep their supplied order,
/// and undated events group at the front.
pub fn sort_events(events: &mut [EventRecord]) {
    events.sort_by_key(EventRecord::sort_year);
}
