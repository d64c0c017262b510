//! folio-core: Headless core for the folio terminal portfolio
//!
//! This crate provides the domain logic with no terminal dependencies:
//! - Content collections (projects, blog) over TOML-frontmatter markdown
//! - Timeline event records with year inference
//! - Arc geometry and equal-angle segment partitioning
//! - Icon resolution rules
//! - Static SVG export of the computed layout

pub mod config;
pub mod content;
pub mod event;
pub mod geometry;
pub mod icon;
pub mod layout;
pub mod svg;

// Re-export commonly used types
pub use config::{ConfigError, FolioConfig};
pub use content::{BlogEntry, ContentError, LoadIssue, Portfolio, ProjectEntry};
pub use event::{sort_events, EventRecord};
pub use geometry::{
    annular_sector_path, arc_path, arc_points, normalize_end_angle, polar_to_cartesian,
    wedge_path, Point,
};
pub use icon::{infer_from_title, resolve as resolve_icon, IconKind, ResolvedIcon};
pub use layout::{ArcLayout, Segment};
pub use svg::render_svg;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_version() {
        let version = core_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
