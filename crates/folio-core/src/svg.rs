//! Static SVG export of the arc timeline.
//!
//! Mirrors the interactive render tree element-for-element: base band,
//! separator strokes, per-segment sector + wedge groups, year labels. The
//! output is deterministic for a given layout.

use std::fmt::Write as _;

use crate::geometry::{annular_sector_path, arc_path, polar_to_cartesian, wedge_path};
use crate::layout::ArcLayout;

/// Embedded default palette; hosts can restyle via the emitted classes.
const STYLE: &str = "\
.band{fill:rgba(96,165,250,0.18);}\
.sep{stroke:rgba(205,214,244,0.35);stroke-width:1;}\
.segment{fill:rgba(96,165,250,0.10);}\
.wedge{fill:rgba(180,190,254,0.8);}\
.trace{stroke:rgba(148,226,213,0.9);stroke-width:2;fill:none;}\
.year{fill:#cdd6f4;font:14px sans-serif;text-anchor:middle;dominant-baseline:middle;}";

/// Render the layout as a standalone SVG document.
pub fn render_svg(layout: &ArcLayout, size: f64) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {size:.0} {size:.0}\">"
    );
    let _ = write!(out, "<style>{STYLE}</style>");

    // Base continuous band.
    let _ = write!(
        out,
        "<path class=\"band\" d=\"{}\"/>",
        annular_sector_path(
            layout.center,
            layout.r_outer,
            layout.r_inner,
            layout.start_deg,
            layout.end_deg,
        )
    );

    // Separators at interior boundaries (radial strokes, not gaps).
    for segment in layout.segments.iter().skip(1) {
        let inner = polar_to_cartesian(layout.center, layout.r_inner, segment.start_deg);
        let outer = polar_to_cartesian(layout.center, layout.r_outer, segment.start_deg);
        let _ = write!(
            out,
            "<path class=\"sep\" d=\"M {:.2} {:.2} L {:.2} {:.2}\"/>",
            inner.x, inner.y, outer.x, outer.y,
        );
    }

    // Per-segment sector, wedge, and center-line trace.
    for segment in &layout.segments {
        let _ = write!(out, "<g data-index=\"{}\">", segment.index);
        let _ = write!(
            out,
            "<path class=\"segment\" d=\"{}\"/>",
            annular_sector_path(
                layout.center,
                layout.r_outer,
                layout.r_inner,
                segment.start_deg,
                segment.end_deg,
            )
        );
        let _ = write!(
            out,
            "<path class=\"wedge\" d=\"{}\"/>",
            wedge_path(
                layout.center,
                layout.wedge_base,
                layout.wedge_length,
                segment.mid_deg,
                layout.wedge_half_spread,
            )
        );
        let _ = write!(
            out,
            "<path class=\"trace\" d=\"{}\"/>",
            arc_path(
                layout.center,
                layout.radius,
                segment.start_deg,
                segment.end_deg,
            )
        );
        let _ = write!(out, "</g>");
    }

    // Year labels along the inner edge.
    for segment in &layout.segments {
        let year = segment.event.display_year();
        if year.is_empty() {
            continue;
        }
        let at = polar_to_cartesian(layout.center, layout.label_radius, segment.mid_deg);
        let _ = write!(
            out,
            "<text class=\"year\" x=\"{:.2}\" y=\"{:.2}\">{}</text>",
            at.x,
            at.y,
            escape_text(&year),
        );
    }

    out.push_str("</svg>");
    out
}

/// Minimal XML text escaping for label content.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
