//! Icon glyph sets for Nerd Fonts, Unicode, and ASCII fallback.

use folio_core::{IconKind, ResolvedIcon};

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Nerd Font icons (richest experience).
    Nerd,
    /// Standard Unicode symbols (wide compatibility, default).
    #[default]
    Unicode,
    /// ASCII-only fallback (maximum compatibility, also used with `NO_COLOR`).
    Ascii,
}

impl IconMode {
    /// Parse a config value; unknown values get the default.
    pub fn by_name(name: &str) -> Self {
        match name {
            "nerd" => Self::Nerd,
            "ascii" => Self::Ascii,
            _ => Self::Unicode,
        }
    }
}

/// Icon set based on configured mode.
#[derive(Debug, Clone)]
pub struct IconSet {
    mode: IconMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current icon mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Glyph for a built-in icon kind.
    pub fn builtin(&self, kind: IconKind) -> &'static str {
        match (kind, self.mode) {
            (IconKind::Briefcase, IconMode::Nerd) => "󰃖",
            (IconKind::Briefcase, IconMode::Unicode) => "💼",
            (IconKind::Briefcase, IconMode::Ascii) => "[W]",

            (IconKind::Heart, IconMode::Nerd) => "󰋑",
            (IconKind::Heart, IconMode::Unicode) => "♥",
            (IconKind::Heart, IconMode::Ascii) => "<3",

            (IconKind::Gamepad, IconMode::Nerd) => "󰊴",
            (IconKind::Gamepad, IconMode::Unicode) => "🎮",
            (IconKind::Gamepad, IconMode::Ascii) => "[G]",

            (IconKind::GraduationCap, IconMode::Nerd) => "󰑴",
            (IconKind::GraduationCap, IconMode::Unicode) => "🎓",
            (IconKind::GraduationCap, IconMode::Ascii) => "[U]",

            (IconKind::Megaphone, IconMode::Nerd) => "󰍧",
            (IconKind::Megaphone, IconMode::Unicode) => "📣",
            (IconKind::Megaphone, IconMode::Ascii) => "[T]",

            (IconKind::Spark, IconMode::Nerd) => "󰛨",
            (IconKind::Spark, IconMode::Unicode) => "✦",
            (IconKind::Spark, IconMode::Ascii) => "[+]",
        }
    }

    /// Glyph used in place of an image icon reference.
    pub fn picture(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰋩",
            IconMode::Unicode => "🖼",
            IconMode::Ascii => "[#]",
        }
    }

    /// Render a resolved icon to a display string.
    ///
    /// Image references collapse to the picture glyph here; the actual image
    /// is the thumbnail pipeline's business, not the title line's.
    pub fn display(&self, icon: &ResolvedIcon) -> String {
        match icon {
            ResolvedIcon::Image(_) => self.picture().to_string(),
            ResolvedIcon::Glyph(glyph) => glyph.clone(),
            ResolvedIcon::Builtin(kind) => self.builtin(*kind).to_string(),
        }
    }

    // === UI chrome ===

    pub fn help(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰋖",
            IconMode::Unicode | IconMode::Ascii => "?",
        }
    }

    pub fn arrow_left(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰁍",
            IconMode::Unicode => "←",
            IconMode::Ascii => "<-",
        }
    }

    pub fn arrow_right(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰁔",
            IconMode::Unicode => "→",
            IconMode::Ascii => "->",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_is_unicode() {
        let icons = IconSet::default();
        assert_eq!(icons.mode(), IconMode::Unicode);
    }

    #[test]
    fn test_builtin_glyphs_per_mode() {
        assert_eq!(IconSet::new(IconMode::Unicode).builtin(IconKind::Spark), "✦");
        assert_eq!(IconSet::new(IconMode::Ascii).builtin(IconKind::Spark), "[+]");
        assert_eq!(
            IconSet::new(IconMode::Ascii).builtin(IconKind::Briefcase),
            "[W]"
        );
    }

    #[test]
    fn test_ascii_glyphs_are_distinct() {
        let icons = IconSet::new(IconMode::Ascii);
        let all = [
            IconKind::Briefcase,
            IconKind::Heart,
            IconKind::Gamepad,
            IconKind::GraduationCap,
            IconKind::Megaphone,
            IconKind::Spark,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(icons.builtin(*a), icons.builtin(*b));
            }
        }
    }

    #[test]
    fn test_display_variants() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(
            icons.display(&ResolvedIcon::Image(PathBuf::from("/x.png"))),
            icons.picture()
        );
        assert_eq!(icons.display(&ResolvedIcon::Glyph("🚀".into())), "🚀");
        assert_eq!(icons.display(&ResolvedIcon::Builtin(IconKind::Heart)), "♥");
    }

    #[test]
    fn test_mode_by_name() {
        assert_eq!(IconMode::by_name("nerd"), IconMode::Nerd);
        assert_eq!(IconMode::by_name("ascii"), IconMode::Ascii);
        assert_eq!(IconMode::by_name("anything"), IconMode::Unicode);
    }
}
