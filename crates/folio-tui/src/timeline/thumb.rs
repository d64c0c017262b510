//! Thumbnail loading with one-shot fallback.
//!
//! A slot tries the event's own thumbnail first; when that is missing or
//! undecodable it substitutes the configured fallback image exactly once.
//! A failure on the fallback itself parks the slot in the failed state, so
//! repeated render passes never retry in a loop.

use std::path::PathBuf;

use image::imageops::FilterType;
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

/// A decoded thumbnail, downsampled to half-block cells.
///
/// Each cell covers two vertical pixels: the top one as the `▀` foreground,
/// the bottom one as the background.
#[derive(Debug, Clone)]
pub struct ThumbImage {
    cols: u16,
    rows: u16,
    /// Row-major `(top, bottom)` colors, `cols * rows` entries.
    cells: Vec<(Color, Color)>,
}

impl ThumbImage {
    /// Cell dimensions of the decoded image.
    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Draw the image into the top-left of `area`.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let cols = self.cols.min(area.width);
        let rows = self.rows.min(area.height);
        for row in 0..rows {
            for col in 0..cols {
                let (top, bottom) = self.cells[usize::from(row) * usize::from(self.cols)
                    + usize::from(col)];
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol("\u{2580}"); // ▀
                    cell.set_fg(top);
                    cell.set_bg(bottom);
                }
            }
        }
    }
}

/// Load and downsample an image to `cols x rows` half-block cells.
fn load_thumb(path: &std::path::Path, cols: u16, rows: u16) -> Result<ThumbImage, image::ImageError> {
    let img = image::ImageReader::open(path)
        .map_err(image::ImageError::IoError)?
        .decode()?;

    let px_w = u32::from(cols.max(1));
    let px_h = u32::from(rows.max(1)) * 2;
    let rgb = img.resize_exact(px_w, px_h, FilterType::Triangle).to_rgb8();

    let mut cells = Vec::with_capacity(usize::from(cols) * usize::from(rows));
    for row in 0..u32::from(rows.max(1)) {
        for col in 0..px_w {
            let top = rgb.get_pixel(col, row * 2);
            let bottom = rgb.get_pixel(col, row * 2 + 1);
            cells.push((
                Color::Rgb(top[0], top[1], top[2]),
                Color::Rgb(bottom[0], bottom[1], bottom[2]),
            ));
        }
    }

    Ok(ThumbImage {
        cols: cols.max(1),
        rows: rows.max(1),
        cells,
    })
}

/// Loading state of a slot.
#[derive(Debug, Clone)]
enum ThumbState {
    Unloaded,
    Ready(ThumbImage),
    Failed,
}

/// The thumbnail for one detail panel.
#[derive(Debug, Clone)]
pub struct ThumbSlot {
    primary: Option<PathBuf>,
    fallback: PathBuf,
    fallback_applied: bool,
    state: ThumbState,
}

impl ThumbSlot {
    /// Create a slot for an event's thumbnail.
    pub fn new(primary: Option<PathBuf>, fallback: PathBuf) -> Self {
        Self {
            primary,
            fallback,
            fallback_applied: false,
            state: ThumbState::Unloaded,
        }
    }

    /// Whether the fallback substitution has happened.
    pub fn fallback_applied(&self) -> bool {
        self.fallback_applied
    }

    /// Whether loading gave up (both sources unusable).
    pub fn is_failed(&self) -> bool {
        matches!(self.state, ThumbState::Failed)
    }

    /// The decoded image, if loading succeeded.
    pub fn image(&self) -> Option<&ThumbImage> {
        match &self.state {
            ThumbState::Ready(img) => Some(img),
            _ => None,
        }
    }

    /// Load on first use at the given cell size.
    ///
    /// The failure path substitutes the fallback at most once; once failed,
    /// later calls are no-ops.
    pub fn ensure_loaded(&mut self, cols: u16, rows: u16) {
        if !matches!(self.state, ThumbState::Unloaded) {
            return;
        }

        let source = self.primary.clone().unwrap_or_else(|| self.fallback.clone());
        match load_thumb(&source, cols, rows) {
            Ok(img) => self.state = ThumbState::Ready(img),
            Err(_) if !self.fallback_applied && source != self.fallback => {
                self.fallback_applied = true;
                match load_thumb(&self.fallback, cols, rows) {
                    Ok(img) => self.state = ThumbState::Ready(img),
                    Err(_) => self.state = ThumbState::Failed,
                }
            }
            Err(_) => {
                // The first attempt was already the fallback; don't loop.
                self.fallback_applied = true;
                self.state = ThumbState::Failed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_png(path: &Path) {
        let mut img = image::RgbImage::new(4, 4);
        for p in img.pixels_mut() {
            *p = image::Rgb([200, 100, 50]);
        }
        img.save(path).expect("write png");
    }

    #[test]
    fn test_primary_loads_without_fallback() {
        let dir = tempfile::tempdir().expect("tempdir");
        let primary = dir.path().join("thumb.png");
        write_png(&primary);

        let mut slot = ThumbSlot::new(Some(primary), dir.path().join("fallback.png"));
        slot.ensure_loaded(8, 4);
        assert!(slot.image().is_some());
        assert!(!slot.fallback_applied());
    }

    #[test]
    fn test_missing_primary_substitutes_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        let fallback = dir.path().join("fallback.png");
        write_png(&fallback);

        let mut slot = ThumbSlot::new(Some(dir.path().join("nope.png")), fallback);
        slot.ensure_loaded(8, 4);
        assert!(slot.fallback_applied());
        assert!(slot.image().is_some());
    }

    #[test]
    fn test_double_failure_does_not_loop() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut slot = ThumbSlot::new(
            Some(dir.path().join("nope.png")),
            dir.path().join("also-nope.png"),
        );

        slot.ensure_loaded(8, 4);
        assert!(slot.is_failed());
        assert!(slot.fallback_applied());

        // Further calls stay failed; the guard latches.
        slot.ensure_loaded(8, 4);
        assert!(slot.is_failed());
        assert!(slot.image().is_none());
    }

    #[test]
    fn test_no_primary_uses_fallback_directly() {
        let dir = tempfile::tempdir().expect("tempdir");
        let fallback = dir.path().join("fallback.png");
        write_png(&fallback);

        let mut slot = ThumbSlot::new(None, fallback);
        slot.ensure_loaded(8, 4);
        assert!(slot.image().is_some());
        // Using the fallback for a missing thumb is the normal path, not a
        // failure substitution.
        assert!(!slot.fallback_applied());
    }

    #[test]
    fn test_no_primary_and_missing_fallback_fails_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut slot = ThumbSlot::new(None, dir.path().join("nope.png"));
        slot.ensure_loaded(8, 4);
        assert!(slot.is_failed());
        slot.ensure_loaded(8, 4);
        assert!(slot.is_failed());
    }

    #[test]
    fn test_decoded_size_and_render() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("t.png");
        write_png(&path);

        let mut slot = ThumbSlot::new(Some(path), dir.path().join("f.png"));
        slot.ensure_loaded(6, 3);
        let img = slot.image().expect("image");
        assert_eq!(img.size(), (6, 3));

        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        img.render(area, &mut buf);
        let cell = buf.cell((0, 0)).expect("cell");
        assert_eq!(cell.symbol(), "\u{2580}");
    }
}
