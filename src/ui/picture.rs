//! Product and banner pictures drawn with half-block cells.
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one as
//! the foreground of `▀`, the lower one as the background. Images that are
//! missing or fail to decode fall back to a labelled placeholder.

use crate::ui::theme::{blend, INK_MUTED, PICTURE_BG};
use image::imageops::FilterType;
use parking_lot::Mutex;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget, Wrap};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const UPPER_HALF: &str = "▀";

/// How a picture fills its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fit {
    /// Fill the area, cropping overflow (card thumbnails, banner).
    Cover,
    /// Fit inside the area, centered (modal).
    Contain,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Key {
    path: String,
    width: u16,
    height: u16,
    fit: Fit,
}

/// Decoded picture, one `(upper, lower)` color pair per cell.
#[derive(Debug)]
struct Pixels {
    width: u16,
    height: u16,
    cells: Vec<(Color, Color)>,
}

/// Decodes pictures on first use and keeps them per target size.
pub struct PictureCache {
    assets_dir: Option<PathBuf>,
    rendered: Mutex<HashMap<Key, Option<Arc<Pixels>>>>,
}

impl PictureCache {
    pub fn new(assets_dir: Option<PathBuf>) -> Self {
        Self {
            assets_dir,
            rendered: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve a site path such as `/UTSAV_HAMPER.png` inside the assets dir.
    pub fn resolve(&self, path: &str) -> Option<PathBuf> {
        let dir = self.assets_dir.as_deref()?;
        Some(dir.join(path.trim_start_matches('/')))
    }

    /// Draw `path` into `area`, or a placeholder captioned with `alt`.
    pub fn render(&self, path: &str, alt: &str, fit: Fit, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, Style::default().bg(PICTURE_BG));
        match self.pixels(path, area.width, area.height, fit) {
            Some(pixels) => draw_pixels(&pixels, area, buf),
            None => render_placeholder(alt, path, area, buf),
        }
    }

    /// Draw `path` as a flat background washed towards `wash` by `amount`.
    ///
    /// Does nothing when the picture is unavailable.
    pub fn render_backdrop(&self, path: &str, area: Rect, wash: Color, amount: f32, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let Some(pixels) = self.pixels(path, area.width, area.height, Fit::Cover) else {
            return;
        };
        for y in 0..pixels.height.min(area.height) {
            for x in 0..pixels.width.min(area.width) {
                let (upper, lower) = pixels.cells[usize::from(y) * usize::from(pixels.width) + usize::from(x)];
                let color = blend(blend(upper, lower, 0.5), wash, amount);
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    cell.set_symbol(" ");
                    cell.set_bg(color);
                }
            }
        }
    }

    fn pixels(&self, path: &str, width: u16, height: u16, fit: Fit) -> Option<Arc<Pixels>> {
        let key = Key {
            path: path.to_string(),
            width,
            height,
            fit,
        };
        if let Some(cached) = self.rendered.lock().get(&key) {
            return cached.clone();
        }

        let decoded = self
            .resolve(path)
            .and_then(|file| decode(&file, width, height, fit))
            .map(Arc::new);
        self.rendered.lock().insert(key, decoded.clone());
        decoded
    }
}

fn decode(file: &Path, width: u16, height: u16, fit: Fit) -> Option<Pixels> {
    let image = match image::open(file) {
        Ok(image) => image,
        Err(err) => {
            tracing::debug!(path = %file.display(), error = %err, "picture unavailable");
            return None;
        }
    };

    let target_w = u32::from(width);
    let target_h = u32::from(height) * 2;
    let resized = match fit {
        Fit::Cover => image.resize_to_fill(target_w, target_h, FilterType::Triangle),
        Fit::Contain => image.resize(target_w, target_h, FilterType::Triangle),
    };
    let rgb = resized.to_rgb8();
    let (px_w, px_h) = rgb.dimensions();
    if px_w == 0 || px_h == 0 {
        return None;
    }

    let cell_w = px_w.min(target_w);
    let cell_h = px_h.div_ceil(2);
    let color_at = |x: u32, y: u32| {
        let [r, g, b] = rgb.get_pixel(x, y.min(px_h - 1)).0;
        Color::Rgb(r, g, b)
    };
    let mut cells = Vec::with_capacity((cell_w * cell_h) as usize);
    for cy in 0..cell_h {
        for cx in 0..cell_w {
            cells.push((color_at(cx, cy * 2), color_at(cx, cy * 2 + 1)));
        }
    }

    Some(Pixels {
        width: cell_w as u16,
        height: cell_h as u16,
        cells,
    })
}

fn draw_pixels(pixels: &Pixels, area: Rect, buf: &mut Buffer) {
    let width = pixels.width.min(area.width);
    let height = pixels.height.min(area.height);
    let left = area.x + (area.width - width) / 2;
    let top = area.y + (area.height - height) / 2;
    for y in 0..height {
        for x in 0..width {
            let (upper, lower) = pixels.cells[usize::from(y) * usize::from(pixels.width) + usize::from(x)];
            if let Some(cell) = buf.cell_mut((left + x, top + y)) {
                cell.set_symbol(UPPER_HALF);
                cell.set_fg(upper);
                cell.set_bg(lower);
            }
        }
    }
}

fn render_placeholder(alt: &str, path: &str, area: Rect, buf: &mut Buffer) {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let mut lines = vec![Line::from(alt.to_string())];
    if area.height > 2 {
        lines.insert(0, Line::from("◇"));
        lines.push(Line::from(file_name.to_string()));
    }
    let text_height = (lines.len() as u16).min(area.height);
    let top = area.y + (area.height - text_height) / 2;
    Paragraph::new(lines)
        .style(Style::default().fg(INK_MUTED).bg(PICTURE_BG))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(
            Rect {
                y: top,
                height: area.bottom() - top,
                ..area
            },
            buf,
        );
}
