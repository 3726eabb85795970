use crate::site::{Anchor, BRAND_NAME, BRAND_SUFFIX, LOGO_IMAGE, LOGO_MONOGRAM, TAGLINE};
use crate::ui::layout::contains;
use crate::ui::picture::{Fit, PictureCache};
use crate::ui::theme::{CREAM, GOLD, INK, INK_MUTED, LAVENDER, MAROON};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const ITEM_GAP: u16 = 4;
const RIGHT_PADDING: u16 = 2;
const LEFT_PADDING: u16 = 2;
const LOGO_WIDTH: u16 = 4;
const LOGO_HEIGHT: u16 = 2;
/// Brand text starts one column past the logo.
const BRAND_INDENT: &str = "       ";

/// Fixed navigation bar. Transparent over the banner, solid once the page
/// has scrolled.
pub struct NavBar {
    scrolled: bool,
}

impl NavBar {
    pub fn new(scrolled: bool) -> Self {
        Self { scrolled }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let brand = Line::from(vec![
            Span::raw(BRAND_INDENT),
            Span::styled(
                BRAND_NAME,
                Style::default().fg(LAVENDER).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(BRAND_SUFFIX, Style::default().fg(MAROON)),
        ]);
        let tagline = Line::from(vec![
            Span::raw(BRAND_INDENT),
            Span::styled(
                TAGLINE.to_uppercase(),
                Style::default().fg(INK_MUTED).add_modifier(Modifier::DIM),
            ),
        ]);

        let block = if self.scrolled {
            Block::new()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GOLD))
                .style(Style::default().bg(CREAM).fg(INK))
        } else {
            Block::new().style(Style::default().fg(INK))
        };
        Paragraph::new(vec![brand, tagline]).block(block)
    }

    pub fn item(&self, anchor: Anchor) -> Paragraph<'static> {
        Paragraph::new(anchor.label()).style(Style::default().fg(INK))
    }
}

/// Logo cell block left of the brand text, clipped to `nav`.
pub fn logo_rect(nav: Rect) -> Rect {
    Rect::new(nav.x + LEFT_PADDING, nav.y, LOGO_WIDTH, LOGO_HEIGHT).intersection(nav)
}

/// Draw the logo picture, or the monogram when it is unavailable.
pub fn render_logo(nav: Rect, pictures: &PictureCache, buf: &mut Buffer) {
    pictures.render(LOGO_IMAGE, LOGO_MONOGRAM, Fit::Contain, logo_rect(nav), buf);
}

/// Clickable nav items, right-aligned on the first row of `nav`.
pub fn item_rects(nav: Rect) -> Vec<(Anchor, Rect)> {
    let total: u16 = Anchor::ALL
        .iter()
        .map(|a| a.label().len() as u16)
        .sum::<u16>()
        + ITEM_GAP * (Anchor::ALL.len() as u16 - 1);
    let mut x = nav.right().saturating_sub(total + RIGHT_PADDING).max(nav.x);
    Anchor::ALL
        .iter()
        .filter_map(|anchor| {
            let width = anchor.label().len() as u16;
            if nav.height == 0 || x + width > nav.right() {
                return None;
            }
            let rect = Rect::new(x, nav.y, width, 1);
            x += width + ITEM_GAP;
            Some((*anchor, rect))
        })
        .collect()
}

pub fn hit(nav: Rect, column: u16, row: u16) -> Option<Anchor> {
    item_rects(nav)
        .into_iter()
        .find(|(_, rect)| contains(*rect, column, row))
        .map(|(anchor, _)| anchor)
}
