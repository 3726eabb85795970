//! Document geometry for the scrolling page.
//!
//! Every section is laid out in document coordinates (row 0 is the top of
//! the hero banner). Rendering and mouse hit testing both read the same
//! [`PageLayout`], so what is drawn is exactly what is clickable.

use crate::site::{Anchor, CONTACT, DOWNLOAD_LABEL, HERO, SOCIAL};
use crate::ui::layout::{centered_row, contains};
use ratatui::layout::Rect;

pub const MAX_CONTENT_WIDTH: u16 = 120;
const SIDE_MARGIN: u16 = 2;
const HERO_TEXT_WIDTH: u16 = 96;
const HERO_TOP_PADDING: u16 = 2;
const HERO_BOTTOM_PADDING: u16 = 2;
pub const CARD_HEIGHT: u16 = 16;
const GAP_X: u16 = 2;
const GAP_Y: u16 = 1;
const GRID_PADDING: u16 = 2;
pub const CONTACT_HEIGHT: u16 = 11;
pub const DOWNLOAD_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
/// Grid breakpoints, in columns of terminal width.
const TWO_COLUMNS_FROM: u16 = 60;
const THREE_COLUMNS_FROM: u16 = 100;

pub fn explore_label() -> String {
    format!("  {} ↓  ", HERO.call_to_action)
}

pub fn email_label() -> String {
    format!("✉  Email  {}", CONTACT.email)
}

pub fn phone_label() -> String {
    format!("☎  Phone  {}", CONTACT.phone_display)
}

pub fn social_label() -> String {
    format!("  ◎ {}  ", SOCIAL.handle)
}

pub fn download_label() -> String {
    format!("  ⤓ {}  ", DOWNLOAD_LABEL)
}

pub const VIEW_DETAILS_LABEL: &str = "View Details →";

/// Something clickable in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Explore,
    /// Anywhere on a card except its button.
    Card(usize),
    ViewDetails(usize),
    Email,
    Phone,
    Social,
    Download,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u16,
    pub columns: u16,
    /// Centered column that holds all section content.
    pub content: Rect,
    pub hero: Rect,
    pub hero_text: Rect,
    pub explore: Rect,
    pub products: Rect,
    pub cards: Vec<Rect>,
    pub contact: Rect,
    pub contact_card: Rect,
    pub email: Rect,
    pub phone: Rect,
    pub social: Rect,
    pub download_section: Rect,
    pub download: Rect,
    pub footer: Rect,
    pub height: u16,
}

impl PageLayout {
    pub fn compute(width: u16, product_count: usize) -> Self {
        let content_width = width
            .saturating_sub(SIDE_MARGIN * 2)
            .min(MAX_CONTENT_WIDTH)
            .max(1);
        let content_x = width.saturating_sub(content_width) / 2;
        let content = Rect::new(content_x, 0, content_width, 0);

        let text_width = content_width.min(HERO_TEXT_WIDTH);
        let text_rows = HERO
            .paragraphs
            .iter()
            .map(|p| wrapped_rows(p, text_width))
            .sum::<u16>()
            + 1;
        let hero_text = Rect::new(
            content_x + (content_width - text_width) / 2,
            HERO_TOP_PADDING + 4,
            text_width,
            text_rows,
        );
        let explore_y = hero_text.bottom() + 1;
        let hero = Rect::new(0, 0, width, explore_y + 1 + HERO_BOTTOM_PADDING);
        let explore = centered_row(hero, explore_y, label_width(&explore_label()));

        let columns = grid_columns(width);
        let card_width = content_width.saturating_sub(GAP_X * (columns - 1)) / columns;
        let grid_top = hero.bottom() + GRID_PADDING;
        let cards: Vec<Rect> = (0..product_count)
            .map(|index| {
                let col = (index % usize::from(columns)) as u16;
                let row = (index / usize::from(columns)) as u16;
                Rect::new(
                    content_x + col * (card_width + GAP_X),
                    grid_top + row * (CARD_HEIGHT + GAP_Y),
                    card_width,
                    CARD_HEIGHT,
                )
            })
            .collect();
        let grid_bottom = cards.last().map_or(grid_top, |card| card.bottom());
        let products = Rect::new(
            0,
            hero.bottom(),
            width,
            grid_bottom + GRID_PADDING - hero.bottom(),
        );

        let contact = Rect::new(0, products.bottom(), width, CONTACT_HEIGHT);
        let contact_card = Rect::new(content_x, contact.y + 1, content_width, CONTACT_HEIGHT - 2);
        let email = centered_row(contact_card, contact_card.y + 3, label_width(&email_label()));
        let phone = centered_row(contact_card, contact_card.y + 4, label_width(&phone_label()));
        let social = centered_row(contact_card, contact_card.y + 6, label_width(&social_label()));

        let download_section = Rect::new(0, contact.bottom(), width, DOWNLOAD_HEIGHT);
        let download = centered_row(
            download_section,
            download_section.y + 1,
            label_width(&download_label()),
        );
        let footer = Rect::new(0, download_section.bottom(), width, FOOTER_HEIGHT);

        Self {
            width,
            columns,
            content: Rect {
                height: footer.bottom(),
                ..content
            },
            hero,
            hero_text,
            explore,
            products,
            cards,
            contact,
            contact_card,
            email,
            phone,
            social,
            download_section,
            download,
            footer,
            height: footer.bottom(),
        }
    }

    /// Document row where `anchor`'s section starts.
    pub fn anchor_offset(&self, anchor: Anchor) -> u16 {
        match anchor {
            Anchor::Home => self.hero.y,
            Anchor::Products => self.products.y,
            Anchor::Contact => self.contact.y,
        }
    }

    /// Largest scroll offset for a viewport `viewport_height` rows tall.
    pub fn max_offset(&self, viewport_height: u16) -> u16 {
        self.height.saturating_sub(viewport_height)
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<PageTarget> {
        if contains(self.explore, column, row) {
            return Some(PageTarget::Explore);
        }
        if let Some(index) = self.cards.iter().position(|card| contains(*card, column, row)) {
            if contains(card_button(self.cards[index]), column, row) {
                return Some(PageTarget::ViewDetails(index));
            }
            return Some(PageTarget::Card(index));
        }
        [
            (self.email, PageTarget::Email),
            (self.phone, PageTarget::Phone),
            (self.social, PageTarget::Social),
            (self.download, PageTarget::Download),
        ]
        .into_iter()
        .find(|(rect, _)| contains(*rect, column, row))
        .map(|(_, target)| target)
    }
}

/// The "View Details" row inside a card.
pub fn card_button(card: Rect) -> Rect {
    Rect {
        x: card.x + 2.min(card.width),
        y: card.bottom().saturating_sub(2),
        width: card.width.saturating_sub(4),
        height: card.height.min(1),
    }
}

fn grid_columns(width: u16) -> u16 {
    if width >= THREE_COLUMNS_FROM {
        3
    } else if width >= TWO_COLUMNS_FROM {
        2
    } else {
        1
    }
}

fn label_width(label: &str) -> u16 {
    label.chars().count() as u16
}

/// Rows `text` needs when word-wrapped at `width`, with one row of slack for
/// words pushed onto the next line.
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let chars = text.chars().count() as u16;
    chars.div_ceil(width.max(1)) + 1
}

/// Vertical scroll position with an optional smooth-scroll target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageScroll {
    offset: u16,
    target: Option<u16>,
}

impl PageScroll {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn target(&self) -> Option<u16> {
        self.target
    }

    /// Move immediately, cancelling any smooth scroll in flight.
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(max));
        self.jump_to(next as u16, max);
    }

    pub fn jump_to(&mut self, offset: u16, max: u16) {
        self.target = None;
        self.offset = offset.min(max);
    }

    pub fn smooth_to(&mut self, target: u16, max: u16) {
        self.target = Some(target.min(max));
    }

    /// Advance one tick towards the target. Returns `true` if the offset moved.
    pub fn step(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let distance = target.abs_diff(self.offset);
        if distance == 0 {
            self.target = None;
            return false;
        }
        let stride = (distance / 3).max(1);
        self.offset = if target > self.offset {
            self.offset + stride
        } else {
            self.offset - stride
        };
        if self.offset == target {
            self.target = None;
        }
        true
    }

    pub fn clamp(&mut self, max: u16) {
        self.offset = self.offset.min(max);
        self.target = self.target.map(|t| t.min(max));
    }
}
