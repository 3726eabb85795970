use super::ProductModal;
use crate::catalog::Product;
use crate::site::SOCIAL;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::picture::{Fit, PictureCache};
use crate::ui::theme::{blend, BACKDROP, CARD_BG, GOLD, INK, INK_MUTED, LAVENDER, MAROON};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;
use std::time::Instant;

const PANEL_MAX_WIDTH: u16 = 96;
const PANEL_MAX_HEIGHT: u16 = 30;
/// Panels narrower than this stack the picture above the details.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 64;
/// Scale reached at the end of the exit animation.
const CLOSED_SCALE: f32 = 0.95;
const BACKDROP_STRENGTH: f32 = 0.6;

pub const COPY_LINK_LABEL: &str = "⎘ Copy link [c]";
const CLOSE_LABEL: &str = "[✕]";

/// Geometry of the modal, shared by rendering and mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub panel: Rect,
    pub close: Rect,
    pub picture: Rect,
    /// Previous / counter / next controls; only with more than one image.
    pub carousel: Option<(Rect, Rect, Rect)>,
    pub title: Rect,
    pub article: Rect,
    pub copy_link: Rect,
    pub social: Rect,
    pub description: Rect,
    pub price: Rect,
}

impl ModalLayout {
    pub fn compute(area: Rect, progress: f32, image_count: usize) -> Self {
        let scale = 1.0 - (1.0 - CLOSED_SCALE) * progress.clamp(0.0, 1.0);
        let width = area.width.saturating_sub(4).min(PANEL_MAX_WIDTH);
        let height = area.height.saturating_sub(2).min(PANEL_MAX_HEIGHT);
        let panel = centered_rect_by_size(
            area,
            (f32::from(width) * scale).round() as u16,
            (f32::from(height) * scale).round() as u16,
        );
        let inner = Rect {
            x: panel.x + 1,
            y: panel.y + 1,
            width: panel.width.saturating_sub(2),
            height: panel.height.saturating_sub(2),
        };

        let close_width = CLOSE_LABEL.chars().count() as u16;
        let close = Rect {
            x: panel.right().saturating_sub(close_width + 2).max(panel.x),
            y: panel.y,
            width: close_width.min(panel.width),
            height: panel.height.min(1),
        };

        let carousel_rows = u16::from(image_count > 1);
        let (picture_column, details) = if inner.width >= SIDE_BY_SIDE_MIN_WIDTH {
            let left = inner.width * 2 / 5;
            (
                Rect { width: left, ..inner },
                Rect {
                    x: inner.x + left + 2,
                    width: inner.width.saturating_sub(left + 2),
                    ..inner
                },
            )
        } else {
            let top = (inner.height / 3).min(8);
            (
                Rect { height: top, ..inner },
                Rect {
                    y: inner.y + top + 1,
                    height: inner.height.saturating_sub(top + 1),
                    ..inner
                },
            )
        };

        let picture = Rect {
            height: picture_column.height.saturating_sub(carousel_rows),
            ..picture_column
        };
        let carousel = (carousel_rows > 0).then(|| {
            let y = picture.bottom();
            let counter_width = 7;
            let mid = picture_column.x + picture_column.width / 2;
            (
                Rect::new(mid.saturating_sub(counter_width / 2 + 2), y, 1, 1),
                Rect::new(mid.saturating_sub(counter_width / 2), y, counter_width, 1),
                Rect::new(mid + counter_width / 2 + 2, y, 1, 1),
            )
        });

        let row = |offset: u16| Rect {
            y: details.y + offset.min(details.height),
            height: u16::from(offset < details.height),
            ..details
        };
        let title = row(0);
        let article = row(1);
        let actions = row(3);
        let copy_width = (COPY_LINK_LABEL.chars().count() as u16).min(actions.width);
        let copy_link = Rect {
            width: copy_width,
            ..actions
        };
        let social = Rect {
            x: actions.x + copy_width + 3,
            width: actions.width.saturating_sub(copy_width + 3),
            ..actions
        };
        let description = Rect {
            y: details.y + 5.min(details.height),
            height: details.height.saturating_sub(5 + 3),
            ..details
        };
        let price = Rect {
            y: details.bottom().saturating_sub(2).max(details.y),
            height: details.height.min(1),
            ..details
        };

        Self {
            panel,
            close,
            picture,
            carousel,
            title,
            article,
            copy_link,
            social,
            description,
            price,
        }
    }
}

fn description_text(product: &'static Product) -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = product.description_lines().map(Line::from).collect();
    Paragraph::new(lines).wrap(Wrap { trim: true })
}

/// Furthest the description can scroll on an `area`-sized screen: wrapped
/// rows past the last full box.
pub fn description_scroll_limit(area: Rect, product: &'static Product) -> u16 {
    let layout = ModalLayout::compute(area, 0.0, product.image_count());
    let rows = description_text(product).line_count(layout.description.width);
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(layout.description.height)
}

pub fn render_product_modal(
    frame: &mut Frame,
    area: Rect,
    modal: &ProductModal,
    now: Instant,
    pictures: &PictureCache,
) {
    let product = modal.product();
    let state = modal.state();
    let progress = modal.closing_progress(now);
    let layout = ModalLayout::compute(area, progress, product.image_count());

    shade(frame.buffer_mut(), area, BACKDROP_STRENGTH * (1.0 - progress));
    frame.render_widget(Clear, layout.panel);
    frame.render_widget(
        Block::bordered()
            .border_style(Style::default().fg(GOLD))
            .style(Style::default().bg(CARD_BG).fg(INK)),
        layout.panel,
    );
    frame.render_widget(
        Paragraph::new(CLOSE_LABEL).style(Style::default().fg(INK).bg(CARD_BG)),
        layout.close,
    );

    pictures.render(
        modal.current_image(),
        product.title,
        Fit::Contain,
        layout.picture,
        frame.buffer_mut(),
    );
    if let Some((prev, counter, next)) = layout.carousel {
        let control = Style::default().fg(LAVENDER).add_modifier(Modifier::BOLD);
        frame.render_widget(Paragraph::new("‹").style(control), prev);
        frame.render_widget(
            Paragraph::new(format!(
                "{}/{}",
                state.cursor.index() + 1,
                state.cursor.count()
            ))
            .alignment(Alignment::Center)
            .style(Style::default().fg(INK_MUTED)),
            counter,
        );
        frame.render_widget(Paragraph::new("›").style(control), next);
    }

    frame.render_widget(
        Paragraph::new(product.title)
            .style(Style::default().fg(LAVENDER).add_modifier(Modifier::BOLD)),
        layout.title,
    );
    frame.render_widget(
        Paragraph::new(format!("ArticleId: {}", product.article_id))
            .style(Style::default().fg(INK_MUTED)),
        layout.article,
    );
    frame.render_widget(
        Paragraph::new(COPY_LINK_LABEL).style(Style::default().fg(INK)),
        layout.copy_link,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("◎ ", Style::default().fg(LAVENDER)),
            Span::styled(
                SOCIAL.handle,
                Style::default().fg(LAVENDER).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" [i]", Style::default().fg(INK_MUTED)),
        ])),
        layout.social,
    );

    // Clamped again here since a resize can shrink the limit.
    let scroll = state
        .description_scroll
        .min(description_scroll_limit(area, product));
    frame.render_widget(
        description_text(product)
            .scroll((scroll, 0))
            .style(Style::default().fg(INK)),
        layout.description,
    );

    // Price only: there is nothing to buy here.
    frame.render_widget(
        Paragraph::new(product.price_range)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .bg(LAVENDER)
                    .fg(MAROON)
                    .add_modifier(Modifier::BOLD),
            ),
        layout.price,
    );

    if progress > 0.0 {
        shade(frame.buffer_mut(), layout.panel, BACKDROP_STRENGTH * progress);
    }
}

fn shade(buf: &mut Buffer, area: Rect, amount: f32) {
    if amount <= 0.0 {
        return;
    }
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.fg = blend(cell.fg, BACKDROP, amount);
                cell.bg = blend(cell.bg, BACKDROP, amount);
            }
        }
    }
}
