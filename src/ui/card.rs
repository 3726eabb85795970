use crate::catalog::Product;
use crate::ui::page::{card_button, VIEW_DETAILS_LABEL};
use crate::ui::picture::{Fit, PictureCache};
use crate::ui::theme::{
    blend, BUTTON_TEXT, CARD_BG, GOLD, INK, INK_MUTED, LAVENDER, MAROON,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

const PICTURE_ROWS: u16 = 5;
const TITLE_ROWS: u16 = 2;
const SUMMARY_ROWS: u16 = 3;

/// One product tile in the grid. Stateless: focus comes from the page.
pub struct ProductCard<'a> {
    product: &'a Product,
    focused: bool,
    pictures: &'a PictureCache,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product, focused: bool, pictures: &'a PictureCache) -> Self {
        Self {
            product,
            focused,
            pictures,
        }
    }
}

impl Widget for ProductCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            Style::default().fg(MAROON).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(blend(GOLD, CARD_BG, 0.4))
        };
        let block = Block::bordered()
            .border_style(border)
            .style(Style::default().bg(CARD_BG).fg(INK));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let mut y = inner.y;
        let mut take = |rows: u16| {
            let top = y.min(inner.bottom());
            let rows = rows.min(inner.bottom() - top);
            y = top + rows;
            Rect {
                y: top,
                height: rows,
                ..inner
            }
        };

        let picture = take(PICTURE_ROWS);
        let title = take(TITLE_ROWS);
        let article = take(1);
        let summary = take(SUMMARY_ROWS);
        let separator = take(1);
        let price = take(1);

        self.pictures.render(
            self.product.image(),
            self.product.title,
            Fit::Cover,
            picture,
            buf,
        );

        let title_color = if self.focused { MAROON } else { LAVENDER };
        Paragraph::new(self.product.title)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(title_color).add_modifier(Modifier::BOLD))
            .render(title, buf);
        Paragraph::new(format!("ArticleId: {}", self.product.article_id))
            .style(Style::default().fg(INK_MUTED))
            .render(article, buf);
        Paragraph::new(self.product.summary())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(INK))
            .render(summary, buf);
        Paragraph::new(Line::from("─".repeat(usize::from(separator.width))))
            .style(Style::default().fg(blend(GOLD, CARD_BG, 0.6)))
            .render(separator, buf);
        Paragraph::new(self.product.price_range)
            .style(Style::default().fg(MAROON).add_modifier(Modifier::BOLD))
            .render(price, buf);

        let button = card_button(area);
        if button.y > price.y && button.bottom() <= inner.bottom() {
            let fill = if self.focused { MAROON } else { LAVENDER };
            Paragraph::new(VIEW_DETAILS_LABEL)
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .bg(fill)
                        .fg(BUTTON_TEXT)
                        .add_modifier(Modifier::BOLD),
                )
                .render(button, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::ui::page::CARD_HEIGHT;

    fn render(product: &Product, focused: bool) -> Buffer {
        let pictures = PictureCache::new(None);
        let area = Rect::new(0, 0, 40, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        ProductCard::new(product, focused, &pictures).render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    fn all_text(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| row_text(buf, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_identity_price_and_button() {
        let product = &catalog::products()[1];
        let text = all_text(&render(product, false));
        assert!(text.contains("UTSAV HAMPER"));
        assert!(text.contains("ArticleId: BB1020252"));
        assert!(text.contains("₹649 – ₹849"));
        assert!(text.contains(VIEW_DETAILS_LABEL));
    }

    #[test]
    fn button_sits_on_the_clickable_row() {
        let product = &catalog::products()[0];
        let buf = render(product, false);
        let button = card_button(buf.area);
        assert!(row_text(&buf, button.y).contains(VIEW_DETAILS_LABEL));
    }

    #[test]
    fn focus_changes_button_fill() {
        let product = &catalog::products()[0];
        let button = card_button(Rect::new(0, 0, 40, CARD_HEIGHT));
        let plain = render(product, false);
        let focused = render(product, true);
        assert_eq!(plain[(button.x, button.y)].bg, LAVENDER);
        assert_eq!(focused[(button.x, button.y)].bg, MAROON);
    }
}
