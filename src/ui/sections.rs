//! Page sections, drawn into an offscreen document buffer that is then
//! windowed into the body by the scroll offset.

use crate::site::{copyright_line, HERO};
use crate::ui::app::App;
use crate::ui::card::ProductCard;
use crate::ui::page::{
    download_label, email_label, explore_label, phone_label, social_label, PageLayout,
};
use crate::ui::theme::{
    blend, BUTTON_TEXT, CARD_BG, CREAM, FOOTER_TEXT, GOLD, INK, INK_MUTED, LAVENDER, MAROON,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

/// Banner wash, matching the cream gradient laid over the hero image.
const HERO_WASH: f32 = 0.8;

/// Render the whole document and copy the visible window into `body`.
pub fn render_document(app: &App, body: Rect, buf: &mut Buffer) {
    buf.set_style(body, Style::default().bg(CREAM).fg(INK));
    let layout = app.layout();
    if body.is_empty() || layout.height == 0 {
        return;
    }

    let mut document = Buffer::empty(Rect::new(0, 0, layout.width, layout.height));
    document.set_style(document.area, Style::default().bg(CREAM).fg(INK));
    render_hero(app, layout, &mut document);
    render_products(app, layout, &mut document);
    render_contact(layout, &mut document);
    render_download(app.catalogue_url().is_some(), layout, &mut document);
    render_footer(app.year(), layout, &mut document);

    blit(&document, app.scroll_offset(), body, buf);
}

fn blit(document: &Buffer, offset: u16, body: Rect, buf: &mut Buffer) {
    let width = body.width.min(document.area.width);
    for y in 0..body.height {
        let source_y = offset.saturating_add(y);
        if source_y >= document.area.height {
            break;
        }
        for x in 0..width {
            if let Some(cell) = buf.cell_mut((body.x + x, body.y + y)) {
                *cell = document[(x, source_y)].clone();
            }
        }
    }
}

fn render_hero(app: &App, layout: &PageLayout, buf: &mut Buffer) {
    app.pictures()
        .render_backdrop(HERO.background_image, layout.hero, CREAM, HERO_WASH, buf);

    let heading = Rect::new(layout.content.x, layout.hero.y + 2, layout.content.width, 1);
    Paragraph::new(HERO.heading)
        .alignment(Alignment::Center)
        .style(Style::default().fg(MAROON).add_modifier(Modifier::BOLD))
        .render(heading, buf);
    let subheading = Rect { y: heading.y + 2, ..heading };
    Paragraph::new(HERO.subheading)
        .alignment(Alignment::Center)
        .style(Style::default().fg(LAVENDER).add_modifier(Modifier::BOLD))
        .render(subheading, buf);

    let paragraphs: Vec<Line> = HERO
        .paragraphs
        .iter()
        .enumerate()
        .flat_map(|(i, text)| {
            let style = if i == 0 {
                Style::default().fg(INK)
            } else {
                Style::default().fg(blend(INK, CREAM, 0.1))
            };
            let mut lines = vec![Line::styled(*text, style)];
            if i + 1 < HERO.paragraphs.len() {
                lines.push(Line::from(""));
            }
            lines
        })
        .collect();
    Paragraph::new(paragraphs)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(layout.hero_text, buf);

    Paragraph::new(explore_label())
        .style(
            Style::default()
                .bg(LAVENDER)
                .fg(BUTTON_TEXT)
                .add_modifier(Modifier::BOLD),
        )
        .render(layout.explore, buf);
}

fn render_products(app: &App, layout: &PageLayout, buf: &mut Buffer) {
    let focused = app.focused_card();
    for (index, (product, area)) in app.products().iter().zip(&layout.cards).enumerate() {
        ProductCard::new(product, index == focused, app.pictures()).render(*area, buf);
    }
}

fn render_contact(layout: &PageLayout, buf: &mut Buffer) {
    Block::new()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(blend(GOLD, CREAM, 0.8)))
        .render(layout.contact, buf);
    Block::bordered()
        .border_style(Style::default().fg(blend(GOLD, CARD_BG, 0.4)))
        .style(Style::default().bg(CARD_BG).fg(INK))
        .render(layout.contact_card, buf);

    let heading = Rect::new(
        layout.contact_card.x + 1,
        layout.contact_card.y + 1,
        layout.contact_card.width.saturating_sub(2),
        1,
    );
    Paragraph::new("Contact Us")
        .alignment(Alignment::Center)
        .style(Style::default().fg(LAVENDER).add_modifier(Modifier::BOLD))
        .render(heading, buf);

    let link = Style::default().fg(blend(INK, CARD_BG, 0.2));
    Paragraph::new(email_label()).style(link).render(layout.email, buf);
    Paragraph::new(phone_label()).style(link).render(layout.phone, buf);
    Paragraph::new(social_label())
        .style(
            Style::default()
                .bg(LAVENDER)
                .fg(BUTTON_TEXT)
                .add_modifier(Modifier::BOLD),
        )
        .render(layout.social, buf);
}

fn render_download(available: bool, layout: &PageLayout, buf: &mut Buffer) {
    Block::new()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(blend(GOLD, CREAM, 0.8)))
        .render(layout.download_section, buf);
    let style = if available {
        Style::default()
            .bg(LAVENDER)
            .fg(BUTTON_TEXT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .bg(blend(LAVENDER, CREAM, 0.6))
            .fg(INK_MUTED)
            .add_modifier(Modifier::CROSSED_OUT)
    };
    Paragraph::new(download_label())
        .style(style)
        .render(layout.download, buf);
}

fn render_footer(year: i32, layout: &PageLayout, buf: &mut Buffer) {
    let line = Rect::new(layout.footer.x, layout.footer.y + 1, layout.footer.width, 1);
    Paragraph::new(copyright_line(year))
        .alignment(Alignment::Center)
        .style(Style::default().fg(FOOTER_TEXT))
        .render(line, buf);
}
