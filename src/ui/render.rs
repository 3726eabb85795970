use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::layout::screen_regions;
use crate::ui::modal::render_product_modal;
use crate::ui::navbar::{item_rects, render_logo, NavBar};
use crate::ui::sections::render_document;
use crate::ui::theme::CREAM;
use crate::ui::toast::render_toast;
use ratatui::style::Style;
use ratatui::Frame;
use std::time::Instant;

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.area();
    let (nav, body, hints) = screen_regions(area);

    frame.buffer_mut().set_style(area, Style::default().bg(CREAM));
    render_document(app, body, frame.buffer_mut());

    let navbar = NavBar::new(app.is_scrolled());
    frame.render_widget(navbar.widget(), nav);
    render_logo(nav, app.pictures(), frame.buffer_mut());
    for (anchor, rect) in item_rects(nav) {
        frame.render_widget(navbar.item(anchor), rect);
    }

    let footer = Footer::new(app.is_modal_open());
    frame.render_widget(footer.widget(hints), hints);

    if let Some(modal) = app.modal() {
        render_product_modal(frame, area, modal, now, app.pictures());
    }
    if let Some(toast) = app.toast() {
        render_toast(frame, area, toast);
    }
}
