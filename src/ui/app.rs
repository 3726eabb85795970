//! Page shell: scroll position, card focus, product selection and the
//! mounted modal.

use crate::catalog::{self, Product};
use crate::clipboard::ClipboardAccess;
use crate::config::{Config, UiConfig};
use crate::launcher::Launcher;
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};
use crate::site::{self, Anchor, CONTACT, SHARE_CONFIRMATION, SOCIAL};
use crate::ui::command::{Command, ModalCommand, PageCommand};
use crate::ui::layout::{contains, screen_regions};
use crate::ui::listeners::{Listeners, Subscription};
use crate::ui::modal::{description_scroll_limit, ModalLayout, ProductModal};
use crate::ui::navbar;
use crate::ui::page::{PageLayout, PageScroll, PageTarget};
use crate::ui::picture::PictureCache;
use crate::ui::toast::Toast;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::Instant;

const INITIAL_SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

/// A product shown in the modal, together with the scroll lock it holds.
///
/// Dropping the selection unmounts the modal first, then releases the lock.
struct Selection {
    modal: ProductModal,
    _scroll_lock: ScrollLockGuard,
}

pub struct App {
    should_quit: bool,
    ui: UiConfig,
    page_url: String,
    catalogue_url: Option<String>,
    products: &'static [Product],
    screen: Rect,
    layout: PageLayout,
    scroll: PageScroll,
    is_scrolled: bool,
    focused: usize,
    selection: Option<Selection>,
    keys: Listeners<KeyEvent, Command>,
    mouse: Listeners<MouseEvent, Command>,
    /// Scroll offsets in, "is scrolled" flag out.
    scroll_events: Listeners<u16, bool>,
    _page_keys: Subscription,
    _page_mouse: Subscription,
    _scroll_watch: Subscription,
    scroll_lock: ScrollLock,
    clipboard: Box<dyn ClipboardAccess>,
    launcher: Box<dyn Launcher>,
    toast: Option<Toast>,
    pictures: PictureCache,
    year: i32,
}

impl App {
    pub fn new(
        config: &Config,
        clipboard: Box<dyn ClipboardAccess>,
        launcher: Box<dyn Launcher>,
    ) -> Self {
        let keys = Listeners::new();
        let mouse = Listeners::new();
        let scroll_events = Listeners::new();
        let threshold = config.ui.scroll_threshold;
        let page_keys = keys.subscribe(page_key_command);
        let page_mouse = mouse.subscribe(page_mouse_command);
        let scroll_watch = scroll_events.subscribe(move |offset: &u16| Some(*offset > threshold));
        let products = catalog::products();

        Self {
            should_quit: false,
            ui: config.ui.clone(),
            page_url: config.site.page_url.clone(),
            catalogue_url: config.catalogue_url(),
            products,
            screen: INITIAL_SCREEN,
            layout: PageLayout::compute(INITIAL_SCREEN.width, products.len()),
            scroll: PageScroll::default(),
            is_scrolled: false,
            focused: 0,
            selection: None,
            keys,
            mouse,
            scroll_events,
            _page_keys: page_keys,
            _page_mouse: page_mouse,
            _scroll_watch: scroll_watch,
            scroll_lock: ScrollLock::new(),
            clipboard,
            launcher,
            toast: None,
            pictures: PictureCache::new(config.ui.assets_dir.clone()),
            year: site::current_year(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn products(&self) -> &'static [Product] {
        self.products
    }

    pub fn pictures(&self) -> &PictureCache {
        &self.pictures
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    /// `None` when no file store base URL is configured.
    pub fn catalogue_url(&self) -> Option<&str> {
        self.catalogue_url.as_deref()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll.offset()
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn focused_card(&self) -> usize {
        self.focused
    }

    pub fn selected_product(&self) -> Option<&'static Product> {
        self.selection.as_ref().map(|s| s.modal.product())
    }

    /// True from opening until the close transition has finished.
    pub fn is_modal_open(&self) -> bool {
        self.selection.is_some()
    }

    pub fn modal(&self) -> Option<&ProductModal> {
        self.selection.as_ref().map(|s| &s.modal)
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.screen = Rect::new(0, 0, cols, rows);
        self.layout = PageLayout::compute(cols, self.products.len());
        self.scroll.clamp(self.max_offset());
        self.notify_scroll();
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        if let Some(command) = self.keys.dispatch(&key) {
            self.handle(command, now);
        }
    }

    pub fn on_mouse(&mut self, event: MouseEvent, now: Instant) {
        if !self.ui.mouse {
            return;
        }
        if let Some(command) = self.mouse.dispatch(&event) {
            self.handle(command, now);
        }
    }

    /// Advance timers: toast expiry, modal close transition, smooth scroll.
    pub fn on_tick(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }

        let closed = self
            .selection
            .as_mut()
            .is_some_and(|selection| selection.modal.tick(now));
        if closed {
            self.close_modal();
        }

        if !self.scroll_lock.is_locked() && self.scroll.step() {
            self.notify_scroll();
        }
    }

    pub fn handle(&mut self, command: Command, now: Instant) {
        match command {
            Command::Quit => self.request_quit(),
            Command::Page(command) => self.handle_page(command, now),
            Command::Modal(command) => self.handle_modal(command, now),
        }
    }

    fn handle_page(&mut self, command: PageCommand, now: Instant) {
        // The modal owns input while mounted.
        if self.selection.is_some() {
            return;
        }
        match command {
            PageCommand::ScrollBy(steps) => {
                self.scroll_by(steps.saturating_mul(i32::from(self.ui.scroll_step)))
            }
            PageCommand::ScrollPage(pages) => {
                let page = i32::from(self.viewport_height().saturating_sub(1).max(1));
                self.scroll_by(pages.saturating_mul(page));
            }
            PageCommand::ScrollToTop => self.scroll_to(0),
            PageCommand::ScrollToBottom => self.scroll_to(self.max_offset()),
            PageCommand::Navigate(anchor) => self.navigate(anchor),
            PageCommand::FocusNext => self.move_focus(1),
            PageCommand::FocusPrev => self.move_focus(-1),
            PageCommand::ViewFocused => self.open_product(self.focused),
            PageCommand::ViewDetails(index) => self.open_product(index),
            PageCommand::Click { column, row } => self.click_page(column, row, now),
            PageCommand::DownloadCatalogue => self.download_catalogue(now),
            PageCommand::Email => self.open_link(&CONTACT.mailto(), now),
            PageCommand::Call => self.open_link(&CONTACT.tel(), now),
            PageCommand::OpenSocial => self.open_link(SOCIAL.url, now),
        }
    }

    fn handle_modal(&mut self, command: ModalCommand, now: Instant) {
        let Some(selection) = self.selection.as_mut() else {
            return;
        };
        match command {
            ModalCommand::Dismiss => selection.modal.dismiss(now),
            ModalCommand::PrevImage => selection.modal.prev_image(),
            ModalCommand::NextImage => selection.modal.next_image(),
            ModalCommand::ScrollDescription(delta) => {
                let max = description_scroll_limit(self.screen, selection.modal.product());
                selection.modal.scroll_description(delta, max);
            }
            ModalCommand::CopyShareLink => self.copy_share_link(now),
            ModalCommand::OpenSocial => self.open_link(SOCIAL.url, now),
            ModalCommand::Click { column, row } => {
                let command = self.modal_click_command(column, row, now);
                if command != ModalCommand::Absorb {
                    self.handle_modal(command, now);
                }
            }
            ModalCommand::Absorb => {}
        }
    }

    /// Open the modal for the product at `index` and lock page scrolling.
    pub fn open_product(&mut self, index: usize) {
        if self.selection.is_some() {
            return;
        }
        let Some(product) = self.products.get(index) else {
            tracing::warn!(index, "no product at index");
            return;
        };

        let scroll_lock = self.scroll_lock.acquire();
        let modal = ProductModal::mount(
            product,
            &self.keys,
            &self.mouse,
            self.ui.close_transition(),
        );
        self.focused = index;
        self.scroll.jump_to(self.scroll.offset(), self.max_offset());
        tracing::info!(article_id = product.article_id, "product opened");
        self.selection = Some(Selection {
            modal,
            _scroll_lock: scroll_lock,
        });
    }

    /// Start the close transition. The modal unmounts on a later tick.
    pub fn dismiss_modal(&mut self, now: Instant) {
        if let Some(selection) = self.selection.as_mut() {
            selection.modal.dismiss(now);
        }
    }

    /// Unmount the modal immediately, clearing the selection.
    pub fn close_modal(&mut self) {
        if let Some(selection) = self.selection.take() {
            tracing::info!(
                article_id = selection.modal.product().article_id,
                "product closed"
            );
        }
    }

    pub fn copy_share_link(&mut self, now: Instant) {
        let ttl = self.ui.toast_duration();
        match self.clipboard.set_text(&self.page_url) {
            Ok(()) => {
                tracing::debug!(url = %self.page_url, "share link copied");
                self.toast = Some(Toast::success(SHARE_CONFIRMATION, now, ttl));
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to copy share link");
                self.toast = Some(Toast::error("Could not copy the link", now, ttl));
            }
        }
    }

    pub fn open_link(&mut self, target: &str, now: Instant) {
        if let Err(err) = self.launcher.open(target) {
            tracing::warn!(error = %err, "failed to open link");
            self.toast = Some(Toast::error(
                format!("Could not open {target}"),
                now,
                self.ui.toast_duration(),
            ));
        }
    }

    pub fn download_catalogue(&mut self, now: Instant) {
        match self.catalogue_url.clone() {
            Some(url) => self.open_link(&url, now),
            None => {
                tracing::warn!("catalogue requested but no base URL is configured");
                self.toast = Some(Toast::error(
                    "Catalogue unavailable: BUCKET_URL is not set",
                    now,
                    self.ui.toast_duration(),
                ));
            }
        }
    }

    fn viewport_height(&self) -> u16 {
        screen_regions(self.screen).1.height
    }

    fn max_offset(&self) -> u16 {
        self.layout.max_offset(self.viewport_height())
    }

    fn scroll_by(&mut self, rows: i32) {
        if self.scroll_lock.is_locked() {
            return;
        }
        self.scroll.scroll_by(rows, self.max_offset());
        self.notify_scroll();
    }

    fn scroll_to(&mut self, offset: u16) {
        if self.scroll_lock.is_locked() {
            return;
        }
        self.scroll.jump_to(offset, self.max_offset());
        self.notify_scroll();
    }

    /// Smooth-scroll to `anchor`; the ticks do the rest.
    fn navigate(&mut self, anchor: Anchor) {
        if self.scroll_lock.is_locked() {
            return;
        }
        tracing::debug!(anchor = anchor.label(), "navigate");
        self.scroll
            .smooth_to(self.layout.anchor_offset(anchor), self.max_offset());
    }

    fn notify_scroll(&mut self) {
        if let Some(scrolled) = self.scroll_events.dispatch(&self.scroll.offset()) {
            self.is_scrolled = scrolled;
        }
    }

    fn move_focus(&mut self, delta: i32) {
        let count = self.products.len() as i32;
        if count == 0 {
            return;
        }
        self.focused = (self.focused as i32 + delta).rem_euclid(count) as usize;
        self.reveal_card(self.focused);
    }

    /// Scroll just enough to bring a card fully into view.
    fn reveal_card(&mut self, index: usize) {
        let Some(card) = self.layout.cards.get(index).copied() else {
            return;
        };
        let offset = self.scroll.offset();
        let height = self.viewport_height();
        if card.y < offset {
            self.scroll_to(card.y);
        } else if card.bottom() > offset + height {
            self.scroll_to(card.bottom().saturating_sub(height));
        }
    }

    fn click_page(&mut self, column: u16, row: u16, now: Instant) {
        let (nav, body, _) = screen_regions(self.screen);
        if contains(nav, column, row) {
            if let Some(anchor) = navbar::hit(nav, column, row) {
                self.navigate(anchor);
            }
            return;
        }
        if !contains(body, column, row) {
            return;
        }

        let x = column - body.x;
        let y = (row - body.y).saturating_add(self.scroll.offset());
        match self.layout.hit(x, y) {
            Some(PageTarget::Explore) => self.navigate(Anchor::Products),
            Some(PageTarget::Card(index)) => self.focused = index,
            Some(PageTarget::ViewDetails(index)) => self.open_product(index),
            Some(PageTarget::Email) => self.open_link(&CONTACT.mailto(), now),
            Some(PageTarget::Phone) => self.open_link(&CONTACT.tel(), now),
            Some(PageTarget::Social) => self.open_link(SOCIAL.url, now),
            Some(PageTarget::Download) => self.download_catalogue(now),
            None => {}
        }
    }

    fn modal_click_command(&self, column: u16, row: u16, now: Instant) -> ModalCommand {
        let Some(modal) = self.modal() else {
            return ModalCommand::Absorb;
        };
        let layout = ModalLayout::compute(
            self.screen,
            modal.closing_progress(now),
            modal.product().image_count(),
        );
        if !contains(layout.panel, column, row) || contains(layout.close, column, row) {
            return ModalCommand::Dismiss;
        }
        if contains(layout.copy_link, column, row) {
            return ModalCommand::CopyShareLink;
        }
        if contains(layout.social, column, row) {
            return ModalCommand::OpenSocial;
        }
        match layout.carousel {
            Some((prev, _, _)) if contains(prev, column, row) => ModalCommand::PrevImage,
            Some((_, _, next)) if contains(next, column, row) => ModalCommand::NextImage,
            _ => ModalCommand::Absorb,
        }
    }
}

fn page_key_command(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')).then_some(Command::Quit);
    }
    let command = match key.code {
        KeyCode::Char('q') => return Some(Command::Quit),
        KeyCode::Down | KeyCode::Char('j') => PageCommand::ScrollBy(1),
        KeyCode::Up | KeyCode::Char('k') => PageCommand::ScrollBy(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => PageCommand::ScrollPage(1),
        KeyCode::PageUp => PageCommand::ScrollPage(-1),
        KeyCode::Home | KeyCode::Char('g') => PageCommand::ScrollToTop,
        KeyCode::End | KeyCode::Char('G') => PageCommand::ScrollToBottom,
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => PageCommand::FocusNext,
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => PageCommand::FocusPrev,
        KeyCode::Enter => PageCommand::ViewFocused,
        KeyCode::Char('1') => PageCommand::Navigate(Anchor::Home),
        KeyCode::Char('2') => PageCommand::Navigate(Anchor::Products),
        KeyCode::Char('3') => PageCommand::Navigate(Anchor::Contact),
        KeyCode::Char('d') => PageCommand::DownloadCatalogue,
        KeyCode::Char('e') => PageCommand::Email,
        KeyCode::Char('p') => PageCommand::Call,
        KeyCode::Char('i') => PageCommand::OpenSocial,
        _ => return None,
    };
    Some(Command::Page(command))
}

fn page_mouse_command(event: &MouseEvent) -> Option<Command> {
    let command = match event.kind {
        MouseEventKind::ScrollDown => PageCommand::ScrollBy(1),
        MouseEventKind::ScrollUp => PageCommand::ScrollBy(-1),
        MouseEventKind::Down(MouseButton::Left) => PageCommand::Click {
            column: event.column,
            row: event.row,
        },
        _ => return None,
    };
    Some(Command::Page(command))
}
