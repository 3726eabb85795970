//! End-to-end behavior of the page shell: selection, modal lifecycle,
//! scroll lock, share link and outbound links.

mod common;

use common::*;
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use vanika::config::Config;
use vanika::site::{Anchor, SHARE_CONFIRMATION, SOCIAL};
use vanika::ui::layout::NAV_HEIGHT;
use vanika::ui::modal::ModalPhase;
use vanika::ui::navbar::item_rects;
use vanika::ui::page::card_button;
use vanika::ui::toast::ToastKind;
use ratatui::layout::Rect;

const EXPECTED_TITLES: [&str; 6] = [
    "SNEHA & SAMRUDDHI HAMPER",
    "UTSAV HAMPER",
    "GOLDEN GLOW LAKSHMI HAMPER",
    "BANDHAN-E-KHUSHIYAN PACK",
    "FAMILY FIESTA HAMPER",
    "DIL SE DIWALI HAMPER",
];

/// Screen coordinates of a card's "View Details" button.
fn view_details_position(app: &vanika::ui::app::App, index: usize) -> (u16, u16) {
    let button = card_button(app.layout().cards[index]);
    let row = NAV_HEIGHT + button.y - app.scroll_offset();
    (button.x + 1, row)
}

// -- Grid ----------------------------------------------------------------------

#[test]
fn six_cards_in_catalog_order() {
    let app = make_app();
    let titles: Vec<&str> = app.products().iter().map(|p| p.title).collect();
    assert_eq!(titles, EXPECTED_TITLES);
    assert_eq!(app.layout().cards.len(), 6);
    assert!(!app.is_modal_open());
    assert!(app.selected_product().is_none());
}

#[test]
fn view_details_on_third_card_opens_golden_glow() {
    let mut app = make_app();
    let now = Instant::now();
    let (column, row) = view_details_position(&app, 2);

    app.on_mouse(left_click(column, row), now);

    let product = app.selected_product().expect("product selected");
    assert_eq!(product.title, "GOLDEN GLOW LAKSHMI HAMPER");
    assert_eq!(product.price_range, "₹499 – ₹799");
    assert_eq!(product.article_id, "BB1020253");
    assert!(app.is_modal_open());
    assert!(app.scroll_lock().is_locked());
}

#[test]
fn keyboard_focus_and_enter_open_the_focused_card() {
    let mut app = make_app();
    let now = Instant::now();
    app.on_key(press_key(KeyCode::Tab), now);
    app.on_key(press_key(KeyCode::Tab), now);
    assert_eq!(app.focused_card(), 2);

    app.on_key(press_key(KeyCode::Enter), now);
    assert_eq!(
        app.selected_product().map(|p| p.title),
        Some("GOLDEN GLOW LAKSHMI HAMPER")
    );
}

#[test]
fn focus_wraps_around_the_grid() {
    let mut app = make_app();
    let now = Instant::now();
    app.on_key(press_key(KeyCode::BackTab), now);
    assert_eq!(app.focused_card(), 5);
    app.on_key(press_key(KeyCode::Tab), now);
    assert_eq!(app.focused_card(), 0);
}

#[test]
fn focusing_an_offscreen_card_scrolls_it_into_view() {
    let mut app = make_app();
    let now = Instant::now();
    for _ in 0..5 {
        app.on_key(press_key(KeyCode::Tab), now);
    }
    let card = app.layout().cards[5];
    let viewport = SCREEN_ROWS - NAV_HEIGHT - 1;
    assert!(app.scroll_offset() <= card.y);
    assert!(card.bottom() <= app.scroll_offset() + viewport);
}

// -- Modal lifecycle -----------------------------------------------------------

#[test]
fn escape_closes_after_transition_and_releases_lock_once() {
    let mut app = make_app();
    let t0 = Instant::now();
    app.open_product(2);
    assert!(app.scroll_lock().is_locked());

    app.on_key(press_key(KeyCode::Esc), t0);
    assert!(matches!(
        app.modal().map(|m| m.phase()),
        Some(ModalPhase::Closing { .. })
    ));

    app.on_tick(t0 + Duration::from_millis(100));
    assert!(app.is_modal_open());

    // A second dismissal while closing neither re-arms nor shortens the timer.
    app.on_key(press_key(KeyCode::Esc), t0 + Duration::from_millis(250));
    app.on_tick(t0 + Duration::from_millis(299));
    assert!(app.is_modal_open());

    app.on_tick(t0 + Duration::from_millis(300));
    assert!(!app.is_modal_open());
    assert!(app.selected_product().is_none());
    assert!(!app.scroll_lock().is_locked());

    let stats = app.scroll_lock().stats();
    assert_eq!(stats.acquisitions, 1);
    assert_eq!(stats.releases, 1);
}

#[test]
fn scrolling_is_restored_after_close() {
    let mut app = make_app();
    let t0 = Instant::now();
    app.open_product(0);
    app.on_mouse(wheel_down(), t0);
    assert_eq!(app.scroll_offset(), 0);

    app.dismiss_modal(t0);
    app.on_tick(t0 + Duration::from_millis(300));
    app.on_mouse(wheel_down(), t0);
    assert_eq!(app.scroll_offset(), 3);
}

#[test]
fn backdrop_click_dismisses() {
    let mut app = make_app();
    let now = Instant::now();
    app.open_product(1);
    app.on_mouse(left_click(0, 0), now);
    assert!(matches!(
        app.modal().map(|m| m.phase()),
        Some(ModalPhase::Closing { .. })
    ));
}

#[test]
fn click_inside_panel_does_not_dismiss() {
    let mut app = make_app();
    let now = Instant::now();
    app.open_product(1);
    let center = (SCREEN_COLS / 2, SCREEN_ROWS / 2);
    app.on_mouse(left_click(center.0, center.1), now);
    assert_eq!(app.modal().map(|m| m.phase()), Some(ModalPhase::Open));
}

#[test]
fn dropping_the_app_mid_transition_releases_lock() {
    let mut app = make_app();
    let lock = app.scroll_lock().clone();
    app.open_product(4);
    app.dismiss_modal(Instant::now());
    drop(app);

    assert!(!lock.is_locked());
    assert_eq!(lock.stats().releases, 1);
}

#[test]
fn close_modal_unmounts_immediately() {
    let mut app = make_app();
    app.open_product(3);
    app.close_modal();
    assert!(!app.is_modal_open());
    assert!(!app.scroll_lock().is_locked());
}

#[test]
fn reopening_starts_from_fresh_state() {
    let mut app = make_app();
    app.on_resize(60, 24);
    let t0 = Instant::now();
    app.open_product(0);
    app.on_key(press_key(KeyCode::Down), t0);
    assert_eq!(app.modal().map(|m| m.state().description_scroll), Some(1));

    app.dismiss_modal(t0);
    app.on_tick(t0 + Duration::from_millis(300));
    app.open_product(0);
    let modal = app.modal().expect("modal mounted");
    assert_eq!(modal.state().description_scroll, 0);
    assert_eq!(modal.state().cursor.index(), 0);
    assert_eq!(modal.phase(), ModalPhase::Open);
}

#[test]
fn page_keys_do_not_reach_the_page_while_modal_is_open() {
    let mut app = make_app();
    let now = Instant::now();
    app.open_product(0);
    app.on_key(press_key(KeyCode::Char('q')), now);
    app.on_key(press_key(KeyCode::Tab), now);
    assert!(!app.should_quit());
    assert_eq!(app.focused_card(), 0);
}

#[test]
fn ctrl_c_quits_even_with_modal_open() {
    let mut app = make_app();
    app.open_product(0);
    app.on_key(ctrl_key('c'), Instant::now());
    assert!(app.should_quit());
}

#[test]
fn escape_on_page_is_ignored_and_q_quits() {
    let mut app = make_app();
    let now = Instant::now();
    app.on_key(press_key(KeyCode::Esc), now);
    assert!(!app.should_quit());
    app.on_key(press_key(KeyCode::Char('q')), now);
    assert!(app.should_quit());
}

// -- Scrolling and navigation --------------------------------------------------

#[test]
fn scrolled_flag_tracks_threshold() {
    let mut app = make_app();
    let now = Instant::now();
    assert!(!app.is_scrolled());

    app.on_key(press_key(KeyCode::Down), now);
    assert_eq!(app.scroll_offset(), 3);
    assert!(!app.is_scrolled());

    app.on_key(press_key(KeyCode::Down), now);
    assert!(app.is_scrolled());

    app.on_key(press_key(KeyCode::Home), now);
    assert_eq!(app.scroll_offset(), 0);
    assert!(!app.is_scrolled());
}

#[test]
fn navigation_scrolls_smoothly_to_anchor() {
    let mut app = make_app();
    let now = Instant::now();
    app.on_key(press_key(KeyCode::Char('2')), now);
    assert_eq!(app.scroll_offset(), 0);

    app.on_tick(now);
    let first_step = app.scroll_offset();
    assert!(first_step > 0);

    settle(&mut app, now);
    assert_eq!(
        app.scroll_offset(),
        app.layout().anchor_offset(Anchor::Products)
    );
    assert!(app.is_scrolled());
}

#[test]
fn nav_bar_click_navigates() {
    let mut app = make_app();
    let now = Instant::now();
    let (_, contact) = item_rects(Rect::new(0, 0, SCREEN_COLS, NAV_HEIGHT))[2];
    app.on_mouse(left_click(contact.x, contact.y), now);
    settle(&mut app, now);

    let max = app.layout().height - (SCREEN_ROWS - NAV_HEIGHT - 1);
    let expected = app.layout().anchor_offset(Anchor::Contact).min(max);
    assert_eq!(app.scroll_offset(), expected);
}

#[test]
fn explore_button_targets_products() {
    let mut app = make_app();
    let now = Instant::now();
    let explore = app.layout().explore;
    app.on_mouse(left_click(explore.x, NAV_HEIGHT + explore.y), now);
    settle(&mut app, now);
    assert_eq!(
        app.scroll_offset(),
        app.layout().anchor_offset(Anchor::Products)
    );
}

#[test]
fn end_key_stops_at_document_bottom() {
    let mut app = make_app();
    app.on_key(press_key(KeyCode::End), Instant::now());
    let max = app.layout().height - (SCREEN_ROWS - NAV_HEIGHT - 1);
    assert_eq!(app.scroll_offset(), max);
}

#[test]
fn mouse_can_be_disabled() {
    let mut config = Config::default();
    config.ui.mouse = false;
    let mut harness = make_harness(config);
    harness.app.on_mouse(wheel_down(), Instant::now());
    assert_eq!(harness.app.scroll_offset(), 0);
}

// -- Share link ------------------------------------------------------------------

#[test]
fn share_link_copies_page_url_for_any_product() {
    let mut config = Config::default();
    config.site.page_url = "https://vanika.example/".to_string();
    let mut harness = make_harness(config);
    let t0 = Instant::now();

    harness.app.open_product(0);
    harness.app.on_key(press_key(KeyCode::Char('c')), t0);
    harness.app.close_modal();
    harness.app.open_product(4);
    harness.app.on_key(press_key(KeyCode::Char('s')), t0);

    assert_eq!(
        *harness.clipboard.writes.lock(),
        vec!["https://vanika.example/", "https://vanika.example/"]
    );
    let toast = harness.app.toast().expect("toast shown");
    assert_eq!(toast.message, SHARE_CONFIRMATION);
    assert_eq!(toast.kind, ToastKind::Success);
}

#[test]
fn clipboard_failure_becomes_error_toast() {
    let mut harness = make_harness_with(
        Config::default(),
        FakeClipboard::failing(),
        FakeLauncher::default(),
    );
    harness.app.open_product(1);
    harness.app.copy_share_link(Instant::now());

    assert_eq!(harness.app.toast().map(|t| t.kind), Some(ToastKind::Error));
    assert!(harness.app.is_modal_open());
}

#[test]
fn toast_expires() {
    let mut harness = make_harness(Config::default());
    let t0 = Instant::now();
    harness.app.open_product(1);
    harness.app.copy_share_link(t0);
    harness.app.on_tick(t0 + Duration::from_millis(1999));
    assert!(harness.app.toast().is_some());
    harness.app.on_tick(t0 + Duration::from_millis(2000));
    assert!(harness.app.toast().is_none());
}

// -- Outbound links --------------------------------------------------------------

#[test]
fn contact_keys_open_mail_phone_and_social() {
    let mut harness = make_harness(Config::default());
    let now = Instant::now();
    harness.app.on_key(press_key(KeyCode::Char('e')), now);
    harness.app.on_key(press_key(KeyCode::Char('p')), now);
    harness.app.on_key(press_key(KeyCode::Char('i')), now);

    assert_eq!(
        *harness.launcher.opened.lock(),
        vec![
            "mailto:vanikacreations2025@gmail.com".to_string(),
            "tel:+917116299557".to_string(),
            SOCIAL.url.to_string(),
        ]
    );
}

#[test]
fn download_without_base_url_shows_error() {
    let mut harness = make_harness(Config::default());
    harness.app.on_key(press_key(KeyCode::Char('d')), Instant::now());
    assert!(harness.launcher.opened.lock().is_empty());
    assert_eq!(harness.app.toast().map(|t| t.kind), Some(ToastKind::Error));
}

#[test]
fn download_opens_composed_catalogue_url() {
    let mut config = Config::default();
    config.catalogue.base_url = Some("https://files.example.com/bucket/".to_string());
    let mut harness = make_harness(config);
    harness.app.on_key(press_key(KeyCode::Char('d')), Instant::now());
    assert_eq!(
        *harness.launcher.opened.lock(),
        vec!["https://files.example.com/bucket/vanika-diwali-hampers.pdf".to_string()]
    );
}

#[test]
fn launch_failure_becomes_error_toast() {
    let launcher = FakeLauncher {
        fail: true,
        ..FakeLauncher::default()
    };
    let mut harness = make_harness_with(Config::default(), FakeClipboard::default(), launcher);
    harness.app.on_key(press_key(KeyCode::Char('e')), Instant::now());
    assert_eq!(harness.app.toast().map(|t| t.kind), Some(ToastKind::Error));
}

#[test]
fn social_link_from_modal() {
    let mut harness = make_harness(Config::default());
    harness.app.open_product(5);
    harness.app.on_key(press_key(KeyCode::Char('i')), Instant::now());
    assert_eq!(*harness.launcher.opened.lock(), vec![SOCIAL.url.to_string()]);
}
