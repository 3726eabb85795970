//! Product detail modal.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent):
//! - `state.rs` - lifecycle phase, image cursor, description scroll
//! - `intent.rs` - dismissal, timer ticks, navigation
//! - `reducer.rs` - state transitions
//! - `dialog.rs` - layout and rendering
//!
//! [`ProductModal`] is the mounted component. Mounting subscribes its input
//! handlers; dropping it unsubscribes them, which also discards all internal
//! state so the next mount starts fresh.

mod cursor;
mod dialog;
mod intent;
mod reducer;
mod state;

pub use cursor::ImageCursor;
pub use dialog::{description_scroll_limit, render_product_modal, ModalLayout};
pub use intent::ModalIntent;
pub use reducer::ModalReducer;
pub use state::{ModalPhase, ModalState};

use crate::catalog::Product;
use crate::ui::command::{Command, ModalCommand};
use crate::ui::listeners::{Listeners, Subscription};
use crate::ui::mvi::Reducer;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};

pub struct ProductModal {
    product: &'static Product,
    state: ModalState,
    transition: Duration,
    _keys: Subscription,
    _mouse: Subscription,
}

impl ProductModal {
    /// Mount the modal for `product`, capturing keyboard and mouse input.
    pub fn mount(
        product: &'static Product,
        keys: &Listeners<KeyEvent, Command>,
        mouse: &Listeners<MouseEvent, Command>,
        transition: Duration,
    ) -> Self {
        Self {
            product,
            state: ModalState::new(product.image_count()),
            transition,
            _keys: keys.subscribe(modal_key_command),
            _mouse: mouse.subscribe(modal_mouse_command),
        }
    }

    pub fn product(&self) -> &'static Product {
        self.product
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn phase(&self) -> ModalPhase {
        self.state.phase
    }

    pub fn current_image(&self) -> &'static str {
        self.product
            .images()
            .get(self.state.cursor.index())
            .copied()
            .unwrap_or_else(|| self.product.image())
    }

    pub fn closing_progress(&self, now: Instant) -> f32 {
        self.state.closing_progress(now)
    }

    pub fn dismiss(&mut self, now: Instant) {
        self.dispatch(ModalIntent::Dismiss {
            now,
            transition: self.transition,
        });
    }

    /// Advance timers. Returns `true` once the modal has closed and should be
    /// unmounted by its owner.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.dispatch(ModalIntent::Tick { now });
        self.state.is_closed()
    }

    pub fn prev_image(&mut self) {
        self.dispatch(ModalIntent::PrevImage);
    }

    pub fn next_image(&mut self) {
        self.dispatch(ModalIntent::NextImage);
    }

    /// Scroll the description by `delta` rows, never past `max`.
    pub fn scroll_description(&mut self, delta: i32, max: u16) {
        self.dispatch(ModalIntent::Scroll { delta, max });
    }

    fn dispatch(&mut self, intent: ModalIntent) {
        self.state = ModalReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}

fn modal_key_command(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return Some(Command::Modal(ModalCommand::Absorb));
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    let command = match key.code {
        KeyCode::Esc => ModalCommand::Dismiss,
        KeyCode::Left => ModalCommand::PrevImage,
        KeyCode::Right => ModalCommand::NextImage,
        KeyCode::Up | KeyCode::Char('k') => ModalCommand::ScrollDescription(-1),
        KeyCode::Down | KeyCode::Char('j') => ModalCommand::ScrollDescription(1),
        KeyCode::Char('c') | KeyCode::Char('s') => ModalCommand::CopyShareLink,
        KeyCode::Char('i') => ModalCommand::OpenSocial,
        _ => ModalCommand::Absorb,
    };
    Some(Command::Modal(command))
}

fn modal_mouse_command(event: &MouseEvent) -> Option<Command> {
    let command = match event.kind {
        MouseEventKind::Down(MouseButton::Left) => ModalCommand::Click {
            column: event.column,
            row: event.row,
        },
        MouseEventKind::ScrollUp => ModalCommand::ScrollDescription(-1),
        MouseEventKind::ScrollDown => ModalCommand::ScrollDescription(1),
        _ => ModalCommand::Absorb,
    };
    Some(Command::Modal(command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn mount(keys: &Listeners<KeyEvent, Command>) -> ProductModal {
        let mouse = Listeners::new();
        ProductModal::mount(
            &catalog::products()[0],
            keys,
            &mouse,
            Duration::from_millis(300),
        )
    }

    #[test]
    fn mount_subscribes_and_drop_unsubscribes() {
        let keys = Listeners::new();
        let modal = mount(&keys);
        assert_eq!(keys.len(), 1);
        drop(modal);
        assert!(keys.is_empty());
    }

    #[test]
    fn escape_maps_to_dismiss() {
        let keys = Listeners::new();
        let _modal = mount(&keys);
        assert_eq!(
            keys.dispatch(&press(KeyCode::Esc)),
            Some(Command::Modal(ModalCommand::Dismiss))
        );
    }

    #[test]
    fn arrows_map_to_image_navigation() {
        let keys = Listeners::new();
        let _modal = mount(&keys);
        assert_eq!(
            keys.dispatch(&press(KeyCode::Left)),
            Some(Command::Modal(ModalCommand::PrevImage))
        );
        assert_eq!(
            keys.dispatch(&press(KeyCode::Right)),
            Some(Command::Modal(ModalCommand::NextImage))
        );
    }

    #[test]
    fn unrelated_keys_are_absorbed() {
        let keys = Listeners::new();
        let _modal = mount(&keys);
        assert_eq!(
            keys.dispatch(&press(KeyCode::Char('x'))),
            Some(Command::Modal(ModalCommand::Absorb))
        );
    }

    #[test]
    fn wheel_scrolls_description_not_page() {
        let event = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        };
        assert_eq!(
            modal_mouse_command(&event),
            Some(Command::Modal(ModalCommand::ScrollDescription(1)))
        );
    }

    #[test]
    fn lifecycle_open_closing_closed() {
        let keys = Listeners::new();
        let mut modal = mount(&keys);
        let now = Instant::now();
        assert_eq!(modal.phase(), ModalPhase::Open);

        modal.dismiss(now);
        assert!(modal.state().is_closing());
        assert!(!modal.tick(now + Duration::from_millis(100)));

        modal.dismiss(now + Duration::from_millis(250));
        assert!(!modal.tick(now + Duration::from_millis(299)));
        assert!(modal.tick(now + Duration::from_millis(300)));
    }

    #[test]
    fn current_image_follows_cursor() {
        let keys = Listeners::new();
        let mut modal = mount(&keys);
        let product = modal.product();
        modal.next_image();
        assert_eq!(modal.current_image(), product.image());
    }
}
