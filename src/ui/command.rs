//! Messages produced by input listeners and consumed by the page shell.

use crate::site::Anchor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Page(PageCommand),
    Modal(ModalCommand),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCommand {
    /// Scroll by a signed number of steps (negative is up).
    ScrollBy(i32),
    ScrollPage(i32),
    ScrollToTop,
    ScrollToBottom,
    Navigate(Anchor),
    FocusNext,
    FocusPrev,
    /// "View Details" on the focused card.
    ViewFocused,
    /// "View Details" on the card at this catalog index.
    ViewDetails(usize),
    Click { column: u16, row: u16 },
    DownloadCatalogue,
    Email,
    Call,
    OpenSocial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalCommand {
    Dismiss,
    PrevImage,
    NextImage,
    ScrollDescription(i32),
    CopyShareLink,
    OpenSocial,
    Click { column: u16, row: u16 },
    /// Input swallowed so it never reaches the page underneath.
    Absorb,
}
