use crate::ui::theme::{CREAM_SHADE, INK_MUTED};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const PAGE_HINTS: &str =
    " ↑↓: Scroll │ Tab: Next card │ Enter: View details │ 1-3: Jump │ d: Catalogue │ q: Quit";
const MODAL_HINTS: &str = " Esc: Close │ ←→: Images │ ↑↓: Description │ c: Copy link │ i: Instagram";

/// Key hint line along the bottom edge.
pub struct Footer {
    modal_open: bool,
}

impl Footer {
    pub fn new(modal_open: bool) -> Self {
        Self { modal_open }
    }

    pub fn hints(&self) -> &'static str {
        if self.modal_open {
            MODAL_HINTS
        } else {
            PAGE_HINTS
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: the hints contain arrows and box glyphs.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let padding = (area.width as usize)
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(INK_MUTED).bg(CREAM_SHADE);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style.add_modifier(Modifier::DIM)),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
    }
}
