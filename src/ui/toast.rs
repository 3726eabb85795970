//! Short-lived notifications drawn top-center above everything else.

use crate::ui::layout::centered_row;
use crate::ui::theme::{CARD_BG, INK, STATUS_ERROR, STATUS_OK};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            expires_at: now + ttl,
        }
    }

    pub fn error(message: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let (icon, color) = match toast.kind {
        ToastKind::Success => ("✔", STATUS_OK),
        ToastKind::Error => ("✖", STATUS_ERROR),
    };
    let width = toast.message.chars().count() as u16 + 6;
    let top = centered_row(area, area.y + 1, width);
    let rect = Rect {
        height: 3.min(area.height.saturating_sub(1)),
        ..top
    };
    if rect.is_empty() {
        return;
    }

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(color)),
            Span::styled(toast.message.clone(), Style::default().fg(INK)),
        ]))
        .block(
            Block::bordered()
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(CARD_BG)),
        ),
        rect,
    );
}
