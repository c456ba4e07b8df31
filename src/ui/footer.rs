use crate::ui::pagination::PaginationState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const HINTS: &str =
    "/: Search │ p/f/v: Pricing │ [ ]: Min │ { }: Max │ s: Sort │ r: Reset │ q: Quit ";

/// Pagination status on the left, key hints on the right.
pub struct Footer {
    pagination: PaginationState,
}

impl Footer {
    pub fn new(pagination: PaginationState) -> Self {
        Self { pagination }
    }

    pub fn status_text(&self) -> String {
        let p = &self.pagination;
        if p.is_loading() {
            return format!(" Loading more… ({} of {})", p.revealed, p.total);
        }
        match p.end_message() {
            Some(message) => format!(" {}", message),
            None => format!(" Showing {} of {}", p.revealed, p.total),
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let status = self.status_text();
        let status_style = if self.pagination.is_loading() {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let hint_style = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);

        // Pad by char count, not byte count
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(status.chars().count())
            .saturating_sub(HINTS.chars().count());

        let line = Line::from(vec![
            Span::styled(status, status_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(HINTS, hint_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
