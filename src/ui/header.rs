use crate::catalog::PricingOption;
use crate::filter::FilterState;
use crate::ui::app::Focus;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SEARCH_PLACEHOLDER: &str = "Find the Items you're looking for";

/// Filter bar: search box, pricing checkboxes, price range, sort and URL.
pub struct Header<'a> {
    filters: &'a FilterState,
    focus: Focus,
    url: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(filters: &'a FilterState, focus: Focus, url: &'a str) -> Self {
        Self { filters, focus, url }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let lines = vec![self.search_line(), self.filter_line(), self.url_line()];
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    fn search_line(&self) -> Line<'static> {
        let focused = self.focus == Focus::Search;
        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };

        let mut spans = vec![Span::styled(" Search  ", label_style)];
        if self.filters.search_text.is_empty() && !focused {
            spans.push(Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(MUTED_TEXT)));
        } else {
            spans.push(Span::styled(
                self.filters.search_text.clone(),
                Style::default().fg(HEADER_TEXT),
            ));
        }
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
        }
        Line::from(spans)
    }

    fn filter_line(&self) -> Line<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::styled(" Pricing Option ", text_style)];
        for option in PricingOption::ALL {
            let checked = self.filters.pricing.contains(option);
            let mark = if checked { "[x]" } else { "[ ]" };
            let style = if checked {
                Style::default().fg(ACCENT)
            } else {
                text_style
            };
            spans.push(Span::styled(format!(" {} {}", mark, option.label()), style));
        }

        if self.filters.pricing.includes_paid() {
            let range = self.filters.price_range;
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("${} ━━━━ ${}", range.min(), range.max()),
                Style::default().fg(ACCENT),
            ));
        }

        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(
            format!("Sort by: {}", self.filters.sort_by.label()),
            text_style,
        ));
        Line::from(spans)
    }

    fn url_line(&self) -> Line<'static> {
        Line::from(Span::styled(
            format!(" {}", self.url),
            Style::default().fg(MUTED_TEXT),
        ))
    }
}
