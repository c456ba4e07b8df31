use crate::catalog::Item;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{card_rect, grid_rows, layout_regions};
use crate::ui::theme::{ACCENT, CARD_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let session = app.session();

    let filters = session.filters();
    let url = session.url().to_string();
    frame.render_widget(Header::new(&filters, app.focus(), &url).widget(), header);

    frame.render_widget(Clear, body);
    let visible = session.visible();
    if visible.is_empty() {
        draw_empty(frame, body, session.catalog_len() == 0);
    } else {
        draw_grid(frame, body, app, &visible);
    }

    let footer_widget = Footer::new(session.pagination());
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn draw_empty(frame: &mut Frame<'_>, body: Rect, catalog_empty: bool) {
    let mut lines = vec![Line::from(""), Line::from("No items found")];
    if catalog_empty {
        lines.push(Line::from(Span::styled(
            "The catalog could not be loaded. See the log for details.",
            Style::default().fg(MUTED_TEXT),
        )));
    }
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(HEADER_TEXT));
    frame.render_widget(widget, body);
}

fn draw_grid(frame: &mut Frame<'_>, body: Rect, app: &App, visible: &[&Item]) {
    let columns = app.columns().max(1);
    let rows_fit = grid_rows(body.height);
    let selected_row = app.selected() / columns;
    let first_row = selected_row.saturating_sub(rows_fit.saturating_sub(1));

    for (offset, chunk) in visible
        .chunks(columns)
        .skip(first_row)
        .take(rows_fit)
        .enumerate()
    {
        for (col, item) in chunk.iter().enumerate() {
            let index = (first_row + offset) * columns + col;
            let rect = card_rect(body, columns, offset, col);
            if rect.height == 0 || rect.width == 0 {
                continue;
            }
            let card = card_widget(item, app.image_label(item), index == app.selected());
            frame.render_widget(card, rect);
        }
    }
}

fn card_widget(item: &Item, image_label: String, selected: bool) -> Paragraph<'static> {
    let border_style = if selected {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(CARD_BORDER)
    };
    let image_style = if image_label == "image blocked" {
        Style::default().fg(STATUS_ERROR)
    } else {
        Style::default().fg(MUTED_TEXT)
    };

    let lines = vec![
        Line::from(Span::styled(
            item.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(item.creator.clone(), Style::default().fg(HEADER_TEXT)),
            Span::raw("  "),
            Span::styled(item.price_label(), Style::default().fg(STATUS_OK)),
        ]),
        Line::from(Span::styled(image_label, image_style)),
    ];

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    )
}
