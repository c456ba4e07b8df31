use ratatui::layout::Rect;

pub const HEADER_HEIGHT: u16 = 5;
pub const FOOTER_HEIGHT: u16 = 3;
pub const CARD_WIDTH: u16 = 34;
pub const CARD_HEIGHT: u16 = 5;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Number of card columns that fit in `width`, at least one.
pub fn grid_columns(width: u16) -> usize {
    (width / CARD_WIDTH).max(1) as usize
}

/// Number of card rows that fit in `height`, at least one.
pub fn grid_rows(height: u16) -> usize {
    (height / CARD_HEIGHT).max(1) as usize
}

/// Cell of the card at (`row`, `col`) relative to the first displayed row.
pub fn card_rect(body: Rect, columns: usize, row: usize, col: usize) -> Rect {
    let width = body.width / columns.max(1) as u16;
    let x = body.x + width * col as u16;
    let y = body.y + CARD_HEIGHT * row as u16;
    Rect {
        x,
        y,
        width,
        height: CARD_HEIGHT.min((body.y + body.height).saturating_sub(y)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_split_the_screen() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 100, 40));
        assert_eq!(header.height, HEADER_HEIGHT);
        assert_eq!(footer.y, 37);
        assert_eq!(body.height, 40 - HEADER_HEIGHT - FOOTER_HEIGHT);
    }

    #[test]
    fn grid_never_has_zero_columns() {
        assert_eq!(grid_columns(10), 1);
        assert_eq!(grid_columns(CARD_WIDTH * 3 + 5), 3);
    }
}
