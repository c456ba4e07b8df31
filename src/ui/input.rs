use crate::catalog::PricingOption;
use crate::ui::app::{App, Focus, PRICE_STEP};
use crate::ui::session::PageRequest;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Schedule the delayed load of the next page.
    LoadPage(PageRequest),
}

impl From<Option<PageRequest>> for InputAction {
    fn from(request: Option<PageRequest>) -> Self {
        request.map_or(Self::None, Self::LoadPage)
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    match app.focus() {
        Focus::Search => handle_search_key(app, key),
        Focus::Grid => handle_grid_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) -> InputAction {
    if is_ctrl_char(key, 'u') {
        app.clear_search();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => app.set_focus(Focus::Grid),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(ch)
        }
        _ => {}
    }
    InputAction::None
}

fn handle_grid_key(app: &mut App, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('/') | KeyCode::Tab => app.set_focus(Focus::Search),
        KeyCode::Char('p') => app.toggle_pricing(PricingOption::Paid),
        KeyCode::Char('f') => app.toggle_pricing(PricingOption::Free),
        KeyCode::Char('v') => app.toggle_pricing(PricingOption::ViewOnly),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('r') => app.reset_filters(),
        KeyCode::Char('[') => app.shift_price_min(-PRICE_STEP),
        KeyCode::Char(']') => app.shift_price_min(PRICE_STEP),
        KeyCode::Char('{') => app.shift_price_max(-PRICE_STEP),
        KeyCode::Char('}') => app.shift_price_max(PRICE_STEP),
        KeyCode::Left => return app.move_selection(-1).into(),
        KeyCode::Right => return app.move_selection(1).into(),
        KeyCode::Up => return app.move_rows(-1).into(),
        KeyCode::Down => return app.move_rows(1).into(),
        KeyCode::PageDown | KeyCode::End => return app.select_last().into(),
        KeyCode::PageUp | KeyCode::Home => app.select_first(),
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
