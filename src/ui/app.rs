use reqwest::Url;

use crate::catalog::{ImagePolicy, Item, PricingOption};
use crate::ui::layout::grid_columns;
use crate::ui::session::{PageRequest, Session};
use crate::ui::store::StoreIntent;

/// Price slider step for one key press.
pub const PRICE_STEP: i64 = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Grid,
    Search,
}

/// Terminal front end state around one [`Session`].
pub struct App {
    should_quit: bool,
    focus: Focus,
    session: Session,
    images: ImagePolicy,
    /// Index of the highlighted card within the revealed window.
    selected: usize,
    columns: usize,
    generation: u64,
}

impl App {
    pub fn new(session: Session, images: ImagePolicy) -> Self {
        let generation = session.pagination().generation;
        Self {
            should_quit: false,
            focus: Focus::Grid,
            session,
            images,
            selected: 0,
            columns: 1,
            generation,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn on_resize(&mut self, cols: u16, _rows: u16) {
        self.columns = grid_columns(cols);
    }

    /// Short description of where an item's image comes from.
    pub fn image_label(&self, item: &Item) -> String {
        if !self.images.allows(&item.image_path) {
            return "image blocked".to_string();
        }
        Url::parse(&item.image_path)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_default()
    }

    pub fn push_search_char(&mut self, ch: char) {
        let mut text = self.session.filters().search_text;
        text.push(ch);
        self.apply(StoreIntent::SetSearchText(text));
    }

    pub fn pop_search_char(&mut self) {
        let mut text = self.session.filters().search_text;
        if text.pop().is_some() {
            self.apply(StoreIntent::SetSearchText(text));
        }
    }

    pub fn clear_search(&mut self) {
        self.apply(StoreIntent::SetSearchText(String::new()));
    }

    pub fn toggle_pricing(&mut self, option: PricingOption) {
        self.apply(StoreIntent::TogglePricingOption(option));
    }

    pub fn cycle_sort(&mut self) {
        let next = self.session.filters().sort_by.next();
        self.apply(StoreIntent::SetSortBy(next));
    }

    /// Move the lower price bound. Only meaningful while `Paid` is selected.
    pub fn shift_price_min(&mut self, delta: i64) {
        let filters = self.session.filters();
        if filters.pricing.includes_paid() {
            self.apply(StoreIntent::SetPriceRange(filters.price_range.shift_min(delta)));
        }
    }

    /// Move the upper price bound. Only meaningful while `Paid` is selected.
    pub fn shift_price_max(&mut self, delta: i64) {
        let filters = self.session.filters();
        if filters.pricing.includes_paid() {
            self.apply(StoreIntent::SetPriceRange(filters.price_range.shift_max(delta)));
        }
    }

    pub fn reset_filters(&mut self) {
        self.apply(StoreIntent::ResetFilters);
    }

    /// Move the highlight by `delta` cards. Reaching the last row of the
    /// revealed window counts as scrolling near the bottom.
    pub fn move_selection(&mut self, delta: isize) -> Option<PageRequest> {
        let revealed = self.session.pagination().revealed;
        if revealed == 0 {
            self.selected = 0;
            return None;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, revealed as isize - 1) as usize;
        self.check_near_bottom()
    }

    pub fn move_rows(&mut self, rows: isize) -> Option<PageRequest> {
        self.move_selection(rows * self.columns as isize)
    }

    pub fn select_last(&mut self) -> Option<PageRequest> {
        let revealed = self.session.pagination().revealed;
        self.selected = revealed.saturating_sub(1);
        self.check_near_bottom()
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn on_page_loaded(&mut self, request: PageRequest) {
        self.session.page_loaded(request);
    }

    fn check_near_bottom(&mut self) -> Option<PageRequest> {
        let revealed = self.session.pagination().revealed;
        let columns = self.columns.max(1);
        if revealed == 0 || self.selected / columns != (revealed - 1) / columns {
            return None;
        }
        self.session.near_bottom()
    }

    fn apply(&mut self, intent: StoreIntent) {
        if !self.session.dispatch(intent) {
            return;
        }
        let pagination = self.session.pagination();
        if pagination.generation != self.generation {
            self.generation = pagination.generation;
            self.selected = 0;
        }
    }
}
