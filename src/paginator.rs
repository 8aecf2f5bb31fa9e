//! Page state for paginated lists.
//!
//! The paginator only tracks which page is current and how many pages exist;
//! it never holds the content itself. Pages are 1-based: the first page is
//! `1` and `page` always satisfies `1 <= page <= total_pages`, with
//! `total_pages >= 1` even when there is nothing to show.

use crate::help;
use crate::key;
use bubbletea_rs::{KeyMsg, Msg};

/// How the paginator renders itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Page numbers, e.g. `"2/5"`.
    #[default]
    Arabic,
    /// One dot per page, e.g. `"○ • ○"`.
    Dots,
}

/// Key bindings for page navigation.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'.
    pub prev_page: key::Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'.
    pub next_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
        }
    }
}

impl help::KeyMap for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.prev_page, &self.next_page]]
    }
}

/// Pagination state and rendering.
///
/// # Examples
///
/// ```rust
/// use admin_widgets::paginator::Model;
///
/// let mut paginator = Model::new().with_per_page(10).with_total_items(95);
/// assert_eq!(paginator.total_pages, 10);
/// assert!(paginator.on_first_page());
///
/// paginator.next_page();
/// assert_eq!(paginator.page, 2);
/// assert_eq!(paginator.slice_bounds(95), (10, 20));
///
/// // Out-of-range requests are ignored.
/// paginator.set_page(42);
/// assert_eq!(paginator.page, 2);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Rendering style.
    pub paginator_type: Type,
    /// The current page, starting at 1.
    pub page: usize,
    /// Items per page, at least 1.
    pub per_page: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
    /// Active page marker in dots mode.
    pub active_dot: String,
    /// Inactive page marker in dots mode.
    pub inactive_dot: String,
    /// Format for Arabic mode; the two `%d` are the page and the page count.
    pub arabic_format: String,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            page: 1,
            per_page: 1,
            total_pages: 1,
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a paginator on page 1 of 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total number of items (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the page size (builder pattern). Zero is clamped to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the rendering style (builder pattern).
    pub fn with_type(mut self, paginator_type: Type) -> Self {
        self.paginator_type = paginator_type;
        self
    }

    /// Sets the page size. Zero is clamped to 1.
    ///
    /// Call [`set_total_items`](Self::set_total_items) afterwards to recompute
    /// the page count.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Recomputes `total_pages` as `max(1, ceil(items / per_page))` and clamps
    /// the current page into range.
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = items.div_ceil(self.per_page).max(1);
        self.clamp_page();
    }

    /// Moves to page `page` if it lies within `1..=total_pages`.
    ///
    /// Returns false and leaves the current page untouched otherwise.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages {
            return false;
        }
        self.page = page;
        true
    }

    /// Jumps back to the first page.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.total_pages);
    }

    /// Number of items on the current page for a list of `total_items`.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.slice_bounds(total_items);
        end - start
    }

    /// Start (inclusive) and end (exclusive) indices of the current page in a
    /// list of `length` items. Both are clamped to `length`.
    pub fn slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = ((self.page - 1) * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Goes back one page unless already on the first page.
    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    /// Goes forward one page unless already on the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// True on page 1.
    pub fn on_first_page(&self) -> bool {
        self.page == 1
    }

    /// True on the last page.
    pub fn on_last_page(&self) -> bool {
        self.page == self.total_pages
    }

    /// Handles page navigation keys. Returns true if the page changed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return false;
        };
        self.handle_key(key_msg)
    }

    /// Handles a key press directly. Returns true if the page changed.
    pub fn handle_key(&mut self, key_msg: &KeyMsg) -> bool {
        let before = self.page;
        if self.keymap.next_page.matches(key_msg) {
            self.next_page();
        } else if self.keymap.prev_page.matches(key_msg) {
            self.prev_page();
        }
        before != self.page
    }

    /// Renders the paginator.
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Arabic => self.arabic_view(),
            Type::Dots => self.dots_view(),
        }
    }

    fn arabic_view(&self) -> String {
        self.arabic_format
            .replacen("%d", &self.page.to_string(), 1)
            .replacen("%d", &self.total_pages.to_string(), 1)
    }

    fn dots_view(&self) -> String {
        (1..=self.total_pages)
            .map(|i| {
                if i == self.page {
                    self.active_dot.as_str()
                } else {
                    self.inactive_dot.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    #[test]
    fn test_empty_list_has_one_page() {
        let p = Model::new().with_per_page(5).with_total_items(0);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.page, 1);
        assert_eq!(p.slice_bounds(0), (0, 0));
        assert_eq!(p.items_on_page(0), 0);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let p = Model::new().with_per_page(5).with_total_items(11);
        assert_eq!(p.total_pages, 3);
    }

    #[test]
    fn test_zero_per_page_clamped() {
        let p = Model::new().with_per_page(0);
        assert_eq!(p.per_page, 1);
    }

    #[test]
    fn test_shrinking_clamps_page() {
        let mut p = Model::new().with_per_page(2).with_total_items(6);
        assert!(p.set_page(3));
        p.set_total_items(4);
        assert_eq!(p.total_pages, 2);
        assert_eq!(p.page, 2);
    }

    #[test]
    fn test_set_page_out_of_range_is_ignored() {
        let mut p = Model::new().with_per_page(2).with_total_items(6);
        assert!(p.set_page(2));
        assert!(!p.set_page(0));
        assert!(!p.set_page(4));
        assert_eq!(p.page, 2);
    }

    #[test]
    fn test_last_page_slice_is_partial() {
        let mut p = Model::new().with_per_page(4).with_total_items(10);
        p.set_page(3);
        assert_eq!(p.slice_bounds(10), (8, 10));
        assert_eq!(p.items_on_page(10), 2);
    }

    #[test]
    fn test_navigation_stops_at_bounds() {
        let mut p = Model::new().with_per_page(1).with_total_items(2);
        p.prev_page();
        assert_eq!(p.page, 1);
        p.next_page();
        p.next_page();
        assert_eq!(p.page, 2);
        assert!(p.on_last_page());
    }

    #[test]
    fn test_key_navigation() {
        let mut p = Model::new().with_per_page(1).with_total_items(3);
        assert!(p.update(&key(KeyCode::Right)));
        assert!(p.update(&key(KeyCode::Char('l'))));
        assert!(!p.update(&key(KeyCode::PageDown)));
        assert_eq!(p.page, 3);
        assert!(p.update(&key(KeyCode::Char('h'))));
        assert_eq!(p.page, 2);
    }

    #[test]
    fn test_views() {
        let mut p = Model::new().with_per_page(1).with_total_items(3);
        p.next_page();
        assert_eq!(p.view(), "2/3");
        p.paginator_type = Type::Dots;
        assert_eq!(p.view(), "○ • ○");
    }
}
