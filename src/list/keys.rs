//! Key bindings of the list view.
//!
//! - **Rows**: `↑/k`, `↓/j`
//! - **Pages**: `←/h/pgup`, `→/l/pgdown`
//! - **Filters**: `/` search (`enter` keeps the term, `esc` drops it), `c`
//!   next category, `esc` clears both filters
//! - **Mutations**: `d` delete row, `D` clear all, each answered with `y`/`n`
//! - **Other**: `t` live tail, `?` help, `q`/`ctrl+c` quit

use crate::key;

/// Bindings of the list view. Bindings for features the view was not
/// configured with (categories, live tail) start disabled and stay out of
/// the help.
#[derive(Debug, Clone)]
pub struct ListKeyMap {
    /// Select the row above.
    pub cursor_up: key::Binding,
    /// Select the row below.
    pub cursor_down: key::Binding,
    /// Previous page.
    pub prev_page: key::Binding,
    /// Next page.
    pub next_page: key::Binding,
    /// Focus the search box.
    pub search: key::Binding,
    /// Leave the search box keeping the term.
    pub accept_search: key::Binding,
    /// Leave the search box dropping the term.
    pub cancel_search: key::Binding,
    /// Reset search and category.
    pub clear_filters: key::Binding,
    /// Next category option.
    pub cycle_category: key::Binding,
    /// Ask to delete the selected row.
    pub delete: key::Binding,
    /// Ask to delete every record.
    pub clear_all: key::Binding,
    /// Answer yes to a pending confirmation.
    pub confirm_yes: key::Binding,
    /// Answer no to a pending confirmation.
    pub confirm_no: key::Binding,
    /// Start or stop the live tail.
    pub toggle_tail: key::Binding,
    /// Expand or collapse the help.
    pub toggle_help: key::Binding,
    /// Quit.
    pub quit: key::Binding,
    /// Quit from any mode, including while typing a search.
    pub force_quit: key::Binding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::new_binding(vec![
                key::with_keys_str(&["up", "k"]),
                key::with_help("↑/k", "up"),
            ]),
            cursor_down: key::new_binding(vec![
                key::with_keys_str(&["down", "j"]),
                key::with_help("↓/j", "down"),
            ]),
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["left", "h", "pgup"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["right", "l", "pgdown"]),
                key::with_help("→/l", "next page"),
            ]),
            search: key::new_binding(vec![
                key::with_keys_str(&["/"]),
                key::with_help("/", "search"),
            ]),
            accept_search: key::new_binding(vec![
                key::with_keys_str(&["enter", "tab"]),
                key::with_help("enter", "apply search"),
            ]),
            cancel_search: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "cancel"),
            ]),
            clear_filters: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "clear filters"),
                key::with_disabled(),
            ]),
            cycle_category: key::new_binding(vec![
                key::with_keys_str(&["c"]),
                key::with_help("c", "category"),
                key::with_disabled(),
            ]),
            delete: key::new_binding(vec![
                key::with_keys_str(&["d", "delete"]),
                key::with_help("d", "delete"),
            ]),
            clear_all: key::new_binding(vec![
                key::with_keys_str(&["D"]),
                key::with_help("D", "clear all"),
            ]),
            confirm_yes: key::new_binding(vec![
                key::with_keys_str(&["y", "Y"]),
                key::with_help("y", "confirm"),
            ]),
            confirm_no: key::new_binding(vec![
                key::with_keys_str(&["n", "N", "esc"]),
                key::with_help("n", "cancel"),
            ]),
            toggle_tail: key::new_binding(vec![
                key::with_keys_str(&["t"]),
                key::with_help("t", "live tail"),
                key::with_disabled(),
            ]),
            toggle_help: key::new_binding(vec![
                key::with_keys_str(&["?"]),
                key::with_help("?", "more"),
            ]),
            quit: key::new_binding(vec![
                key::with_keys_str(&["q"]),
                key::with_help("q", "quit"),
            ]),
            force_quit: key::new_binding(vec![
                key::with_keys_str(&["ctrl+c"]),
                key::with_help("ctrl+c", "force quit"),
            ]),
        }
    }
}
