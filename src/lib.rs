#![warn(missing_docs)]

//! # admin-widgets
//!
//! Filterable, paginated record lists for terminal admin dashboards built
//! with [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! Every list page of an admin dashboard (users, products, transactions,
//! notifications, logs, activity, feedback, team, webhooks) does the same
//! thing: a search box, a category select box, a fixed-size page of rows and
//! add/edit/delete/clear mutations. This crate implements that once:
//!
//! - [`controller::ListController`] owns a collection of any
//!   [`record::Record`] type and derives the filtered, paginated view.
//! - [`list::Model`] is the interactive bubbletea-rs component on top of it,
//!   with confirmation prompts, a status line and contextual help.
//! - [`records`] holds the dashboard's record types, [`export`] turns a
//!   collection into CSV or JSON and [`livetail`] drives the live log feed.
//! - [`settings::Settings`] carries the cosmetic configuration, stored as TOML.
//!
//! ## Quick Start
//!
//! ```rust
//! use admin_widgets::prelude::*;
//! use admin_widgets::records::{User, UserPlan, UserStatus};
//!
//! let mut users = ListController::new(vec![
//!     User::new("Awin Nata", "awinnata@web.app", UserStatus::Active, UserPlan::Premium),
//!     User::new("Anna Smith", "anna@example.com", UserStatus::Pending, UserPlan::Standard),
//!     User::new("Michael Lee", "michael@example.com", UserStatus::Inactive, UserPlan::Basic),
//! ])
//! .with_page_size(2);
//!
//! assert_eq!(users.total_pages(), 2);
//! users.set_search_term("example");
//! assert_eq!(users.filtered_count(), 2);
//! assert_eq!(users.total_pages(), 1);
//!
//! let id = users.add(User::new("Rina", "rina@web.app", UserStatus::Active, UserPlan::Basic));
//! assert_eq!(id, RecordId(4));
//! ```
//!
//! ## Key Bindings
//!
//! Components describe their keys with [`key::Binding`]s and expose them to
//! the help line through [`help::KeyMap`]:
//!
//! ```rust
//! use admin_widgets::help::KeyMap;
//! use admin_widgets::key::{self, Binding};
//!
//! struct Keys {
//!     refresh: Binding,
//! }
//!
//! impl KeyMap for Keys {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.refresh]
//!     }
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.refresh]]
//!     }
//! }
//!
//! let keys = Keys {
//!     refresh: key::new_binding(vec![
//!         key::with_keys_str(&["r", "ctrl+r"]),
//!         key::with_help("r", "refresh"),
//!     ]),
//! };
//! let help = admin_widgets::help::Model::new();
//! assert!(help.view(&keys).contains("refresh"));
//! ```
//!
//! ## Logging
//!
//! Mutations and filter changes are reported through `tracing` at `debug`,
//! page navigation at `trace`. The crate never installs a subscriber.

use bubbletea_rs::Cmd;

pub mod controller;
pub mod error;
pub mod export;
pub mod help;
pub mod key;
pub mod list;
pub mod livetail;
pub mod paginator;
pub mod record;
pub mod records;
pub mod searchinput;
pub mod settings;
pub mod table;

/// Focus management shared by the components that take keyboard input.
///
/// ```rust
/// use admin_widgets::prelude::*;
///
/// fn cycle<T: Component>(component: &mut T) {
///     let _ = component.focus();
///     assert!(component.focused());
///     component.blur();
///     assert!(!component.focused());
/// }
///
/// cycle(&mut searchinput_new());
/// ```
pub trait Component {
    /// Starts taking keyboard input. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Stops taking keyboard input.
    fn blur(&mut self);

    /// Whether the component takes keyboard input.
    fn focused(&self) -> bool;
}

impl Component for searchinput::Model {
    fn focus(&mut self) -> Option<Cmd> {
        searchinput::Model::focus(self);
        None
    }

    fn blur(&mut self) {
        searchinput::Model::blur(self);
    }

    fn focused(&self) -> bool {
        searchinput::Model::focused(self)
    }
}

pub use controller::{CategoryFilter, ListController, ViewState};
pub use error::{Error, Result};
pub use export::{Export, ExportFormat, Exportable};
pub use list::Model as List;
pub use record::{IdSequence, Record, RecordId};
pub use settings::{Settings, Theme};
pub use table::Tabular;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::controller::{CategoryFilter, ListController, SortFn, ViewState, DEFAULT_PAGE_SIZE};
    pub use crate::error::{Error, Result};
    pub use crate::export::{export, Export, ExportFormat, Exportable};
    pub use crate::help::{KeyMap, Model as HelpModel};
    pub use crate::key::{new_binding, with_disabled, with_help, with_keys, with_keys_str, Binding, KeyPress};
    pub use crate::list::{Confirm, ListKeyMap, ListStyles, Model as List, Status as ListStatus};
    pub use crate::livetail::{
        new as livetail_new, Model as LiveTail, TailUpdate, TickMsg as LiveTailTickMsg,
    };
    pub use crate::paginator::Model as Paginator;
    pub use crate::record::{IdSequence, Record, RecordId};
    pub use crate::searchinput::{new as searchinput_new, Model as SearchInput};
    pub use crate::settings::{Settings, Theme};
    pub use crate::table::{Column, Model as Table, Tabular};
    pub use crate::Component;
}
