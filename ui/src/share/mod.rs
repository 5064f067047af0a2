//! The share-preview subsystem: filter form, fetch pipeline, preview
//! table, friend search, and existing-share panels.

mod columns;
pub use columns::columns_for;

mod machine;
pub use machine::{FetchOutcome, PreviewMachine, PreviewPhase};

pub mod fetch;

mod table;
pub use table::{PreviewTable, PreviewTableModel};

mod controller;
pub use controller::{use_preview_controller, PreviewController};

mod form;
pub use form::{FilterPanel, SubTypeCheckboxes};

mod friends;
pub use friends::FriendSearch;

mod shares;
pub use shares::{scope_badges, ShareRole, ShareSummary, SharesPanel};

mod view;
pub use view::SharePage;
