use dioxus::prelude::*;

use crate::core::config::DEFAULT_CATALOG;
use crate::share::controller::use_preview_controller;
use crate::share::form::FilterPanel;
use crate::share::friends::FriendSearch;
use crate::share::shares::{ShareRole, SharesPanel};
use crate::share::table::PreviewTable;

/// The share view: filters on one side, the live preview next to it, and
/// the existing-share panels underneath.
#[component]
pub fn SharePage() -> Element {
    let controller = use_preview_controller(&DEFAULT_CATALOG);

    rsx! {
        div { class: "share-grid",
            section { class: "share-card share-card--filters",
                div { class: "share-card__header",
                    h2 { "Filters" }
                }
                FilterPanel { controller }
            }

            section { class: "share-card share-card--preview",
                div { class: "share-card__header",
                    h2 { "Preview" }
                }
                PreviewTable {
                    model: (controller.table)(),
                    error: (controller.error)(),
                }
            }

            section { class: "share-card",
                div { class: "share-card__header",
                    h2 { "Send to a friend" }
                }
                FriendSearch {}
            }

            div { class: "share-grid__lists",
                SharesPanel {
                    title: "Shares sent",
                    role: ShareRole::Sent,
                    records: Vec::new(),
                    controller,
                }
                SharesPanel {
                    title: "Shares received",
                    role: ShareRole::Received,
                    records: Vec::new(),
                    controller,
                }
            }
        }
    }
}
